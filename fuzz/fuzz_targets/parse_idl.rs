#![no_main]

use libfuzzer_sys::fuzz_target;
use soltest::{GenerateConfig, generate, parse_idl};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    // Any IDL that parses must generate without panicking; strict mode may still reject it.
    if let Ok(idl) = parse_idl(text, "fuzz.json") {
        let _ = generate(&idl, "fuzz", &GenerateConfig::default().with_all_instructions());
        let _ = generate(&idl, "fuzz", &GenerateConfig::default().with_strict_seeds(true));
    }
});
