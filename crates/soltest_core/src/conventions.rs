//! Well-known identifiers of the Anchor TypeScript client used by generated suites.

/// npm package the generated suite imports.
pub const ANCHOR_PACKAGE: &str = "@coral-xyz/anchor";

/// Directory holding the program type definitions, relative to a generated suite file.
pub const TYPES_IMPORT_DIR: &str = "../../target/types";

/// Key of the wallet running the suite.
pub const PROVIDER_KEY: &str = "provider.wallet.publicKey";

/// Expression for a freshly generated key unrelated to the wallet.
pub const THROWAWAY_KEY: &str = "anchor.web3.Keypair.generate().publicKey";

/// Constant used for fixed-address (program) accounts.
pub const PROGRAM_ID_CONSTANT: &str = "anchor.web3.SystemProgram.programId";

/// Seed expression for the caller's own address.
pub const CALLER_SEED: &str = "provider.wallet.publicKey.toBuffer()";

/// IDL account name that always refers to the system program.
pub const SYSTEM_PROGRAM_ACCOUNT: &str = "system_program";

/// Message thrown when a call that should fail succeeds.
pub const EXPECTED_FAILURE_SENTINEL: &str = "Expected to fail";

/// Suffix appended to an account's camelCase name to form its derived-address variable.
pub const PDA_VAR_SUFFIX: &str = "Pda";
