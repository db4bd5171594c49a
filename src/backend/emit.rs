//! TypeScript emission: [`Suite`] → test file text.
//!
//! All layout lives here. Statements are written through a [`SourceWriter`], so indentation follows the configured
//! width at any nesting depth.

use soltest_core::conventions::{
    ANCHOR_PACKAGE, CALLER_SEED, EXPECTED_FAILURE_SENTINEL, PROGRAM_ID_CONSTANT, PROVIDER_KEY, THROWAWAY_KEY,
    TYPES_IMPORT_DIR,
};

use crate::analysis::SeedExpr;

use super::config::GenerateConfig;
use super::ir::{AccountValue, Invocation, Literal, PdaDecl, Statement, Suite, TestCase};
use super::writer::SourceWriter;

/// Comment placed above the setup calls of a test.
const SETUP_COMMENT: &str = "// Setup: create required accounts";

/// Quote a string as a double-quoted TypeScript literal.
pub fn quote_ts(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out.push('"');
    out
}

pub fn render_literal(literal: &Literal) -> String {
    match literal {
        Literal::BigNum(n) => format!("new anchor.BN({n})"),
        Literal::Phrase { base, counter } => quote_ts(&format!("{base}_{counter}")),
        Literal::Str(s) => quote_ts(s),
        Literal::Number(n) => n.to_string(),
    }
}

pub fn render_seed(seed: &SeedExpr) -> String {
    match seed {
        SeedExpr::Bytes(bytes) => {
            let joined = bytes.iter().map(u8::to_string).collect::<Vec<_>>().join(", ");
            format!("Buffer.from([{joined}])")
        }
        SeedExpr::CallerKey => CALLER_SEED.to_string(),
        SeedExpr::IntLe64(var) => format!("{var}.toArrayLike(Buffer, \"le\", 8)"),
        SeedExpr::Utf8(var) => format!("Buffer.from({var})"),
    }
}

pub fn render_account_value(value: &AccountValue) -> &str {
    match value {
        AccountValue::ProgramId => PROGRAM_ID_CONSTANT,
        AccountValue::Caller => PROVIDER_KEY,
        AccountValue::Throwaway => THROWAWAY_KEY,
        AccountValue::Pda(var) => var,
    }
}

/// Render a complete suite.
pub fn emit_suite(suite: &Suite, config: &GenerateConfig) -> String {
    let mut emitter = TsEmitter::new(config);
    emitter.emit_suite(suite);
    emitter.finish()
}

/// Writes suite IR as TypeScript.
pub struct TsEmitter<'c> {
    w: SourceWriter,
    config: &'c GenerateConfig,
}

impl<'c> TsEmitter<'c> {
    pub fn new(config: &'c GenerateConfig) -> Self {
        Self {
            w: SourceWriter::new(config.indent_width),
            config,
        }
    }

    pub fn finish(self) -> String {
        self.w.finish()
    }

    /// Separator after a multi-line list element.
    fn sep(&self, is_last: bool) -> &'static str {
        if self.config.trailing_commas || !is_last { "," } else { "" }
    }

    pub fn emit_suite(&mut self, suite: &Suite) {
        let type_name = &suite.type_name;
        self.w.writeln(&format!("import * as anchor from {};", quote_ts(ANCHOR_PACKAGE)));
        self.w.writeln(&format!("import {{ Program }} from {};", quote_ts(ANCHOR_PACKAGE)));
        self.w.writeln(&format!(
            "import {{ {type_name} }} from {};",
            quote_ts(&format!("{TYPES_IMPORT_DIR}/{}", suite.program_name))
        ));
        self.w.newline();

        self.w
            .writeln(&format!("describe({}, () => {{", quote_ts(&suite.program_name)));
        self.w.indent();
        self.emit_describe_body(suite);
        self.w.dedent();
        self.w.writeln("});");
    }

    fn emit_describe_body(&mut self, suite: &Suite) {
        let type_name = &suite.type_name;
        self.w.writeln("const provider = anchor.AnchorProvider.env();");
        self.w.writeln("anchor.setProvider(provider);");
        self.w
            .writeln(&format!("const program = anchor.workspace.{type_name} as Program<{type_name}>;"));

        if !suite.suite_pdas.is_empty() {
            self.w.newline();
            for decl in &suite.suite_pdas {
                self.emit_pda_decl(decl);
            }
        }

        for test in &suite.tests {
            self.w.newline();
            self.emit_test(test);
        }
    }

    fn emit_test(&mut self, test: &TestCase) {
        self.w.writeln(&format!("it({}, async () => {{", quote_ts(&test.title)));
        self.w.indent();

        if !test.setup.is_empty() {
            self.w.writeln(SETUP_COMMENT);
            for stmt in &test.setup {
                self.emit_statement(stmt);
            }
            self.w.newline();
        }

        if !test.declarations.is_empty() {
            for stmt in &test.declarations {
                self.emit_statement(stmt);
            }
            self.w.newline();
        }

        if test.kind.expects_failure() {
            self.w.writeln("try {");
            self.w.indent();
            self.emit_invocation(&test.call);
            self.w
                .writeln(&format!("throw new Error({});", quote_ts(EXPECTED_FAILURE_SENTINEL)));
            self.w.dedent();
            self.w.writeln("} catch (err: any) {");
            self.w.indent();
            self.w.writeln(&format!(
                "if (err.message === {}) throw err;",
                quote_ts(EXPECTED_FAILURE_SENTINEL)
            ));
            self.w.dedent();
            self.w.writeln("}");
        } else {
            self.emit_invocation(&test.call);
        }

        self.w.dedent();
        self.w.writeln("});");
    }

    fn emit_statement(&mut self, stmt: &Statement) {
        match stmt {
            Statement::DeclareArg { name, value } => {
                self.w.writeln(&format!("const {name} = {};", render_literal(value)));
            }
            Statement::DerivePda(decl) => self.emit_pda_decl(decl),
            Statement::Invoke(call) => self.emit_invocation(call),
        }
    }

    fn emit_pda_decl(&mut self, decl: &PdaDecl) {
        self.w.writeln(&format!(
            "const [{}] = anchor.web3.PublicKey.findProgramAddressSync(",
            decl.var
        ));
        self.w.indent();
        if decl.seeds.is_empty() {
            self.w.writeln("[],");
        } else {
            let last = decl.seeds.len() - 1;
            let lines: Vec<String> = decl
                .seeds
                .iter()
                .enumerate()
                .map(|(i, seed)| format!("{}{}", render_seed(seed), self.sep(i == last)))
                .collect();
            self.w.block("[", "],", |w| lines.iter().for_each(|line| w.writeln(line)));
        }
        self.w.writeln("program.programId");
        self.w.dedent();
        self.w.writeln(");");
    }

    fn emit_invocation(&mut self, call: &Invocation) {
        self.w.writeln("await program.methods");
        self.w.indent();
        self.w.writeln(&format!(".{}({})", call.method, call.args.join(", ")));
        if call.accounts.is_empty() {
            self.w.writeln(".accounts({})");
        } else {
            let last = call.accounts.len() - 1;
            let lines: Vec<String> = call
                .accounts
                .iter()
                .enumerate()
                .map(|(i, binding)| {
                    format!(
                        "{}: {}{}",
                        binding.key,
                        render_account_value(&binding.value),
                        self.sep(i == last)
                    )
                })
                .collect();
            self.w
                .block(".accounts({", "})", |w| lines.iter().for_each(|line| w.writeln(line)));
        }
        self.w.writeln(".rpc();");
        self.w.dedent();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::ir::{AccountBinding, CaseKind};

    fn call() -> Invocation {
        Invocation {
            method: "vote".into(),
            args: vec!["candidate".into()],
            accounts: vec![
                AccountBinding {
                    key: "signer".into(),
                    value: AccountValue::Throwaway,
                },
                AccountBinding {
                    key: "poll".into(),
                    value: AccountValue::Pda("pollPda".into()),
                },
            ],
        }
    }

    // ============================================================================
    // Expression rendering
    // ============================================================================

    #[test]
    fn test_quote_ts_escapes() {
        assert_eq!(quote_ts("plain"), "\"plain\"");
        assert_eq!(quote_ts("say \"hi\"\n"), "\"say \\\"hi\\\"\\n\"");
        assert_eq!(quote_ts("a\\b"), "\"a\\\\b\"");
    }

    #[test]
    fn test_render_literals() {
        assert_eq!(render_literal(&Literal::BigNum(3)), "new anchor.BN(3)");
        assert_eq!(
            render_literal(&Literal::Phrase {
                base: "Alice",
                counter: 5
            }),
            "\"Alice_5\""
        );
        assert_eq!(render_literal(&Literal::Str(String::new())), "\"\"");
        assert_eq!(render_literal(&Literal::Number(1)), "1");
    }

    #[test]
    fn test_render_seeds() {
        assert_eq!(render_seed(&SeedExpr::Bytes(vec![112, 111])), "Buffer.from([112, 111])");
        assert_eq!(render_seed(&SeedExpr::Bytes(vec![])), "Buffer.from([])");
        assert_eq!(render_seed(&SeedExpr::CallerKey), "provider.wallet.publicKey.toBuffer()");
        assert_eq!(
            render_seed(&SeedExpr::IntLe64("poll_id".into())),
            "poll_id.toArrayLike(Buffer, \"le\", 8)"
        );
        assert_eq!(render_seed(&SeedExpr::Utf8("title".into())), "Buffer.from(title)");
    }

    // ============================================================================
    // Statement layout
    // ============================================================================

    #[test]
    fn test_pda_decl_layout() {
        let config = GenerateConfig::default();
        let mut emitter = TsEmitter::new(&config);
        emitter.emit_pda_decl(&PdaDecl {
            account: "poll".into(),
            var: "pollPda".into(),
            seeds: vec![SeedExpr::IntLe64("poll_id".into())],
        });
        assert_eq!(
            emitter.finish(),
            "const [pollPda] = anchor.web3.PublicKey.findProgramAddressSync(\n  [\n    poll_id.toArrayLike(Buffer, \"le\", 8),\n  ],\n  program.programId\n);\n"
        );
    }

    #[test]
    fn test_invocation_without_trailing_commas() {
        let config = GenerateConfig::default().with_trailing_commas(false).with_indent_width(4);
        let mut emitter = TsEmitter::new(&config);
        emitter.emit_invocation(&call());
        assert_eq!(
            emitter.finish(),
            "await program.methods\n    .vote(candidate)\n    .accounts({\n        signer: anchor.web3.Keypair.generate().publicKey,\n        poll: pollPda\n    })\n    .rpc();\n"
        );
    }

    #[test]
    fn test_failure_case_wraps_call() {
        let config = GenerateConfig::default();
        let mut emitter = TsEmitter::new(&config);
        emitter.emit_test(&TestCase {
            kind: CaseKind::UnauthorizedSigner,
            title: "fails to cast vote for data with unauthorized signer".into(),
            instruction: "vote".into(),
            counter: 2,
            setup: vec![],
            declarations: vec![Statement::DeclareArg {
                name: "candidate".into(),
                value: Literal::Phrase {
                    base: "Alice",
                    counter: 2,
                },
            }],
            call: call(),
        });
        let text = emitter.finish();
        assert!(text.starts_with("it(\"fails to cast vote for data with unauthorized signer\", async () => {\n"));
        assert!(text.contains("  const candidate = \"Alice_2\";\n\n  try {\n    await program.methods\n"));
        assert!(text.contains("    throw new Error(\"Expected to fail\");\n  } catch (err: any) {\n"));
        assert!(text.contains("    if (err.message === \"Expected to fail\") throw err;\n  }\n"));
        assert!(text.ends_with("});\n"));
    }

    #[test]
    fn test_empty_suite() {
        let suite = Suite {
            program_name: "counter".into(),
            type_name: "Counter".into(),
            suite_pdas: vec![],
            tests: vec![],
        };
        let text = emit_suite(&suite, &GenerateConfig::default());
        assert_eq!(
            text,
            "import * as anchor from \"@coral-xyz/anchor\";\n\
             import { Program } from \"@coral-xyz/anchor\";\n\
             import { Counter } from \"../../target/types/counter\";\n\
             \n\
             describe(\"counter\", () => {\n\
             \x20 const provider = anchor.AnchorProvider.env();\n\
             \x20 anchor.setProvider(provider);\n\
             \x20 const program = anchor.workspace.Counter as Program<Counter>;\n\
             });\n"
        );
    }
}
