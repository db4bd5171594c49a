//! Suite IR: the structured form of a generated test suite.
//!
//! The synthesizer builds these values; [`crate::backend::emit`] renders them. Nothing here knows TypeScript
//! syntax, so tests can assert on structure instead of text.

use std::fmt;

use crate::analysis::SeedExpr;

/// A literal bound to an argument variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    /// 64-bit integer, emitted as a big-number constructor
    BigNum(u64),
    /// Representative phrase suffixed with a counter for uniqueness (`"Test Title_4"`)
    Phrase { base: &'static str, counter: u64 },
    /// Plain string
    Str(String),
    /// Plain number, used for argument types without a dedicated encoding
    Number(u64),
}

impl Literal {
    /// Re-key a literal for another call site.
    ///
    /// Big numbers and phrases take the new counter; plain strings and numbers stay as they are.
    pub fn perturbed(&self, counter: u64) -> Literal {
        match self {
            Literal::BigNum(_) => Literal::BigNum(counter),
            Literal::Phrase { base, .. } => Literal::Phrase { base: *base, counter },
            other => other.clone(),
        }
    }
}

/// Declaration of a derived address variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdaDecl {
    /// IDL account name
    pub account: String,
    /// Generated variable name
    pub var: String,
    /// Derivation expressions in seed order
    pub seeds: Vec<SeedExpr>,
}

/// Value wired into an account slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountValue {
    /// Well-known program address
    ProgramId,
    /// The wallet running the suite
    Caller,
    /// A freshly generated key unrelated to the wallet
    Throwaway,
    /// A derived-address variable
    Pda(String),
}

/// One `key: value` entry of an accounts object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountBinding {
    pub key: String,
    pub value: AccountValue,
}

/// A program method call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Client method name
    pub method: String,
    /// Argument variables in declaration order
    pub args: Vec<String>,
    pub accounts: Vec<AccountBinding>,
}

/// A statement inside a test body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    DeclareArg { name: String, value: Literal },
    DerivePda(PdaDecl),
    Invoke(Invocation),
}

/// The three test shapes generated per instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseKind {
    Success,
    UnauthorizedSigner,
    Edge,
}

impl CaseKind {
    /// All kinds, in emission order.
    pub const ALL: [CaseKind; 3] = [CaseKind::Success, CaseKind::UnauthorizedSigner, CaseKind::Edge];

    /// Whether the instruction call is expected to fail.
    pub fn expects_failure(self) -> bool {
        self == CaseKind::UnauthorizedSigner
    }
}

impl fmt::Display for CaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseKind::Success => write!(f, "success"),
            CaseKind::UnauthorizedSigner => write!(f, "unauthorized-signer"),
            CaseKind::Edge => write!(f, "edge"),
        }
    }
}

/// One generated `it(...)` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub kind: CaseKind,
    pub title: String,
    /// Instruction under test
    pub instruction: String,
    /// Counter used to keep this case's literals unique
    pub counter: u64,
    /// Setup calls that create prerequisite accounts
    pub setup: Vec<Statement>,
    /// Argument and address declarations for the call under test
    pub declarations: Vec<Statement>,
    /// The call under test
    pub call: Invocation,
}

/// A complete suite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suite {
    /// Program name as used in paths and the suite title
    pub program_name: String,
    /// Program type name exported by the generated client types
    pub type_name: String,
    /// Suite-scope address declarations
    pub suite_pdas: Vec<PdaDecl>,
    pub tests: Vec<TestCase>,
}

impl Suite {
    /// Tests generated for one instruction, in emission order.
    pub fn tests_for<'a>(&'a self, instruction: &'a str) -> impl Iterator<Item = &'a TestCase> + 'a {
        self.tests.iter().filter(move |test| test.instruction == instruction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perturbed_rekeys_counters_only() {
        assert_eq!(Literal::BigNum(1).perturbed(7), Literal::BigNum(7));
        assert_eq!(
            Literal::Phrase {
                base: "Test Title",
                counter: 1
            }
            .perturbed(4),
            Literal::Phrase {
                base: "Test Title",
                counter: 4
            }
        );
        assert_eq!(Literal::Number(1).perturbed(9), Literal::Number(1));
        assert_eq!(Literal::Str(String::new()).perturbed(9), Literal::Str(String::new()));
    }

    #[test]
    fn test_only_unauthorized_case_expects_failure() {
        let failing: Vec<_> = CaseKind::ALL.iter().filter(|k| k.expects_failure()).collect();
        assert_eq!(failing, [&CaseKind::UnauthorizedSigner]);
    }
}
