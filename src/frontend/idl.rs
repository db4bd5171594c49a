//! Typed IDL model.
//!
//! The model is built once by [`crate::frontend::parser`] and is read-only afterwards. Every analysis and synthesis
//! stage borrows from it.

use std::fmt;

use soltest_core::conventions::SYSTEM_PROGRAM_ACCOUNT;
use soltest_core::naming::{answers_to, strip_alias};

/// A parsed interface description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Idl {
    /// Program name recorded in the document metadata, if any
    pub name: Option<String>,
    /// On-chain program address, if any
    pub address: Option<String>,
    /// Instructions in declaration order
    pub instructions: Vec<Instruction>,
}

impl Idl {
    /// Look up an instruction by name.
    pub fn instruction(&self, name: &str) -> Option<&Instruction> {
        self.instructions.iter().find(|ix| ix.name == name)
    }
}

/// One program instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    pub name: String,
    pub accounts: Vec<Account>,
    pub args: Vec<Arg>,
}

impl Instruction {
    /// Accounts that carry a PDA definition, paired with it, in declaration order.
    pub fn pdas(&self) -> impl Iterator<Item = (&Account, &Pda)> {
        self.accounts
            .iter()
            .filter_map(|account| account.pda.as_ref().map(|pda| (account, pda)))
    }

    /// Whether any account must sign the call.
    pub fn has_signer(&self) -> bool {
        self.accounts.iter().any(|account| account.signer)
    }

    /// Resolve a seed path against this instruction's own arguments.
    pub fn find_arg(&self, path: &str) -> Option<&Arg> {
        self.args.iter().find(|arg| arg.answers_to(path))
    }
}

/// An account slot of an instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub name: String,
    pub writable: bool,
    pub signer: bool,
    /// Fixed well-known address (programs, sysvars)
    pub address: Option<String>,
    pub pda: Option<Pda>,
}

impl Account {
    /// Whether account wiring treats the account as a fixed, well-known address.
    pub fn is_fixed_address(&self) -> bool {
        self.address.is_some() || self.name == SYSTEM_PROGRAM_ACCOUNT
    }

    pub fn is_pda(&self) -> bool {
        self.pda.is_some()
    }
}

/// Program-derived address definition: an ordered seed list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pda {
    pub seeds: Vec<Seed>,
}

/// One input to a PDA derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Seed {
    /// Constant bytes
    Const(Vec<u8>),
    /// The caller's own address; `path` names the account it is read from
    Account { path: String },
    /// The value of an instruction argument
    Arg { path: String },
}

impl Seed {
    pub fn kind(&self) -> SeedKind {
        match self {
            Seed::Const(_) => SeedKind::Const,
            Seed::Account { .. } => SeedKind::Account,
            Seed::Arg { .. } => SeedKind::Arg,
        }
    }
}

/// Seed discriminant, used for shape comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeedKind {
    Const,
    Account,
    Arg,
}

impl fmt::Display for SeedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedKind::Const => write!(f, "const"),
            SeedKind::Account => write!(f, "account"),
            SeedKind::Arg => write!(f, "arg"),
        }
    }
}

/// An instruction argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arg {
    pub name: String,
    pub ty: ArgType,
}

impl Arg {
    pub fn new(name: impl Into<String>, ty: ArgType) -> Self {
        Self { name: name.into(), ty }
    }

    /// Identifier of the generated variable holding this argument.
    pub fn var_name(&self) -> &str {
        strip_alias(&self.name)
    }

    /// Whether this argument is the one a seed `path` refers to.
    pub fn answers_to(&self, path: &str) -> bool {
        answers_to(&self.name, path)
    }
}

/// Recognized argument kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgType {
    /// `u64` / `i64`
    Int64,
    /// `string`
    String,
    /// Anything else; keeps a readable description of the IDL type
    Other(String),
}

impl fmt::Display for ArgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgType::Int64 => write!(f, "int64"),
            ArgType::String => write!(f, "string"),
            ArgType::Other(desc) => write!(f, "{}", desc),
        }
    }
}
