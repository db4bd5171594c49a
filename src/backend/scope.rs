//! Declaration scope: which variables are already declared.
//!
//! A [`DeclarationScope`] is a value. Each generation phase takes the scope it starts from and hands back the scope
//! it leaves behind (`with_*` consume and return), so a phase never consults state another phase mutated behind its
//! back. The suite scope is built once, every test case starts from a copy of it, the setup block extends that copy
//! and the test's own declarations extend what the setup block returned.

use std::collections::BTreeSet;

/// Declared argument variables and derived-address accounts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclarationScope {
    /// Argument variable names
    args: BTreeSet<String>,
    /// PDA account names
    pdas: BTreeSet<String>,
}

impl DeclarationScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an argument variable.
    pub fn with_arg(mut self, name: &str) -> Self {
        self.args.insert(name.to_string());
        self
    }

    /// Record a PDA account.
    pub fn with_pda(mut self, account: &str) -> Self {
        self.pdas.insert(account.to_string());
        self
    }

    pub fn declares_arg(&self, name: &str) -> bool {
        self.args.contains(name)
    }

    pub fn declares_pda(&self, account: &str) -> bool {
        self.pdas.contains(account)
    }
}
