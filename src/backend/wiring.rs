//! Account wiring: which value goes into each account slot of a call.
//!
//! Rules, first match wins:
//! 1. fixed/program address → program-id constant
//! 2. signer → the caller (or a throwaway key in the unauthorized-signer case)
//! 3. PDA of the instruction itself → its own derived-address variable
//! 4. account named like a PDA produced by a dependency → that PDA's variable
//! 5. anything else → the caller

use std::collections::BTreeMap;

use soltest_core::conventions::PDA_VAR_SUFFIX;
use soltest_core::naming::to_camel_case;

use crate::frontend::idl::{Account, Instruction};

use super::ir::{AccountBinding, AccountValue};

/// How signer slots are filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignerMode {
    Caller,
    Throwaway,
}

/// Variable holding the derived address of a PDA account.
pub fn pda_var(account_name: &str) -> String {
    format!("{}{}", to_camel_case(account_name), PDA_VAR_SUFFIX)
}

/// PDA variables produced by a set of dependency instructions, keyed by account name.
///
/// The first dependency declaring an account name wins.
pub fn dependency_pdas<'a>(dependencies: impl IntoIterator<Item = &'a Instruction>) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    for dep in dependencies {
        for (account, _) in dep.pdas() {
            map.entry(account.name.clone()).or_insert_with(|| pda_var(&account.name));
        }
    }
    map
}

/// Wire every account of a call.
///
/// ## Parameters
/// - `accounts`: the instruction's accounts, in declaration order.
/// - `signers`: how to fill signer slots.
/// - `dependency_pdas`: account name → variable for PDAs created by setup calls (rule 4).
pub fn wire_accounts(
    accounts: &[Account],
    signers: SignerMode,
    dependency_pdas: &BTreeMap<String, String>,
) -> Vec<AccountBinding> {
    accounts
        .iter()
        .map(|account| AccountBinding {
            key: to_camel_case(&account.name),
            value: wire_account(account, signers, dependency_pdas),
        })
        .collect()
}

fn wire_account(account: &Account, signers: SignerMode, dependency_pdas: &BTreeMap<String, String>) -> AccountValue {
    if account.is_fixed_address() {
        return AccountValue::ProgramId;
    }
    if account.signer {
        return match signers {
            SignerMode::Caller => AccountValue::Caller,
            SignerMode::Throwaway => AccountValue::Throwaway,
        };
    }
    if account.is_pda() {
        return AccountValue::Pda(pda_var(&account.name));
    }
    if let Some(var) = dependency_pdas.get(&account.name) {
        return AccountValue::Pda(var.clone());
    }
    AccountValue::Caller
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::idl::{Pda, Seed};

    fn account(name: &str) -> Account {
        Account {
            name: name.into(),
            writable: false,
            signer: false,
            address: None,
            pda: None,
        }
    }

    fn accounts() -> Vec<Account> {
        let mut program = account("token_program");
        program.address = Some("Tokenkeg".into());
        let mut voter = account("voter");
        voter.signer = true;
        let mut ballot = account("ballot_box");
        ballot.pda = Some(Pda {
            seeds: vec![Seed::Const(vec![1])],
        });
        vec![program, voter, ballot, account("poll"), account("recipient")]
    }

    #[test]
    fn test_rules_in_priority_order() {
        let deps = BTreeMap::from([("poll".to_string(), "pollPda".to_string())]);
        let wired = wire_accounts(&accounts(), SignerMode::Caller, &deps);
        let values: Vec<_> = wired.iter().map(|b| (b.key.as_str(), b.value.clone())).collect();
        assert_eq!(
            values,
            vec![
                ("tokenProgram", AccountValue::ProgramId),
                ("voter", AccountValue::Caller),
                ("ballotBox", AccountValue::Pda("ballotBoxPda".into())),
                ("poll", AccountValue::Pda("pollPda".into())),
                ("recipient", AccountValue::Caller),
            ]
        );
    }

    #[test]
    fn test_throwaway_only_replaces_signers() {
        let wired = wire_accounts(&accounts(), SignerMode::Throwaway, &BTreeMap::new());
        assert_eq!(wired[1].value, AccountValue::Throwaway);
        assert_eq!(wired[4].value, AccountValue::Caller);
        assert_eq!(wired[0].value, AccountValue::ProgramId);
    }

    #[test]
    fn test_fixed_signer_stays_program_id() {
        let mut odd = account("system_program");
        odd.signer = true;
        let wired = wire_accounts(&[odd], SignerMode::Throwaway, &BTreeMap::new());
        assert_eq!(wired[0].value, AccountValue::ProgramId);
    }

    #[test]
    fn test_dependency_pdas_first_declaration_wins() {
        let mk = |name: &str| Instruction {
            name: name.into(),
            accounts: vec![Account {
                pda: Some(Pda { seeds: vec![] }),
                ..account("poll_account")
            }],
            args: vec![],
        };
        let a = mk("a");
        let b = mk("b");
        let map = dependency_pdas([&a, &b]);
        assert_eq!(map.len(), 1);
        assert_eq!(map["poll_account"], "pollAccountPda");
    }
}
