//! Setup-block composition.

use super::super::ir::{Invocation, Statement};
use super::super::scope::DeclarationScope;
use super::super::wiring::{SignerMode, dependency_pdas, wire_accounts};
use super::plan::SetupInstruction;

/// Statements that run the setup calls of one test, plus the scope they leave behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupBlock {
    pub statements: Vec<Statement>,
    pub scope: DeclarationScope,
}

/// Compose the setup calls of one test case.
///
/// ## Parameters
/// - `setups`: dependency calls in order.
/// - `scope`: the scope the test starts from (normally a copy of the suite scope).
/// - `counter`: the test case's counter; every setup literal is re-keyed with it.
///
/// ## Notes
/// - An argument variable already in scope is not declared again; the call reuses the existing variable.
/// - Scope-stable PDAs are expected at suite scope and are never declared here.
pub fn compose_setup_block(setups: &[SetupInstruction<'_>], scope: DeclarationScope, counter: u64) -> SetupBlock {
    let mut scope = scope;
    let mut statements = Vec::new();

    for (k, setup) in setups.iter().enumerate() {
        for (name, literal) in &setup.args {
            if scope.declares_arg(name) {
                continue;
            }
            statements.push(Statement::DeclareArg {
                name: name.clone(),
                value: literal.perturbed(counter),
            });
            scope = scope.with_arg(name);
        }

        for pda in &setup.pdas {
            if pda.is_scope_stable() || scope.declares_pda(&pda.account.name) {
                continue;
            }
            statements.push(Statement::DerivePda(pda.decl()));
            scope = scope.with_pda(&pda.account.name);
        }

        let produced = dependency_pdas(setups[..=k].iter().map(|s| s.instruction));
        statements.push(Statement::Invoke(Invocation {
            method: setup.method_name.clone(),
            args: setup.args.iter().map(|(name, _)| name.clone()).collect(),
            accounts: wire_accounts(&setup.instruction.accounts, SignerMode::Caller, &produced),
        }));
    }

    SetupBlock { statements, scope }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{NameHeuristics, SeedExpr};
    use crate::backend::ir::{AccountValue, Literal};
    use crate::backend::synth::plan::plan_instruction;
    use crate::frontend::idl::{Account, Arg, ArgType, Instruction, Pda, Seed};

    fn pda_account(name: &str, seeds: Vec<Seed>) -> Account {
        Account {
            name: name.into(),
            writable: true,
            signer: false,
            address: None,
            pda: Some(Pda { seeds }),
        }
    }

    fn signer(name: &str) -> Account {
        Account {
            name: name.into(),
            writable: true,
            signer: true,
            address: None,
            pda: None,
        }
    }

    fn voting() -> Vec<Instruction> {
        let poll_seeds = || vec![Seed::Arg { path: "poll_id".into() }];
        vec![
            Instruction {
                name: "initialize_poll".into(),
                accounts: vec![signer("signer"), pda_account("poll", poll_seeds())],
                args: vec![Arg::new("_poll_id", ArgType::Int64), Arg::new("description", ArgType::String)],
            },
            Instruction {
                name: "vote".into(),
                accounts: vec![signer("signer"), pda_account("poll", poll_seeds())],
                args: vec![Arg::new("candidate", ArgType::String)],
            },
        ]
    }

    #[test]
    fn test_setup_declares_args_then_pdas_then_calls() {
        let all = voting();
        let plan = plan_instruction(&NameHeuristics, &all[1], &all, false).unwrap();
        let block = compose_setup_block(&plan.setups, DeclarationScope::new(), 4);

        assert_eq!(block.statements.len(), 4);
        assert_eq!(
            block.statements[0],
            Statement::DeclareArg {
                name: "poll_id".into(),
                value: Literal::BigNum(4)
            }
        );
        assert!(matches!(
            &block.statements[1],
            Statement::DeclareArg { name, value: Literal::Phrase { base: "Test description", counter: 4 } }
                if name == "description"
        ));
        let Statement::DerivePda(decl) = &block.statements[2] else {
            panic!("expected a PDA declaration");
        };
        assert_eq!(decl.var, "pollPda");
        assert_eq!(decl.seeds, vec![SeedExpr::IntLe64("poll_id".into())]);

        let Statement::Invoke(call) = &block.statements[3] else {
            panic!("expected the setup call");
        };
        assert_eq!(call.method, "initializePoll");
        assert_eq!(call.args, vec!["poll_id".to_string(), "description".to_string()]);
        assert_eq!(call.accounts[0].value, AccountValue::Caller);
        assert_eq!(call.accounts[1].value, AccountValue::Pda("pollPda".into()));

        assert!(block.scope.declares_arg("poll_id"));
        assert!(block.scope.declares_arg("description"));
        assert!(block.scope.declares_pda("poll"));
    }

    #[test]
    fn test_names_already_in_scope_are_not_redeclared() {
        let all = voting();
        let plan = plan_instruction(&NameHeuristics, &all[1], &all, false).unwrap();
        let scope = DeclarationScope::new()
            .with_arg("description")
            .with_pda("poll");
        let block = compose_setup_block(&plan.setups, scope, 1);

        let declared: Vec<_> = block
            .statements
            .iter()
            .filter_map(|stmt| match stmt {
                Statement::DeclareArg { name, .. } => Some(name.as_str()),
                Statement::DerivePda(decl) => Some(decl.account.as_str()),
                Statement::Invoke(_) => None,
            })
            .collect();
        assert_eq!(declared, ["poll_id"]);
    }

    #[test]
    fn test_no_setups_leaves_scope_untouched() {
        let scope = DeclarationScope::new().with_pda("config");
        let block = compose_setup_block(&[], scope.clone(), 1);
        assert!(block.statements.is_empty());
        assert_eq!(block.scope, scope);
    }
}
