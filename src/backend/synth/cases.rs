//! Test-case construction: success, unauthorized signer, edge values.

use soltest_core::heuristics::{action_for, subject_for};

use super::super::ir::{CaseKind, Invocation, Statement, TestCase};
use super::super::literals::{LiteralCase, literal_for};
use super::super::scope::DeclarationScope;
use super::super::wiring::{SignerMode, wire_accounts};
use super::plan::InstructionPlan;
use super::setup::compose_setup_block;

/// Title of a generated test.
pub fn case_title(kind: CaseKind, instruction_name: &str) -> String {
    let action = action_for(instruction_name);
    let subject = subject_for(instruction_name);
    match kind {
        CaseKind::Success => format!("successfully {action}s {subject}"),
        CaseKind::UnauthorizedSigner => format!("fails to {action} {subject} with unauthorized signer"),
        CaseKind::Edge => format!("handles {action} {subject} with minimal values"),
    }
}

/// Whether a case kind applies to an instruction at all.
fn applies(kind: CaseKind, plan: &InstructionPlan<'_>) -> bool {
    match kind {
        CaseKind::Success => true,
        CaseKind::UnauthorizedSigner => plan.instruction.has_signer(),
        CaseKind::Edge => !plan.instruction.args.is_empty(),
    }
}

/// Build the cases for one planned instruction.
///
/// ## Parameters
/// - `plan`: the instruction's plan.
/// - `suite_scope`: names declared at suite scope.
/// - `base_counter`: counter of the success case; the other kinds use `base + 1` and `base + 2` whether or not
///   they are emitted.
pub fn build_cases(plan: &InstructionPlan<'_>, suite_scope: &DeclarationScope, base_counter: u64) -> Vec<TestCase> {
    CaseKind::ALL
        .iter()
        .enumerate()
        .filter(|(_, kind)| applies(**kind, plan))
        .map(|(offset, kind)| build_case(plan, suite_scope, *kind, base_counter + offset as u64))
        .collect()
}

fn build_case(plan: &InstructionPlan<'_>, suite_scope: &DeclarationScope, kind: CaseKind, counter: u64) -> TestCase {
    let instruction = plan.instruction;
    let block = compose_setup_block(&plan.setups, suite_scope.clone(), counter);
    let mut scope = block.scope;

    let literal_case = match kind {
        CaseKind::Edge => LiteralCase::Edge,
        CaseKind::Success | CaseKind::UnauthorizedSigner => LiteralCase::Success,
    };

    let mut declarations = Vec::new();
    for arg in &instruction.args {
        let name = arg.var_name();
        if scope.declares_arg(name) {
            continue;
        }
        declarations.push(Statement::DeclareArg {
            name: name.to_string(),
            value: literal_for(arg, literal_case, counter),
        });
        scope = scope.with_arg(name);
    }
    for pda in &plan.own_pdas {
        if pda.is_scope_stable() || scope.declares_pda(&pda.account.name) {
            continue;
        }
        declarations.push(Statement::DerivePda(pda.decl()));
        scope = scope.with_pda(&pda.account.name);
    }

    let signers = if kind == CaseKind::UnauthorizedSigner {
        SignerMode::Throwaway
    } else {
        SignerMode::Caller
    };

    TestCase {
        kind,
        title: case_title(kind, &instruction.name),
        instruction: instruction.name.clone(),
        counter,
        setup: block.statements,
        declarations,
        call: Invocation {
            method: plan.method_name.clone(),
            args: instruction.args.iter().map(|arg| arg.var_name().to_string()).collect(),
            accounts: wire_accounts(&instruction.accounts, signers, &plan.dependency_pdas),
        },
    }
}
