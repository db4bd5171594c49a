//! Per-instruction planning.
//!
//! A plan fixes everything about an instruction that does not depend on the test case: its category, the setup
//! calls it needs and the seed derivation of every PDA involved. Case construction then only picks literals and
//! consults scopes.

use std::collections::BTreeMap;

use soltest_core::naming::to_camel_case;

use crate::analysis::{
    ArgEnv, Category, ClassificationStrategy, SeedDerivation, find_dependencies, process_seeds_in,
};
use crate::frontend::diagnostics::GenerateError;
use crate::frontend::idl::{Account, Instruction};

use super::super::ir::{Literal, PdaDecl};
use super::super::literals::{LiteralCase, literal_for};
use super::super::wiring::{dependency_pdas, pda_var};

/// A PDA account with its derivation in the environment it is declared in.
#[derive(Debug, Clone)]
pub struct PlannedPda<'a> {
    pub account: &'a Account,
    pub derivation: SeedDerivation,
}

impl PlannedPda<'_> {
    pub fn is_scope_stable(&self) -> bool {
        self.derivation.is_scope_stable()
    }

    pub fn decl(&self) -> PdaDecl {
        PdaDecl {
            account: self.account.name.clone(),
            var: pda_var(&self.account.name),
            seeds: self.derivation.expressions.clone(),
        }
    }
}

/// A dependency call run before the instruction under test.
#[derive(Debug, Clone)]
pub struct SetupInstruction<'a> {
    pub instruction: &'a Instruction,
    /// Client method name
    pub method_name: String,
    /// Argument variable and its template literal (re-keyed per test case)
    pub args: Vec<(String, Literal)>,
    /// Every PDA of the dependency; scope-stable ones are declared at suite scope, derived with its own arguments plus those of earlier setup calls
    pub pdas: Vec<PlannedPda<'a>>,
}

impl<'a> SetupInstruction<'a> {
    /// PDAs whose derivation does not depend on arguments; these live at suite scope.
    pub fn stable_pdas(&self) -> impl Iterator<Item = &PlannedPda<'a>> {
        self.pdas.iter().filter(|pda| pda.is_scope_stable())
    }
}

/// Everything known about one selected instruction before its cases are built.
#[derive(Debug, Clone)]
pub struct InstructionPlan<'a> {
    pub instruction: &'a Instruction,
    pub category: Category,
    pub method_name: String,
    pub setups: Vec<SetupInstruction<'a>>,
    /// Account name → variable for PDAs produced by the setup calls
    pub dependency_pdas: BTreeMap<String, String>,
    /// The instruction's own PDAs, derived with its own arguments plus every setup argument
    pub own_pdas: Vec<PlannedPda<'a>>,
}

/// Plan one instruction.
///
/// ## Parameters
/// - `strategy`: classification strategy.
/// - `instruction`: the selected instruction.
/// - `all`: every instruction of the program; dependencies may come from outside the selection.
/// - `strict_seeds`: fail instead of dropping arg seeds that name no argument in scope.
///
/// ## Errors
/// - [`GenerateError::UnresolvedSeedReference`] for the first unresolved seed, in strict mode only.
pub fn plan_instruction<'a, S>(
    strategy: &S,
    instruction: &'a Instruction,
    all: &'a [Instruction],
    strict_seeds: bool,
) -> Result<InstructionPlan<'a>, GenerateError>
where
    S: ClassificationStrategy + ?Sized,
{
    let category = strategy.categorize(instruction);
    // `all`, not the selection: a prerequisite create must be found even when it is not tested itself.
    let dependencies = find_dependencies(strategy, instruction, all);

    let mut setups = Vec::with_capacity(dependencies.len());
    for (k, dep) in dependencies.iter().enumerate() {
        let env = dependencies[..k]
            .iter()
            .fold(ArgEnv::new(&dep.args), |env, earlier| env.with_frame(&earlier.args));
        let pdas = plan_pdas(dep, &env, strict_seeds)?;
        setups.push(SetupInstruction {
            instruction: dep,
            method_name: to_camel_case(&dep.name),
            args: dep
                .args
                .iter()
                .map(|arg| (arg.var_name().to_string(), literal_for(arg, LiteralCase::Success, 0)))
                .collect(),
            pdas,
        });
    }

    let env = dependencies
        .iter()
        .fold(ArgEnv::new(&instruction.args), |env, dep| env.with_frame(&dep.args));
    let own_pdas = plan_pdas(instruction, &env, strict_seeds)?;

    tracing::debug!(
        instruction = %instruction.name,
        %category,
        setups = setups.len(),
        "planned instruction"
    );

    Ok(InstructionPlan {
        instruction,
        category,
        method_name: to_camel_case(&instruction.name),
        dependency_pdas: dependency_pdas(dependencies.iter().copied()),
        setups,
        own_pdas,
    })
}

fn plan_pdas<'a>(
    instruction: &'a Instruction,
    env: &ArgEnv<'_>,
    strict_seeds: bool,
) -> Result<Vec<PlannedPda<'a>>, GenerateError> {
    let mut planned = Vec::new();
    for (account, pda) in instruction.pdas() {
        let derivation = process_seeds_in(&pda.seeds, env);
        if let Some(path) = derivation.unresolved.first() {
            if strict_seeds {
                return Err(GenerateError::UnresolvedSeedReference {
                    instruction: instruction.name.clone(),
                    account: account.name.clone(),
                    path: path.clone(),
                });
            }
            tracing::warn!(
                instruction = %instruction.name,
                account = %account.name,
                unresolved = ?derivation.unresolved,
                "seed names no argument in scope; dropping it from the derivation"
            );
        }
        planned.push(PlannedPda { account, derivation });
    }
    Ok(planned)
}
