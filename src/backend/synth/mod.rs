//! Test synthesis: IDL model → [`Suite`].
//!
//! Phases, in order:
//! 1. `select`: score and pick the instructions to test
//! 2. `plan`: classify each pick, resolve its setup calls and derive its PDAs
//! 3. suite scope: declare every scope-stable PDA once, before any test
//! 4. `cases`: build success / unauthorized / edge cases from a copy of the suite scope
//!
//! Counters start at 1 and advance by 3 per selected instruction, so every call site gets its own literals.

pub mod cases;
pub mod plan;
pub mod select;
pub mod setup;

use soltest_core::naming::to_pascal_case;

use crate::analysis::{ClassificationStrategy, NameHeuristics};
use crate::frontend::diagnostics::GenerateError;
use crate::frontend::idl::Idl;

use super::config::GenerateConfig;
use super::ir::{PdaDecl, Suite};
use super::scope::DeclarationScope;

pub use cases::{build_cases, case_title};
pub use plan::{InstructionPlan, PlannedPda, SetupInstruction, plan_instruction};
pub use select::{select_instructions, selection_score};
pub use setup::{SetupBlock, compose_setup_block};

const FIRST_COUNTER: u64 = 1;
const COUNTER_STRIDE: u64 = 3;

/// Builds a [`Suite`] from an [`Idl`].
#[derive(Debug, Clone, Default)]
pub struct TestSynthesizer<S = NameHeuristics> {
    strategy: S,
    config: GenerateConfig,
}

impl TestSynthesizer<NameHeuristics> {
    pub fn new(config: GenerateConfig) -> Self {
        Self {
            strategy: NameHeuristics,
            config,
        }
    }
}

impl<S: ClassificationStrategy> TestSynthesizer<S> {
    /// Use a custom classification strategy.
    pub fn with_strategy(strategy: S, config: GenerateConfig) -> Self {
        Self { strategy, config }
    }

    pub fn config(&self) -> &GenerateConfig {
        &self.config
    }

    /// Synthesize the suite for a program.
    ///
    /// ## Parameters
    /// - `idl`: the parsed interface description.
    /// - `program_name`: used for the suite title, type name and client import path.
    ///
    /// ## Errors
    /// - [`GenerateError::UnresolvedSeedReference`] when strict seeds are enabled and a seed names no argument.
    ///
    /// ## Notes
    /// - An IDL without instructions, or a limit of 0, yields a suite with no tests.
    #[tracing::instrument(skip_all, fields(program = %program_name, instructions = idl.instructions.len()))]
    pub fn synthesize(&self, idl: &Idl, program_name: &str) -> Result<Suite, GenerateError> {
        let limit = self.config.selection_limit(idl.instructions.len());
        let selected = select_instructions(&idl.instructions, limit);
        if selected.is_empty() {
            tracing::warn!("no instructions selected; the suite will contain no tests");
        }

        let plans = selected
            .into_iter()
            .map(|ix| plan_instruction(&self.strategy, ix, &idl.instructions, self.config.strict_seeds))
            .collect::<Result<Vec<_>, _>>()?;

        let (suite_pdas, suite_scope) = suite_declarations(&plans);

        let mut tests = Vec::new();
        let mut counter = FIRST_COUNTER;
        for plan in &plans {
            tests.extend(build_cases(plan, &suite_scope, counter));
            counter += COUNTER_STRIDE;
        }

        tracing::info!(tests = tests.len(), suite_pdas = suite_pdas.len(), "synthesized suite");

        Ok(Suite {
            program_name: program_name.to_string(),
            type_name: to_pascal_case(program_name),
            suite_pdas,
            tests,
        })
    }
}

/// Collect the scope-stable PDAs of every plan, first declaration per account name wins.
///
/// Per plan, the instruction's own PDAs come before those of its setup calls.
pub fn suite_declarations(plans: &[InstructionPlan<'_>]) -> (Vec<PdaDecl>, DeclarationScope) {
    let mut scope = DeclarationScope::new();
    let mut decls = Vec::new();

    for plan in plans {
        let own_pdas = plan.own_pdas.iter().filter(|pda| pda.is_scope_stable());
        let setup_pdas = plan.setups.iter().flat_map(|setup| setup.stable_pdas());
        for pda in own_pdas.chain(setup_pdas) {
            if scope.declares_pda(&pda.account.name) {
                continue;
            }
            decls.push(pda.decl());
            scope = scope.with_pda(&pda.account.name);
        }
    }

    (decls, scope)
}
