//! Inter-instruction dependency resolution.
//!
//! A non-creating instruction usually expects its PDAs to exist already. The resolver finds the `Create`
//! instructions that produce PDAs of the same seed shape, so synthesis can call them first.

use crate::frontend::idl::{Instruction, Pda, Seed};

use super::classifier::{Category, ClassificationStrategy};

/// Whether two PDAs can denote the same account.
///
/// Same seed count, pairwise-equal seed kinds, and byte-identical constant seeds. Argument and account seeds match
/// by kind only. The relation is symmetric.
pub fn seeds_compatible(a: &Pda, b: &Pda) -> bool {
    a.seeds.len() == b.seeds.len()
        && a.seeds.iter().zip(&b.seeds).all(|(x, y)| match (x, y) {
            (Seed::Const(lhs), Seed::Const(rhs)) => lhs == rhs,
            _ => x.kind() == y.kind(),
        })
}

/// Find the create instructions that `instruction` depends on.
///
/// ## Parameters
/// - `strategy`: classification strategy used for `instruction` and every candidate.
/// - `instruction`: the instruction under test.
/// - `all`: every instruction of the program.
///
/// ## Returns
/// - (`Vec<&Instruction>`): distinct dependencies in first-seen order (PDA order of `instruction`, then program
///   order). Empty when `instruction` is itself a create.
///
/// ## Notes
/// - Candidates are skipped by name, so an instruction never depends on itself.
/// - Cost is accounts × instructions × seeds; no index is built.
pub fn find_dependencies<'a, S>(strategy: &S, instruction: &Instruction, all: &'a [Instruction]) -> Vec<&'a Instruction>
where
    S: ClassificationStrategy + ?Sized,
{
    let mut deps: Vec<&'a Instruction> = Vec::new();

    if strategy.categorize(instruction) == Category::Create {
        return deps;
    }

    for (_, pda) in instruction.pdas() {
        for candidate in all {
            if candidate.name == instruction.name || deps.iter().any(|dep| dep.name == candidate.name) {
                continue;
            }
            if strategy.categorize(candidate) != Category::Create {
                continue;
            }
            if candidate.pdas().any(|(_, other)| seeds_compatible(pda, other)) {
                tracing::debug!(instruction = %instruction.name, dependency = %candidate.name, "resolved dependency");
                deps.push(candidate);
            }
        }
    }

    deps
}
