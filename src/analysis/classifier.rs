//! Instruction classification.
//!
//! Classification is a pure function of an instruction's name and account shape. It sits behind
//! [`ClassificationStrategy`] so the name heuristics can be swapped without touching dependency resolution or
//! synthesis.

use std::fmt;

use soltest_core::heuristics::{CREATE_MARKERS, DELETE_MARKERS, UPDATE_MARKERS, mentions};

use crate::frontend::idl::{Instruction, Pda, Seed};

/// What an instruction does to the accounts it touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Create,
    Modify,
    Delete,
    Other,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Create => write!(f, "create"),
            Category::Modify => write!(f, "modify"),
            Category::Delete => write!(f, "delete"),
            Category::Other => write!(f, "other"),
        }
    }
}

/// Map an instruction's shape to a [`Category`].
///
/// Implementations must be total and deterministic: the same instruction always yields the same category.
pub trait ClassificationStrategy {
    fn categorize(&self, instruction: &Instruction) -> Category;
}

/// Default strategy: name markers plus PDA ownership.
///
/// Rules, first match wins:
/// 1. create marker in the name and a writable PDA that is not an external reference → `Create`
/// 2. update marker → `Modify`
/// 3. delete/close marker → `Delete`
/// 4. any PDA that is an external reference → `Modify`
/// 5. otherwise → `Other`
#[derive(Debug, Clone, Copy, Default)]
pub struct NameHeuristics;

impl ClassificationStrategy for NameHeuristics {
    fn categorize(&self, instruction: &Instruction) -> Category {
        let name = instruction.name.as_str();

        if mentions(name, CREATE_MARKERS) {
            let owns_pda = instruction
                .pdas()
                .any(|(account, pda)| account.writable && !is_external_reference(pda, instruction));
            if owns_pda {
                return Category::Create;
            }
        }

        if mentions(name, UPDATE_MARKERS) {
            return Category::Modify;
        }
        if mentions(name, DELETE_MARKERS) {
            return Category::Delete;
        }

        if instruction.pdas().any(|(_, pda)| is_external_reference(pda, instruction)) {
            return Category::Modify;
        }

        Category::Other
    }
}

/// Classify with the default [`NameHeuristics`] strategy.
pub fn categorize(instruction: &Instruction) -> Category {
    NameHeuristics.categorize(instruction)
}

/// Whether a PDA's address was produced by someone else's call.
///
/// True when an argument-bound seed refers to an argument this instruction does not declare (neither by exact
/// name nor through a leading-underscore alias).
pub fn is_external_reference(pda: &Pda, instruction: &Instruction) -> bool {
    pda.seeds.iter().any(|seed| match seed {
        Seed::Arg { path } => instruction.find_arg(path).is_none(),
        _ => false,
    })
}
