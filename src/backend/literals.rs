//! Argument literal policy.
//!
//! | type    | success / setup             | edge   |
//! |---------|-----------------------------|--------|
//! | int64   | `BN(counter)`               | `BN(0)`|
//! | string  | name-guessed phrase + `_counter` | `""` |
//! | other   | `1`                         | `0`    |

use soltest_core::heuristics::string_phrase_for;

use crate::frontend::idl::{Arg, ArgType};

use super::ir::Literal;

/// Which flavour of literal to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralCase {
    /// Representative non-zero values (success, failure and setup calls)
    Success,
    /// Minimal values
    Edge,
}

/// Produce the literal for `arg`.
///
/// ## Parameters
/// - `arg`: the argument being bound.
/// - `case`: success-fidelity or minimal values.
/// - `counter`: per-call-site counter; ignored for edge values.
pub fn literal_for(arg: &Arg, case: LiteralCase, counter: u64) -> Literal {
    match (case, &arg.ty) {
        (LiteralCase::Edge, ArgType::Int64) => Literal::BigNum(0),
        (LiteralCase::Edge, ArgType::String) => Literal::Str(String::new()),
        (LiteralCase::Edge, ArgType::Other(_)) => Literal::Number(0),
        (LiteralCase::Success, ArgType::Int64) => Literal::BigNum(counter),
        (LiteralCase::Success, ArgType::String) => Literal::Phrase {
            base: string_phrase_for(&arg.name),
            counter,
        },
        (LiteralCase::Success, ArgType::Other(_)) => Literal::Number(1),
    }
}
