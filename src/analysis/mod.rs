//! Instruction analysis
//!
//! Pure, read-only passes over the IDL model:
//! - `classifier`: instruction → category, behind a replaceable strategy
//! - `resolver`: prerequisite create instructions by seed shape
//! - `seeds`: PDA seed lists → derivation expressions

pub mod classifier;
pub mod resolver;
pub mod seeds;

pub use classifier::{Category, ClassificationStrategy, NameHeuristics, categorize, is_external_reference};
pub use resolver::{find_dependencies, seeds_compatible};
pub use seeds::{ArgEnv, SeedDerivation, SeedExpr, process_seeds, process_seeds_in};
