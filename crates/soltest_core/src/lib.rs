//! Provide shared, pure vocabulary for the soltest generator.
//!
//! This crate is intentionally small and dependency-free. It contains the deterministic tables and helpers that the
//! analysis and synthesis stages consult when they have to guess intent from a name:
//! - instruction-name markers (create/update/delete) used by classification and selection,
//! - phrase tables for test titles and representative string literals,
//! - naming conventions shared with the generated TypeScript (camelCase, PascalCase, underscore aliases),
//! - well-known Anchor client identifiers.
//!
//! ## Notes
//!
//! - This is a "vocabulary" crate: **no IO**, no global state, and no IDL or generator types.
//! - Heuristic tables are plain `const` slices so they can evolve without touching the generator.

pub mod conventions;
pub mod heuristics;
pub mod naming;
