#![forbid(unsafe_code)]
//! Soltest: Anchor integration-test generator
//!
//! Reads a program's IDL and writes a TypeScript test suite that exercises its most interesting instructions.
//! This crate provides the generator: frontend (IDL parsing), analysis (classification, dependency resolution,
//! seed processing), backend (suite synthesis and TypeScript emission), and the CLI.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` and `backend` modules
//!   enforce `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **Generated code**: The emitter writes `throw` statements as *string literals* in generated TypeScript. These
//!   are output text, not control flow in the generator.

pub mod analysis;
pub mod backend;
pub mod cli;
pub mod frontend;
pub mod version;

pub use frontend::diagnostics::GenerateError;
pub use frontend::idl;
pub use frontend::parser::parse_idl;

pub use analysis::{Category, ClassificationStrategy, NameHeuristics, categorize};
pub use backend::{GenerateConfig, TestGenerator, TestSynthesizer, generate};
