//! Soltest backend
//!
//! This module turns the parsed IDL model into a TypeScript test suite.
//!
//! The pipeline is:
//! 1. IDL model → [`TestSynthesizer`] → [`ir::Suite`]
//! 2. [`ir::Suite`] → [`emit`] → test file text
//!
//! ## Module Organization
//!
//! - `synth/` - Selection, planning, setup composition and case construction
//! - `ir.rs` - Structured suite representation
//! - `scope.rs` - Immutable declaration scope threaded through synthesis
//! - `literals.rs` - Argument literal policy
//! - `wiring.rs` - Account wiring rules
//! - `emit.rs` - TypeScript rendering
//! - `writer.rs` - Indentation-tracking string builder
//! - `config.rs` - Generation settings

#![deny(clippy::unwrap_used)]

pub mod config;
pub mod emit;
pub mod ir;
pub mod literals;
pub mod scope;
pub mod synth;
pub mod wiring;
pub mod writer;

pub use config::GenerateConfig;
pub use emit::emit_suite;
pub use synth::TestSynthesizer;

use crate::analysis::{ClassificationStrategy, NameHeuristics};
use crate::frontend::diagnostics::GenerateError;
use crate::frontend::idl::Idl;

/// Synthesizes and renders a suite in one step.
#[derive(Debug, Clone, Default)]
pub struct TestGenerator<S = NameHeuristics> {
    synthesizer: TestSynthesizer<S>,
}

impl TestGenerator<NameHeuristics> {
    pub fn new() -> Self {
        Self::with_config(GenerateConfig::default())
    }

    pub fn with_config(config: GenerateConfig) -> Self {
        Self {
            synthesizer: TestSynthesizer::new(config),
        }
    }
}

impl<S: ClassificationStrategy> TestGenerator<S> {
    pub fn with_strategy(strategy: S, config: GenerateConfig) -> Self {
        Self {
            synthesizer: TestSynthesizer::with_strategy(strategy, config),
        }
    }

    /// Generate the test file text for a program.
    ///
    /// ## Errors
    /// - [`GenerateError::UnresolvedSeedReference`] in strict-seed mode.
    pub fn generate(&self, idl: &Idl, program_name: &str) -> Result<String, GenerateError> {
        let suite = self.synthesizer.synthesize(idl, program_name)?;
        Ok(emit_suite(&suite, self.synthesizer.config()))
    }
}

/// Generate with the default classification strategy.
pub fn generate(idl: &Idl, program_name: &str, config: &GenerateConfig) -> Result<String, GenerateError> {
    TestGenerator::with_config(config.clone()).generate(idl, program_name)
}
