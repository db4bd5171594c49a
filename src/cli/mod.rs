//! CLI module for soltest
//!
//! This module provides the command-line interface for the generator.
//!
//! ## Commands
//!
//! - `generate` - Write an Anchor TypeScript suite for the project's IDL
//!
//! ## Modules
//!
//! - `commands` - Command implementations
//! - `prompt` - Keep/delete prompt for prior test files
//! - `workspace` - IDL discovery and suite persistence
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;
pub mod prompt;
pub mod workspace;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use crate::backend::GenerateConfig;
use crate::backend::config::DEFAULT_MAX_INSTRUCTIONS;
use crate::version::SOLTEST_VERSION;

use commands::GenerateOptions;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Generate Anchor integration test suites from a program's IDL
#[derive(Parser, Debug)]
#[command(name = "soltest")]
#[command(version = SOLTEST_VERSION)]
#[command(about = "Generate Anchor integration test suites from a program's IDL", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate tests/soltest/<program>.test.ts from target/idl
    Generate {
        /// Delete existing test files without asking
        #[arg(long)]
        force: bool,
        /// Test every instruction instead of the best-scoring few
        #[arg(long, conflicts_with = "max_instructions")]
        all: bool,
        /// Number of instructions to test
        #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_INSTRUCTIONS)]
        max_instructions: usize,
        /// Fail when a PDA seed names no argument in scope
        #[arg(long)]
        strict_seeds: bool,
        /// Project root
        #[arg(long, value_name = "DIR", default_value = ".")]
        root: PathBuf,
        /// Print the suite to stdout instead of writing it
        #[arg(long)]
        stdout: bool,
    },
}

impl Command {
    /// Options for the generate command.
    pub fn generate_options(&self) -> GenerateOptions {
        let Command::Generate {
            force,
            all,
            max_instructions,
            strict_seeds,
            root,
            stdout,
        } = self;

        let config = GenerateConfig::new().with_strict_seeds(*strict_seeds);
        let config = if *all {
            config.with_all_instructions()
        } else {
            config.with_max_instructions(*max_instructions)
        };

        GenerateOptions {
            root: root.clone(),
            force: *force,
            stdout: *stdout,
            config,
        }
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("\nError: {}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    match &cli.command {
        command @ Command::Generate { .. } => commands::generate(&command.generate_options()),
    }
}

// ============================================================================
// Tests
// ============================================================================
