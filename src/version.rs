//! Soltest version information.
//!
//! This module exposes the tool version as a single constant so the CLI and anything else reporting a version agree
//! on the same value.
//!
//! ## Notes
//!
//! - The value is taken from Cargo metadata (`CARGO_PKG_VERSION`) at compile time.

/// The soltest version string (for example, `0.1.0`).
pub const SOLTEST_VERSION: &str = env!("CARGO_PKG_VERSION");
