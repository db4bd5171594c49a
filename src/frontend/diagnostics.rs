//! Error taxonomy for IDL loading and suite generation.
//!
//! Fatal conditions surface as a single [`GenerateError`]; the CLI turns it into a printed message and a non-zero
//! exit. Non-fatal conditions (an unresolved seed outside strict mode, an empty selection) are logged through
//! `tracing` and never reach this type.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Errors produced while locating, parsing or generating from an IDL.
#[derive(Debug, Error, Diagnostic)]
pub enum GenerateError {
    /// The directory expected to hold IDL documents does not exist.
    #[error("{} not found", .0.display())]
    #[diagnostic(
        code(soltest::missing_input_location),
        help("run `anchor build` so the IDL is written to target/idl")
    )]
    MissingInputLocation(PathBuf),

    /// The IDL directory exists but holds no `.json` document.
    #[error("No IDL found in {}", .0.display())]
    #[diagnostic(code(soltest::no_idl_found))]
    NoIdlFound(PathBuf),

    /// The document is not valid IDL JSON.
    #[error("invalid IDL in {origin}: {source}")]
    #[diagnostic(code(soltest::invalid_idl))]
    InvalidIdl {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    /// An argument-bound seed names no argument in scope (strict mode only).
    #[error("seed `{path}` of account `{account}` in instruction `{instruction}` does not name an argument in scope")]
    #[diagnostic(
        code(soltest::unresolved_seed_reference),
        help("rerun without --strict-seeds to drop the seed from the derivation")
    )]
    UnresolvedSeedReference {
        instruction: String,
        account: String,
        path: String,
    },

    /// Reading or writing a file failed.
    #[error("I/O error on {}: {source}", .path.display())]
    #[diagnostic(code(soltest::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GenerateError {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GenerateError::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_location_message() {
        let err = GenerateError::MissingInputLocation(PathBuf::from("target/idl"));
        assert_eq!(err.to_string(), "target/idl not found");
    }

    #[test]
    fn test_unresolved_seed_message_names_everything() {
        let err = GenerateError::UnresolvedSeedReference {
            instruction: "vote".into(),
            account: "poll".into(),
            path: "poll_id".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("vote") && msg.contains("poll") && msg.contains("poll_id"));
    }

    #[test]
    fn test_diagnostic_codes() {
        let err = GenerateError::NoIdlFound(PathBuf::from("target/idl"));
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("soltest::no_idl_found"));
    }
}
