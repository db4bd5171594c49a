//! Project I/O boundary
//!
//! This module defines trait-based abstractions for the filesystem work around generation:
//! - IDL discovery (locate + parse the first IDL document)
//! - Suite persistence (list prior suites, remove them, write the new one)
//!
//! The generate command only talks to these traits, so tests can swap in in-memory implementations.

use std::fs;
use std::path::{Path, PathBuf};

use crate::frontend::diagnostics::GenerateError;
use crate::frontend::idl::Idl;
use crate::frontend::parser::parse_idl;

/// Directory layout of an Anchor project, relative to its root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    pub root: PathBuf,
    /// `target/idl`
    pub idl_dir: PathBuf,
    /// `tests`
    pub tests_dir: PathBuf,
    /// `tests/soltest`
    pub soltest_dir: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let tests_dir = root.join("tests");
        Self {
            idl_dir: root.join("target").join("idl"),
            soltest_dir: tests_dir.join("soltest"),
            tests_dir,
            root,
        }
    }

    /// Output path of the suite for `program_name`.
    pub fn suite_path(&self, program_name: &str) -> PathBuf {
        self.soltest_dir.join(format!("{program_name}.test.ts"))
    }

    /// `path` relative to the project root, for display.
    pub fn display_path<'p>(&self, path: &'p Path) -> &'p Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }
}

/// A parsed IDL and the program it describes.
#[derive(Debug, Clone)]
pub struct LoadedIdl {
    pub idl: Idl,
    /// File stem of the IDL document
    pub program_name: String,
    pub path: PathBuf,
}

// ============================================================================
// IDL Discovery Interface
// ============================================================================

/// Locate and parse the project's IDL document.
pub trait IdlDiscovery {
    fn load(&self, layout: &ProjectLayout) -> Result<LoadedIdl, GenerateError>;
}

// ============================================================================
// Suite Persistence Interface
// ============================================================================

/// Read and write test files under the project's `tests` directory.
pub trait SuitePersistence {
    /// Every `.ts` file under `tests/`, excluding `tests/soltest/`, sorted.
    fn existing_suites(&self, layout: &ProjectLayout) -> Result<Vec<PathBuf>, GenerateError>;

    /// Remove prior suites. Returns how many were removed.
    fn remove_suites(&self, paths: &[PathBuf]) -> usize;

    /// Write the generated suite, creating directories. Returns the written path.
    fn write_suite(&self, layout: &ProjectLayout, program_name: &str, text: &str) -> Result<PathBuf, GenerateError>;
}

// ============================================================================
// Default Implementations
// ============================================================================

/// Reads the first `*.json` in `target/idl`, in file-name order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsIdlDiscovery;

impl IdlDiscovery for FsIdlDiscovery {
    fn load(&self, layout: &ProjectLayout) -> Result<LoadedIdl, GenerateError> {
        let dir = &layout.idl_dir;
        if !dir.is_dir() {
            return Err(GenerateError::MissingInputLocation(dir.clone()));
        }

        let mut candidates: Vec<PathBuf> = fs::read_dir(dir)
            .map_err(|e| GenerateError::io(dir, e))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "json"))
            .collect();
        candidates.sort();

        let Some(path) = candidates.into_iter().next() else {
            return Err(GenerateError::NoIdlFound(dir.clone()));
        };
        let program_name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();

        let source = fs::read_to_string(&path).map_err(|e| GenerateError::io(&path, e))?;
        let idl = parse_idl(&source, &path.display().to_string())?;
        tracing::debug!(path = %path.display(), program = %program_name, "loaded IDL");

        Ok(LoadedIdl {
            idl,
            program_name,
            path,
        })
    }
}

/// Filesystem-backed persistence.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSuitePersistence;

impl SuitePersistence for FsSuitePersistence {
    fn existing_suites(&self, layout: &ProjectLayout) -> Result<Vec<PathBuf>, GenerateError> {
        let mut found = Vec::new();
        if layout.tests_dir.is_dir() {
            collect_ts_files(&layout.tests_dir, &layout.soltest_dir, &mut found)?;
        }
        found.sort();
        Ok(found)
    }

    fn remove_suites(&self, paths: &[PathBuf]) -> usize {
        paths
            .iter()
            .filter(|path| match fs::remove_file(path) {
                Ok(()) => true,
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "could not remove old test file");
                    false
                }
            })
            .count()
    }

    fn write_suite(&self, layout: &ProjectLayout, program_name: &str, text: &str) -> Result<PathBuf, GenerateError> {
        fs::create_dir_all(&layout.soltest_dir).map_err(|e| GenerateError::io(&layout.soltest_dir, e))?;
        let path = layout.suite_path(program_name);
        fs::write(&path, text).map_err(|e| GenerateError::io(&path, e))?;
        Ok(path)
    }
}

fn collect_ts_files(dir: &Path, skip: &Path, out: &mut Vec<PathBuf>) -> Result<(), GenerateError> {
    for entry in fs::read_dir(dir).map_err(|e| GenerateError::io(dir, e))? {
        let path = entry.map_err(|e| GenerateError::io(dir, e))?.path();
        if path.starts_with(skip) {
            continue;
        }
        if path.is_dir() {
            collect_ts_files(&path, skip, out)?;
        } else if path.extension().is_some_and(|ext| ext == "ts") {
            out.push(path);
        }
    }
    Ok(())
}
