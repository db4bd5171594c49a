//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::backend::{GenerateConfig, TestGenerator};
use crate::frontend::diagnostics::GenerateError;

use super::prompt::{Disposition, ask_disposition};
use super::workspace::{FsIdlDiscovery, FsSuitePersistence, IdlDiscovery, ProjectLayout, SuitePersistence};
use super::{CliError, CliResult, ExitCode};

/// Settings of one `generate` run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Project root
    pub root: PathBuf,
    /// Delete prior suites without asking
    pub force: bool,
    /// Print the suite instead of writing it
    pub stdout: bool,
    pub config: GenerateConfig,
}

/// Collaborators of the generate command.
pub struct GenerateContext<'io, D, P, R, W> {
    pub discovery: D,
    pub persistence: P,
    /// Answers to the keep/delete prompt
    pub input: &'io mut R,
    /// Progress messages, the prompt, and the suite itself with `--stdout`
    pub output: &'io mut W,
}

/// Turn a library error into a CLI failure, rendered through miette.
fn generate_failure(err: GenerateError) -> CliError {
    CliError::failure(format!("{:?}", miette::Report::new(err)))
}

fn io_failure(err: io::Error) -> CliError {
    CliError::failure(format!("Error writing output: {err}"))
}

/// Run `generate` against the real filesystem and terminal.
pub fn generate(options: &GenerateOptions) -> CliResult<ExitCode> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();
    generate_with(
        options,
        GenerateContext {
            discovery: FsIdlDiscovery,
            persistence: FsSuitePersistence,
            input: &mut input,
            output: &mut output,
        },
    )
}

/// Run `generate` with explicit collaborators.
///
/// The flow:
/// 1. List prior suites under `tests/` (so the list never includes the file about to be written)
/// 2. Load the IDL and generate the suite
/// 3. Keep or delete prior suites (`--force` deletes without asking)
/// 4. Write `tests/soltest/<program>.test.ts`
///
/// With `--stdout`, steps 1, 3 and 4 are skipped and only the suite text is printed.
#[tracing::instrument(skip_all, fields(root = %options.root.display(), force = options.force, stdout = options.stdout))]
pub fn generate_with<D, P, R, W>(options: &GenerateOptions, ctx: GenerateContext<'_, D, P, R, W>) -> CliResult<ExitCode>
where
    D: IdlDiscovery,
    P: SuitePersistence,
    R: BufRead,
    W: Write,
{
    let GenerateContext {
        discovery,
        persistence,
        input,
        output,
    } = ctx;
    let layout = ProjectLayout::new(&options.root);
    let generator = TestGenerator::with_config(options.config.clone());

    if options.stdout {
        let loaded = discovery.load(&layout).map_err(generate_failure)?;
        let text = generator
            .generate(&loaded.idl, &loaded.program_name)
            .map_err(generate_failure)?;
        output.write_all(text.as_bytes()).map_err(io_failure)?;
        return Ok(ExitCode::SUCCESS);
    }

    writeln!(output, "soltest generate\n").map_err(io_failure)?;

    let existing = persistence.existing_suites(&layout).map_err(generate_failure)?;
    let loaded = discovery.load(&layout).map_err(generate_failure)?;

    writeln!(output, "Program: {}", loaded.program_name).map_err(io_failure)?;
    writeln!(output, "Instructions: {}\n", loaded.idl.instructions.len()).map_err(io_failure)?;

    let text = generator
        .generate(&loaded.idl, &loaded.program_name)
        .map_err(generate_failure)?;

    if !existing.is_empty() {
        let disposition = if options.force {
            Disposition::Delete
        } else {
            let shown: Vec<PathBuf> = existing
                .iter()
                .map(|path| layout.display_path(path).to_path_buf())
                .collect();
            ask_disposition(&shown, &mut *input, &mut *output).map_err(io_failure)?
        };

        if disposition == Disposition::Delete {
            let removed = persistence.remove_suites(&existing);
            tracing::debug!(removed, listed = existing.len(), "removed prior suites");
            writeln!(output, "Cleaned up old tests").map_err(io_failure)?;
        }
    }

    let path = persistence
        .write_suite(&layout, &loaded.program_name, &text)
        .map_err(generate_failure)?;
    writeln!(output, "\nGenerated: {}", layout.display_path(&path).display()).map_err(io_failure)?;
    writeln!(output, "\nDone! Run 'anchor test'").map_err(io_failure)?;

    Ok(ExitCode::SUCCESS)
}
