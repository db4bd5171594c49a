//! Keep/delete prompt for test files written before the generated suite.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// What to do with existing test files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    Keep,
    Delete,
}

impl Disposition {
    /// `2` deletes; any other answer, including none, keeps.
    pub fn from_answer(answer: &str) -> Self {
        if answer.trim() == "2" {
            Disposition::Delete
        } else {
            Disposition::Keep
        }
    }
}

/// List the existing files and read one answer line.
///
/// ## Parameters
/// - `existing`: files to list, already relative to the project root.
/// - `input`: where the answer is read from.
/// - `output`: where the listing and the prompt go.
pub fn ask_disposition<R, W>(existing: &[PathBuf], input: &mut R, output: &mut W) -> io::Result<Disposition>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "Existing tests found:")?;
    for path in existing {
        writeln!(output, "  {}", path.display())?;
    }
    writeln!(output)?;
    writeln!(output, "1) Keep  2) Delete (recommended)")?;
    write!(output, "Choice: ")?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(Disposition::from_answer(&answer))
}
