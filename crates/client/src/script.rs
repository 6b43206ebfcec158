//! Line-by-line script runner.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::session::{LineOutcome, Session};

/// Totals for one script run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScriptSummary {
    /// Lines that did something (radar, `set`, or `probe`).
    pub executed: usize,
    /// Lines rejected with an error.
    pub errors: usize,
}

/// Runs every line of `input` against `session`, reporting to `output`.
///
/// A failing line is reported and logged, then the script continues with the
/// next line. Unknown commands produce no output.
///
/// # Errors
///
/// Only I/O failures on `input` or `output` abort the run.
pub fn run_script<R, W>(session: &mut Session, input: R, output: &mut W) -> Result<ScriptSummary>
where
    R: BufRead,
    W: Write,
{
    let mut summary = ScriptSummary::default();

    for (index, line) in input.lines().enumerate() {
        let number = index + 1;
        let line = line.with_context(|| format!("Failed to read script line {number}"))?;

        match session.execute_line(&line) {
            Ok(LineOutcome::Empty | LineOutcome::Ignored { .. }) => {}
            Ok(outcome) => {
                summary.executed += 1;
                writeln!(output, "{number}: {outcome}")?;
            }
            Err(err) => {
                summary.errors += 1;
                tracing::warn!(line = number, "{}: {}", line.trim(), err);
                writeln!(output, "{number}: error: {err}")?;
            }
        }
    }

    let reserved = session.reserved_actions();
    if reserved.is_empty() {
        writeln!(output, "reserved actions: none")?;
    } else {
        let list: Vec<String> = reserved.iter().map(ToString::to_string).collect();
        writeln!(output, "reserved actions: {}", list.join(", "))?;
    }

    Ok(summary)
}
