mod json;
mod table;

use std::io::Write;

use wc_domain::model::CountReport;
use wc_shared_kernel::{Counts, Result};

/// Which columns to print. Selecting none means all three.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    pub lines: bool,
    pub words: bool,
    pub bytes: bool,
}

impl DisplayOptions {
    pub const ALL: Self = Self { lines: true, words: true, bytes: true };

    pub const fn new(lines: bool, words: bool, bytes: bool) -> Self {
        if !lines && !words && !bytes {
            return Self::ALL;
        }
        Self { lines, words, bytes }
    }

    /// Selected values in display order: lines, words, bytes.
    pub(crate) fn columns(self, counts: &Counts) -> impl Iterator<Item = u64> {
        [
            self.lines.then_some(counts.lines.value()),
            self.words.then_some(counts.words.value()),
            self.bytes.then_some(counts.bytes.value()),
        ]
        .into_iter()
        .flatten()
    }
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self::ALL
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Label used for standard input in diagnostics.
pub const STDIN_LABEL: &str = "standard input";

/// Writes `report` to `out`; per-input failures go to `err` as
/// `wc: <identifier>: <error>`.
///
/// # Errors
///
/// Fails when either writer fails or JSON serialization fails.
pub fn emit(
    report: &CountReport,
    display: &DisplayOptions,
    format: OutputFormat,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<()> {
    match format {
        OutputFormat::Table => table::write_table(report, display, out, err),
        OutputFormat::Json => json::write_json(report, display, out, err),
    }
}

fn report_failure(err: &mut dyn Write, identifier: &str, error: &dyn std::fmt::Display) -> Result<()> {
    let identifier = if identifier == wc_infra::STDIN_IDENTIFIER { STDIN_LABEL } else { identifier };
    writeln!(err, "wc: {identifier}: {error}")?;
    Ok(())
}
