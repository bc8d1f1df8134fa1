use std::io::Write;

use wc_domain::model::{BatchReport, CountReport};
use wc_shared_kernel::{Counts, Result};

use super::{DisplayOptions, STDIN_LABEL, report_failure};

pub(super) fn write_table(
    report: &CountReport,
    display: &DisplayOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<()> {
    match report {
        CountReport::Stdin(Ok(counts)) => {
            let width = column_width(display, [counts]);
            write_row(out, display, counts, width, None)
        }
        CountReport::Stdin(Err(e)) => report_failure(err, STDIN_LABEL, e),
        CountReport::Batch(batch) => write_batch(batch, display, out, err),
    }
}

fn write_batch(batch: &BatchReport, display: &DisplayOptions, out: &mut dyn Write, err: &mut dyn Write) -> Result<()> {
    let show_total = batch.len() > 1;
    let rows = batch.results.iter().filter(|r| r.is_success()).map(|r| &r.counts);
    let width = if show_total {
        column_width(display, rows.chain([&batch.total]))
    } else {
        column_width(display, rows)
    };

    for result in &batch.results {
        match &result.error {
            None => write_row(out, display, &result.counts, width, Some(&result.identifier))?,
            Some(e) => report_failure(err, &result.identifier, e)?,
        }
    }
    if show_total {
        write_row(out, display, &batch.total, width, Some("total"))?;
    }
    Ok(())
}

/// Digits of the widest displayed value, at least 1.
fn column_width<'a>(display: &DisplayOptions, rows: impl IntoIterator<Item = &'a Counts>) -> usize {
    rows.into_iter()
        .flat_map(|c| display.columns(c))
        .max()
        .and_then(|v| v.checked_ilog10())
        .map_or(1, |d| d as usize + 1)
}

fn write_row(
    out: &mut dyn Write,
    display: &DisplayOptions,
    counts: &Counts,
    width: usize,
    label: Option<&str>,
) -> Result<()> {
    let mut first = true;
    for value in display.columns(counts) {
        if !first {
            write!(out, " ")?;
        }
        write!(out, "{value:>width$}")?;
        first = false;
    }
    match label {
        Some(label) => writeln!(out, " {label}")?,
        None => writeln!(out)?,
    }
    Ok(())
}
