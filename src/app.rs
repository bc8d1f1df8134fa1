use std::{
    io::{self, Write},
    process::ExitCode,
};

use anyhow::{Context, Result};
use tracing::debug;

use crate::{config::Config, presentation};

/// Counts the configured inputs and writes the report.
///
/// Per-input failures are reported on stderr and turn the exit code into 1;
/// only batch-level failures come back as `Err`.
pub fn run(config: &Config) -> Result<ExitCode> {
    debug!(
        inputs = config.inputs.len(),
        jobs = config.count.jobs,
        chunk_size = config.count.chunk_size,
        policy = %config.count.decode_policy,
        "starting"
    );

    let report = crate::count_all(&config.inputs, &config.count).context("counting failed")?;

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let stderr = io::stderr();
    let mut err = stderr.lock();
    presentation::emit(&report, &config.display, config.format, &mut out, &mut err)
        .context("failed to emit output")?;
    out.flush().context("failed to flush output")?;

    Ok(if report.has_failures() { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}
