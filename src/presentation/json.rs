use std::io::Write;

use serde::Serialize;
use wc_domain::model::{BatchReport, CountReport, InputResult};
use wc_shared_kernel::{Counts, PresentationError, Result};

use super::{DisplayOptions, STDIN_LABEL, report_failure};

#[derive(Serialize)]
struct CountsDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    lines: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    words: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bytes: Option<u64>,
}

impl CountsDto {
    fn new(counts: &Counts, display: &DisplayOptions) -> Self {
        Self {
            lines: display.lines.then_some(counts.lines.value()),
            words: display.words.then_some(counts.words.value()),
            bytes: display.bytes.then_some(counts.bytes.value()),
        }
    }
}

#[derive(Serialize)]
struct ErrorDto {
    kind: &'static str,
    message: String,
}

#[derive(Serialize)]
struct InputDto<'a> {
    identifier: &'a str,
    #[serde(flatten)]
    counts: Option<CountsDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorDto>,
}

impl<'a> InputDto<'a> {
    fn new(result: &'a InputResult, display: &DisplayOptions) -> Self {
        match &result.error {
            None => Self {
                identifier: &result.identifier,
                counts: Some(CountsDto::new(&result.counts, display)),
                error: None,
            },
            Some(e) => Self {
                identifier: &result.identifier,
                counts: None,
                error: Some(ErrorDto { kind: e.kind().as_str(), message: e.to_string() }),
            },
        }
    }
}

#[derive(Serialize)]
struct BatchDto<'a> {
    inputs: Vec<InputDto<'a>>,
    total: CountsDto,
}

pub(super) fn write_json(
    report: &CountReport,
    display: &DisplayOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<()> {
    match report {
        CountReport::Stdin(Ok(counts)) => write_value(out, &CountsDto::new(counts, display)),
        CountReport::Stdin(Err(e)) => report_failure(err, STDIN_LABEL, e),
        CountReport::Batch(batch) => {
            for failed in batch.failures() {
                if let Some(e) = &failed.error {
                    report_failure(err, &failed.identifier, e)?;
                }
            }
            write_value(out, &batch_dto(batch, display))
        }
    }
}

fn batch_dto<'a>(batch: &'a BatchReport, display: &DisplayOptions) -> BatchDto<'a> {
    BatchDto {
        inputs: batch.results.iter().map(|r| InputDto::new(r, display)).collect(),
        total: CountsDto::new(&batch.total, display),
    }
}

fn write_value<T: Serialize>(out: &mut dyn Write, value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| PresentationError::Serialization { format: "json".into(), details: e.to_string() })?;
    writeln!(out, "{text}")?;
    Ok(())
}
