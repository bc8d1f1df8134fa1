use wc_domain::config::{MAX_CHUNK_SIZE, MIN_CHUNK_SIZE};
use wc_shared_kernel::PresentationError;

/// `--jobs` / `WC_JOBS`: a positive worker count.
pub fn parse_jobs(s: &str) -> Result<usize, PresentationError> {
    parse_at_least("--jobs", s, 1)
}

/// `--chunk-size`: bytes per read, with an optional K/M suffix (binary units).
pub fn parse_chunk_size(s: &str) -> Result<usize, PresentationError> {
    let trimmed = s.trim().replace('_', "");
    let lower = trimmed.to_ascii_lowercase();
    let (digits, multiplier) = if let Some(rest) = lower.strip_suffix("kib").or_else(|| lower.strip_suffix('k')) {
        (rest, 1024)
    } else if let Some(rest) = lower.strip_suffix("mib").or_else(|| lower.strip_suffix('m')) {
        (rest, 1024 * 1024)
    } else {
        (lower.as_str(), 1)
    };
    let value = parse_at_least("--chunk-size", digits.trim(), 1)?;
    let bytes = value.checked_mul(multiplier).ok_or_else(|| invalid("--chunk-size", s, "value is too large"))?;
    if bytes < MIN_CHUNK_SIZE {
        return Err(invalid("--chunk-size", s, &format!("must be at least {MIN_CHUNK_SIZE} bytes")));
    }
    if bytes > MAX_CHUNK_SIZE {
        return Err(invalid("--chunk-size", s, "must be at most 64MiB"));
    }
    Ok(bytes)
}

fn parse_at_least(flag: &str, s: &str, min: usize) -> Result<usize, PresentationError> {
    let value: usize = s.trim().parse().map_err(|_| invalid(flag, s, "not a number"))?;
    if value < min {
        return Err(invalid(flag, s, &format!("must be at least {min}")));
    }
    Ok(value)
}

fn invalid(flag: &str, value: &str, reason: &str) -> PresentationError {
    PresentationError::InvalidValue { flag: flag.to_string(), value: value.to_string(), reason: reason.to_string() }
}
