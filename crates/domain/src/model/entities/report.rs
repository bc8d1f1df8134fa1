use wc_shared_kernel::{Counts, InputError};

use super::input_result::InputResult;

/// Results of a multi-input run, in request order, plus the total over the
/// successful ones.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub results: Vec<InputResult>,
    pub total: Counts,
}

impl BatchReport {
    /// Builds a report from ordered results, deriving the total.
    pub fn from_results(results: Vec<InputResult>) -> Self {
        let total = results.iter().filter_map(InputResult::successful_counts).sum();
        Self { results, total }
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn has_failures(&self) -> bool {
        self.results.iter().any(|r| !r.is_success())
    }

    pub fn failures(&self) -> impl Iterator<Item = &InputResult> {
        self.results.iter().filter(|r| !r.is_success())
    }
}

/// What a counting run produced.
#[derive(Debug)]
pub enum CountReport {
    /// No identifiers were given; standard input was counted on its own.
    Stdin(Result<Counts, InputError>),
    Batch(BatchReport),
}

impl CountReport {
    pub fn has_failures(&self) -> bool {
        match self {
            Self::Stdin(outcome) => outcome.is_err(),
            Self::Batch(batch) => batch.has_failures(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn total_excludes_failed_inputs() {
        let report = BatchReport::from_results(vec![
            InputResult::completed("a.txt", Counts::new(1, 2, 12)),
            InputResult::failed("b.txt", InputError::unavailable(io::Error::from(io::ErrorKind::NotFound))),
            InputResult::completed("c.txt", Counts::new(0, 1, 3)),
        ]);

        assert_eq!(report.len(), 3);
        assert_eq!(report.total, Counts::new(1, 3, 15));
        assert!(report.has_failures());
        let failed: Vec<_> = report.failures().map(|r| r.identifier.as_str()).collect();
        assert_eq!(failed, ["b.txt"]);
    }

    #[test]
    fn empty_report_has_zero_total() {
        let report = BatchReport::from_results(Vec::new());
        assert!(report.is_empty());
        assert_eq!(report.total, Counts::ZERO);
        assert!(!report.has_failures());
    }

    #[test]
    fn stdin_failure_is_reported() {
        let report = CountReport::Stdin(Err(InputError::Malformed { offset: 0 }));
        assert!(report.has_failures());
        assert!(!CountReport::Stdin(Ok(Counts::ZERO)).has_failures());
    }
}
