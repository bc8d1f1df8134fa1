// crates/ports/src/progress.rs
use wc_domain::model::InputResult;
use wc_shared_kernel::Counts;

/// Observer for batch progress. Called from the collector only, so
/// implementations see events one at a time.
pub trait ProgressSink: Send + Sync {
    fn on_started(&self, index: usize, identifier: &str);
    fn on_finished(&self, index: usize, result: &InputResult);
    fn on_complete(&self, total: &Counts, inputs: usize);
}

/// Sink that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn on_started(&self, _index: usize, _identifier: &str) {}

    fn on_finished(&self, _index: usize, _result: &InputResult) {}

    fn on_complete(&self, _total: &Counts, _inputs: usize) {}
}
