// crates/infra/src/progress.rs
use tracing::{debug, info, warn};
use wc_domain::model::InputResult;
use wc_ports::ProgressSink;
use wc_shared_kernel::Counts;

/// Progress sink that turns batch events into `tracing` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingProgress;

impl ProgressSink for TracingProgress {
    fn on_started(&self, index: usize, identifier: &str) {
        debug!(index, identifier, "counting started");
    }

    fn on_finished(&self, index: usize, result: &InputResult) {
        match &result.error {
            None => debug!(
                index,
                identifier = %result.identifier,
                lines = result.counts.lines.value(),
                words = result.counts.words.value(),
                bytes = result.counts.bytes.value(),
                "counting finished"
            ),
            Some(err) => warn!(
                index,
                identifier = %result.identifier,
                kind = err.kind().as_str(),
                error = %err,
                "counting failed"
            ),
        }
    }

    fn on_complete(&self, total: &Counts, inputs: usize) {
        info!(
            inputs,
            lines = total.lines.value(),
            words = total.words.value(),
            bytes = total.bytes.value(),
            "batch complete"
        );
    }
}
