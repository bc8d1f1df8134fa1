// crates/ports/src/counter.rs
use std::io::Read;

use wc_shared_kernel::{Counts, InputError};

/// Port for the single-pass counting engine.
pub trait StreamCounter: Send + Sync {
    /// Consumes `stream` to exhaustion and returns its counts.
    fn count(&self, stream: &mut dyn Read) -> Result<Counts, InputError>;
}
