// 依存関係の推移的依存により複数のバージョンが混在するための抑制
#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod cli;
pub mod config;
pub mod logging;
pub mod presentation;

use std::io::Read;

use wc_infra::{FsInputOpener, StreamingCounter, TracingProgress};
use wc_usecase::CountInputs;

pub use wc_domain::{
    config::CountConfig,
    model::{BatchReport, CountReport, InputResult, InputState},
    options::DecodePolicy,
};
pub use wc_shared_kernel::{Counts, InputError, WcError};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Counts a single stream.
///
/// # Errors
///
/// Returns the stream's [`InputError`] when reading fails, or when the input
/// is malformed under [`DecodePolicy::Strict`].
pub fn count<R: Read + ?Sized>(reader: &mut R, config: &CountConfig) -> Result<Counts, InputError> {
    wc_infra::count_reader(reader, config)
}

/// Counts every identifier (files, or `-` for standard input) concurrently.
/// An empty list counts standard input.
///
/// # Errors
///
/// Only batch-level failures such as thread pool creation. Per-input
/// failures are recorded on the report.
pub fn count_all<S: AsRef<str>>(identifiers: &[S], config: &CountConfig) -> wc_shared_kernel::Result<CountReport> {
    let opener = FsInputOpener::new();
    let counter = StreamingCounter::new(config);
    CountInputs::new(&opener, &counter)
        .with_progress(&TracingProgress)
        .with_jobs(config.jobs)
        .run(identifiers)
}
