// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod measurement;
pub mod persistence;
pub mod progress;

pub use filesystem::{FsInputOpener, STDIN_IDENTIFIER};
pub use measurement::{StreamingCounter, count_reader};
pub use progress::TracingProgress;
