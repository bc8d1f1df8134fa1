//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! This crate defines traits that abstract external concerns:
//!
//! - [`input`]: Resolving identifiers to readable byte streams
//! - [`counter`]: Turning one byte stream into [`Counts`](wc_shared_kernel::Counts)
//! - [`progress`]: Progress reporting while a batch is counted
//!
//! These ports allow the use case layer to remain independent of the
//! filesystem and of the concrete engine.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod counter;
pub mod input;
pub mod progress;

pub use counter::StreamCounter;
pub use input::{InputOpener, InputStream};
pub use progress::{NoProgress, ProgressSink};
