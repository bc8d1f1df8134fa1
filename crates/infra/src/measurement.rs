//! Single-pass counting of lines, words and bytes over a byte stream.

pub mod engine;
mod tally;

pub use engine::{StreamingCounter, count_reader};
