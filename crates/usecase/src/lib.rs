//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`aggregator`]: counts every requested input concurrently and folds the
//!   results into an ordered report with a total
//!
//! Use cases depend on domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod aggregator;

pub use aggregator::CountInputs;
