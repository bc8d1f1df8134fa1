//! # Domain
//!
//! Per-input results, batch reports and the knobs that drive a counting run.
//!
//! - [`config`]: [`CountConfig`](config::CountConfig), worker count and chunk size
//! - [`options`]: [`DecodePolicy`](options::DecodePolicy), what to do with malformed UTF-8
//! - [`model`]: [`InputResult`](model::InputResult), [`BatchReport`](model::BatchReport)

// crates/domain/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod model;
pub mod options;
