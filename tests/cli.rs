//! Command-line behaviour of the `wc` binary.

mod common;

#[path = "cli/smoke_tests.rs"]
mod smoke_tests;
#[path = "cli/output_formats.rs"]
mod output_formats;
