// src/config.rs
use wc_domain::config::CountConfig;

use crate::{
    cli::Args,
    presentation::{DisplayOptions, OutputFormat},
};

/// Settings resolved from the command line and environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Identifiers to count; empty means standard input.
    pub inputs: Vec<String>,
    pub count: CountConfig,
    pub display: DisplayOptions,
    pub format: OutputFormat,
    pub verbosity: u8,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let mut count = CountConfig::default()
            .with_chunk_size(args.chunk_size)
            .with_decode_policy(args.decode.into());
        if let Some(jobs) = args.jobs {
            count = count.with_jobs(jobs);
        }

        Self {
            inputs: args.files,
            count,
            display: DisplayOptions::new(args.lines, args.words, args.bytes),
            format: args.format.into(),
            verbosity: args.verbose,
        }
    }
}
