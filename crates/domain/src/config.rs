// crates/domain/src/config.rs
use serde::{Deserialize, Serialize};

use crate::options::DecodePolicy;

/// Read size used by the streaming engine when nothing else is configured.
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// Smallest chunk the engine accepts; one chunk must hold a full UTF-8 sequence.
pub const MIN_CHUNK_SIZE: usize = 4;

/// Largest chunk the engine accepts. Each counting task allocates one.
pub const MAX_CHUNK_SIZE: usize = 64 * 1024 * 1024;

/// Settings shared by the engine and the aggregator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountConfig {
    /// Worker threads used to count inputs concurrently.
    pub jobs: usize,
    /// Bytes requested from the stream per read.
    pub chunk_size: usize,
    pub decode_policy: DecodePolicy,
}

impl Default for CountConfig {
    fn default() -> Self {
        Self {
            jobs: num_cpus::get().max(1),
            chunk_size: DEFAULT_CHUNK_SIZE,
            decode_policy: DecodePolicy::default(),
        }
    }
}

impl CountConfig {
    /// Sets the worker count, clamped to at least one.
    #[must_use]
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs.max(1);
        self
    }

    /// Sets the read size, clamped to [`MIN_CHUNK_SIZE`]..=[`MAX_CHUNK_SIZE`].
    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.clamp(MIN_CHUNK_SIZE, MAX_CHUNK_SIZE);
        self
    }

    #[must_use]
    pub fn with_decode_policy(mut self, decode_policy: DecodePolicy) -> Self {
        self.decode_policy = decode_policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_at_least_one_job() {
        let config = CountConfig::default();
        assert!(config.jobs >= 1);
        assert_eq!(config.chunk_size, DEFAULT_CHUNK_SIZE);
        assert_eq!(config.decode_policy, DecodePolicy::Truncate);
    }

    #[test]
    fn builders_clamp_degenerate_values() {
        let config = CountConfig::default().with_jobs(0).with_chunk_size(1);
        assert_eq!(config.jobs, 1);
        assert_eq!(config.chunk_size, MIN_CHUNK_SIZE);

        let config = CountConfig::default().with_chunk_size(usize::MAX);
        assert_eq!(config.chunk_size, MAX_CHUNK_SIZE);
    }

    #[test]
    fn builders_chain() {
        let config = CountConfig::default()
            .with_jobs(3)
            .with_chunk_size(16)
            .with_decode_policy(DecodePolicy::Lossy);
        assert_eq!(config, CountConfig { jobs: 3, chunk_size: 16, decode_policy: DecodePolicy::Lossy });
    }
}
