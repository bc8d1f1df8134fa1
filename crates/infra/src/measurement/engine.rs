// crates/infra/src/measurement/engine.rs
use std::io::{ErrorKind, Read};

use tracing::{debug, trace};
use wc_domain::{
    config::{CountConfig, DEFAULT_CHUNK_SIZE, MAX_CHUNK_SIZE, MIN_CHUNK_SIZE},
    options::DecodePolicy,
};
use wc_ports::StreamCounter;
use wc_shared_kernel::{Counts, InputError};

use super::tally::Tally;

/// Longest incomplete UTF-8 prefix: a 4-byte sequence minus its last byte.
const MAX_CARRY: usize = 3;

/// Streaming engine: one forward pass, a fixed read buffer and a small
/// carry for code points split across reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamingCounter {
    chunk_size: usize,
    policy: DecodePolicy,
}

impl Default for StreamingCounter {
    fn default() -> Self {
        Self { chunk_size: DEFAULT_CHUNK_SIZE, policy: DecodePolicy::default() }
    }
}

impl StreamingCounter {
    pub fn new(config: &CountConfig) -> Self {
        Self::default()
            .with_chunk_size(config.chunk_size)
            .with_policy(config.decode_policy)
    }

    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.clamp(MIN_CHUNK_SIZE, MAX_CHUNK_SIZE);
        self
    }

    #[must_use]
    pub const fn with_policy(mut self, policy: DecodePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Counts `reader` until it is exhausted.
    ///
    /// # Errors
    ///
    /// [`InputError::ReadFailed`] when the reader fails with anything but
    /// `Interrupted`, and [`InputError::Malformed`] for invalid UTF-8 under
    /// [`DecodePolicy::Strict`].
    pub fn count_reader<R: Read + ?Sized>(&self, reader: &mut R) -> Result<Counts, InputError> {
        let mut pass = Pass { tally: Tally::default(), policy: self.policy };
        let mut buf = vec![0u8; MAX_CARRY + self.chunk_size];
        let mut carry = 0usize;

        loop {
            let read = match reader.read(&mut buf[carry..]) {
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(source) => {
                    return Err(InputError::ReadFailed { offset: pass.tally.offset() + carry as u64, source });
                }
            };

            if read == 0 {
                // A carry left at end of input is a truncated code point.
                if carry > 0 {
                    pass.malformed(carry)?;
                }
                return Ok(pass.tally.counts());
            }

            let filled = carry + read;
            match pass.feed(&buf[..filled])? {
                Step::Carry(tail) => {
                    buf.copy_within(filled - tail..filled, 0);
                    carry = tail;
                }
                Step::Stop => return Ok(pass.tally.counts()),
            }
            trace!(offset = pass.tally.offset(), carry, "chunk counted");
        }
    }
}

impl StreamCounter for StreamingCounter {
    fn count(&self, stream: &mut dyn Read) -> Result<Counts, InputError> {
        self.count_reader(stream)
    }
}

/// Counts `reader` with the engine described by `config`.
///
/// # Errors
///
/// See [`StreamingCounter::count_reader`].
pub fn count_reader<R: Read + ?Sized>(reader: &mut R, config: &CountConfig) -> Result<Counts, InputError> {
    StreamingCounter::new(config).count_reader(reader)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Chunk consumed; this many trailing bytes start an unfinished code point.
    Carry(usize),
    Stop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

struct Pass {
    tally: Tally,
    policy: DecodePolicy,
}

impl Pass {
    fn feed(&mut self, data: &[u8]) -> Result<Step, InputError> {
        let mut chunks = data.utf8_chunks().peekable();
        while let Some(chunk) = chunks.next() {
            self.tally.push_str(chunk.valid());

            let invalid = chunk.invalid();
            if invalid.is_empty() {
                continue;
            }
            if chunks.peek().is_none() && is_incomplete_tail(invalid) {
                return Ok(Step::Carry(invalid.len()));
            }
            if self.malformed(invalid.len())? == Flow::Stop {
                return Ok(Step::Stop);
            }
        }
        Ok(Step::Carry(0))
    }

    fn malformed(&mut self, len: usize) -> Result<Flow, InputError> {
        let offset = self.tally.offset();
        match self.policy {
            DecodePolicy::Truncate => {
                debug!(offset, "malformed UTF-8, counting stops here");
                Ok(Flow::Stop)
            }
            DecodePolicy::Strict => Err(InputError::Malformed { offset }),
            DecodePolicy::Lossy => {
                self.tally.push_opaque(len);
                Ok(Flow::Continue)
            }
        }
    }
}

/// True when `bytes` is a valid but unfinished UTF-8 prefix.
fn is_incomplete_tail(bytes: &[u8]) -> bool {
    matches!(std::str::from_utf8(bytes), Err(e) if e.error_len().is_none())
}
