// crates/infra/src/filesystem.rs
use std::{
    io,
    path::Path,
    sync::atomic::{AtomicBool, Ordering},
};

use tracing::trace;
use wc_ports::{InputOpener, InputStream};
use wc_shared_kernel::InputError;

use crate::persistence::FileReader;

/// Identifier that stands for standard input, as in classic `wc`.
pub const STDIN_IDENTIFIER: &str = "-";

/// Filesystem adapter implementing the `InputOpener` port.
///
/// Files are handed to the engine unbuffered; the engine reads in large
/// chunks of its own. Standard input is handed out once per opener: later
/// requests get an empty stream, as `wc - -` does.
#[derive(Debug, Default)]
pub struct FsInputOpener {
    stdin_taken: AtomicBool,
}

impl FsInputOpener {
    pub const fn new() -> Self {
        Self { stdin_taken: AtomicBool::new(false) }
    }
}

impl InputOpener for FsInputOpener {
    fn open(&self, identifier: &str) -> Result<InputStream, InputError> {
        if identifier == STDIN_IDENTIFIER {
            return self.open_stdin();
        }
        trace!(identifier, "opening file");
        let file = FileReader::open_regular(Path::new(identifier)).map_err(InputError::unavailable)?;
        Ok(Box::new(file))
    }

    fn open_stdin(&self) -> Result<InputStream, InputError> {
        if self.stdin_taken.swap(true, Ordering::AcqRel) {
            trace!("standard input already consumed");
            return Ok(Box::new(io::empty()));
        }
        Ok(Box::new(io::stdin()))
    }

    fn is_stdin(&self, identifier: &str) -> bool {
        identifier == STDIN_IDENTIFIER
    }
}
