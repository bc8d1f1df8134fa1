// crates/ports/src/input.rs
use std::io::Read;

use wc_shared_kernel::InputError;

/// An opened input, owned by exactly one counting task.
pub type InputStream = Box<dyn Read + Send>;

/// Port resolving identifiers to byte streams.
///
/// Failures are reported as [`InputError::Unavailable`] and stay attached to
/// the identifier that caused them.
pub trait InputOpener: Send + Sync {
    fn open(&self, identifier: &str) -> Result<InputStream, InputError>;

    fn open_stdin(&self) -> Result<InputStream, InputError>;

    /// True when `identifier` names the process's standard input. Such
    /// identifiers share one stream and are counted in order on one task.
    fn is_stdin(&self, _identifier: &str) -> bool {
        false
    }
}
