// crates/shared-kernel/src/error.rs
use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum WcError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<WcError>,
    },

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

pub type Result<T> = std::result::Result<T, WcError>;

/// Per-input failure. Recorded on the input's result, never fatal to a batch.
#[derive(Debug, Error)]
pub enum InputError {
    /// The opener could not produce a readable stream.
    #[error("{source}")]
    Unavailable {
        #[source]
        source: std::io::Error,
    },

    /// The stream broke after it was opened.
    #[error("read failed after {offset} bytes: {source}")]
    ReadFailed {
        offset: u64,
        #[source]
        source: std::io::Error,
    },

    /// Malformed UTF-8, only raised under the strict decode policy.
    #[error("invalid UTF-8 sequence at byte {offset}")]
    Malformed { offset: u64 },
}

/// Discriminant of [`InputError`], handy for assertions and JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputErrorKind {
    Unavailable,
    ReadFailed,
    Malformed,
}

impl InputError {
    pub fn unavailable(source: std::io::Error) -> Self {
        Self::Unavailable { source }
    }

    pub const fn kind(&self) -> InputErrorKind {
        match self {
            Self::Unavailable { .. } => InputErrorKind::Unavailable,
            Self::ReadFailed { .. } => InputErrorKind::ReadFailed,
            Self::Malformed { .. } => InputErrorKind::Malformed,
        }
    }
}

impl InputErrorKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unavailable => "unavailable",
            Self::ReadFailed => "read_failed",
            Self::Malformed => "malformed",
        }
    }
}

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Thread pool creation failed: {details}")]
    ThreadPoolCreation { details: String },

    #[error("Counting worker panicked while processing input #{index}")]
    WorkerPanicked { index: usize },

    #[error("Output error: {message}")]
    OutputError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Invalid CLI value: {flag} = {value} - {reason}")]
    InvalidValue {
        flag: String,
        value: String,
        reason: String,
    },

    #[error("Failed to serialize {format} output: {details}")]
    Serialization { format: String, details: String },
}

impl From<std::io::Error> for InfrastructureError {
    fn from(err: std::io::Error) -> Self {
        Self::OutputError { message: err.to_string(), source: Some(Box::new(err)) }
    }
}

impl From<std::io::Error> for WcError {
    fn from(err: std::io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<WcError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| WcError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| WcError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
