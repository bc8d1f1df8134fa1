use wc_shared_kernel::{Counts, InputError};

/// Lifecycle of one requested input inside a batch.
///
/// `Submitted -> Counting -> Completed | Failed`. There are no retries and
/// terminal states never move again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum InputState {
    #[default]
    Submitted,
    Counting,
    Completed,
    Failed,
}

impl InputState {
    /// `Submitted -> Counting`; `None` from any other state.
    pub const fn start(self) -> Option<Self> {
        match self {
            Self::Submitted => Some(Self::Counting),
            _ => None,
        }
    }

    /// `Counting -> Completed | Failed`; `None` from any other state.
    pub const fn finish(self, succeeded: bool) -> Option<Self> {
        match (self, succeeded) {
            (Self::Counting, true) => Some(Self::Completed),
            (Self::Counting, false) => Some(Self::Failed),
            _ => None,
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

/// Outcome for one identifier. Failed results carry zero counts.
#[derive(Debug)]
pub struct InputResult {
    pub identifier: String,
    pub counts: Counts,
    pub error: Option<InputError>,
}

impl InputResult {
    pub fn completed(identifier: impl Into<String>, counts: Counts) -> Self {
        Self { identifier: identifier.into(), counts, error: None }
    }

    pub fn failed(identifier: impl Into<String>, error: InputError) -> Self {
        Self { identifier: identifier.into(), counts: Counts::ZERO, error: Some(error) }
    }

    pub fn from_outcome(identifier: impl Into<String>, outcome: Result<Counts, InputError>) -> Self {
        match outcome {
            Ok(counts) => Self::completed(identifier, counts),
            Err(error) => Self::failed(identifier, error),
        }
    }

    pub const fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Counts that may enter a total: `None` for failed inputs.
    pub fn successful_counts(&self) -> Option<Counts> {
        self.error.is_none().then_some(self.counts)
    }
}
