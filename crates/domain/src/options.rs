// crates/domain/src/options.rs
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// What the counting engine does when it meets a byte sequence that is not
/// valid UTF-8.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodePolicy {
    /// Stop counting at the malformed sequence and report what was counted
    /// up to that offset as a success.
    #[default]
    Truncate,
    /// Fail the input with a malformed-encoding error.
    Strict,
    /// Count the malformed bytes as one non-whitespace character and go on.
    Lossy,
}

impl DecodePolicy {
    pub const ALL: [Self; 3] = [Self::Truncate, Self::Strict, Self::Lossy];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Truncate => "truncate",
            Self::Strict => "strict",
            Self::Lossy => "lossy",
        }
    }
}

impl fmt::Display for DecodePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DecodePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "truncate" | "stop" => Ok(Self::Truncate),
            "strict" | "error" => Ok(Self::Strict),
            "lossy" | "replace" => Ok(Self::Lossy),
            other => Err(format!("Unknown decode policy: {other}")),
        }
    }
}
