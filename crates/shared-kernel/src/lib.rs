// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    ErrorContext, InfraResult, InfrastructureError, InputError, InputErrorKind, PresentationError,
    Result, WcError,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{ByteCount, Counts, LineCount, WordCount};
