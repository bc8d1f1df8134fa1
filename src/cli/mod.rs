mod args;
mod parsers;
mod value_enum;

pub use args::Args;
pub use value_enum::{CliDecodePolicy, CliOutputFormat};
