pub mod entities;

pub use entities::{BatchReport, CountReport, InputResult, InputState};
