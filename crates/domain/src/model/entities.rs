pub mod input_result;
pub mod report;

pub use input_result::{InputResult, InputState};
pub use report::{BatchReport, CountReport};
