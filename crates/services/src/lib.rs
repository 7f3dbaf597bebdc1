#![forbid(unsafe_code)]

pub mod error;
pub mod practice;

pub use quiz_core::Clock;

pub use error::PracticeError;
pub use practice::{PracticeProgress, PracticeService, PracticeSession};
