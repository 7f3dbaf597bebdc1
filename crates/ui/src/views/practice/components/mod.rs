mod details;
mod passage;
mod questions;

pub use details::DetailedAnswers;
pub use passage::PassagePanel;
pub use questions::QuestionPanel;
