mod category;
mod ids;
mod passage;
mod question;
mod settings;

pub use ids::{AnchorId, ParseIdError, QuestionId};

pub use category::{CategoryIcon, QuestionCategory};
pub use passage::{Paragraph, Passage, Segment};
pub use question::{MatchItem, MatchSet, ParseKindError, Question, QuestionKind, Reference};
pub use settings::{SessionSettings, SettingsError};
