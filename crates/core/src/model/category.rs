use crate::model::question::QuestionKind;

/// Glyph hint for a category tab. Rendering is left to the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryIcon {
    CheckSquare,
    ListChecks,
    Type,
}

/// Metadata shown for one question kind: tab title, instructions and tips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionCategory {
    kind: QuestionKind,
    title: String,
    instructions: String,
    tips: Vec<String>,
    icon: CategoryIcon,
}

impl QuestionCategory {
    #[must_use]
    pub fn new(
        kind: QuestionKind,
        title: impl Into<String>,
        instructions: impl Into<String>,
        tips: &[&str],
        icon: CategoryIcon,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            instructions: instructions.into(),
            tips: tips.iter().map(|tip| (*tip).to_string()).collect(),
            icon,
        }
    }

    #[must_use]
    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// First word of the title, used on the compact category tabs.
    #[must_use]
    pub fn short_label(&self) -> &str {
        self.title.split_whitespace().next().unwrap_or(&self.title)
    }

    #[must_use]
    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    #[must_use]
    pub fn tips(&self) -> &[String] {
        &self.tips
    }

    #[must_use]
    pub fn icon(&self) -> CategoryIcon {
        self.icon
    }
}
