use crate::model::ids::AnchorId;

/// A run of passage text, optionally addressable by an anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Plain(String),
    Anchored { anchor: AnchorId, text: String },
}

impl Segment {
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Segment::Plain(text.into())
    }

    #[must_use]
    pub fn anchored(anchor: &str, text: impl Into<String>) -> Self {
        Segment::Anchored {
            anchor: AnchorId::new(anchor),
            text: text.into(),
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Segment::Plain(text) | Segment::Anchored { text, .. } => text,
        }
    }

    #[must_use]
    pub fn anchor(&self) -> Option<&AnchorId> {
        match self {
            Segment::Plain(_) => None,
            Segment::Anchored { anchor, .. } => Some(anchor),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    pub label: String,
    pub segments: Vec<Segment>,
}

impl Paragraph {
    #[must_use]
    pub fn new(label: impl Into<String>, segments: Vec<Segment>) -> Self {
        Self {
            label: label.into(),
            segments,
        }
    }
}

/// The reading passage. The passage body itself carries `anchor`, so a
/// reference can point at the whole text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passage {
    title: String,
    anchor: AnchorId,
    paragraphs: Vec<Paragraph>,
}

impl Passage {
    #[must_use]
    pub fn new(title: impl Into<String>, anchor: &str, paragraphs: Vec<Paragraph>) -> Self {
        Self {
            title: title.into(),
            anchor: AnchorId::new(anchor),
            paragraphs,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn anchor(&self) -> &AnchorId {
        &self.anchor
    }

    #[must_use]
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// Every anchor of the passage, body anchor first, then spans in reading order.
    pub fn anchors(&self) -> impl Iterator<Item = &AnchorId> {
        std::iter::once(&self.anchor).chain(
            self.paragraphs
                .iter()
                .flat_map(|paragraph| paragraph.segments.iter())
                .filter_map(Segment::anchor),
        )
    }

    /// How many anchors carry `anchor`. The anchor contract requires exactly one.
    #[must_use]
    pub fn anchor_count(&self, anchor: &AnchorId) -> usize {
        self.anchors().filter(|candidate| *candidate == anchor).count()
    }
}
