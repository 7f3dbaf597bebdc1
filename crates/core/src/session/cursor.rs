/// Bounded index for one-at-a-time stepping through a sequence.
///
/// The index always stays in `[0, len - 1]`, or at 0 for an empty sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    index: usize,
    len: usize,
}

impl Cursor {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.len
    }

    pub fn next(&mut self) {
        self.go_to(self.index.saturating_add(1));
    }

    pub fn previous(&mut self) {
        self.go_to(self.index.saturating_sub(1));
    }

    pub fn go_to(&mut self, index: usize) {
        self.index = index.min(self.len.saturating_sub(1));
    }
}
