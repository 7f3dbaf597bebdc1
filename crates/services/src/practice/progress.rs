/// Aggregated view of answering progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PracticeProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub is_revealed: bool,
}
