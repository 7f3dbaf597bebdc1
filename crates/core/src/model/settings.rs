use thiserror::Error;

use crate::model::question::QuestionKind;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("timer start must be > 0 seconds")]
    InvalidTimerStart,

    #[error("highlight duration must be > 0 ms")]
    InvalidHighlightDuration,

    #[error("scroll delay ({scroll_ms} ms) must be shorter than the highlight ({highlight_ms} ms)")]
    ScrollAfterClear { scroll_ms: u32, highlight_ms: u32 },
}

//
// ─── SETTINGS ──────────────────────────────────────────────────────────────────
//

/// Tunables for a practice session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    timer_start_secs: u32,
    scroll_delay_ms: u32,
    highlight_ms: u32,
    initial_kind: QuestionKind,
}

impl SessionSettings {
    /// Twenty-minute countdown, 100 ms scroll delay, 2 s highlight, true/false tab first.
    pub const DEFAULT_TIMER_SECS: u32 = 1200;
    pub const DEFAULT_SCROLL_DELAY_MS: u32 = 100;
    pub const DEFAULT_HIGHLIGHT_MS: u32 = 2000;

    /// Build validated settings.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` when the timer start is zero, the highlight
    /// duration is zero, or the scroll would fire after the highlight clears.
    pub fn new(
        timer_start_secs: u32,
        scroll_delay_ms: u32,
        highlight_ms: u32,
        initial_kind: QuestionKind,
    ) -> Result<Self, SettingsError> {
        if timer_start_secs == 0 {
            return Err(SettingsError::InvalidTimerStart);
        }
        if highlight_ms == 0 {
            return Err(SettingsError::InvalidHighlightDuration);
        }
        if scroll_delay_ms >= highlight_ms {
            return Err(SettingsError::ScrollAfterClear {
                scroll_ms: scroll_delay_ms,
                highlight_ms,
            });
        }

        Ok(Self {
            timer_start_secs,
            scroll_delay_ms,
            highlight_ms,
            initial_kind,
        })
    }

    /// # Errors
    ///
    /// Returns `SettingsError::InvalidTimerStart` for zero.
    pub fn with_timer_start_secs(mut self, secs: u32) -> Result<Self, SettingsError> {
        if secs == 0 {
            return Err(SettingsError::InvalidTimerStart);
        }
        self.timer_start_secs = secs;
        Ok(self)
    }

    #[must_use]
    pub fn with_initial_kind(mut self, kind: QuestionKind) -> Self {
        self.initial_kind = kind;
        self
    }

    #[must_use]
    pub fn timer_start_secs(&self) -> u32 {
        self.timer_start_secs
    }

    #[must_use]
    pub fn scroll_delay_ms(&self) -> u32 {
        self.scroll_delay_ms
    }

    #[must_use]
    pub fn highlight_ms(&self) -> u32 {
        self.highlight_ms
    }

    #[must_use]
    pub fn initial_kind(&self) -> QuestionKind {
        self.initial_kind
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            timer_start_secs: Self::DEFAULT_TIMER_SECS,
            scroll_delay_ms: Self::DEFAULT_SCROLL_DELAY_MS,
            highlight_ms: Self::DEFAULT_HIGHLIGHT_MS,
            initial_kind: QuestionKind::TrueFalse,
        }
    }
}
