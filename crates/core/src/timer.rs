//! Countdown clock for self-paced practice.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Stopped,
    Running,
}

/// Whole-second countdown driven by external ticks.
///
/// Reaching zero does not stop the timer: the state stays `Running` and
/// further ticks are no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
    state: TimerState,
}

impl Countdown {
    #[must_use]
    pub fn new(start_secs: u32) -> Self {
        Self {
            remaining: start_secs,
            state: TimerState::Stopped,
        }
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub fn state(&self) -> TimerState {
        self.state
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }

    pub fn start(&mut self) {
        self.state = TimerState::Running;
    }

    pub fn pause(&mut self) {
        self.state = TimerState::Stopped;
    }

    pub fn toggle(&mut self) {
        match self.state {
            TimerState::Running => self.pause(),
            TimerState::Stopped => self.start(),
        }
    }

    /// Advance by one elapsed second. Returns true if the display changed.
    pub fn tick(&mut self) -> bool {
        if self.state != TimerState::Running || self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }

    #[must_use]
    pub fn label(&self) -> String {
        format_clock(self.remaining)
    }
}

/// `m:ss`, minutes unpadded.
#[must_use]
pub fn format_clock(seconds: u32) -> String {
    let minutes = seconds / 60;
    let remainder = seconds % 60;
    format!("{minutes}:{remainder:02}")
}
