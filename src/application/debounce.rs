use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Lifecycle of the picker's lookup pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    AwaitingDebounce,
    Fetching,
    Rendered,
}

/// Per-picker debounce state, reset on every keystroke.
///
/// A keystroke always schedules a fetch a flat window after itself; a
/// keystroke landing within the window of the previously scheduled one
/// additionally cancels that pending timer.
#[derive(Debug, Default)]
pub struct Debounce {
    pub last_scheduled: Option<Instant>,
    pub pending: Option<JoinHandle<()>>,
    pub phase: Phase,
}

impl Debounce {
    /// Whether `now` falls inside the window of the previously
    /// scheduled keystroke (inclusive, matching the original compare).
    pub fn within_window(&self, now: Instant, window: Duration) -> bool {
        match self.last_scheduled {
            Some(prev) => now.duration_since(prev) <= window,
            None => false,
        }
    }

    pub fn abort_pending(&mut self) {
        if let Some(timer) = self.pending.take() {
            timer.abort();
        }
    }
}
