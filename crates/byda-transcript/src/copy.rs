use std::time::{Duration, Instant};

use serde::Serialize;

/// How long a copy result stays visible before the label reverts
pub const COPY_RESET_AFTER: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CopyState {
    Idle,
    Copied,
    Failed,
}

impl CopyState {
    pub fn label(&self) -> &'static str {
        match self {
            CopyState::Idle => "Copy",
            CopyState::Copied => "Copied!",
            CopyState::Failed => "Failed to copy",
        }
    }
}

/// Transient label of a copy-to-clipboard button.
///
/// `idle -> copied -> idle` or `idle -> failed -> idle`. Time is passed in so
/// transitions are deterministic; a new attempt restarts the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyFeedback {
    state: CopyState,
    expires_at: Option<Instant>,
}

impl Default for CopyFeedback {
    fn default() -> Self {
        Self::new()
    }
}

impl CopyFeedback {
    pub fn new() -> Self {
        Self {
            state: CopyState::Idle,
            expires_at: None,
        }
    }

    /// Record the outcome of a clipboard write made at `now`.
    pub fn record(&mut self, copied: bool, now: Instant) {
        self.state = if copied {
            CopyState::Copied
        } else {
            CopyState::Failed
        };
        self.expires_at = Some(now + COPY_RESET_AFTER);
    }

    /// Current state, reverting to idle once the delay has elapsed.
    pub fn state(&mut self, now: Instant) -> CopyState {
        if let Some(expires_at) = self.expires_at {
            if now >= expires_at {
                self.state = CopyState::Idle;
                self.expires_at = None;
            }
        }
        self.state
    }

    pub fn label(&mut self, now: Instant) -> &'static str {
        self.state(now).label()
    }
}
