use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::{FocusSession, TimerState};

/// Every pomodoro state change produces an Event.
/// The view layer re-renders from these; nothing else subscribes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    TimerPaused {
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    TimerReset {
        at: DateTime<Utc>,
    },
    /// Countdown reached zero naturally and a session was logged.
    TimerCompleted {
        session: FocusSession,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        state: TimerState,
        remaining_secs: u32,
        total_secs: u32,
        /// `MM:SS` countdown label.
        display: String,
        progress: f64,
        at: DateTime<Utc>,
    },
}
