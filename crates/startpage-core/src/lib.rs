//! # Startpage Core Library
//!
//! The state behind a personal start-page dashboard: todos, quick links, a
//! mood log, a pomodoro timer and the focus statistics it feeds. Rendering is
//! someone else's job; the `startpage` CLI is one such view layer.
//!
//! ## Architecture
//!
//! - **Storage**: every model persists one named JSON record through a
//!   [`PersistentStore`], backed by SQLite or memory. Corrupt records load as
//!   defaults.
//! - **Models**: [`TodoList`], [`QuickLinks`], [`MoodTracker`] and
//!   [`PomodoroEngine`] own their data and expose their mutations as the only
//!   write path. Each mutation is persisted before it returns.
//! - **Timer**: a wall-clock state machine that the host drives with
//!   `on_tick()` once per second, or `sync()` after an absence.
//! - **Stats**: [`FocusStats`] summarises logged sessions per week or month.
//!
//! Declined input (blank text, unknown mood, bad index) is reported as
//! `Ok(false)`, never as an error.

pub mod clock;
pub mod dashboard;
pub mod error;
pub mod events;
pub mod greeting;
pub mod links;
mod list;
pub mod mood;
pub mod prefs;
pub mod search;
pub mod stats;
pub mod storage;
pub mod timer;
pub mod todo;

pub use clock::{Clock, ManualClock, SystemClock};
pub use dashboard::Dashboard;
pub use error::{ConfigError, CoreError, Result, StorageError};
pub use events::Event;
pub use links::{QuickLink, QuickLinks};
pub use mood::{Mood, MoodRecord, MoodStats, MoodTracker};
pub use prefs::{Preferences, Theme};
pub use search::{search_url, SearchEngine};
pub use stats::{Bucket, FocusStats, FocusSummary, Period};
pub use storage::{Backend, Config, Database, MemoryBackend, PersistentStore};
pub use timer::{FocusSession, PomodoroEngine, PomodoroState, TimerState};
pub use todo::{Priority, TodoItem, TodoList};
