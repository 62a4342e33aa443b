mod engine;
mod history;
mod ticker;

pub use engine::{PomodoroEngine, PomodoroState, TimerState};
pub use history::{FocusLog, FocusSession};
pub use ticker::{TickToken, Ticker, TICK_INTERVAL};
