//! Pomodoro engine implementation.
//!
//! A single-countdown state machine. It does not own a thread: the host
//! calls [`PomodoroEngine::on_tick`] once per [`TICK_INTERVAL`] with the token
//! it got from [`PomodoroEngine::tick_token`], or [`PomodoroEngine::sync`] to
//! catch up on wall-clock seconds after being away.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running -> Paused -> Running ...
//!           |          |
//!           |          +-> Idle (reset)
//!           +-> Idle (reset, or countdown hits zero and a session is logged)
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = PomodoroEngine::load(store, clock, 1500, Duration::days(30));
//! engine.start()?;
//! // once per second:
//! if let Some(token) = engine.tick_token() {
//!     engine.on_tick(token)?; // Some(Event::TimerCompleted) at zero
//! }
//! ```

use chrono::{DateTime, Duration, Local, Utc};
use serde::{Deserialize, Serialize};
use std::rc::Rc;

use super::history::{FocusLog, FocusSession};
use super::ticker::{TickToken, Ticker};
use crate::clock::Clock;
use crate::error::Result;
use crate::events::Event;
use crate::storage::{keys, PersistentStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    Idle,
    Running,
    Paused,
}

/// Persisted countdown state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PomodoroState {
    pub remaining_seconds: u32,
    pub running: bool,
    /// Set by every `start`, cleared on reset and completion.
    pub started_at: Option<DateTime<Utc>>,
    /// Instant of the last applied tick, used by `sync`.
    #[serde(default)]
    pub last_tick_at: Option<DateTime<Utc>>,
}

impl PomodoroState {
    fn idle(total_secs: u32) -> Self {
        Self {
            remaining_seconds: total_secs,
            running: false,
            started_at: None,
            last_tick_at: None,
        }
    }
}

pub struct PomodoroEngine {
    store: PersistentStore,
    clock: Rc<dyn Clock>,
    total_secs: u32,
    state: PomodoroState,
    ticker: Ticker,
    log: FocusLog,
}

impl PomodoroEngine {
    /// Hydrate state and history. A persisted running timer comes back armed.
    pub fn load(
        store: PersistentStore,
        clock: Rc<dyn Clock>,
        total_secs: u32,
        history_retention: Duration,
    ) -> Self {
        let mut state = store
            .try_load::<PomodoroState>(keys::POMODORO_STATE)
            .unwrap_or_else(|| PomodoroState::idle(total_secs));
        if state.started_at.is_none() && !state.running {
            state.remaining_seconds = total_secs;
        }
        state.remaining_seconds = state.remaining_seconds.min(total_secs);

        let mut ticker = Ticker::default();
        if state.running {
            ticker.arm();
        }
        let log = FocusLog::load(store.clone(), history_retention);
        Self {
            store,
            clock,
            total_secs,
            state,
            ticker,
            log,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> TimerState {
        if self.state.running {
            TimerState::Running
        } else if self.state.started_at.is_some() {
            TimerState::Paused
        } else {
            TimerState::Idle
        }
    }

    pub fn pomodoro_state(&self) -> &PomodoroState {
        &self.state
    }

    pub fn remaining_secs(&self) -> u32 {
        self.state.remaining_seconds
    }

    pub fn total_secs(&self) -> u32 {
        self.total_secs
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    pub fn sessions(&self) -> &[FocusSession] {
        self.log.sessions()
    }

    /// Token for the live tick schedule; `None` unless running.
    pub fn tick_token(&self) -> Option<TickToken> {
        self.ticker.token()
    }

    /// 0.0 .. 1.0 progress through the countdown.
    pub fn progress(&self) -> f64 {
        if self.total_secs == 0 {
            return 0.0;
        }
        1.0 - (f64::from(self.state.remaining_seconds) / f64::from(self.total_secs))
    }

    /// `MM:SS` label for the remaining time.
    pub fn display(&self) -> String {
        let secs = self.state.remaining_seconds;
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }

    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            state: self.state(),
            remaining_secs: self.state.remaining_seconds,
            total_secs: self.total_secs,
            display: self.display(),
            progress: self.progress(),
            at: self.now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn start(&mut self) -> Result<Option<Event>> {
        if self.state.running {
            return Ok(None);
        }
        let now = self.now();
        let next = PomodoroState {
            running: true,
            started_at: Some(now),
            last_tick_at: Some(now),
            ..self.state.clone()
        };
        self.commit(next)?;
        self.ticker.arm();
        tracing::debug!(remaining = self.state.remaining_seconds, "pomodoro started");
        Ok(Some(Event::TimerStarted {
            remaining_secs: self.state.remaining_seconds,
            at: now,
        }))
    }

    pub fn pause(&mut self) -> Result<Option<Event>> {
        if !self.state.running {
            return Ok(None);
        }
        let next = PomodoroState {
            running: false,
            last_tick_at: None,
            ..self.state.clone()
        };
        self.commit(next)?;
        self.ticker.cancel();
        Ok(Some(Event::TimerPaused {
            remaining_secs: self.state.remaining_seconds,
            at: self.now(),
        }))
    }

    pub fn reset(&mut self) -> Result<Option<Event>> {
        self.commit(PomodoroState::idle(self.total_secs))?;
        self.ticker.cancel();
        Ok(Some(Event::TimerReset { at: self.now() }))
    }

    /// One countdown step. Returns `Some(Event::TimerCompleted)` when the
    /// countdown reaches zero.
    pub fn tick(&mut self) -> Result<Option<Event>> {
        let now = self.now();
        self.advance(1, now)
    }

    /// Tick only if `token` belongs to the live schedule.
    pub fn on_tick(&mut self, token: TickToken) -> Result<Option<Event>> {
        if !self.ticker.accepts(token) {
            return Ok(None);
        }
        self.tick()
    }

    /// Apply every whole second elapsed since the last tick.
    pub fn sync(&mut self) -> Result<Option<Event>> {
        let Some(last) = self.state.last_tick_at.filter(|_| self.state.running) else {
            return Ok(None);
        };
        let elapsed = (self.now() - last).num_seconds();
        if elapsed <= 0 {
            return Ok(None);
        }
        let steps = u32::try_from(elapsed).unwrap_or(u32::MAX);
        self.advance(steps, last + Duration::seconds(i64::from(steps)))
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn advance(&mut self, steps: u32, tick_at: DateTime<Utc>) -> Result<Option<Event>> {
        if !self.state.running || steps == 0 {
            return Ok(None);
        }
        let remaining = self.state.remaining_seconds.saturating_sub(steps);
        if remaining > 0 {
            let next = PomodoroState {
                remaining_seconds: remaining,
                last_tick_at: Some(tick_at),
                ..self.state.clone()
            };
            self.commit(next)?;
            return Ok(None);
        }
        // Seconds applied past zero did not happen.
        let overshoot = steps - self.state.remaining_seconds;
        self.complete(tick_at - Duration::seconds(i64::from(overshoot)))
    }

    fn complete(&mut self, at: DateTime<Utc>) -> Result<Option<Event>> {
        let started_at = self.state.started_at.unwrap_or(at);
        let duration_minutes = ((at - started_at).num_milliseconds() as f64 / 60_000.0).max(0.0);
        let session = FocusSession {
            date: at.with_timezone(&Local).date_naive(),
            duration_minutes,
            timestamp: at,
        };

        // Idle first: if the log write then fails the session is lost, but
        // the countdown can never complete a second time.
        self.commit(PomodoroState::idle(self.total_secs))?;
        self.ticker.cancel();
        self.log.append(session.clone(), at)?;
        tracing::info!(minutes = duration_minutes, "focus session completed");
        Ok(Some(Event::TimerCompleted { session, at }))
    }

    fn commit(&mut self, next: PomodoroState) -> Result<()> {
        self.store.save(keys::POMODORO_STATE, &next)?;
        self.state = next;
        Ok(())
    }

    fn now(&self) -> DateTime<Utc> {
        self.clock.now().with_timezone(&Utc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::error::StorageError;
    use crate::storage::{Backend, MemoryBackend};
    use chrono::TimeZone;
    use std::cell::RefCell;

    const TOTAL: u32 = 1500;

    /// Memory backend whose writes to one key can be made to fail.
    #[derive(Clone, Default)]
    struct FlakyBackend {
        inner: MemoryBackend,
        failing: Rc<RefCell<Option<&'static str>>>,
    }

    impl Backend for FlakyBackend {
        fn get_raw(&self, key: &str) -> Result<Option<String>> {
            self.inner.get_raw(key)
        }

        fn set_raw(&self, key: &str, value: &str) -> Result<()> {
            if self.failing.borrow().is_some_and(|k| k == key) {
                return Err(StorageError::QueryFailed(format!("write to {key} failed")).into());
            }
            self.inner.set_raw(key, value)
        }

        fn remove_raw(&self, key: &str) -> Result<()> {
            self.inner.remove_raw(key)
        }
    }

    fn flaky_setup() -> (FlakyBackend, ManualClock, PomodoroEngine) {
        let backend = FlakyBackend::default();
        let clock = ManualClock::new(Local.with_ymd_and_hms(2026, 4, 14, 9, 0, 0).unwrap());
        let engine = PomodoroEngine::load(
            PersistentStore::new(backend.clone()),
            Rc::new(clock.clone()),
            TOTAL,
            Duration::days(30),
        );
        (backend, clock, engine)
    }

    fn setup() -> (PersistentStore, ManualClock, PomodoroEngine) {
        let store = PersistentStore::in_memory();
        let clock = ManualClock::new(Local.with_ymd_and_hms(2026, 4, 14, 9, 0, 0).unwrap());
        let engine = PomodoroEngine::load(
            store.clone(),
            Rc::new(clock.clone()),
            TOTAL,
            Duration::days(30),
        );
        (store, clock, engine)
    }

    fn run_ticks(engine: &mut PomodoroEngine, clock: &ManualClock, n: u32) -> Vec<Event> {
        let mut events = Vec::new();
        for _ in 0..n {
            clock.advance(Duration::seconds(1));
            if let Some(token) = engine.tick_token() {
                if let Some(event) = engine.on_tick(token).unwrap() {
                    events.push(event);
                }
            }
        }
        events
    }

    #[test]
    fn starts_idle_with_full_time() {
        let (_, _, engine) = setup();
        assert_eq!(engine.state(), TimerState::Idle);
        assert_eq!(engine.remaining_secs(), TOTAL);
        assert_eq!(engine.display(), "25:00");
        assert!(engine.tick_token().is_none());
    }

    #[test]
    fn start_pause_resume() {
        let (_, clock, mut engine) = setup();
        assert!(engine.start().unwrap().is_some());
        assert_eq!(engine.state(), TimerState::Running);
        assert!(engine.start().unwrap().is_none());

        run_ticks(&mut engine, &clock, 5);
        assert!(engine.pause().unwrap().is_some());
        assert_eq!(engine.state(), TimerState::Paused);
        assert_eq!(engine.remaining_secs(), TOTAL - 5);
        assert!(engine.pause().unwrap().is_none());

        engine.start().unwrap();
        assert_eq!(engine.state(), TimerState::Running);
        assert_eq!(engine.remaining_secs(), TOTAL - 5);
    }

    #[test]
    fn full_countdown_logs_one_session() {
        let (_, clock, mut engine) = setup();
        engine.start().unwrap();
        let events = run_ticks(&mut engine, &clock, TOTAL);

        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], Event::TimerCompleted { .. }));
        assert_eq!(engine.state(), TimerState::Idle);
        assert_eq!(engine.remaining_secs(), TOTAL);
        assert_eq!(engine.sessions().len(), 1);
        let session = &engine.sessions()[0];
        assert!((session.duration_minutes - 25.0).abs() < 1e-9);
        assert_eq!(
            session.date,
            chrono::NaiveDate::from_ymd_opt(2026, 4, 14).unwrap()
        );
    }

    #[test]
    fn pause_then_reset_logs_nothing() {
        let (_, clock, mut engine) = setup();
        engine.start().unwrap();
        run_ticks(&mut engine, &clock, 5);
        engine.pause().unwrap();
        engine.reset().unwrap();

        assert!(engine.sessions().is_empty());
        assert_eq!(engine.remaining_secs(), TOTAL);
        assert_eq!(engine.state(), TimerState::Idle);
    }

    #[test]
    fn stale_token_after_cancel_never_fires() {
        let (_, clock, mut engine) = setup();
        engine.start().unwrap();
        let token = engine.tick_token().unwrap();
        run_ticks(&mut engine, &clock, TOTAL - 1);
        assert_eq!(engine.remaining_secs(), 1);

        engine.pause().unwrap();
        clock.advance(Duration::seconds(1));
        assert!(engine.on_tick(token).unwrap().is_none());
        assert_eq!(engine.remaining_secs(), 1);
        assert!(engine.sessions().is_empty());
    }

    #[test]
    fn tick_while_idle_is_noop() {
        let (_, _, mut engine) = setup();
        assert!(engine.tick().unwrap().is_none());
        assert_eq!(engine.remaining_secs(), TOTAL);
    }

    #[test]
    fn completion_fires_once() {
        let (_, clock, mut engine) = setup();
        engine.start().unwrap();
        let events = run_ticks(&mut engine, &clock, TOTAL + 10);
        assert_eq!(events.len(), 1);
        assert_eq!(engine.sessions().len(), 1);
    }

    #[test]
    fn failed_state_write_at_completion_logs_nothing() {
        let (backend, clock, mut engine) = flaky_setup();
        engine.start().unwrap();
        run_ticks(&mut engine, &clock, TOTAL - 1);

        *backend.failing.borrow_mut() = Some(keys::POMODORO_STATE);
        clock.advance(Duration::seconds(1));
        assert!(engine.tick().is_err());
        assert_eq!(engine.state(), TimerState::Running);
        assert_eq!(engine.remaining_secs(), 1);
        assert!(engine.sessions().is_empty());

        *backend.failing.borrow_mut() = None;
        let event = engine.tick().unwrap();
        assert!(matches!(event, Some(Event::TimerCompleted { .. })));
        assert_eq!(engine.sessions().len(), 1);
        assert!(engine.tick().unwrap().is_none());
        assert_eq!(engine.sessions().len(), 1);
    }

    #[test]
    fn failed_log_write_at_completion_never_completes_twice() {
        let (backend, clock, mut engine) = flaky_setup();
        engine.start().unwrap();
        run_ticks(&mut engine, &clock, TOTAL - 1);

        *backend.failing.borrow_mut() = Some(keys::FOCUS_HISTORY);
        clock.advance(Duration::seconds(1));
        assert!(engine.tick().is_err());
        assert_eq!(engine.state(), TimerState::Idle);
        assert!(engine.tick_token().is_none());

        *backend.failing.borrow_mut() = None;
        assert!(run_ticks(&mut engine, &clock, 10).is_empty());
        assert!(engine.sessions().is_empty());
    }

    #[test]
    fn duration_counts_from_latest_start() {
        let (_, clock, mut engine) = setup();
        engine.start().unwrap();
        run_ticks(&mut engine, &clock, 300);
        engine.pause().unwrap();
        clock.advance(Duration::minutes(10));
        engine.start().unwrap();
        run_ticks(&mut engine, &clock, TOTAL - 300);

        let session = &engine.sessions()[0];
        assert!((session.duration_minutes - 20.0).abs() < 1e-9);
    }

    #[test]
    fn sync_catches_up_elapsed_seconds() {
        let (_, clock, mut engine) = setup();
        engine.start().unwrap();
        clock.advance(Duration::milliseconds(90_500));
        assert!(engine.sync().unwrap().is_none());
        assert_eq!(engine.remaining_secs(), TOTAL - 90);

        clock.advance(Duration::hours(1));
        let event = engine.sync().unwrap();
        assert!(matches!(event, Some(Event::TimerCompleted { .. })));
        assert_eq!(engine.state(), TimerState::Idle);
        // The session ends when the countdown hit zero, not when we looked.
        assert!((engine.sessions()[0].duration_minutes - 25.0).abs() < 1e-9);
    }

    #[test]
    fn running_state_survives_reload() {
        let (store, clock, mut engine) = setup();
        engine.start().unwrap();
        run_ticks(&mut engine, &clock, 60);
        drop(engine);

        let reloaded =
            PomodoroEngine::load(store, Rc::new(clock.clone()), TOTAL, Duration::days(30));
        assert_eq!(reloaded.state(), TimerState::Running);
        assert_eq!(reloaded.remaining_secs(), TOTAL - 60);
        assert!(reloaded.tick_token().is_some());
    }

    #[test]
    fn idle_state_picks_up_new_total() {
        let (store, clock, mut engine) = setup();
        engine.reset().unwrap();
        let reloaded = PomodoroEngine::load(store, Rc::new(clock), 600, Duration::days(30));
        assert_eq!(reloaded.remaining_secs(), 600);
        assert_eq!(reloaded.total_secs(), 600);
    }

    #[test]
    fn corrupt_state_loads_idle() {
        let store = PersistentStore::in_memory();
        store.save(keys::POMODORO_STATE, "garbage").unwrap();
        let clock = ManualClock::new(Local::now());
        let engine = PomodoroEngine::load(store, Rc::new(clock), TOTAL, Duration::days(30));
        assert_eq!(engine.state(), TimerState::Idle);
        assert_eq!(engine.remaining_secs(), TOTAL);
    }
}
