//! All widgets hydrated from one store.
//!
//! The models never talk to each other; the dashboard only wires them to the
//! same store, clock and config, and derives the cross-widget views
//! (greeting, focus summary).

use chrono::Duration;
use std::rc::Rc;

use crate::clock::{Clock, SystemClock};
use crate::error::Result;
use crate::greeting::greeting;
use crate::links::QuickLinks;
use crate::mood::MoodTracker;
use crate::prefs::Preferences;
use crate::search::search_url;
use crate::stats::{FocusStats, FocusSummary, Period};
use crate::storage::{Config, Database, PersistentStore};
use crate::timer::PomodoroEngine;
use crate::todo::TodoList;

pub struct Dashboard {
    pub todos: TodoList,
    pub links: QuickLinks,
    pub mood: MoodTracker,
    pub pomodoro: PomodoroEngine,
    pub prefs: Preferences,
    config: Config,
    clock: Rc<dyn Clock>,
}

impl Dashboard {
    /// Open the on-disk store with the on-disk config and the system clock.
    pub fn open() -> Result<Self> {
        let store = PersistentStore::new(Database::open()?);
        Ok(Self::load(store, Config::load_or_default(), Rc::new(SystemClock)))
    }

    pub fn load(store: PersistentStore, config: Config, clock: Rc<dyn Clock>) -> Self {
        let mood = MoodTracker::load(
            store.clone(),
            clock.clone(),
            Duration::days(i64::from(config.mood.retention_days)),
        );
        let pomodoro = PomodoroEngine::load(
            store.clone(),
            clock.clone(),
            config.pomodoro.total_secs(),
            Duration::days(i64::from(config.focus.retention_days)),
        );
        Self {
            todos: TodoList::load(store.clone()),
            links: QuickLinks::load(store.clone()),
            mood,
            pomodoro,
            prefs: Preferences::new(store),
            config,
            clock,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn greeting(&self) -> &'static str {
        let window = Duration::hours(i64::from(self.config.mood.empathy_window_hours));
        let recent = self.mood.recent_mood(window).map(|r| r.mood);
        greeting(self.clock.now(), recent)
    }

    pub fn focus_summary(&self, period: Period) -> FocusSummary {
        FocusStats::new(self.config.focus.achievement_hours).summarize(
            period,
            self.pomodoro.sessions(),
            self.clock.now(),
        )
    }

    pub fn search_url(&self, query: &str) -> Option<String> {
        search_url(query, self.config.search.default_engine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::timer::TimerState;
    use chrono::{Local, TimeZone};

    fn dashboard_at(hour: u32) -> (ManualClock, Dashboard) {
        let clock = ManualClock::new(Local.with_ymd_and_hms(2026, 9, 1, hour, 0, 0).unwrap());
        let dash = Dashboard::load(
            PersistentStore::in_memory(),
            Config::default(),
            Rc::new(clock.clone()),
        );
        (clock, dash)
    }

    #[test]
    fn greeting_switches_on_recent_low_mood() {
        let (clock, mut dash) = dashboard_at(9);
        assert_eq!(dash.greeting(), "Good morning, welcome back");

        dash.mood.record("sad").unwrap();
        assert_eq!(dash.greeting(), "Rough day? Be gentle with yourself");

        clock.advance(Duration::hours(3));
        assert_eq!(dash.greeting(), "Good afternoon, keep going");

        dash.mood.record("tired").unwrap();
        clock.set(Local.with_ymd_and_hms(2026, 9, 1, 19, 0, 0).unwrap());
        assert_eq!(dash.greeting(), "Good evening, time to rest");
    }

    #[test]
    fn completed_pomodoro_shows_in_week_summary() {
        let (clock, mut dash) = dashboard_at(10);
        dash.pomodoro.start().unwrap();
        for _ in 0..dash.pomodoro.total_secs() {
            clock.advance(Duration::seconds(1));
            dash.pomodoro.tick().unwrap();
        }
        assert_eq!(dash.pomodoro.state(), TimerState::Idle);

        let summary = dash.focus_summary(Period::Week);
        assert_eq!(summary.buckets[6].minutes, 25.0);
        assert_eq!(summary.total_hours, 0.4);
    }

    #[test]
    fn oversized_retention_config_does_not_panic() {
        let clock = ManualClock::new(Local.with_ymd_and_hms(2026, 9, 1, 9, 0, 0).unwrap());
        let mut config = Config::default();
        config.apply("mood.retention_days", "4000000000").unwrap();
        config.apply("focus.retention_days", "4000000000").unwrap();
        let store = PersistentStore::in_memory();
        let mut dash = Dashboard::load(store, config, Rc::new(clock.clone()));

        assert!(dash.mood.record("happy").unwrap());
        dash.pomodoro.start().unwrap();
        clock.advance(Duration::hours(1));
        assert!(dash.pomodoro.sync().unwrap().is_some());
        assert_eq!(dash.pomodoro.sessions().len(), 1);
    }

    #[test]
    fn search_uses_configured_default() {
        let clock = ManualClock::new(Local::now());
        let mut config = Config::default();
        config.apply("search.default_engine", "baidu").unwrap();
        let dash = Dashboard::load(PersistentStore::in_memory(), config, Rc::new(clock));
        assert_eq!(
            dash.search_url("rust").as_deref(),
            Some("https://www.baidu.com/s?wd=rust")
        );
    }
}
