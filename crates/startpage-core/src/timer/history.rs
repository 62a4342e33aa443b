//! Completed focus sessions, kept for a rolling window.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::storage::{keys, PersistentStore};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusSession {
    /// Local calendar day the session finished on.
    pub date: NaiveDate,
    pub duration_minutes: f64,
    pub timestamp: DateTime<Utc>,
}

pub struct FocusLog {
    store: PersistentStore,
    retention: Duration,
    sessions: Vec<FocusSession>,
}

impl FocusLog {
    pub fn load(store: PersistentStore, retention: Duration) -> Self {
        let sessions = store.load(keys::FOCUS_HISTORY);
        Self {
            store,
            retention,
            sessions,
        }
    }

    pub fn sessions(&self) -> &[FocusSession] {
        &self.sessions
    }

    /// Append and drop everything older than the window relative to `now`.
    pub fn append(&mut self, session: FocusSession, now: DateTime<Utc>) -> Result<()> {
        let cutoff = now
            .checked_sub_signed(self.retention)
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        let mut next = self.sessions.clone();
        next.push(session);
        next.retain(|s| s.timestamp >= cutoff);

        self.store.save(keys::FOCUS_HISTORY, &next)?;
        self.sessions = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn session(at: DateTime<Utc>, minutes: f64) -> FocusSession {
        FocusSession {
            date: at.date_naive(),
            duration_minutes: minutes,
            timestamp: at,
        }
    }

    #[test]
    fn append_prunes_past_window() {
        let store = PersistentStore::in_memory();
        let mut log = FocusLog::load(store.clone(), Duration::days(30));
        let t0 = Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap();
        log.append(session(t0, 25.0), t0).unwrap();
        log.append(session(t0 + Duration::days(20), 25.0), t0 + Duration::days(20))
            .unwrap();

        let later = t0 + Duration::days(31);
        log.append(session(later, 10.0), later).unwrap();
        assert_eq!(log.sessions().len(), 2);
        assert_eq!(FocusLog::load(store, Duration::days(30)).sessions(), log.sessions());
    }

    #[test]
    fn huge_retention_keeps_everything() {
        let mut log = FocusLog::load(
            PersistentStore::in_memory(),
            Duration::days(i64::from(u32::MAX)),
        );
        let t0 = Utc.with_ymd_and_hms(2020, 1, 1, 12, 0, 0).unwrap();
        log.append(session(t0, 25.0), t0).unwrap();
        let later = t0 + Duration::days(2000);
        log.append(session(later, 25.0), later).unwrap();
        assert_eq!(log.sessions().len(), 2);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let at = Utc.with_ymd_and_hms(2026, 1, 2, 8, 30, 0).unwrap();
        let json = serde_json::to_value(session(at, 25.0)).unwrap();
        assert_eq!(json["date"], "2026-01-02");
        assert_eq!(json["durationMinutes"], 25.0);
    }
}
