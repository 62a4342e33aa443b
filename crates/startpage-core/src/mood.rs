//! Mood tracker: an append-only log pruned to a rolling window.
//!
//! ## Aggregates
//!
//! - **average**: mean of the per-mood score table (happy/excited 5, calm 4,
//!   tired/confused 3, sad/anxious 2, angry 1)
//! - **dominant**: most frequent mood, ties going to the earlier entry of
//!   [`Mood::ALL`]
//!
//! An empty history reports average 0 and `calm`.

use chrono::{DateTime, Datelike, Duration, Local, Utc};
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use std::str::FromStr;

use crate::clock::Clock;
use crate::error::Result;
use crate::storage::{keys, PersistentStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Excited,
    Calm,
    Tired,
    Confused,
    Sad,
    Anxious,
    Angry,
}

impl Mood {
    /// Enumeration order. Also the tie-break order for the dominant mood.
    pub const ALL: [Mood; 8] = [
        Mood::Happy,
        Mood::Excited,
        Mood::Calm,
        Mood::Tired,
        Mood::Confused,
        Mood::Sad,
        Mood::Anxious,
        Mood::Angry,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Excited => "excited",
            Mood::Calm => "calm",
            Mood::Tired => "tired",
            Mood::Confused => "confused",
            Mood::Sad => "sad",
            Mood::Anxious => "anxious",
            Mood::Angry => "angry",
        }
    }

    pub fn score(self) -> u32 {
        match self {
            Mood::Happy | Mood::Excited => 5,
            Mood::Calm => 4,
            Mood::Tired | Mood::Confused => 3,
            Mood::Sad | Mood::Anxious => 2,
            Mood::Angry => 1,
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Mood::Happy => "😊",
            Mood::Excited => "🤩",
            Mood::Calm => "😌",
            Mood::Tired => "😴",
            Mood::Confused => "😕",
            Mood::Sad => "😢",
            Mood::Anxious => "😰",
            Mood::Angry => "😠",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Excited => "Excited",
            Mood::Calm => "Calm",
            Mood::Tired => "Tired",
            Mood::Confused => "Confused",
            Mood::Sad => "Sad",
            Mood::Anxious => "Anxious",
            Mood::Angry => "Angry",
        }
    }
}

impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Mood::ALL
            .into_iter()
            .find(|m| m.key() == s)
            .ok_or_else(|| format!("unknown mood: {s}"))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodRecord {
    pub mood: Mood,
    pub emoji: String,
    pub name: String,
    pub timestamp: DateTime<Utc>,
    /// Locale-style day label, e.g. `2026/3/9`.
    pub date: String,
}

impl MoodRecord {
    fn new(mood: Mood, at: DateTime<Local>) -> Self {
        Self {
            mood,
            emoji: mood.emoji().to_string(),
            name: mood.display_name().to_string(),
            timestamp: at.with_timezone(&Utc),
            date: format!("{}/{}/{}", at.year(), at.month(), at.day()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MoodStats {
    pub average_value: f64,
    pub dominant_mood: Mood,
}

pub struct MoodTracker {
    store: PersistentStore,
    clock: Rc<dyn Clock>,
    retention: Duration,
    history: Vec<MoodRecord>,
}

impl MoodTracker {
    pub fn load(store: PersistentStore, clock: Rc<dyn Clock>, retention: Duration) -> Self {
        let history = store.load(keys::MOOD_HISTORY);
        Self {
            store,
            clock,
            retention,
            history,
        }
    }

    pub fn history(&self) -> &[MoodRecord] {
        &self.history
    }

    /// Append `mood_key` at the current instant, then prune past the window.
    /// Declines keys outside the fixed mood set.
    pub fn record(&mut self, mood_key: &str) -> Result<bool> {
        let Ok(mood) = mood_key.parse::<Mood>() else {
            tracing::debug!(mood_key, "ignoring unknown mood");
            return Ok(false);
        };
        let now = self.clock.now();
        // A window reaching past the representable range keeps everything.
        let cutoff = now
            .with_timezone(&Utc)
            .checked_sub_signed(self.retention)
            .unwrap_or(DateTime::<Utc>::MIN_UTC);

        let mut next = self.history.clone();
        next.push(MoodRecord::new(mood, now));
        next.retain(|r| r.timestamp >= cutoff);

        self.store.save(keys::MOOD_HISTORY, &next)?;
        let pruned = self.history.len() + 1 - next.len();
        self.history = next;
        tracing::debug!(mood = mood.key(), pruned, "mood recorded");
        Ok(true)
    }

    pub fn stats(&self) -> MoodStats {
        if self.history.is_empty() {
            return MoodStats {
                average_value: 0.0,
                dominant_mood: Mood::Calm,
            };
        }

        let total: u32 = self.history.iter().map(|r| r.mood.score()).sum();
        let average_value = f64::from(total) / self.history.len() as f64;

        let mut counts = [0usize; Mood::ALL.len()];
        for record in &self.history {
            if let Some(i) = Mood::ALL.iter().position(|m| *m == record.mood) {
                counts[i] += 1;
            }
        }
        // Strictly-greater keeps the first of equal counts.
        let mut dominant_mood = Mood::Calm;
        let mut max = 0;
        for (mood, count) in Mood::ALL.into_iter().zip(counts) {
            if count > max {
                max = count;
                dominant_mood = mood;
            }
        }

        MoodStats {
            average_value,
            dominant_mood,
        }
    }

    /// The latest record if it is no older than `within`.
    pub fn recent_mood(&self, within: Duration) -> Option<&MoodRecord> {
        let last = self.history.last()?;
        let age = self.clock.now().with_timezone(&Utc) - last.timestamp;
        (age <= within).then_some(last)
    }
}
