//! Header greeting.

use chrono::{DateTime, Local, Timelike};
use serde::Serialize;

use crate::mood::Mood;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DayPart {
    Morning,
    Afternoon,
    Evening,
}

impl DayPart {
    pub fn from_hour(hour: u32) -> Self {
        if hour < 12 {
            DayPart::Morning
        } else if hour < 18 {
            DayPart::Afternoon
        } else {
            DayPart::Evening
        }
    }
}

/// Pick the greeting for `now`. A recent sad or tired mood takes precedence
/// over the time of day.
pub fn greeting(now: DateTime<Local>, recent_mood: Option<Mood>) -> &'static str {
    match recent_mood {
        Some(Mood::Sad) => return "Rough day? Be gentle with yourself",
        Some(Mood::Tired) => return "You seem tired, remember to take a break",
        _ => {}
    }
    match DayPart::from_hour(now.hour()) {
        DayPart::Morning => "Good morning, welcome back",
        DayPart::Afternoon => "Good afternoon, keep going",
        DayPart::Evening => "Good evening, time to rest",
    }
}
