//! Focus statistics over logged pomodoro sessions.
//!
//! Pure function of (period, sessions, reference day): no store access.
//!
//! - **week**: seven one-day buckets ending today, oldest first
//! - **month**: four seven-day buckets, the first starting 27 days ago

use chrono::{DateTime, Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::timer::FocusSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Week,
    Month,
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "week" => Ok(Period::Week),
            "month" => Ok(Period::Month),
            other => Err(format!("unknown period: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    pub label: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub minutes: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FocusSummary {
    pub period: Period,
    pub buckets: Vec<Bucket>,
    /// Sum of bucket minutes in hours, one decimal.
    pub total_hours: f64,
    pub achievement: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct FocusStats {
    /// `total_hours` must exceed this for the achievement flag.
    pub achievement_hours: f64,
}

impl Default for FocusStats {
    fn default() -> Self {
        Self {
            achievement_hours: 10.0,
        }
    }
}

impl FocusStats {
    pub fn new(achievement_hours: f64) -> Self {
        Self { achievement_hours }
    }

    pub fn summarize(
        &self,
        period: Period,
        sessions: &[FocusSession],
        reference: DateTime<Local>,
    ) -> FocusSummary {
        let today = reference.date_naive();
        let spans: Vec<(NaiveDate, NaiveDate, String)> = match period {
            Period::Week => (0..7)
                .rev()
                .map(|back| {
                    let day = today - Duration::days(back);
                    (day, day, day.format("%a").to_string())
                })
                .collect(),
            Period::Month => (0..4)
                .map(|i| {
                    let start = today - Duration::days(27 - 7 * i);
                    let end = start + Duration::days(6);
                    (start, end, format!("{}-{}", start.format("%m/%d"), end.format("%m/%d")))
                })
                .collect(),
        };

        let buckets: Vec<Bucket> = spans
            .into_iter()
            .map(|(start, end, label)| Bucket {
                minutes: sessions
                    .iter()
                    .filter(|s| s.date >= start && s.date <= end)
                    .map(|s| s.duration_minutes)
                    .sum(),
                label,
                start,
                end,
            })
            .collect();

        let total_minutes: f64 = buckets.iter().map(|b| b.minutes).sum();
        let total_hours = (total_minutes / 60.0 * 10.0).round() / 10.0;

        FocusSummary {
            period,
            buckets,
            total_hours,
            achievement: total_hours > self.achievement_hours,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn reference() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 6, 30, 18, 0, 0).unwrap()
    }

    fn on(day: NaiveDate, minutes: f64) -> FocusSession {
        FocusSession {
            date: day,
            duration_minutes: minutes,
            timestamp: Utc.from_utc_datetime(&day.and_hms_opt(12, 0, 0).unwrap()),
        }
    }

    #[test]
    fn week_today_only() {
        let today = reference().date_naive();
        let summary = FocusStats::default().summarize(Period::Week, &[on(today, 45.0)], reference());

        assert_eq!(summary.buckets.len(), 7);
        assert_eq!(summary.buckets[6].minutes, 45.0);
        assert!(summary.buckets[..6].iter().all(|b| b.minutes == 0.0));
        assert_eq!(summary.total_hours, 0.8);
        assert!(!summary.achievement);
    }

    #[test]
    fn week_is_oldest_first_and_excludes_older_days() {
        let today = reference().date_naive();
        let sessions = [
            on(today - Duration::days(6), 30.0),
            on(today - Duration::days(7), 500.0),
            on(today - Duration::days(1), 25.0),
            on(today - Duration::days(1), 25.0),
        ];
        let summary = FocusStats::default().summarize(Period::Week, &sessions, reference());

        assert_eq!(summary.buckets[0].start, today - Duration::days(6));
        assert_eq!(summary.buckets[0].minutes, 30.0);
        assert_eq!(summary.buckets[5].minutes, 50.0);
        assert_eq!(summary.buckets[0].label, "Wed");
        assert_eq!(summary.buckets[6].label, "Tue");
        assert_eq!(summary.total_hours, 1.3);
    }

    #[test]
    fn month_has_four_seven_day_spans() {
        let today = reference().date_naive();
        let sessions = [
            on(today - Duration::days(27), 60.0),
            on(today - Duration::days(21), 60.0),
            on(today - Duration::days(20), 120.0),
            on(today, 30.0),
            on(today - Duration::days(28), 999.0),
        ];
        let summary = FocusStats::default().summarize(Period::Month, &sessions, reference());

        let minutes: Vec<f64> = summary.buckets.iter().map(|b| b.minutes).collect();
        assert_eq!(minutes, [120.0, 120.0, 0.0, 30.0]);
        assert_eq!(summary.buckets[3].end, today);
        assert_eq!(summary.buckets[0].label, "06/03-06/09");
        assert_eq!(summary.total_hours, 4.5);
    }

    #[test]
    fn achievement_requires_strictly_more_than_threshold() {
        let today = reference().date_naive();
        let exactly_ten: Vec<FocusSession> = (0..4).map(|_| on(today, 150.0)).collect();
        let summary = FocusStats::default().summarize(Period::Week, &exactly_ten, reference());
        assert_eq!(summary.total_hours, 10.0);
        assert!(!summary.achievement);

        let mut more = exactly_ten;
        more.push(on(today, 6.0));
        let summary = FocusStats::default().summarize(Period::Week, &more, reference());
        assert!(summary.achievement);
    }

    #[test]
    fn same_inputs_same_output() {
        let today = reference().date_naive();
        let sessions = [on(today, 25.0)];
        let stats = FocusStats::new(1.0);
        assert_eq!(
            stats.summarize(Period::Month, &sessions, reference()),
            stats.summarize(Period::Month, &sessions, reference())
        );
    }
}
