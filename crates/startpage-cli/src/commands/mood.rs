use chrono::TimeDelta;
use clap::Subcommand;
use startpage_core::{Dashboard, Mood};

use super::{declined, print_json};

#[derive(Subcommand)]
pub enum MoodAction {
    /// Record how you feel now
    Record {
        /// happy, excited, calm, tired, confused, sad, anxious or angry
        mood: String,
    },
    /// Average score and dominant mood over the retained history
    Stats,
    /// Retained mood records, oldest first
    History,
    /// The latest mood if it is recent enough
    Recent {
        #[arg(long, default_value = "2")]
        hours: i64,
    },
    /// List the accepted mood keys
    Keys,
}

pub fn run(action: MoodAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut dash = Dashboard::open()?;

    match action {
        MoodAction::Record { mood } => {
            if !dash.mood.record(&mood)? {
                return declined(&format!("unknown mood '{mood}'"));
            }
            print_json(&dash.mood.stats())
        }
        MoodAction::Stats => print_json(&dash.mood.stats()),
        MoodAction::History => print_json(dash.mood.history()),
        MoodAction::Recent { hours } => {
            let within = TimeDelta::try_hours(hours)
                .ok_or_else(|| format!("--hours {hours} is out of range"))?;
            print_json(&dash.mood.recent_mood(within))
        }
        MoodAction::Keys => {
            for m in Mood::ALL {
                println!("{} {} ({})", m.emoji(), m.key(), m.score());
            }
            Ok(())
        }
    }
}
