use clap::Subcommand;
use startpage_core::{Dashboard, Period};

use super::print_json;

#[derive(Subcommand)]
pub enum StatsAction {
    /// Focus minutes for each of the last seven days
    Week,
    /// Focus minutes for each of the last four weeks
    Month,
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut dash = Dashboard::open()?;
    dash.pomodoro.sync()?;

    let period = match action {
        StatsAction::Week => Period::Week,
        StatsAction::Month => Period::Month,
    };
    print_json(&dash.focus_summary(period))
}
