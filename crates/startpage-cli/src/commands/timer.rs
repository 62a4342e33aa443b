use clap::Subcommand;
use startpage_core::timer::TICK_INTERVAL;
use startpage_core::{Dashboard, Event, PomodoroEngine};

use super::{note_json, print_json};

#[derive(Subcommand)]
pub enum TimerAction {
    /// Start or resume the countdown
    Start,
    /// Pause the countdown, keeping the remaining time
    Pause,
    /// Stop and return to the full focus length
    Reset,
    /// Catch up on elapsed time and print the current state as JSON
    Status,
    /// Drive the countdown in the foreground until it completes or Ctrl-C
    Watch,
    /// Logged focus sessions
    History,
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut dash = Dashboard::open()?;
    let engine = &mut dash.pomodoro;

    // Whatever happened while no process was watching.
    if let Some(event) = engine.sync()? {
        note_json(&event)?;
    }

    match action {
        TimerAction::Start => print_event(engine.start()?, engine),
        TimerAction::Pause => print_event(engine.pause()?, engine),
        TimerAction::Reset => print_event(engine.reset()?, engine),
        TimerAction::Status => print_json(&engine.snapshot()),
        TimerAction::Watch => watch(engine),
        TimerAction::History => print_json(engine.sessions()),
    }
}

/// Print the transition, or the unchanged state when the command was a no-op.
fn print_event(
    event: Option<Event>,
    engine: &PomodoroEngine,
) -> Result<(), Box<dyn std::error::Error>> {
    match event {
        Some(event) => print_json(&event),
        None => print_json(&engine.snapshot()),
    }
}

fn watch(engine: &mut PomodoroEngine) -> Result<(), Box<dyn std::error::Error>> {
    if !engine.is_running() {
        return Err("timer is not running; start it first".into());
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(watch_loop(engine))
}

async fn watch_loop(engine: &mut PomodoroEngine) -> Result<(), Box<dyn std::error::Error>> {
    let mut interval = tokio::time::interval(TICK_INTERVAL);
    interval.tick().await;
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);
    loop {
        tokio::select! {
            _ = interval.tick() => {}
            _ = &mut ctrl_c => {
                tracing::info!("watch interrupted, timer keeps running");
                eprintln!();
                return Ok(());
            }
        }

        let Some(token) = engine.tick_token() else {
            return Ok(());
        };
        if let Some(event) = engine.on_tick(token)? {
            eprintln!();
            return print_json(&event);
        }
        eprint!("\r{} ", engine.display());
    }
}
