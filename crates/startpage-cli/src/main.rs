use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "startpage", version, about = "Startpage dashboard CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Todo list
    Todo {
        #[command(subcommand)]
        action: commands::todo::TodoAction,
    },
    /// Quick-link shortcuts
    Link {
        #[command(subcommand)]
        action: commands::link::LinkAction,
    },
    /// Mood tracker
    Mood {
        #[command(subcommand)]
        action: commands::mood::MoodAction,
    },
    /// Pomodoro focus timer
    Timer {
        #[command(subcommand)]
        action: commands::timer::TimerAction,
    },
    /// Focus statistics
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Build a web search URL
    Search(commands::search::SearchArgs),
    /// Print the greeting for right now
    Greet,
    /// Light/dark theme
    Theme {
        #[command(subcommand)]
        action: commands::prefs::ThemeAction,
    },
    /// Background image
    Background {
        #[command(subcommand)]
        action: commands::prefs::BackgroundAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("STARTPAGE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Todo { action } => commands::todo::run(action),
        Commands::Link { action } => commands::link::run(action),
        Commands::Mood { action } => commands::mood::run(action),
        Commands::Timer { action } => commands::timer::run(action),
        Commands::Stats { action } => commands::stats::run(action),
        Commands::Search(args) => commands::search::run(args),
        Commands::Greet => commands::greet::run(),
        Commands::Theme { action } => commands::prefs::run_theme(action),
        Commands::Background { action } => commands::prefs::run_background(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
