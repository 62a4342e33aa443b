use clap::Subcommand;
use startpage_core::prefs::RANDOM_BACKGROUND_URL;
use startpage_core::{Dashboard, Theme};

use super::declined;

#[derive(Subcommand)]
pub enum ThemeAction {
    /// Print the current theme
    Get,
    /// Set the theme (light or dark)
    Set { theme: Theme },
    /// Switch between light and dark
    Toggle,
}

#[derive(Subcommand)]
pub enum BackgroundAction {
    /// Print the stored background image URL
    Get,
    /// Store a background image URL
    Set { url: String },
    /// Store a random landscape image URL
    Random,
    /// Remove the stored background
    Clear,
}

fn theme_name(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "light",
        Theme::Dark => "dark",
    }
}

pub fn run_theme(action: ThemeAction) -> Result<(), Box<dyn std::error::Error>> {
    let dash = Dashboard::open()?;
    let theme = match action {
        ThemeAction::Get => dash.prefs.theme(),
        ThemeAction::Set { theme } => {
            dash.prefs.set_theme(theme)?;
            theme
        }
        ThemeAction::Toggle => dash.prefs.toggle_theme()?,
    };
    println!("{}", theme_name(theme));
    Ok(())
}

pub fn run_background(action: BackgroundAction) -> Result<(), Box<dyn std::error::Error>> {
    let dash = Dashboard::open()?;
    match action {
        BackgroundAction::Get => {
            if let Some(url) = dash.prefs.background_image() {
                println!("{url}");
            }
        }
        BackgroundAction::Set { url } => {
            if !dash.prefs.set_background_image(&url)? {
                return declined("background");
            }
            println!("{}", url.trim());
        }
        BackgroundAction::Random => {
            dash.prefs.set_background_image(RANDOM_BACKGROUND_URL)?;
            println!("{RANDOM_BACKGROUND_URL}");
        }
        BackgroundAction::Clear => {
            dash.prefs.clear_background_image()?;
            println!("ok");
        }
    }
    Ok(())
}
