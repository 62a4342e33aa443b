//! Display preferences: theme and background image.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::Result;
use crate::storage::{keys, PersistentStore};

pub const RANDOM_BACKGROUND_URL: &str =
    "https://source.unsplash.com/random/1920x1080?nature,landscape";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme: {other}")),
        }
    }
}

pub struct Preferences {
    store: PersistentStore,
}

impl Preferences {
    pub fn new(store: PersistentStore) -> Self {
        Self { store }
    }

    pub fn theme(&self) -> Theme {
        self.store.load(keys::THEME)
    }

    pub fn set_theme(&self, theme: Theme) -> Result<()> {
        self.store.save(keys::THEME, &theme)
    }

    pub fn toggle_theme(&self) -> Result<Theme> {
        let next = self.theme().toggled();
        self.set_theme(next)?;
        Ok(next)
    }

    pub fn background_image(&self) -> Option<String> {
        self.store.try_load(keys::BACKGROUND_IMAGE)
    }

    /// Store a background URL. Declines blank input.
    pub fn set_background_image(&self, url: &str) -> Result<bool> {
        let url = url.trim();
        if url.is_empty() {
            return Ok(false);
        }
        self.store.save(keys::BACKGROUND_IMAGE, url)?;
        Ok(true)
    }

    pub fn clear_background_image(&self) -> Result<()> {
        self.store.remove(keys::BACKGROUND_IMAGE)
    }
}
