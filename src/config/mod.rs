// SPDX-License-Identifier: MPL-2.0
//! Startup configuration.
//!
//! An optional `settings.toml` in the platform config directory seeds the
//! initial theme mode and window size. The file is read once at launch and
//! never written: theme and drawer state are in-memory only and reset on
//! every run.

use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "styledeck";

pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Initial theme mode. When absent, the OS preference is used.
    pub theme: Option<ThemeMode>,
    #[serde(default)]
    pub window: WindowConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct WindowConfig {
    pub width: Option<f32>,
    pub height: Option<f32>,
}

impl Config {
    pub fn window_width(&self) -> f32 {
        self.window.width.unwrap_or(DEFAULT_WINDOW_WIDTH)
    }

    pub fn window_height(&self) -> f32 {
        self.window.height.unwrap_or(DEFAULT_WINDOW_HEIGHT)
    }

    /// Resolves the initial theme mode, falling back to the OS preference.
    pub fn initial_theme(&self) -> ThemeMode {
        self.theme.unwrap_or_else(ThemeMode::from_system)
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the startup config from `config_dir` when given, otherwise from the
/// platform default location. A missing file yields `Config::default()`; a
/// malformed one is reported to the caller so it can be logged.
pub fn load(config_dir: Option<&str>) -> Result<Config> {
    let path = match config_dir {
        Some(dir) => Some(Path::new(dir).join(CONFIG_FILE)),
        None => default_config_path(),
    };

    match path {
        Some(path) if path.exists() => load_from_path(&path),
        _ => Ok(Config::default()),
    }
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)?;
    let config = toml::from_str(&contents)?;
    Ok(config)
}
