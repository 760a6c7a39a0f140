use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;

pub const SETTINGS_FILE_NAME: &str = "navigator.toml";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub window_title: String,
    pub window_width: f32,
    pub window_height: f32,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_title: "Navigator".into(),
            window_width: 960.0,
            window_height: 640.0,
            log_filter: "info".into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    window_title: Option<String>,
    window_width: Option<f32>,
    window_height: Option<f32>,
    log_filter: Option<String>,
}

/// Defaults, then the settings file, then `APP__*` environment overrides.
///
/// An explicit `path` must exist; without one the implicit locations are
/// probed and a missing file is not an error.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    let file = match path {
        Some(path) => Some(path.to_path_buf()),
        None => implicit_settings_path(),
    };
    if let Some(file) = file {
        let raw = fs::read_to_string(&file)
            .with_context(|| format!("failed to read settings file {}", file.display()))?;
        apply_file(&mut settings, &raw)
            .with_context(|| format!("invalid settings file {}", file.display()))?;
    }

    apply_env(&mut settings, |key| std::env::var(key).ok());
    Ok(settings)
}

fn implicit_settings_path() -> Option<PathBuf> {
    let local = PathBuf::from(SETTINGS_FILE_NAME);
    if local.is_file() {
        return Some(local);
    }
    dirs::config_dir()
        .map(|dir| dir.join("navigator").join(SETTINGS_FILE_NAME))
        .filter(|path| path.is_file())
}

fn apply_file(settings: &mut Settings, raw: &str) -> anyhow::Result<()> {
    let file: FileSettings = toml::from_str(raw)?;
    if let Some(v) = file.window_title {
        settings.window_title = v;
    }
    if let Some(v) = file.window_width {
        settings.window_width = v;
    }
    if let Some(v) = file.window_height {
        settings.window_height = v;
    }
    if let Some(v) = file.log_filter {
        settings.log_filter = v;
    }
    Ok(())
}

fn apply_env(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("APP__WINDOW_TITLE") {
        settings.window_title = v;
    }
    if let Some(v) = lookup("APP__LOG_FILTER") {
        settings.log_filter = v;
    }
    if let Some(v) = lookup("APP__WINDOW_WIDTH") {
        if let Ok(parsed) = v.parse::<f32>() {
            settings.window_width = parsed;
        }
    }
    if let Some(v) = lookup("APP__WINDOW_HEIGHT") {
        if let Ok(parsed) = v.parse::<f32>() {
            settings.window_height = parsed;
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
