use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;

pub const CONFIG_FILE_NAME: &str = "podruzhka.toml";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub catalog_path: Option<PathBuf>,
    pub log_filter: String,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_path: None,
            log_filter: "info".into(),
            window_width: 420.0,
            window_height: 820.0,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    catalog_path: Option<PathBuf>,
    log_filter: Option<String>,
    window_width: Option<f32>,
    window_height: Option<f32>,
}

#[derive(Debug)]
pub struct LoadedSettings {
    pub settings: Settings,
    /// Config file that was applied, if any.
    pub source: Option<PathBuf>,
    /// Values that were rejected while loading. Logged once tracing is up.
    pub warnings: Vec<String>,
}

/// Defaults, then the config file, then `PODRUZHKA__*` environment variables.
pub fn load_settings(explicit: Option<&Path>) -> anyhow::Result<LoadedSettings> {
    let mut settings = Settings::default();
    let mut warnings = Vec::new();

    let source = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config_file(),
    };
    if let Some(path) = &source {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file '{}'", path.display()))?;
        warnings.extend(
            apply_file(&mut settings, &raw)
                .with_context(|| format!("invalid config file '{}'", path.display()))?,
        );
    }

    warnings.extend(apply_env_overrides(&mut settings, |name| {
        std::env::var(name).ok()
    }));

    Ok(LoadedSettings {
        settings,
        source,
        warnings,
    })
}

fn discover_config_file() -> Option<PathBuf> {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.is_file() {
        return Some(local);
    }
    let user = dirs::config_dir()?.join("podruzhka").join(CONFIG_FILE_NAME);
    user.is_file().then_some(user)
}

/// Window sizes must be finite and positive.
fn window_dimension(key: &str, value: f32, warnings: &mut Vec<String>) -> Option<f32> {
    if value.is_finite() && value > 0.0 {
        Some(value)
    } else {
        warnings.push(format!("ignoring invalid {key} '{value}'"));
        None
    }
}

fn apply_file(settings: &mut Settings, raw: &str) -> anyhow::Result<Vec<String>> {
    let file_cfg: FileSettings = toml::from_str(raw)?;
    let mut warnings = Vec::new();
    if let Some(v) = file_cfg.catalog_path {
        settings.catalog_path = Some(v);
    }
    if let Some(v) = file_cfg.log_filter {
        settings.log_filter = v;
    }
    if let Some(v) = file_cfg.window_width {
        if let Some(v) = window_dimension("window_width", v, &mut warnings) {
            settings.window_width = v;
        }
    }
    if let Some(v) = file_cfg.window_height {
        if let Some(v) = window_dimension("window_height", v, &mut warnings) {
            settings.window_height = v;
        }
    }
    Ok(warnings)
}

fn apply_env_overrides(
    settings: &mut Settings,
    var: impl Fn(&str) -> Option<String>,
) -> Vec<String> {
    let non_empty = |name: &str| var(name).filter(|v| !v.trim().is_empty());
    let mut warnings = Vec::new();

    if let Some(v) = non_empty("PODRUZHKA__CATALOG_PATH") {
        settings.catalog_path = Some(PathBuf::from(v));
    }
    if let Some(v) = non_empty("PODRUZHKA__LOG") {
        settings.log_filter = v;
    }

    let mut dimension = |key: &str| -> Option<f32> {
        let raw = non_empty(key)?;
        match raw.trim().parse::<f32>() {
            Ok(parsed) => window_dimension(key, parsed, &mut warnings),
            Err(_) => {
                warnings.push(format!("ignoring invalid {key} '{raw}'"));
                None
            }
        }
    };
    if let Some(v) = dimension("PODRUZHKA__WINDOW_WIDTH") {
        settings.window_width = v;
    }
    if let Some(v) = dimension("PODRUZHKA__WINDOW_HEIGHT") {
        settings.window_height = v;
    }

    warnings
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
