use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

pub const DEFAULT_SETTINGS_FILE: &str = "catalog.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub data_dir: Option<PathBuf>,
    pub log_filter: String,
    pub window_title: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: None,
            log_filter: "info".into(),
            window_title: "Product Categories".into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    data_dir: Option<PathBuf>,
    log_filter: Option<String>,
    window_title: Option<String>,
}

/// Defaults, then the TOML file at `path` (if any), then environment overrides.
///
/// Runs before tracing is initialised, so problems with the file are returned as warnings
/// for the caller to log.
pub fn load_settings(path: Option<&Path>) -> (Settings, Vec<String>) {
    let mut settings = Settings::default();
    let mut warnings = Vec::new();

    let (path, explicit) = match path {
        Some(path) => (path.to_path_buf(), true),
        None => (default_settings_path(), false),
    };
    match fs::read_to_string(&path) {
        Ok(raw) => match toml::from_str::<FileSettings>(&raw) {
            Ok(file_cfg) => apply_file_settings(&mut settings, file_cfg),
            Err(err) => warnings.push(format!(
                "ignoring malformed settings file '{}': {err}",
                path.display()
            )),
        },
        Err(err) if explicit => warnings.push(format!(
            "could not read settings file '{}': {err}",
            path.display()
        )),
        Err(_) => {}
    }

    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());
    (settings, warnings)
}

/// `catalog.toml` in the working directory, else under the user config dir.
fn default_settings_path() -> PathBuf {
    let local = PathBuf::from(DEFAULT_SETTINGS_FILE);
    if local.exists() {
        return local;
    }
    dirs::config_dir()
        .map(|dir| dir.join("product_catalog").join(DEFAULT_SETTINGS_FILE))
        .unwrap_or(local)
}

fn apply_file_settings(settings: &mut Settings, file_cfg: FileSettings) {
    if let Some(v) = file_cfg.data_dir {
        settings.data_dir = Some(v);
    }
    if let Some(v) = file_cfg.log_filter {
        settings.log_filter = v;
    }
    if let Some(v) = file_cfg.window_title {
        settings.window_title = v;
    }
}

pub(crate) fn apply_env_overrides(
    settings: &mut Settings,
    lookup: impl Fn(&str) -> Option<String>,
) {
    let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    if let Some(v) = non_empty("CATALOG_DATA_DIR") {
        settings.data_dir = Some(PathBuf::from(v));
    }
    if let Some(v) = non_empty("APP__DATA_DIR") {
        settings.data_dir = Some(PathBuf::from(v));
    }

    if let Some(v) = non_empty("CATALOG_LOG") {
        settings.log_filter = v;
    }
    if let Some(v) = non_empty("APP__LOG_FILTER") {
        settings.log_filter = v;
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
