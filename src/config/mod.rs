use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::theme::Theme;

const APP_DIR: &str = "gloam";
const PREFERENCE_FILE: &str = "theme.json";

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing HOME environment variable")]
    MissingHomeDirectory,
    #[error("failed to read theme preference: {path}")]
    ReadPreference { path: PathBuf, source: io::Error },
    #[error("failed to write theme preference: {path}")]
    WritePreference { path: PathBuf, source: io::Error },
    #[error("failed to parse theme preference")]
    ParsePreference(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct ThemePreference {
    theme: Theme,
}

/// Load the persisted theme preference. A missing preference file is not
/// an error; it reads as [`Theme::Default`].
pub fn load_theme_preference() -> ConfigResult<Theme> {
    let (xdg_config_home, home) = config_env_dirs();
    load_theme_preference_with(xdg_config_home.as_deref(), home.as_deref())
}

fn load_theme_preference_with(
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> ConfigResult<Theme> {
    let path = preference_path_with(xdg_config_home, home)?;
    if !path.exists() {
        return Ok(Theme::Default);
    }

    let serialized = fs::read_to_string(&path).map_err(|source| ConfigError::ReadPreference {
        path: path.clone(),
        source,
    })?;
    let preference: ThemePreference = serde_json::from_str(&serialized)?;
    Ok(preference.theme)
}

pub fn save_theme_preference(theme: Theme) -> ConfigResult<()> {
    let (xdg_config_home, home) = config_env_dirs();
    save_theme_preference_with(theme, xdg_config_home.as_deref(), home.as_deref())
}

fn save_theme_preference_with(
    theme: Theme,
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> ConfigResult<()> {
    let path = preference_path_with(xdg_config_home, home)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| ConfigError::WritePreference {
            path: path.clone(),
            source,
        })?;
    }

    let serialized = serde_json::to_string_pretty(&ThemePreference { theme })?;
    fs::write(&path, serialized).map_err(|source| ConfigError::WritePreference {
        path: path.clone(),
        source,
    })?;
    Ok(())
}

fn config_env_dirs() -> (Option<PathBuf>, Option<PathBuf>) {
    (
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

fn preference_path_with(
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> ConfigResult<PathBuf> {
    let mut path = config_root(xdg_config_home, home)?;
    path.push(APP_DIR);
    path.push(PREFERENCE_FILE);
    Ok(path)
}

fn config_root(xdg_config_home: Option<&Path>, home: Option<&Path>) -> ConfigResult<PathBuf> {
    if let Some(xdg) = xdg_config_home.filter(|path| !path.as_os_str().is_empty()) {
        return Ok(xdg.to_path_buf());
    }

    let home = home.ok_or(ConfigError::MissingHomeDirectory)?;
    Ok(home.join(".config"))
}
