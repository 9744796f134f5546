//! TOML configuration.
//!
//! Two optional files, every field defaulted:
//!
//! - `.graphwalk.toml` in the working directory ([`ProjectConfig`]): traversal,
//!   playback and palette defaults.
//! - `<config_dir>/graphwalk/config.toml` ([`UserConfig`]): output preference.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::GraphError;
use crate::model::Algorithm;
use crate::palette::{Color, Palette};
use crate::playback::PlaybackSpeed;

/// Project file name, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = ".graphwalk.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default)]
    pub traversal: TraversalConfig,
    #[serde(default)]
    pub playback: PlaybackConfig,
    #[serde(default)]
    pub palette: PaletteConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalConfig {
    #[serde(default)]
    pub algorithm: Algorithm,
    /// OR-ed with the snapshot's own flag.
    #[serde(default)]
    pub directed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackConfig {
    #[serde(default)]
    pub speed: PlaybackSpeed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteConfig {
    /// Replaces the built-in base colors when non-empty.
    #[serde(default)]
    pub colors: Vec<Color>,
}

impl PaletteConfig {
    #[must_use]
    pub fn palette(&self) -> Palette {
        Palette::new(self.colors.iter().cloned())
    }
}

/// Per-user preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserConfig {
    /// Preferred output mode (`pretty`, `text` or `json`).
    #[serde(default)]
    pub output: Option<String>,
}

/// Load `.graphwalk.toml` from `project_root`, or defaults if absent.
///
/// # Errors
///
/// Fails if the file exists but cannot be read or parsed.
pub fn load_project_config(project_root: &Path) -> Result<ProjectConfig> {
    let path = project_root.join(PROJECT_CONFIG_FILE);
    read_toml_or_default(&path)
}

/// Load `<config_dir>/graphwalk/config.toml`, or defaults if absent.
///
/// # Errors
///
/// Fails if the file exists but cannot be read or parsed.
pub fn load_user_config() -> Result<UserConfig> {
    let Some(path) = user_config_path() else {
        return Ok(UserConfig::default());
    };
    read_toml_or_default(&path)
}

#[must_use]
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("graphwalk/config.toml"))
}

fn read_toml_or_default<T>(path: &Path) -> Result<T>
where
    T: Default + for<'de> Deserialize<'de>,
{
    if !path.exists() {
        return Ok(T::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(GraphError::from)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str::<T>(&content)
        .map_err(GraphError::from)
        .with_context(|| format!("Failed to parse {}", path.display()))
}
