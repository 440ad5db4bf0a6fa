//! CLI configuration file (TOML) and default paths.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Contents of `config.toml` under the Bellplan config directory.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct BellplanConfig {
    #[serde(default)]
    pub profile: ProfileSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ProfileSection {
    /// Path of the school profile file
    pub path: Option<String>,
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_profile_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join("profile.json"))
}

/// Load `config.toml` if it exists.
pub fn load_config() -> anyhow::Result<Option<BellplanConfig>> {
    let path = default_config_path()?;
    if !path.exists() {
        return Ok(None);
    }
    let contents = std::fs::read_to_string(&path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
    let config = toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
    Ok(Some(config))
}

fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Some(base) = std::env::var_os("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(base).join("bellplan"));
    }
    home_dir().map(|home| home.join(".config").join("bellplan"))
}

fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Some(base) = std::env::var_os("XDG_DATA_HOME") {
        return Ok(PathBuf::from(base).join("bellplan"));
    }
    home_dir().map(|home| home.join(".local").join("share").join("bellplan"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .ok_or_else(|| anyhow::anyhow!("Cannot determine home directory ($HOME is not set)"))
}
