//! Configuration loading for Ubers.
//!
//! Reads `~/.ubers/config.toml`. Every section is optional; a missing file
//! means "all defaults".
//!
//! ```toml
//! [app]
//! ascii_only = false
//! high_contrast = false
//! reduced_motion = false
//!
//! [storage]
//! backend = "file"
//! path = "${HOME}/.ubers/state.json"
//!
//! [access]
//! track_seconds = 94
//! volume = 0.8
//! ```

use std::path::{Path, PathBuf};
use std::{env, fs};

use serde::Deserialize;
use thiserror::Error;

use ubers_types::ui::UiOptions;

/// Environment variable that overrides `[storage] path`.
pub const STATE_PATH_ENV: &str = "UBERS_STATE_PATH";

const DEFAULT_TRACK_SECONDS: u32 = 94;
const DEFAULT_VOLUME: f32 = 0.8;

#[derive(Debug, Default, Deserialize)]
pub struct UbersConfig {
    pub app: Option<AppConfig>,
    pub storage: Option<StorageConfig>,
    pub access: Option<AccessConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Disable fade and shake effects.
    #[serde(default)]
    pub reduced_motion: bool,
}

/// Where the current stage is persisted.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// JSON file under the data directory; survives restarts.
    #[default]
    File,
    /// Process-local; every launch starts at the invite.
    Memory,
}

#[derive(Debug, Default, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,
    /// Override for the state file. `${VAR}` references are expanded.
    pub path: Option<String>,
}

/// Settings for the simulated transmission on the access screen.
#[derive(Debug, Default, Deserialize)]
pub struct AccessConfig {
    pub track_seconds: Option<u32>,
    pub volume: Option<f32>,
}

impl UbersConfig {
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    /// Load from an explicit path. A missing file is `Ok(None)`.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(path).map_err(|source| {
            tracing::warn!(path = %path.display(), "Failed to read config: {source}");
            ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }
        })?;

        Self::parse(&content)
            .map(Some)
            .map_err(|source| {
                tracing::warn!(path = %path.display(), "Failed to parse config: {source}");
                ConfigError::Parse {
                    path: path.to_path_buf(),
                    source,
                }
            })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.app.as_ref().map_or_else(UiOptions::default, |app| UiOptions {
            ascii_only: app.ascii_only,
            high_contrast: app.high_contrast,
            reduced_motion: app.reduced_motion,
        })
    }

    #[must_use]
    pub fn storage_backend(&self) -> StorageBackend {
        self.storage
            .as_ref()
            .map(|storage| storage.backend)
            .unwrap_or_default()
    }

    /// Resolved state file path: env override, then config, then the default.
    #[must_use]
    pub fn state_path(&self) -> Option<PathBuf> {
        if let Ok(raw) = env::var(STATE_PATH_ENV)
            && !raw.trim().is_empty()
        {
            return Some(PathBuf::from(expand_env_vars(raw.trim())));
        }
        if let Some(raw) = self.storage.as_ref().and_then(|s| s.path.as_deref())
            && !raw.trim().is_empty()
        {
            return Some(PathBuf::from(expand_env_vars(raw.trim())));
        }
        default_state_path()
    }

    #[must_use]
    pub fn track_seconds(&self) -> u32 {
        self.access
            .as_ref()
            .and_then(|access| access.track_seconds)
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TRACK_SECONDS)
    }

    #[must_use]
    pub fn initial_volume(&self) -> f32 {
        self.access
            .as_ref()
            .and_then(|access| access.volume)
            .filter(|v| v.is_finite())
            .map_or(DEFAULT_VOLUME, |v| v.clamp(0.0, 1.0))
    }
}

pub fn expand_env_vars(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) => {
                let var = &after[..end];
                if !var.is_empty() {
                    out.push_str(&env::var(var).unwrap_or_default());
                }
                rest = &after[end + 1..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);

    out
}

/// `~/.ubers`, home of the config, state and logs.
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".ubers"))
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

#[must_use]
pub fn default_state_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("state.json"))
}
