//! Application configuration.
//!
//! An optional TOML file tunes timings, sound, and the visibility
//! threshold. A missing file at the default location is not an error;
//! an explicitly requested file that cannot be read or parsed is.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// Errors produced while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Tunable settings for the page.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Whether the typewriter emits keystroke clicks.
    pub sound: bool,
    /// Per-character reveal interval for the intro headline, in ms.
    pub type_interval_ms: u64,
    /// Per-character delete interval, in ms.
    pub delete_interval_ms: u64,
    /// Pause on a fully typed item before deletion, in ms.
    pub hold_delay_ms: u64,
    /// Peak click amplitude, 0.0..=1.0.
    pub click_volume: f32,
    /// Visible fraction of a section required to activate its animation.
    pub view_threshold: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sound: true,
            type_interval_ms: 160,
            delete_interval_ms: 50,
            hold_delay_ms: 1500,
            click_volume: 0.03,
            view_threshold: 0.6,
        }
    }
}

impl Config {
    /// The per-character reveal interval.
    pub fn type_interval(&self) -> Duration {
        Duration::from_millis(self.type_interval_ms)
    }

    /// The per-character delete interval.
    pub fn delete_interval(&self) -> Duration {
        Duration::from_millis(self.delete_interval_ms)
    }

    /// The hold delay before deletion.
    pub fn hold_delay(&self) -> Duration {
        Duration::from_millis(self.hold_delay_ms)
    }

    /// Loads configuration.
    ///
    /// With an explicit `path`, read/parse failures are errors. Without
    /// one, the default location is used if it exists and defaults are
    /// returned otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_file(path),
            None => match default_path() {
                Some(path) if path.exists() => Self::load_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(?path, "loaded config file");
        Ok(config)
    }
}

/// The default config file location: `<config dir>/foyer/config.toml`.
fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("foyer").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.sound);
        assert_eq!(config.type_interval_ms, 160);
        assert_eq!(config.view_threshold, 0.6);
        assert_eq!(config.type_interval(), Duration::from_millis(160));
    }

    #[test]
    fn test_parse_partial_file_keeps_defaults() {
        let config: Config = toml::from_str("sound = false\ntype_interval_ms = 90\n")
            .expect("valid config");
        assert!(!config.sound);
        assert_eq!(config.type_interval_ms, 90);
        assert_eq!(config.delete_interval_ms, 50);
        assert_eq!(config.hold_delay_ms, 1500);
    }

    #[test]
    fn test_parse_rejects_unknown_keys() {
        let result: Result<Config, _> = toml::from_str("typo_interval_ms = 90\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_default_file_is_fine() {
        // No explicit path: worst case the default location is absent and
        // defaults come back.
        let config = Config::load(None);
        assert!(config.is_ok());
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let result = Config::load(Some(Path::new("/nonexistent/foyer.toml")));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
