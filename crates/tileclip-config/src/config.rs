//! Configuration structs with defaults and RON persistence.

use std::fs;
use std::path::{Path, PathBuf};

use ron::ser::PrettyConfig;
use serde::{Deserialize, Serialize};
use tileclip_core::{ClippingLimits, MAX_CLIPPING_BOXES, MAX_CLIPPING_PLANES};

use crate::error::ConfigError;

/// File name of the config inside its directory.
pub const CONFIG_FILE_NAME: &str = "tileclip.ron";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub clipping: ClippingConfig,
    pub debug: DebugConfig,
}

/// Capacity of the clipping tool.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClippingConfig {
    /// Maximum number of clipping planes (clamped to 32).
    pub max_planes: usize,
    /// Maximum number of clipping boxes (clamped to 32).
    pub max_boxes: usize,
}

impl ClippingConfig {
    /// Capacities handed to the clipping tool, clamped to the hard caps.
    pub fn limits(&self) -> ClippingLimits {
        ClippingLimits::new(self.max_planes, self.max_boxes)
    }
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Filter directive override (e.g. "debug", "info,tileclip_core=trace").
    pub log_level: String,
    /// Also write JSON logs to disk in debug builds.
    pub file_logging: bool,
}

impl Default for ClippingConfig {
    fn default() -> Self {
        Self {
            max_planes: MAX_CLIPPING_PLANES,
            max_boxes: MAX_CLIPPING_BOXES,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            file_logging: true,
        }
    }
}

/// Platform configuration directory for tileclip, if the OS exposes one.
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tileclip"))
}

/// Location of the config file inside `config_dir`.
pub fn config_path(config_dir: &Path) -> PathBuf {
    config_dir.join(CONFIG_FILE_NAME)
}

fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    ron::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

impl Config {
    /// Reads `tileclip.ron` from `config_dir`, writing the defaults there first
    /// when the file is missing.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let path = config_path(config_dir);
        if !path.exists() {
            let config = Self::default();
            config.save(config_dir)?;
            log::info!("Wrote default clipping config to {}", path.display());
            return Ok(config);
        }
        let config = read_config(&path)?;
        log::info!(
            "Clipping config {} (planes {}, boxes {})",
            path.display(),
            config.clipping.max_planes,
            config.clipping.max_boxes
        );
        Ok(config)
    }

    /// Writes the config as pretty RON, creating `config_dir` if needed.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        let path = config_path(config_dir);
        let write_err = |source| ConfigError::Write {
            path: path.clone(),
            source,
        };
        fs::create_dir_all(config_dir).map_err(write_err)?;
        let text = ron::ser::to_string_pretty(self, PrettyConfig::new().depth_limit(3))?;
        fs::write(&path, text).map_err(write_err)
    }

    /// `Some` with the on-disk config when it no longer matches `self`.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let fresh = read_config(&config_path(config_dir))?;
        if fresh == *self {
            return Ok(None);
        }
        log::info!("Clipping config changed on disk");
        Ok(Some(fresh))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saved_file_lists_capacities() {
        let dir = tempfile::tempdir().unwrap();
        Config::default().save(dir.path()).unwrap();
        let text = std::fs::read_to_string(config_path(dir.path())).unwrap();
        assert!(text.contains("max_planes: 32"));
        assert!(text.contains("max_boxes: 32"));
        assert!(text.contains("log_level: \"info\""));
    }

    #[test]
    fn test_missing_section_uses_default() {
        let config: Config = ron::from_str("(debug: (log_level: \"warn\"))").unwrap();
        assert_eq!(config.clipping, ClippingConfig::default());
        assert_eq!(config.debug.log_level, "warn");
        assert!(config.debug.file_logging);
    }

    #[test]
    fn test_extra_field_ignored() {
        let result: Result<Config, _> = ron::from_str("(excluder_cache: true)");
        assert!(result.is_ok());
    }

    #[test]
    fn test_invalid_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(config_path(dir.path()), "{{not valid}}").unwrap();
        let err = Config::load_or_create(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains(CONFIG_FILE_NAME));
    }

    #[test]
    fn test_limits_are_clamped() {
        let clipping = ClippingConfig {
            max_planes: 64,
            max_boxes: 3,
        };
        let limits = clipping.limits();
        assert_eq!(limits.max_planes(), MAX_CLIPPING_PLANES);
        assert_eq!(limits.max_boxes(), 3);
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(dir.path().join(CONFIG_FILE_NAME).exists());
    }

    #[test]
    fn test_saved_limits_survive_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.clipping.max_planes = 8;
        config.debug.file_logging = false;
        config.save(dir.path()).unwrap();

        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(loaded.clipping.limits().max_planes(), 8);
        assert!(!loaded.debug.file_logging);
    }

    #[test]
    fn test_reload_detects_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        let mut modified = config.clone();
        modified.clipping.max_boxes = 1;
        modified.save(dir.path()).unwrap();

        let reloaded = config.reload(dir.path()).unwrap();
        assert_eq!(reloaded.map(|c| c.clipping.max_boxes), Some(1));
    }

    #[test]
    fn test_reload_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config.reload(dir.path()).unwrap(), None);
    }

    #[test]
    fn test_reload_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::default().reload(dir.path());
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
