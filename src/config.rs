mod app_config;

pub use app_config::{
    Config, PaginationConfig, SidebarConfig, DEFAULT_COLLAPSED_WIDTH, DEFAULT_EXPANDED_WIDTH,
    DEFAULT_PAGE_SIZE,
};

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to access config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Configuration installed at startup, read by the UI root
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Install the startup configuration (only first call takes effect)
pub fn install(config: Config) {
    if CONFIG.set(config).is_err() {
        tracing::warn!("Configuration already installed, ignoring");
    }
}

/// Installed configuration, or defaults if none was installed
pub fn current() -> Config {
    CONFIG.get().cloned().unwrap_or_default()
}

impl Config {
    /// Get the config file path (config.json in the user config directory)
    pub fn path() -> PathBuf {
        const FILENAME: &str = "config.json";
        if let Some(mut path) = dirs::config_dir() {
            path.push("vconnect");
            path.push(FILENAME);
            return path;
        }

        // Fallback to home directory
        if let Some(mut path) = dirs::home_dir() {
            path.push(".vconnect");
            path.push(FILENAME);
            return path;
        }

        PathBuf::from(FILENAME)
    }

    /// Load config from the default location
    pub fn load() -> Self {
        Self::load_from(Self::path())
    }

    /// Load config from `path`, falling back to defaults.
    ///
    /// A missing file is normal. Unreadable or malformed files are logged.
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Self::default();
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(path = %path.display(), ?e, "Failed to read config file");
                return Self::default();
            }
        };

        match serde_json::from_str::<Config>(&content) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), ?config, "Loaded config");
                config.normalized()
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), %e, "Malformed config file, using defaults");
                Self::default()
            }
        }
    }

    /// Write config as pretty JSON, creating parent directories
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let io_error = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).map_err(io_error)?;

        tracing::debug!(path = %path.display(), "Saved config");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_returns_default() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(dir.path().join("config.json"));

        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_malformed_file_returns_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        assert_eq!(Config::load_from(&path), Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut config = Config::default();
        config.sidebar.mobile_breakpoint = 900.0;
        config.pagination.page_size = 25;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path);
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_repairs_zero_page_size() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "pagination": { "pageSize": 0 } }"#).unwrap();

        let config = Config::load_from(&path);
        assert_eq!(config.pagination.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_config_path_file_name() {
        assert!(Config::path().ends_with("config.json"));
    }
}
