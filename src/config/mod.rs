// SPDX-License-Identifier: MPL-2.0
//! Loading and saving toast settings from a `settings.toml` file.
//!
//! Only the rendering side reads these settings: they feed the auto-dismiss
//! policy. The store itself has no options.
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Pass an override directory to `load_with_override()`
//! 3. Set the `TOAST_REGISTRY_CONFIG_DIR` environment variable
//! 4. Falls back to the platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use toast_registry::config;
//!
//! let mut config = config::load();
//! config.toasts.error_ms = Some(10_000);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Application name used for directory naming.
const APP_NAME: &str = "ToastRegistry";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "TOAST_REGISTRY_CONFIG_DIR";

/// Auto-dismiss timeouts, one per toast kind (milliseconds, `0` = manual).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToastSettings {
    #[serde(
        default = "default_success_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub success_ms: Option<u64>,

    #[serde(default = "default_info_ms", skip_serializing_if = "Option::is_none")]
    pub info_ms: Option<u64>,

    #[serde(default = "default_error_ms", skip_serializing_if = "Option::is_none")]
    pub error_ms: Option<u64>,

    /// Applies to toasts inserted without a kind.
    #[serde(
        default = "default_unspecified_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub unspecified_ms: Option<u64>,
}

impl Default for ToastSettings {
    fn default() -> Self {
        Self {
            success_ms: default_success_ms(),
            info_ms: default_info_ms(),
            error_ms: default_error_ms(),
            unspecified_ms: default_unspecified_ms(),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    #[serde(default)]
    pub toasts: ToastSettings,
}

fn default_success_ms() -> Option<u64> {
    Some(DEFAULT_SUCCESS_TIMEOUT_MS)
}

fn default_info_ms() -> Option<u64> {
    Some(DEFAULT_INFO_TIMEOUT_MS)
}

fn default_error_ms() -> Option<u64> {
    Some(DEFAULT_ERROR_TIMEOUT_MS)
}

fn default_unspecified_ms() -> Option<u64> {
    Some(DEFAULT_UNSPECIFIED_TIMEOUT_MS)
}

/// Returns the config directory, honoring the override and the environment.
pub fn config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    config_dir_with_override(base_dir).map(|dir| dir.join(CONFIG_FILE))
}

/// Loads the configuration from the default location.
///
/// A missing or unreadable file yields the defaults; failures are logged.
pub fn load() -> Config {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> Config {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return config,
                Err(err) => {
                    log::warn!("failed to load {}: {err}; using defaults", path.display());
                }
            }
        }
    }
    Config::default()
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default location.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tempfile::tempdir;

    // Tests touching the environment must not run in parallel
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            toasts: ToastSettings {
                success_ms: Some(1_500),
                info_ms: Some(2_000),
                error_ms: Some(8_000),
                unspecified_ms: Some(0),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn missing_fields_take_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[toasts]\nerror_ms = 10000\n").expect("failed to write toml");

        let loaded = load_from_path(&config_path).expect("load should succeed");
        assert_eq!(loaded.toasts.error_ms, Some(10_000));
        assert_eq!(loaded.toasts.success_ms, Some(DEFAULT_SUCCESS_TIMEOUT_MS));
        assert_eq!(
            loaded.toasts.unspecified_ms,
            Some(DEFAULT_UNSPECIFIED_TIMEOUT_MS)
        );
    }

    #[test]
    fn empty_file_is_default_config() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "").expect("failed to write toml");

        let loaded = load_from_path(&config_path).expect("load should succeed");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn load_with_override_falls_back_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "toasts = 3")
            .expect("failed to write toml");

        let loaded = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn save_with_override_writes_into_directory() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut config = Config::default();
        config.toasts.info_ms = Some(4_000);

        save_with_override(&config, Some(temp_dir.path().to_path_buf()))
            .expect("save should succeed");
        assert!(temp_dir.path().join(CONFIG_FILE).exists());

        let loaded = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(loaded.toasts.info_ms, Some(4_000));
    }

    #[test]
    fn default_error_timeout_is_manual() {
        assert_eq!(ToastSettings::default().error_ms, Some(0));
    }

    #[test]
    fn explicit_override_takes_priority_over_env() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/from/env");

        let dir = config_dir_with_override(Some(PathBuf::from("/explicit")));

        std::env::remove_var(ENV_CONFIG_DIR);
        assert_eq!(dir, Some(PathBuf::from("/explicit")));
    }

    #[test]
    fn env_var_selects_config_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/from/env");

        let dir = config_dir_with_override(None);

        std::env::remove_var(ENV_CONFIG_DIR);
        assert_eq!(dir, Some(PathBuf::from("/from/env")));
    }

    #[test]
    fn empty_env_var_falls_back_to_platform_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "");

        let dir = config_dir_with_override(None);

        std::env::remove_var(ENV_CONFIG_DIR);
        let expected = dirs::config_dir().map(|path| path.join(APP_NAME));
        assert_eq!(dir, expected);
    }

    #[test]
    fn save_and_load_use_env_config_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let temp_dir = tempdir().expect("failed to create temp dir");
        std::env::set_var(ENV_CONFIG_DIR, temp_dir.path());

        let mut config = Config::default();
        config.toasts.success_ms = Some(1_234);
        let saved = save(&config);
        let loaded = load();

        std::env::remove_var(ENV_CONFIG_DIR);
        saved.expect("save should succeed");
        assert!(temp_dir.path().join(CONFIG_FILE).exists());
        assert_eq!(loaded, config);
    }

    #[test]
    fn load_without_file_returns_defaults() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let temp_dir = tempdir().expect("failed to create temp dir");
        std::env::set_var(ENV_CONFIG_DIR, temp_dir.path().join("missing"));

        let loaded = load();

        std::env::remove_var(ENV_CONFIG_DIR);
        assert_eq!(loaded, Config::default());
    }
}
