use std::path::PathBuf;
use std::str::FromStr;

use log::Level;

use crate::error::ConfigError;

pub const LOG_LEVEL_KEY: &str = "PORTFOLIO_LOG_LEVEL";
pub const SETTINGS_PATH_KEY: &str = "PORTFOLIO_SETTINGS_PATH";
const DEFAULT_SETTINGS_PATH: &str = "portfolio-settings.json";

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub log_level: Level,
    /// Settings file for native builds; unused in the browser.
    pub settings_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: Level::Info,
            settings_path: PathBuf::from(DEFAULT_SETTINGS_PATH),
        }
    }
}

impl AppConfig {
    /// Builds the config from raw values; `None` means the key was not set.
    pub fn from_values(
        log_level: Option<&str>,
        settings_path: Option<&str>
    ) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let log_level = match log_level.map(str::trim).filter(|v| !v.is_empty()) {
            Some(raw) =>
                Level::from_str(raw).map_err(|_| ConfigError::InvalidValue {
                    key: LOG_LEVEL_KEY,
                    value: raw.to_string(),
                })?,
            None => defaults.log_level,
        };

        let settings_path = match settings_path.map(str::trim).filter(|v| !v.is_empty()) {
            Some(path) => PathBuf::from(path),
            None => defaults.settings_path,
        };

        Ok(Self { log_level, settings_path })
    }

    /// Reads the process environment. Call after `dotenv` so `.env` values apply.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self, ConfigError> {
        let log_level = std::env::var(LOG_LEVEL_KEY).ok();
        let settings_path = std::env::var(SETTINGS_PATH_KEY).ok();
        Self::from_values(log_level.as_deref(), settings_path.as_deref())
    }

    /// The browser has no environment; values are baked in at build time.
    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(option_env!("PORTFOLIO_LOG_LEVEL"), option_env!("PORTFOLIO_SETTINGS_PATH"))
    }

    /// Like `from_env`, but an invalid value falls back to the defaults.
    /// The error is returned alongside so it can be logged once logging is up.
    pub fn load() -> (Self, Option<ConfigError>) {
        match Self::from_env() {
            Ok(config) => (config, None),
            Err(err) => (Self::default(), Some(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_values(None, None).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.log_level, Level::Info);
        assert_eq!(config.settings_path, PathBuf::from("portfolio-settings.json"));
    }

    #[test]
    fn test_values_override_defaults() {
        let config = AppConfig::from_values(Some("debug"), Some("/tmp/prefs.json")).unwrap();
        assert_eq!(config.log_level, Level::Debug);
        assert_eq!(config.settings_path, PathBuf::from("/tmp/prefs.json"));
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let config = AppConfig::from_values(Some("  "), Some("")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_invalid_log_level() {
        let err = AppConfig::from_values(Some("loud"), None).unwrap_err();
        assert_eq!(err, ConfigError::InvalidValue {
            key: LOG_LEVEL_KEY,
            value: "loud".to_string(),
        });
    }
}
