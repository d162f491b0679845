//! TOML-based application configuration.
//!
//! Stores:
//! - Phase durations (focus, short break, long break)
//! - Tick period of the host scheduler
//! - Default log level
//!
//! Configuration is stored at `~/.config/pomotick/config.toml`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;
use tracing::level_filters::LevelFilter;

use super::{config_dir, data_dir};
use crate::error::{ConfigError, CoreError, ValidationError};
use crate::timer::PhaseList;

/// Phase durations in minutes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhasesConfig {
    #[serde(default = "default_focus_duration")]
    pub focus_duration: u64,
    #[serde(default = "default_short_break")]
    pub short_break: u64,
    #[serde(default = "default_long_break")]
    pub long_break: u64,
}

/// Tick source configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickerConfig {
    /// Milliseconds between ticks. One tick is one timer second, so
    /// anything other than 1000 runs the clock fast or slow.
    #[serde(default = "default_period_ms")]
    pub period_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level used when RUST_LOG is unset: `off`, `error`, `warn`,
    /// `info`, `debug` or `trace`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/pomotick/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub phases: PhasesConfig,
    #[serde(default)]
    pub ticker: TickerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_focus_duration() -> u64 {
    25
}
fn default_short_break() -> u64 {
    5
}
fn default_long_break() -> u64 {
    15
}
fn default_period_ms() -> u64 {
    1000
}
fn default_log_level() -> String {
    "info".into()
}

impl Default for PhasesConfig {
    fn default() -> Self {
        Self {
            focus_duration: default_focus_duration(),
            short_break: default_short_break(),
            long_break: default_long_break(),
        }
    }
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            period_ms: default_period_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            phases: PhasesConfig::default(),
            ticker: TickerConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let (parents, leaf) = match key.rsplit_once('.') {
            Some((parents, leaf)) => (Some(parents), leaf),
            None => (None, key),
        };
        if leaf.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        for part in parents.into_iter().flat_map(|p| p.split('.')) {
            current = current.get_mut(part).ok_or_else(unknown)?;
        }
        let obj = current.as_object_mut().ok_or_else(unknown)?;
        let existing = obj.get(leaf).ok_or_else(unknown)?;

        let new_value = match existing {
            serde_json::Value::Bool(_) => value
                .parse::<bool>()
                .map(serde_json::Value::Bool)
                .map_err(|_| invalid(format!("cannot parse '{value}' as bool")))?,
            serde_json::Value::Number(_) => value
                .parse::<u64>()
                .map(|n| serde_json::Value::Number(n.into()))
                .map_err(|_| invalid(format!("cannot parse '{value}' as a whole number")))?,
            serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                return Err(invalid("cannot overwrite a whole section".into()));
            }
            _ => serde_json::Value::String(value.into()),
        };

        obj.insert(leaf.to_string(), new_value);
        Ok(())
    }

    /// `<data_dir>/config.toml`.
    pub fn path() -> Result<PathBuf, CoreError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the default location, writing defaults if no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, CoreError> {
        Self::load_from(&Self::path()?)
    }

    /// Load from `path`, writing defaults there if the file is missing.
    pub fn load_from(path: &Path) -> Result<Self, CoreError> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content).map_err(ConfigError::from)?;
                cfg.validate()?;
                debug!(path = %path.display(), "config loaded");
                Ok(cfg)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                debug!(path = %path.display(), "wrote default config");
                Ok(cfg)
            }
            Err(e) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
            .into()),
        }
    }

    /// Load from the default location only if a config file is already
    /// there. Nothing is created on disk.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load_from`] for a file that exists.
    pub fn load_existing() -> Result<Option<Self>, CoreError> {
        let path = config_dir().join("config.toml");
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    /// Persist to the default location.
    pub fn save(&self) -> Result<(), CoreError> {
        self.save_to(&Self::path()?)
    }

    /// Persist to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written.
    pub fn save_to(&self, path: &Path) -> Result<(), CoreError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a value by dot-separated key. Does not write to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value has the wrong type,
    /// or the resulting config fails validation. `self` is unchanged on error.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), CoreError> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Config = serde_json::from_value(json)?;
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// Reject configs the timer cannot run with.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.phase_list()?;
        self.tick_period()?;
        self.log_level()?;
        Ok(())
    }

    /// The phase list for a new timer.
    pub fn phase_list(&self) -> Result<PhaseList, ValidationError> {
        PhaseList::from_durations(
            self.phases.focus_duration,
            self.phases.short_break,
            self.phases.long_break,
        )
    }

    pub fn log_level(&self) -> Result<LevelFilter, ValidationError> {
        self.logging
            .level
            .parse()
            .map_err(|_| ValidationError::InvalidValue {
                field: "logging.level".into(),
                message: format!(
                    "'{}' is not one of off, error, warn, info, debug, trace",
                    self.logging.level
                ),
            })
    }

    pub fn tick_period(&self) -> Result<Duration, ValidationError> {
        if self.ticker.period_ms == 0 {
            return Err(ValidationError::InvalidValue {
                field: "ticker.period_ms".into(),
                message: "period must be at least 1 ms".into(),
            });
        }
        Ok(Duration::from_millis(self.ticker.period_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_standard_phases() {
        let cfg = Config::default();
        assert_eq!(cfg.phase_list().unwrap(), PhaseList::standard());
        assert_eq!(cfg.tick_period().unwrap(), Duration::from_secs(1));
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let parsed: Config = toml::from_str("[phases]\nfocus_duration = 50\n").unwrap();
        assert_eq!(parsed.phases.focus_duration, 50);
        assert_eq!(parsed.phases.short_break, 5);
        assert_eq!(parsed.ticker.period_ms, 1000);
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("phases.focus_duration").as_deref(), Some("25"));
        assert_eq!(cfg.get("logging.level").as_deref(), Some("info"));
        assert!(cfg.get("phases.missing_key").is_none());
        assert!(cfg.get("").is_none());
    }

    #[test]
    fn set_updates_number_and_string() {
        let mut cfg = Config::default();
        cfg.set("phases.short_break", "10").unwrap();
        cfg.set("logging.level", "debug").unwrap();
        assert_eq!(cfg.phases.short_break, 10);
        assert_eq!(cfg.logging.level, "debug");
    }

    #[test]
    fn set_rejects_unknown_key() {
        let mut cfg = Config::default();
        let err = cfg.set("phases.nonexistent", "1").unwrap_err();
        assert!(matches!(err, CoreError::Config(ConfigError::UnknownKey(_))));
        assert!(cfg.set("nope", "1").is_err());
    }

    #[test]
    fn set_rejects_invalid_type() {
        let mut cfg = Config::default();
        let err = cfg.set("phases.focus_duration", "soon").unwrap_err();
        assert!(matches!(err, CoreError::Config(ConfigError::InvalidValue { .. })));
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn set_rejects_zero_duration_and_leaves_config_unchanged() {
        let mut cfg = Config::default();
        let err = cfg.set("phases.long_break", "0").unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert_eq!(cfg.phases.long_break, 15);
    }

    #[test]
    fn set_rejects_unknown_log_level() {
        let mut cfg = Config::default();
        let err = cfg.set("logging.level", "garbage").unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert_eq!(cfg.logging.level, "info");
        assert_eq!(cfg.log_level().unwrap(), LevelFilter::INFO);

        cfg.set("logging.level", "TRACE").unwrap();
        assert_eq!(cfg.log_level().unwrap(), LevelFilter::TRACE);
    }

    #[test]
    fn set_rejects_whole_section() {
        let mut cfg = Config::default();
        assert!(cfg.set("phases", "{}").is_err());
    }

    #[test]
    fn load_from_missing_file_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg, Config::default());
        assert!(path.exists());
    }

    #[test]
    fn save_then_load_preserves_changes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut cfg = Config::default();
        cfg.set("phases.focus_duration", "50").unwrap();
        cfg.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.phases.focus_duration, 50);
    }

    #[test]
    fn load_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "phases = [not toml").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, CoreError::Config(ConfigError::ParseFailed(_))));
    }

    #[test]
    fn load_rejects_unknown_log_level() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[logging]\nlevel = \"loud\"\n").unwrap();
        assert!(matches!(Config::load_from(&path), Err(CoreError::Validation(_))));
    }

    #[test]
    fn load_rejects_zero_tick_period() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ticker]\nperiod_ms = 0\n").unwrap();
        assert!(matches!(Config::load_from(&path), Err(CoreError::Validation(_))));
    }
}
