//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - Default inputs used when a flag is omitted
//! - Share settings (page URL, email defaults, webhook override)
//! - Output preferences
//!
//! Configuration is stored at `~/.config/burnoutcheck/config.toml`.
//! Assessment results are never written here.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::assessment::AssessmentInputs;
use crate::error::ConfigError;

/// Returns `~/.config/burnoutcheck[-dev]/`.
///
/// `BURNOUT_HOME` overrides the directory entirely. Otherwise
/// `BURNOUT_ENV=dev` selects the development directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("BURNOUT_HOME") {
        Some(home) => PathBuf::from(home),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("BURNOUT_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("burnoutcheck-dev")
            } else {
                base_dir.join("burnoutcheck")
            }
        }
    };

    std::fs::create_dir_all(&dir).map_err(|source| ConfigError::DirUnavailable {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}

/// File format for `export`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    Text,
    Markdown,
    Json,
    Svg,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Markdown => "md",
            ExportFormat::Json => "json",
            ExportFormat::Svg => "svg",
        }
    }
}

/// Inputs used when the caller does not provide one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_hours_worked")]
    pub hours_worked: f64,
    #[serde(default = "default_sleep_hours")]
    pub sleep_hours: f64,
    #[serde(default = "default_self_care_hours")]
    pub self_care_hours: f64,
}

/// Share/export configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareConfig {
    /// Page linked from social posts.
    #[serde(default = "default_page_url")]
    pub page_url: String,
    #[serde(default = "default_email_subject")]
    pub email_subject: String,
    /// Prefilled recipient for the mail composer (may be empty).
    #[serde(default)]
    pub email_to: String,
    /// Webhook URL; when empty the OS keyring is consulted.
    #[serde(default)]
    pub webhook_url: String,
    #[serde(default = "default_export_format")]
    pub export_format: ExportFormat,
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub json: bool,
    #[serde(default = "default_true")]
    pub chart: bool,
    #[serde(default = "default_true")]
    pub color: bool,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/burnoutcheck/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub share: ShareConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

// Default functions
fn default_hours_worked() -> f64 {
    40.0
}
fn default_sleep_hours() -> f64 {
    7.0
}
fn default_self_care_hours() -> f64 {
    5.0
}
fn default_page_url() -> String {
    "https://burnoutcheck.app".into()
}
fn default_email_subject() -> String {
    "Burnout Risk Assessment".into()
}
fn default_export_format() -> ExportFormat {
    ExportFormat::Text
}
fn default_true() -> bool {
    true
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            hours_worked: default_hours_worked(),
            sleep_hours: default_sleep_hours(),
            self_care_hours: default_self_care_hours(),
        }
    }
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            page_url: default_page_url(),
            email_subject: default_email_subject(),
            email_to: String::new(),
            webhook_url: String::new(),
            export_format: default_export_format(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            json: false,
            chart: true,
            color: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            defaults: DefaultsConfig::default(),
            share: ShareConfig::default(),
            output: OutputConfig::default(),
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

        let mut parts = key.split('.').peekable();
        if key.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            if parts.peek().is_none() {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value
                            .parse::<bool>()
                            .map_err(|e| invalid(format!("cannot parse '{value}' as bool: {e}")))?,
                    ),
                    serde_json::Value::Number(_) => value
                        .parse::<f64>()
                        .ok()
                        .and_then(serde_json::Number::from_f64)
                        .map(serde_json::Value::Number)
                        .ok_or_else(|| invalid(format!("cannot parse '{value}' as number")))?,
                    serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                        serde_json::from_str(value).map_err(|e| invalid(e.to_string()))?
                    }
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    /// Location of the config file.
    pub fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk or write and return defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    /// Like [`Config::load`], against an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "config missing, writing defaults");
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(e) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
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

    /// Update a value in memory by dot-separated key, keeping its type.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value cannot be parsed
    /// as the existing type.
    pub fn apply(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json = serde_json::to_value(&*self).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        *self = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Set a config value by key and save.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed,
    /// or the config cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        self.apply(key, value)?;
        self.save()
    }

    /// Default inputs as an assessment value object.
    pub fn default_inputs(&self) -> AssessmentInputs {
        AssessmentInputs::new(
            self.defaults.hours_worked,
            self.defaults.sleep_hours,
            self.defaults.self_care_hours,
        )
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!("falling back to default config: {e}");
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.defaults.hours_worked, 40.0);
        assert_eq!(parsed.share.export_format, ExportFormat::Text);
        assert!(parsed.output.chart);
    }

    #[test]
    fn default_inputs_match_fresh_form() {
        assert_eq!(Config::default().default_inputs(), AssessmentInputs::default());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let parsed: Config = toml::from_str("[defaults]\nsleep_hours = 6.5\n").unwrap();
        assert_eq!(parsed.defaults.sleep_hours, 6.5);
        assert_eq!(parsed.defaults.hours_worked, 40.0);
        assert_eq!(parsed.share.email_subject, "Burnout Risk Assessment");
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("output.chart").as_deref(), Some("true"));
        assert_eq!(cfg.get("defaults.hours_worked").as_deref(), Some("40.0"));
        assert_eq!(cfg.get("share.export_format").as_deref(), Some("text"));
        assert!(cfg.get("share.missing_key").is_none());
        assert!(cfg.get("").is_none());
    }

    #[test]
    fn apply_updates_typed_values() {
        let mut cfg = Config::default();
        cfg.apply("defaults.sleep_hours", "6").unwrap();
        cfg.apply("output.json", "true").unwrap();
        cfg.apply("share.email_to", "me@example.com").unwrap();
        cfg.apply("share.export_format", "svg").unwrap();
        assert_eq!(cfg.defaults.sleep_hours, 6.0);
        assert!(cfg.output.json);
        assert_eq!(cfg.share.email_to, "me@example.com");
        assert_eq!(cfg.share.export_format, ExportFormat::Svg);
    }

    #[test]
    fn apply_rejects_unknown_key() {
        let mut cfg = Config::default();
        let err = cfg.apply("output.nonexistent", "1").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownKey(_)));
    }

    #[test]
    fn apply_rejects_invalid_type() {
        let mut cfg = Config::default();
        assert!(cfg.apply("output.chart", "not_a_bool").is_err());
        assert!(cfg.apply("defaults.hours_worked", "lots").is_err());
        // enum values are validated on deserialization
        assert!(cfg.apply("share.export_format", "gif").is_err());
        assert_eq!(cfg.share.export_format, ExportFormat::Text);
    }

    #[test]
    fn load_from_writes_defaults_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let cfg = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(cfg.share.page_url, "https://burnoutcheck.app");
    }

    #[test]
    fn save_and_reload_preserves_changes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut cfg = Config::default();
        cfg.apply("defaults.self_care_hours", "8.5").unwrap();
        cfg.save_to(&path).unwrap();

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.defaults.self_care_hours, 8.5);
    }

    #[test]
    fn load_from_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "defaults = [").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::LoadFailed { .. })
        ));
    }

    #[test]
    fn load_from_leaves_unreadable_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let bytes = b"[share]\nemail_to = \"caf\xe9@example.com\"\n";
        std::fs::write(&path, bytes).unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::LoadFailed { .. })
        ));
        assert_eq!(std::fs::read(&path).unwrap(), bytes);
    }

    #[test]
    fn load_from_rejects_directory_path() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Config::load_from(dir.path()),
            Err(ConfigError::LoadFailed { .. })
        ));
        assert!(dir.path().is_dir());
    }
}
