// Mon Oct 19 2026 - Alex

use crate::alignment::{Alignment, AlignmentError};
use crate::geometry::Sector;
use crate::output::OutputFormat;
use crate::utils::LoggingUtils;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 1 MiB worth of 512-byte sectors.
pub const DEFAULT_GRAIN_SIZE: Sector = 2048;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub output_format: OutputFormat,
    pub pretty_print: bool,
    pub default_offset: Sector,
    pub default_grain_size: Sector,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            output_format: OutputFormat::Text,
            pretty_print: true,
            default_offset: 0,
            default_grain_size: DEFAULT_GRAIN_SIZE,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0:?}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
    #[error("Validation error: {0}")]
    Validation(String),
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_log_level(mut self, level: &str) -> Self {
        self.log_level = level.to_string();
        self
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    pub fn with_default_alignment(mut self, offset: Sector, grain_size: Sector) -> Self {
        self.default_offset = offset;
        self.default_grain_size = grain_size;
        self
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if !ext.eq_ignore_ascii_case("json") {
            return Err(ConfigError::UnsupportedFormat(ext.to_string()));
        }

        let contents = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        Self::load(path).unwrap_or_default()
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if LoggingUtils::parse_level(&self.log_level).is_none() {
            return Err(ConfigError::Validation(format!("unknown log level '{}'", self.log_level)));
        }
        if self.default_grain_size < 0 {
            return Err(ConfigError::Validation(format!(
                "default_grain_size must be >= 0, got {}",
                self.default_grain_size
            )));
        }
        Ok(())
    }

    /// The rule used when a command omits `--offset` or `--grain`.
    pub fn default_alignment(&self) -> Result<Alignment, AlignmentError> {
        Alignment::new(self.default_offset, self.default_grain_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("sector-align-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.default_alignment().unwrap(), Alignment::new(0, 2048).unwrap());
    }

    #[test]
    fn test_validation() {
        assert!(Config::new().with_log_level("chatty").validate().is_err());
        assert!(Config::new().with_default_alignment(0, -1).validate().is_err());
        assert!(Config::new().with_log_level("TRACE").validate().is_ok());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let json = r#"{"output_format": "json", "default_grain_size": 8}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.default_grain_size, 8);
        assert_eq!(config.log_level, "warn");
        assert!(config.pretty_print);
    }

    #[test]
    fn test_save_and_load() {
        let path = temp_path("roundtrip.json");
        let config = Config::new()
            .with_output_format(OutputFormat::Json)
            .with_default_alignment(34, 8);
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded, config);
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_errors() {
        assert!(matches!(Config::load(temp_path("missing.json")), Err(ConfigError::NotFound(_))));

        let toml = temp_path("config.toml");
        fs::write(&toml, "log_level = 'info'").unwrap();
        assert!(matches!(Config::load(&toml), Err(ConfigError::UnsupportedFormat(_))));
        fs::remove_file(&toml).ok();

        let bad = temp_path("bad.json");
        fs::write(&bad, r#"{"default_grain_size": -4}"#).unwrap();
        assert!(matches!(Config::load(&bad), Err(ConfigError::Validation(_))));
        assert_eq!(Config::load_or_default(&bad), Config::default());
        fs::remove_file(&bad).ok();
    }
}
