//! Declarative logger configuration
//!
//! `LoggerConfig` deserializes from JSON and turns into a [`LoggerBuilder`].
//! Every field is optional; missing ones take the builder's defaults.

use super::error::{LoggerError, Result};
use super::header::Flags;
use super::level::Level;
use super::logger::{Logger, LoggerBuilder, DEFAULT_SKIP};
use serde::{Deserialize, Serialize};

/// Serializable logger settings.
///
/// # Example
///
/// ```
/// use tagged_logger::{Level, Logger, LoggerConfig};
///
/// let config = LoggerConfig::from_json(
///     r#"{"output": "null", "level": "warn", "tags": ["db"], "flags": ["time", "shortfile"]}"#,
/// ).unwrap();
///
/// let logger = Logger::from_config(&config).unwrap();
/// assert_eq!(logger.level(), Level::Warn);
/// assert_eq!(logger.tags(), vec!["db"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// `stdout`, `stderr`, `null`/`nil` or a file path
    pub output: String,

    /// Threshold level name
    pub level: String,

    pub tags: Vec<String>,

    /// Header field names: date, time, microseconds, longfile, shortfile
    pub flags: Vec<String>,

    /// Leading frames dropped from stack dumps
    pub skip: usize,

    /// Overrides the per-output color default when set
    pub color: Option<bool>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            output: "stderr".to_string(),
            level: "debug".to_string(),
            tags: Vec::new(),
            flags: vec![
                "date".to_string(),
                "microseconds".to_string(),
                "longfile".to_string(),
            ],
            skip: DEFAULT_SKIP,
            color: None,
        }
    }
}

impl LoggerConfig {
    /// Parse a configuration from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Combined header flags; an empty list means no header fields
    pub fn header_flags(&self) -> Result<Flags> {
        let mut flags = Flags::NONE;
        for name in &self.flags {
            match Flags::from_name(name) {
                Some(flag) => flags |= flag,
                None => {
                    return Err(LoggerError::config(
                        "flags",
                        format!("unknown header flag '{}'", name),
                    ))
                }
            }
        }
        Ok(flags)
    }

    /// Validate and convert into a builder
    pub fn to_builder(&self) -> Result<LoggerBuilder> {
        let level = Level::resolve(&self.level);
        if !level.is_valid() {
            return Err(LoggerError::invalid_level(&self.level));
        }

        let mut builder = Logger::builder()
            .output(self.output.clone())
            .level(level)
            .tags(self.tags.iter().cloned())
            .flags(self.header_flags()?)
            .skip(self.skip);
        if let Some(color) = self.color {
            builder = builder.color(color);
        }
        Ok(builder)
    }
}

impl Logger {
    /// Build a logger from a configuration
    pub fn from_config(config: &LoggerConfig) -> Result<Logger> {
        config.to_builder()?.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::from_json("{}").unwrap();
        assert_eq!(config, LoggerConfig::default());
        assert_eq!(config.header_flags().unwrap(), Flags::DEFAULT);
    }

    #[test]
    fn test_unknown_flag() {
        let config = LoggerConfig {
            flags: vec!["date".into(), "nanoseconds".into()],
            ..LoggerConfig::default()
        };
        assert!(matches!(
            config.header_flags(),
            Err(LoggerError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_invalid_level() {
        let config = LoggerConfig {
            level: "verbose".into(),
            output: "null".into(),
            ..LoggerConfig::default()
        };
        assert!(matches!(
            Logger::from_config(&config),
            Err(LoggerError::InvalidLevel { .. })
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            LoggerConfig::from_json("{\"skip\": \"two\"}"),
            Err(LoggerError::Json(_))
        ));
    }

    #[test]
    fn test_file_output_without_color() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app.log");
        let config = LoggerConfig {
            output: path.to_string_lossy().into_owned(),
            level: "STACK".into(),
            ..LoggerConfig::default()
        };

        let logger = Logger::from_config(&config).unwrap();
        assert_eq!(logger.level(), Level::Trace);
        assert!(!logger.color());
        assert_eq!(logger.skip(), DEFAULT_SKIP);
    }

    #[test]
    fn test_json_roundtrip() {
        let config = LoggerConfig {
            tags: vec!["svc".into()],
            color: Some(true),
            ..LoggerConfig::default()
        };
        let json = config.to_json().unwrap();
        assert_eq!(LoggerConfig::from_json(&json).unwrap(), config);
    }
}
