//! Configuration file loading

use super::schema::ConfigSchema;
use crate::error::{Error, ErrorCode, Result};
use std::path::Path;

/// Environment variable overriding the corpus path
pub const ENV_CORPUS: &str = "AYUSH_CORPUS";
/// Environment variable overriding the score threshold
pub const ENV_THRESHOLD: &str = "AYUSH_THRESHOLD";
/// Environment variable overriding the result limit
pub const ENV_LIMIT: &str = "AYUSH_LIMIT";
/// Environment variable overriding the log level
pub const ENV_LOG_LEVEL: &str = "AYUSH_LOG_LEVEL";

/// Configuration wrapper
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Parsed settings
    pub schema: ConfigSchema,
    /// File the settings came from, if any
    pub path: Option<String>,
}

impl Config {
    /// Load configuration from a file path or use defaults, then apply
    /// environment overrides and validate.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let config_path = path.map(String::from).or_else(find_config_file);

        let schema = if let Some(ref p) = config_path {
            load_config_file(p)?
        } else {
            ConfigSchema::default()
        };

        let mut config = Self {
            schema,
            path: config_path,
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Apply overrides from a variable lookup such as the process environment.
    ///
    /// Values that do not parse are ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(corpus) = lookup(ENV_CORPUS) {
            self.schema.corpus.path = corpus;
        }

        if let Some(raw) = lookup(ENV_THRESHOLD) {
            match raw.trim().parse::<f64>() {
                Ok(threshold) => self.schema.search.threshold = threshold,
                Err(_) => tracing::warn!(variable = ENV_THRESHOLD, value = %raw, "Ignoring unparsable override"),
            }
        }

        if let Some(raw) = lookup(ENV_LIMIT) {
            match raw.trim().parse::<usize>() {
                Ok(limit) => self.schema.search.limit = limit,
                Err(_) => tracing::warn!(variable = ENV_LIMIT, value = %raw, "Ignoring unparsable override"),
            }
        }

        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.schema.logging.level = level;
        }
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        let threshold = self.schema.search.threshold;
        if !(0.0..=100.0).contains(&threshold) {
            return Err(Error::config_validation(format!(
                "search.threshold must be between 0 and 100, got {threshold}"
            )));
        }

        if self.schema.search.limit == 0 {
            return Err(Error::config_validation("search.limit must be at least 1")
                .with_suggestion("Remove the setting to use the default of 10"));
        }

        Ok(())
    }
}

/// Find configuration file in standard locations
fn find_config_file() -> Option<String> {
    let candidates = [
        ".ayush-bridge.toml",
        "ayush-bridge.toml",
        ".config/ayush-bridge.toml",
    ];

    candidates
        .into_iter()
        .find(|candidate| Path::new(candidate).exists())
        .map(String::from)
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &str) -> Result<ConfigSchema> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::config_not_found(path)
        } else {
            Error::new(ErrorCode::ConfigError, format!("Failed to read config file {}: {}", path, e))
                .with_source(e)
        }
    })?;

    toml::from_str(&content).map_err(|e| Error::from(e).with_context(format!("In {}", path)))
}
