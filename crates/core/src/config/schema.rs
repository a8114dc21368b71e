//! Configuration schema definitions

use ayush_search::{RankOptions, DEFAULT_LIMIT, DEFAULT_THRESHOLD};
use serde::{Deserialize, Serialize};

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ConfigSchema {
    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub corpus: CorpusConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Ranking configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchConfig {
    /// Candidates must score strictly above this value (0-100)
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Maximum number of results per query
    #[serde(default = "default_limit")]
    pub limit: usize,

    /// Score candidates on a thread pool
    #[serde(default = "default_true")]
    pub parallel: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            limit: default_limit(),
            parallel: true,
        }
    }
}

impl SearchConfig {
    /// Ranking options for the engine
    pub fn rank_options(&self) -> RankOptions {
        RankOptions {
            threshold: self.threshold,
            limit: self.limit,
            parallel: self.parallel,
        }
    }
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

fn default_true() -> bool {
    true
}

/// Corpus location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CorpusConfig {
    /// JSON file holding the diagnosis records
    #[serde(default = "default_corpus_path")]
    pub path: String,

    /// Keep only the first record for each term
    #[serde(default = "default_true")]
    pub dedupe: bool,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            path: default_corpus_path(),
            dedupe: true,
        }
    }
}

fn default_corpus_path() -> String {
    "diagnoses.json".to_string()
}

/// Logging output
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Default filter when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of compact text
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}
