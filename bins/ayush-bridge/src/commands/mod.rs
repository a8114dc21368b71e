//! CLI command implementations

pub mod batch;
pub mod check;
pub mod score;
pub mod search;

use ayush_cli::progress;
use ayush_core::config::Config;
use ayush_core::{Error, Result};
use ayush_search::{CorpusSource, Diagnosis, JsonFileCorpus, RankOptions};
use ayush_telemetry::metrics;

/// Shared state for every command
pub struct Context {
    pub config: Config,
}

impl Context {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// The configured corpus file
    pub fn corpus(&self) -> JsonFileCorpus {
        let corpus = &self.config.schema.corpus;
        JsonFileCorpus::new(&corpus.path).dedupe(corpus.dedupe)
    }

    /// Fetch a snapshot of every record
    pub fn load_records(&self) -> Result<Vec<Diagnosis>> {
        let pb = progress::spinner("Loading corpus...");

        match self.corpus().fetch_all() {
            Ok(records) => {
                pb.finish_and_clear();
                metrics().set_corpus_records(records.len());
                Ok(records)
            }
            Err(e) => {
                progress::finish_error(&pb, "Could not load corpus");
                Err(e.into())
            }
        }
    }

    /// Configured ranking options with command-line overrides applied
    pub fn rank_options(&self, threshold: Option<f64>, limit: Option<usize>) -> Result<RankOptions> {
        let mut options = self.config.schema.search.rank_options();

        if let Some(threshold) = threshold {
            if !(0.0..=100.0).contains(&threshold) {
                return Err(Error::validation(format!(
                    "--threshold must be between 0 and 100, got {threshold}"
                )));
            }
            options = options.with_threshold(threshold);
        }

        if let Some(limit) = limit {
            if limit == 0 {
                return Err(Error::validation("--limit must be at least 1"));
            }
            options = options.with_limit(limit);
        }

        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ayush_core::ErrorCode;

    #[test]
    fn test_rank_options_overrides() {
        let ctx = Context::new(Config::default());

        let options = ctx.rank_options(Some(80.0), Some(3)).unwrap();
        assert_eq!(options.threshold, 80.0);
        assert_eq!(options.limit, 3);

        let defaults = ctx.rank_options(None, None).unwrap();
        assert_eq!(defaults, RankOptions::default());
    }

    #[test]
    fn test_rank_options_rejects_bad_values() {
        let ctx = Context::new(Config::default());

        assert_eq!(ctx.rank_options(Some(101.0), None).unwrap_err().code, ErrorCode::ValidationError);
        assert!(ctx.rank_options(None, Some(0)).is_err());
    }
}
