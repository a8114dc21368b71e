//! Logging setup and query metrics for Ayush Bridge tools
//!
//! Logs go to stderr through `tracing-subscriber` as compact text or JSON
//! lines, so command output on stdout stays machine-readable. Search commands
//! report into one process-wide [`QueryMetrics`] that the binary can dump
//! with `--metrics`.

use anyhow::Context;
use once_cell::sync::Lazy;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use uuid::Uuid;

static METRICS: Lazy<QueryMetrics> = Lazy::new(QueryMetrics::new);

static SESSION_ID: Lazy<String> = Lazy::new(|| Uuid::new_v4().to_string());

/// Logging options
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Filter directive used when `RUST_LOG` is unset
    pub log_level: String,
    /// Emit JSON lines instead of compact text
    pub json: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            json: false,
        }
    }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `config.log_level`. Fails if a
/// subscriber is already installed.
pub fn init(config: &TelemetryConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let layer = fmt::layer().with_writer(std::io::stderr).with_target(false);
    let subscriber = tracing_subscriber::registry().with(filter);

    let installed = if config.json {
        subscriber.with(layer.json()).try_init()
    } else {
        subscriber.with(layer.compact()).try_init()
    };
    installed.context("installing tracing subscriber")?;

    tracing::info!(
        session_id = %session_id(),
        version = env!("CARGO_PKG_VERSION"),
        "Logging ready"
    );

    Ok(())
}

/// Identifier shared by every log line and metrics dump of this process
pub fn session_id() -> &'static str {
    &SESSION_ID
}

/// Search work done by this process
#[derive(Debug)]
pub struct QueryMetrics {
    queries: AtomicU64,
    matches: AtomicU64,
    corpus_records: AtomicU64,
    durations_ms: Mutex<Vec<f64>>,
    started: Instant,
}

impl QueryMetrics {
    fn new() -> Self {
        Self {
            queries: AtomicU64::new(0),
            matches: AtomicU64::new(0),
            corpus_records: AtomicU64::new(0),
            durations_ms: Mutex::new(Vec::new()),
            started: Instant::now(),
        }
    }

    /// Count one answered query, its matches and how long it took.
    pub fn record_query(&self, matches: usize, elapsed: Duration) {
        self.queries.fetch_add(1, Ordering::Relaxed);
        self.matches.fetch_add(matches as u64, Ordering::Relaxed);
        self.durations_ms
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(elapsed.as_nanos() as f64 / 1e6);
    }

    /// Size of the most recently loaded corpus.
    pub fn set_corpus_records(&self, count: usize) {
        self.corpus_records.store(count as u64, Ordering::Relaxed);
    }

    /// Copy of the current values, ready to serialize.
    pub fn snapshot(&self) -> MetricsSnapshot {
        let durations = self.durations_ms.lock().unwrap_or_else(PoisonError::into_inner);

        MetricsSnapshot {
            session_id: session_id().to_string(),
            uptime_ms: self.started.elapsed().as_millis() as u64,
            queries: self.queries.load(Ordering::Relaxed),
            matches: self.matches.load(Ordering::Relaxed),
            duration_ms: LatencySummary::from_samples(&durations),
            corpus_records: self.corpus_records.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time view of [`QueryMetrics`]
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub session_id: String,
    pub uptime_ms: u64,
    #[serde(rename = "search.queries")]
    pub queries: u64,
    #[serde(rename = "search.matches")]
    pub matches: u64,
    #[serde(rename = "search.duration_ms")]
    pub duration_ms: LatencySummary,
    #[serde(rename = "corpus.records")]
    pub corpus_records: u64,
}

/// Query latency in milliseconds
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct LatencySummary {
    pub count: usize,
    pub mean: f64,
    /// Upper median for an even number of samples
    pub median: f64,
    pub max: f64,
}

impl LatencySummary {
    fn from_samples(samples: &[f64]) -> Self {
        if samples.is_empty() {
            return Self::default();
        }

        let mut sorted = samples.to_vec();
        sorted.sort_by(f64::total_cmp);
        let count = sorted.len();

        Self {
            count,
            mean: sorted.iter().sum::<f64>() / count as f64,
            median: sorted[count / 2],
            max: sorted[count - 1],
        }
    }
}

/// The process-wide metrics
pub fn metrics() -> &'static QueryMetrics {
    &METRICS
}

/// Times one query.
///
/// Nothing is recorded unless [`QueryTimer::finish`] is called, so callers
/// finish the timer before writing output.
#[derive(Debug)]
pub struct QueryTimer {
    started: Instant,
}

impl QueryTimer {
    /// Start timing now
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Stop timing and record the query with its match count
    pub fn finish(self, matches: usize) -> Duration {
        let elapsed = self.started.elapsed();
        metrics().record_query(matches, elapsed);
        tracing::debug!(matches, elapsed_ms = elapsed.as_millis() as u64, "Query finished");
        elapsed
    }
}
