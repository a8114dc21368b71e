//! ayush-bridge: fuzzy lookup of NAMASTE to ICD-11 diagnosis mappings.

use ayush_cli::output::{report_error, Status};
use ayush_core::config::Config;
use ayush_core::error::exit_codes;
use ayush_telemetry::TelemetryConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;

use commands::{batch, check, score, search, Context};

#[derive(Parser)]
#[command(name = "ayush-bridge")]
#[command(about = "Fuzzy search over NAMASTE to ICD-11 diagnosis mappings")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    /// Corpus JSON file (overrides configuration)
    #[arg(long, global = true)]
    corpus: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    /// Print collected metrics to stderr on exit
    #[arg(long, global = true)]
    metrics: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank corpus records against a query
    Search {
        /// Free-text query (e.g. Fever, Jwara, Cough)
        query: String,

        /// Minimum score to exceed (0-100)
        #[arg(short, long)]
        threshold: Option<f64>,

        /// Maximum number of results
        #[arg(short, long)]
        limit: Option<usize>,

        /// Output the response as a JSON array
        #[arg(long)]
        json: bool,

        /// Show scores next to each result
        #[arg(long)]
        scores: bool,
    },

    /// Show how a query scores against a single text
    Score {
        /// Free-text query
        query: String,

        /// Candidate text
        text: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run one query per line from a file or stdin
    Batch {
        /// File with one query per line (stdin if omitted)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Output one JSON object per query
        #[arg(long)]
        json: bool,
    },

    /// Validate the corpus file
    Check,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let code = match run(cli) {
        Ok(code) => code,
        Err(err) => match err.downcast_ref::<ayush_core::Error>() {
            Some(error) => {
                report_error(error);
                error.code.exit_code()
            }
            None => {
                Status::error(&format!("{err:#}"));
                exit_codes::FAILURE
            }
        },
    };

    ExitCode::from(u8::try_from(code).unwrap_or(1))
}

fn run(cli: Cli) -> anyhow::Result<i32> {
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(corpus) = cli.corpus {
        config.schema.corpus.path = corpus;
    }

    let logging = &config.schema.logging;
    ayush_telemetry::init(&TelemetryConfig {
        log_level: if cli.verbose { "debug".to_string() } else { logging.level.clone() },
        json: cli.json_logs || logging.json,
    })?;

    tracing::debug!(config_path = ?config.path, corpus = %config.schema.corpus.path, "Configuration loaded");

    let ctx = Context::new(config);

    let code = match cli.command {
        Commands::Search { query, threshold, limit, json, scores } => {
            search::run(&ctx, &query, threshold, limit, json, scores)?
        }
        Commands::Score { query, text, json } => score::run(&query, &text, json)?,
        Commands::Batch { file, json } => batch::run(&ctx, file.as_deref(), json)?,
        Commands::Check => check::run(&ctx)?,
    };

    if cli.metrics {
        eprintln!("{}", serde_json::to_string_pretty(&ayush_telemetry::metrics().snapshot())?);
    }

    Ok(code)
}
