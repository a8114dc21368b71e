//! Search command - rank the corpus against one query

use super::Context;
use ayush_cli::output::{format_count, format_duration, format_matches, Status};
use ayush_core::error::exit_codes;
use ayush_core::Result;
use ayush_search::{search_response, Ranker};
use ayush_telemetry::QueryTimer;

/// Run a single search
pub fn run(
    ctx: &Context,
    query: &str,
    threshold: Option<f64>,
    limit: Option<usize>,
    json: bool,
    show_scores: bool,
) -> Result<i32> {
    let options = ctx.rank_options(threshold, limit)?;
    let records = ctx.load_records()?;

    let timer = QueryTimer::start();

    if json {
        let response = search_response(Some(query), &records, options);
        timer.finish(response.len());
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(exit_codes::SUCCESS);
    }

    let matches = Ranker::new().options(options).rank_scored(query, &records);
    let elapsed = timer.finish(matches.len());

    if matches.is_empty() {
        Status::warning(&format!("No matches for \"{}\"", query));
        return Ok(exit_codes::SUCCESS);
    }

    println!("{}", format_matches(&matches, show_scores));
    Status::info(&format!(
        "{} from {} in {}",
        format_count(matches.len(), "match", "matches"),
        format_count(records.len(), "record", "records"),
        format_duration(elapsed)
    ));

    Ok(exit_codes::SUCCESS)
}
