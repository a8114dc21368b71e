//! Batch command - run many queries against one corpus snapshot

use super::Context;
use ayush_cli::output::{format_count, format_matches, Status};
use ayush_cli::progress;
use ayush_core::error::exit_codes;
use ayush_core::{Error, Result, ResultExt};
use ayush_search::{search_response, Diagnosis, DiagnosisMatch, RankOptions, Ranker};
use ayush_telemetry::QueryTimer;
use std::io::BufRead;
use std::path::Path;

/// Read queries, one per line, from `file` or stdin
fn read_queries(file: Option<&Path>) -> Result<Vec<String>> {
    match file {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .map_err(Error::from)
                .context(format!("Reading queries from {}", path.display()))?;
            Ok(content.lines().map(str::to_owned).collect())
        }
        None => std::io::stdin()
            .lock()
            .lines()
            .collect::<std::io::Result<Vec<_>>>()
            .map_err(Error::from),
    }
}

/// Wire response for one query, timed without any output
fn answer(query: &str, records: &[Diagnosis], options: RankOptions) -> Vec<DiagnosisMatch> {
    let timer = QueryTimer::start();
    let response = search_response(Some(query), records, options);
    timer.finish(response.len());
    response
}

/// Run every query and print one result set per query
pub fn run(ctx: &Context, file: Option<&Path>, json: bool) -> Result<i32> {
    let queries = read_queries(file)?;
    let options = ctx.rank_options(None, None)?;
    let records = ctx.load_records()?;

    if json {
        for query in &queries {
            let response = answer(query, &records, options);
            let line = serde_json::json!({ "query": query, "results": response });
            println!("{}", line);
        }
        return Ok(exit_codes::SUCCESS);
    }

    let ranker = Ranker::new().options(options);
    let pb = progress::query_progress(queries.len() as u64);
    let mut results = Vec::with_capacity(queries.len());

    for query in &queries {
        let timer = QueryTimer::start();
        let matches = ranker.rank_scored(query, &records);
        timer.finish(matches.len());
        results.push(matches);
        pb.inc(1);
    }
    progress::finish_success(&pb, &format_count(queries.len(), "query", "queries"));

    for (query, matches) in queries.iter().zip(&results) {
        Status::header(query);
        if matches.is_empty() {
            println!("(no matches)");
        } else {
            println!("{}", format_matches(matches, false));
        }
    }

    Ok(exit_codes::SUCCESS)
}
