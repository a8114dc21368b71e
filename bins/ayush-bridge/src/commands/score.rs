//! Score command - explain how a query scores against one text

use ayush_cli::output::{format_breakdown, Status};
use ayush_core::error::exit_codes;
use ayush_core::Result;
use ayush_search::{score_breakdown, DEFAULT_THRESHOLD};

/// Print the score breakdown for `query` against `text`
pub fn run(query: &str, text: &str, json: bool) -> Result<i32> {
    let breakdown = score_breakdown(query, text);

    if json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
        return Ok(exit_codes::SUCCESS);
    }

    Status::header(&format!("\"{}\" vs \"{}\"", query, text));
    println!("{}", format_breakdown(&breakdown));

    if breakdown.composite > DEFAULT_THRESHOLD {
        Status::success("Clears the default threshold");
    } else {
        Status::warning(&format!("Does not exceed the default threshold of {DEFAULT_THRESHOLD}"));
    }

    Ok(exit_codes::SUCCESS)
}
