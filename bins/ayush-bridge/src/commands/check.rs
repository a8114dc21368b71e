//! Check command - report on corpus hygiene

use super::Context;
use ayush_cli::output::{format_count, Status};
use ayush_core::error::exit_codes;
use ayush_core::{Error, Result};
use ayush_search::SkipReason;

/// Load the corpus and summarise accepted and skipped rows
pub fn run(ctx: &Context) -> Result<i32> {
    let corpus = ctx.corpus();
    let report = corpus.load()?;

    Status::header(&format!("Corpus {}", corpus.path().display()));

    for (reason, label) in [
        (SkipReason::BlankTerm, "blank term"),
        (SkipReason::Separator, "separator row"),
        (SkipReason::DuplicateTerm, "duplicate term"),
    ] {
        let count = report.count(reason);
        if count > 0 {
            Status::warning(&format!("Skipped {} ({})", format_count(count, "row", "rows"), label));
        }
    }

    if report.records.is_empty() {
        return Err(Error::empty_corpus(corpus.path()));
    }

    Status::success(&format!(
        "{} ready for search",
        format_count(report.records.len(), "record", "records")
    ));

    Ok(exit_codes::SUCCESS)
}
