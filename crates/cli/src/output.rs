//! Terminal output utilities
//!
//! Provides consistent formatting for CLI output.

use ayush_core::Error;
use ayush_search::{Diagnosis, ScoreBreakdown, ScoredCandidate};
use owo_colors::OwoColorize;

/// Status message helpers
pub struct Status;

impl Status {
    /// Print a success message
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print an info message
    pub fn info(message: &str) {
        println!("{} {}", "ℹ".blue(), message);
    }

    /// Print a header
    pub fn header(message: &str) {
        println!();
        println!("{}", message.bold());
        println!("{}", "─".repeat(message.chars().count()));
    }
}

/// Print an error with its code, context and suggestion
pub fn report_error(error: &Error) {
    Status::error(&format!("{} {}", error.code.to_string().dimmed(), error.message));
    if let Some(context) = &error.context {
        eprintln!("  {} {}", "context:".dimmed(), context);
    }
    if let Some(suggestion) = &error.suggestion {
        eprintln!("  {} {}", "hint:".cyan(), suggestion);
    }
}

/// Render ranked diagnoses as an aligned table
///
/// Scores are shown only when `show_scores` is set.
pub fn format_matches(matches: &[ScoredCandidate<'_, Diagnosis>], show_scores: bool) -> String {
    let term_width = matches
        .iter()
        .map(|m| m.text_len())
        .max()
        .unwrap_or(0)
        .max("Term".len());
    let namaste_width = matches
        .iter()
        .map(|m| m.record.namaste_code.chars().count())
        .max()
        .unwrap_or(0)
        .max("NAMASTE".len());

    let mut lines = Vec::with_capacity(matches.len() + 1);
    let mut header = format!("{:<term_width$}  {:<namaste_width$}  {}", "Term", "NAMASTE", "ICD-11");
    if show_scores {
        header.push_str("  Score");
    }
    lines.push(header);

    for m in matches {
        let mut line = format!(
            "{:<term_width$}  {:<namaste_width$}  {}",
            m.record.term, m.record.namaste_code, m.record.icd_code
        );
        if show_scores {
            line.push_str(&format!("  {:.1}", m.score));
        }
        lines.push(line);
    }

    lines.join("\n")
}

/// Render a score breakdown, one measure per line
pub fn format_breakdown(breakdown: &ScoreBreakdown) -> String {
    [
        ("partial", breakdown.partial),
        ("token sort", breakdown.token_sort),
        ("token set", breakdown.token_set),
        ("composite", breakdown.composite),
    ]
    .iter()
    .map(|(label, value)| format!("{:<10}  {:>6.2}", label, value))
    .collect::<Vec<_>>()
    .join("\n")
}

/// Format a duration for display
pub fn format_duration(duration: std::time::Duration) -> String {
    let secs = duration.as_secs_f32();
    if secs < 1.0 {
        format!("{:.0}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        let mins = (secs / 60.0).floor();
        let remaining_secs = secs % 60.0;
        format!("{}m {:.0}s", mins, remaining_secs)
    }
}

/// Format a count with singular/plural
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}
