//! The search read operation as exposed to clients.

use crate::rank::{Ranker, RankOptions};
use crate::record::{Diagnosis, DiagnosisMatch};

/// Upper bound on the number of objects in a response.
pub const MAX_RESPONSE_ITEMS: usize = 10;

/// Answer a search request against a snapshot of the corpus.
///
/// A missing or empty query is not an error: it yields an empty response.
/// The result never holds more than [`MAX_RESPONSE_ITEMS`] objects, whatever
/// `options.limit` says.
///
/// # Example
///
/// ```
/// use ayush_search::{search_response, Diagnosis, RankOptions};
///
/// let corpus = vec![
///     Diagnosis::new("Fever", "NS-01", "BA01.1"),
///     Diagnosis::new("Cough", "NS-02", "MD12"),
/// ];
///
/// let response = search_response(Some("fever"), &corpus, RankOptions::default());
/// assert_eq!(response.len(), 1);
/// assert_eq!(response[0].icd, "BA01.1");
///
/// assert!(search_response(None, &corpus, RankOptions::default()).is_empty());
/// ```
pub fn search_response(
    query: Option<&str>,
    records: &[Diagnosis],
    options: RankOptions,
) -> Vec<DiagnosisMatch> {
    let query = match query {
        Some(q) if !q.is_empty() => q,
        _ => return Vec::new(),
    };

    let options = options.with_limit(options.limit.min(MAX_RESPONSE_ITEMS));

    Ranker::new()
        .options(options)
        .rank(query, records)
        .into_iter()
        .map(DiagnosisMatch::from)
        .collect()
}
