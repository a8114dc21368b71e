//! Composite similarity measures and their fusion into one relevance score.

use crate::fuzzy::{partial_ratio, ratio};
use crate::normalize::{normalize, NormalizedText};
use serde::{Deserialize, Serialize};

/// The three measures behind a relevance score, and their mean.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Best window match of the shorter text inside the longer one
    pub partial: f64,
    /// Ratio after sorting tokens
    pub token_sort: f64,
    /// Ratio over shared and distinct token sets
    pub token_set: f64,
    /// Arithmetic mean of the three measures
    pub composite: f64,
}

/// Ratio of the two texts after sorting their tokens.
///
/// Word order is irrelevant: `"Fever Jwara"` and `"jwara fever"` score 100.
pub fn token_sort_ratio(query: &str, candidate: &str) -> f64 {
    token_sort_normalized(&normalize(query), &normalize(candidate))
}

/// Best ratio between the shared vocabulary and each side's full vocabulary.
///
/// A candidate that contains every query token scores 100 no matter how many
/// qualifying words it adds.
pub fn token_set_ratio(query: &str, candidate: &str) -> f64 {
    token_set_normalized(&normalize(query), &normalize(candidate))
}

/// Relevance of `candidate` for `query` in `[0, 100]`.
pub fn score(query: &str, candidate: &str) -> f64 {
    score_breakdown(query, candidate).composite
}

/// Relevance of `candidate` for `query`, with every measure exposed.
pub fn score_breakdown(query: &str, candidate: &str) -> ScoreBreakdown {
    let query = normalize(query);
    let candidate = normalize(candidate);

    let partial = partial_ratio(query.as_str(), candidate.as_str());
    let token_sort = token_sort_normalized(&query, &candidate);
    let token_set = token_set_normalized(&query, &candidate);

    ScoreBreakdown {
        partial,
        token_sort,
        token_set,
        composite: (partial + token_sort + token_set) / 3.0,
    }
}

/// Token measures have nothing to compare when a side has no tokens; fall
/// back to the plain ratio of the lowercased texts.
fn tokenless(query: &NormalizedText, candidate: &NormalizedText) -> Option<f64> {
    if query.has_tokens() && candidate.has_tokens() {
        None
    } else {
        Some(ratio(query.as_str(), candidate.as_str()))
    }
}

fn token_sort_normalized(query: &NormalizedText, candidate: &NormalizedText) -> f64 {
    if let Some(score) = tokenless(query, candidate) {
        return score;
    }

    ratio(
        &query.sorted_tokens().join(" "),
        &candidate.sorted_tokens().join(" "),
    )
}

fn token_set_normalized(query: &NormalizedText, candidate: &NormalizedText) -> f64 {
    if let Some(score) = tokenless(query, candidate) {
        return score;
    }

    let query_set = query.token_set();
    let candidate_set = candidate.token_set();

    let join = |tokens: Vec<&str>| tokens.join(" ");
    let intersection = join(query_set.intersection(&candidate_set).copied().collect());
    let only_in_query = join(query_set.difference(&candidate_set).copied().collect());
    let only_in_candidate = join(candidate_set.difference(&query_set).copied().collect());

    let with_query = join_nonempty(&intersection, &only_in_query);
    let with_candidate = join_nonempty(&intersection, &only_in_candidate);

    [
        ratio(&intersection, &with_query),
        ratio(&intersection, &with_candidate),
        ratio(&with_query, &with_candidate),
    ]
    .into_iter()
    .fold(0.0, f64::max)
}

fn join_nonempty(left: &str, right: &str) -> String {
    match (left.is_empty(), right.is_empty()) {
        (true, _) => right.to_string(),
        (_, true) => left.to_string(),
        _ => format!("{left} {right}"),
    }
}

/// Produces a relevance score for a candidate text.
///
/// Implemented by [`CompositeScorer`] and by any `Fn(&str, &str) -> f64`, so a
/// single measure such as [`partial_ratio`] can be plugged into a
/// [`Ranker`](crate::Ranker) directly.
pub trait Scorer: Sync {
    /// Score `candidate` for `query`; higher is better.
    fn score(&self, query: &str, candidate: &str) -> f64;
}

/// Mean of partial, token-sort and token-set ratios.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompositeScorer;

impl Scorer for CompositeScorer {
    #[inline]
    fn score(&self, query: &str, candidate: &str) -> f64 {
        score(query, candidate)
    }
}

impl<F> Scorer for F
where
    F: Fn(&str, &str) -> f64 + Sync,
{
    #[inline]
    fn score(&self, query: &str, candidate: &str) -> f64 {
        self(query, candidate)
    }
}
