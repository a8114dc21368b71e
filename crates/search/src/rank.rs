//! Threshold filtering and deterministic ordering of scored candidates.
//!
//! The ranker re-scores the full candidate slice on every call. Survivors are
//! ordered by score (descending), then text length in characters
//! (ascending), then text (ascending); records that tie on all three keep
//! their input order.

use crate::relevance::{CompositeScorer, Scorer};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Minimum score a candidate must exceed to be returned.
pub const DEFAULT_THRESHOLD: f64 = 65.0;

/// Maximum number of records returned per query.
pub const DEFAULT_LIMIT: usize = 10;

/// Anything that carries a label the engine can match against.
pub trait Searchable {
    /// The human-readable label compared with the query.
    fn search_text(&self) -> &str;
}

impl Searchable for String {
    fn search_text(&self) -> &str {
        self
    }
}

impl Searchable for &str {
    fn search_text(&self) -> &str {
        self
    }
}

/// Ranking options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankOptions {
    /// Candidates must score strictly above this value
    pub threshold: f64,
    /// Maximum number of results
    pub limit: usize,
    /// Score candidates on the rayon pool when the `parallel` feature is on
    pub parallel: bool,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            limit: DEFAULT_LIMIT,
            parallel: true,
        }
    }
}

impl RankOptions {
    /// Set the score threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the result limit.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Score candidates on the calling thread only.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

/// A candidate that cleared the threshold, with the keys it is ordered by.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredCandidate<'a, T> {
    /// The matched record
    pub record: &'a T,
    /// Composite relevance in `[0, 100]`
    pub score: f64,
    text_len: usize,
}

impl<'a, T: Searchable> ScoredCandidate<'a, T> {
    fn new(record: &'a T, score: f64) -> Self {
        Self {
            record,
            score,
            text_len: record.search_text().chars().count(),
        }
    }

    /// Length of the record's label in characters.
    pub fn text_len(&self) -> usize {
        self.text_len
    }
}

fn compare<T: Searchable>(a: &ScoredCandidate<'_, T>, b: &ScoredCandidate<'_, T>) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.text_len.cmp(&b.text_len))
        .then_with(|| a.record.search_text().cmp(b.record.search_text()))
}

/// Scores, filters, orders and truncates candidates for a query.
#[derive(Debug, Clone, Default)]
pub struct Ranker<S = CompositeScorer> {
    scorer: S,
    options: RankOptions,
}

impl Ranker {
    /// Ranker with the composite scorer and default options.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: Scorer> Ranker<S> {
    /// Ranker with a custom scorer and default options.
    pub fn with_scorer(scorer: S) -> Self {
        Self {
            scorer,
            options: RankOptions::default(),
        }
    }

    /// Replace the ranking options.
    pub fn options(mut self, options: RankOptions) -> Self {
        self.options = options;
        self
    }

    /// Current ranking options.
    pub fn rank_options(&self) -> &RankOptions {
        &self.options
    }

    /// Best matches for `query`, scores discarded.
    pub fn rank<'a, T>(&self, query: &str, candidates: &'a [T]) -> Vec<&'a T>
    where
        T: Searchable + Sync,
    {
        self.rank_scored(query, candidates)
            .into_iter()
            .map(|scored| scored.record)
            .collect()
    }

    /// Best matches for `query` together with their scores.
    ///
    /// An empty query returns nothing without scoring any candidate.
    pub fn rank_scored<'a, T>(&self, query: &str, candidates: &'a [T]) -> Vec<ScoredCandidate<'a, T>>
    where
        T: Searchable + Sync,
    {
        if query.is_empty() {
            return Vec::new();
        }

        let mut survivors = self.score_candidates(query, candidates);
        survivors.sort_by(compare);
        survivors.truncate(self.options.limit);

        tracing::debug!(
            query,
            candidates = candidates.len(),
            matches = survivors.len(),
            threshold = self.options.threshold,
            "Ranked candidates"
        );

        survivors
    }

    /// Scores every candidate and keeps those strictly above the threshold,
    /// in input order.
    fn score_candidates<'a, T>(&self, query: &str, candidates: &'a [T]) -> Vec<ScoredCandidate<'a, T>>
    where
        T: Searchable + Sync,
    {
        let threshold = self.options.threshold;
        let keep = |record: &'a T| {
            let score = self.scorer.score(query, record.search_text());
            (score > threshold).then(|| ScoredCandidate::new(record, score))
        };

        #[cfg(feature = "parallel")]
        if self.options.parallel {
            use rayon::prelude::*;
            return candidates.par_iter().filter_map(keep).collect();
        }

        candidates.iter().filter_map(keep).collect()
    }
}

/// Rank `candidates` for `query` with the composite scorer.
///
/// # Example
///
/// ```
/// use ayush_search::{rank, RankOptions};
///
/// let terms = ["Fever", "Jwara (Fever)", "Cough"];
/// let matches = rank("fever", &terms, RankOptions::default());
/// assert_eq!(matches, vec![&"Fever", &"Jwara (Fever)"]);
/// ```
pub fn rank<'a, T>(query: &str, candidates: &'a [T], options: RankOptions) -> Vec<&'a T>
where
    T: Searchable + Sync,
{
    Ranker::new().options(options).rank(query, candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::CandidateRecord;
    use proptest::prelude::*;
    use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};

    fn fixed_scores(_: &str, candidate: &str) -> f64 {
        match candidate {
            "Fever" | "High Fever" => 90.0,
            "Cold" => 70.0,
            "Exactly" => 65.0,
            "Just Above" => 65.01,
            _ => 10.0,
        }
    }

    #[test]
    fn test_empty_query_returns_nothing() {
        let calls = AtomicUsize::new(0);
        let counting = |_: &str, _: &str| {
            calls.fetch_add(1, AtomicOrdering::Relaxed);
            100.0
        };
        let terms = ["Fever", "Cough"];

        let results = Ranker::with_scorer(counting).rank("", &terms);

        assert!(results.is_empty());
        assert_eq!(calls.load(AtomicOrdering::Relaxed), 0);
    }

    #[test]
    fn test_threshold_is_strict() {
        let terms = ["Exactly", "Just Above"];
        let results = Ranker::with_scorer(fixed_scores).rank("q", &terms);
        assert_eq!(results, vec![&"Just Above"]);
    }

    #[test]
    fn test_threshold_is_strict_for_composite_scores() {
        let terms = ["Jwara (Fever)"];
        // partial 100, token-sort "fever" vs "fever jwara", token-set 100
        let expected = (200.0 + 100.0 * (1.0 - 6.0 / 11.0)) / 3.0;
        let actual = crate::score("fever", "Jwara (Fever)");
        assert!((actual - expected).abs() < 1e-9);

        let ranked = |threshold: f64| {
            Ranker::new()
                .options(RankOptions::default().with_threshold(threshold))
                .rank_scored("fever", &terms)
        };

        let below = ranked(81.8);
        assert_eq!(below.len(), 1);
        assert_eq!(below[0].score, actual);
        assert!(ranked(actual).is_empty());
        assert!(ranked(81.82).is_empty());
    }

    #[test]
    fn test_ordering_score_then_length() {
        let terms = ["Cold", "High Fever", "Fever"];
        let results = Ranker::with_scorer(fixed_scores).rank("q", &terms);
        assert_eq!(results, vec![&"Fever", &"High Fever", &"Cold"]);
    }

    #[test]
    fn test_ordering_falls_back_to_text() {
        let flat = |_: &str, _: &str| 80.0;
        let terms = ["Kasa", "Jwar", "Amla"];
        let results = Ranker::with_scorer(flat).rank("q", &terms);
        assert_eq!(results, vec![&"Amla", &"Jwar", &"Kasa"]);
    }

    #[test]
    fn test_identical_texts_keep_input_order() {
        let flat = |_: &str, _: &str| 80.0;
        let records = vec![
            ("Fever".to_string(), 1),
            ("Fever".to_string(), 2),
            ("Fever".to_string(), 3),
        ];
        struct Tagged<'a>(&'a (String, i32));
        impl Searchable for Tagged<'_> {
            fn search_text(&self) -> &str {
                &self.0 .0
            }
        }
        let tagged: Vec<Tagged> = records.iter().map(Tagged).collect();

        let results = Ranker::with_scorer(flat).rank("q", &tagged);
        let tags: Vec<i32> = results.iter().map(|t| t.0 .1).collect();
        assert_eq!(tags, vec![1, 2, 3]);
    }

    #[test]
    fn test_limit_truncates() {
        let flat = |_: &str, _: &str| 80.0;
        let terms: Vec<String> = (0..25).map(|i| format!("Term {i:02}")).collect();
        let results = Ranker::with_scorer(flat)
            .options(RankOptions::default().with_limit(10))
            .rank("q", &terms);
        assert_eq!(results.len(), 10);
        assert_eq!(results[0], "Term 00");
    }

    #[test]
    fn test_empty_corpus() {
        let terms: Vec<String> = Vec::new();
        assert!(rank("fever", &terms, RankOptions::default()).is_empty());
    }

    #[test]
    fn test_no_candidate_clears_threshold() {
        let terms = ["Cough", "Kasa"];
        assert!(rank("fever", &terms, RankOptions::default()).is_empty());
    }

    #[test]
    fn test_fever_scenario() {
        let terms = ["Cough", "Jwara (Fever)", "Fever"];
        let results = rank("fever", &terms, RankOptions::default());
        assert_eq!(results, vec![&"Fever", &"Jwara (Fever)"]);
    }

    #[test]
    fn test_candidate_records_keep_attributes() {
        let records = vec![
            CandidateRecord::new("Jwara (Fever)", vec!["NAM-01-0023".into(), "BA01.1".into()]),
            CandidateRecord::new("Cough", vec!["NS-02".into(), "MD12".into()]),
            CandidateRecord::new("Fever", vec!["NS-01".into(), "BA01.1".into()]),
        ];

        let results = rank("FEVER", &records, RankOptions::default());

        assert_eq!(results.len(), 2);
        assert!(std::ptr::eq(results[0], &records[2]));
        assert_eq!(results[0].text, "Fever");
        assert_eq!(results[0].attributes, vec!["NS-01", "BA01.1"]);
        assert_eq!(results[1].text, "Jwara (Fever)");
        assert_eq!(results[1].attributes, vec!["NAM-01-0023", "BA01.1"]);
    }

    #[test]
    fn test_rank_scored_exposes_scores() {
        let terms = ["Fever", "Jwara (Fever)"];
        let scored = Ranker::new().rank_scored("fever", &terms);
        assert_eq!(scored.len(), 2);
        assert_eq!(scored[0].score, 100.0);
        assert_eq!(scored[0].text_len(), 5);
        assert!(scored[1].score > DEFAULT_THRESHOLD && scored[1].score < 100.0);
    }

    #[test]
    fn test_sequential_matches_parallel() {
        let terms: Vec<String> = [
            "Fever", "High Fever", "Jwara (Fever)", "Viral Fever", "Cough", "Kasa",
            "Feverish", "Fevers", "Intermittent fever", "Sannipata Jwara",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        let parallel = rank("fever", &terms, RankOptions::default());
        let sequential = rank("fever", &terms, RankOptions::default().sequential());
        assert_eq!(parallel, sequential);
    }

    proptest! {
        #[test]
        fn prop_rank_size_bounded(
            query in "[a-z]{1,6}",
            terms in prop::collection::vec("[A-Za-z ]{1,12}", 0..40),
            limit in 0usize..15,
        ) {
            let options = RankOptions::default().with_limit(limit);
            let clearing = terms
                .iter()
                .filter(|t| crate::score(&query, t) > options.threshold)
                .count();
            let results = rank(&query, &terms, options);
            prop_assert!(results.len() <= limit.min(clearing));
            prop_assert_eq!(results.len(), limit.min(clearing));
        }

        #[test]
        fn prop_rank_ordered(
            query in "[a-z]{1,6}",
            terms in prop::collection::vec("[A-Za-z ]{1,12}", 0..40),
        ) {
            let scored = Ranker::new()
                .options(RankOptions::default().with_threshold(0.0).with_limit(usize::MAX))
                .rank_scored(&query, &terms);
            for pair in scored.windows(2) {
                prop_assert_ne!(compare(&pair[0], &pair[1]), Ordering::Greater);
            }
        }

        #[test]
        fn prop_rank_idempotent(
            query in "[a-z]{1,6}",
            terms in prop::collection::vec("[A-Za-z ]{1,12}", 0..40),
        ) {
            let first = rank(&query, &terms, RankOptions::default());
            let second = rank(&query, &terms, RankOptions::default());
            prop_assert_eq!(first, second);
        }
    }
}
