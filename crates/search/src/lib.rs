//! Fuzzy diagnosis search for Ayush Bridge.
//!
//! This crate provides:
//! - Levenshtein edit distance and the ratio family built on it
//! - Token-sort and token-set similarity over normalized text
//! - A composite relevance score and a deterministic ranker
//! - Corpus sources and the search response shape
//!
//! # Example
//!
//! ```
//! use ayush_search::{Diagnosis, Ranker};
//!
//! let corpus = vec![
//!     Diagnosis::new("Fever", "NS-01", "BA01.1"),
//!     Diagnosis::new("Jwara (Fever)", "NAM-01-0023", "BA01.1"),
//!     Diagnosis::new("Cough", "NS-02", "MD12"),
//! ];
//!
//! let matches = Ranker::new().rank("fever", &corpus);
//! assert_eq!(matches.len(), 2);
//! assert_eq!(matches[0].term, "Fever");
//! ```

mod error;
mod fuzzy;
mod normalize;
mod relevance;
mod response;
pub mod corpus;
pub mod rank;
pub mod record;

#[cfg(feature = "wasm")]
mod wasm;

pub use corpus::{CorpusSource, InMemoryCorpus, JsonFileCorpus, LoadReport, SkipReason};
pub use error::{Result, SearchError, SearchErrorCode};
pub use fuzzy::{levenshtein_distance, partial_ratio, ratio};
pub use normalize::{normalize, NormalizedText};
pub use rank::{rank, RankOptions, Ranker, ScoredCandidate, Searchable, DEFAULT_LIMIT, DEFAULT_THRESHOLD};
pub use record::{CandidateRecord, Diagnosis, DiagnosisMatch};
pub use relevance::{
    score, score_breakdown, token_set_ratio, token_sort_ratio, CompositeScorer, ScoreBreakdown,
    Scorer,
};
pub use response::{search_response, MAX_RESPONSE_ITEMS};
