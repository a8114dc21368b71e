//! Error types for the search crate.
//!
//! Scoring and ranking never fail; these errors come only from loading a
//! corpus.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur while supplying records to the engine.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Corpus file does not exist
    #[error("Corpus not found: {}", .0.display())]
    CorpusNotFound(PathBuf),

    /// Corpus file could not be read
    #[error("Corpus I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Corpus file is not a JSON array of diagnosis records
    #[error("Corpus JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error code for integration with ayush-core error handling.
/// Range: 11xxx for search errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchErrorCode {
    /// Corpus file does not exist
    CorpusNotFound = 11001,
    /// Corpus file could not be read
    CorpusIo = 11002,
    /// Corpus JSON parsing error
    CorpusParse = 11003,
}

impl SearchError {
    /// Returns the error code for this error.
    pub fn code(&self) -> SearchErrorCode {
        match self {
            SearchError::CorpusNotFound(_) => SearchErrorCode::CorpusNotFound,
            SearchError::Io(_) => SearchErrorCode::CorpusIo,
            SearchError::Json(_) => SearchErrorCode::CorpusParse,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = SearchError::CorpusNotFound(PathBuf::from("missing.json"));
        assert_eq!(err.code(), SearchErrorCode::CorpusNotFound);
        assert_eq!(err.code() as u32, 11001);
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<Vec<String>>("{").unwrap_err();
        let err: SearchError = json_err.into();
        assert_eq!(err.code(), SearchErrorCode::CorpusParse);
    }
}
