//! Sources that supply the full record collection for each query.
//!
//! There is no index: every search asks its source for all records and
//! scores them. Loading drops separator rows (`---` headings), blank terms
//! and, optionally, repeated terms, then orders records by term.

use crate::error::{Result, SearchError};
use crate::record::Diagnosis;
use serde::Serialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// A "fetch all records" read operation.
pub trait CorpusSource {
    /// Every record currently in the store, ordered by term.
    fn fetch_all(&self) -> Result<Vec<Diagnosis>>;
}

/// Why a row was left out of the corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Term is empty or whitespace
    BlankTerm,
    /// Row is a section separator such as `--- Series A ---`
    Separator,
    /// An earlier row already uses this term
    DuplicateTerm,
}

/// A row dropped while loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRow {
    /// Position in the raw input
    pub index: usize,
    /// The row's term as given
    pub term: String,
    /// Why it was dropped
    pub reason: SkipReason,
}

/// Outcome of cleaning a raw record list.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    /// Accepted records, ordered by term
    pub records: Vec<Diagnosis>,
    /// Rows that were dropped
    pub skipped: Vec<SkippedRow>,
}

impl LoadReport {
    /// Number of rows dropped for the given reason.
    pub fn count(&self, reason: SkipReason) -> usize {
        self.skipped.iter().filter(|row| row.reason == reason).count()
    }
}

/// Clean a raw record list: drop unusable rows, keep the first of each term
/// when `dedupe` is set, and sort by term.
pub fn prepare_records(raw: Vec<Diagnosis>, dedupe: bool) -> LoadReport {
    let mut seen = HashSet::new();
    let mut report = LoadReport::default();

    for (index, diagnosis) in raw.into_iter().enumerate() {
        let reason = if diagnosis.term.trim().is_empty() {
            Some(SkipReason::BlankTerm)
        } else if diagnosis.term.starts_with("---") {
            Some(SkipReason::Separator)
        } else if dedupe && !seen.insert(diagnosis.term.clone()) {
            Some(SkipReason::DuplicateTerm)
        } else {
            None
        };

        match reason {
            Some(reason) => {
                tracing::warn!(index, term = %diagnosis.term, ?reason, "Skipping corpus row");
                report.skipped.push(SkippedRow {
                    index,
                    term: diagnosis.term,
                    reason,
                });
            }
            None => report.records.push(diagnosis),
        }
    }

    report.records.sort_by(|a, b| a.term.cmp(&b.term));
    report
}

/// Vector-backed corpus.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCorpus {
    records: Vec<Diagnosis>,
}

impl InMemoryCorpus {
    /// Builds a corpus from raw records, deduplicating terms.
    pub fn new(records: Vec<Diagnosis>) -> Self {
        Self {
            records: prepare_records(records, true).records,
        }
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no records are held.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl CorpusSource for InMemoryCorpus {
    fn fetch_all(&self) -> Result<Vec<Diagnosis>> {
        Ok(self.records.clone())
    }
}

/// Corpus read from a JSON array of diagnosis objects on every fetch.
#[derive(Debug, Clone)]
pub struct JsonFileCorpus {
    path: PathBuf,
    dedupe: bool,
}

impl JsonFileCorpus {
    /// Corpus backed by the file at `path`, deduplicating terms.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            dedupe: true,
        }
    }

    /// Keep or drop repeated terms.
    pub fn dedupe(mut self, dedupe: bool) -> Self {
        self.dedupe = dedupe;
        self
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and clean the file, reporting dropped rows.
    pub fn load(&self) -> Result<LoadReport> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SearchError::CorpusNotFound(self.path.clone())
            } else {
                SearchError::Io(e)
            }
        })?;

        let raw: Vec<Diagnosis> = serde_json::from_str(&content)?;
        let report = prepare_records(raw, self.dedupe);

        tracing::debug!(
            path = %self.path.display(),
            records = report.records.len(),
            skipped = report.skipped.len(),
            "Loaded corpus"
        );

        Ok(report)
    }
}

impl CorpusSource for JsonFileCorpus {
    fn fetch_all(&self) -> Result<Vec<Diagnosis>> {
        self.load().map(|report| report.records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn raw_rows() -> Vec<Diagnosis> {
        vec![
            Diagnosis::new("Kasa (Cough)", "NAM-02-0001", "MD12"),
            Diagnosis::new("--- Series B ---", "", ""),
            Diagnosis::new("Fever", "NS-01", "BA01.1"),
            Diagnosis::new("   ", "NS-99", "XX"),
            Diagnosis::new("Fever", "NS-01-DUP", "BA01.2"),
        ]
    }

    #[test]
    fn test_prepare_drops_and_sorts() {
        let report = prepare_records(raw_rows(), true);

        let terms: Vec<&str> = report.records.iter().map(|d| d.term.as_str()).collect();
        assert_eq!(terms, vec!["Fever", "Kasa (Cough)"]);
        assert_eq!(report.records[0].namaste_code, "NS-01");
        assert_eq!(report.count(SkipReason::Separator), 1);
        assert_eq!(report.count(SkipReason::BlankTerm), 1);
        assert_eq!(report.count(SkipReason::DuplicateTerm), 1);
        assert_eq!(report.skipped[2].index, 4);
    }

    #[test]
    fn test_prepare_without_dedupe_keeps_duplicates() {
        let report = prepare_records(raw_rows(), false);
        assert_eq!(report.records.len(), 3);
        assert_eq!(report.count(SkipReason::DuplicateTerm), 0);
    }

    #[test]
    fn test_in_memory_fetch_all() {
        let corpus = InMemoryCorpus::new(raw_rows());
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.fetch_all().unwrap().len(), 2);
    }

    #[test]
    fn test_json_file_corpus() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"term": "Jwara (Fever)", "namaste_code": "NAM-01-0023", "icd_code": "BA01.1"}},
                {{"term": "Fever", "namaste": "NS-01", "icd": "BA01.1"}}
            ]"#
        )
        .unwrap();

        let corpus = JsonFileCorpus::new(file.path());
        let records = corpus.fetch_all().unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].term, "Fever");
        assert_eq!(records[1].namaste_code, "NAM-01-0023");
    }

    #[test]
    fn test_json_file_missing() {
        let corpus = JsonFileCorpus::new("/definitely/not/here/diagnoses.json");
        match corpus.fetch_all() {
            Err(SearchError::CorpusNotFound(path)) => {
                assert!(path.ends_with("diagnoses.json"));
            }
            other => panic!("expected CorpusNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_json_file_malformed() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"term": "Fever"}}"#).unwrap();

        let err = JsonFileCorpus::new(file.path()).fetch_all().unwrap_err();
        assert!(matches!(err, SearchError::Json(_)));
    }
}
