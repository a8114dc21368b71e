//! Records the engine ranks and the objects it hands back.

use crate::rank::Searchable;
use serde::{Deserialize, Serialize};

/// A searchable label with opaque payload fields.
///
/// The engine only reads `text`; `attributes` are returned untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CandidateRecord {
    /// Label matched against the query
    pub text: String,
    /// Payload returned alongside a match
    #[serde(default)]
    pub attributes: Vec<String>,
}

impl CandidateRecord {
    /// Creates a new record.
    pub fn new(text: impl Into<String>, attributes: Vec<String>) -> Self {
        Self {
            text: text.into(),
            attributes,
        }
    }
}

impl Searchable for CandidateRecord {
    #[inline]
    fn search_text(&self) -> &str {
        &self.text
    }
}

/// A diagnosis term mapped to its NAMASTE and ICD-11 codes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Diagnosis {
    /// Disease name, e.g. "Jwara (Fever)"
    pub term: String,
    /// NAMASTE code, e.g. "NAM-01-0023"
    #[serde(alias = "namaste")]
    pub namaste_code: String,
    /// ICD-11 code, e.g. "BA01.1"
    #[serde(alias = "icd")]
    pub icd_code: String,
}

impl Diagnosis {
    /// Creates a new diagnosis mapping.
    pub fn new(
        term: impl Into<String>,
        namaste_code: impl Into<String>,
        icd_code: impl Into<String>,
    ) -> Self {
        Self {
            term: term.into(),
            namaste_code: namaste_code.into(),
            icd_code: icd_code.into(),
        }
    }
}

impl Searchable for Diagnosis {
    #[inline]
    fn search_text(&self) -> &str {
        &self.term
    }
}

impl From<Diagnosis> for CandidateRecord {
    fn from(diagnosis: Diagnosis) -> Self {
        Self {
            text: diagnosis.term,
            attributes: vec![diagnosis.namaste_code, diagnosis.icd_code],
        }
    }
}

/// One element of a search response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosisMatch {
    /// Disease name
    pub term: String,
    /// NAMASTE code
    pub namaste: String,
    /// ICD-11 code
    pub icd: String,
}

impl From<&Diagnosis> for DiagnosisMatch {
    fn from(diagnosis: &Diagnosis) -> Self {
        Self {
            term: diagnosis.term.clone(),
            namaste: diagnosis.namaste_code.clone(),
            icd: diagnosis.icd_code.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_diagnosis_to_candidate() {
        let record: CandidateRecord = Diagnosis::new("Jwara (Fever)", "NAM-01-0023", "BA01.1").into();
        assert_eq!(record.text, "Jwara (Fever)");
        assert_eq!(record.attributes, vec!["NAM-01-0023", "BA01.1"]);
    }

    #[test]
    fn test_diagnosis_accepts_short_field_names() {
        let diagnosis: Diagnosis =
            serde_json::from_value(json!({"term": "Fever", "namaste": "NS-01", "icd": "BA01.1"}))
                .unwrap();
        assert_eq!(diagnosis, Diagnosis::new("Fever", "NS-01", "BA01.1"));
    }

    #[test]
    fn test_match_wire_shape() {
        let diagnosis = Diagnosis::new("Fever", "NS-01", "BA01.1");
        let value = serde_json::to_value(DiagnosisMatch::from(&diagnosis)).unwrap();
        assert_eq!(value, json!({"term": "Fever", "namaste": "NS-01", "icd": "BA01.1"}));
    }

    #[test]
    fn test_candidate_attributes_default_empty() {
        let record: CandidateRecord = serde_json::from_value(json!({"text": "Kasa"})).unwrap();
        assert!(record.attributes.is_empty());
        assert_eq!(record.search_text(), "Kasa");
    }
}
