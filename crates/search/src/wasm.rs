//! WASM bindings for the relevance engine.

use crate::{search_response, Diagnosis, RankOptions};
use wasm_bindgen::prelude::*;

/// Composite relevance of `text` for `query` (0-100, higher is better).
#[wasm_bindgen]
pub fn fuzzy_score(query: &str, text: &str) -> f64 {
    crate::score(query, text)
}

/// Calculate Levenshtein edit distance between two strings.
#[wasm_bindgen]
pub fn edit_distance(a: &str, b: &str) -> usize {
    crate::levenshtein_distance(a, b)
}

/// Search diagnoses and return the matches as JSON.
///
/// # Arguments
/// * `query` - Search query
/// * `items_json` - JSON array of objects with `term`, `namaste_code` and `icd_code`
/// * `max_results` - Maximum results to return (0 for the default of 10)
///
/// # Returns
/// JSON array of `{term, namaste, icd}` objects, best match first
#[wasm_bindgen]
pub fn search_diagnoses(query: &str, items_json: &str, max_results: usize) -> String {
    let items: Vec<Diagnosis> = match serde_json::from_str(items_json) {
        Ok(items) => items,
        Err(_) => return "[]".to_string(),
    };

    // Threads are unavailable without a worker pool
    let mut options = RankOptions::default().sequential();
    if max_results > 0 {
        options = options.with_limit(max_results);
    }

    let results = search_response(Some(query), &items, options);
    serde_json::to_string(&results).unwrap_or_else(|_| "[]".to_string())
}
