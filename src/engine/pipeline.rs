//! Filter & rank pipeline
//!
//! Orchestrates one search call: validate the cap, apply pre-filters,
//! tokenize, score each surviving candidate, gate on score > 0, stable-sort
//! descending, truncate. Blank and all-stop-word queries fall back to
//! browsing the filtered set in input order so an empty search still shows
//! something.

use std::cmp::Ordering;

use serde::Serialize;
use tracing::debug;

use crate::config::SearchConfig;
use crate::engine::filters::SearchFilters;
use crate::engine::project::searchable_text;
use crate::engine::score::{MatchField, QueryTerm, Relevance, score_record};
use crate::error::{Result, SearchError};
use crate::record::SearchableRecord;
use crate::suggest;
use crate::tokenize::tokenize;

/// One ranked search hit
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    /// The originating record, untouched
    pub record: SearchableRecord,
    /// Normalized weighted score; 0.0 only on the browse path
    pub relevance_score: f64,
    /// De-duplicated, sorted field categories that contributed
    pub matched_fields: Vec<MatchField>,
    /// De-duplicated, sorted query terms that contributed
    pub matched_terms: Vec<String>,
}

impl SearchResult {
    fn browse(record: &SearchableRecord) -> Self {
        Self {
            record: record.clone(),
            relevance_score: 0.0,
            matched_fields: Vec::new(),
            matched_terms: Vec::new(),
        }
    }

    fn ranked(record: &SearchableRecord, relevance: Relevance) -> Self {
        Self {
            record: record.clone(),
            relevance_score: relevance.score,
            matched_fields: relevance.matched_fields.into_iter().collect(),
            matched_terms: relevance.matched_terms.into_iter().collect(),
        }
    }
}

/// Relevance-ranked search over in-memory candidate records
///
/// Holds the configuration tables; performs no I/O and never mutates its
/// inputs, so concurrent calls over a shared read-only candidate slice are
/// safe.
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    config: SearchConfig,
}

impl SearchEngine {
    /// Create an engine with the given configuration
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Create an engine with the default tables
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// The active configuration
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Search `candidates` for `query`, returning at most `max_results`
    /// hits sorted by descending relevance.
    ///
    /// Ties keep input order (stable sort). A blank or all-stop-word query
    /// returns the first `max_results` filtered candidates with a zero
    /// score. Malformed filter values degrade to "no match" rather than
    /// erroring; a zero `max_results` is a caller bug and fails fast.
    pub fn search(
        &self,
        query: &str,
        candidates: &[SearchableRecord],
        max_results: usize,
        filters: Option<&SearchFilters>,
    ) -> Result<Vec<SearchResult>> {
        if max_results == 0 {
            return Err(SearchError::InvalidLimit(
                "max_results must be at least 1".to_string(),
            ));
        }

        let surviving: Vec<&SearchableRecord> = match filters {
            Some(filters) if !filters.is_empty() => candidates
                .iter()
                .filter(|record| filters.matches(record, &self.config))
                .collect(),
            _ => candidates.iter().collect(),
        };

        let terms = tokenize(query, &self.config.stop_words);
        debug!(
            query,
            terms = terms.len(),
            candidates = candidates.len(),
            surviving = surviving.len(),
            "search"
        );

        if terms.is_empty() {
            // Browse fallback: unranked filtered candidates, input order
            return Ok(surviving
                .into_iter()
                .take(max_results)
                .map(SearchResult::browse)
                .collect());
        }

        let query_terms: Vec<QueryTerm> = terms.into_iter().map(QueryTerm::new).collect();

        let mut results: Vec<SearchResult> = surviving
            .into_iter()
            .filter_map(|record| {
                let text = searchable_text(record);
                let relevance = score_record(record, &query_terms, &text, &self.config.weights);
                (relevance.score > 0.0).then(|| SearchResult::ranked(record, relevance))
            })
            .collect();

        // Stable: equal scores keep input order
        results.sort_by(|a, b| {
            b.relevance_score
                .partial_cmp(&a.relevance_score)
                .unwrap_or(Ordering::Equal)
        });
        results.truncate(max_results);

        debug!(results = results.len(), "search complete");
        Ok(results)
    }

    /// Autocomplete suggestions for a partial query.
    pub fn suggestions(&self, partial: &str) -> Vec<String> {
        suggest::suggestions(partial, &self.config)
    }
}
