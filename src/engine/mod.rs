//! Relevance-ranked search engine
//!
//! ## Architecture
//!
//! ```text
//! query ──► tokenize ──► terms
//!                          │
//! candidates ─► filters ───┤ per candidate:
//!                          ▼
//!               project searchable text ──► score (field rules +
//!                          │                 bonuses + distance)
//!                          ▼
//!               gate score > 0 ──► stable sort desc ──► truncate
//! ```
//!
//! Everything is synchronous and pure over the caller's candidate slice;
//! there is no index and no caching across calls.

pub mod filters;
pub mod pipeline;
pub mod project;
pub mod score;

pub use filters::SearchFilters;
pub use pipeline::{SearchEngine, SearchResult};
pub use project::searchable_text;
pub use score::MatchField;
