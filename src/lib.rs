pub mod config;
pub mod engine;
pub mod error;
pub mod highlight;
pub mod record;
pub mod suggest;
pub mod tokenize;

pub use config::{ScoreWeights, SearchConfig};
pub use engine::{MatchField, SearchEngine, SearchFilters, SearchResult};
pub use error::{Result, SearchError};
pub use highlight::highlight;
pub use record::{HoursStatus, SearchableRecord, parse_distance_km};
pub use tokenize::tokenize;

/// Package version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
