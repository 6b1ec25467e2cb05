pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod http_client;
pub mod predictions;
pub mod render;
pub mod scoring;
pub mod standings;

pub use error::{FetchError, PredictionsError, ResolutionError, SourceFailure};
pub use extract::{CellParser, RankAndFormParser, extract_teams};
pub use fetch::{InsecureFetcher, PageFetcher};
pub use predictions::Predictions;
pub use scoring::{Comparison, ComparisonRow, compare, ranking, score};
pub use standings::{ParserHint, SourceSpec, Standings, default_sources, resolve_standings};
