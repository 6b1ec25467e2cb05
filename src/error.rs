use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to retrieve one candidate page. Recoverable: the resolver moves on
/// to the next source.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("timed out fetching {url}")]
    Timeout { url: String },
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("http {status} from {url}")]
    Status { url: String, status: u16 },
    #[error("failed reading body of {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Why a single source was rejected.
#[derive(Debug, Error)]
pub enum SourceFailure {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("fewer than {min} teams extracted from {source_name} (got {found})")]
    InsufficientTeams {
        source_name: String,
        found: usize,
        min: usize,
    },
}

/// Every candidate source was exhausted.
#[derive(Debug, Error)]
pub struct ResolutionError {
    pub attempts: usize,
    #[source]
    pub last: Option<SourceFailure>,
}

impl fmt::Display for ResolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.last {
            Some(last) => write!(
                f,
                "could not resolve standings after {} source(s): {last}",
                self.attempts
            ),
            None => write!(f, "could not resolve standings: no sources configured"),
        }
    }
}

#[derive(Debug, Error)]
pub enum PredictionsError {
    #[error("could not read predictions at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid predictions yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
