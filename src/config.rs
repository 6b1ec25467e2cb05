use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::http_client::REQUEST_TIMEOUT_SECS;
use crate::predictions::DEFAULT_PREDICTIONS_FILE;

const DEFAULT_BIND: &str = "127.0.0.1:5000";
const DEFAULT_SEASON: &str = "2025";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub predictions_path: PathBuf,
    pub bind: SocketAddr,
    pub fetch_timeout: Duration,
    pub season: String,
}

impl AppConfig {
    /// Read settings from the process environment. Call after `dotenvy` has
    /// loaded any `.env` files.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let opt = |key: &str| {
            lookup(key).and_then(|val| {
                let val = val.trim().to_string();
                if val.is_empty() { None } else { Some(val) }
            })
        };

        let bind_raw = opt("BOLAO_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind_raw
            .parse::<SocketAddr>()
            .with_context(|| format!("invalid BOLAO_BIND address {bind_raw:?}"))?;

        let timeout_secs = opt("BOLAO_FETCH_TIMEOUT_SECS")
            .and_then(|val| val.parse::<u64>().ok())
            .unwrap_or(REQUEST_TIMEOUT_SECS)
            .max(1);

        Ok(Self {
            predictions_path: opt("BOLAO_PREDICTIONS")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PREDICTIONS_FILE)),
            bind,
            fetch_timeout: Duration::from_secs(timeout_secs),
            season: opt("BOLAO_SEASON").unwrap_or_else(|| DEFAULT_SEASON.to_string()),
        })
    }
}
