use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::FetchError;
use crate::http_client::http_client;

/// Anything that can turn a URL into page text.
///
/// The resolver only talks to this trait, so tests can feed captured HTML
/// without touching the network.
pub trait PageFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Blocking HTTPS fetcher that skips certificate validation.
#[derive(Debug, Clone, Copy)]
pub struct InsecureFetcher {
    client: &'static Client,
}

impl InsecureFetcher {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        Ok(Self {
            client: http_client(timeout)?,
        })
    }
}

impl PageFetcher for InsecureFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let resp = self.client.get(url).send().map_err(|source| {
            if source.is_timeout() {
                FetchError::Timeout {
                    url: url.to_string(),
                }
            } else {
                FetchError::Request {
                    url: url.to_string(),
                    source,
                }
            }
        })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        resp.text().map_err(|source| {
            if source.is_timeout() {
                FetchError::Timeout {
                    url: url.to_string(),
                }
            } else {
                FetchError::Body {
                    url: url.to_string(),
                    source,
                }
            }
        })
    }
}

