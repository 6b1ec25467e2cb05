use std::time::Duration;

use once_cell::sync::OnceCell;
use reqwest::blocking::Client;

use crate::error::FetchError;

pub const REQUEST_TIMEOUT_SECS: u64 = 15;
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

static CLIENT: OnceCell<Client> = OnceCell::new();

/// Process-wide client for standings pages. The timeout of the first caller wins.
///
/// Certificate validation is off: some league sites ship broken chains.
pub fn http_client(timeout: Duration) -> Result<&'static Client, FetchError> {
    CLIENT.get_or_try_init(|| {
        Client::builder()
            .timeout(timeout)
            .user_agent(BROWSER_USER_AGENT)
            .danger_accept_invalid_certs(true)
            .build()
            .map_err(FetchError::Client)
    })
}
