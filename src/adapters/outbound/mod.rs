pub mod blob_store;
pub mod card_catalog;
pub mod image_api;
pub mod queue;
pub mod secret_store;
pub mod social;

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use std::time::Duration;

/// Shared HTTP client for the web APIs. Every request carries the agent
/// header and gives up after 30 seconds.
pub fn http_client(user_agent: &str) -> reqwest::Result<reqwest::Client> {
    let mut headers = HeaderMap::new();
    let agent = HeaderValue::from_str(user_agent)
        .unwrap_or_else(|_| HeaderValue::from_static("MTG Card Poster"));
    headers.insert(USER_AGENT, agent);

    reqwest::Client::builder()
        .default_headers(headers)
        .timeout(Duration::new(30, 0))
        .build()
}
