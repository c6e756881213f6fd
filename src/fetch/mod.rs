// src/fetch/mod.rs
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered with something other than 200.
    #[error("unexpected HTTP status {0}")]
    Status(StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// GET `url` and return the response body as text.
///
/// Only a 200 response yields a body; any other status is a
/// [`FetchError::Status`] so the caller never proceeds on a partial or
/// error page.
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, FetchError> {
    let resp = client.get(url).send().await?;
    let status = resp.status();
    if status != StatusCode::OK {
        return Err(FetchError::Status(status));
    }
    let body = resp.text().await?;
    debug!(url, bytes = body.len(), "fetched page");
    Ok(body)
}
