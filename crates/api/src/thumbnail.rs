//! Thumbnail proxy.
//!
//! [`ThumbnailFetcher`] downloads the image behind a stored thumbnail URL so
//! clients can render it without reaching the comic platform themselves.
//! The bytes are returned base64-encoded inside a JSON body.

use std::time::Duration;

use base64::Engine;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for thumbnail fetch failures.
#[derive(Debug, thiserror::Error)]
pub enum ThumbnailError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("Thumbnail request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The remote server returned a non-2xx status code.
    #[error("Thumbnail host returned HTTP {0}")]
    HttpStatus(u16),
}

// ---------------------------------------------------------------------------
// Response
// ---------------------------------------------------------------------------

/// Body of `GET /toons/{id}/thumbnail` and `GET /episodes/{id}/thumbnail`.
#[derive(Debug, Serialize)]
pub struct ThumbnailResponse {
    pub thumbnail_url: String,
    pub image_base64: String,
}

// ---------------------------------------------------------------------------
// ThumbnailFetcher
// ---------------------------------------------------------------------------

/// Fetches remote thumbnail images with a bounded timeout.
#[derive(Debug, Clone)]
pub struct ThumbnailFetcher {
    client: reqwest::Client,
}

impl ThumbnailFetcher {
    /// Create a fetcher whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, ThumbnailError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Download `url` and return its body.
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>, ThumbnailError> {
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(ThumbnailError::HttpStatus(response.status().as_u16()));
        }
        Ok(response.bytes().await?.to_vec())
    }

    /// Download `url` and wrap the base64-encoded body in a response.
    pub async fn fetch_encoded(&self, url: String) -> Result<ThumbnailResponse, ThumbnailError> {
        let bytes = self.fetch(&url).await?;
        tracing::debug!(url = %url, bytes = bytes.len(), "Thumbnail fetched");
        Ok(ThumbnailResponse {
            image_base64: encode(&bytes),
            thumbnail_url: url,
        })
    }
}

fn encode(bytes: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(bytes)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
