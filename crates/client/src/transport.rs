//! HTTP transport to the relay.

use crate::error::{FlashbotError, Result};
use async_trait::async_trait;
use reqwest::{header, Url};
use std::time::Duration;

/// Hard deadline for one relay request. The transport never retries;
/// callers own any retry policy.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(3);

/// Header carrying the request signature.
const SIGNATURE_HEADER: &str = "X-Flashbots-Signature";

/// Raw outcome of one relay POST: status code and body bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body. Best-effort for non-2xx responses.
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Return the body of a 2xx response, or classify the status as a
    /// [`FlashbotError::Status`].
    pub fn into_success(self) -> Result<Vec<u8>> {
        if (200..300).contains(&self.status) {
            Ok(self.body)
        } else {
            Err(FlashbotError::Status {
                status: self.status,
                body: String::from_utf8_lossy(&self.body).into_owned(),
            })
        }
    }
}

/// One signed POST to a relay.
///
/// The seam between the client and the network: the client round-trips
/// through this trait, so tests can substitute a recording or canned-answer
/// transport.
#[async_trait]
pub trait RelayTransport: Send + Sync {
    /// POST `payload` to `url` with the given signature header value.
    ///
    /// Returns the raw status and body; network-level failures (connect,
    /// timeout, body read of a 2xx response) are transport errors.
    async fn send(&self, url: &Url, payload: &[u8], signature: &str) -> Result<RawResponse>;
}

/// [`RelayTransport`] over a [`reqwest::Client`] with the fixed
/// [`REQUEST_TIMEOUT`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with a new client and the fixed timeout.
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client })
    }

    /// Create a transport over an existing client. The caller is
    /// responsible for the client's timeout configuration.
    pub const fn new_with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RelayTransport for HttpTransport {
    async fn send(&self, url: &Url, payload: &[u8], signature: &str) -> Result<RawResponse> {
        let response = self
            .client
            .post(url.clone())
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, "application/json")
            .header(SIGNATURE_HEADER, signature)
            .body(payload.to_vec())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // Best-effort body for error context. A failed read here
            // degrades to a status-only error rather than masking the
            // status with a transport error.
            let body = response.bytes().await.map(|b| b.to_vec()).unwrap_or_default();
            return Ok(RawResponse { status: status.as_u16(), body });
        }

        let body = response.bytes().await?;
        Ok(RawResponse { status: status.as_u16(), body: body.to_vec() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_status_ranges() {
        let ok = RawResponse { status: 200, body: b"{}".to_vec() };
        assert_eq!(ok.into_success().unwrap(), b"{}");

        let err = RawResponse { status: 500, body: b"relay overloaded".to_vec() };
        match err.into_success().unwrap_err() {
            FlashbotError::Status { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "relay overloaded");
            }
            other => panic!("expected status error, got {other}"),
        }
    }

    #[test]
    fn status_error_tolerates_missing_body() {
        let err = RawResponse { status: 503, body: Vec::new() };
        match err.into_success().unwrap_err() {
            FlashbotError::Status { status, body } => {
                assert_eq!(status, 503);
                assert!(body.is_empty());
            }
            other => panic!("expected status error, got {other}"),
        }
    }
}
