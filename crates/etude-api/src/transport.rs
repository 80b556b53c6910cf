use std::future::Future;

use serde_json::Value;
use thiserror::Error;

/// Errors from the HTTP edge, before any domain decoding happens.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The server answered with a non-success status.
    #[error("HTTP status {status}")]
    Http {
        /// The response status code.
        status: u16,
    },

    /// The request never produced a response (DNS, connect, TLS, ...).
    #[error("network error: {0}")]
    Network(String),

    /// The response body was not valid JSON.
    #[error("malformed response body: {0}")]
    Json(#[from] serde_json::Error),
}

/// Asynchronous JSON-over-HTTP transport abstraction.
///
/// This is the minimal interface the clients need. The production
/// implementation is [`ReqwestTransport`]; tests substitute scripted
/// implementations.
pub trait ApiTransport: Send + Sync {
    /// GET `url` and decode the response body as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, a non-success status, or a body
    /// that is not valid JSON.
    fn get_json(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<Value, TransportError>> + Send;
}

#[cfg(feature = "reqwest")]
mod reqwest_impl {
    use super::*;

    /// Production transport backed by a shared [`reqwest::Client`].
    #[derive(Debug, Clone, Default)]
    pub struct ReqwestTransport {
        client: reqwest::Client,
    }

    impl ReqwestTransport {
        /// Create a transport with reqwest's default configuration.
        pub fn new() -> Self {
            Self {
                client: reqwest::Client::new(),
            }
        }
    }

    impl ApiTransport for ReqwestTransport {
        async fn get_json(&self, url: &str) -> Result<Value, TransportError> {
            let response = self
                .client
                .get(url)
                .send()
                .await
                .map_err(|e| TransportError::Network(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(TransportError::Http {
                    status: status.as_u16(),
                });
            }

            let body = response
                .text()
                .await
                .map_err(|e| TransportError::Network(e.to_string()))?;
            Ok(serde_json::from_str(&body)?)
        }
    }
}

#[cfg(feature = "reqwest")]
pub use reqwest_impl::ReqwestTransport;
