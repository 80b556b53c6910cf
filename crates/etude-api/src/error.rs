//! Error types for etude-api.

use etude_poll::PollError;
use thiserror::Error;

use crate::transport::TransportError;

/// Errors surfaced by the weather and track clients.
///
/// Every failure propagates to the immediate caller; there is no retry, no
/// local recovery, and no partial result.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The service credential was empty or blank.
    #[error("API key must not be empty")]
    MissingApiKey,

    /// The HTTP edge failed before any decoding happened.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The response decoded, but a consumed field was absent or empty.
    #[error("response field missing or empty: {field}")]
    MissingField {
        /// Wire name of the field that was expected.
        field: &'static str,
    },

    /// The response JSON did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// An epoch-seconds value could not be represented as a timestamp.
    #[error("timestamp out of range: {0}")]
    InvalidTimestamp(i64),

    /// A polled attempt failed; the tick index tells how far the schedule
    /// got.
    #[error("poll attempt {tick} failed")]
    Poll {
        /// Zero-based index of the failed attempt.
        tick: u32,
        #[source]
        source: Box<ApiError>,
    },

    /// A polled attempt outlived its configured timeout.
    #[error("poll attempt {tick} timed out")]
    PollTimeout {
        /// Zero-based index of the attempt that timed out.
        tick: u32,
    },
}

impl From<PollError<ApiError>> for ApiError {
    fn from(e: PollError<ApiError>) -> Self {
        match e {
            PollError::Attempt { tick, source } => ApiError::Poll {
                tick,
                source: Box::new(source),
            },
            PollError::Timeout { tick } => ApiError::PollTimeout { tick },
        }
    }
}
