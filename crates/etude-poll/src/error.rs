//! Error types for etude-poll.

use thiserror::Error;

/// Why a polling operation stopped early.
///
/// The tick index of the offending attempt is preserved so callers can tell
/// how far the operation got before it failed.
#[derive(Debug, Error, PartialEq)]
pub enum PollError<E>
where
    E: std::error::Error + 'static,
{
    /// An attempt resolved with an error. Not retried; the operation stops
    /// at this tick.
    #[error("poll attempt {tick} failed")]
    Attempt {
        /// Zero-based index of the failed attempt.
        tick: u32,
        #[source]
        source: E,
    },

    /// An attempt outlived the configured per-attempt timeout.
    #[error("poll attempt {tick} timed out")]
    Timeout {
        /// Zero-based index of the attempt that timed out.
        tick: u32,
    },
}
