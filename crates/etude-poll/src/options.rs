use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::phase::PollPhase;

/// Configuration for a polling operation.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use etude_poll::PollOptions;
///
/// let options = PollOptions::default()
///     .interval(Duration::from_secs(1))
///     .attempts(5)
///     .attempt_timeout(Duration::from_secs(10));
/// ```
#[derive(Clone)]
pub struct PollOptions {
    /// Delay between consecutive ticks. The first tick fires immediately.
    ///
    /// Must be non-zero.
    ///
    /// Default: 1s
    pub interval: Duration,

    /// Total number of invocations, counting the immediate first one.
    ///
    /// Zero attempts resolve immediately with an empty result.
    ///
    /// Default: 1
    pub attempts: u32,

    /// Upper bound on a single attempt's duration.
    ///
    /// When set, an attempt that outlives it fails the whole operation with
    /// [`PollError::Timeout`](crate::PollError::Timeout). When unset, an
    /// attempt that never resolves stalls the operation.
    ///
    /// Default: None
    pub attempt_timeout: Option<Duration>,

    /// Observer invoked on every phase transition.
    ///
    /// Receives a reference to avoid cloning per transition.
    ///
    /// Default: None
    pub on_phase: Option<Arc<dyn Fn(&PollPhase) + Send + Sync>>,
}

impl fmt::Debug for PollOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PollOptions")
            .field("interval", &self.interval)
            .field("attempts", &self.attempts)
            .field("attempt_timeout", &self.attempt_timeout)
            .field("on_phase", &"{ ... }")
            .finish()
    }
}

impl Default for PollOptions {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(1),
            attempts: 1,
            attempt_timeout: None,
            on_phase: None,
        }
    }
}

impl PollOptions {
    /// Set the tick interval.
    #[must_use]
    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Set the total number of attempts.
    #[must_use]
    pub fn attempts(mut self, attempts: u32) -> Self {
        self.attempts = attempts;
        self
    }

    /// Set the per-attempt timeout.
    #[must_use]
    pub fn attempt_timeout(mut self, attempt_timeout: Duration) -> Self {
        self.attempt_timeout = Some(attempt_timeout);
        self
    }

    /// Set the phase observer.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use etude_poll::{PollOptions, PollPhase};
    ///
    /// let options = PollOptions::default().on_phase(Arc::new(|phase| {
    ///     if let PollPhase::Waiting { tick } = phase {
    ///         println!("attempt {tick} in flight");
    ///     }
    /// }));
    /// ```
    #[must_use]
    pub fn on_phase(mut self, on_phase: Arc<dyn Fn(&PollPhase) + Send + Sync>) -> Self {
        self.on_phase = Some(on_phase);
        self
    }
}
