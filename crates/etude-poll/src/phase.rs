use std::fmt;

/// Phases of a polling operation.
///
/// An operation moves through these phases in order:
/// Idle → Scheduled(0) → Waiting(0) → Scheduled(1) → ... → Completed
///
/// `Completed` and `Failed` are terminal; `Failed` is entered on the first
/// attempt error or timeout and no further ticks fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PollPhase {
    /// No attempt has been scheduled yet.
    #[default]
    Idle,

    /// Waiting for tick `tick`'s scheduled time to arrive.
    Scheduled {
        /// Zero-based index of the upcoming attempt.
        tick: u32,
    },

    /// Attempt `tick` is in flight.
    Waiting {
        /// Zero-based index of the running attempt.
        tick: u32,
    },

    /// All attempts resolved; results were delivered in tick order.
    Completed,

    /// An attempt failed or timed out; the operation stopped there.
    Failed,
}

impl fmt::Display for PollPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PollPhase::Idle => write!(f, "Idle"),
            PollPhase::Scheduled { tick } => write!(f, "Scheduled({})", tick),
            PollPhase::Waiting { tick } => write!(f, "Waiting({})", tick),
            PollPhase::Completed => write!(f, "Completed"),
            PollPhase::Failed => write!(f, "Failed"),
        }
    }
}
