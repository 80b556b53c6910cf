//! Bounded interval polling with ordered result collection.
//!
//! [`poll`] fires an asynchronous operation immediately, then once per
//! interval, for a fixed number of attempts, and resolves once with every
//! result in tick order. The first failed attempt rejects the whole
//! operation; there is no retry and no partial result.
//!
//! # Key Properties
//!
//! - **Immediate first tick**: tick 0 fires without waiting for the interval
//! - **Ordered delivery**: results arrive in strictly increasing tick order
//! - **Fail-fast**: the first error or attempt timeout is terminal
//! - **Cancellation by drop**: dropping the returned future stops polling;
//!   no partial result escapes

mod error;
mod options;
mod phase;
mod poll;

pub use error::PollError;
pub use options::PollOptions;
pub use phase::PollPhase;
pub use poll::poll;
