//! Pure sequence transformations for the etude exercise set.
//!
//! Everything in this crate is a pure function over small in-memory
//! sequences: no I/O, no async, no state shared between calls. Degenerate
//! inputs (non-positive bounds, a zero divisor, a zero stride) produce
//! empty or unchanged values rather than errors.
//!
//! # Modules
//!
//! - [`token`] - The mixed number/label element type
//! - [`sequence`] - Ordered integer sequence generation
//! - [`substitute`] - Divisibility rules and the ordered substitution pipeline
//! - [`fibonacci`] - Bounded Fibonacci generation
//! - [`words`] - Sentence word capitalization
//! - [`combine`] - Position-wise sequence combination

mod combine;
mod fibonacci;
mod sequence;
mod substitute;
mod token;
mod words;

pub use combine::combine;
pub use fibonacci::fibonacci_up_to;
pub use sequence::ascending;
pub use substitute::{Pipeline, Rule, fizz_buzz, fizz_buzz_zipped};
pub use token::Token;
pub use words::capitalize_every_nth;
