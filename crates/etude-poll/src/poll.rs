use std::future::Future;

use tokio::time::MissedTickBehavior;

use crate::error::PollError;
use crate::options::PollOptions;
use crate::phase::PollPhase;

/// Drives `attempt` for a bounded number of timed ticks and collects every
/// result in tick order.
///
/// Tick 0 fires immediately; each following tick fires `options.interval`
/// after the previous one. The future resolves once all
/// `options.attempts` invocations have succeeded, with one result per tick
/// in strictly increasing tick order. The first attempt error (or
/// per-attempt timeout, when configured) rejects the whole operation with
/// the offending tick index; no further ticks fire and no partial result is
/// returned.
///
/// Dropping the returned future cancels the operation.
///
/// # Panics
///
/// Panics if `options.interval` is zero.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use etude_poll::{PollOptions, poll};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let options = PollOptions::default()
///     .interval(Duration::from_millis(10))
///     .attempts(3);
/// let mut counter = 0u32;
/// let samples = poll(options, || {
///     counter += 1;
///     let sample = counter;
///     async move { Ok::<_, std::convert::Infallible>(sample) }
/// })
/// .await
/// .unwrap();
/// assert_eq!(samples, vec![1, 2, 3]);
/// # }
/// ```
pub async fn poll<T, E, F, Fut>(options: PollOptions, mut attempt: F) -> Result<Vec<T>, PollError<E>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::error::Error + 'static,
{
    let mut collected = Vec::with_capacity(options.attempts as usize);
    if options.attempts == 0 {
        report(&options, &PollPhase::Completed);
        return Ok(collected);
    }

    let mut timer = tokio::time::interval(options.interval);
    timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

    for tick in 0..options.attempts {
        report(&options, &PollPhase::Scheduled { tick });
        timer.tick().await;
        report(&options, &PollPhase::Waiting { tick });
        tracing::debug!(tick, "poll attempt started");

        let outcome = match options.attempt_timeout {
            Some(limit) => match tokio::time::timeout(limit, attempt()).await {
                Ok(outcome) => outcome,
                Err(_) => {
                    tracing::warn!(tick, "poll attempt timed out");
                    report(&options, &PollPhase::Failed);
                    return Err(PollError::Timeout { tick });
                }
            },
            None => attempt().await,
        };

        match outcome {
            Ok(value) => collected.push(value),
            Err(source) => {
                tracing::warn!(tick, error = %source, "poll attempt failed");
                report(&options, &PollPhase::Failed);
                return Err(PollError::Attempt { tick, source });
            }
        }
    }

    report(&options, &PollPhase::Completed);
    Ok(collected)
}

fn report(options: &PollOptions, phase: &PollPhase) {
    if let Some(observer) = &options.on_phase {
        observer(phase);
    }
}
