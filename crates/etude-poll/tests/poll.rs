//! Behavioral tests for the bounded poller.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use etude_poll::{PollError, PollOptions, PollPhase, poll};

#[derive(Debug, PartialEq)]
struct TickFailed(u32);

impl std::fmt::Display for TickFailed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "tick {} failed", self.0)
    }
}

impl std::error::Error for TickFailed {}

fn fast(attempts: u32) -> PollOptions {
    PollOptions::default()
        .interval(Duration::from_millis(5))
        .attempts(attempts)
}

#[tokio::test]
async fn invokes_exactly_attempts_times_in_tick_order() {
    let invocations = Arc::new(AtomicU32::new(0));
    let counter = Arc::clone(&invocations);

    let samples = poll(fast(5), move || {
        let tick = counter.fetch_add(1, Ordering::SeqCst);
        async move { Ok::<_, TickFailed>(tick) }
    })
    .await
    .unwrap();

    assert_eq!(samples, vec![0, 1, 2, 3, 4]);
    assert_eq!(invocations.load(Ordering::SeqCst), 5);
}

#[tokio::test]
async fn first_failure_is_terminal() {
    let invocations = Arc::new(AtomicU32::new(0));
    let counter = Arc::clone(&invocations);

    let result = poll(fast(5), move || {
        let tick = counter.fetch_add(1, Ordering::SeqCst);
        async move {
            if tick == 2 {
                Err(TickFailed(tick))
            } else {
                Ok(tick)
            }
        }
    })
    .await;

    assert_eq!(
        result,
        Err(PollError::Attempt {
            tick: 2,
            source: TickFailed(2),
        })
    );
    // Failure stops the schedule; ticks 3 and 4 never fire.
    assert_eq!(invocations.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn attempt_timeout_fails_the_operation() {
    let options = fast(3).attempt_timeout(Duration::from_millis(10));

    let result: Result<Vec<u32>, _> = poll(options, || async {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok::<_, TickFailed>(0)
    })
    .await;

    assert_eq!(result, Err(PollError::Timeout { tick: 0 }));
}

#[tokio::test]
async fn zero_attempts_resolve_empty() {
    let phases = Arc::new(Mutex::new(Vec::new()));
    let observed = Arc::clone(&phases);
    let options = fast(0).on_phase(Arc::new(move |phase: &PollPhase| {
        observed.lock().unwrap().push(*phase);
    }));

    let samples = poll(options, || async { Ok::<u32, TickFailed>(1) })
        .await
        .unwrap();

    assert!(samples.is_empty());
    assert_eq!(*phases.lock().unwrap(), vec![PollPhase::Completed]);
}

#[tokio::test]
async fn phases_progress_in_declared_order() {
    let phases = Arc::new(Mutex::new(Vec::new()));
    let observed = Arc::clone(&phases);
    let options = fast(2).on_phase(Arc::new(move |phase: &PollPhase| {
        observed.lock().unwrap().push(*phase);
    }));

    poll(options, || async { Ok::<u32, TickFailed>(7) })
        .await
        .unwrap();

    assert_eq!(
        *phases.lock().unwrap(),
        vec![
            PollPhase::Scheduled { tick: 0 },
            PollPhase::Waiting { tick: 0 },
            PollPhase::Scheduled { tick: 1 },
            PollPhase::Waiting { tick: 1 },
            PollPhase::Completed,
        ]
    );
}

#[tokio::test]
async fn failure_reports_failed_phase_last() {
    let phases = Arc::new(Mutex::new(Vec::new()));
    let observed = Arc::clone(&phases);
    let options = fast(3).on_phase(Arc::new(move |phase: &PollPhase| {
        observed.lock().unwrap().push(*phase);
    }));

    let result = poll(options, || async { Err::<u32, _>(TickFailed(0)) }).await;

    assert!(result.is_err());
    assert_eq!(phases.lock().unwrap().last(), Some(&PollPhase::Failed));
}

#[tokio::test]
async fn first_tick_fires_immediately() {
    let options = PollOptions::default()
        .interval(Duration::from_secs(60))
        .attempts(1);

    let started = Instant::now();
    let samples = poll(options, || async { Ok::<_, TickFailed>(42) })
        .await
        .unwrap();

    assert_eq!(samples, vec![42]);
    assert!(started.elapsed() < Duration::from_secs(1));
}

#[tokio::test]
async fn later_ticks_wait_for_the_interval() {
    let options = PollOptions::default()
        .interval(Duration::from_millis(30))
        .attempts(3);

    let started = Instant::now();
    poll(options, || async { Ok::<_, TickFailed>(()) })
        .await
        .unwrap();

    // Two inter-tick gaps of 30ms each; leave slack for timer coarseness.
    assert!(started.elapsed() >= Duration::from_millis(50));
}
