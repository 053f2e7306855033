//! Minimum-interval rate gate
//!
//! Not a token bucket: there is no burst allowance. Each caller takes the
//! lock, sleeps until `interval` has passed since the previous dispatch, then
//! records its own dispatch time. The timestamp is recorded whether or not the
//! caller slept, so spacing is measured between the starts of calls.
//!
//! Time comes from `tokio::time`, so tests can pause and advance the clock.

use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::trace;

/// Serializes callers so that dispatches are at least `interval` apart
#[derive(Debug)]
pub struct RateGate {
    interval: Duration,
    last: Mutex<Option<Instant>>,
}

impl RateGate {
    /// Create a gate with the given minimum interval
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: Mutex::new(None),
        }
    }

    /// Wait until the gate clears, record the dispatch time and return it
    pub async fn acquire(&self) -> Instant {
        // Held across the sleep: waiters queue behind the sleeper.
        let mut last = self.last.lock().await;

        if let Some(prev) = *last {
            if prev.elapsed() < self.interval {
                let ready_at = prev + self.interval;
                trace!(
                    wait_ms = ready_at.saturating_duration_since(Instant::now()).as_millis() as u64,
                    "rate gate closed, waiting"
                );
                tokio::time::sleep_until(ready_at).await;
            }
        }

        let now = Instant::now();
        *last = Some(now);
        now
    }

    /// Time of the most recent dispatch, if any
    pub async fn last_dispatch(&self) -> Option<Instant> {
        *self.last.lock().await
    }

    /// The configured minimum interval
    pub fn interval(&self) -> Duration {
        self.interval
    }
}
