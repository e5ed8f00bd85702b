//! Trailing-edge debounce timer.
//!
//! A [`Debouncer`] holds at most one pending value. Scheduling a new value
//! supersedes the previous one, so a burst of updates only ever commits the
//! last value once the delay has elapsed without another update. Dropping the
//! debouncer drops the pending value with it.
//!
//! The timer runs on `tokio::time`, so tests can pause and advance the clock.

use std::time::Duration;

use tokio::time::{sleep_until, Instant};

#[derive(Debug)]
struct PendingTimer<T> {
    value: T,
    deadline: Instant,
}

#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<PendingTimer<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Arms the timer for `value`, cancelling whatever was pending.
    ///
    /// Returns `true` if a pending value was superseded.
    pub fn schedule(&mut self, value: T) -> bool {
        let deadline = Instant::now() + self.delay;
        self.pending
            .replace(PendingTimer { value, deadline })
            .is_some()
    }

    /// Disarms the timer and hands back the value that would have fired.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|timer| timer.value)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|timer| timer.deadline)
    }

    /// Takes the pending value if its deadline has passed.
    pub fn poll_expired(&mut self) -> Option<T> {
        let deadline = self.deadline()?;
        if Instant::now() < deadline {
            return None;
        }
        self.cancel()
    }

    /// Waits for the pending deadline and takes the value.
    ///
    /// Resolves immediately with `None` when nothing is pending. If the future
    /// is dropped early the value stays pending.
    pub async fn fire(&mut self) -> Option<T> {
        let deadline = self.deadline()?;
        sleep_until(deadline).await;
        self.cancel()
    }
}
