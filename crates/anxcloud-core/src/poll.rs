//! Waiting for eventually consistent resource state.
//!
//! Resources such as VLANs and prefixes are provisioned asynchronously: a create call
//! returns while the record is still `Pending`, and it turns `Active` some time later.
//! The helpers here re-fetch a record until it reaches the wanted state.

use crate::error::{Error, Result};
use std::future::Future;
use std::time::Duration;
use tokio::time::{sleep, Instant};
use tracing::debug;

/// Default delay between two fetches.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 5;

/// Default overall deadline.
pub const DEFAULT_POLL_TIMEOUT_SECS: u64 = 15 * 60;

/// Status reported once provisioning has finished.
pub const STATUS_ACTIVE: &str = "Active";

/// Records carrying a server side status string.
pub trait HasStatus {
    /// The current status, e.g. `Pending` or `Active`.
    fn status(&self) -> &str;
}

/// Interval and deadline for polling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollOptions {
    /// Delay between two fetches.
    pub interval: Duration,
    /// Give up after this long.
    pub timeout: Duration,
}

impl PollOptions {
    /// Options with the default interval and timeout.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            interval: Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
            timeout: Duration::from_secs(DEFAULT_POLL_TIMEOUT_SECS),
        }
    }

    /// Set the delay between fetches.
    #[must_use]
    pub const fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Set the overall deadline.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for PollOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Call `fetch` until `done` accepts its result.
///
/// Errors returned by `fetch` end polling immediately. A timeout too large to be
/// represented as a deadline, such as `Duration::MAX`, polls without a deadline.
///
/// # Errors
///
/// Returns the first fetch error, or [`Error::Timeout`] when the deadline passes.
pub async fn poll_until<T, F, Fut, P>(options: PollOptions, mut fetch: F, mut done: P) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
    P: FnMut(&T) -> bool,
{
    let deadline = Instant::now().checked_add(options.timeout);
    let mut attempt: u32 = 0;

    loop {
        attempt = attempt.saturating_add(1);
        let value = fetch().await?;
        if done(&value) {
            return Ok(value);
        }

        let delay = match deadline {
            Some(deadline) => {
                let now = Instant::now();
                if now >= deadline {
                    return Err(Error::Timeout(format!(
                        "condition not met after {attempt} attempts within {:?}",
                        options.timeout
                    )));
                }
                options.interval.min(deadline - now)
            }
            None => options.interval,
        };

        debug!(attempt, "condition not met yet, polling again");
        sleep(delay).await;
    }
}

/// Call `fetch` until the returned record reports `target` as its status.
///
/// # Errors
///
/// Returns the first fetch error, or [`Error::Timeout`] when the deadline passes.
pub async fn wait_for_status<T, F, Fut>(options: PollOptions, fetch: F, target: &str) -> Result<T>
where
    T: HasStatus,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    poll_until(options, fetch, |record: &T| record.status() == target).await
}
