//! Retry with exponential backoff.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use thiserror::Error;

use crate::lifecycle::Shutdown;

/// How often and how patiently an operation is retried.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Total attempts allowed, including the first one.
    attempts: u32,
    /// Wait before the second attempt; doubles after every failed attempt.
    initial_interval: Duration,
}

impl RetryPolicy {
    pub fn new(attempts: u32, initial_interval: Duration) -> Self {
        Self {
            attempts,
            initial_interval,
        }
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 5,
            initial_interval: Duration::from_secs(1),
        }
    }
}

/// Terminal outcomes of a retried operation.
#[derive(Debug, Error)]
pub enum RetryError<E> {
    /// Every allowed attempt failed.
    #[error("no connection, {attempts} attempts exhausted: {last}")]
    Exhausted { attempts: u32, last: E },

    /// Shutdown fired while waiting for the next attempt.
    #[error("cancelled while waiting to retry")]
    Cancelled,
}

/// Run `op` until it succeeds, the policy's attempts are exhausted, or
/// shutdown fires during a backoff wait.
///
/// A success on the final allowed attempt is a success. Cancellation aborts
/// the wait immediately and no further attempt is made.
pub async fn retry<T, E, F, Fut>(
    policy: &RetryPolicy,
    shutdown: &Shutdown,
    mut op: F,
) -> Result<T, RetryError<E>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let mut remaining = policy.attempts;
    let mut interval = policy.initial_interval;

    loop {
        let err = match op().await {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };

        remaining -= 1;
        if remaining == 0 {
            return Err(RetryError::Exhausted {
                attempts: policy.attempts,
                last: err,
            });
        }

        tracing::warn!(
            error = %err,
            wait_interval = ?interval,
            attempts_remaining = remaining,
            "attempt failed, retrying"
        );

        tokio::select! {
            _ = shutdown.cancelled() => return Err(RetryError::Cancelled),
            _ = tokio::time::sleep(interval) => interval = interval.saturating_mul(2),
        }
    }
}
