//! Retry executor.
//!
//! Runs a fallible async operation under a [`RetryPolicy`]. The result is
//! either the operation's success value or its own final error, returned
//! unchanged; exhaustion is signaled by that last real error, never by a
//! wrapper type.
//!
//! Every failed attempt whose error is retryable emits one `warn!` event,
//! including the last attempt before giving up. Successful attempts and
//! non-retryable failures emit none.

use std::fmt::Display;
use std::future::Future;

use tracing::{debug, warn};

use crate::retry::{RetryDecision, RetryPolicy};

// == Entry Points ==
/// Runs `operation`, retrying every failure according to `policy`.
pub async fn run_with_retry<T, E, F, Fut>(policy: &RetryPolicy, operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    run_with_retry_if(policy, |_: &E| true, operation).await
}

/// Runs `operation`, retrying only failures for which `is_retryable` holds.
///
/// A failure rejected by `is_retryable` is returned immediately, after a
/// single attempt's worth of work. Backoff waits use `tokio::time::sleep`,
/// so only the calling task is suspended.
pub async fn run_with_retry_if<T, E, F, Fut, P>(
    policy: &RetryPolicy,
    mut is_retryable: P,
    mut operation: F,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    P: FnMut(&E) -> bool,
    E: Display,
{
    let mut attempt: u32 = 1;

    // == Attempt Loop ==
    loop {
        let error = match operation().await {
            Ok(value) => return Ok(value),
            Err(error) => error,
        };

        let retryable = is_retryable(&error);
        if retryable {
            warn!(attempt, error = %error, "attempt failed");
        }

        match policy.decide(attempt, retryable) {
            RetryDecision::Retry { delay } => {
                debug!(
                    attempt,
                    delay_ms = delay.as_millis() as u64,
                    "backing off before next attempt"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            RetryDecision::GiveUp => return Err(error),
        }
    }
}
