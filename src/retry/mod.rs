//! Retry Module
//!
//! Bounded retries with exponential backoff for calls to remote services.
//!
//! # Data Flow
//! ```text
//! run_with_retry(policy, op)
//!     → op() fails with a retryable error
//!     → warn! with the attempt number
//!     → policy.decide() → sleep(backoff) → next attempt
//!     → or give up and return the operation's own error
//! ```

mod backoff;
mod executor;
mod policy;

pub use backoff::calculate_backoff;
pub use executor::{run_with_retry, run_with_retry_if};
pub use policy::{
    RetryDecision, RetryPolicy, DEFAULT_MAX_ATTEMPTS, DEFAULT_MIN_WAIT, DEFAULT_WAIT_MULTIPLIER,
};
