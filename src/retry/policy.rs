//! Retry policy and the per-attempt retry decision.
//!
//! # State Transitions
//! ```text
//! ATTEMPTING(n) → SUCCESS:          operation returned Ok
//! ATTEMPTING(n) → ATTEMPTING(n+1):  retryable failure, n < max_attempts (after backoff)
//! ATTEMPTING(n) → FAILURE:          non-retryable failure, or n == max_attempts
//! ```

use std::time::Duration;

use crate::retry::calculate_backoff;

// == Defaults ==
/// Default bound on total tries
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Default backoff multiplier
pub const DEFAULT_WAIT_MULTIPLIER: Duration = Duration::from_secs(1);

/// Default lower bound on any backoff wait
pub const DEFAULT_MIN_WAIT: Duration = Duration::from_secs(1);

// == Retry Policy ==
/// Bounded-attempt exponential backoff policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    multiplier: Duration,
    min_wait: Duration,
    max_wait: Option<Duration>,
}

/// What to do after a failed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Sleep for `delay`, then make the next attempt
    Retry { delay: Duration },
    /// Surface the failure to the caller
    GiveUp,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            multiplier: DEFAULT_WAIT_MULTIPLIER,
            min_wait: DEFAULT_MIN_WAIT,
            max_wait: None,
        }
    }
}

impl RetryPolicy {
    // == Constructors ==
    /// Creates a policy. `max_attempts` below 1 is raised to 1.
    pub fn new(max_attempts: u32, multiplier: Duration, min_wait: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            multiplier,
            min_wait,
            max_wait: None,
        }
    }

    /// Caps every backoff wait at `max_wait`.
    pub fn with_max_wait(mut self, max_wait: Duration) -> Self {
        self.max_wait = Some(max_wait);
        self
    }

    /// Sets the bound on total tries. Values below 1 are raised to 1.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// A policy with no waiting between attempts, mostly for tests.
    pub fn immediate(max_attempts: u32) -> Self {
        Self::new(max_attempts, Duration::ZERO, Duration::ZERO)
    }

    // == Accessors ==
    /// Bound on total tries, at least 1.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Base wait, doubled after each failed attempt.
    pub fn multiplier(&self) -> Duration {
        self.multiplier
    }

    /// Floor applied to every backoff wait.
    pub fn min_wait(&self) -> Duration {
        self.min_wait
    }

    /// Optional cap on every backoff wait.
    pub fn max_wait(&self) -> Option<Duration> {
        self.max_wait
    }

    /// Wait inserted after attempt number `attempt` fails.
    pub fn backoff(&self, attempt: u32) -> Duration {
        calculate_backoff(attempt, self.multiplier, self.min_wait, self.max_wait)
    }

    // == Decision ==
    /// Decides the transition out of `ATTEMPTING(attempt)` after a failure.
    pub fn decide(&self, attempt: u32, retryable: bool) -> RetryDecision {
        if retryable && attempt < self.max_attempts {
            RetryDecision::Retry {
                delay: self.backoff(attempt),
            }
        } else {
            RetryDecision::GiveUp
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts(), 3);
        assert_eq!(policy.multiplier(), Duration::from_secs(1));
        assert_eq!(policy.min_wait(), Duration::from_secs(1));
        assert_eq!(policy.max_wait(), None);
    }

    #[test]
    fn test_zero_attempts_raised_to_one() {
        assert_eq!(RetryPolicy::immediate(0).max_attempts(), 1);
        assert_eq!(RetryPolicy::default().with_max_attempts(0).max_attempts(), 1);
    }

    #[test]
    fn test_decide_retries_until_bound() {
        let policy = RetryPolicy::default();

        assert_eq!(
            policy.decide(1, true),
            RetryDecision::Retry {
                delay: Duration::from_secs(1)
            }
        );
        assert_eq!(
            policy.decide(2, true),
            RetryDecision::Retry {
                delay: Duration::from_secs(2)
            }
        );
        assert_eq!(policy.decide(3, true), RetryDecision::GiveUp);
    }

    #[test]
    fn test_decide_non_retryable_gives_up() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.decide(1, false), RetryDecision::GiveUp);
    }

    #[test]
    fn test_single_attempt_never_retries() {
        let policy = RetryPolicy::immediate(1);
        assert_eq!(policy.decide(1, true), RetryDecision::GiveUp);
    }

    #[test]
    fn test_max_wait_applies_to_backoff() {
        let policy = RetryPolicy::new(10, Duration::from_secs(1), Duration::from_secs(1))
            .with_max_wait(Duration::from_secs(3));
        assert_eq!(policy.backoff(5), Duration::from_secs(3));
    }
}
