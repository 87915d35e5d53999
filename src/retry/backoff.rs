//! Exponential backoff.

use std::time::Duration;

// == Backoff ==
/// Calculate the wait after `attempt` has failed.
///
/// The delay is `multiplier * 2^(attempt - 1)`, floored at `min_wait` and
/// capped at `max_wait` when one is set. Arithmetic saturates, so large
/// attempt numbers never overflow.
pub fn calculate_backoff(
    attempt: u32,
    multiplier: Duration,
    min_wait: Duration,
    max_wait: Option<Duration>,
) -> Duration {
    let exponent = attempt.saturating_sub(1);
    let factor = 2u32.checked_pow(exponent).unwrap_or(u32::MAX);
    let delay = multiplier.saturating_mul(factor).max(min_wait);

    match max_wait {
        Some(cap) => delay.min(cap),
        None => delay,
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    const SEC: Duration = Duration::from_secs(1);

    #[test]
    fn test_backoff_doubles_per_attempt() {
        assert_eq!(calculate_backoff(1, SEC, SEC, None), SEC);
        assert_eq!(calculate_backoff(2, SEC, SEC, None), 2 * SEC);
        assert_eq!(calculate_backoff(3, SEC, SEC, None), 4 * SEC);
        assert_eq!(calculate_backoff(4, SEC, SEC, None), 8 * SEC);
    }

    #[test]
    fn test_backoff_floored_at_min_wait() {
        let multiplier = Duration::from_millis(100);
        let min = Duration::from_millis(500);

        assert_eq!(calculate_backoff(1, multiplier, min, None), min);
        assert_eq!(calculate_backoff(3, multiplier, min, None), min);
        assert_eq!(
            calculate_backoff(4, multiplier, min, None),
            Duration::from_millis(800)
        );
    }

    #[test]
    fn test_backoff_capped() {
        let cap = Some(Duration::from_secs(5));
        assert_eq!(calculate_backoff(10, SEC, SEC, cap), Duration::from_secs(5));
    }

    #[test]
    fn test_backoff_saturates() {
        let delay = calculate_backoff(200, SEC, SEC, None);
        assert!(delay >= Duration::from_secs(u32::MAX as u64));
    }

    #[test]
    fn test_zero_multiplier_uses_min_wait() {
        let min = Duration::from_millis(10);
        assert_eq!(calculate_backoff(5, Duration::ZERO, min, None), min);
    }
}
