//! Retry policy configuration.

use std::time::Duration;

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Configuration for automatic retry behavior.
///
/// Controls how many times an operation is attempted and how long to wait
/// between attempts. With `backoff` enabled the wait doubles after every
/// failed attempt; otherwise it stays at `delay`.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use timesheet_lib::retry::RetryPolicy;
///
/// // Default policy: 3 attempts, 1s base delay, exponential backoff
/// let policy = RetryPolicy::default();
///
/// // Custom policy
/// let custom = RetryPolicy::default()
///     .max_attempts(5)
///     .delay(Duration::from_millis(100));
/// assert_eq!(custom.delay_for(3), Duration::from_millis(400));
///
/// // Single attempt, never wait
/// let once = RetryPolicy::no_retry();
/// assert_eq!(once.max_attempts, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of attempts, including the first one. Always at least 1.
    pub max_attempts: u32,
    /// Delay before the first retry.
    pub delay: Duration,
    /// Whether the delay doubles after each failed attempt.
    pub backoff: bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_secs(1),
            backoff: true,
        }
    }
}

impl RetryPolicy {
    /// Creates a policy with the given attempt limit, delay and backoff mode.
    pub fn new(max_attempts: u32, delay: Duration, backoff: bool) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay,
            backoff,
        }
    }

    /// Creates a policy that makes a single attempt.
    pub fn no_retry() -> Self {
        Self {
            max_attempts: 1,
            delay: Duration::ZERO,
            ..Default::default()
        }
    }

    /// Sets the maximum number of attempts (clamped to at least 1).
    pub fn max_attempts(mut self, n: u32) -> Self {
        self.max_attempts = n.max(1);
        self
    }

    /// Sets the base delay between attempts.
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Enables or disables exponential backoff.
    pub fn backoff(mut self, enabled: bool) -> Self {
        self.backoff = enabled;
        self
    }

    /// Returns the wait before the given retry (1-based: the wait after the
    /// first failed attempt is `delay_for(1)`).
    ///
    /// Saturates at `Duration::MAX` instead of overflowing.
    pub fn delay_for(&self, retry: u32) -> Duration {
        if !self.backoff || retry <= 1 {
            return self.delay;
        }
        if self.delay.is_zero() {
            return Duration::ZERO;
        }
        let nanos = 2u128
            .checked_pow(retry - 1)
            .and_then(|factor| self.delay.as_nanos().checked_mul(factor));
        match nanos {
            Some(nanos) if nanos <= Duration::MAX.as_nanos() => Duration::new(
                (nanos / NANOS_PER_SEC) as u64,
                (nanos % NANOS_PER_SEC) as u32,
            ),
            _ => Duration::MAX,
        }
    }

    /// Returns every wait the policy would perform if all attempts failed.
    pub fn schedule(&self) -> Vec<Duration> {
        (1..self.max_attempts.max(1)).map(|retry| self.delay_for(retry)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exponential_delays() {
        let policy = RetryPolicy::new(5, Duration::from_millis(100), true);
        assert_eq!(
            policy.schedule(),
            vec![
                Duration::from_millis(100),
                Duration::from_millis(200),
                Duration::from_millis(400),
                Duration::from_millis(800),
            ]
        );
    }

    #[test]
    fn test_constant_delays() {
        let policy = RetryPolicy::new(4, Duration::from_millis(100), false);
        assert_eq!(policy.schedule(), vec![Duration::from_millis(100); 3]);
    }

    #[test]
    fn test_attempts_clamped() {
        assert_eq!(RetryPolicy::new(0, Duration::ZERO, true).max_attempts, 1);
        assert_eq!(RetryPolicy::default().max_attempts(0).max_attempts, 1);
        assert!(RetryPolicy::no_retry().schedule().is_empty());
    }

    #[test]
    fn test_delay_saturates() {
        let policy = RetryPolicy::new(u32::MAX, Duration::from_secs(u64::MAX / 2), true);
        assert_eq!(policy.delay_for(40), Duration::MAX);
        assert_eq!(policy.delay_for(200), Duration::MAX);
    }

    #[test]
    fn test_delay_keeps_doubling_past_u32_factor() {
        let policy = RetryPolicy::new(40, Duration::from_millis(1), true);
        assert_eq!(policy.delay_for(33), Duration::from_millis(1 << 32));
        assert_eq!(policy.delay_for(34), Duration::from_millis(1 << 33));
        assert_eq!(policy.delay_for(35), Duration::from_millis(1 << 34));
        for retry in 1..60 {
            assert_eq!(policy.delay_for(retry + 1), policy.delay_for(retry) * 2);
        }
        assert_eq!(policy.delay_for(200), Duration::MAX);
        assert_eq!(RetryPolicy::new(2, Duration::ZERO, true).delay_for(200), Duration::ZERO);
    }
}
