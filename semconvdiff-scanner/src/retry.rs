use std::time::Duration;

/// Linear backoff used by the directory-listing fetcher.
///
/// After the failed attempt `i` (0-based) the fetcher waits
/// `delay_unit * (i + 3) * 2` before trying again, so with the default
/// one-second unit the waits are 6s, 8s, 10s, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of attempts (including the first).
    pub max_attempts: u32,
    /// Unit the linear schedule is expressed in.
    pub delay_unit: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 6,
            delay_unit: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            ..Self::default()
        }
    }

    pub fn with_delay_unit(mut self, delay_unit: Duration) -> Self {
        self.delay_unit = delay_unit;
        self
    }

    /// Delay to wait after the 0-based `attempt` failed.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        self.delay_unit
            .saturating_mul(attempt.saturating_add(3).saturating_mul(2))
    }

    /// Whether another attempt is allowed after the 0-based `attempt`.
    pub fn should_retry(&self, attempt: u32) -> bool {
        attempt.saturating_add(1) < self.max_attempts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schedule_is_linear() {
        let p = RetryPolicy::default();
        let delays: Vec<u64> = (0..6).map(|i| p.delay_for(i).as_secs()).collect();
        assert_eq!(delays, vec![6, 8, 10, 12, 14, 16]);
    }

    #[test]
    fn test_respects_max_attempts() {
        let p = RetryPolicy::default();
        assert!(p.should_retry(0));
        assert!(p.should_retry(4));
        assert!(!p.should_retry(5));
        assert!(!p.should_retry(6));
    }

    #[test]
    fn test_single_attempt_never_retries() {
        let p = RetryPolicy::new(1);
        assert!(!p.should_retry(0));
    }

    #[test]
    fn test_custom_delay_unit() {
        let p = RetryPolicy::new(3).with_delay_unit(Duration::from_millis(1));
        assert_eq!(p.delay_for(0), Duration::from_millis(6));
        assert_eq!(p.delay_for(2), Duration::from_millis(10));
    }
}
