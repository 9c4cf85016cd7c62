//! Client-side call throttling for the Bittrex API
//!
//! Bittrex enforces a per-key request rate. [`CallInterval`] tracks the time
//! of the previous call and reports how long the next one has to wait so that
//! successive calls are at least `1 / calls_per_second` apart.

use std::time::{Duration, Instant};

/// Minimum-interval throttle state
///
/// This holds no clock of its own; callers pass `now` in and
/// record the instant at which the call actually went out.
#[derive(Debug, Clone)]
pub struct CallInterval {
    /// Minimum spacing between calls
    interval: Duration,
    /// When the previous call was let through
    last_call: Option<Instant>,
}

impl CallInterval {
    /// Create a throttle allowing `calls_per_second` calls per second
    ///
    /// Returns `None` when the rate is not a positive finite number, or is
    /// so small that the interval does not fit in a `Duration`.
    pub fn per_second(calls_per_second: f64) -> Option<Self> {
        if !calls_per_second.is_finite() || calls_per_second <= 0.0 {
            return None;
        }
        Duration::try_from_secs_f64(1.0 / calls_per_second)
            .ok()
            .map(Self::new)
    }

    /// Create a throttle with an explicit interval
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_call: None,
        }
    }

    /// Time the next call has to wait if it were made at `now`
    ///
    /// The first call never waits.
    pub fn delay(&self, now: Instant) -> Duration {
        match self.last_call {
            None => Duration::ZERO,
            Some(last) => self.interval.saturating_sub(now.saturating_duration_since(last)),
        }
    }

    /// Record that a call went out at `at`
    pub fn record(&mut self, at: Instant) {
        self.last_call = Some(at);
    }

    /// Get the configured interval
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Get the instant of the previous call, if any
    pub fn last_call(&self) -> Option<Instant> {
        self.last_call
    }

    /// Forget the previous call
    pub fn reset(&mut self) {
        self.last_call = None;
    }
}

impl Default for CallInterval {
    /// One call per second
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_call_is_free() {
        let throttle = CallInterval::per_second(2.0).unwrap();
        assert_eq!(throttle.delay(Instant::now()), Duration::ZERO);
        assert!(throttle.last_call().is_none());
    }

    #[test]
    fn test_remaining_interval() {
        let mut throttle = CallInterval::per_second(2.0).unwrap();
        let start = Instant::now();
        throttle.record(start);

        assert_eq!(throttle.delay(start), Duration::from_millis(500));
        assert_eq!(
            throttle.delay(start + Duration::from_millis(200)),
            Duration::from_millis(300)
        );
        assert_eq!(throttle.delay(start + Duration::from_secs(1)), Duration::ZERO);
    }

    #[test]
    fn test_rejects_invalid_rates() {
        assert!(CallInterval::per_second(0.0).is_none());
        assert!(CallInterval::per_second(-1.0).is_none());
        assert!(CallInterval::per_second(f64::NAN).is_none());
        assert!(CallInterval::per_second(f64::INFINITY).is_none());
    }

    #[test]
    fn test_rejects_rates_with_unrepresentable_interval() {
        assert!(CallInterval::per_second(1e-300).is_none());
        assert!(CallInterval::per_second(f64::MIN_POSITIVE / 4.0).is_none());
        assert_eq!(
            CallInterval::per_second(1.0 / 1024.0).map(|t| t.interval()),
            Some(Duration::from_secs(1024))
        );
    }

    #[test]
    fn test_reset() {
        let mut throttle = CallInterval::default();
        throttle.record(Instant::now());
        throttle.reset();
        assert_eq!(throttle.delay(Instant::now()), Duration::ZERO);
    }
}
