//! Shared call throttle for the REST client
//!
//! Wraps [`CallInterval`] in an async mutex so that any number of tasks
//! sharing one client are spaced at least `1 / calls_per_second` apart.
//! The lock is held across the sleep, so waiters queue behind each other
//! and each one sees the previous caller's timestamp.

use std::time::Duration;

use bittrex_types::CallInterval;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{instrument, trace};

use crate::error::{RestError, RestResult};

/// Minimum-interval rate limiter
#[derive(Debug)]
pub struct RateLimiter {
    state: Mutex<CallInterval>,
}

impl RateLimiter {
    /// Create a limiter allowing `calls_per_second` calls per second
    pub fn per_second(calls_per_second: f64) -> RestResult<Self> {
        let interval = CallInterval::per_second(calls_per_second).ok_or_else(|| {
            RestError::InvalidParameter(format!(
                "calls_per_second must be a positive number, got {}",
                calls_per_second
            ))
        })?;
        Ok(Self::from_interval(interval))
    }

    pub fn from_interval(interval: CallInterval) -> Self {
        Self {
            state: Mutex::new(interval),
        }
    }

    /// Minimum spacing between calls
    pub async fn interval(&self) -> Duration {
        self.state.lock().await.interval()
    }

    /// Wait until the next call may go out
    ///
    /// The first call returns immediately. Returns how long this call slept.
    #[instrument(skip(self), level = "debug")]
    pub async fn wait(&self) -> Duration {
        let mut state = self.state.lock().await;
        let delay = state.delay(Instant::now().into_std());

        if !delay.is_zero() {
            trace!(?delay, "Throttling request");
            tokio::time::sleep(delay).await;
        }

        state.record(Instant::now().into_std());
        delay
    }

    /// Like [`RateLimiter::wait`], but gives up when `token` is cancelled
    ///
    /// A cancelled wait does not count as a call.
    pub async fn wait_cancellable(&self, token: &CancellationToken) -> RestResult<Duration> {
        self.wait_cancellable_then(token, || ()).await.map(|(delay, ())| delay)
    }

    /// Wait like [`RateLimiter::wait_cancellable`], then run `admit` before
    /// releasing the lock
    ///
    /// Callers are admitted one at a time in the order they were let through,
    /// so anything `admit` hands out (such as a nonce) follows that order.
    #[instrument(skip(self, token, admit), level = "debug")]
    pub async fn wait_cancellable_then<T>(
        &self,
        token: &CancellationToken,
        admit: impl FnOnce() -> T,
    ) -> RestResult<(Duration, T)> {
        let mut state = tokio::select! {
            state = self.state.lock() => state,
            _ = token.cancelled() => return Err(RestError::Cancelled),
        };

        if token.is_cancelled() {
            return Err(RestError::Cancelled);
        }

        let delay = state.delay(Instant::now().into_std());

        if !delay.is_zero() {
            trace!(?delay, "Throttling request");
            tokio::select! {
                _ = tokio::time::sleep(delay) => {}
                _ = token.cancelled() => return Err(RestError::Cancelled),
            }
        }

        state.record(Instant::now().into_std());
        Ok((delay, admit()))
    }

    /// Forget the previous call so the next one goes out immediately
    pub async fn reset(&self) {
        self.state.lock().await.reset();
    }
}

impl Default for RateLimiter {
    /// One call per second
    fn default() -> Self {
        Self::from_interval(CallInterval::default())
    }
}
