//! Bounded fixed-delay retry.
//!
//! Exists for exactly one race: right after the OAuth redirect the backend
//! session may not be queryable for a moment, so the callback page probes a
//! few times before giving up. No backoff, no jitter.

use std::future::Future;

/// A fixed-count, fixed-delay retry schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first one. Zero is treated as one.
    pub max_attempts: u32,
    /// Pause between attempts, in milliseconds.
    pub delay_ms: u32,
}

impl RetryPolicy {
    /// Schedule used for the OAuth session probe.
    pub const SESSION_PROBE: RetryPolicy = RetryPolicy { max_attempts: 3, delay_ms: 800 };

    /// Run `op` until it succeeds or the attempt budget is spent, pausing
    /// [`Self::delay_ms`] between attempts. Returns the first success or
    /// the last error.
    pub async fn run<T, E, F, Fut>(&self, mut op: F) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let attempts = self.max_attempts.max(1);
        let mut last_err = None;
        for attempt in 0..attempts {
            if attempt > 0 {
                sleep_ms(self.delay_ms).await;
            }
            match op().await {
                Ok(value) => return Ok(value),
                Err(err) => last_err = Some(err),
            }
        }
        // attempts >= 1, so at least one op() ran and set last_err.
        Err(last_err.expect("at least one attempt"))
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep_ms(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

// Host builds (tests) skip the pause; the schedule logic is what matters.
#[cfg(not(target_arch = "wasm32"))]
async fn sleep_ms(_ms: u32) {}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use futures::executor::block_on;

    use super::*;

    #[test]
    fn first_success_short_circuits() {
        let calls = Cell::new(0u32);
        let result: Result<u32, String> = block_on(RetryPolicy::SESSION_PROBE.run(|| {
            calls.set(calls.get() + 1);
            async { Ok(7) }
        }));
        assert_eq!(result, Ok(7));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn retries_until_budget_then_returns_last_error() {
        let calls = Cell::new(0u32);
        let policy = RetryPolicy { max_attempts: 3, delay_ms: 0 };
        let result: Result<(), String> = block_on(policy.run(|| {
            calls.set(calls.get() + 1);
            let attempt = calls.get();
            async move { Err(format!("attempt {attempt}")) }
        }));
        assert_eq!(result, Err("attempt 3".to_string()));
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn success_after_failures_stops_retrying() {
        let calls = Cell::new(0u32);
        let policy = RetryPolicy { max_attempts: 5, delay_ms: 0 };
        let result: Result<u32, String> = block_on(policy.run(|| {
            calls.set(calls.get() + 1);
            let attempt = calls.get();
            async move {
                if attempt < 3 {
                    Err("not yet".to_string())
                } else {
                    Ok(attempt)
                }
            }
        }));
        assert_eq!(result, Ok(3));
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn zero_attempts_still_runs_once() {
        let calls = Cell::new(0u32);
        let policy = RetryPolicy { max_attempts: 0, delay_ms: 0 };
        let result: Result<u32, String> = block_on(policy.run(|| {
            calls.set(calls.get() + 1);
            async { Ok(1) }
        }));
        assert_eq!(result, Ok(1));
        assert_eq!(calls.get(), 1);
    }
}
