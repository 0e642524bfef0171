use crate::errors::{GatewayError, GatewayResult};
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;

/// Exponential-backoff retry for single-shot gateway calls.
///
/// Only `is_retryable()` errors are retried; a 429 with a `Retry-After`
/// value overrides the computed delay. Streaming calls never go through
/// this policy.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub initial_delay: Duration,
    pub max_delay: Duration,
    pub multiplier: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay: Duration::from_millis(1000),
            max_delay: Duration::from_secs(60),
            multiplier: 2.0,
        }
    }
}

impl RetryPolicy {
    /// Policy that never retries.
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            ..Default::default()
        }
    }

    fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let base = self.initial_delay.as_millis() as f64 * self.multiplier.powi(attempt as i32);
        Duration::from_millis(base.min(self.max_delay.as_millis() as f64) as u64)
    }

    fn delay_for_error(&self, error: &GatewayError, attempt: u32) -> Duration {
        if let GatewayError::RateLimit(rate_err) = error {
            if let Some(retry_after) = rate_err.retry_after() {
                return Duration::from_secs(retry_after);
            }
        }
        self.delay_for_attempt(attempt)
    }

    pub async fn run<F, Fut, T>(&self, operation: F) -> GatewayResult<T>
    where
        F: Fn() -> Fut + Send + Sync,
        Fut: Future<Output = GatewayResult<T>> + Send,
        T: Send,
    {
        let mut attempt = 0;
        loop {
            match operation().await {
                Ok(result) => return Ok(result),
                Err(error) => {
                    if !error.is_retryable() || attempt >= self.max_retries {
                        return Err(error);
                    }

                    let delay = self.delay_for_error(&error, attempt);
                    tracing::debug!(
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        "retrying gateway request"
                    );
                    sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }
}
