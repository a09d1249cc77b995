use std::future::Future;
use std::time::Duration;

use client_logging::client_warn;

use crate::transport::{TransportEvent, TransportSink};
use crate::types::ApiError;

/// Bounded sequential retry with exponential backoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(10),
        }
    }
}

impl RetryPolicy {
    /// Single attempt, no backoff. For calls that must not be replayed.
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            ..Self::default()
        }
    }

    /// Delay before the retry that follows failed attempt `attempt`
    /// (1-based): `min(base * 2^attempt, max)`.
    pub fn delay_after(&self, attempt: u32) -> Duration {
        self.base_delay
            .saturating_mul(2u32.saturating_pow(attempt))
            .min(self.max_delay)
    }
}

/// Runs `operation` until it succeeds or the policy is exhausted.
///
/// Attempts are strictly sequential. On exhaustion the error of the last
/// attempt is surfaced; earlier errors are only reported to the sink.
pub async fn with_retry<T, F, Fut>(
    policy: RetryPolicy,
    sink: &dyn TransportSink,
    mut operation: F,
) -> Result<T, ApiError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let mut attempt = 1;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(error) => {
                if attempt >= policy.max_attempts {
                    return Err(error);
                }
                let delay = policy.delay_after(attempt);
                client_warn!(
                    "attempt {attempt}/{} failed: {error}; retrying in {delay:?}",
                    policy.max_attempts
                );
                sink.record(TransportEvent::RetryScheduled {
                    attempt,
                    delay_ms: delay.as_millis() as u64,
                    error: error.to_string(),
                });
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
        }
    }
}
