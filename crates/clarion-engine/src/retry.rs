//! Bounded exponential backoff around a single adapter call

use clarion_domain::SourceError;
use std::future::Future;
use std::time::Duration;
use tracing::warn;

/// Retry policy for one source invocation.
///
/// Retries only transient failures (throttling, timeouts, network faults,
/// 5xx responses); credential rejections and well-formed empty results are
/// never retried. The delay doubles on each attempt starting from
/// `base_delay`, and the attempt budget is a hard cap, so the worst-case
/// latency of a wrapped call is bounded.
///
/// Exhaustion is returned as a normal `Err` value, not raised: the
/// composer downstream turns it into a degraded verdict rather than
/// aborting the request.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Attempts per call, including the first
    pub max_attempts: u32,
    /// Delay before the second attempt; doubles each retry
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_secs(2),
        }
    }
}

impl RetryPolicy {
    /// Create a policy with explicit bounds.
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts,
            base_delay,
        }
    }

    /// Run `op` under this policy.
    ///
    /// `label` names the source in log output.
    pub async fn run<T, F, Fut>(&self, label: &str, mut op: F) -> Result<T, SourceError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, SourceError>>,
    {
        let mut delay = self.base_delay;
        let mut attempt = 1u32;

        loop {
            match op().await {
                Ok(value) => return Ok(value),
                Err(error) if error.is_transient() && attempt < self.max_attempts => {
                    warn!(
                        source = label,
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        error = %error,
                        "transient source failure, backing off"
                    );
                    tokio::time::sleep(delay).await;
                    delay *= 2;
                    attempt += 1;
                }
                Err(error) => {
                    warn!(source = label, attempt, error = %error, "source unavailable");
                    return Err(error);
                }
            }
        }
    }
}
