/// Bounded retry with exponential backoff
use std::future::Future;
use std::time::Duration;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy)]
pub struct RetryConfig {
    /// Total number of attempts, including the first one
    pub max_attempts: u32,
    /// Backoff after the first failed attempt; doubles on every
    /// subsequent failure
    pub base_delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            base_delay: Duration::from_millis(500),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RetryError<E> {
    #[error("{operation}: all {attempts} connection attempts failed")]
    Exhausted {
        operation: &'static str,
        attempts: u32,
        #[source]
        last_error: E,
    },
}

/// Drive a connect operation to completion, retrying on failure.
///
/// The operation is attempted up to `config.max_attempts` times. After
/// the failure of zero-based attempt `i` the driver sleeps for
/// `base_delay * 2^i` before trying again. The backoff is deliberately
/// uncapped and unjittered: with large attempt counts the delay grows
/// without bound, so callers are expected to keep `max_attempts` small.
///
/// Exhausting every attempt is fatal to the bootstrap sequence: the
/// returned `RetryError` carries the last underlying error and the
/// caller is expected to abort the process with it.
pub async fn connect_with_retry<F, Fut, T, E>(
    operation: &'static str,
    config: RetryConfig,
    mut connect: F,
) -> Result<T, RetryError<E>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let max_attempts = config.max_attempts.max(1);
    let mut attempt = 0;

    loop {
        match connect().await {
            Ok(value) => {
                info!(operation, attempt = attempt + 1, "connection established");
                return Ok(value);
            }
            Err(err) => {
                if attempt + 1 >= max_attempts {
                    return Err(RetryError::Exhausted {
                        operation,
                        attempts: max_attempts,
                        last_error: err,
                    });
                }

                // base * 2^attempt; saturates instead of overflowing
                // for pathological attempt counts
                let delay = config
                    .base_delay
                    .saturating_mul(2u32.saturating_pow(attempt));
                warn!(
                    operation,
                    attempt = attempt + 1,
                    remaining = max_attempts - attempt - 1,
                    delay_ms = delay.as_millis() as u64,
                    error = %err,
                    "connection attempt failed, backing off"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
        }
    }
}
