/// Resilience utilities for service bootstrap
///
/// Provides a bounded retry driver with exponential backoff, used to
/// establish connections to infrastructure (database, message broker)
/// that may not be accepting traffic yet when the process starts.
///
/// # Example
///
/// ```rust,no_run
/// use resilience::{connect_with_retry, RetryConfig};
/// use std::time::Duration;
///
/// #[tokio::main]
/// async fn main() {
///     let config = RetryConfig {
///         max_attempts: 5,
///         base_delay: Duration::from_millis(500),
///     };
///
///     let conn = connect_with_retry("postgres", config, || async {
///         // Your connect call here
///         Ok::<_, String>(())
///     })
///     .await;
/// }
/// ```
pub mod retry;

pub use retry::{connect_with_retry, RetryConfig, RetryError};
