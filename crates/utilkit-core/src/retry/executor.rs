//! Bounded fixed-interval retry loop.

use super::config::RetryConfig;
use super::error::RetryError;
use std::fmt::Display;
use std::future::Future;
use tracing::{debug, info, warn};

/// Runs a fallible operation until it succeeds, the attempt budget is used
/// up, or the cancellation token fires.
///
/// Attempts are strictly sequential. After a failed attempt the executor
/// waits `interval` before the next one, racing the wait against the
/// configured cancellation token. Cancellation is only observed while
/// waiting: an attempt that has started always runs to completion.
///
/// ```text
/// Idle -> Attempting -> Succeeded
///              |
///              +-> Waiting -> Attempting -> ...
///              |      |
///              |      +-> Cancelled
///              +-> Exhausted (after max_attempts failures)
/// ```
///
/// No wait follows the final attempt, so `N` failures cost `N - 1` intervals.
///
/// # Examples
///
/// ```rust
/// use utilkit_core::retry::{RetryConfig, RetryExecutor};
/// use std::sync::atomic::{AtomicU32, Ordering};
/// use std::time::Duration;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let executor = RetryExecutor::new(
///     RetryConfig::builder()
///         .max_attempts(5)
///         .interval(Duration::from_millis(10))
///         .build(),
/// );
///
/// let calls = AtomicU32::new(0);
/// let value = executor
///     .run(|| {
///         let calls = &calls;
///         async move {
///             if calls.fetch_add(1, Ordering::SeqCst) < 2 {
///                 Err(std::io::Error::other("not yet"))
///             } else {
///                 Ok("ready")
///             }
///         }
///     })
///     .await?;
///
/// assert_eq!(value, "ready");
/// assert_eq!(calls.load(Ordering::SeqCst), 3);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct RetryExecutor {
    config: RetryConfig,
}

impl RetryExecutor {
    /// Create an executor for the given policy.
    pub fn new(config: RetryConfig) -> Self {
        Self { config }
    }

    /// The policy this executor runs with.
    pub fn config(&self) -> &RetryConfig {
        &self.config
    }

    /// Run `operation` under this executor's policy.
    ///
    /// The operation is identified in [`RetryError::Exhausted`] by its type
    /// name. Use [`run_named`](Self::run_named) to supply a readable name
    /// when the operation is a closure.
    ///
    /// # Errors
    ///
    /// - [`RetryError::Cancelled`] if the token fires while waiting
    /// - [`RetryError::Exhausted`] once `max_attempts` attempts have failed
    pub async fn run<F, Fut, T, E>(&self, operation: F) -> Result<T, RetryError<E>>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
    {
        self.run_named(std::any::type_name::<F>(), operation).await
    }

    /// Run `operation`, reporting it as `name` on exhaustion and in logs.
    ///
    /// # Errors
    ///
    /// Same as [`run`](Self::run).
    pub async fn run_named<F, Fut, T, E>(
        &self,
        name: impl Into<String>,
        mut operation: F,
    ) -> Result<T, RetryError<E>>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
    {
        let operation_name = name.into();
        let max_attempts = self.config.max_attempts();

        let mut attempts = 0;
        let mut last_error = None;

        while attempts < max_attempts {
            let err = match operation().await {
                Ok(value) => return Ok(value),
                Err(err) => err,
            };
            attempts += 1;

            debug!(
                operation = %operation_name,
                attempt = attempts,
                max_attempts,
                error = %err,
                "attempt failed"
            );

            if attempts < max_attempts && self.wait_cancelled().await {
                info!(
                    operation = %operation_name,
                    attempts,
                    "retry cancelled while waiting"
                );
                return Err(RetryError::Cancelled);
            }

            last_error = Some(err);
        }

        warn!(
            operation = %operation_name,
            attempts,
            "giving up after exhausting attempts"
        );

        Err(RetryError::Exhausted {
            operation: operation_name,
            attempts,
            last_error,
        })
    }

    /// Sleep for one interval; `true` if the token fired first.
    async fn wait_cancelled(&self) -> bool {
        let token = self.config.cancellation();

        tokio::select! {
            biased;
            () = token.cancelled() => true,
            () = tokio::time::sleep(self.config.interval()) => false,
        }
    }
}

/// Run `operation` with the default policy (5 attempts, 3s apart).
///
/// # Errors
///
/// See [`RetryExecutor::run`].
pub async fn retry<F, Fut, T, E>(operation: F) -> Result<T, RetryError<E>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    RetryExecutor::default().run(operation).await
}

/// Run `operation` under `config`.
///
/// # Errors
///
/// See [`RetryExecutor::run`].
pub async fn retry_with<F, Fut, T, E>(
    config: RetryConfig,
    operation: F,
) -> Result<T, RetryError<E>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    RetryExecutor::new(config).run(operation).await
}
