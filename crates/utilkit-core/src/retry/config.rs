//! Retry configuration.

use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Number of attempts made when none is configured.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Wait between two attempts when none is configured.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(3);

/// Policy for a single retry run.
///
/// A config is immutable once built. Use [`RetryConfig::builder`] to override
/// any of the defaults; unset fields keep them.
///
/// Defaults:
/// - `max_attempts`: 5
/// - `interval`: 3s
/// - `cancellation`: a fresh token nobody else holds, so it never fires
///
/// # Examples
///
/// ```rust
/// use utilkit_core::retry::RetryConfig;
/// use std::time::Duration;
///
/// let config = RetryConfig::default();
/// assert_eq!(config.max_attempts(), 5);
/// assert_eq!(config.interval(), Duration::from_secs(3));
/// ```
#[derive(Debug, Clone)]
pub struct RetryConfig {
    max_attempts: u32,
    interval: Duration,
    cancellation: CancellationToken,
}

impl RetryConfig {
    /// Create a new builder for configuring a retry run.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use utilkit_core::retry::RetryConfig;
    /// use std::time::Duration;
    ///
    /// let config = RetryConfig::builder()
    ///     .max_attempts(10)
    ///     .interval(Duration::from_millis(250))
    ///     .build();
    /// ```
    pub fn builder() -> RetryConfigBuilder {
        RetryConfigBuilder::default()
    }

    /// Total number of times the operation may be called.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Fixed wait between a failed attempt and the next one.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Token observed while waiting between attempts.
    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancellation
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        RetryConfigBuilder::default().build()
    }
}

/// Builder for configuring [`RetryConfig`].
///
/// # Examples
///
/// ```rust
/// use utilkit_core::retry::RetryConfig;
/// use tokio_util::sync::CancellationToken;
/// use std::time::Duration;
///
/// let shutdown = CancellationToken::new();
/// let config = RetryConfig::builder()
///     .max_attempts(3)
///     .interval(Duration::from_secs(1))
///     .cancellation(shutdown.child_token())
///     .build();
/// ```
#[derive(Debug, Default)]
pub struct RetryConfigBuilder {
    max_attempts: Option<u32>,
    interval: Option<Duration>,
    cancellation: Option<CancellationToken>,
}

impl RetryConfigBuilder {
    /// Set the total number of attempts.
    ///
    /// Zero is accepted: the operation is then never called and the run
    /// reports exhaustion after zero attempts.
    ///
    /// Default: 5
    pub fn max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    /// Set the wait between attempts.
    ///
    /// Default: 3s
    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = Some(interval);
        self
    }

    /// Set the token that aborts the run while it waits between attempts.
    ///
    /// Default: a token that never fires
    pub fn cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Build the `RetryConfig` instance.
    ///
    /// Uses default values for any unset parameters.
    pub fn build(self) -> RetryConfig {
        RetryConfig {
            max_attempts: self.max_attempts.unwrap_or(DEFAULT_MAX_ATTEMPTS),
            interval: self.interval.unwrap_or(DEFAULT_INTERVAL),
            cancellation: self.cancellation.unwrap_or_default(),
        }
    }
}
