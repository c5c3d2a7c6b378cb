//! Fixed-interval retries with cancellation.
//!
//! # Key Types
//!
//! - [`RetryConfig`] - Attempt budget, interval and cancellation token
//! - [`RetryExecutor`] - Runs an operation under a [`RetryConfig`]
//! - [`RetryError`] - Terminal failure (`Cancelled` or `Exhausted`)
//!
//! # Examples
//!
//! ```rust
//! use utilkit_core::retry::{RetryConfig, RetryExecutor};
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let executor = RetryExecutor::new(
//!     RetryConfig::builder()
//!         .max_attempts(3)
//!         .interval(Duration::from_millis(100))
//!         .build(),
//! );
//!
//! let result = executor.run(|| async {
//!     // Your operation here
//!     Ok::<_, std::io::Error>(42)
//! }).await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod executor;

pub use config::{DEFAULT_INTERVAL, DEFAULT_MAX_ATTEMPTS, RetryConfig, RetryConfigBuilder};
pub use error::RetryError;
pub use executor::{RetryExecutor, retry, retry_with};
