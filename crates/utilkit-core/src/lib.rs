#![deny(unsafe_code)]
#![warn(missing_docs)]

//! Core retry abstraction for the utilkit workspace.
//!
//! This crate provides a single, deliberately small component:
//!
//! - **Bounded retries** via [`RetryExecutor`](retry::RetryExecutor)
//!   - Fixed interval between attempts
//!   - Cooperative cancellation through a [`CancellationToken`](tokio_util::sync::CancellationToken)
//!   - Typed terminal errors ([`RetryError`](retry::RetryError))
//!
//! There is no jitter, no exponential growth and no circuit breaking. A failed
//! attempt is followed by exactly one `interval` (or an early cancellation)
//! before the next one.
//!
//! # Examples
//!
//! Using the prelude for convenient imports:
//!
//! ```rust
//! use utilkit_core::prelude::*;
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
//! let value = executor
//!     .run(|| async { Ok::<_, std::io::Error>(42) })
//!     .await?;
//! assert_eq!(value, 42);
//! # Ok(())
//! # }
//! ```

pub mod retry;

/// Convenient re-exports of commonly used items.
///
/// Import everything with:
///
/// ```rust
/// use utilkit_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::retry::{
        RetryConfig, RetryConfigBuilder, RetryError, RetryExecutor, retry, retry_with,
    };
    pub use tokio_util::sync::CancellationToken;
}
