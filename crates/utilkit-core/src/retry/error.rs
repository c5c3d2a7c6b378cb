use thiserror::Error;

/// Terminal failure of a retry run.
///
/// Intermediate attempt errors are never surfaced. Only the error of the
/// final attempt survives, as the source of [`RetryError::Exhausted`].
#[derive(Debug, Error)]
pub enum RetryError<E> {
    /// The cancellation token fired while waiting between attempts.
    #[error("retry cancelled")]
    Cancelled,

    /// Every permitted attempt failed.
    #[error("operation `{operation}` failed after {attempts} attempts")]
    Exhausted {
        /// Best-effort name of the retried operation
        operation: String,
        /// Number of times the operation was called
        attempts: u32,
        /// Error returned by the final attempt, `None` when no attempt was made
        #[source]
        last_error: Option<E>,
    },
}

impl<E> RetryError<E> {
    /// Whether the run was aborted by its cancellation token.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Whether the run used up its attempt budget.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted { .. })
    }

    /// Number of attempts made before giving up.
    ///
    /// `None` for a cancelled run.
    pub fn attempts(&self) -> Option<u32> {
        match self {
            Self::Cancelled => None,
            Self::Exhausted { attempts, .. } => Some(*attempts),
        }
    }

    /// Name of the operation that was exhausted.
    pub fn operation(&self) -> Option<&str> {
        match self {
            Self::Cancelled => None,
            Self::Exhausted { operation, .. } => Some(operation),
        }
    }

    /// Borrow the error of the final attempt.
    pub fn last_error(&self) -> Option<&E> {
        match self {
            Self::Cancelled => None,
            Self::Exhausted { last_error, .. } => last_error.as_ref(),
        }
    }

    /// Take the error of the final attempt.
    pub fn into_last_error(self) -> Option<E> {
        match self {
            Self::Cancelled => None,
            Self::Exhausted { last_error, .. } => last_error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn test_exhausted_display_and_source() {
        let err: RetryError<io::Error> = RetryError::Exhausted {
            operation: "fetch".to_string(),
            attempts: 3,
            last_error: Some(io::Error::other("connection refused")),
        };

        assert_eq!(err.to_string(), "operation `fetch` failed after 3 attempts");
        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "connection refused");
        assert_eq!(err.attempts(), Some(3));
        assert_eq!(err.operation(), Some("fetch"));
        assert!(err.is_exhausted());
    }

    #[test]
    fn test_exhausted_without_attempts_has_no_source() {
        let err: RetryError<io::Error> = RetryError::Exhausted {
            operation: "noop".to_string(),
            attempts: 0,
            last_error: None,
        };

        assert!(err.source().is_none());
        assert!(err.last_error().is_none());
    }

    #[test]
    fn test_cancelled_accessors() {
        let err: RetryError<io::Error> = RetryError::Cancelled;

        assert!(err.is_cancelled());
        assert!(!err.is_exhausted());
        assert_eq!(err.attempts(), None);
        assert_eq!(err.operation(), None);
        assert!(err.into_last_error().is_none());
    }
}
