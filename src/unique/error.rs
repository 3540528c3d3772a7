//! Error types for unique generation.

use std::time::Duration;

/// Error returned when a wrapped generator could not produce a novel result.
///
/// Both budget variants are final for the call that raised them: the wrapper
/// does not retry past them and no partial result is returned.
///
/// # Examples
///
/// ```rust
/// use unique_callback::{unique, UniqueError, UniqueOptions};
///
/// let mut next = unique(|()| 7, UniqueOptions::new().with_max_retries(2));
///
/// assert_eq!(next.call(()).unwrap(), 7);
/// match next.call(()) {
///     Err(UniqueError::RetryBudgetExceeded { max_retries }) => assert_eq!(max_retries, 2),
///     other => panic!("Expected retry budget failure, got {:?}", other),
/// }
/// ```
#[derive(Debug)]
pub enum UniqueError {
    /// More time than `max_time` has passed since the wrapper was created.
    TimeBudgetExceeded {
        /// The configured time budget.
        max_time: Duration,
        /// Retries already attempted by the failing call.
        retries: u32,
    },
    /// The failing call needed more than `max_retries` retries.
    RetryBudgetExceeded {
        /// The configured retry limit.
        max_retries: u32,
    },
    /// The call arguments or a generated result could not be encoded as a key.
    Key(serde_json::Error),
}

impl UniqueError {
    /// Create a time budget error.
    pub fn time_budget(max_time: Duration, retries: u32) -> Self {
        Self::TimeBudgetExceeded { max_time, retries }
    }

    /// Create a retry budget error.
    pub fn retry_budget(max_retries: u32) -> Self {
        Self::RetryBudgetExceeded { max_retries }
    }

    /// Returns true if the time budget was exhausted.
    pub fn is_time_budget(&self) -> bool {
        matches!(self, Self::TimeBudgetExceeded { .. })
    }

    /// Returns true if the retry budget was exhausted.
    pub fn is_retry_budget(&self) -> bool {
        matches!(self, Self::RetryBudgetExceeded { .. })
    }
}

impl std::fmt::Display for UniqueError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TimeBudgetExceeded { max_time, retries } => write!(
                f,
                "maxTime of {}ms exceeded after {} retries",
                max_time.as_millis(),
                retries
            ),
            Self::RetryBudgetExceeded { max_retries } => {
                write!(f, "maxRetries of {} exceeded", max_retries)
            }
            Self::Key(e) => write!(f, "could not encode key: {}", e),
        }
    }
}

impl std::error::Error for UniqueError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Key(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for UniqueError {
    fn from(e: serde_json::Error) -> Self {
        Self::Key(e)
    }
}

#[cfg(test)]
mod error_tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_time_budget_display() {
        let err = UniqueError::time_budget(Duration::from_millis(50), 4);
        assert_eq!(format!("{}", err), "maxTime of 50ms exceeded after 4 retries");
        assert!(err.is_time_budget());
        assert!(!err.is_retry_budget());
    }

    #[test]
    fn test_retry_budget_display() {
        let err = UniqueError::retry_budget(3);
        assert_eq!(format!("{}", err), "maxRetries of 3 exceeded");
        assert!(err.is_retry_budget());
        assert!(err.source().is_none());
    }

    #[test]
    fn test_key_error_has_source() {
        let json_err = serde_json::from_str::<i32>("not json").unwrap_err();
        let err = UniqueError::from(json_err);
        assert!(format!("{}", err).starts_with("could not encode key"));
        assert!(err.source().is_some());
    }
}
