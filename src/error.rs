/// Failure reported by a fetcher handed to [`crate::Retrier`].
///
/// Classification is structural: the runner never inspects message text to
/// decide whether an attempt is worth repeating.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum FetchError {
    /// Non-retryable failure. The runner stops immediately regardless of the
    /// remaining budget.
    #[error("fatal: {message}")]
    Fatal { message: String },
    /// Failure worth another attempt on the next tick.
    #[error("transient: {message}")]
    Transient { message: String },
}

impl FetchError {
    /// Builds a [`FetchError::Fatal`].
    pub fn fatal(message: impl Into<String>) -> Self {
        Self::Fatal {
            message: message.into(),
        }
    }

    /// Builds a [`FetchError::Transient`].
    pub fn transient(message: impl Into<String>) -> Self {
        Self::Transient {
            message: message.into(),
        }
    }

    /// True for failures that must not be retried.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal { .. })
    }
}

/// Terminal outcome of a retry run.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum RetryError {
    /// The retry budget was spent without a successful attempt. The message
    /// is the caller-supplied (or default) text from
    /// [`crate::RetryPolicy::error_msg`].
    #[error("{message}")]
    Exhausted { message: String },
    /// An attempt failed with [`FetchError::Fatal`]. The message is the
    /// localized transaction-failure text.
    #[error("{message}")]
    Fatal { message: String },
}
