//! Error types for signal construction and sampling.

use thiserror::Error;

/// Errors raised by signal constructors and by [`crate::signal::Signal::sample`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignalError {
    /// A caller-supplied argument violates a precondition: an empty interval,
    /// a granularity that does not evenly divide the interval, or a
    /// non-positive duration parameter.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A generator produced a series whose length disagrees with the tick
    /// count. This is a defect in a generator, never a usage error.
    #[error("shape mismatch: expected {expected} values, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },
}

impl SignalError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// True for the user-facing validation class.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

/// Convenience alias for results carrying a [`SignalError`].
pub type Result<T> = std::result::Result<T, SignalError>;
