//! Error types for simple-ta.
//!
//! Every indicator validates its integer parameters before touching the data,
//! so the only failure a caller can observe is a rejected argument.

use thiserror::Error;

/// The error type for simple-ta operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A window, span, period or output buffer argument was rejected.
    ///
    /// Raised synchronously, before any computation, when a window or period
    /// is not a positive integer or when a caller-provided output buffer is
    /// too short for the input.
    #[error("invalid argument `{name}` = {value}: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter (e.g. `"window"`, `"fast"`).
        name: &'static str,
        /// The value that was provided.
        value: usize,
        /// Which constraint was violated.
        reason: &'static str,
    },
}

impl Error {
    /// Returns the name of the rejected parameter.
    #[must_use]
    pub const fn argument(&self) -> &'static str {
        match self {
            Self::InvalidArgument { name, .. } => name,
        }
    }

    /// Returns the violated constraint.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::InvalidArgument { reason, .. } => reason,
        }
    }
}

/// Convenience type alias for Results using the simple-ta Error type.
pub type Result<T> = std::result::Result<T, Error>;
