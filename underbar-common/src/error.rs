//! Error types shared by every underbar crate.

use thiserror::Error;

/// Caller-contract violations detected when a decorator, timer or key
/// extractor is constructed.
///
/// Failures raised by caller-supplied functions are never wrapped in this
/// type; they propagate to the caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnderbarError {
    /// A time interval that must be positive was zero.
    #[error("{name} interval must be greater than zero")]
    ZeroInterval { name: &'static str },

    /// A key extractor was given an empty field name.
    #[error("field name must not be empty")]
    EmptyFieldName,

    /// A named method could not be resolved on an element.
    #[error("unknown method '{name}'")]
    UnknownMethod { name: String },

    /// A timer id was not (or is no longer) registered with the scheduler.
    #[error("no timer registered with id {id}")]
    UnknownTimer { id: u64 },
}

pub type Result<T, E = UnderbarError> = std::result::Result<T, E>;
