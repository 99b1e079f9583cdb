//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Only deterministic, recoverable failures belong here. Nothing in the
/// invoice pipeline is fatal: a rejected step leaves the draft untouched and
/// the user simply re-enters the data.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Step input failed validation; the message is user-facing.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A wizard step number outside `1..=3`.
    #[error("invalid step: {0}")]
    InvalidStep(u8),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// The user-facing part of the error, without the category prefix.
    pub fn message(&self) -> String {
        match self {
            DomainError::Validation(msg) | DomainError::InvalidId(msg) => msg.clone(),
            DomainError::InvalidStep(step) => format!("step {step} does not exist"),
        }
    }
}
