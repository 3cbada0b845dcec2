//! Error types for Confquery Core

use thiserror::Error;

/// Core error type
///
/// All condition validation happens at construction time; evaluating a
/// constructed tree never fails.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Invalid operator: {0}")]
    InvalidOperator(String),

    #[error("Malformed field path: {0:?}")]
    MalformedField(String),

    #[error("Invalid condition value: {0}")]
    InvalidValue(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
