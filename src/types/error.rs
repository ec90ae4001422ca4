use thiserror::Error;

/// Errors produced when reading a length or resolution literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    #[error("invalid numeric literal '{text}'")]
    InvalidNumber { text: String },

    #[error("unknown unit '{unit}'")]
    UnknownUnit { unit: String },
}
