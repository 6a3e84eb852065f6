use thiserror::Error;

#[derive(Error, Debug)]
pub enum NumberingError {
    #[error("Counter store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Invalid counter key: {0}")]
    InvalidKey(String),

    #[error("Invalid finding source: {0}")]
    InvalidSource(String),

    #[error("Missing parent identifier: {0}")]
    MissingParent(String),
}

pub type NumberingResult<T> = Result<T, NumberingError>;

/// Returned by `parse` and `resolve_chain` when an identifier does not match
/// any known numbering format. Malformed identifiers are an expected input
/// when resolving externally supplied strings, so this is a value, not a
/// panic.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Identifier does not match any known numbering format")]
pub struct NotRecognized;
