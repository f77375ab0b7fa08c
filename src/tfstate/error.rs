use thiserror::Error;

/// Errors from parsing a state document or resolving an address against it.
///
/// Format problems are not recoverable; a missing address is, typically by
/// listing the known addresses instead.
#[derive(Debug, Error)]
pub enum StateError {
    /// The input is not valid JSON or not a recognizable tfstate v4 document.
    #[error("invalid state document: {0}")]
    Format(String),

    /// The queried address does not exist in the document.
    #[error("address not found: '{0}'")]
    NotFound(String),
}
