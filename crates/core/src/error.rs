//! Domain error kinds shared by every layer.

/// Classified failure category, used by the HTTP layer for status mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    AlreadyExists,
    NotFound,
    Infrastructure,
}

/// Domain-level error.
///
/// Each variant carries a human-readable message that already includes the
/// operation context (entity label, id or name, wrapped store error).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// The request failed input validation.
    #[error("{0}")]
    Validation(String),

    /// A record with the same unique name already exists.
    #[error("{0}")]
    AlreadyExists(String),

    /// The requested row does not exist, or the lookup itself failed.
    #[error("{0}")]
    NotFound(String),

    /// Transaction, connection or commit failure.
    #[error("{0}")]
    Infrastructure(String),
}

impl CoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::Validation(_) => ErrorKind::Validation,
            CoreError::AlreadyExists(_) => ErrorKind::AlreadyExists,
            CoreError::NotFound(_) => ErrorKind::NotFound,
            CoreError::Infrastructure(_) => ErrorKind::Infrastructure,
        }
    }
}

impl From<validator::ValidationErrors> for CoreError {
    fn from(errors: validator::ValidationErrors) -> Self {
        CoreError::Validation(crate::validation::describe(&errors))
    }
}
