use thiserror::Error;

use crate::repository::RepositoryError;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Outcome of a failed service call, one variant per HTTP status family.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The client supplied an invalid payload.
    #[error("{0}")]
    Form(String),
    #[error("resource not found")]
    NotFound,
    #[error(transparent)]
    Repository(RepositoryError),
    /// The blocking thread pool could not run the call.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<RepositoryError> for ServiceError {
    fn from(value: RepositoryError) -> Self {
        match value {
            RepositoryError::NotFound => Self::NotFound,
            RepositoryError::ConstraintViolation(message) => Self::Form(message),
            other => Self::Repository(other),
        }
    }
}
