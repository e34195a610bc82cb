//! Service layer coordinating the intake workflow.

use thiserror::Error;

use crate::engine::{SubmitError, ValidationErrors};
use crate::forms::FormError;
use crate::repository::errors::RepositoryError;

pub mod intake;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("form error: {0}")]
    Form(#[from] FormError),

    #[error("validation failed")]
    Validation(ValidationErrors),

    #[error("a submission is already in flight")]
    SubmissionInFlight,

    #[error("entity not found")]
    NotFound,

    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<SubmitError> for ServiceError {
    fn from(err: SubmitError) -> Self {
        match err {
            SubmitError::Invalid(errors) => ServiceError::Validation(errors),
            SubmitError::InFlight => ServiceError::SubmissionInFlight,
            SubmitError::Repository(err) => ServiceError::Repository(err),
        }
    }
}
