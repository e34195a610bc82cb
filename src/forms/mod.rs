//! Form payloads backing the intake routes.

use thiserror::Error;

pub mod intake;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("unknown organization type: {0}")]
    UnknownOrganizationType(String),

    #[error("unknown service option: {0}")]
    UnknownService(String),

    #[error("unknown operational state: {0}")]
    UnknownState(String),

    #[error("invalid start date: {0}")]
    InvalidStartDate(String),

    #[error("invalid HSSE training choice: {0}")]
    InvalidHsseChoice(String),
}
