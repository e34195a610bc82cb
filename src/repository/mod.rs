//! Persistence seam for accepted submissions.
//!
//! The reference deployment keeps submissions in memory only; a durable
//! backend slots in behind the same traits without touching the engine.

use crate::domain::intake::Submission;
use crate::domain::types::ReferenceId;
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod memory;
#[cfg(feature = "test-mocks")]
pub mod mock;

pub trait SubmissionReader {
    fn get_submission(&self, reference: &ReferenceId) -> RepositoryResult<Option<Submission>>;
    fn list_submissions(&self) -> RepositoryResult<Vec<Submission>>;
}

pub trait SubmissionWriter {
    fn save_submission(&self, submission: &Submission) -> RepositoryResult<()>;
}
