//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::intake::Submission;
use crate::domain::types::ReferenceId;
use crate::repository::errors::RepositoryResult;
use crate::repository::{SubmissionReader, SubmissionWriter};

mock! {
    pub SubmissionStore {}

    impl SubmissionReader for SubmissionStore {
        fn get_submission(&self, reference: &ReferenceId) -> RepositoryResult<Option<Submission>>;
        fn list_submissions(&self) -> RepositoryResult<Vec<Submission>>;
    }

    impl SubmissionWriter for SubmissionStore {
        fn save_submission(&self, submission: &Submission) -> RepositoryResult<()>;
    }
}
