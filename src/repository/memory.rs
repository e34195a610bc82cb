//! In-memory submission store backing the reference deployment.

use std::sync::Mutex;

use crate::domain::intake::Submission;
use crate::domain::types::ReferenceId;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{SubmissionReader, SubmissionWriter};

/// Mutex-guarded store; accepted briefs live for the lifetime of the process.
#[derive(Debug, Default)]
pub struct InMemorySubmissionStore {
    submissions: Mutex<Vec<Submission>>,
}

impl InMemorySubmissionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Vec<Submission>>> {
        self.submissions
            .lock()
            .map_err(|err| RepositoryError::Unexpected(format!("store poisoned: {err}")))
    }
}

impl SubmissionWriter for InMemorySubmissionStore {
    fn save_submission(&self, submission: &Submission) -> RepositoryResult<()> {
        let mut submissions = self.lock()?;
        if submissions
            .iter()
            .any(|s| s.record.reference == submission.record.reference)
        {
            return Err(RepositoryError::ConstraintViolation(format!(
                "duplicate reference: {}",
                submission.record.reference
            )));
        }
        submissions.push(submission.clone());
        Ok(())
    }
}

impl SubmissionReader for InMemorySubmissionStore {
    fn get_submission(&self, reference: &ReferenceId) -> RepositoryResult<Option<Submission>> {
        let submissions = self.lock()?;
        Ok(submissions
            .iter()
            .find(|s| &s.record.reference == reference)
            .cloned())
    }

    fn list_submissions(&self) -> RepositoryResult<Vec<Submission>> {
        Ok(self.lock()?.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::intake::{IntakeDraft, SubmissionRecord};

    fn submission() -> Submission {
        Submission {
            record: SubmissionRecord::issue(),
            draft: IntakeDraft::default(),
        }
    }

    #[test]
    fn saved_submissions_are_retrievable_by_reference() {
        let store = InMemorySubmissionStore::new();
        let submission = submission();
        store.save_submission(&submission).unwrap();

        let found = store
            .get_submission(&submission.record.reference)
            .unwrap()
            .expect("submission should be stored");
        assert_eq!(found, submission);
        assert_eq!(store.list_submissions().unwrap().len(), 1);
    }

    #[test]
    fn unknown_references_return_none() {
        let store = InMemorySubmissionStore::new();
        let reference = ReferenceId::generate();
        assert_eq!(store.get_submission(&reference).unwrap(), None);
    }

    #[test]
    fn duplicate_references_are_rejected() {
        let store = InMemorySubmissionStore::new();
        let submission = submission();
        store.save_submission(&submission).unwrap();

        let err = store.save_submission(&submission).unwrap_err();
        assert!(matches!(err, RepositoryError::ConstraintViolation(_)));
    }
}
