//! Services driving the intake workflow.

use std::time::Duration;

use crate::domain::intake::Submission;
use crate::domain::options::{OperationalState, OrganizationType, ServiceOption};
use crate::domain::types::ReferenceId;
use crate::dto::intake::{OptionCatalogs, SubmissionResponse};
use crate::engine::{IntakeEngine, SubmitError};
use crate::forms::intake::IntakeFormPayload;
use crate::repository::{SubmissionReader, SubmissionWriter};
use crate::services::{ServiceError, ServiceResult};

/// Validates and persists an intake payload, returning the confirmation view.
pub async fn submit_intake<R>(
    payload: IntakeFormPayload,
    repo: &R,
    persistence_delay: Duration,
) -> ServiceResult<SubmissionResponse>
where
    R: SubmissionWriter + ?Sized,
{
    let mut engine = IntakeEngine::with_persistence_delay(persistence_delay);
    payload.apply(&mut engine)?;

    let record = engine.submit(repo).await.map_err(|err| {
        if let SubmitError::Repository(repo_err) = &err {
            log::error!("Failed to persist intake submission: {repo_err}");
        }
        ServiceError::from(err)
    })?;

    Ok(SubmissionResponse::new(&record, engine.draft()))
}

/// Looks up a stored submission by its reference id.
pub fn get_submission<R>(reference: &ReferenceId, repo: &R) -> ServiceResult<Submission>
where
    R: SubmissionReader + ?Sized,
{
    repo.get_submission(reference)
        .map_err(|err| {
            log::error!("Failed to load submission {reference}: {err}");
            ServiceError::from(err)
        })?
        .ok_or(ServiceError::NotFound)
}

/// The closed option catalogs offered by the form.
pub fn option_catalogs() -> OptionCatalogs {
    OptionCatalogs {
        organization_types: OrganizationType::ALL.to_vec(),
        services: ServiceOption::ALL.to_vec(),
        states: OperationalState::ALL.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Field;
    use crate::repository::memory::InMemorySubmissionStore;

    pub(super) fn valid_payload() -> IntakeFormPayload {
        IntakeFormPayload {
            company_name: "Acme Pvt Ltd".to_string(),
            org_type: "PSU / Government".to_string(),
            contact_name: "J Rao".to_string(),
            email: "j@acme.in".to_string(),
            mobile: "9999999999".to_string(),
            services: vec!["Gantry Crane Calibration".to_string()],
            states: vec!["Karnataka".to_string()],
            consent: true,
            ..IntakeFormPayload::default()
        }
    }

    #[tokio::test]
    async fn valid_payload_is_accepted_and_stored() {
        let store = InMemorySubmissionStore::new();
        let response = submit_intake(valid_payload(), &store, Duration::ZERO)
            .await
            .expect("submission should succeed");

        assert!(response.reference_id.as_str().starts_with("PL-"));
        assert_eq!(response.company_name, "Acme Pvt Ltd");
        assert_eq!(response.services, vec![ServiceOption::GantryCraneCalibration]);

        let stored = get_submission(&response.reference_id, &store).expect("stored submission");
        assert_eq!(stored.record.reference, response.reference_id);
        assert_eq!(stored.draft.contact_name, "J Rao");
    }

    #[tokio::test]
    async fn invalid_payload_returns_the_error_map() {
        let store = InMemorySubmissionStore::new();
        let payload = IntakeFormPayload {
            company_name: "Acme Pvt Ltd".to_string(),
            ..IntakeFormPayload::default()
        };

        let err = submit_intake(payload, &store, Duration::ZERO)
            .await
            .unwrap_err();
        match err {
            ServiceError::Validation(errors) => {
                assert_eq!(errors.len(), 7);
                assert_eq!(errors.get(Field::CompanyName), None);
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
        assert!(store.list_submissions().unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_labels_fail_as_form_errors() {
        let store = InMemorySubmissionStore::new();
        let mut payload = valid_payload();
        payload.states = vec!["Atlantis".to_string()];

        let err = submit_intake(payload, &store, Duration::ZERO)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Form(_)));
    }

    #[tokio::test]
    async fn unknown_references_map_to_not_found() {
        let store = InMemorySubmissionStore::new();
        let reference = ReferenceId::generate();
        assert!(matches!(
            get_submission(&reference, &store),
            Err(ServiceError::NotFound)
        ));
    }

    #[test]
    fn catalogs_expose_every_option() {
        let catalogs = option_catalogs();
        assert_eq!(catalogs.organization_types.len(), 8);
        assert_eq!(catalogs.services.len(), 11);
        assert_eq!(catalogs.states.len(), 31);
    }
}
