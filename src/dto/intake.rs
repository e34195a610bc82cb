use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::intake::{IntakeDraft, SubmissionRecord};
use crate::domain::options::{OperationalState, OrganizationType, ServiceOption};
use crate::domain::types::ReferenceId;
use crate::engine::ValidationErrors;

/// The closed option catalogs rendered by the display layer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionCatalogs {
    pub organization_types: Vec<OrganizationType>,
    pub services: Vec<ServiceOption>,
    pub states: Vec<OperationalState>,
}

/// Confirmation view returned after a successful submission; carries the
/// fields the confirmation card displays.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    pub reference_id: ReferenceId,
    pub submitted_at: NaiveDateTime,
    pub company_name: String,
    pub contact_name: String,
    pub services: Vec<ServiceOption>,
}

impl SubmissionResponse {
    pub fn new(record: &SubmissionRecord, draft: &IntakeDraft) -> Self {
        Self {
            reference_id: record.reference.clone(),
            submitted_at: record.submitted_at,
            company_name: draft.company_name.clone(),
            contact_name: draft.contact_name.clone(),
            services: draft.services.clone(),
        }
    }
}

/// Error body for a rejected submission attempt.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationErrorResponse {
    pub errors: ValidationErrors,
}
