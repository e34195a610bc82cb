//! The intake draft and the records produced by a successful submission.

use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::options::{HsseTraining, OperationalState, OrganizationType, ServiceOption};
use crate::domain::types::ReferenceId;

/// Mutable draft of a prospective client's service requirement.
///
/// Required/optional semantics are enforced by [`crate::engine::IntakeEngine::validate`],
/// not here; a draft may be in any intermediate state while the client is
/// still editing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakeDraft {
    pub company_name: String,
    pub organization_type: Option<OrganizationType>,
    /// Optional 15-character GSTIN, kept as entered; uppercased for validation.
    pub gst_number: String,
    pub contact_name: String,
    pub designation: Option<String>,
    pub email: String,
    pub mobile: String,
    /// Selected services in toggle order; duplicates impossible by construction.
    pub services: Vec<ServiceOption>,
    pub site_locations: Option<String>,
    /// States where work is planned, in the order they were added.
    pub operational_states: Vec<OperationalState>,
    pub project_start_date: Option<NaiveDate>,
    pub hsse_training: Option<HsseTraining>,
    pub consent_given: bool,
}

/// Immutable result of a successful submission.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    pub reference: ReferenceId,
    pub submitted_at: NaiveDateTime,
}

impl SubmissionRecord {
    /// Issues a fresh record stamped with the local clock.
    pub fn issue() -> Self {
        Self {
            reference: ReferenceId::generate(),
            submitted_at: Local::now().naive_local(),
        }
    }
}

/// A record together with the draft it captured; the unit of persistence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub record: SubmissionRecord,
    pub draft: IntakeDraft,
}
