//! The intake form engine: draft state, validation, and the submit workflow.
//!
//! One engine instance owns one [`IntakeDraft`] for its whole lifecycle. The
//! instance starts in the editing state, accepts field edits and selection
//! changes, and moves to the submitted state through exactly one successful
//! [`IntakeEngine::submit`]. Starting over means discarding the instance and
//! creating a new one; there is no reset transition.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::sync::LazyLock;
use std::time::Duration;

use chrono::{Local, NaiveDate};
use regex::Regex;
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};
use thiserror::Error;

use crate::domain::intake::{IntakeDraft, Submission, SubmissionRecord};
use crate::domain::options::{HsseTraining, OperationalState, OrganizationType, ServiceOption};
use crate::repository::SubmissionWriter;
use crate::repository::errors::RepositoryError;

/// 15-character Indian GSTIN, matched against the uppercased input.
static GST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{2}[A-Z]{5}[0-9]{4}[A-Z]{1}[1-9A-Z]{1}Z[0-9A-Z]{1}$").unwrap()
});

/// Basic `local@domain.tld` shape; anything stricter is the display layer's call.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Simulated persistence latency applied when no other delay is configured.
pub const DEFAULT_PERSISTENCE_DELAY: Duration = Duration::from_secs(2);

/// Keys of the validation error map. Serialized names are the ones the
/// display layer binds its field-level error slots to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    CompanyName,
    OrgType,
    GstNumber,
    ContactName,
    Mobile,
    Email,
    Services,
    States,
    Consent,
}

impl Field {
    /// Wire name of the field in error responses.
    pub const fn name(self) -> &'static str {
        match self {
            Field::CompanyName => "companyName",
            Field::OrgType => "orgType",
            Field::GstNumber => "gstNumber",
            Field::ContactName => "contactName",
            Field::Mobile => "mobile",
            Field::Email => "email",
            Field::Services => "services",
            Field::States => "states",
            Field::Consent => "consent",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Field-keyed validation messages; a field with no violation is absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, &'static str>);

impl ValidationErrors {
    fn insert(&mut self, field: Field, message: &'static str) {
        self.0.insert(field, message);
    }

    fn remove(&mut self, field: Field) {
        self.0.remove(&field);
    }

    /// Message attached to `field`, if it is currently in violation.
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, *message))
    }
}

impl Serialize for ValidationErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (field, message) in &self.0 {
            map.serialize_entry(field.name(), message)?;
        }
        map.end()
    }
}

/// A single scalar edit coming from the display layer.
#[derive(Clone, Debug)]
pub enum FieldEdit {
    CompanyName(String),
    OrgType(Option<OrganizationType>),
    GstNumber(String),
    ContactName(String),
    Designation(String),
    Email(String),
    Mobile(String),
    SiteLocations(String),
    StartDate(Option<NaiveDate>),
    HsseTraining(Option<HsseTraining>),
    Consent(bool),
}

impl FieldEdit {
    /// The error-map key this edit clears, if the field can carry an error.
    const fn field(&self) -> Option<Field> {
        match self {
            FieldEdit::CompanyName(_) => Some(Field::CompanyName),
            FieldEdit::OrgType(_) => Some(Field::OrgType),
            FieldEdit::GstNumber(_) => Some(Field::GstNumber),
            FieldEdit::ContactName(_) => Some(Field::ContactName),
            FieldEdit::Email(_) => Some(Field::Email),
            FieldEdit::Mobile(_) => Some(Field::Mobile),
            FieldEdit::Consent(_) => Some(Field::Consent),
            FieldEdit::Designation(_)
            | FieldEdit::SiteLocations(_)
            | FieldEdit::StartDate(_)
            | FieldEdit::HsseTraining(_) => None,
        }
    }
}

/// Failure modes of [`IntakeEngine::submit`].
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The draft failed validation; persistence was not attempted.
    #[error("validation failed")]
    Invalid(ValidationErrors),
    /// Another submission attempt is still pending on this engine.
    #[error("a submission is already in flight")]
    InFlight,
    /// The persistence collaborator rejected the submission.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Owns the draft of one service requirement and drives it to a
/// [`SubmissionRecord`] or a [`ValidationErrors`] outcome.
pub struct IntakeEngine {
    draft: IntakeDraft,
    errors: ValidationErrors,
    record: Option<SubmissionRecord>,
    in_flight: bool,
    min_start_date: NaiveDate,
    persistence_delay: Duration,
}

impl IntakeEngine {
    /// Creates an empty draft in the editing state.
    pub fn new() -> Self {
        Self::with_persistence_delay(DEFAULT_PERSISTENCE_DELAY)
    }

    /// Creates an empty draft with a custom simulated persistence latency.
    pub fn with_persistence_delay(persistence_delay: Duration) -> Self {
        Self {
            draft: IntakeDraft::default(),
            errors: ValidationErrors::default(),
            record: None,
            in_flight: false,
            min_start_date: Local::now().date_naive(),
            persistence_delay,
        }
    }

    /// Current field values.
    pub fn draft(&self) -> &IntakeDraft {
        &self.draft
    }

    /// Errors from the most recent submit attempt, minus any cleared by edits.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// The confirmation record, once a submission has succeeded.
    pub fn record(&self) -> Option<&SubmissionRecord> {
        self.record.as_ref()
    }

    /// Whether a submission attempt is currently pending.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Earliest selectable project start date, captured when the engine was
    /// created. Deliberately not re-evaluated at submit time: the date floor
    /// is a display concern, and a draft left open across midnight keeps the
    /// floor it started with.
    pub fn min_start_date(&self) -> NaiveDate {
        self.min_start_date
    }

    /// Overwrites one scalar field. If the field currently carries a
    /// validation error, that entry is cleared without re-validating.
    pub fn set_field(&mut self, edit: FieldEdit) {
        if let Some(field) = edit.field() {
            self.errors.remove(field);
        }
        match edit {
            FieldEdit::CompanyName(value) => self.draft.company_name = value,
            FieldEdit::OrgType(value) => self.draft.organization_type = value,
            FieldEdit::GstNumber(value) => self.draft.gst_number = value,
            FieldEdit::ContactName(value) => self.draft.contact_name = value,
            FieldEdit::Designation(value) => self.draft.designation = clean_optional_text(value),
            FieldEdit::Email(value) => self.draft.email = value,
            FieldEdit::Mobile(value) => self.draft.mobile = value,
            FieldEdit::SiteLocations(value) => {
                self.draft.site_locations = clean_optional_text(value);
            }
            FieldEdit::StartDate(value) => self.draft.project_start_date = value,
            FieldEdit::HsseTraining(value) => self.draft.hsse_training = value,
            FieldEdit::Consent(value) => self.draft.consent_given = value,
        }
    }

    /// Adds the service if absent, removes it if present.
    pub fn toggle_service(&mut self, service: ServiceOption) {
        self.errors.remove(Field::Services);
        match self.draft.services.iter().position(|s| *s == service) {
            Some(index) => {
                self.draft.services.remove(index);
            }
            None => self.draft.services.push(service),
        }
    }

    /// Appends the state to the selection; re-adding is a no-op.
    pub fn add_state(&mut self, state: OperationalState) {
        self.errors.remove(Field::States);
        if !self.draft.operational_states.contains(&state) {
            self.draft.operational_states.push(state);
        }
    }

    /// Removes the state if selected; no-op otherwise.
    pub fn remove_state(&mut self, state: OperationalState) {
        self.draft.operational_states.retain(|s| *s != state);
    }

    /// Runs every rule against the current draft and returns the complete
    /// violation map. Pure: does not touch the stored error state.
    pub fn validate(&self) -> ValidationErrors {
        let draft = &self.draft;
        let mut errors = ValidationErrors::default();

        if draft.company_name.trim().is_empty() {
            errors.insert(Field::CompanyName, "Entity name is required");
        }
        if draft.organization_type.is_none() {
            errors.insert(Field::OrgType, "Organization type is required");
        }
        if !draft.gst_number.is_empty() && !GST_RE.is_match(&draft.gst_number.to_uppercase()) {
            errors.insert(Field::GstNumber, "Invalid GST format");
        }
        if draft.contact_name.trim().is_empty() {
            errors.insert(Field::ContactName, "Full name is required");
        }
        if draft.mobile.trim().is_empty() {
            errors.insert(Field::Mobile, "Mobile number is required");
        }
        if draft.email.trim().is_empty() || !EMAIL_RE.is_match(&draft.email) {
            errors.insert(Field::Email, "Valid work email required");
        }
        if draft.services.is_empty() {
            errors.insert(Field::Services, "Select at least one service");
        }
        if draft.operational_states.is_empty() {
            errors.insert(Field::States, "Select at least one operational state");
        }
        if !draft.consent_given {
            errors.insert(Field::Consent, "Mandatory confirmation required");
        }

        errors
    }

    /// Validates the draft and, if clean, persists it through `repo` after
    /// the simulated latency window. Validation failures short-circuit
    /// before the repository is touched. At most one attempt may be in
    /// flight per engine instance.
    pub async fn submit<R>(&mut self, repo: &R) -> Result<SubmissionRecord, SubmitError>
    where
        R: SubmissionWriter + ?Sized,
    {
        if self.in_flight {
            return Err(SubmitError::InFlight);
        }

        let errors = self.validate();
        if !errors.is_empty() {
            self.errors = errors.clone();
            return Err(SubmitError::Invalid(errors));
        }
        self.errors = ValidationErrors::default();

        self.in_flight = true;
        tokio::time::sleep(self.persistence_delay).await;

        let record = SubmissionRecord::issue();
        let result = repo.save_submission(&Submission {
            record: record.clone(),
            draft: self.draft.clone(),
        });
        self.in_flight = false;
        result?;

        self.record = Some(record.clone());
        Ok(record)
    }
}

impl Default for IntakeEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Sanitizes free text with ammonia and collapses blank input to `None`.
fn clean_optional_text(value: String) -> Option<String> {
    let cleaned = ammonia::clean(&value);
    let trimmed = cleaned.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
