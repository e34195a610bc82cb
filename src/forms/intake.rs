//! JSON payload accepted by the intake endpoint.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::options::{HsseTraining, OperationalState, OrganizationType, ServiceOption};
use crate::engine::{FieldEdit, IntakeEngine};
use crate::forms::FormError;

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Raw intake submission as sent by the display layer. Field names mirror
/// the form the SPA renders; every field is optional at the wire level and
/// required-ness is the engine's concern.
pub struct IntakeFormPayload {
    pub company_name: String,
    pub org_type: String,
    pub gst_number: String,
    pub contact_name: String,
    pub designation: String,
    pub email: String,
    pub mobile: String,
    pub services: Vec<String>,
    pub locations: String,
    pub states: Vec<String>,
    pub start_date: String,
    pub hsse_required: String,
    pub consent: bool,
}

impl IntakeFormPayload {
    /// Replays the payload onto `engine` the way the display layer would:
    /// scalar edits, then service toggles, then state additions. Unknown
    /// catalog labels and malformed values are rejected before any engine
    /// mutation. Duplicate service labels in the payload are collapsed.
    pub fn apply(self, engine: &mut IntakeEngine) -> Result<(), FormError> {
        let org_type = match self.org_type.as_str() {
            "" => None,
            label => Some(
                label
                    .parse::<OrganizationType>()
                    .map_err(|err| FormError::UnknownOrganizationType(err.label))?,
            ),
        };
        let services = self
            .services
            .iter()
            .map(|label| {
                label
                    .parse::<ServiceOption>()
                    .map_err(|err| FormError::UnknownService(err.label))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let states = self
            .states
            .iter()
            .map(|label| {
                label
                    .parse::<OperationalState>()
                    .map_err(|err| FormError::UnknownState(err.label))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let start_date = match self.start_date.as_str() {
            "" => None,
            raw => Some(
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .map_err(|_| FormError::InvalidStartDate(raw.to_string()))?,
            ),
        };
        let hsse_training = match self.hsse_required.as_str() {
            "" => None,
            label => Some(
                label
                    .parse::<HsseTraining>()
                    .map_err(|err| FormError::InvalidHsseChoice(err.label))?,
            ),
        };

        engine.set_field(FieldEdit::CompanyName(self.company_name));
        engine.set_field(FieldEdit::OrgType(org_type));
        engine.set_field(FieldEdit::GstNumber(self.gst_number));
        engine.set_field(FieldEdit::ContactName(self.contact_name));
        engine.set_field(FieldEdit::Designation(self.designation));
        engine.set_field(FieldEdit::Email(self.email));
        engine.set_field(FieldEdit::Mobile(self.mobile));
        engine.set_field(FieldEdit::SiteLocations(self.locations));
        engine.set_field(FieldEdit::StartDate(start_date));
        engine.set_field(FieldEdit::HsseTraining(hsse_training));
        engine.set_field(FieldEdit::Consent(self.consent));

        for service in services {
            if !engine.draft().services.contains(&service) {
                engine.toggle_service(service);
            }
        }
        for state in states {
            engine.add_state(state);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_fields_land_on_the_draft() {
        let payload = IntakeFormPayload {
            company_name: "Acme Pvt Ltd".to_string(),
            org_type: "PSU / Government".to_string(),
            services: vec![
                "Mechanical Works".to_string(),
                "Electrical Works".to_string(),
                "Mechanical Works".to_string(),
            ],
            states: vec!["Karnataka".to_string(), "Karnataka".to_string()],
            start_date: "2031-01-15".to_string(),
            hsse_required: "Yes".to_string(),
            consent: true,
            ..IntakeFormPayload::default()
        };

        let mut engine = IntakeEngine::new();
        payload.apply(&mut engine).unwrap();

        let draft = engine.draft();
        assert_eq!(draft.company_name, "Acme Pvt Ltd");
        assert_eq!(
            draft.organization_type,
            Some(OrganizationType::PsuGovernment)
        );
        assert_eq!(
            draft.services,
            vec![ServiceOption::MechanicalWorks, ServiceOption::ElectricalWorks]
        );
        assert_eq!(draft.operational_states, vec![OperationalState::Karnataka]);
        assert_eq!(
            draft.project_start_date,
            NaiveDate::from_ymd_opt(2031, 1, 15)
        );
        assert_eq!(draft.hsse_training, Some(HsseTraining::Yes));
        assert!(draft.consent_given);
    }

    #[test]
    fn unknown_labels_are_rejected_before_mutation() {
        let payload = IntakeFormPayload {
            services: vec!["Window Cleaning".to_string()],
            ..IntakeFormPayload::default()
        };
        let mut engine = IntakeEngine::new();
        let err = payload.apply(&mut engine).unwrap_err();
        assert!(matches!(err, FormError::UnknownService(label) if label == "Window Cleaning"));
        assert!(engine.draft().services.is_empty());
    }

    #[test]
    fn malformed_dates_are_rejected() {
        let payload = IntakeFormPayload {
            start_date: "15/01/2031".to_string(),
            ..IntakeFormPayload::default()
        };
        let mut engine = IntakeEngine::new();
        assert!(matches!(
            payload.apply(&mut engine),
            Err(FormError::InvalidStartDate(_))
        ));
    }

    #[test]
    fn empty_optionals_stay_unset() {
        let mut engine = IntakeEngine::new();
        IntakeFormPayload::default().apply(&mut engine).unwrap();

        let draft = engine.draft();
        assert_eq!(draft.organization_type, None);
        assert_eq!(draft.project_start_date, None);
        assert_eq!(draft.hsse_training, None);
        assert_eq!(draft.designation, None);
        assert_eq!(draft.site_locations, None);
    }
}
