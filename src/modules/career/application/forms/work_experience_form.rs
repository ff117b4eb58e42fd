use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;

use super::{check_profile_id, default_visible};
use crate::modules::admin::application::admin_form::{
    check_date, check_optional_email, check_optional_text, check_text, normalize_optional,
    required, AdminEntity, AdminForm,
};
use crate::modules::career::application::domain::entities::WorkExperienceData;
use crate::shared::validation::{validate_date_order, ValidationError};

/// `certificate_url` is plain text here; work experience has no upload slot.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct WorkExperienceForm {
    pub profile_id: Option<i32>,
    pub position: String,
    pub company_name: String,
    pub company_location: String,
    pub company_email: Option<String>,
    pub company_website: Option<String>,
    pub contact_name: Option<String>,
    pub contact_phone: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub responsibilities: String,
    pub certificate_url: Option<String>,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

impl AdminForm for WorkExperienceForm {
    type Data = WorkExperienceData;

    const ENTITY: AdminEntity = AdminEntity::WorkExperience;

    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationError::new();

        check_profile_id(&mut errors, self.profile_id);
        check_text(&mut errors, "position", &self.position, 100);
        check_text(&mut errors, "company_name", &self.company_name, 50);
        check_text(&mut errors, "company_location", &self.company_location, 50);
        check_optional_email(&mut errors, "company_email", self.company_email.as_deref(), 100);
        check_optional_text(&mut errors, "company_website", self.company_website.as_deref(), 100);
        check_optional_text(&mut errors, "contact_name", self.contact_name.as_deref(), 100);
        check_optional_text(&mut errors, "contact_phone", self.contact_phone.as_deref(), 60);
        check_date(&mut errors, "start_date", self.start_date, true);
        check_date(&mut errors, "end_date", self.end_date, false);
        if let Err(v) = validate_date_order(self.start_date, self.end_date) {
            errors.push_form(v);
        }
        check_text(&mut errors, "responsibilities", &self.responsibilities, 100);
        check_optional_text(&mut errors, "certificate_url", self.certificate_url.as_deref(), 200);

        errors.into_result()
    }

    fn into_data(self, _uploaded_url: Option<String>) -> Result<WorkExperienceData, ValidationError> {
        Ok(WorkExperienceData {
            profile_id: required(self.profile_id, "profile_id")?,
            position: self.position.trim().to_string(),
            company_name: self.company_name.trim().to_string(),
            company_location: self.company_location.trim().to_string(),
            company_email: normalize_optional(self.company_email),
            company_website: normalize_optional(self.company_website),
            contact_name: normalize_optional(self.contact_name),
            contact_phone: normalize_optional(self.contact_phone),
            start_date: required(self.start_date, "start_date")?,
            end_date: self.end_date,
            responsibilities: self.responsibilities.trim().to_string(),
            certificate_url: normalize_optional(self.certificate_url),
            visible: self.visible,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::fixtures::valid_work_experience_form as valid_form;

    #[test]
    fn valid_form_passes() {
        assert!(valid_form().validate().is_ok());
    }

    #[test]
    fn start_after_end_is_a_form_error() {
        let mut form = valid_form();
        form.start_date = NaiveDate::from_ymd_opt(2020, 6, 1);
        form.end_date = NaiveDate::from_ymd_opt(2020, 1, 1);

        let err = form.validate().unwrap_err();
        assert_eq!(err.errors().len(), 1);
        assert!(err.errors()[0].field.is_none());
        assert_eq!(err.errors()[0].violation.code(), "INVALID_DATE_ORDER");
    }

    #[test]
    fn open_ended_job_is_allowed() {
        let mut form = valid_form();
        form.end_date = None;
        assert!(form.validate().is_ok());
    }

    #[test]
    fn bad_email_and_missing_profile() {
        let mut form = valid_form();
        form.company_email = Some("rrhh@".into());
        form.profile_id = None;

        let err = form.validate().unwrap_err();
        assert!(err.has_violation("company_email", "INVALID_EMAIL"));
        assert!(err.has_violation("profile_id", "REQUIRED"));
    }

    #[test]
    fn visible_defaults_to_true_when_omitted() {
        let form: WorkExperienceForm = serde_json::from_str(r#"{"position": "Dev"}"#).unwrap();
        assert!(form.visible);
    }

    #[test]
    fn blank_optionals_become_none() {
        let mut form = valid_form();
        form.company_website = Some("   ".into());

        let data = form.into_data(None).unwrap();
        assert_eq!(data.company_website, None);
    }
}
