use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;

use super::{check_profile_id, default_visible};
use crate::modules::admin::application::admin_form::{
    check_attachment, check_date, check_optional_email, check_optional_text, check_text,
    normalize_optional, required, AdminEntity, AdminForm, PendingUpload,
};
use crate::modules::career::application::domain::entities::CompletedCourseData;
use crate::multimedia::application::domain::entities::{
    AssetKind, UploadedFile, UploadedFilePayload,
};
use crate::shared::validation::{validate_date_order, validate_min, RuleViolation, ValidationError};

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct CompletedCourseForm {
    pub profile_id: Option<i32>,
    pub name: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub total_hours: Option<i32>,
    pub description: String,
    pub sponsor: String,
    pub contact_name: Option<String>,
    pub contact_phone: Option<String>,
    pub sponsor_email: Option<String>,
    pub certificate_url: Option<String>,
    #[schema(value_type = Option<UploadedFilePayload>)]
    pub certificate_upload: Option<UploadedFile>,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

impl AdminForm for CompletedCourseForm {
    type Data = CompletedCourseData;

    const ENTITY: AdminEntity = AdminEntity::CompletedCourse;

    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationError::new();

        check_profile_id(&mut errors, self.profile_id);
        check_text(&mut errors, "name", &self.name, 100);
        check_date(&mut errors, "start_date", self.start_date, true);
        check_date(&mut errors, "end_date", self.end_date, true);
        if let Err(v) = validate_date_order(self.start_date, self.end_date) {
            errors.push_form(v);
        }
        match self.total_hours {
            None => errors.push("total_hours", RuleViolation::Required),
            Some(h) => errors.check("total_hours", validate_min(h.into(), 0)),
        }
        check_text(&mut errors, "description", &self.description, 100);
        check_text(&mut errors, "sponsor", &self.sponsor, 100);
        check_optional_text(&mut errors, "contact_name", self.contact_name.as_deref(), 100);
        check_optional_text(&mut errors, "contact_phone", self.contact_phone.as_deref(), 60);
        check_optional_email(&mut errors, "sponsor_email", self.sponsor_email.as_deref(), 60);
        check_optional_text(&mut errors, "certificate_url", self.certificate_url.as_deref(), 200);
        check_attachment(
            &mut errors,
            "certificate_upload",
            self.certificate_upload.as_ref(),
            AssetKind::Certificate,
        );

        errors.into_result()
    }

    fn take_upload(&mut self) -> Option<PendingUpload> {
        self.certificate_upload.take().map(|file| PendingUpload {
            field: "certificate_upload",
            kind: AssetKind::Certificate,
            file,
        })
    }

    fn into_data(self, uploaded_url: Option<String>) -> Result<CompletedCourseData, ValidationError> {
        Ok(CompletedCourseData {
            profile_id: required(self.profile_id, "profile_id")?,
            name: self.name.trim().to_string(),
            start_date: required(self.start_date, "start_date")?,
            end_date: required(self.end_date, "end_date")?,
            total_hours: required(self.total_hours, "total_hours")?,
            description: self.description.trim().to_string(),
            sponsor: self.sponsor.trim().to_string(),
            contact_name: normalize_optional(self.contact_name),
            contact_phone: normalize_optional(self.contact_phone),
            sponsor_email: normalize_optional(self.sponsor_email),
            certificate_url: uploaded_url.or_else(|| normalize_optional(self.certificate_url)),
            visible: self.visible,
        })
    }
}
