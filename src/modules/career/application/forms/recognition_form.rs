use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;

use super::{check_profile_id, default_visible};
use crate::modules::admin::application::admin_form::{
    check_attachment, check_date, check_optional_text, check_text, normalize_optional, required,
    AdminEntity, AdminForm, PendingUpload,
};
use crate::modules::career::application::domain::entities::{RecognitionData, RecognitionKind};
use crate::multimedia::application::domain::entities::{
    AssetKind, UploadedFile, UploadedFilePayload,
};
use crate::shared::validation::{RuleViolation, ValidationError};

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct RecognitionForm {
    pub profile_id: Option<i32>,
    pub kind: Option<RecognitionKind>,
    pub awarded_on: Option<NaiveDate>,
    pub description: String,
    pub sponsor: String,
    pub contact_name: Option<String>,
    pub contact_phone: Option<String>,
    pub certificate_url: Option<String>,
    /// PDF certificate, uploaded before the record is stored.
    #[schema(value_type = Option<UploadedFilePayload>)]
    pub certificate_upload: Option<UploadedFile>,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

impl AdminForm for RecognitionForm {
    type Data = RecognitionData;

    const ENTITY: AdminEntity = AdminEntity::Recognition;

    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationError::new();

        check_profile_id(&mut errors, self.profile_id);
        if self.kind.is_none() {
            errors.push("kind", RuleViolation::Required);
        }
        check_date(&mut errors, "awarded_on", self.awarded_on, true);
        check_text(&mut errors, "description", &self.description, 100);
        check_text(&mut errors, "sponsor", &self.sponsor, 100);
        check_optional_text(&mut errors, "contact_name", self.contact_name.as_deref(), 100);
        check_optional_text(&mut errors, "contact_phone", self.contact_phone.as_deref(), 60);
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

    fn into_data(self, uploaded_url: Option<String>) -> Result<RecognitionData, ValidationError> {
        Ok(RecognitionData {
            profile_id: required(self.profile_id, "profile_id")?,
            kind: required(self.kind, "kind")?,
            awarded_on: required(self.awarded_on, "awarded_on")?,
            description: self.description.trim().to_string(),
            sponsor: self.sponsor.trim().to_string(),
            contact_name: normalize_optional(self.contact_name),
            contact_phone: normalize_optional(self.contact_phone),
            certificate_url: uploaded_url.or_else(|| normalize_optional(self.certificate_url)),
            visible: self.visible,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::fixtures::valid_recognition_form as valid_form;

    #[test]
    fn valid_form_passes() {
        assert!(valid_form().validate().is_ok());
    }

    #[test]
    fn word_document_is_rejected() {
        let mut form = valid_form();
        form.certificate_upload = Some(UploadedFile::new("cert.docx", None, vec![1]));

        let err = form.validate().unwrap_err();
        assert!(err.has_violation("certificate_upload", "INVALID_FILE_TYPE"));
        assert_eq!(
            err.errors()[0].message(),
            "El archivo debe tener extensión .pdf"
        );
    }

    #[test]
    fn pdf_with_wrong_content_type_is_rejected() {
        let mut form = valid_form();
        form.certificate_upload = Some(UploadedFile::new(
            "cert.pdf",
            Some("image/png".into()),
            vec![1],
        ));

        let err = form.validate().unwrap_err();
        assert!(err.has_violation("certificate_upload", "INVALID_FILE_TYPE"));
    }

    #[test]
    fn award_date_outside_range() {
        let mut form = valid_form();
        form.awarded_on = NaiveDate::from_ymd_opt(1975, 3, 3);

        assert!(form
            .validate()
            .unwrap_err()
            .has_violation("awarded_on", "OUT_OF_RANGE"));
    }

    #[test]
    fn uploaded_url_replaces_certificate_url() {
        let mut form = valid_form();
        form.certificate_url = Some("https://old.pdf".into());

        let data = form.into_data(Some("https://new.pdf".into())).unwrap();
        assert_eq!(data.certificate_url.as_deref(), Some("https://new.pdf"));
    }
}
