use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::modules::admin::application::admin_form::{
    check_attachment, check_date, check_optional_text, check_text, normalize_optional, required,
    AdminEntity, AdminForm, PendingUpload,
};
use crate::modules::profile::application::domain::entities::{ProfileData, Sex};
use crate::multimedia::application::domain::entities::{
    AssetKind, UploadedFile, UploadedFilePayload,
};
use crate::shared::validation::{validate_min, RuleViolation, ValidationError};

/// Admin form for a profile. `photo_upload` is transient: the PNG is uploaded
/// and only the resulting URL is stored.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct ProfileForm {
    pub description: String,
    pub active_flag: Option<i32>,
    pub last_names: String,
    pub first_names: String,
    pub nationality: String,
    pub birthplace: String,
    pub birth_date: Option<NaiveDate>,
    pub national_id: String,
    pub sex: Option<Sex>,
    pub marital_status: String,
    pub driver_license: String,
    pub landline_phone: String,
    pub phone: String,
    pub work_address: String,
    pub home_address: String,
    pub website: String,
    pub photo_url: Option<String>,
    #[schema(value_type = Option<UploadedFilePayload>)]
    pub photo_upload: Option<UploadedFile>,
}

impl AdminForm for ProfileForm {
    type Data = ProfileData;

    const ENTITY: AdminEntity = AdminEntity::Profile;

    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationError::new();

        check_text(&mut errors, "description", &self.description, 50);
        match self.active_flag {
            None => errors.push("active_flag", RuleViolation::Required),
            Some(v) => errors.check("active_flag", validate_min(v.into(), 0)),
        }
        check_text(&mut errors, "last_names", &self.last_names, 60);
        check_text(&mut errors, "first_names", &self.first_names, 60);
        check_text(&mut errors, "nationality", &self.nationality, 20);
        check_text(&mut errors, "birthplace", &self.birthplace, 60);
        check_date(&mut errors, "birth_date", self.birth_date, true);
        check_text(&mut errors, "national_id", &self.national_id, 10);
        if self.sex.is_none() {
            errors.push("sex", RuleViolation::Required);
        }
        check_text(&mut errors, "marital_status", &self.marital_status, 50);
        check_text(&mut errors, "driver_license", &self.driver_license, 6);
        check_text(&mut errors, "landline_phone", &self.landline_phone, 15);
        check_text(&mut errors, "phone", &self.phone, 15);
        check_text(&mut errors, "work_address", &self.work_address, 50);
        check_text(&mut errors, "home_address", &self.home_address, 50);
        check_text(&mut errors, "website", &self.website, 60);
        check_optional_text(&mut errors, "photo_url", self.photo_url.as_deref(), 200);
        check_attachment(
            &mut errors,
            "photo_upload",
            self.photo_upload.as_ref(),
            AssetKind::ProfilePhoto,
        );

        errors.into_result()
    }

    fn take_upload(&mut self) -> Option<PendingUpload> {
        self.photo_upload.take().map(|file| PendingUpload {
            field: "photo_upload",
            kind: AssetKind::ProfilePhoto,
            file,
        })
    }

    fn into_data(self, uploaded_url: Option<String>) -> Result<ProfileData, ValidationError> {
        Ok(ProfileData {
            description: self.description.trim().to_string(),
            active_flag: required(self.active_flag, "active_flag")?,
            last_names: self.last_names.trim().to_string(),
            first_names: self.first_names.trim().to_string(),
            nationality: self.nationality.trim().to_string(),
            birthplace: self.birthplace.trim().to_string(),
            birth_date: required(self.birth_date, "birth_date")?,
            national_id: self.national_id.trim().to_string(),
            sex: required(self.sex, "sex")?,
            marital_status: self.marital_status.trim().to_string(),
            driver_license: self.driver_license.trim().to_string(),
            landline_phone: self.landline_phone.trim().to_string(),
            phone: self.phone.trim().to_string(),
            work_address: self.work_address.trim().to_string(),
            home_address: self.home_address.trim().to_string(),
            website: self.website.trim().to_string(),
            photo_url: uploaded_url.or_else(|| normalize_optional(self.photo_url)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::fixtures::valid_profile_form as valid_form;

    #[test]
    fn valid_form_passes() {
        assert!(valid_form().validate().is_ok());
    }

    #[test]
    fn birth_date_before_range_is_rejected() {
        let mut form = valid_form();
        form.birth_date = NaiveDate::from_ymd_opt(1980, 12, 31);

        let err = form.validate().unwrap_err();
        assert!(err.has_violation("birth_date", "OUT_OF_RANGE"));
        assert_eq!(
            err.errors()[0].message(),
            "La fecha debe estar entre 1981-01-01 y 2026-01-31"
        );
    }

    #[test]
    fn jpg_photo_is_rejected_before_upload() {
        let mut form = valid_form();
        form.photo_upload = Some(UploadedFile::new("photo.jpg", None, vec![1]));

        let err = form.validate().unwrap_err();
        assert!(err.has_violation("photo_upload", "INVALID_FILE_TYPE"));
    }

    #[test]
    fn missing_fields_are_aggregated() {
        let err = ProfileForm::default().validate().unwrap_err();

        for field in ["description", "active_flag", "birth_date", "national_id", "sex"] {
            assert!(err.has_violation(field, "REQUIRED"), "{field}");
        }
    }

    #[test]
    fn negative_active_flag_and_long_id() {
        let mut form = valid_form();
        form.active_flag = Some(-1);
        form.national_id = "12345678901".into();

        let err = form.validate().unwrap_err();
        assert!(err.has_violation("active_flag", "BELOW_MINIMUM"));
        assert!(err.has_violation("national_id", "TOO_LONG"));
    }

    #[test]
    fn into_data_prefers_uploaded_url() {
        let mut form = valid_form();
        form.photo_url = Some("https://old.png".into());

        let data = form
            .clone()
            .into_data(Some("https://new.png".into()))
            .unwrap();
        assert_eq!(data.photo_url.as_deref(), Some("https://new.png"));

        let data = form.into_data(None).unwrap();
        assert_eq!(data.photo_url.as_deref(), Some("https://old.png"));
    }

    #[test]
    fn take_upload_detaches_png() {
        let mut form = valid_form();
        form.photo_upload = Some(UploadedFile::new("me.png", None, vec![1]));

        let pending = form.take_upload().unwrap();
        assert_eq!(pending.field, "photo_upload");
        assert_eq!(pending.kind, AssetKind::ProfilePhoto);
        assert!(form.photo_upload.is_none());
    }
}
