use chrono::NaiveDate;
use std::fmt;

use crate::multimedia::application::domain::entities::{AssetKind, UploadedFile};
use crate::shared::validation::{
    validate_date_in_range, validate_email, validate_file_kind, validate_file_size,
    validate_max_len, validate_required, RuleViolation, ValidationError, MAX_UPLOAD_BYTES,
};

/// Every record type editable from the admin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdminEntity {
    Profile,
    WorkExperience,
    Recognition,
    CompletedCourse,
    AcademicProduct,
    WorkProduct,
    GarageSaleItem,
}

impl AdminEntity {
    pub const ALL: [AdminEntity; 7] = [
        AdminEntity::Profile,
        AdminEntity::WorkExperience,
        AdminEntity::Recognition,
        AdminEntity::CompletedCourse,
        AdminEntity::AcademicProduct,
        AdminEntity::WorkProduct,
        AdminEntity::GarageSaleItem,
    ];

    /// Suffix used by `UPLOAD_FAILURE_POLICY_<ENTITY>`.
    pub fn env_key(&self) -> &'static str {
        match self {
            AdminEntity::Profile => "PROFILE",
            AdminEntity::WorkExperience => "WORK_EXPERIENCE",
            AdminEntity::Recognition => "RECOGNITION",
            AdminEntity::CompletedCourse => "COMPLETED_COURSE",
            AdminEntity::AcademicProduct => "ACADEMIC_PRODUCT",
            AdminEntity::WorkProduct => "WORK_PRODUCT",
            AdminEntity::GarageSaleItem => "GARAGE_SALE_ITEM",
        }
    }
}

impl fmt::Display for AdminEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AdminEntity::Profile => "profile",
            AdminEntity::WorkExperience => "work_experience",
            AdminEntity::Recognition => "recognition",
            AdminEntity::CompletedCourse => "completed_course",
            AdminEntity::AcademicProduct => "academic_product",
            AdminEntity::WorkProduct => "work_product",
            AdminEntity::GarageSaleItem => "garage_sale_item",
        };
        write!(f, "{s}")
    }
}

/// A file attached in this submission, detached from its form for upload.
#[derive(Debug)]
pub struct PendingUpload {
    pub field: &'static str,
    pub kind: AssetKind,
    pub file: UploadedFile,
}

/// Input/edit shape of an admin record.
///
/// The persisted shape (`Data`) is only produced through `into_data`, after the
/// upload side effect has run and its URL (if any) is known.
pub trait AdminForm: Send {
    type Data: Send;

    const ENTITY: AdminEntity;

    /// Full structural validation, including file kind checks on attachments.
    fn validate(&self) -> Result<(), ValidationError>;

    /// Removes the attachment, if one was sent.
    fn take_upload(&mut self) -> Option<PendingUpload> {
        None
    }

    /// `uploaded_url` replaces the submitted URL field when present.
    /// Only called after `validate` succeeded.
    fn into_data(self, uploaded_url: Option<String>) -> Result<Self::Data, ValidationError>;
}

/// Unwraps a field that `validate` already required.
pub fn required<T>(value: Option<T>, field: &str) -> Result<T, ValidationError> {
    value.ok_or_else(|| ValidationError::single(field, RuleViolation::Required))
}

pub fn check_text(errors: &mut ValidationError, field: &str, value: &str, max: usize) {
    if let Err(v) = validate_required(value) {
        errors.push(field, v);
        return;
    }
    errors.check(field, validate_max_len(value, max));
}

pub fn check_optional_text(errors: &mut ValidationError, field: &str, value: Option<&str>, max: usize) {
    if let Some(value) = value {
        errors.check(field, validate_max_len(value, max));
    }
}

pub fn check_optional_email(
    errors: &mut ValidationError,
    field: &str,
    value: Option<&str>,
    max: usize,
) {
    check_optional_text(errors, field, value, max);
    errors.check(field, validate_email(value));
}

/// Range check on every date; presence only when `required`.
pub fn check_date(
    errors: &mut ValidationError,
    field: &str,
    value: Option<NaiveDate>,
    required: bool,
) {
    match value {
        None if required => errors.push(field, RuleViolation::Required),
        date => errors.check(field, validate_date_in_range(date)),
    }
}

/// Blank optional text is stored as NULL.
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Kind and size checks shared by every form that carries an upload slot.
pub fn check_attachment(
    errors: &mut ValidationError,
    field: &str,
    file: Option<&UploadedFile>,
    kind: AssetKind,
) {
    if let Some(file) = file {
        errors.check(
            field,
            validate_file_kind(file.file_name(), file.content_type(), kind.file_rule()),
        );
        errors.check(field, validate_file_size(file.size(), MAX_UPLOAD_BYTES));
    }
}
