use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;

use super::{check_profile_id, default_visible};
use crate::modules::admin::application::admin_form::{
    check_attachment, check_date, check_optional_text, check_text, normalize_optional, required,
    AdminEntity, AdminForm, PendingUpload,
};
use crate::modules::career::application::domain::entities::{GarageSaleItemData, ItemCondition};
use crate::multimedia::application::domain::entities::{
    AssetKind, UploadedFile, UploadedFilePayload,
};
use crate::shared::validation::{
    validate_decimal_digits, validate_non_negative, RuleViolation, ValidationError,
};

/// Column precision of `garage_sale_items.value`.
const VALUE_MAX_DIGITS: u32 = 10;
const VALUE_DECIMAL_PLACES: u32 = 2;

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct GarageSaleItemForm {
    pub profile_id: Option<i32>,
    pub product_name: String,
    pub condition: Option<ItemCondition>,
    pub description: String,
    /// Accepts a JSON number or a decimal string.
    #[schema(value_type = Option<String>, example = "25.50")]
    pub value: Option<Decimal>,
    pub published_on: Option<NaiveDate>,
    pub available: bool,
    pub image_url: Option<String>,
    #[schema(value_type = Option<UploadedFilePayload>)]
    pub image_upload: Option<UploadedFile>,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

impl AdminForm for GarageSaleItemForm {
    type Data = GarageSaleItemData;

    const ENTITY: AdminEntity = AdminEntity::GarageSaleItem;

    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationError::new();

        check_profile_id(&mut errors, self.profile_id);
        check_text(&mut errors, "product_name", &self.product_name, 100);
        if self.condition.is_none() {
            errors.push("condition", RuleViolation::Required);
        }
        check_text(&mut errors, "description", &self.description, 100);
        match self.value {
            None => errors.push("value", RuleViolation::Required),
            Some(v) => {
                errors.check("value", validate_non_negative(v));
                errors.check(
                    "value",
                    validate_decimal_digits(v, VALUE_MAX_DIGITS, VALUE_DECIMAL_PLACES),
                );
            }
        }
        check_date(&mut errors, "published_on", self.published_on, true);
        check_optional_text(&mut errors, "image_url", self.image_url.as_deref(), 200);
        check_attachment(
            &mut errors,
            "image_upload",
            self.image_upload.as_ref(),
            AssetKind::ProductImage,
        );

        errors.into_result()
    }

    fn take_upload(&mut self) -> Option<PendingUpload> {
        self.image_upload.take().map(|file| PendingUpload {
            field: "image_upload",
            kind: AssetKind::ProductImage,
            file,
        })
    }

    fn into_data(self, uploaded_url: Option<String>) -> Result<GarageSaleItemData, ValidationError> {
        Ok(GarageSaleItemData {
            profile_id: required(self.profile_id, "profile_id")?,
            product_name: self.product_name.trim().to_string(),
            condition: required(self.condition, "condition")?,
            description: self.description.trim().to_string(),
            value: required(self.value, "value")?,
            published_on: required(self.published_on, "published_on")?,
            available: self.available,
            image_url: uploaded_url.or_else(|| normalize_optional(self.image_url)),
            visible: self.visible,
        })
    }
}
