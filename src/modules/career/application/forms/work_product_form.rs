use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;

use super::{check_profile_id, default_visible};
use crate::modules::admin::application::admin_form::{
    check_date, check_text, required, AdminEntity, AdminForm,
};
use crate::modules::career::application::domain::entities::WorkProductData;
use crate::shared::validation::ValidationError;

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct WorkProductForm {
    pub profile_id: Option<i32>,
    pub product_name: String,
    pub produced_on: Option<NaiveDate>,
    pub description: String,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

impl AdminForm for WorkProductForm {
    type Data = WorkProductData;

    const ENTITY: AdminEntity = AdminEntity::WorkProduct;

    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationError::new();

        check_profile_id(&mut errors, self.profile_id);
        check_text(&mut errors, "product_name", &self.product_name, 100);
        check_date(&mut errors, "produced_on", self.produced_on, true);
        check_text(&mut errors, "description", &self.description, 100);

        errors.into_result()
    }

    fn into_data(self, _uploaded_url: Option<String>) -> Result<WorkProductData, ValidationError> {
        Ok(WorkProductData {
            profile_id: required(self.profile_id, "profile_id")?,
            product_name: self.product_name.trim().to_string(),
            produced_on: required(self.produced_on, "produced_on")?,
            description: self.description.trim().to_string(),
            visible: self.visible,
        })
    }
}
