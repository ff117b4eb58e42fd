use serde::Deserialize;
use utoipa::ToSchema;

use super::{check_profile_id, default_visible};
use crate::modules::admin::application::admin_form::{
    check_text, required, AdminEntity, AdminForm,
};
use crate::modules::career::application::domain::entities::AcademicProductData;
use crate::shared::validation::ValidationError;

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct AcademicProductForm {
    pub profile_id: Option<i32>,
    pub resource_name: String,
    pub classifier: String,
    pub description: String,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

impl AdminForm for AcademicProductForm {
    type Data = AcademicProductData;

    const ENTITY: AdminEntity = AdminEntity::AcademicProduct;

    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationError::new();

        check_profile_id(&mut errors, self.profile_id);
        check_text(&mut errors, "resource_name", &self.resource_name, 100);
        check_text(&mut errors, "classifier", &self.classifier, 100);
        check_text(&mut errors, "description", &self.description, 100);

        errors.into_result()
    }

    fn into_data(self, _uploaded_url: Option<String>) -> Result<AcademicProductData, ValidationError> {
        Ok(AcademicProductData {
            profile_id: required(self.profile_id, "profile_id")?,
            resource_name: self.resource_name.trim().to_string(),
            classifier: self.classifier.trim().to_string(),
            description: self.description.trim().to_string(),
            visible: self.visible,
        })
    }
}
