use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::career::application::domain::entities::{
    AcademicProduct, CompletedCourse, GarageSaleItem, Recognition, WorkExperience, WorkProduct,
};
use crate::modules::profile::application::domain::entities::Profile;

/// What the public site renders for one profile.
///
/// A section is `None` (and omitted from the JSON) when the profile hides it;
/// a shown section only lists records marked visible.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PublicCv {
    pub profile: Profile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_experience: Option<Vec<WorkExperience>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub courses: Option<Vec<CompletedCourse>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recognitions: Option<Vec<Recognition>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub academic_products: Option<Vec<AcademicProduct>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_products: Option<Vec<WorkProduct>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub garage_sale: Option<Vec<GarageSaleItem>>,
}
