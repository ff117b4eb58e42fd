mod academic_product_form;
mod completed_course_form;
mod garage_sale_item_form;
mod recognition_form;
mod work_experience_form;
mod work_product_form;

pub use academic_product_form::AcademicProductForm;
pub use completed_course_form::CompletedCourseForm;
pub use garage_sale_item_form::GarageSaleItemForm;
pub use recognition_form::RecognitionForm;
pub use work_experience_form::WorkExperienceForm;
pub use work_product_form::WorkProductForm;

use crate::shared::validation::{validate_min, RuleViolation, ValidationError};

/// Career facts start out published unless the form says otherwise.
pub(crate) fn default_visible() -> bool {
    true
}

pub(crate) fn check_profile_id(errors: &mut ValidationError, profile_id: Option<i32>) {
    match profile_id {
        None => errors.push("profile_id", RuleViolation::Required),
        Some(id) => errors.check("profile_id", validate_min(id.into(), 1)),
    }
}
