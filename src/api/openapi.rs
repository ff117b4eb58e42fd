use crate::api::schemas::{
    ErrorDetail, ErrorResponse, FieldErrorDetail, SavedRecord, SuccessResponse,
};
use utoipa::OpenApi;

use crate::modules::career::application::domain::entities::{
    AcademicProduct, CompletedCourse, GarageSaleItem, ItemCondition, Recognition,
    RecognitionKind, WorkExperience, WorkProduct,
};
use crate::modules::career::application::forms::{
    AcademicProductForm, CompletedCourseForm, GarageSaleItemForm, RecognitionForm,
    WorkExperienceForm, WorkProductForm,
};
use crate::modules::profile::application::domain::entities::{
    CareerSection, Profile, SectionVisibility, SectionVisibilityFlags, Sex,
};
use crate::modules::profile::application::forms::ProfileForm;
use crate::modules::public_cv::application::domain::PublicCv;
use crate::multimedia::application::domain::entities::UploadedFilePayload;

// Career collections are mounted generically under
// /api/admin/{work-experiences,recognitions,completed-courses,academic-products,
// work-products,garage-sale-items}; only their schemas are listed here.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "CV Admin API",
        version = "1.0.0",
        description = "Admin backend and public read side of the CV site"
    ),
    paths(
        // Profile endpoints
        crate::modules::profile::adapter::incoming::web::routes::create_profile_handler,
        crate::modules::profile::adapter::incoming::web::routes::get_profiles_handler,
        crate::modules::profile::adapter::incoming::web::routes::get_single_profile_handler,
        crate::modules::profile::adapter::incoming::web::routes::update_profile_handler,
        crate::modules::profile::adapter::incoming::web::routes::delete_profile_handler,
        crate::modules::profile::adapter::incoming::web::routes::get_section_visibility_handler,
        crate::modules::profile::adapter::incoming::web::routes::update_section_visibility_handler,

        // Public
        crate::modules::public_cv::adapter::incoming::web::routes::get_public_cv_handler,

        // Operations
        crate::health::health,
        crate::health::readiness,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<SavedRecord<Profile>>,
            SuccessResponse<PublicCv>,
            SavedRecord<WorkExperience>,
            SavedRecord<Recognition>,
            SavedRecord<CompletedCourse>,
            SavedRecord<AcademicProduct>,
            SavedRecord<WorkProduct>,
            SavedRecord<GarageSaleItem>,
            ErrorResponse,
            ErrorDetail,
            FieldErrorDetail,

            // Profile
            ProfileForm,
            Profile,
            Sex,
            SectionVisibility,
            SectionVisibilityFlags,
            CareerSection,
            UploadedFilePayload,

            // Career facts
            WorkExperienceForm,
            WorkExperience,
            RecognitionForm,
            Recognition,
            RecognitionKind,
            CompletedCourseForm,
            CompletedCourse,
            AcademicProductForm,
            AcademicProduct,
            WorkProductForm,
            WorkProduct,
            GarageSaleItemForm,
            GarageSaleItem,
            ItemCondition,

            PublicCv,
        )
    ),
    tags(
        (name = "Profiles", description = "Profile administration"),
        (name = "Public CV", description = "Published CV read side"),
        (name = "Operations", description = "Liveness and readiness probes"),
    )
)]
pub struct ApiDoc;
