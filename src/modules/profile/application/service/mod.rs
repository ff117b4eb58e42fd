mod delete_profile_service;
mod get_profiles_service;
mod get_single_profile_service;
mod save_profile_service;
mod section_visibility_service;

pub use delete_profile_service::DeleteProfileService;
pub use get_profiles_service::GetProfilesService;
pub use get_single_profile_service::GetSingleProfileService;
pub use save_profile_service::SaveProfileService;
pub use section_visibility_service::{
    EnsureSectionVisibilityService, UpdateSectionVisibilityService,
};
