mod delete_profile;
mod get_profiles;
mod get_single_profile;
mod save_profile;
mod section_visibility;

pub use delete_profile::{DeleteProfileError, DeleteProfileUseCase};
pub use get_profiles::{GetProfilesError, GetProfilesUseCase};
pub use get_single_profile::{GetSingleProfileError, GetSingleProfileUseCase};
pub use save_profile::SaveProfileUseCase;
pub use section_visibility::{
    EnsureSectionVisibilityUseCase, SectionVisibilityError, UpdateSectionVisibilityUseCase,
};
