mod create_profile;
mod delete_profile;
mod get_profiles;
mod get_section_visibility;
mod get_single_profile;
mod update_profile;
mod update_section_visibility;

pub use create_profile::{__path_create_profile_handler, create_profile_handler};
pub use delete_profile::{__path_delete_profile_handler, delete_profile_handler};
pub use get_profiles::{__path_get_profiles_handler, get_profiles_handler};
pub use get_section_visibility::{__path_get_section_visibility_handler, get_section_visibility_handler};
pub use get_single_profile::{__path_get_single_profile_handler, get_single_profile_handler};
pub use update_profile::{__path_update_profile_handler, update_profile_handler};
pub use update_section_visibility::{__path_update_section_visibility_handler, update_section_visibility_handler};

use crate::modules::admin::adapter::incoming::web::NotFoundBody;

pub(crate) const PROFILE_NOT_FOUND: NotFoundBody = NotFoundBody {
    code: "PROFILE_NOT_FOUND",
    message: "Profile not found",
};
