pub mod profile_repository;
pub mod section_visibility_repository;

pub use profile_repository::{ProfileRepository, ProfileRepositoryError};
pub use section_visibility_repository::{
    SectionVisibilityRepository, SectionVisibilityRepositoryError,
};
