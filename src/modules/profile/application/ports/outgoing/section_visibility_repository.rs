use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::{
    SectionVisibility, SectionVisibilityFlags,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SectionVisibilityRepositoryError {
    #[error("profile not found")]
    ProfileNotFound,

    #[error("database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SectionVisibilityRepository: Send + Sync {
    /// Returns the existing row or creates one with every flag on.
    /// Calling it again for the same profile never creates a second row.
    async fn get_or_create(
        &self,
        profile_id: i32,
    ) -> Result<SectionVisibility, SectionVisibilityRepositoryError>;

    async fn find_by_profile(
        &self,
        profile_id: i32,
    ) -> Result<Option<SectionVisibility>, SectionVisibilityRepositoryError>;

    /// Overwrites the flags, creating the row first when it is missing.
    async fn update(
        &self,
        profile_id: i32,
        flags: SectionVisibilityFlags,
    ) -> Result<SectionVisibility, SectionVisibilityRepositoryError>;
}
