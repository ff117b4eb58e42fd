use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::{
    SectionVisibility, SectionVisibilityFlags,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SectionVisibilityError {
    #[error("profile not found")]
    ProfileNotFound,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

/// Companion-record creation: idempotent get-or-create with every flag on.
#[async_trait]
pub trait EnsureSectionVisibilityUseCase: Send + Sync {
    async fn execute(&self, profile_id: i32) -> Result<SectionVisibility, SectionVisibilityError>;
}

#[async_trait]
pub trait UpdateSectionVisibilityUseCase: Send + Sync {
    async fn execute(
        &self,
        profile_id: i32,
        flags: SectionVisibilityFlags,
    ) -> Result<SectionVisibility, SectionVisibilityError>;
}
