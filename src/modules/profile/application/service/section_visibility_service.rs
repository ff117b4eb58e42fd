use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::{
    SectionVisibility, SectionVisibilityFlags,
};
use crate::modules::profile::application::ports::incoming::use_cases::{
    EnsureSectionVisibilityUseCase, SectionVisibilityError, UpdateSectionVisibilityUseCase,
};
use crate::modules::profile::application::ports::outgoing::{
    SectionVisibilityRepository, SectionVisibilityRepositoryError,
};

impl From<SectionVisibilityRepositoryError> for SectionVisibilityError {
    fn from(e: SectionVisibilityRepositoryError) -> Self {
        match e {
            SectionVisibilityRepositoryError::ProfileNotFound => {
                SectionVisibilityError::ProfileNotFound
            }
            SectionVisibilityRepositoryError::DatabaseError(msg) => {
                SectionVisibilityError::RepositoryError(msg)
            }
        }
    }
}

// ============================================================================
// Ensure (get-or-create)
// ============================================================================

pub struct EnsureSectionVisibilityService<R>
where
    R: SectionVisibilityRepository,
{
    repository: R,
}

impl<R> EnsureSectionVisibilityService<R>
where
    R: SectionVisibilityRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> EnsureSectionVisibilityUseCase for EnsureSectionVisibilityService<R>
where
    R: SectionVisibilityRepository + Send + Sync,
{
    async fn execute(&self, profile_id: i32) -> Result<SectionVisibility, SectionVisibilityError> {
        Ok(self.repository.get_or_create(profile_id).await?)
    }
}

// ============================================================================
// Update
// ============================================================================

pub struct UpdateSectionVisibilityService<R>
where
    R: SectionVisibilityRepository,
{
    repository: R,
}

impl<R> UpdateSectionVisibilityService<R>
where
    R: SectionVisibilityRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateSectionVisibilityUseCase for UpdateSectionVisibilityService<R>
where
    R: SectionVisibilityRepository + Send + Sync,
{
    async fn execute(
        &self,
        profile_id: i32,
        flags: SectionVisibilityFlags,
    ) -> Result<SectionVisibility, SectionVisibilityError> {
        Ok(self.repository.update(profile_id, flags).await?)
    }
}
