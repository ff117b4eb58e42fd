use async_trait::async_trait;
use tracing::info;

use crate::modules::profile::application::ports::incoming::use_cases::{
    DeleteProfileError, DeleteProfileUseCase,
};
use crate::modules::profile::application::ports::outgoing::{
    ProfileRepository, ProfileRepositoryError,
};

pub struct DeleteProfileService<R>
where
    R: ProfileRepository,
{
    repository: R,
}

impl<R> DeleteProfileService<R>
where
    R: ProfileRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteProfileUseCase for DeleteProfileService<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(&self, id: i32) -> Result<(), DeleteProfileError> {
        self.repository.delete(id).await.map_err(|e| match e {
            ProfileRepositoryError::NotFound => DeleteProfileError::NotFound,
            other => DeleteProfileError::RepositoryError(other.to_string()),
        })?;

        info!(profile_id = id, "profile deleted with its career records");
        Ok(())
    }
}
