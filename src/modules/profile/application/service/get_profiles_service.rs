use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::Profile;
use crate::modules::profile::application::ports::incoming::use_cases::{
    GetProfilesError, GetProfilesUseCase,
};
use crate::modules::profile::application::ports::outgoing::ProfileRepository;

pub struct GetProfilesService<R>
where
    R: ProfileRepository,
{
    repository: R,
}

impl<R> GetProfilesService<R>
where
    R: ProfileRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetProfilesUseCase for GetProfilesService<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Profile>, GetProfilesError> {
        self.repository
            .list()
            .await
            .map_err(|e| GetProfilesError::RepositoryError(e.to_string()))
    }
}
