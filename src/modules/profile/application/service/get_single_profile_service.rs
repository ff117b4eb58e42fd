use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::Profile;
use crate::modules::profile::application::ports::incoming::use_cases::{
    GetSingleProfileError, GetSingleProfileUseCase,
};
use crate::modules::profile::application::ports::outgoing::ProfileRepository;

pub struct GetSingleProfileService<R>
where
    R: ProfileRepository,
{
    repository: R,
}

impl<R> GetSingleProfileService<R>
where
    R: ProfileRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetSingleProfileUseCase for GetSingleProfileService<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(&self, id: i32) -> Result<Profile, GetSingleProfileError> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(|e| GetSingleProfileError::RepositoryError(e.to_string()))?
            .ok_or(GetSingleProfileError::NotFound)
    }
}
