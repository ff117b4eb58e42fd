use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::Profile;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetProfilesError {
    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetProfilesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Profile>, GetProfilesError>;
}
