use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::Profile;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetSingleProfileError {
    #[error("profile not found")]
    NotFound,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetSingleProfileUseCase: Send + Sync {
    async fn execute(&self, id: i32) -> Result<Profile, GetSingleProfileError>;
}
