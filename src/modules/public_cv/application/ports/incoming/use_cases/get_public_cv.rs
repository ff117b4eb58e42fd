use async_trait::async_trait;

use crate::modules::public_cv::application::domain::PublicCv;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetPublicCvError {
    /// Unknown profile, or one that is not published.
    #[error("profile not found")]
    NotFound,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetPublicCvUseCase: Send + Sync {
    async fn execute(&self, profile_id: i32) -> Result<PublicCv, GetPublicCvError>;
}
