use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeleteProfileError {
    #[error("profile not found")]
    NotFound,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteProfileUseCase: Send + Sync {
    async fn execute(&self, id: i32) -> Result<(), DeleteProfileError>;
}
