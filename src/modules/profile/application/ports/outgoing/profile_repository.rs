use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::{Profile, ProfileData};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileRepositoryError {
    #[error("profile not found")]
    NotFound,

    #[error("national id already exists")]
    NationalIdAlreadyExists,

    #[error("database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn create(&self, data: ProfileData) -> Result<Profile, ProfileRepositoryError>;

    /// Full replacement of every column. `NotFound` when the id does not exist.
    async fn update(&self, id: i32, data: ProfileData) -> Result<Profile, ProfileRepositoryError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Profile>, ProfileRepositoryError>;

    async fn list(&self) -> Result<Vec<Profile>, ProfileRepositoryError>;

    /// Cascades to the section visibility row and every career fact.
    async fn delete(&self, id: i32) -> Result<(), ProfileRepositoryError>;
}
