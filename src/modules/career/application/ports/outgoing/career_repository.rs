use async_trait::async_trait;

use crate::modules::career::application::domain::CareerRecord;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CareerRepositoryError {
    #[error("record not found")]
    NotFound,

    /// The referenced profile does not exist (foreign key violation).
    #[error("profile not found")]
    ProfileNotFound,

    #[error("database error: {0}")]
    DatabaseError(String),
}

/// Storage of one career fact table. Every record belongs to one profile and
/// disappears with it.
#[async_trait]
pub trait CareerRepository<T>: Send + Sync
where
    T: CareerRecord,
{
    async fn create(&self, data: T::Data) -> Result<T, CareerRepositoryError>;

    async fn update(&self, id: i32, data: T::Data) -> Result<T, CareerRepositoryError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<T>, CareerRepositoryError>;

    /// All records, optionally narrowed to one profile.
    async fn list(&self, profile_id: Option<i32>) -> Result<Vec<T>, CareerRepositoryError>;

    /// Records of the profile with `visible = true`.
    async fn list_visible_for_profile(&self, profile_id: i32)
        -> Result<Vec<T>, CareerRepositoryError>;

    async fn delete(&self, id: i32) -> Result<(), CareerRepositoryError>;
}
