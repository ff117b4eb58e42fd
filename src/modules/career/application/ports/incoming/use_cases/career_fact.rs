use async_trait::async_trait;

use crate::modules::admin::application::save_workflow::{SaveError, SaveOutcome};
use crate::modules::career::application::domain::CareerRecord;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CareerFactError {
    #[error("record not found")]
    NotFound,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

/// Admin CRUD over one career fact type. Saves go through the shared
/// validate/upload/persist workflow.
#[async_trait]
pub trait CareerFactUseCase<T>: Send + Sync
where
    T: CareerRecord,
{
    async fn create(&self, form: T::Form) -> Result<SaveOutcome<T>, SaveError>;

    async fn update(&self, id: i32, form: T::Form) -> Result<SaveOutcome<T>, SaveError>;

    async fn get(&self, id: i32) -> Result<T, CareerFactError>;

    async fn list(&self, profile_id: Option<i32>) -> Result<Vec<T>, CareerFactError>;

    async fn delete(&self, id: i32) -> Result<(), CareerFactError>;
}
