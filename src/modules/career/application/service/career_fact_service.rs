use async_trait::async_trait;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::info;

use crate::modules::admin::application::admin_form::AdminForm;
use crate::modules::admin::application::save_workflow::{SaveError, SaveOutcome, SaveWorkflow};
use crate::modules::career::application::domain::CareerRecord;
use crate::modules::career::application::ports::incoming::use_cases::{
    CareerFactError, CareerFactUseCase,
};
use crate::modules::career::application::ports::outgoing::{
    CareerRepository, CareerRepositoryError,
};
use crate::shared::validation::{RuleViolation, ValidationError};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

/// One instance per career fact type, all sharing the same save workflow.
pub struct CareerFactService<T, R>
where
    T: CareerRecord,
    R: CareerRepository<T>,
{
    repository: R,
    workflow: Arc<SaveWorkflow>,
    _record: PhantomData<fn() -> T>,
}

impl<T, R> CareerFactService<T, R>
where
    T: CareerRecord,
    R: CareerRepository<T>,
{
    pub fn new(repository: R, workflow: Arc<SaveWorkflow>) -> Self {
        Self {
            repository,
            workflow,
            _record: PhantomData,
        }
    }
}

#[async_trait]
impl<T, R> CareerFactUseCase<T> for CareerFactService<T, R>
where
    T: CareerRecord,
    R: CareerRepository<T>,
{
    async fn create(&self, form: T::Form) -> Result<SaveOutcome<T>, SaveError> {
        let repository = &self.repository;

        self.workflow
            .run(form, move |data| async move {
                repository.create(data).await.map_err(map_save_error)
            })
            .await
    }

    async fn update(&self, id: i32, form: T::Form) -> Result<SaveOutcome<T>, SaveError> {
        // Checked up front so a missing record never triggers an upload.
        if self
            .repository
            .find_by_id(id)
            .await
            .map_err(map_save_error)?
            .is_none()
        {
            return Err(SaveError::NotFound);
        }

        let repository = &self.repository;

        self.workflow
            .run(form, move |data| async move {
                repository.update(id, data).await.map_err(map_save_error)
            })
            .await
    }

    async fn get(&self, id: i32) -> Result<T, CareerFactError> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(map_query_error)?
            .ok_or(CareerFactError::NotFound)
    }

    async fn list(&self, profile_id: Option<i32>) -> Result<Vec<T>, CareerFactError> {
        self.repository
            .list(profile_id)
            .await
            .map_err(map_query_error)
    }

    async fn delete(&self, id: i32) -> Result<(), CareerFactError> {
        self.repository.delete(id).await.map_err(map_query_error)?;

        let entity = <T::Form as AdminForm>::ENTITY;
        info!(entity = %entity, id, "career record deleted");
        Ok(())
    }
}

fn map_save_error(e: CareerRepositoryError) -> SaveError {
    match e {
        CareerRepositoryError::NotFound => SaveError::NotFound,
        CareerRepositoryError::ProfileNotFound => SaveError::Rejected(ValidationError::single(
            "profile_id",
            RuleViolation::UnknownProfile,
        )),
        CareerRepositoryError::DatabaseError(msg) => SaveError::Repository(msg),
    }
}

fn map_query_error(e: CareerRepositoryError) -> CareerFactError {
    match e {
        CareerRepositoryError::NotFound => CareerFactError::NotFound,
        other => CareerFactError::RepositoryError(other.to_string()),
    }
}
