use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

use crate::modules::admin::application::save_workflow::{SaveError, SaveOutcome, SaveWorkflow};
use crate::modules::profile::application::domain::entities::Profile;
use crate::modules::profile::application::forms::ProfileForm;
use crate::modules::profile::application::ports::incoming::use_cases::{
    EnsureSectionVisibilityUseCase, SaveProfileUseCase,
};
use crate::modules::profile::application::ports::outgoing::{
    ProfileRepository, ProfileRepositoryError,
};
use crate::shared::validation::{RuleViolation, ValidationError};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct SaveProfileService<R>
where
    R: ProfileRepository,
{
    repository: R,
    workflow: Arc<SaveWorkflow>,
    section_visibility: Arc<dyn EnsureSectionVisibilityUseCase + Send + Sync>,
}

impl<R> SaveProfileService<R>
where
    R: ProfileRepository,
{
    pub fn new(
        repository: R,
        workflow: Arc<SaveWorkflow>,
        section_visibility: Arc<dyn EnsureSectionVisibilityUseCase + Send + Sync>,
    ) -> Self {
        Self {
            repository,
            workflow,
            section_visibility,
        }
    }
}

#[async_trait]
impl<R> SaveProfileUseCase for SaveProfileService<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn create(&self, form: ProfileForm) -> Result<SaveOutcome<Profile>, SaveError> {
        let repository = &self.repository;

        let mut outcome = self
            .workflow
            .run(form, move |data| async move {
                repository.create(data).await.map_err(map_repository_error)
            })
            .await?;

        // The profile row is committed at this point; a missing companion row
        // is reported rather than undoing the save.
        if let Err(e) = self.section_visibility.execute(outcome.record.id).await {
            warn!(profile_id = outcome.record.id, error = %e, "section visibility not created");
            outcome.warnings.push(format!(
                "No se pudo crear la visibilidad de secciones del perfil: {e}"
            ));
        }

        Ok(outcome)
    }

    async fn update(&self, id: i32, form: ProfileForm) -> Result<SaveOutcome<Profile>, SaveError> {
        // Checked up front so a missing profile never triggers an upload.
        if self
            .repository
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .is_none()
        {
            return Err(SaveError::NotFound);
        }

        let repository = &self.repository;

        self.workflow
            .run(form, move |data| async move {
                repository
                    .update(id, data)
                    .await
                    .map_err(map_repository_error)
            })
            .await
    }
}

fn map_repository_error(e: ProfileRepositoryError) -> SaveError {
    match e {
        ProfileRepositoryError::NotFound => SaveError::NotFound,
        ProfileRepositoryError::NationalIdAlreadyExists => SaveError::Rejected(
            ValidationError::single("national_id", RuleViolation::Duplicate),
        ),
        ProfileRepositoryError::DatabaseError(msg) => SaveError::Repository(msg),
    }
}
