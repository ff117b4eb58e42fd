use serde::Serialize;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::modules::admin::application::admin_form::AdminForm;
use crate::modules::admin::application::upload_failure_policy::{
    UploadFailurePolicies, UploadFailurePolicy,
};
use crate::multimedia::application::ports::incoming::use_cases::PersistUploadedAssetUseCase;
use crate::shared::validation::{RuleViolation, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveStage {
    Validating,
    Uploading,
    Persisting,
    Done,
}

impl fmt::Display for SaveStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SaveStage::Validating => "validating",
            SaveStage::Uploading => "uploading",
            SaveStage::Persisting => "persisting",
            SaveStage::Done => "done",
        };
        write!(f, "{s}")
    }
}

/// Result of a successful save. Non-empty `warnings` means the save went
/// through partially (an attachment was dropped).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SaveOutcome<T> {
    pub record: T,
    pub warnings: Vec<String>,
}

impl<T> SaveOutcome<T> {
    pub fn clean(record: T) -> Self {
        Self {
            record,
            warnings: Vec::new(),
        }
    }

    pub fn is_partial(&self) -> bool {
        !self.warnings.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SaveError {
    /// Nothing was persisted.
    #[error("save rejected: {0}")]
    Rejected(ValidationError),

    #[error("record not found")]
    NotFound,

    #[error("repository error: {0}")]
    Repository(String),
}

/// `Validating -> Uploading -> Persisting -> Done`.
///
/// Uploading only runs when the form carries a new file, and always finishes
/// before the persisted shape is built, so a stored URL never points at an
/// upload still in flight.
pub struct SaveWorkflow {
    uploader: Arc<dyn PersistUploadedAssetUseCase>,
    policies: UploadFailurePolicies,
}

impl SaveWorkflow {
    pub fn new(
        uploader: Arc<dyn PersistUploadedAssetUseCase>,
        policies: UploadFailurePolicies,
    ) -> Self {
        Self { uploader, policies }
    }

    pub async fn run<F, T, P, Fut>(&self, mut form: F, persist: P) -> Result<SaveOutcome<T>, SaveError>
    where
        F: AdminForm,
        P: FnOnce(F::Data) -> Fut + Send,
        Fut: Future<Output = Result<T, SaveError>> + Send,
        T: Send,
    {
        let entity = F::ENTITY;

        debug!(entity = %entity, stage = %SaveStage::Validating, "save stage");
        if let Err(errors) = form.validate() {
            info!(entity = %entity, errors = %errors, "save rejected");
            return Err(SaveError::Rejected(errors));
        }

        let mut warnings = Vec::new();
        let mut uploaded_url = None;

        if let Some(pending) = form.take_upload() {
            debug!(entity = %entity, stage = %SaveStage::Uploading, file = ?pending.file, "save stage");
            let field = pending.field;

            match self.uploader.execute(pending.file, pending.kind).await {
                Ok(url) => uploaded_url = Some(url),
                Err(e) => match self.policies.for_entity(entity) {
                    UploadFailurePolicy::Block => {
                        warn!(entity = %entity, field, error = %e, "upload failed, save blocked");
                        return Err(SaveError::Rejected(ValidationError::single(
                            field,
                            RuleViolation::UploadFailed { cause: e.cause() },
                        )));
                    }
                    UploadFailurePolicy::WarnAndContinue => {
                        warn!(entity = %entity, field, error = %e, "upload failed, saving without attachment");
                        warnings.push(format!(
                            "No se pudo subir el archivo ({field}): {}. El registro se guardó sin actualizar el archivo.",
                            e.cause()
                        ));
                    }
                },
            }
        }

        let data = form.into_data(uploaded_url).map_err(SaveError::Rejected)?;

        debug!(entity = %entity, stage = %SaveStage::Persisting, "save stage");
        let record = persist(data).await?;

        info!(entity = %entity, stage = %SaveStage::Done, partial = !warnings.is_empty(), "save completed");
        Ok(SaveOutcome { record, warnings })
    }
}
