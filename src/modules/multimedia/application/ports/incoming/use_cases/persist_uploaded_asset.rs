use async_trait::async_trait;

use crate::multimedia::application::domain::entities::{AssetKind, UploadedFile};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("el nombre del archivo no es válido")]
    InvalidFileName,

    #[error("{0}")]
    Storage(String),
}

impl UploadError {
    /// Underlying cause, as shown to the operator.
    pub fn cause(&self) -> String {
        self.to_string()
    }
}

/// Sends an already validated file to blob storage and returns its durable URL.
/// No retry, no fallback.
#[async_trait]
pub trait PersistUploadedAssetUseCase: Send + Sync {
    async fn execute(&self, file: UploadedFile, kind: AssetKind) -> Result<String, UploadError>;
}
