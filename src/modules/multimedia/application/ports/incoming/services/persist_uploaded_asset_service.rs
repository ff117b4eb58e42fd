use async_trait::async_trait;
use tracing::{info, warn};

use crate::multimedia::application::domain::entities::{AssetKind, UploadedFile};
use crate::multimedia::application::domain::policies::upload_policy::{
    infer_content_type, UploadPolicy,
};
use crate::multimedia::application::ports::incoming::use_cases::{
    PersistUploadedAssetUseCase, UploadError,
};
use crate::multimedia::application::ports::outgoing::cloud_storage::{AssetStorage, StorageObject};

pub struct PersistUploadedAssetService<S>
where
    S: AssetStorage,
{
    storage: S,
    policy: UploadPolicy,
}

impl<S> PersistUploadedAssetService<S>
where
    S: AssetStorage,
{
    pub fn new(storage: S, policy: UploadPolicy) -> Self {
        Self { storage, policy }
    }
}

#[async_trait]
impl<S> PersistUploadedAssetUseCase for PersistUploadedAssetService<S>
where
    S: AssetStorage + Send + Sync,
{
    async fn execute(&self, file: UploadedFile, kind: AssetKind) -> Result<String, UploadError> {
        let object_name = self
            .policy
            .object_name_for(kind, file.file_name())
            .ok_or(UploadError::InvalidFileName)?;

        let content_type = file
            .content_type()
            .map(str::to_string)
            .unwrap_or_else(|| infer_content_type(file.file_name()).to_string());

        let object = StorageObject::try_new(
            self.policy.bucket_name.clone(),
            object_name,
            content_type,
            file.into_bytes(),
        )
        .map_err(|e| UploadError::Storage(e.to_string()))?;

        info!(
            kind = %kind,
            bucket = object.bucket_name(),
            object = object.object_name(),
            size = object.len(),
            "uploading asset"
        );

        match self.storage.upload(object).await {
            Ok(url) => {
                info!(kind = %kind, url = %url, "asset uploaded");
                Ok(url)
            }
            Err(e) => {
                warn!(kind = %kind, error = %e, "asset upload failed");
                Err(UploadError::Storage(e.to_string()))
            }
        }
    }
}
