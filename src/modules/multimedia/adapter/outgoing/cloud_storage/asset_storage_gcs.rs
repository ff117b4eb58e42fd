use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::OnceCell;

use crate::multimedia::application::domain::policies::upload_policy::UploadPolicy;
use crate::multimedia::application::ports::outgoing::cloud_storage::{
    AssetStorage, StorageObject, StorageUploadError,
};

fn map_upload_error(msg: &str) -> StorageUploadError {
    let m = msg.to_lowercase();

    if m.contains("permission") || m.contains("forbidden") || m.contains("denied") || m.contains("403")
    {
        StorageUploadError::AccessDenied
    } else if m.contains("bucket") && (m.contains("not found") || m.contains("404")) {
        StorageUploadError::BucketNotFound
    } else if m.contains("credential") || m.contains("config") {
        StorageUploadError::Configuration
    } else {
        StorageUploadError::Infrastructure(msg.to_string())
    }
}

/// Internal seam so the adapter can be tested without a real bucket.
#[async_trait]
trait GcsClient: Send + Sync {
    async fn upload_object(
        &self,
        bucket: &str,
        object_name: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> Result<(), String>;
}

#[cfg(test)]
struct ArcGcsClient(Arc<dyn GcsClient>);

#[cfg(test)]
#[async_trait]
impl GcsClient for ArcGcsClient {
    async fn upload_object(
        &self,
        bucket: &str,
        object_name: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> Result<(), String> {
        self.0
            .upload_object(bucket, object_name, content_type, data)
            .await
    }
}

/// Production adapter for the `AssetStorage` port.
#[derive(Clone)]
pub struct GcsAssetStorage {
    client: Arc<OnceCell<Box<dyn GcsClient>>>,
    policy: UploadPolicy,
}

impl GcsAssetStorage {
    /// Client is initialized lazily on first upload.
    pub fn new(policy: UploadPolicy) -> Self {
        Self {
            client: Arc::new(OnceCell::new()),
            policy,
        }
    }

    async fn get_client(&self) -> Result<&dyn GcsClient, Box<dyn std::error::Error + Send + Sync>> {
        self.client
            .get_or_try_init(|| async {
                let real_client = RealGcsClient::new().await?;
                Ok(Box::new(real_client) as Box<dyn GcsClient>)
            })
            .await
            .map(|boxed| &**boxed)
    }

    #[cfg(test)]
    fn with_client(client: Arc<dyn GcsClient>, policy: UploadPolicy) -> Self {
        let once = OnceCell::new();
        let _ = once.set(Box::new(ArcGcsClient(client)) as Box<dyn GcsClient>);

        Self {
            client: Arc::new(once),
            policy,
        }
    }
}

#[async_trait]
impl AssetStorage for GcsAssetStorage {
    async fn upload(&self, object: StorageObject) -> Result<String, StorageUploadError> {
        let client = self.get_client().await.map_err(|e| {
            tracing::error!("GCS client unavailable: {}", e);
            StorageUploadError::Configuration
        })?;

        let bucket = object.bucket_name().to_string();
        let object_name = object.object_name().to_string();
        let content_type = object.content_type().to_string();

        client
            .upload_object(&bucket, &object_name, &content_type, object.into_bytes())
            .await
            .map_err(|e| map_upload_error(&e))?;

        Ok(self.policy.public_url(&object_name))
    }
}

// ============================================================================
// Real Google Cloud Storage client (google-cloud-storage)
// ============================================================================

struct RealGcsClient {
    client: google_cloud_storage::client::Client,
}

impl RealGcsClient {
    async fn new() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        use google_cloud_storage::client::{Client, ClientConfig};

        tracing::info!("Initializing GCS client...");

        let config = ClientConfig::default().with_auth().await.map_err(|e| {
            tracing::error!("Failed to load GCS credentials: {:?}", e);
            e
        })?;

        tracing::info!("GCS client created");

        Ok(Self {
            client: Client::new(config),
        })
    }
}

#[async_trait]
impl GcsClient for RealGcsClient {
    async fn upload_object(
        &self,
        bucket: &str,
        object_name: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> Result<(), String> {
        use google_cloud_storage::http::objects::upload::{
            Media, UploadObjectRequest, UploadType,
        };

        let mut media = Media::new(object_name.to_string());
        media.content_type = content_type.to_string().into();
        media.content_length = Some(data.len() as u64);

        self.client
            .upload_object(
                &UploadObjectRequest {
                    bucket: bucket.to_string(),
                    ..Default::default()
                },
                data,
                &UploadType::Simple(media),
            )
            .await
            .map(|_| ())
            .map_err(|e| e.to_string())
    }
}
