use async_trait::async_trait;

// ============================================================================
// Domain Types
// ============================================================================

/// Validated object to be written to the asset bucket.
///
/// Built with `try_new()`, which rejects empty bucket or object names.
#[derive(Clone, PartialEq, Eq)]
pub struct StorageObject {
    bucket_name: String,
    object_name: String,
    content_type: String,
    bytes: Vec<u8>,
}

impl StorageObject {
    pub fn try_new(
        bucket_name: String,
        object_name: String,
        content_type: String,
        bytes: Vec<u8>,
    ) -> Result<Self, StorageObjectError> {
        if bucket_name.trim().is_empty() {
            return Err(StorageObjectError::EmptyField("bucket_name"));
        }
        if object_name.trim().is_empty() {
            return Err(StorageObjectError::EmptyField("object_name"));
        }

        Ok(Self {
            bucket_name,
            object_name,
            content_type,
            bytes,
        })
    }

    pub fn bucket_name(&self) -> &str {
        &self.bucket_name
    }

    pub fn object_name(&self) -> &str {
        &self.object_name
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl std::fmt::Debug for StorageObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageObject")
            .field("bucket_name", &self.bucket_name)
            .field("object_name", &self.object_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum StorageObjectError {
    #[error("Field '{0}' cannot be empty")]
    EmptyField(&'static str),
}

/// Failures reported by the blob store.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum StorageUploadError {
    #[error("access denied by storage")]
    AccessDenied,

    #[error("bucket not found")]
    BucketNotFound,

    #[error("invalid storage configuration")]
    Configuration,

    #[error("storage infrastructure error: {0}")]
    Infrastructure(String),
}

// ============================================================================
// Port Interface
// ============================================================================

/// Single point of contact with the cloud object store.
#[async_trait]
pub trait AssetStorage: Send + Sync {
    /// Writes the object and returns its stable public URL.
    async fn upload(&self, object: StorageObject) -> Result<String, StorageUploadError>;
}
