use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

use crate::shared::validation::FileKindRule;

/// Destination namespace of an uploaded asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    ProfilePhoto,
    Certificate,
    ProductImage,
}

impl AssetKind {
    pub fn object_prefix(&self) -> &'static str {
        match self {
            AssetKind::ProfilePhoto => "profile-photos",
            AssetKind::Certificate => "certificates",
            AssetKind::ProductImage => "product-images",
        }
    }

    pub fn file_rule(&self) -> &'static FileKindRule {
        match self {
            AssetKind::ProfilePhoto => &FileKindRule::PROFILE_PHOTO,
            AssetKind::Certificate => &FileKindRule::PDF,
            AssetKind::ProductImage => &FileKindRule::IMAGE,
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AssetKind::ProfilePhoto => "profile_photo",
            AssetKind::Certificate => "certificate",
            AssetKind::ProductImage => "product_image",
        };
        write!(f, "{s}")
    }
}

/// Wire shape of a file attached to an admin form.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct UploadedFilePayload {
    pub file_name: String,
    #[serde(default)]
    pub content_type: Option<String>,
    /// Standard base64 of the raw file bytes.
    pub content_base64: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadedFileError {
    #[error("file_name cannot be empty")]
    EmptyFileName,

    #[error("content_base64 is not valid base64: {0}")]
    InvalidBase64(String),
}

/// A file received in this submission, decoded and ready for upload.
/// Transient: never persisted.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "UploadedFilePayload")]
pub struct UploadedFile {
    file_name: String,
    content_type: Option<String>,
    bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(file_name: impl Into<String>, content_type: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.filter(|c| !c.trim().is_empty()),
            bytes,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl TryFrom<UploadedFilePayload> for UploadedFile {
    type Error = UploadedFileError;

    fn try_from(payload: UploadedFilePayload) -> Result<Self, Self::Error> {
        let file_name = payload.file_name.trim().to_string();
        if file_name.is_empty() {
            return Err(UploadedFileError::EmptyFileName);
        }

        let bytes = STANDARD
            .decode(payload.content_base64.trim())
            .map_err(|e| UploadedFileError::InvalidBase64(e.to_string()))?;

        Ok(Self::new(file_name, payload.content_type, bytes))
    }
}

// Only metadata goes out; the bytes never leave the request that carried them.
impl Serialize for UploadedFile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("UploadedFile", 3)?;
        state.serialize_field("file_name", &self.file_name)?;
        state.serialize_field("content_type", &self.content_type)?;
        state.serialize_field("size", &self.bytes.len())?;
        state.end()
    }
}

// Bytes are left out so attachments never end up in logs.
impl fmt::Debug for UploadedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadedFile")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("size", &self.bytes.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_metadata_without_bytes() {
        let file = UploadedFile::new("cert.pdf", Some("application/pdf".into()), vec![1, 2, 3]);

        assert_eq!(
            serde_json::to_value(&file).unwrap(),
            json!({"file_name": "cert.pdf", "content_type": "application/pdf", "size": 3})
        );
    }

    #[test]
    fn deserializes_and_decodes_base64() {
        let file: UploadedFile = serde_json::from_value(json!({
            "file_name": " cert.pdf ",
            "content_type": "application/pdf",
            "content_base64": STANDARD.encode(b"%PDF-1.4"),
        }))
        .unwrap();

        assert_eq!(file.file_name(), "cert.pdf");
        assert_eq!(file.content_type(), Some("application/pdf"));
        assert_eq!(file.size(), 8);
        assert_eq!(file.into_bytes(), b"%PDF-1.4".to_vec());
    }

    #[test]
    fn missing_content_type_is_allowed() {
        let file: UploadedFile = serde_json::from_value(json!({
            "file_name": "a.png",
            "content_base64": STANDARD.encode([1u8, 2, 3]),
        }))
        .unwrap();

        assert_eq!(file.content_type(), None);
    }

    #[test]
    fn blank_content_type_counts_as_absent() {
        let file = UploadedFile::new("a.png", Some("  ".to_string()), vec![]);
        assert_eq!(file.content_type(), None);
    }

    #[test]
    fn rejects_bad_base64() {
        let err = serde_json::from_value::<UploadedFile>(json!({
            "file_name": "a.png",
            "content_base64": "***",
        }))
        .unwrap_err();

        assert!(err.to_string().contains("not valid base64"));
    }

    #[test]
    fn rejects_empty_file_name() {
        let payload = UploadedFilePayload {
            file_name: "   ".to_string(),
            content_type: None,
            content_base64: String::new(),
        };

        assert_eq!(
            UploadedFile::try_from(payload).unwrap_err(),
            UploadedFileError::EmptyFileName
        );
    }

    #[test]
    fn debug_hides_bytes() {
        let file = UploadedFile::new("a.png", None, vec![0xAA; 4]);
        let out = format!("{file:?}");
        assert!(out.contains("size: 4"));
        assert!(!out.contains("170"));
    }

    #[test]
    fn asset_kind_maps_to_prefix_and_rule() {
        assert_eq!(AssetKind::ProfilePhoto.object_prefix(), "profile-photos");
        assert_eq!(AssetKind::Certificate.object_prefix(), "certificates");
        assert_eq!(AssetKind::ProductImage.object_prefix(), "product-images");
        assert_eq!(AssetKind::Certificate.file_rule(), &FileKindRule::PDF);
        assert_eq!(AssetKind::ProfilePhoto.to_string(), "profile_photo");
    }
}
