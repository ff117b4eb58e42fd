use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use uuid::Uuid;

use crate::multimedia::application::domain::entities::AssetKind;

static UNSAFE_NAME_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9._-]").expect("file name pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPolicy {
    pub max_file_name_len: usize,
    pub bucket_name: String,
    pub public_base_url: String,
}

impl UploadPolicy {
    pub const DEFAULT_BUCKET_NAME: &'static str = "hoja-de-vida-assets";
    pub const DEFAULT_PUBLIC_BASE_URL: &'static str = "https://storage.googleapis.com";

    /// Reads `ASSET_BUCKET` and `ASSET_PUBLIC_BASE_URL`, falling back to defaults.
    pub fn from_env() -> Self {
        let bucket_name = std::env::var("ASSET_BUCKET")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_BUCKET_NAME.to_string());

        let public_base_url = std::env::var("ASSET_PUBLIC_BASE_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_PUBLIC_BASE_URL.to_string());

        Self {
            public_base_url,
            ..Self::new(bucket_name)
        }
    }

    pub fn new(bucket_name: String) -> Self {
        Self {
            max_file_name_len: 255,
            bucket_name,
            public_base_url: Self::DEFAULT_PUBLIC_BASE_URL.to_string(),
        }
    }

    /// `<prefix>/<uuid>-<sanitized name>`; `None` when nothing usable is left of the name.
    pub fn object_name_for(&self, kind: AssetKind, file_name: &str) -> Option<String> {
        let safe = sanitize_file_name(file_name, self.max_file_name_len)?;
        Some(format!(
            "{}/{}-{}",
            kind.object_prefix(),
            Uuid::new_v4(),
            safe
        ))
    }

    pub fn public_url(&self, object_name: &str) -> String {
        format!(
            "{}/{}/{}",
            self.public_base_url.trim_end_matches('/'),
            self.bucket_name,
            object_name
        )
    }
}

/// Keeps only the basename, lowercased, with every char outside `[a-z0-9._-]` replaced by `-`.
pub fn sanitize_file_name(file_name: &str, max_len: usize) -> Option<String> {
    let base = Path::new(file_name.trim())
        .file_name()
        .and_then(|s| s.to_str())?
        .to_lowercase();

    let cleaned: String = UNSAFE_NAME_CHARS
        .replace_all(&base, "-")
        .trim_matches('-')
        .chars()
        .take(max_len)
        .collect();

    if cleaned.is_empty() || cleaned.chars().all(|c| c == '.') {
        None
    } else {
        Some(cleaned)
    }
}

/// Content type sent to storage when the client did not declare one.
pub fn infer_content_type(file_name: &str) -> &'static str {
    let ext = Path::new(file_name)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}
