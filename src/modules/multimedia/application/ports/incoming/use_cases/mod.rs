mod persist_uploaded_asset;

pub use persist_uploaded_asset::{PersistUploadedAssetUseCase, UploadError};
