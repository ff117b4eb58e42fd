mod asset_storage;

pub use asset_storage::{AssetStorage, StorageObject, StorageObjectError, StorageUploadError};
