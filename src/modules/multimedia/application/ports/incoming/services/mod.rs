mod persist_uploaded_asset_service;

pub use persist_uploaded_asset_service::PersistUploadedAssetService;
