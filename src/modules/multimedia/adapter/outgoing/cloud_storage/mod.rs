mod asset_storage_gcs;

pub use asset_storage_gcs::GcsAssetStorage;
