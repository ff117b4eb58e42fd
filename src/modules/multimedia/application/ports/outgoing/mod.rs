pub mod cloud_storage;
