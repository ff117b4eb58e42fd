mod get_public_cv_service;

pub use get_public_cv_service::{CareerReaders, GetPublicCvService};
