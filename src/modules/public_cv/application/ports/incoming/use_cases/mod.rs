mod get_public_cv;

pub use get_public_cv::{GetPublicCvError, GetPublicCvUseCase};
