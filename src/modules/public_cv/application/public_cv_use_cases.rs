use std::sync::Arc;

use crate::modules::public_cv::application::ports::incoming::use_cases::GetPublicCvUseCase;

#[derive(Clone)]
pub struct PublicCvUseCases {
    pub get_cv: Arc<dyn GetPublicCvUseCase + Send + Sync>,
}
