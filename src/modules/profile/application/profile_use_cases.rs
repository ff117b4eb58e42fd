use std::sync::Arc;

use crate::modules::profile::application::ports::incoming::use_cases::{
    DeleteProfileUseCase, EnsureSectionVisibilityUseCase, GetProfilesUseCase,
    GetSingleProfileUseCase, SaveProfileUseCase, UpdateSectionVisibilityUseCase,
};

#[derive(Clone)]
pub struct ProfileUseCases {
    pub save: Arc<dyn SaveProfileUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetProfilesUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleProfileUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteProfileUseCase + Send + Sync>,
    pub ensure_visibility: Arc<dyn EnsureSectionVisibilityUseCase + Send + Sync>,
    pub update_visibility: Arc<dyn UpdateSectionVisibilityUseCase + Send + Sync>,
}
