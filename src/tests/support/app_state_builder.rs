use actix_web::web;
use std::sync::Arc;

use crate::modules::admin::application::save_workflow::SaveError;
use crate::modules::career::application::career_use_cases::{CareerUseCaseSlot, CareerUseCases};
use crate::modules::career::application::ports::incoming::use_cases::CareerFactUseCase;
use crate::modules::profile::application::ports::incoming::use_cases::{
    DeleteProfileError, DeleteProfileUseCase, EnsureSectionVisibilityUseCase, GetProfilesError,
    GetProfilesUseCase, GetSingleProfileUseCase, SaveProfileUseCase, SectionVisibilityError,
    UpdateSectionVisibilityUseCase,
};
use crate::modules::profile::application::profile_use_cases::ProfileUseCases;
use crate::modules::public_cv::application::ports::incoming::use_cases::{
    GetPublicCvError, GetPublicCvUseCase,
};
use crate::modules::public_cv::application::public_cv_use_cases::PublicCvUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Every use case defaults to a stub that reports "not found" or "not
/// configured"; tests swap in the one they exercise.
pub struct TestAppStateBuilder {
    profile: ProfileUseCases,
    career: CareerUseCases,
    public_cv: PublicCvUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            profile: ProfileUseCases {
                save: Arc::new(StubSaveProfileUseCase::error(SaveError::Repository(
                    "not used in this test".into(),
                ))),
                get_list: Arc::new(StubGetProfilesUseCase::error(
                    GetProfilesError::RepositoryError("not used in this test".into()),
                )),
                get_single: Arc::new(StubGetSingleProfileUseCase::not_found()),
                delete: Arc::new(StubDeleteProfileUseCase::error(DeleteProfileError::NotFound)),
                ensure_visibility: Arc::new(StubEnsureSectionVisibilityUseCase::error(
                    SectionVisibilityError::ProfileNotFound,
                )),
                update_visibility: Arc::new(StubUpdateSectionVisibilityUseCase::error(
                    SectionVisibilityError::ProfileNotFound,
                )),
            },
            career: CareerUseCases {
                work_experiences: Arc::new(StubCareerFactUseCase::empty()),
                recognitions: Arc::new(StubCareerFactUseCase::empty()),
                completed_courses: Arc::new(StubCareerFactUseCase::empty()),
                academic_products: Arc::new(StubCareerFactUseCase::empty()),
                work_products: Arc::new(StubCareerFactUseCase::empty()),
                garage_sale_items: Arc::new(StubCareerFactUseCase::empty()),
            },
            public_cv: PublicCvUseCases {
                get_cv: Arc::new(StubGetPublicCvUseCase::error(GetPublicCvError::NotFound)),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_save_profile(mut self, uc: impl SaveProfileUseCase + Send + Sync + 'static) -> Self {
        self.profile.save = Arc::new(uc);
        self
    }

    pub fn with_get_profiles(mut self, uc: impl GetProfilesUseCase + Send + Sync + 'static) -> Self {
        self.profile.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_single_profile(
        mut self,
        uc: impl GetSingleProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.profile.get_single = Arc::new(uc);
        self
    }

    pub fn with_delete_profile(
        mut self,
        uc: impl DeleteProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.profile.delete = Arc::new(uc);
        self
    }

    pub fn with_ensure_section_visibility(
        mut self,
        uc: impl EnsureSectionVisibilityUseCase + Send + Sync + 'static,
    ) -> Self {
        self.profile.ensure_visibility = Arc::new(uc);
        self
    }

    pub fn with_update_section_visibility(
        mut self,
        uc: impl UpdateSectionVisibilityUseCase + Send + Sync + 'static,
    ) -> Self {
        self.profile.update_visibility = Arc::new(uc);
        self
    }

    pub fn with_career<T: CareerUseCaseSlot>(
        mut self,
        uc: impl CareerFactUseCase<T> + Send + Sync + 'static,
    ) -> Self {
        *T::slot_mut(&mut self.career) = Arc::new(uc);
        self
    }

    pub fn with_get_public_cv(
        mut self,
        uc: impl GetPublicCvUseCase + Send + Sync + 'static,
    ) -> Self {
        self.public_cv.get_cv = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            profile: self.profile,
            career: self.career,
            public_cv: self.public_cv,
        })
    }
}
