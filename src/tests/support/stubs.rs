use async_trait::async_trait;

use crate::modules::admin::application::save_workflow::{SaveError, SaveOutcome};
use crate::modules::career::application::domain::CareerRecord;
use crate::modules::career::application::ports::incoming::use_cases::{
    CareerFactError, CareerFactUseCase,
};
use crate::modules::profile::application::domain::entities::{
    Profile, SectionVisibility, SectionVisibilityFlags,
};
use crate::modules::profile::application::forms::ProfileForm;
use crate::modules::profile::application::ports::incoming::use_cases::{
    DeleteProfileError, DeleteProfileUseCase, EnsureSectionVisibilityUseCase, GetProfilesError,
    GetProfilesUseCase, GetSingleProfileError, GetSingleProfileUseCase, SaveProfileUseCase,
    SectionVisibilityError, UpdateSectionVisibilityUseCase,
};
use crate::modules::public_cv::application::domain::PublicCv;
use crate::modules::public_cv::application::ports::incoming::use_cases::{
    GetPublicCvError, GetPublicCvUseCase,
};
use crate::multimedia::application::domain::entities::{AssetKind, UploadedFile};
use crate::multimedia::application::ports::incoming::use_cases::{
    PersistUploadedAssetUseCase, UploadError,
};

// ============================================================================
// Uploads
// ============================================================================

#[derive(Clone)]
pub struct StubUploader {
    result: Option<Result<String, UploadError>>,
}

impl StubUploader {
    /// Panics if an upload is attempted.
    pub fn unused() -> Self {
        Self { result: None }
    }

    pub fn ok(url: &str) -> Self {
        Self {
            result: Some(Ok(url.to_string())),
        }
    }

    pub fn failing(err: UploadError) -> Self {
        Self {
            result: Some(Err(err)),
        }
    }
}

#[async_trait]
impl PersistUploadedAssetUseCase for StubUploader {
    async fn execute(&self, _file: UploadedFile, _kind: AssetKind) -> Result<String, UploadError> {
        self.result
            .clone()
            .unwrap_or_else(|| panic!("StubUploader not configured for this test"))
    }
}

// ============================================================================
// Profile
// ============================================================================

#[derive(Clone)]
pub struct StubSaveProfileUseCase {
    result: Result<SaveOutcome<Profile>, SaveError>,
}

impl StubSaveProfileUseCase {
    pub fn success(outcome: SaveOutcome<Profile>) -> Self {
        Self {
            result: Ok(outcome),
        }
    }

    pub fn error(err: SaveError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl SaveProfileUseCase for StubSaveProfileUseCase {
    async fn create(&self, _form: ProfileForm) -> Result<SaveOutcome<Profile>, SaveError> {
        self.result.clone()
    }

    async fn update(&self, _id: i32, _form: ProfileForm) -> Result<SaveOutcome<Profile>, SaveError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetProfilesUseCase {
    result: Result<Vec<Profile>, GetProfilesError>,
}

impl StubGetProfilesUseCase {
    pub fn success(profiles: Vec<Profile>) -> Self {
        Self {
            result: Ok(profiles),
        }
    }

    pub fn error(err: GetProfilesError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl GetProfilesUseCase for StubGetProfilesUseCase {
    async fn execute(&self) -> Result<Vec<Profile>, GetProfilesError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetSingleProfileUseCase {
    result: Result<Profile, GetSingleProfileError>,
}

impl StubGetSingleProfileUseCase {
    pub fn not_found() -> Self {
        Self {
            result: Err(GetSingleProfileError::NotFound),
        }
    }

    pub fn success(profile: Profile) -> Self {
        Self {
            result: Ok(profile),
        }
    }
}

#[async_trait]
impl GetSingleProfileUseCase for StubGetSingleProfileUseCase {
    async fn execute(&self, _id: i32) -> Result<Profile, GetSingleProfileError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubDeleteProfileUseCase {
    result: Result<(), DeleteProfileError>,
}

impl StubDeleteProfileUseCase {
    pub fn success() -> Self {
        Self { result: Ok(()) }
    }

    pub fn error(err: DeleteProfileError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl DeleteProfileUseCase for StubDeleteProfileUseCase {
    async fn execute(&self, _id: i32) -> Result<(), DeleteProfileError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubEnsureSectionVisibilityUseCase {
    result: Result<SectionVisibility, SectionVisibilityError>,
}

impl StubEnsureSectionVisibilityUseCase {
    pub fn success(visibility: SectionVisibility) -> Self {
        Self {
            result: Ok(visibility),
        }
    }

    pub fn error(err: SectionVisibilityError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl EnsureSectionVisibilityUseCase for StubEnsureSectionVisibilityUseCase {
    async fn execute(&self, _profile_id: i32) -> Result<SectionVisibility, SectionVisibilityError> {
        self.result.clone()
    }
}

/// `echo` returns the submitted flags as the stored row.
#[derive(Clone)]
pub struct StubUpdateSectionVisibilityUseCase {
    error: Option<SectionVisibilityError>,
}

impl StubUpdateSectionVisibilityUseCase {
    pub fn echo() -> Self {
        Self { error: None }
    }

    pub fn error(err: SectionVisibilityError) -> Self {
        Self { error: Some(err) }
    }
}

#[async_trait]
impl UpdateSectionVisibilityUseCase for StubUpdateSectionVisibilityUseCase {
    async fn execute(
        &self,
        profile_id: i32,
        flags: SectionVisibilityFlags,
    ) -> Result<SectionVisibility, SectionVisibilityError> {
        match &self.error {
            Some(err) => Err(err.clone()),
            None => Ok(SectionVisibility::from_flags(profile_id, flags)),
        }
    }
}

// ============================================================================
// Career facts
// ============================================================================

/// Serves `records` for reads and deletes and replays `save` for writes.
#[derive(Clone)]
pub struct StubCareerFactUseCase<T> {
    records: Vec<T>,
    save: Result<SaveOutcome<T>, SaveError>,
    query_error: Option<CareerFactError>,
}

impl<T: CareerRecord> StubCareerFactUseCase<T> {
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
            save: Err(SaveError::Repository("stub not configured for this test".into())),
            query_error: None,
        }
    }

    pub fn with_records(records: Vec<T>) -> Self {
        Self {
            records,
            ..Self::empty()
        }
    }

    pub fn saving(outcome: SaveOutcome<T>) -> Self {
        Self {
            save: Ok(outcome),
            ..Self::empty()
        }
    }

    pub fn rejecting(err: SaveError) -> Self {
        Self {
            save: Err(err),
            ..Self::empty()
        }
    }

    pub fn failing(err: CareerFactError) -> Self {
        Self {
            query_error: Some(err),
            ..Self::empty()
        }
    }

    fn check(&self) -> Result<(), CareerFactError> {
        match &self.query_error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl<T: CareerRecord> CareerFactUseCase<T> for StubCareerFactUseCase<T> {
    async fn create(&self, _form: T::Form) -> Result<SaveOutcome<T>, SaveError> {
        self.save.clone()
    }

    async fn update(&self, _id: i32, _form: T::Form) -> Result<SaveOutcome<T>, SaveError> {
        self.save.clone()
    }

    async fn get(&self, id: i32) -> Result<T, CareerFactError> {
        self.check()?;
        self.records
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or(CareerFactError::NotFound)
    }

    async fn list(&self, profile_id: Option<i32>) -> Result<Vec<T>, CareerFactError> {
        self.check()?;
        Ok(self
            .records
            .iter()
            .filter(|r| profile_id.map_or(true, |p| r.profile_id() == p))
            .cloned()
            .collect())
    }

    async fn delete(&self, id: i32) -> Result<(), CareerFactError> {
        self.check()?;
        if self.records.iter().any(|r| r.id() == id) {
            Ok(())
        } else {
            Err(CareerFactError::NotFound)
        }
    }
}

// ============================================================================
// Public CV
// ============================================================================

#[derive(Clone)]
pub struct StubGetPublicCvUseCase {
    result: Result<PublicCv, GetPublicCvError>,
}

impl StubGetPublicCvUseCase {
    pub fn success(cv: PublicCv) -> Self {
        Self { result: Ok(cv) }
    }

    pub fn error(err: GetPublicCvError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl GetPublicCvUseCase for StubGetPublicCvUseCase {
    async fn execute(&self, _profile_id: i32) -> Result<PublicCv, GetPublicCvError> {
        self.result.clone()
    }
}
