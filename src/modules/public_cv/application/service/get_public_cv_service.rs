use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use crate::modules::career::application::domain::entities::{
    AcademicProduct, CompletedCourse, GarageSaleItem, Recognition, WorkExperience, WorkProduct,
};
use crate::modules::career::application::domain::CareerRecord;
use crate::modules::career::application::ports::outgoing::CareerRepository;
use crate::modules::profile::application::domain::entities::SectionVisibility;
use crate::modules::profile::application::ports::outgoing::{
    ProfileRepository, SectionVisibilityRepository,
};
use crate::modules::public_cv::application::domain::PublicCv;
use crate::modules::public_cv::application::ports::incoming::use_cases::{
    GetPublicCvError, GetPublicCvUseCase,
};

/// Read side of every career fact table.
#[derive(Clone)]
pub struct CareerReaders {
    pub work_experiences: Arc<dyn CareerRepository<WorkExperience>>,
    pub recognitions: Arc<dyn CareerRepository<Recognition>>,
    pub completed_courses: Arc<dyn CareerRepository<CompletedCourse>>,
    pub academic_products: Arc<dyn CareerRepository<AcademicProduct>>,
    pub work_products: Arc<dyn CareerRepository<WorkProduct>>,
    pub garage_sale_items: Arc<dyn CareerRepository<GarageSaleItem>>,
}

pub struct GetPublicCvService<P, V>
where
    P: ProfileRepository,
    V: SectionVisibilityRepository,
{
    profiles: P,
    visibility: V,
    career: CareerReaders,
}

impl<P, V> GetPublicCvService<P, V>
where
    P: ProfileRepository,
    V: SectionVisibilityRepository,
{
    pub fn new(profiles: P, visibility: V, career: CareerReaders) -> Self {
        Self {
            profiles,
            visibility,
            career,
        }
    }
}

async fn visible_section<T: CareerRecord>(
    repository: &dyn CareerRepository<T>,
    visibility: &SectionVisibility,
) -> Result<Option<Vec<T>>, GetPublicCvError> {
    if !visibility.shows(T::SECTION) {
        return Ok(None);
    }

    repository
        .list_visible_for_profile(visibility.profile_id)
        .await
        .map(Some)
        .map_err(|e| GetPublicCvError::RepositoryError(e.to_string()))
}

#[async_trait]
impl<P, V> GetPublicCvUseCase for GetPublicCvService<P, V>
where
    P: ProfileRepository,
    V: SectionVisibilityRepository,
{
    async fn execute(&self, profile_id: i32) -> Result<PublicCv, GetPublicCvError> {
        let profile = self
            .profiles
            .find_by_id(profile_id)
            .await
            .map_err(|e| GetPublicCvError::RepositoryError(e.to_string()))?
            .filter(|p| p.is_published())
            .ok_or(GetPublicCvError::NotFound)?;

        // No row yet means nothing was hidden.
        let visibility = self
            .visibility
            .find_by_profile(profile_id)
            .await
            .map_err(|e| GetPublicCvError::RepositoryError(e.to_string()))?
            .unwrap_or_else(|| SectionVisibility::all_visible(profile_id));

        debug!(profile_id, visibility = ?visibility, "assembling public cv");

        Ok(PublicCv {
            profile,
            work_experience: visible_section(&*self.career.work_experiences, &visibility).await?,
            courses: visible_section(&*self.career.completed_courses, &visibility).await?,
            recognitions: visible_section(&*self.career.recognitions, &visibility).await?,
            academic_products: visible_section(&*self.career.academic_products, &visibility)
                .await?,
            work_products: visible_section(&*self.career.work_products, &visibility).await?,
            garage_sale: visible_section(&*self.career.garage_sale_items, &visibility).await?,
        })
    }
}
