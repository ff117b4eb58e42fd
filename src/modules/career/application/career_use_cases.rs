use std::sync::Arc;

use crate::modules::career::application::domain::entities::{
    AcademicProduct, CompletedCourse, GarageSaleItem, Recognition, WorkExperience, WorkProduct,
};
use crate::modules::career::application::domain::CareerRecord;
use crate::modules::career::application::ports::incoming::use_cases::CareerFactUseCase;

#[derive(Clone)]
pub struct CareerUseCases {
    pub work_experiences: Arc<dyn CareerFactUseCase<WorkExperience> + Send + Sync>,
    pub recognitions: Arc<dyn CareerFactUseCase<Recognition> + Send + Sync>,
    pub completed_courses: Arc<dyn CareerFactUseCase<CompletedCourse> + Send + Sync>,
    pub academic_products: Arc<dyn CareerFactUseCase<AcademicProduct> + Send + Sync>,
    pub work_products: Arc<dyn CareerFactUseCase<WorkProduct> + Send + Sync>,
    pub garage_sale_items: Arc<dyn CareerFactUseCase<GarageSaleItem> + Send + Sync>,
}

/// Picks the use case of one record type out of the bundle, so handlers can
/// be written once for every career fact.
pub trait CareerUseCaseSlot: CareerRecord {
    fn slot(cases: &CareerUseCases) -> &Arc<dyn CareerFactUseCase<Self> + Send + Sync>;

    fn slot_mut(cases: &mut CareerUseCases) -> &mut Arc<dyn CareerFactUseCase<Self> + Send + Sync>;
}

impl CareerUseCaseSlot for WorkExperience {
    fn slot(cases: &CareerUseCases) -> &Arc<dyn CareerFactUseCase<Self> + Send + Sync> {
        &cases.work_experiences
    }

    fn slot_mut(cases: &mut CareerUseCases) -> &mut Arc<dyn CareerFactUseCase<Self> + Send + Sync> {
        &mut cases.work_experiences
    }
}

impl CareerUseCaseSlot for Recognition {
    fn slot(cases: &CareerUseCases) -> &Arc<dyn CareerFactUseCase<Self> + Send + Sync> {
        &cases.recognitions
    }

    fn slot_mut(cases: &mut CareerUseCases) -> &mut Arc<dyn CareerFactUseCase<Self> + Send + Sync> {
        &mut cases.recognitions
    }
}

impl CareerUseCaseSlot for CompletedCourse {
    fn slot(cases: &CareerUseCases) -> &Arc<dyn CareerFactUseCase<Self> + Send + Sync> {
        &cases.completed_courses
    }

    fn slot_mut(cases: &mut CareerUseCases) -> &mut Arc<dyn CareerFactUseCase<Self> + Send + Sync> {
        &mut cases.completed_courses
    }
}

impl CareerUseCaseSlot for AcademicProduct {
    fn slot(cases: &CareerUseCases) -> &Arc<dyn CareerFactUseCase<Self> + Send + Sync> {
        &cases.academic_products
    }

    fn slot_mut(cases: &mut CareerUseCases) -> &mut Arc<dyn CareerFactUseCase<Self> + Send + Sync> {
        &mut cases.academic_products
    }
}

impl CareerUseCaseSlot for WorkProduct {
    fn slot(cases: &CareerUseCases) -> &Arc<dyn CareerFactUseCase<Self> + Send + Sync> {
        &cases.work_products
    }

    fn slot_mut(cases: &mut CareerUseCases) -> &mut Arc<dyn CareerFactUseCase<Self> + Send + Sync> {
        &mut cases.work_products
    }
}

impl CareerUseCaseSlot for GarageSaleItem {
    fn slot(cases: &CareerUseCases) -> &Arc<dyn CareerFactUseCase<Self> + Send + Sync> {
        &cases.garage_sale_items
    }

    fn slot_mut(cases: &mut CareerUseCases) -> &mut Arc<dyn CareerFactUseCase<Self> + Send + Sync> {
        &mut cases.garage_sale_items
    }
}
