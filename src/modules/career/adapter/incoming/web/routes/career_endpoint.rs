use crate::modules::admin::adapter::incoming::web::NotFoundBody;
use crate::modules::career::application::career_use_cases::CareerUseCaseSlot;
use crate::modules::career::application::domain::entities::{
    AcademicProduct, CompletedCourse, GarageSaleItem, Recognition, WorkExperience, WorkProduct,
};

/// Where a career fact type is served and how its absence is reported.
pub trait CareerEndpoint: CareerUseCaseSlot {
    const PATH: &'static str;
    const NOT_FOUND: NotFoundBody;
}

impl CareerEndpoint for WorkExperience {
    const PATH: &'static str = "/api/admin/work-experiences";
    const NOT_FOUND: NotFoundBody = NotFoundBody {
        code: "WORK_EXPERIENCE_NOT_FOUND",
        message: "Work experience not found",
    };
}

impl CareerEndpoint for Recognition {
    const PATH: &'static str = "/api/admin/recognitions";
    const NOT_FOUND: NotFoundBody = NotFoundBody {
        code: "RECOGNITION_NOT_FOUND",
        message: "Recognition not found",
    };
}

impl CareerEndpoint for CompletedCourse {
    const PATH: &'static str = "/api/admin/completed-courses";
    const NOT_FOUND: NotFoundBody = NotFoundBody {
        code: "COMPLETED_COURSE_NOT_FOUND",
        message: "Completed course not found",
    };
}

impl CareerEndpoint for AcademicProduct {
    const PATH: &'static str = "/api/admin/academic-products";
    const NOT_FOUND: NotFoundBody = NotFoundBody {
        code: "ACADEMIC_PRODUCT_NOT_FOUND",
        message: "Academic product not found",
    };
}

impl CareerEndpoint for WorkProduct {
    const PATH: &'static str = "/api/admin/work-products";
    const NOT_FOUND: NotFoundBody = NotFoundBody {
        code: "WORK_PRODUCT_NOT_FOUND",
        message: "Work product not found",
    };
}

impl CareerEndpoint for GarageSaleItem {
    const PATH: &'static str = "/api/admin/garage-sale-items";
    const NOT_FOUND: NotFoundBody = NotFoundBody {
        code: "GARAGE_SALE_ITEM_NOT_FOUND",
        message: "Garage sale item not found",
    };
}
