mod career_endpoint;
mod career_handlers;

pub use career_endpoint::CareerEndpoint;
pub use career_handlers::{
    create_career_fact, delete_career_fact, get_career_fact, list_career_facts,
    update_career_fact, CareerListQuery,
};

use actix_web::{web, Scope};

use crate::modules::career::application::domain::entities::{
    AcademicProduct, CompletedCourse, GarageSaleItem, Recognition, WorkExperience, WorkProduct,
};

/// CRUD routes of one career fact type under its admin path.
pub fn career_scope<T: CareerEndpoint>() -> Scope {
    web::scope(T::PATH)
        .route("", web::get().to(list_career_facts::<T>))
        .route("", web::post().to(create_career_fact::<T>))
        .route("/{id}", web::get().to(get_career_fact::<T>))
        .route("/{id}", web::put().to(update_career_fact::<T>))
        .route("/{id}", web::delete().to(delete_career_fact::<T>))
}

pub fn configure_career_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(career_scope::<WorkExperience>())
        .service(career_scope::<Recognition>())
        .service(career_scope::<CompletedCourse>())
        .service(career_scope::<AcademicProduct>())
        .service(career_scope::<WorkProduct>())
        .service(career_scope::<GarageSaleItem>());
}
