use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use super::CareerEndpoint;
use crate::modules::admin::adapter::incoming::web::save_error_response;
use crate::modules::career::application::ports::incoming::use_cases::CareerFactError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct CareerListQuery {
    /// Only records of this profile.
    pub profile_id: Option<i32>,
}

fn query_error_response<T: CareerEndpoint>(e: CareerFactError) -> HttpResponse {
    match e {
        CareerFactError::NotFound => ApiResponse::not_found(T::NOT_FOUND.code, T::NOT_FOUND.message),
        CareerFactError::RepositoryError(msg) => {
            error!(path = T::PATH, error = %msg, "repository error on career record");
            ApiResponse::internal_error()
        }
    }
}

pub async fn create_career_fact<T: CareerEndpoint>(
    req: web::Json<T::Form>,
    data: web::Data<AppState>,
) -> HttpResponse {
    match T::slot(&data.career).create(req.into_inner()).await {
        Ok(outcome) => ApiResponse::created(outcome),
        Err(e) => save_error_response(e, T::NOT_FOUND),
    }
}

pub async fn update_career_fact<T: CareerEndpoint>(
    path: web::Path<i32>,
    req: web::Json<T::Form>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let id = path.into_inner();

    match T::slot(&data.career).update(id, req.into_inner()).await {
        Ok(outcome) => ApiResponse::success(outcome),
        Err(e) => save_error_response(e, T::NOT_FOUND),
    }
}

pub async fn list_career_facts<T: CareerEndpoint>(
    query: web::Query<CareerListQuery>,
    data: web::Data<AppState>,
) -> HttpResponse {
    match T::slot(&data.career).list(query.profile_id).await {
        Ok(records) => ApiResponse::success(records),
        Err(e) => query_error_response::<T>(e),
    }
}

pub async fn get_career_fact<T: CareerEndpoint>(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> HttpResponse {
    match T::slot(&data.career).get(path.into_inner()).await {
        Ok(record) => ApiResponse::success(record),
        Err(e) => query_error_response::<T>(e),
    }
}

pub async fn delete_career_fact<T: CareerEndpoint>(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> HttpResponse {
    match T::slot(&data.career).delete(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => query_error_response::<T>(e),
    }
}
