use actix_web::{get, web, Responder};
use tracing::error;

use super::PROFILE_NOT_FOUND;
use crate::modules::profile::application::ports::incoming::use_cases::GetSingleProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/admin/profiles/{id}",
    tag = "Profiles",
    params(("id" = i32, Path, description = "Profile id")),
    responses(
        (status = 200, description = "Profile found"),
        (status = 404, description = "Profile not found")
    )
)]
#[get("/api/admin/profiles/{id}")]
pub async fn get_single_profile_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.profile.get_single.execute(path.into_inner()).await {
        Ok(profile) => ApiResponse::success(profile),
        Err(GetSingleProfileError::NotFound) => {
            ApiResponse::not_found(PROFILE_NOT_FOUND.code, PROFILE_NOT_FOUND.message)
        }
        Err(GetSingleProfileError::RepositoryError(e)) => {
            error!("Repository error fetching profile: {}", e);
            ApiResponse::internal_error()
        }
    }
}
