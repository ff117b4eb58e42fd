use actix_web::{put, web, Responder};
use tracing::error;

use super::PROFILE_NOT_FOUND;
use crate::modules::profile::application::domain::entities::SectionVisibilityFlags;
use crate::modules::profile::application::ports::incoming::use_cases::SectionVisibilityError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    put,
    path = "/api/admin/profiles/{id}/section-visibility",
    tag = "Profiles",
    params(("id" = i32, Path, description = "Profile id")),
    request_body = SectionVisibilityFlags,
    responses(
        (status = 200, description = "Flags saved"),
        (status = 404, description = "Profile not found")
    )
)]
#[put("/api/admin/profiles/{id}/section-visibility")]
pub async fn update_section_visibility_handler(
    path: web::Path<i32>,
    req: web::Json<SectionVisibilityFlags>,
    data: web::Data<AppState>,
) -> impl Responder {
    let profile_id = path.into_inner();

    match data
        .profile
        .update_visibility
        .execute(profile_id, req.into_inner())
        .await
    {
        Ok(visibility) => ApiResponse::success(visibility),
        Err(SectionVisibilityError::ProfileNotFound) => {
            ApiResponse::not_found(PROFILE_NOT_FOUND.code, PROFILE_NOT_FOUND.message)
        }
        Err(SectionVisibilityError::RepositoryError(e)) => {
            error!("Repository error updating section visibility: {}", e);
            ApiResponse::internal_error()
        }
    }
}
