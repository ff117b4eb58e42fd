use actix_web::{get, web, Responder};
use tracing::error;

use super::PROFILE_NOT_FOUND;
use crate::modules::profile::application::ports::incoming::use_cases::SectionVisibilityError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get-or-create: a profile whose row was never created gets one with every
/// section shown.
#[utoipa::path(
    get,
    path = "/api/admin/profiles/{id}/section-visibility",
    tag = "Profiles",
    params(("id" = i32, Path, description = "Profile id")),
    responses(
        (status = 200, description = "Section visibility of the profile"),
        (status = 404, description = "Profile not found")
    )
)]
#[get("/api/admin/profiles/{id}/section-visibility")]
pub async fn get_section_visibility_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.profile.ensure_visibility.execute(path.into_inner()).await {
        Ok(visibility) => ApiResponse::success(visibility),
        Err(SectionVisibilityError::ProfileNotFound) => {
            ApiResponse::not_found(PROFILE_NOT_FOUND.code, PROFILE_NOT_FOUND.message)
        }
        Err(SectionVisibilityError::RepositoryError(e)) => {
            error!("Repository error fetching section visibility: {}", e);
            ApiResponse::internal_error()
        }
    }
}
