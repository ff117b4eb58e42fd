use actix_web::{put, web, Responder};

use super::PROFILE_NOT_FOUND;
use crate::modules::admin::adapter::incoming::web::save_error_response;
use crate::modules::profile::application::forms::ProfileForm;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    put,
    path = "/api/admin/profiles/{id}",
    tag = "Profiles",
    params(("id" = i32, Path, description = "Profile id")),
    request_body = ProfileForm,
    responses(
        (status = 200, description = "Profile updated"),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Profile not found")
    )
)]
#[put("/api/admin/profiles/{id}")]
pub async fn update_profile_handler(
    path: web::Path<i32>,
    req: web::Json<ProfileForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.profile.save.update(id, req.into_inner()).await {
        Ok(outcome) => ApiResponse::success(outcome),
        Err(e) => save_error_response(e, PROFILE_NOT_FOUND),
    }
}
