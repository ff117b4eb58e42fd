use actix_web::{post, web, Responder};

use super::PROFILE_NOT_FOUND;
use crate::modules::admin::adapter::incoming::web::save_error_response;
use crate::modules::profile::application::forms::ProfileForm;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/admin/profiles",
    tag = "Profiles",
    request_body = ProfileForm,
    responses(
        (status = 201, description = "Profile created; `warnings` lists dropped attachments"),
        (status = 400, description = "Validation failed"),
        (status = 500, description = "Internal server error")
    )
)]
#[post("/api/admin/profiles")]
pub async fn create_profile_handler(
    req: web::Json<ProfileForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.profile.save.create(req.into_inner()).await {
        Ok(outcome) => ApiResponse::created(outcome),
        Err(e) => save_error_response(e, PROFILE_NOT_FOUND),
    }
}
