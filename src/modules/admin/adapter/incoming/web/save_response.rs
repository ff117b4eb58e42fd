use actix_web::HttpResponse;
use tracing::error;

use crate::modules::admin::application::save_workflow::SaveError;
use crate::shared::api::ApiResponse;

/// Error code and message returned when the edited record does not exist.
#[derive(Debug, Clone, Copy)]
pub struct NotFoundBody {
    pub code: &'static str,
    pub message: &'static str,
}

/// Maps a failed admin save onto the response envelope.
pub fn save_error_response(err: SaveError, not_found: NotFoundBody) -> HttpResponse {
    match err {
        SaveError::Rejected(errors) => ApiResponse::validation_failed(&errors),
        SaveError::NotFound => ApiResponse::not_found(not_found.code, not_found.message),
        SaveError::Repository(msg) => {
            error!(error = %msg, "repository error during admin save");
            ApiResponse::internal_error()
        }
    }
}
