use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::public_cv::application::domain::PublicCv;
use crate::modules::public_cv::application::ports::incoming::use_cases::GetPublicCvError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/public/profiles/{id}/cv",
    tag = "Public CV",
    params(("id" = i32, Path, description = "Profile id")),
    responses(
        (status = 200, description = "Published CV with its visible sections", body = PublicCv),
        (status = 404, description = "Profile not found or not published")
    )
)]
#[get("/api/public/profiles/{id}/cv")]
pub async fn get_public_cv_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.public_cv.get_cv.execute(path.into_inner()).await {
        Ok(cv) => ApiResponse::success(cv),
        Err(GetPublicCvError::NotFound) => {
            ApiResponse::not_found("CV_NOT_FOUND", "CV not found")
        }
        Err(GetPublicCvError::RepositoryError(e)) => {
            error!("Repository error assembling public cv: {}", e);
            ApiResponse::internal_error()
        }
    }
}
