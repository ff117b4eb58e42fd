use actix_web::{delete, web, Responder};
use tracing::error;

use super::PROFILE_NOT_FOUND;
use crate::modules::profile::application::ports::incoming::use_cases::DeleteProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    delete,
    path = "/api/admin/profiles/{id}",
    tag = "Profiles",
    params(("id" = i32, Path, description = "Profile id")),
    responses(
        (status = 204, description = "Profile and its career records deleted"),
        (status = 404, description = "Profile not found")
    )
)]
#[delete("/api/admin/profiles/{id}")]
pub async fn delete_profile_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.profile.delete.execute(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteProfileError::NotFound) => {
            ApiResponse::not_found(PROFILE_NOT_FOUND.code, PROFILE_NOT_FOUND.message)
        }
        Err(DeleteProfileError::RepositoryError(e)) => {
            error!("Repository error deleting profile: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::StubDeleteProfileUseCase;

    #[actix_web::test]
    async fn test_delete_profile_success() {
        let app_state = TestAppStateBuilder::default()
            .with_delete_profile(StubDeleteProfileUseCase::success())
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(delete_profile_handler),
        )
        .await;

        let req = test::TestRequest::delete().uri("/api/admin/profiles/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }

    #[actix_web::test]
    async fn test_delete_profile_not_found() {
        let app_state = TestAppStateBuilder::default()
            .with_delete_profile(StubDeleteProfileUseCase::error(DeleteProfileError::NotFound))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(delete_profile_handler),
        )
        .await;

        let req = test::TestRequest::delete().uri("/api/admin/profiles/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
