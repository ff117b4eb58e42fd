use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::profile::application::ports::incoming::use_cases::GetProfilesError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/admin/profiles",
    tag = "Profiles",
    responses(
        (status = 200, description = "Every profile, ordered by id"),
        (status = 500, description = "Internal server error")
    )
)]
#[get("/api/admin/profiles")]
pub async fn get_profiles_handler(data: web::Data<AppState>) -> impl Responder {
    match data.profile.get_list.execute().await {
        Ok(profiles) => ApiResponse::success(profiles),
        Err(GetProfilesError::RepositoryError(e)) => {
            error!("Repository error listing profiles: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::sample_profile;
    use crate::tests::support::stubs::StubGetProfilesUseCase;

    #[actix_web::test]
    async fn test_get_profiles_success() {
        let app_state = TestAppStateBuilder::default()
            .with_get_profiles(StubGetProfilesUseCase::success(vec![
                sample_profile(1),
                sample_profile(2),
            ]))
            .build();

        let app = test::init_service(App::new().app_data(app_state).service(get_profiles_handler)).await;

        let req = test::TestRequest::get().uri("/api/admin/profiles").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 2);
        assert_eq!(body["data"][0]["birth_date"], "2000-05-01");
    }

    #[actix_web::test]
    async fn test_get_profiles_repository_error() {
        let app_state = TestAppStateBuilder::default()
            .with_get_profiles(StubGetProfilesUseCase::error(
                GetProfilesError::RepositoryError("db down".into()),
            ))
            .build();

        let app = test::init_service(App::new().app_data(app_state).service(get_profiles_handler)).await;

        let req = test::TestRequest::get().uri("/api/admin/profiles").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
