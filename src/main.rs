pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::multimedia;

use crate::config::AppConfig;
use crate::modules::admin::application::save_workflow::SaveWorkflow;
use crate::modules::admin::application::upload_failure_policy::UploadFailurePolicies;
use crate::modules::career::adapter::incoming::web::routes::configure_career_routes;
use crate::modules::career::adapter::outgoing::{CareerRepositoryPostgres, CareerTable};
use crate::modules::career::application::career_use_cases::CareerUseCases;
use crate::modules::career::application::domain::entities::{
    AcademicProduct, CompletedCourse, GarageSaleItem, Recognition, WorkExperience, WorkProduct,
};
use crate::modules::career::application::ports::incoming::use_cases::CareerFactUseCase;
use crate::modules::career::application::ports::outgoing::CareerRepository;
use crate::modules::career::application::service::CareerFactService;
use crate::modules::profile::adapter::outgoing::{
    ProfileRepositoryPostgres, SectionVisibilityRepositoryPostgres,
};
use crate::modules::profile::application::ports::incoming::use_cases::EnsureSectionVisibilityUseCase;
use crate::modules::profile::application::profile_use_cases::ProfileUseCases;
use crate::modules::profile::application::service::{
    DeleteProfileService, EnsureSectionVisibilityService, GetProfilesService,
    GetSingleProfileService, SaveProfileService, UpdateSectionVisibilityService,
};
use crate::modules::public_cv::application::public_cv_use_cases::PublicCvUseCases;
use crate::modules::public_cv::application::service::{CareerReaders, GetPublicCvService};
use crate::multimedia::adapter::outgoing::cloud_storage::GcsAssetStorage;
use crate::multimedia::application::domain::policies::upload_policy::UploadPolicy;
use crate::multimedia::application::ports::incoming::services::PersistUploadedAssetService;
use crate::shared::api::custom_json_config;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub profile: ProfileUseCases,
    pub career: CareerUseCases,
    pub public_cv: PublicCvUseCases,
}

fn career_use_case<T>(
    db: &Arc<DatabaseConnection>,
    workflow: &Arc<SaveWorkflow>,
) -> Arc<dyn CareerFactUseCase<T> + Send + Sync>
where
    T: CareerTable,
    CareerRepositoryPostgres<T>: CareerRepository<T>,
{
    Arc::new(CareerFactService::new(
        CareerRepositoryPostgres::<T>::new(Arc::clone(db)),
        Arc::clone(workflow),
    ))
}

fn build_state(db: &Arc<DatabaseConnection>, workflow: Arc<SaveWorkflow>) -> AppState {
    let profile_repo = ProfileRepositoryPostgres::new(Arc::clone(db));
    let visibility_repo = SectionVisibilityRepositoryPostgres::new(Arc::clone(db));

    let ensure_visibility: Arc<dyn EnsureSectionVisibilityUseCase + Send + Sync> =
        Arc::new(EnsureSectionVisibilityService::new(visibility_repo.clone()));

    let profile = ProfileUseCases {
        save: Arc::new(SaveProfileService::new(
            profile_repo.clone(),
            Arc::clone(&workflow),
            Arc::clone(&ensure_visibility),
        )),
        get_list: Arc::new(GetProfilesService::new(profile_repo.clone())),
        get_single: Arc::new(GetSingleProfileService::new(profile_repo.clone())),
        delete: Arc::new(DeleteProfileService::new(profile_repo.clone())),
        ensure_visibility,
        update_visibility: Arc::new(UpdateSectionVisibilityService::new(
            visibility_repo.clone(),
        )),
    };

    let career = CareerUseCases {
        work_experiences: career_use_case(db, &workflow),
        recognitions: career_use_case(db, &workflow),
        completed_courses: career_use_case(db, &workflow),
        academic_products: career_use_case(db, &workflow),
        work_products: career_use_case(db, &workflow),
        garage_sale_items: career_use_case(db, &workflow),
    };

    let readers = CareerReaders {
        work_experiences: Arc::new(CareerRepositoryPostgres::<WorkExperience>::new(Arc::clone(db))),
        recognitions: Arc::new(CareerRepositoryPostgres::<Recognition>::new(Arc::clone(db))),
        completed_courses: Arc::new(CareerRepositoryPostgres::<CompletedCourse>::new(Arc::clone(db))),
        academic_products: Arc::new(CareerRepositoryPostgres::<AcademicProduct>::new(Arc::clone(db))),
        work_products: Arc::new(CareerRepositoryPostgres::<WorkProduct>::new(Arc::clone(db))),
        garage_sale_items: Arc::new(CareerRepositoryPostgres::<GarageSaleItem>::new(Arc::clone(db))),
    };

    let public_cv = PublicCvUseCases {
        get_cv: Arc::new(GetPublicCvService::new(profile_repo, visibility_repo, readers)),
    };

    AppState {
        profile,
        career,
        public_cv,
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env().context("invalid server configuration")?;
    let upload_policy = UploadPolicy::from_env();
    let failure_policies =
        UploadFailurePolicies::from_env().context("invalid upload failure policy")?;

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(20)
        .min_connections(2)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("failed to connect to database")?;

    if config.run_migrations {
        info!("Running pending migrations");
        Migrator::up(&conn, None)
            .await
            .context("failed to run migrations")?;
    }

    let db_arc = Arc::new(conn);

    info!(
        bucket = %upload_policy.bucket_name,
        "asset uploads go to cloud storage"
    );
    let storage = GcsAssetStorage::new(upload_policy.clone());
    let uploader = PersistUploadedAssetService::new(storage, upload_policy);
    let workflow = Arc::new(SaveWorkflow::new(Arc::new(uploader), failure_policies));

    let state = build_state(&db_arc, workflow);

    let server_url = config.server_url();
    info!(%server_url, "Server listening");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", api::openapi::ApiDoc::openapi()),
            )
            .configure(init_routes)
    })
    .bind(&server_url)
    .with_context(|| format!("failed to bind {server_url}"))?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::modules::profile::adapter::incoming::web::routes as profile;
    use crate::modules::public_cv::adapter::incoming::web::routes as public_cv;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Profiles
    cfg.service(profile::create_profile_handler);
    cfg.service(profile::get_profiles_handler);
    cfg.service(profile::get_single_profile_handler);
    cfg.service(profile::update_profile_handler);
    cfg.service(profile::delete_profile_handler);
    cfg.service(profile::get_section_visibility_handler);
    cfg.service(profile::update_section_visibility_handler);
    // Career facts
    configure_career_routes(cfg);
    // Public
    cfg.service(public_cv::get_public_cv_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
