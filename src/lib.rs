// Library exports for the api binary and the integration tests
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{routing::get, Router};
use sqlx::PgPool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use config::{Config, Environment};
use models::employee::{CreateEmployeeRequest, Employee, UpdateEmployeeRequest};
use models::family_contact::FamilyContact;
use models::patient::PatientWithContacts;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Arc<Config>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::employees::list_employees,
        routes::employees::get_employee,
        routes::employees::create_employee,
        routes::employees::update_employee,
        routes::employees::delete_employee,
        routes::patients::list_patients,
    ),
    components(schemas(
        Employee,
        CreateEmployeeRequest,
        UpdateEmployeeRequest,
        PatientWithContacts,
        FamilyContact
    ))
)]
struct ApiDoc;

/// Build the full application router. Swagger UI is mounted only in
/// development so production keeps the documentation surface closed.
pub fn app(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/health", get(routes::health::health_check))
        .route(
            "/employees",
            get(routes::employees::list_employees).post(routes::employees::create_employee),
        )
        .route(
            "/employees/{id}",
            get(routes::employees::get_employee)
                .put(routes::employees::update_employee)
                .delete(routes::employees::delete_employee),
        )
        .route("/patients", get(routes::patients::list_patients));

    if state.config.environment == Environment::Development {
        router = router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
