//! # Server Configuration
//!
//! This module contains the server setup and configuration for the
//! Marketplace API.

use axum::{
    Router,
    extract::Request,
    middleware::{self, Next},
    response::Response,
    routing::{delete, get, post},
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use uuid::Uuid;

use crate::catalog::ProviderCatalog;
use crate::config::AppConfig;
use crate::handlers;
use crate::telemetry::{self, TraceContext};

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub catalog: ProviderCatalog,
}

impl AppState {
    /// Builds the state from a connection pool, wiring the catalog on top of it
    pub fn new(db: DatabaseConnection) -> Self {
        let catalog = ProviderCatalog::new(Arc::new(db.clone()));
        Self { db, catalog }
    }
}

/// Creates an AppState for tests without going through server startup
pub fn create_test_app_state(db: DatabaseConnection) -> AppState {
    AppState::new(db)
}

/// Assigns each request a correlation ID, visible to error responses through
/// the task-local trace context.
async fn with_request_trace(request: Request, next: Next) -> Response {
    let context = TraceContext {
        trace_id: Uuid::new_v4().to_string(),
    };
    telemetry::with_trace_context(context, next.run(request)).await
}

/// Creates and configures the Axum application router
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health::health))
        .route("/providers", post(handlers::providers::create_provider))
        .route(
            "/providers/{id}",
            get(handlers::providers::get_provider)
                .patch(handlers::providers::update_provider)
                .delete(handlers::providers::delete_provider),
        )
        .route(
            "/providers/{id}/services",
            post(handlers::providers::create_provider_service),
        )
        .route("/services/{id}", delete(handlers::services::delete_service))
        .layer(middleware::from_fn(with_request_trace))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
}

/// Starts the server with the given configuration
pub async fn run_server(
    config: AppConfig,
    db: DatabaseConnection,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = AppState::new(db);
    let app = create_app(state);

    // Resolve the configured bind address
    let addr = config
        .bind_addr()
        .map_err(|e| format!("Invalid server address: {}", e))?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, profile = %config.profile, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::root,
        crate::handlers::health::health,
        crate::handlers::providers::create_provider,
        crate::handlers::providers::get_provider,
        crate::handlers::providers::update_provider,
        crate::handlers::providers::delete_provider,
        crate::handlers::providers::create_provider_service,
        crate::handlers::services::delete_service,
    ),
    components(
        schemas(
            crate::models::ServiceInfo,
            crate::models::ServiceCategory,
            crate::models::dto::CreateProviderProfileDto,
            crate::models::dto::UpdateProviderProfileDto,
            crate::models::dto::CreateServiceItemDto,
            crate::models::dto::ProviderProfileInfo,
            crate::models::dto::ProviderServiceInfo,
            crate::models::dto::ProviderDetailsResponse,
            crate::handlers::health::HealthResponse,
        )
    ),
    info(
        title = "Vehicle Service Marketplace API",
        description = "API for provider profiles and their service catalogs",
        version = env!("CARGO_PKG_VERSION"),
    )
)]
pub struct ApiDoc;
