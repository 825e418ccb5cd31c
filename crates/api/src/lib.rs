//! HTTP API for the academic scheduling forms.
//!
//! Serves a liveness/status endpoint and one validation endpoint per form,
//! with structured logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;
use std::time::Instant;

use axum::Router;
use axum::routing::{get, post};
use forms::{AcademicYearForm, ClassroomForm, LearningTypeForm, Messages};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use routes::status::StatusReporter;

/// Shared, read-only application state accessible from all handlers.
#[derive(Debug)]
pub struct AppState {
    pub status: StatusReporter,
    pub messages: Messages,
}

impl AppState {
    pub fn new(status: StatusReporter, messages: Messages) -> Self {
        Self { status, messages }
    }
}

/// Creates the Axum application router with all routes and shared state.
pub fn create_app(state: Arc<AppState>, metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/status", get(routes::status::check))
        .route("/health", get(routes::status::check))
        .route(
            "/classrooms/validate",
            post(routes::validation::validate::<ClassroomForm>),
        )
        .route(
            "/learning-types/validate",
            post(routes::validation::validate::<LearningTypeForm>),
        )
        .route(
            "/academic-years/validate",
            post(routes::validation::validate::<AcademicYearForm>),
        )
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates application state with uptime measured from now and the default
/// message catalog.
pub fn create_default_state() -> Arc<AppState> {
    Arc::new(AppState::new(
        StatusReporter::new(Instant::now()),
        Messages::default(),
    ))
}
