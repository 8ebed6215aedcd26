pub mod error_response;
pub mod middleware;
pub mod routes;

use axum::{
    middleware as axum_middleware,
    routing::{get, get_service, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use std::path::Path;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::database::activity_catalog_repo::ActivityCatalog;
use crate::services::activities_service::SignupPolicy;
use routes::activities;

/// Shared handler state. The catalog is built once at startup and every
/// request works against the same instance.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<ActivityCatalog>,
    pub signup_policy: Arc<SignupPolicy>,
}

impl AppState {
    pub fn new(catalog: ActivityCatalog, signup_policy: SignupPolicy) -> Self {
        Self {
            catalog: Arc::new(catalog),
            signup_policy: Arc::new(signup_policy),
        }
    }
}

pub fn build_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(activities::root_redirect))
        .route("/health", get(activities::health_handler))
        .route("/activities", get(activities::list_activities_handler))
        .route(
            "/activities/:activity_name",
            get(activities::get_activity_handler),
        )
        .route(
            "/activities/:activity_name/signup",
            post(activities::signup_handler),
        )
        // Static front-end
        .nest_service(
            "/static",
            get_service(ServeDir::new(static_dir.as_ref())),
        )
        // Layers, innermost first
        .layer(CatchPanicLayer::custom(error_response::panic_response))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(axum_middleware::from_fn(middleware::request_log::log_request))
        .with_state(state)
}
