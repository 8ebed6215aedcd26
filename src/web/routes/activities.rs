use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

use crate::error::CatalogError;
use crate::models::{Activity, ActivityListing, SignupReceipt, SignupRequest};
use crate::services::activities_service;
use crate::web::error_response::rejection_response;
use crate::web::AppState;

pub const INDEX_PAGE: &str = "/static/index.html";

pub async fn root_redirect() -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, INDEX_PAGE)])
}

pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "status": "ok", "activities": state.catalog.len() }))
}

pub async fn list_activities_handler(
    State(state): State<AppState>,
) -> Result<Json<ActivityListing>, CatalogError> {
    activities_service::list_activities(&state.catalog).map(Json)
}

pub async fn get_activity_handler(
    Path(activity_name): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Activity>, CatalogError> {
    activities_service::get_activity(&state.catalog, &activity_name).map(Json)
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    State(state): State<AppState>,
    body: Result<Json<SignupRequest>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => return rejection_response(rejection),
    };

    match activities_service::signup_for_activity(
        &state.catalog,
        &state.signup_policy,
        &activity_name,
        &body.email,
    ) {
        Ok(receipt) => Json::<SignupReceipt>(receipt).into_response(),
        Err(e) => e.into_response(),
    }
}
