use std::sync::Arc;

use axum::{extract::Extension, response::IntoResponse, Json};

use crate::app::dto::HealthResponse;
use crate::app::services::AppServices;

pub async fn health(Extension(services): Extension<Arc<AppServices>>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "active",
        service: "InvTrackPro",
        region: services.region().to_string(),
        storage: if services.storage_reachable().await { "established" } else { "broken" },
    })
}

pub async fn dashboard(Extension(services): Extension<Arc<AppServices>>) -> impl IntoResponse {
    Json(services.dashboard().await)
}
