use std::sync::Arc;

use axum::{extract::Extension, response::IntoResponse, Json};

use crate::app::dto::InsightsResponse;
use crate::app::services::AppServices;

/// Forecast the whole inventory. Responds once every item has a result;
/// items whose inference failed carry the fallback forecast.
pub async fn list_insights(Extension(services): Extension<Arc<AppServices>>) -> impl IntoResponse {
    let outcomes = services.insights().await;
    Json(InsightsResponse::new(services.model_id(), outcomes))
}
