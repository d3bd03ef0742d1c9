//! The signed-in user record slot. No credentials are checked here; the
//! dashboard decides who is signed in and this only remembers it.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use invtrack_infra::User;

use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/", get(get_session).put(put_session).delete(delete_session))
}

pub async fn get_session(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    match services.current_user().await {
        Ok(user) => Json(user).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn put_session(
    Extension(services): Extension<Arc<AppServices>>,
    Json(user): Json<User>,
) -> axum::response::Response {
    match services.set_current_user(Some(user.clone())).await {
        Ok(()) => (StatusCode::OK, Json(user)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn delete_session(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    match services.set_current_user(None).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}
