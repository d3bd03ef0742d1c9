use axum::{routing::get, Router};

pub mod insights;
pub mod inventory;
pub mod session;
pub mod system;

/// Router for everything under `/api`.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .route("/dashboard", get(system::dashboard))
        .route("/insights", get(insights::list_insights))
        .nest("/inventory", inventory::router())
        .nest("/session", session::router())
}
