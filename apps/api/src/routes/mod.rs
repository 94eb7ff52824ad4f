pub mod health;
pub mod upload;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/upload-pdf/", post(upload::handle_upload_pdf))
        .route("/upload-pdf", post(upload::handle_upload_pdf))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
