use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns a simple status object with service version and whether the
/// structuring credential is present.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "portfolio-api",
        "llm_configured": state.structurer.is_configured()
    }))
}

/// GET /
/// Service banner listing the public endpoints.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "PDF to Portfolio Generator API",
        "endpoints": ["/upload-pdf/", "/health"]
    }))
}
