use std::sync::Arc;

use crate::config::Config;
use crate::structuring::ResumeStructurer;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no per-request data; every upload is independent.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Structuring service, built once at startup with the configured credential.
    pub structurer: Arc<ResumeStructurer>,
}
