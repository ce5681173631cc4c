// =====================================================================================
// TRIAGE CELL ROUTER
// =====================================================================================

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use shared_config::AppConfig;

use crate::handlers::{self, TriageHandlers};
use crate::models::TriageError;

pub fn triage_routes(config: Arc<AppConfig>) -> Result<Router, TriageError> {
    let handlers = Arc::new(TriageHandlers::new(&config)?);

    let router = Router::new()
        .route("/health", get(handlers::get_triage_health))
        .route("/analyze", post(handlers::analyze_message))
        .route("/chat", post(handlers::triage_chat))
        .route("/consultation/complete", post(handlers::consultation_complete))
        .with_state(handlers);

    Ok(router)
}
