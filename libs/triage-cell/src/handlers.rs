// =====================================================================================
// TRIAGE CELL HANDLERS - HTTP ENDPOINTS
// =====================================================================================

use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::Value;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use shared_config::AppConfig;
use shared_models::conversation::{parse_history, Message};
use shared_models::error::AppError;
use shared_utils::extractor::JsonBody;

use crate::models::{
    AnalysisOutcome, AnalyzeRequest, ChatRequest, ChatResponse, ConsultationCompleteRequest,
    ConsultationCompleteResponse, Severity, TriageError, TriageHealthResponse,
};
use crate::services::vocabulary::VOCABULARY_VERSION;
use crate::services::TriageEngine;

pub struct TriageHandlers {
    pub engine: Arc<TriageEngine>,
}

impl TriageHandlers {
    pub fn new(config: &AppConfig) -> Result<Self, TriageError> {
        let engine = Arc::new(TriageEngine::from_app_config(config)?);

        Ok(Self { engine })
    }
}

// =====================================================================================
// HEALTH CHECK ENDPOINTS
// =====================================================================================

pub async fn get_triage_health(State(handlers): State<Arc<TriageHandlers>>) -> Json<TriageHealthResponse> {
    let config = handlers.engine.config();

    Json(TriageHealthResponse {
        status: "healthy".to_string(),
        service: "triage-engine".to_string(),
        max_input_chars: config.max_input_chars,
        history_window: config.history_window,
        vocabulary_version: VOCABULARY_VERSION,
    })
}

// =====================================================================================
// CLASSIFICATION ENDPOINTS
// =====================================================================================

#[instrument(skip_all)]
pub async fn analyze_message(
    State(handlers): State<Arc<TriageHandlers>>,
    JsonBody(request): JsonBody<AnalyzeRequest>,
) -> Result<Json<AnalysisOutcome>, AppError> {
    let message = request.message.unwrap_or_default();
    let outcome = handlers.engine.analyze(&message);

    if outcome.truncated {
        warn!(
            "Message of {} chars truncated to {} before analysis",
            message.chars().count(),
            handlers.engine.config().max_input_chars
        );
    }

    debug!(
        "Analyzed message: severity={}, symptoms={}, confidence={:.2}",
        outcome.analysis.severity,
        outcome.analysis.symptom_count(),
        outcome.analysis.confidence
    );

    Ok(Json(outcome))
}

#[instrument(skip_all)]
pub async fn triage_chat(
    State(handlers): State<Arc<TriageHandlers>>,
    JsonBody(request): JsonBody<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let message = request.message.unwrap_or_default();
    let history = read_history(request.history.as_ref());
    let case_id = request
        .conversation_id
        .filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let report = handlers.engine.triage(&message, &history);

    if report.input_truncated {
        warn!(
            "Case {}: message of {} chars truncated to {}",
            case_id,
            message.chars().count(),
            handlers.engine.config().max_input_chars
        );
    }

    if report.analysis.severity == Severity::Emergency {
        warn!("Case {}: emergency severity detected, escalation required", case_id);
    } else {
        info!(
            "Case {}: triaged as {} ({} symptoms, follow-up: {})",
            case_id,
            report.analysis.severity,
            report.analysis.symptom_count(),
            report.response.requires_follow_up
        );
    }

    Ok(Json(ChatResponse { case_id, report }))
}

#[instrument(skip_all)]
pub async fn consultation_complete(
    State(handlers): State<Arc<TriageHandlers>>,
    JsonBody(request): JsonBody<ConsultationCompleteRequest>,
) -> Result<Json<ConsultationCompleteResponse>, AppError> {
    let message_count = usize::try_from(request.message_count).map_err(|_| {
        TriageError::InvalidRequest(format!(
            "message_count must not be negative, got {}",
            request.message_count
        ))
    })?;

    let message = request.message.unwrap_or_default();
    let complete = handlers.engine.is_consultation_complete(&message, message_count);

    if complete {
        info!("Consultation marked complete after {} messages", message_count);
    }

    Ok(Json(ConsultationCompleteResponse {
        complete,
        message_count: request.message_count,
    }))
}

/// Malformed history degrades to whatever entries could be read.
fn read_history(raw: Option<&Value>) -> Vec<Message> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    let history = parse_history(raw);
    let supplied = raw.as_array().map_or(0, Vec::len);

    if !raw.is_array() && !raw.is_null() {
        debug!("Ignoring conversation history that is not an array");
    } else if history.len() < supplied {
        debug!("Dropped {} malformed history entries", supplied - history.len());
    }

    history
}
