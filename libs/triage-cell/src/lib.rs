// =====================================================================================
// TRIAGE CELL - RULE-BASED SYMPTOM CLASSIFICATION & RESPONSE ENGINE
// =====================================================================================
//
// Turns one patient message (plus a short window of conversation history) into:
// - a SymptomAnalysis: symptoms, body parts, duration, triggers, severity,
//   sentiment, medical terms and a confidence score
// - a templated Response with follow-up questions and service suggestions
// - a care pathway, action plan and patient/clinician summaries
//
// The engine is pure and synchronous. The router exposes it over HTTP.
//
// =====================================================================================

pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

// Re-export commonly used types
pub use models::{
    ActionPlan, AnalysisOutcome, CarePathway, Extraction, Response, Sentiment, ServiceSuggestion, Severity,
    SuggestionKind, SymptomAnalysis, TriageConfig, TriageError, TriageReport, TriageSummary,
};

pub use services::{
    analyze_text, classify_sentiment, classify_severity, extract, generate, is_consultation_complete,
    TriageEngine,
};

pub use shared_models::conversation::{parse_history, Message, Role};

pub use router::triage_routes;
