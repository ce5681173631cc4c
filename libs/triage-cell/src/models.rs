// =====================================================================================
// TRIAGE CELL MODELS
// =====================================================================================

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use shared_config::AppConfig;
use shared_models::error::AppError;

// =====================================================================================
// CLASSIFICATION MODELS
// =====================================================================================

/// Overall severity of a single turn. Variant order is the escalation order.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    #[default]
    Low,
    Moderate,
    High,
    Emergency,
}

impl Severity {
    /// Numeric urgency attached to service suggestions (1 = routine, 4 = immediate).
    pub fn urgency(&self) -> u8 {
        match self {
            Severity::Low => 1,
            Severity::Moderate => 2,
            Severity::High => 3,
            Severity::Emergency => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "LOW",
            Severity::Moderate => "MODERATE",
            Severity::High => "HIGH",
            Severity::Emergency => "EMERGENCY",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Emotional urgency of the phrasing, independent of clinical severity.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sentiment {
    #[default]
    Calm,
    Concerned,
    Anxious,
    Urgent,
}

/// Dictionary matches pulled out of one message.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Extraction {
    pub symptoms: BTreeSet<String>,
    pub body_parts: BTreeSet<String>,
    pub duration: Option<String>,
    pub triggers: BTreeSet<String>,
    pub medical_terms: BTreeSet<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SymptomAnalysis {
    pub symptoms: BTreeSet<String>,
    pub body_parts: BTreeSet<String>,
    pub severity: Severity,
    pub duration: Option<String>,
    pub triggers: BTreeSet<String>,
    pub sentiment: Sentiment,
    pub medical_terms: BTreeSet<String>,
    pub confidence: f64,
}

impl SymptomAnalysis {
    pub fn from_parts(extraction: Extraction, severity: Severity, sentiment: Sentiment, confidence: f64) -> Self {
        Self {
            symptoms: extraction.symptoms,
            body_parts: extraction.body_parts,
            severity,
            duration: extraction.duration,
            triggers: extraction.triggers,
            sentiment,
            medical_terms: extraction.medical_terms,
            confidence,
        }
    }

    pub fn has_symptoms(&self) -> bool {
        !self.symptoms.is_empty()
    }

    pub fn symptom_count(&self) -> usize {
        self.symptoms.len()
    }
}

/// Analysis plus the flag raised when the input had to be cut down.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisOutcome {
    pub analysis: SymptomAnalysis,
    pub truncated: bool,
}

// =====================================================================================
// RESPONSE MODELS
// =====================================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SuggestionKind {
    Emergency,
    Doctor,
    FollowUp,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceSuggestion {
    pub kind: SuggestionKind,
    pub reason: String,
    pub urgency: u8,
    pub suggested_action: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Response {
    pub content: String,
    pub suggested_actions: Vec<String>,
    pub requires_follow_up: bool,
    pub follow_up_questions: Vec<String>,
    pub suggestions: Vec<ServiceSuggestion>,
}

// =====================================================================================
// CARE PATHWAY MODELS
// =====================================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CarePathway {
    SelfCare,
    Referral,
    Urgent,
    Emergency,
}

impl CarePathway {
    pub fn colour_code(&self) -> &'static str {
        match self {
            CarePathway::SelfCare => "GREEN",
            CarePathway::Referral => "YELLOW",
            CarePathway::Urgent => "AMBER",
            CarePathway::Emergency => "RED",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CarePathway::SelfCare => "self-care",
            CarePathway::Referral => "book an appointment",
            CarePathway::Urgent => "urgent care",
            CarePathway::Emergency => "emergency care",
        }
    }
}

impl From<Severity> for CarePathway {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Low => CarePathway::SelfCare,
            Severity::Moderate => CarePathway::Referral,
            Severity::High => CarePathway::Urgent,
            Severity::Emergency => CarePathway::Emergency,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionPlan {
    pub pathway: CarePathway,
    pub colour_code: String,
    pub urgency: String,
    pub specialization: String,
    pub instructions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TriageSummary {
    pub patient_summary: String,
    pub clinician_summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TriageReport {
    pub analysis: SymptomAnalysis,
    pub response: Response,
    pub action_plan: ActionPlan,
    pub summary: TriageSummary,
    pub disclaimer: String,
    pub needs_escalation: bool,
    pub needs_more_info: bool,
    pub input_truncated: bool,
}

// =====================================================================================
// CONFIGURATION MODELS
// =====================================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct TriageConfig {
    pub max_input_chars: usize,
    pub history_window: usize,
    pub consultation_min_messages: usize,
    pub max_follow_up_questions: usize,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            max_input_chars: 2000,
            history_window: 10,
            consultation_min_messages: 6,
            max_follow_up_questions: 3,
        }
    }
}

impl TriageConfig {
    pub fn validate(&self) -> Result<(), TriageError> {
        if self.max_input_chars == 0 {
            return Err(TriageError::InvalidConfig("max_input_chars must be greater than zero".to_string()));
        }
        if self.history_window == 0 {
            return Err(TriageError::InvalidConfig("history_window must be greater than zero".to_string()));
        }
        Ok(())
    }
}

impl From<&AppConfig> for TriageConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            max_input_chars: config.max_input_chars,
            history_window: config.history_window,
            consultation_min_messages: config.consultation_min_messages,
            ..Self::default()
        }
    }
}

// =====================================================================================
// REQUEST/RESPONSE MODELS
// =====================================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub history: Option<Value>,
    pub conversation_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub case_id: String,
    #[serde(flatten)]
    pub report: TriageReport,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ConsultationCompleteRequest {
    #[serde(default)]
    pub message: Option<String>,
    pub message_count: i64,
}

#[derive(Debug, Serialize)]
pub struct ConsultationCompleteResponse {
    pub complete: bool,
    pub message_count: i64,
}

#[derive(Debug, Serialize)]
pub struct TriageHealthResponse {
    pub status: String,
    pub service: String,
    pub max_input_chars: usize,
    pub history_window: usize,
    pub vocabulary_version: u32,
}

// =====================================================================================
// ERROR MODELS
// =====================================================================================

#[derive(Debug, thiserror::Error)]
pub enum TriageError {
    #[error("Invalid triage configuration: {0}")]
    InvalidConfig(String),
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl From<TriageError> for AppError {
    fn from(error: TriageError) -> Self {
        match error {
            TriageError::InvalidConfig(msg) => AppError::Configuration(msg),
            TriageError::InvalidRequest(msg) => AppError::ValidationError(msg),
        }
    }
}
