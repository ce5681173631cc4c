// =====================================================================================
// RESPONDER - ADVICE, FOLLOW-UP QUESTIONS AND SERVICE SUGGESTIONS
// =====================================================================================

use shared_models::conversation::{Message, Role};

use crate::models::{Response, ServiceSuggestion, Severity, SuggestionKind, SymptomAnalysis};
use crate::services::severity;
use crate::services::templates::{self, TemplateFamily};
use crate::services::vocabulary::{
    self, DOCTOR_WORDS, EMERGENCY_SERVICE_WORDS, FOLLOW_UP_PHRASES,
};

pub const MAX_FOLLOW_UP_QUESTIONS: usize = 3;

pub const DURATION_QUESTION: &str = "How long have you been experiencing these symptoms?";
pub const LOCATION_QUESTION: &str = "Where exactly do you feel the discomfort?";
pub const TRIGGER_QUESTION: &str =
    "Have you noticed anything that makes it better or worse, such as eating, movement or time of day?";
pub const MEDICATION_QUESTION: &str = "Are you currently taking any medications, including for this problem?";
pub const HISTORY_QUESTION: &str = "Do you have any existing medical conditions, or have you had similar symptoms before?";

const FOLLOW_UP_HEADER: &str = "To help me understand your situation better:";

/// Builds the reply for one turn. `history` should already be cut down to the
/// recent window; it is only used to avoid repeating questions.
pub fn generate(text: &str, analysis: &SymptomAnalysis, history: &[Message]) -> Response {
    generate_with_limit(text, analysis, history, MAX_FOLLOW_UP_QUESTIONS)
}

pub fn generate_with_limit(
    text: &str,
    analysis: &SymptomAnalysis,
    history: &[Message],
    max_questions: usize,
) -> Response {
    let suggestions = detect_service_needs(text, analysis);
    let suggested_actions = suggestions
        .iter()
        .map(|suggestion| suggestion.suggested_action.clone())
        .collect();

    let (content, follow_up_questions) = if analysis.severity == Severity::Emergency {
        (templates::render_emergency(analysis), Vec::new())
    } else {
        let family = templates::select_family(analysis);
        let mut content = templates::render_advice(family, analysis);

        let questions = if family == TemplateFamily::Welcome {
            Vec::new()
        } else {
            follow_up_questions(analysis, history, max_questions)
        };

        if !questions.is_empty() {
            content.push_str("\n\n");
            content.push_str(FOLLOW_UP_HEADER);
            for question in &questions {
                content.push_str("\n- ");
                content.push_str(question);
            }
        }

        (content, questions)
    };

    Response {
        content,
        suggested_actions,
        requires_follow_up: requires_follow_up(analysis),
        follow_up_questions,
        suggestions,
    }
}

/// Ordered checks: duration, location, triggers, then medications and
/// history when the case is not `Low` and fewer than two questions were
/// picked. Questions the assistant already asked in `history` are skipped.
pub fn follow_up_questions(analysis: &SymptomAnalysis, history: &[Message], max_questions: usize) -> Vec<String> {
    let mut questions: Vec<&str> = Vec::new();

    if analysis.duration.is_none() {
        questions.push(DURATION_QUESTION);
    }
    if analysis.body_parts.is_empty() && analysis.has_symptoms() {
        questions.push(LOCATION_QUESTION);
    }
    if analysis.triggers.is_empty() {
        questions.push(TRIGGER_QUESTION);
    }

    questions.retain(|question| !already_asked(question, history));

    if analysis.severity != Severity::Low && questions.len() < 2 {
        for question in [MEDICATION_QUESTION, HISTORY_QUESTION] {
            if !already_asked(question, history) {
                questions.push(question);
            }
        }
    }

    questions.truncate(max_questions);
    questions.into_iter().map(str::to_string).collect()
}

fn already_asked(question: &str, history: &[Message]) -> bool {
    history
        .iter()
        .filter(|message| message.role == Role::Assistant)
        .any(|message| message.content.contains(question))
}

/// Service-need detection. Several suggestions may apply to the same turn.
pub fn detect_service_needs(text: &str, analysis: &SymptomAnalysis) -> Vec<ServiceSuggestion> {
    let normalized = vocabulary::normalize(text);
    let urgency = analysis.severity.urgency();
    let mut suggestions = Vec::new();

    if analysis.severity == Severity::Emergency
        || severity::is_emergency(&normalized)
        || vocabulary::contains_any_word(&normalized, EMERGENCY_SERVICE_WORDS)
    {
        suggestions.push(ServiceSuggestion {
            kind: SuggestionKind::Emergency,
            reason: "Emergency symptoms or a request for emergency help were detected".to_string(),
            urgency,
            suggested_action: "Call emergency services (911) or go to the nearest emergency room now".to_string(),
        });
    }

    if analysis.severity >= Severity::Moderate
        || analysis.symptom_count() >= 2
        || vocabulary::contains_any_word(&normalized, DOCTOR_WORDS)
    {
        suggestions.push(ServiceSuggestion {
            kind: SuggestionKind::Doctor,
            reason: doctor_reason(analysis),
            urgency,
            suggested_action: "Book an appointment with a doctor".to_string(),
        });
    }

    if vocabulary::contains_any_phrase(&normalized, FOLLOW_UP_PHRASES) {
        suggestions.push(ServiceSuggestion {
            kind: SuggestionKind::FollowUp,
            reason: "Symptoms are ongoing or a follow-up was requested".to_string(),
            urgency,
            suggested_action: "Schedule a follow-up consultation".to_string(),
        });
    }

    suggestions
}

fn doctor_reason(analysis: &SymptomAnalysis) -> String {
    if analysis.severity >= Severity::Moderate {
        format!("Symptoms assessed as {} severity", analysis.severity)
    } else if analysis.symptom_count() >= 2 {
        format!("{} symptoms reported together", analysis.symptom_count())
    } else {
        "A doctor or appointment was requested".to_string()
    }
}

pub fn requires_follow_up(analysis: &SymptomAnalysis) -> bool {
    analysis.severity >= Severity::Moderate || analysis.symptom_count() >= 3
}
