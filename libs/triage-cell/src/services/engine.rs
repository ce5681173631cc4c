// =====================================================================================
// TRIAGE ENGINE - EXTRACT → CLASSIFY → RESPOND PIPELINE
// =====================================================================================

use shared_config::AppConfig;
use shared_models::conversation::Message;

use crate::models::{
    AnalysisOutcome, Response, Severity, SymptomAnalysis, TriageConfig, TriageError, TriageReport,
};
use crate::services::{confidence, consultation, extractor, pathway, responder, sentiment, severity};

/// Holds validated limits only; every call is a pure function of its inputs,
/// so one engine can be shared across threads without locking.
#[derive(Debug, Clone)]
pub struct TriageEngine {
    config: TriageConfig,
}

impl TriageEngine {
    pub fn new(config: TriageConfig) -> Result<Self, TriageError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn with_default_config() -> Self {
        Self { config: TriageConfig::default() }
    }

    pub fn from_app_config(config: &AppConfig) -> Result<Self, TriageError> {
        Self::new(TriageConfig::from(config))
    }

    pub fn config(&self) -> &TriageConfig {
        &self.config
    }

    /// Cuts the message down to `max_input_chars` characters. The flag tells
    /// the caller to record the truncation.
    pub fn prepare_input<'a>(&self, text: &'a str) -> (&'a str, bool) {
        match text.char_indices().nth(self.config.max_input_chars) {
            Some((cut, _)) => (&text[..cut], true),
            None => (text, false),
        }
    }

    pub fn analyze(&self, text: &str) -> AnalysisOutcome {
        let (input, truncated) = self.prepare_input(text);

        AnalysisOutcome {
            analysis: analyze_text(input),
            truncated,
        }
    }

    pub fn respond(&self, text: &str, analysis: &SymptomAnalysis, history: &[Message]) -> Response {
        let (input, _) = self.prepare_input(text);
        responder::generate_with_limit(
            input,
            analysis,
            self.recent(history),
            self.config.max_follow_up_questions,
        )
    }

    /// Full turn: analysis, reply, care pathway and summaries.
    pub fn triage(&self, text: &str, history: &[Message]) -> TriageReport {
        let (input, truncated) = self.prepare_input(text);
        let analysis = analyze_text(input);
        let response = responder::generate_with_limit(
            input,
            &analysis,
            self.recent(history),
            self.config.max_follow_up_questions,
        );
        let action_plan = pathway::build_action_plan(&analysis);
        let summary = pathway::summarize(input, &analysis, &action_plan);

        TriageReport {
            needs_escalation: analysis.severity == Severity::Emergency,
            needs_more_info: analysis.symptom_count() < 2,
            disclaimer: pathway::DISCLAIMER.to_string(),
            input_truncated: truncated,
            analysis,
            response,
            action_plan,
            summary,
        }
    }

    pub fn is_consultation_complete(&self, text: &str, message_count: usize) -> bool {
        consultation::is_consultation_complete_after(text, message_count, self.config.consultation_min_messages)
    }

    fn recent<'h>(&self, history: &'h [Message]) -> &'h [Message] {
        let start = history.len().saturating_sub(self.config.history_window);
        &history[start..]
    }
}

/// Single-turn analysis with no length limit applied.
pub fn analyze_text(text: &str) -> SymptomAnalysis {
    let extraction = extractor::extract(text);
    let severity = severity::classify_severity(text, &extraction.symptoms);
    let sentiment = sentiment::classify_sentiment(text);
    let confidence = confidence::score(&extraction.symptoms, text);

    SymptomAnalysis::from_parts(extraction, severity, sentiment, confidence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sentiment;

    fn engine_with_limit(max_input_chars: usize) -> TriageEngine {
        TriageEngine::new(TriageConfig { max_input_chars, ..TriageConfig::default() }).unwrap()
    }

    #[test]
    fn test_rejects_invalid_config() {
        let result = TriageEngine::new(TriageConfig { history_window: 0, ..TriageConfig::default() });
        assert!(matches!(result, Err(TriageError::InvalidConfig(_))));
    }

    #[test]
    fn test_prepare_input_truncates_on_char_boundary() {
        let engine = engine_with_limit(3);
        assert_eq!(engine.prepare_input("héllo"), ("hél", true));
        assert_eq!(engine.prepare_input("hé"), ("hé", false));
        assert_eq!(engine.prepare_input("abc"), ("abc", false));
    }

    #[test]
    fn test_truncation_drops_trailing_symptoms() {
        let engine = engine_with_limit(10);
        let outcome = engine.analyze("I am fine but I have a terrible cough");
        assert!(outcome.truncated);
        assert!(outcome.analysis.symptoms.is_empty());
        assert_eq!(outcome.analysis.severity, Severity::Low);
    }

    #[test]
    fn test_empty_input_defaults() {
        let engine = TriageEngine::with_default_config();
        let outcome = engine.analyze("");
        assert!(!outcome.truncated);
        assert_eq!(outcome.analysis.severity, Severity::Low);
        assert_eq!(outcome.analysis.sentiment, Sentiment::Calm);
        assert_eq!(outcome.analysis.duration, None);
        assert_eq!(outcome.analysis.confidence, 0.5);
    }

    #[test]
    fn test_history_window_limits_context() {
        let engine = TriageEngine::new(TriageConfig { history_window: 1, ..TriageConfig::default() }).unwrap();
        let history = vec![
            Message::assistant(responder::DURATION_QUESTION),
            Message::user("it hurts"),
        ];
        let analysis = analyze_text("I have a cough");
        let response = engine.respond("I have a cough", &analysis, &history);
        // the duration question fell outside the one-message window
        assert!(response.follow_up_questions.contains(&responder::DURATION_QUESTION.to_string()));
    }

    #[test]
    fn test_triage_report_flags() {
        let engine = TriageEngine::with_default_config();

        let report = engine.triage("chest pain, can't breathe", &[]);
        assert!(report.needs_escalation);
        assert_eq!(report.action_plan.urgency, "immediate");

        let report = engine.triage("mild ache in my knee after walking", &[]);
        assert!(!report.needs_escalation);
        assert!(report.needs_more_info);
        assert_eq!(report.disclaimer, pathway::DISCLAIMER);
    }

    #[test]
    fn test_consultation_threshold_from_config() {
        let engine = TriageEngine::new(TriageConfig { consultation_min_messages: 2, ..TriageConfig::default() }).unwrap();
        assert!(engine.is_consultation_complete("thanks!", 2));
        assert!(!TriageEngine::with_default_config().is_consultation_complete("thanks!", 2));
    }
}
