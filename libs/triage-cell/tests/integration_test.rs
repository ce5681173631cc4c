// =====================================================================================
// TRIAGE CELL INTEGRATION TESTS - END-TO-END CLASSIFICATION SCENARIOS
// =====================================================================================

use assert_matches::assert_matches;

use shared_utils::test_utils::{ConversationBuilder, TestConfig};
use triage_cell::{
    classify_sentiment, classify_severity, extract, generate, is_consultation_complete,
    models::{CarePathway, Sentiment, Severity, SuggestionKind, TriageConfig, TriageError},
    services::{analyze_text, responder, templates},
    TriageEngine,
};

const SAMPLE_MESSAGES: &[&str] = &[
    "",
    "hello",
    "I have a really bad headache and it's been going on for 3 days",
    "mild ache in my knee after walking",
    "chest pain, can't breathe",
    "I need help immediately, I'm so scared",
    "I've had a persistent cough and fever for about a week, should I see a doctor?",
    "Feeling tired and nauseous after eating, a bit dizzy in the morning",
    "thanks, that helps a lot",
];

fn engine() -> TriageEngine {
    TriageEngine::from_app_config(&TestConfig::default().to_app_config()).unwrap()
}

#[test]
fn test_headache_scenario() {
    let text = "I have a really bad headache and it's been going on for 3 days";
    let analysis = analyze_text(text);

    assert!(analysis.symptoms.contains("headache"));
    assert_eq!(analysis.duration.as_deref(), Some("3 days"));
    assert_eq!(analysis.severity, Severity::High);

    let response = generate(text, &analysis, &[]);
    assert!(response.content.contains("urgent care"));
    assert!(response.content.contains(templates::SEEK_CARE_DIRECTIVE));
    assert!(response.requires_follow_up);
}

#[test]
fn test_knee_scenario() {
    let text = "mild ache in my knee after walking";
    let analysis = analyze_text(text);

    assert!(analysis.symptoms.contains("ache"));
    assert!(analysis.body_parts.contains("knee"));
    assert!(analysis.triggers.contains("after walking"));
    assert_eq!(analysis.severity, Severity::Low);

    let response = generate(text, &analysis, &[]);
    assert!(response.content.contains("your knee"));
    assert!(!response.requires_follow_up);
    assert_eq!(response.follow_up_questions, vec![responder::DURATION_QUESTION]);
}

#[test]
fn test_emergency_scenario() {
    let text = "chest pain, can't breathe";
    let analysis = analyze_text(text);
    assert_eq!(analysis.severity, Severity::Emergency);

    let response = generate(text, &analysis, &[]);
    assert!(response.content.starts_with(templates::EMERGENCY_HEADER));
    assert!(response.requires_follow_up);
    assert!(response
        .suggestions
        .iter()
        .any(|suggestion| suggestion.kind == SuggestionKind::Emergency));
}

#[test]
fn test_emergency_precedence_never_self_care() {
    for text in [
        "I have chest pain and can't breathe",
        "mild chest pain",
        "I took an overdose",
        "the pain is unbearable but I'm calm",
    ] {
        let analysis = analyze_text(text);
        assert_eq!(classify_severity(text, &analysis.symptoms), Severity::Emergency, "{}", text);

        let response = generate(text, &analysis, &[]);
        assert!(response.content.starts_with(templates::EMERGENCY_HEADER), "{}", text);
        assert!(response.follow_up_questions.is_empty());
    }
}

#[test]
fn test_sentiment_priority() {
    assert_eq!(classify_sentiment("I need help immediately, I'm so scared"), Sentiment::Urgent);
    assert_eq!(classify_sentiment("I'm scared, what if it's serious"), Sentiment::Anxious);
    assert_eq!(classify_sentiment("what if it's serious"), Sentiment::Concerned);
}

#[test]
fn test_single_symptom_messages_stay_low() {
    for text in ["I have a slight headache", "I have a sore throat", "mild stomach ache"] {
        let analysis = analyze_text(text);
        assert_eq!(analysis.symptom_count(), 1, "{}", text);
        assert_eq!(analysis.severity, Severity::Low, "{}", text);

        let report = engine().triage(text, &[]);
        assert_eq!(report.action_plan.pathway, CarePathway::SelfCare, "{}", text);
        assert!(!report.response.requires_follow_up, "{}", text);
        assert!(report.response.suggestions.is_empty(), "{}", text);
    }
}

#[test]
fn test_check_back_keeps_location_question() {
    let analysis = analyze_text("I will check back tomorrow about my cough");
    assert!(analysis.body_parts.is_empty());

    let response = generate("I will check back tomorrow about my cough", &analysis, &[]);
    assert!(response
        .follow_up_questions
        .contains(&responder::LOCATION_QUESTION.to_string()));
    assert!(response
        .suggestions
        .iter()
        .any(|suggestion| suggestion.kind == SuggestionKind::FollowUp));
}

#[test]
fn test_consultation_end_scenario() {
    assert_eq!(classify_sentiment("thanks, that helps a lot"), Sentiment::Calm);
    assert!(is_consultation_complete("thanks, that helps a lot", 8));
    assert!(!is_consultation_complete("thanks, that helps a lot", 3));
}

#[test]
fn test_empty_input() {
    let extraction = extract("");
    assert!(extraction.symptoms.is_empty());
    assert!(extraction.body_parts.is_empty());
    assert!(extraction.triggers.is_empty());
    assert!(extraction.medical_terms.is_empty());
    assert_eq!(extraction.duration, None);

    assert_eq!(classify_severity("", &extraction.symptoms), Severity::Low);

    let response = generate("", &analyze_text(""), &[]);
    assert!(!response.content.is_empty());
    assert!(response.content.starts_with("Hello!"));
}

#[test]
fn test_determinism() {
    let engine = engine();
    let history = ConversationBuilder::new()
        .user("I have a cough")
        .assistant(responder::DURATION_QUESTION)
        .build();

    for text in SAMPLE_MESSAGES {
        assert_eq!(extract(text), extract(text));
        assert_eq!(analyze_text(text), analyze_text(text));
        assert_eq!(engine.triage(text, &history), engine.triage(text, &history));
    }
}

#[test]
fn test_confidence_bounds() {
    let long_message = "I have a headache, fever, cough and nausea ".repeat(100);
    let engine = engine();

    for text in SAMPLE_MESSAGES.iter().copied().chain([long_message.as_str()]) {
        let confidence = engine.analyze(text).analysis.confidence;
        assert!((0.0..=1.0).contains(&confidence), "{} -> {}", text, confidence);
    }
}

#[test]
fn test_oversized_input_is_truncated() {
    let config = TestConfig::default().with_max_input_chars(40).to_app_config();
    let engine = TriageEngine::from_app_config(&config).unwrap();
    let text = format!("{} and now I have chest pain", "blah ".repeat(20));

    let outcome = engine.analyze(&text);
    assert!(outcome.truncated);
    assert_ne!(outcome.analysis.severity, Severity::Emergency);

    let report = engine.triage(&text, &[]);
    assert!(report.input_truncated);
}

#[test]
fn test_multi_turn_history_avoids_repeat_questions() {
    let engine = engine();
    let history = ConversationBuilder::new()
        .system("You are a triage assistant")
        .user("I have a cough")
        .assistant(&format!("I'm sorry to hear that. {}", responder::DURATION_QUESTION))
        .build();

    let report = engine.triage("the cough is persistent", &history);
    assert_eq!(report.analysis.severity, Severity::Moderate);
    assert!(!report
        .response
        .follow_up_questions
        .contains(&responder::DURATION_QUESTION.to_string()));
    assert!(report
        .response
        .follow_up_questions
        .contains(&responder::LOCATION_QUESTION.to_string()));
}

#[test]
fn test_full_report_for_respiratory_case() {
    let report = engine().triage(
        "I've had a persistent cough and fever for about a week, should I see a doctor?",
        &[],
    );

    assert_eq!(report.analysis.severity, Severity::Moderate);
    assert_eq!(report.analysis.sentiment, Sentiment::Concerned);
    assert_eq!(report.action_plan.pathway, CarePathway::Referral);
    assert_eq!(report.action_plan.urgency, "soon");
    assert!(report.response.content.starts_with("A fever with other symptoms"));
    assert!(report
        .response
        .suggestions
        .iter()
        .any(|suggestion| suggestion.kind == SuggestionKind::Doctor));
    assert!(report.summary.clinician_summary.contains("Associated symptoms: cough, fever"));
    assert!(!report.needs_more_info);
}

#[test]
fn test_invalid_config_is_rejected() {
    let result = TriageEngine::new(TriageConfig {
        max_input_chars: 0,
        ..TriageConfig::default()
    });
    assert_matches!(result, Err(TriageError::InvalidConfig(_)));
}
