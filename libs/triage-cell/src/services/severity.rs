// =====================================================================================
// SEVERITY CLASSIFIER
// =====================================================================================

use std::collections::BTreeSet;

use crate::models::Severity;
use crate::services::vocabulary::{
    self, EMERGENCY_PHRASES, HIGH_SEVERITY_PHRASES, MODERATE_SEVERITY_PHRASES,
};

pub const HIGH_SYMPTOM_COUNT: usize = 4;
pub const MODERATE_SYMPTOM_COUNT: usize = 2;

/// Highest tier first; the first tier that matches wins. With no symptoms and
/// no severity phrase the result is `Severity::Low`.
pub fn classify_severity(text: &str, symptoms: &BTreeSet<String>) -> Severity {
    let normalized = vocabulary::normalize(text);

    if is_emergency(&normalized) {
        return Severity::Emergency;
    }

    if vocabulary::contains_any_phrase(&normalized, HIGH_SEVERITY_PHRASES)
        || symptoms.len() >= HIGH_SYMPTOM_COUNT
    {
        return Severity::High;
    }

    if vocabulary::contains_any_phrase(&normalized, MODERATE_SEVERITY_PHRASES)
        || symptoms.len() >= MODERATE_SYMPTOM_COUNT
    {
        return Severity::Moderate;
    }

    Severity::Low
}

/// Expects already-normalized text.
pub fn is_emergency(normalized: &str) -> bool {
    vocabulary::contains_any_phrase(normalized, EMERGENCY_PHRASES)
}

pub fn emergency_phrases_in(text: &str) -> BTreeSet<String> {
    vocabulary::match_phrases(&vocabulary::normalize(text), EMERGENCY_PHRASES)
}
