// =====================================================================================
// CONFIDENCE SCORER
// =====================================================================================

use std::collections::BTreeSet;

const BASE_CONFIDENCE: f64 = 0.5;
const SYMPTOMS_FOUND_BONUS: f64 = 0.2;
const MANY_SYMPTOMS_BONUS: f64 = 0.1;
const LONG_TEXT_BONUS: f64 = 0.1;
const WORDY_TEXT_BONUS: f64 = 0.1;

const LONG_TEXT_CHARS: usize = 50;
const WORDY_TEXT_WORDS: usize = 20;

/// Heuristic confidence from how much the message gave us to work with.
/// Always within `[0.0, 1.0]`.
pub fn score(symptoms: &BTreeSet<String>, text: &str) -> f64 {
    let mut confidence = BASE_CONFIDENCE;

    if !symptoms.is_empty() {
        confidence += SYMPTOMS_FOUND_BONUS;
    }
    if symptoms.len() > 2 {
        confidence += MANY_SYMPTOMS_BONUS;
    }
    if text.chars().count() > LONG_TEXT_CHARS {
        confidence += LONG_TEXT_BONUS;
    }
    if text.split_whitespace().count() > WORDY_TEXT_WORDS {
        confidence += WORDY_TEXT_BONUS;
    }

    confidence.clamp(0.0, 1.0)
}
