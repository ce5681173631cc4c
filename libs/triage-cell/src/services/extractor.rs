// =====================================================================================
// EXTRACTOR - SYMPTOMS, BODY PARTS, DURATION, TRIGGERS, MEDICAL TERMS
// =====================================================================================

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::models::Extraction;
use crate::services::vocabulary::{
    self, SymptomCategory, BODY_PARTS, BODY_PART_IDIOMS, MEDICAL_TERMS, TRIGGERS,
};

/// Tried in order; the first pattern with a match wins.
static DURATION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // "3 days", "2 weeks", "45 min"
        r"\b\d+\s*(?:minutes?|mins?|hours?|hrs?|days?|weeks?|months?|years?)\b",
        // "since yesterday", "a few days", "this morning"
        r"\b(?:since (?:yesterday|last night|this morning|last week|last month)|(?:a few|a couple of|several|one|two|three|four|five|six|seven|a|an) (?:minutes?|hours?|days?|weeks?|months?|years?)|yesterday|this morning|last night|today|tonight|recently)\b",
        // "since monday", "for the past week", "about a month"
        r"\b(?:since|for|about|over)\s+(?:the\s+)?(?:past\s+|last\s+)?(?:monday|tuesday|wednesday|thursday|friday|saturday|sunday|weekend|morning|afternoon|evening|night|week|month|year|ages|a while|a long time|some time|childhood)\b",
    ]
    .iter()
    .filter_map(|pattern| Regex::new(pattern).ok())
    .collect()
});

/// Runs every dictionary over the message. Pure; the empty string yields an
/// empty extraction.
pub fn extract(text: &str) -> Extraction {
    let normalized = vocabulary::normalize(text);

    Extraction {
        symptoms: extract_symptoms(&normalized),
        body_parts: extract_body_parts(&normalized),
        duration: extract_duration(&normalized),
        triggers: extract_triggers(&normalized),
        medical_terms: extract_medical_terms(&normalized),
    }
}

/// All categories are matched together so a phrase from one table ("chest
/// pain") absorbs a shorter phrase from another ("pain").
pub fn extract_symptoms(normalized: &str) -> BTreeSet<String> {
    let phrases: Vec<&str> = SymptomCategory::ALL
        .iter()
        .flat_map(|category| category.phrases().iter().copied())
        .collect();

    vocabulary::match_phrases(normalized, &phrases)
}

pub fn extract_body_parts(normalized: &str) -> BTreeSet<String> {
    let masked = BODY_PART_IDIOMS
        .iter()
        .fold(normalized.to_string(), |text, idiom| text.replace(idiom, " "));

    vocabulary::match_words_plural(&masked, BODY_PARTS)
}

pub fn extract_duration(normalized: &str) -> Option<String> {
    DURATION_PATTERNS
        .iter()
        .find_map(|pattern| pattern.find(normalized))
        .map(|found| found.as_str().to_string())
}

pub fn extract_triggers(normalized: &str) -> BTreeSet<String> {
    vocabulary::match_phrases(normalized, TRIGGERS)
}

pub fn extract_medical_terms(normalized: &str) -> BTreeSet<String> {
    vocabulary::match_phrases(normalized, MEDICAL_TERMS)
}
