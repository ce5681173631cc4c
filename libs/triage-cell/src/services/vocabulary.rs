// =====================================================================================
// VOCABULARY - VERSIONED PHRASE TABLES USED BY EVERY CLASSIFIER
// =====================================================================================

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Bumped whenever a table below changes, so stored analyses can be traced
/// back to the dictionary that produced them.
pub const VOCABULARY_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SymptomCategory {
    Pain,
    Respiratory,
    Digestive,
    Neurological,
    Cardiac,
    Systemic,
}

impl SymptomCategory {
    pub const ALL: [SymptomCategory; 6] = [
        SymptomCategory::Pain,
        SymptomCategory::Respiratory,
        SymptomCategory::Digestive,
        SymptomCategory::Neurological,
        SymptomCategory::Cardiac,
        SymptomCategory::Systemic,
    ];

    pub fn phrases(&self) -> &'static [&'static str] {
        match self {
            SymptomCategory::Pain => PAIN_PHRASES,
            SymptomCategory::Respiratory => RESPIRATORY_PHRASES,
            SymptomCategory::Digestive => DIGESTIVE_PHRASES,
            SymptomCategory::Neurological => NEUROLOGICAL_PHRASES,
            SymptomCategory::Cardiac => CARDIAC_PHRASES,
            SymptomCategory::Systemic => SYSTEMIC_PHRASES,
        }
    }

    /// Category owning a canonical symptom keyword, if any.
    pub fn of(symptom: &str) -> Option<SymptomCategory> {
        Self::ALL
            .into_iter()
            .find(|category| category.phrases().contains(&symptom))
    }

    /// Rank used to break ties when picking the dominant category; higher wins.
    pub fn clinical_priority(&self) -> u8 {
        match self {
            SymptomCategory::Cardiac => 6,
            SymptomCategory::Neurological => 5,
            SymptomCategory::Respiratory => 4,
            SymptomCategory::Digestive => 3,
            SymptomCategory::Systemic => 2,
            SymptomCategory::Pain => 1,
        }
    }

    pub fn specialization(&self) -> &'static str {
        match self {
            SymptomCategory::Cardiac => "cardiology",
            SymptomCategory::Neurological => "neurology",
            SymptomCategory::Respiratory => "pulmonology",
            SymptomCategory::Digestive => "gastroenterology",
            SymptomCategory::Systemic | SymptomCategory::Pain => "general practice",
        }
    }
}

// =====================================================================================
// SYMPTOM TABLES
// =====================================================================================

pub const PAIN_PHRASES: &[&str] = &[
    "pain", "ache", "aching", "headache", "migraine", "hurt", "sore", "cramp", "throbbing", "stiffness",
];

pub const RESPIRATORY_PHRASES: &[&str] = &[
    "cough",
    "shortness of breath",
    "short of breath",
    "difficulty breathing",
    "wheezing",
    "congestion",
    "runny nose",
    "sore throat",
    "sneezing",
];

pub const DIGESTIVE_PHRASES: &[&str] = &[
    "nausea", "nauseous", "vomiting", "diarrhea", "constipation", "bloating", "heartburn", "indigestion",
    "stomach ache",
];

pub const NEUROLOGICAL_PHRASES: &[&str] = &[
    "dizziness", "dizzy", "numbness", "tingling", "confusion", "fainting", "blurred vision", "memory loss",
    "seizure",
];

pub const CARDIAC_PHRASES: &[&str] = &[
    "chest pain", "chest tightness", "palpitations", "racing heart", "irregular heartbeat", "heart attack",
];

pub const SYSTEMIC_PHRASES: &[&str] = &[
    "fever", "chills", "fatigue", "tired", "exhausted", "weakness", "rash", "sweating", "weight loss",
];

// =====================================================================================
// CONTEXT TABLES
// =====================================================================================

/// Matched on word boundaries with plurals; "ear" must not fire on "year".
pub const BODY_PARTS: &[&str] = &[
    "head", "neck", "shoulder", "arm", "hand", "wrist", "chest", "back", "stomach", "abdomen", "hip", "leg",
    "knee", "ankle", "foot", "throat", "ear", "eye",
];

/// Set phrases where a body-part word carries no anatomical meaning; masked
/// out before body parts are matched.
pub const BODY_PART_IDIOMS: &[&str] = &[
    "check back",
    "come back",
    "comes back",
    "coming back",
    "came back",
    "get back",
    "go back",
    "call back",
    "be back",
    "back and forth",
];

pub const TRIGGERS: &[&str] = &[
    "after eating",
    "before eating",
    "at night",
    "in the morning",
    "when walking",
    "after walking",
    "during exercise",
    "after exercise",
    "when lying down",
    "when standing",
    "when breathing",
    "under stress",
];

pub const MEDICAL_TERMS: &[&str] = &[
    "hypertension",
    "blood pressure",
    "diabetes",
    "asthma",
    "migraine",
    "infection",
    "inflammation",
    "allergy",
    "allergic",
    "arrhythmia",
    "pneumonia",
    "anemia",
];

// =====================================================================================
// SEVERITY TABLES
// =====================================================================================

pub const EMERGENCY_PHRASES: &[&str] = &[
    "chest pain",
    "can't breathe",
    "cannot breathe",
    "can not breathe",
    "unable to breathe",
    "difficulty breathing",
    "heart attack",
    "stroke",
    "seizure",
    "unconscious",
    "passed out",
    "severe bleeding",
    "bleeding heavily",
    "coughing blood",
    "vomiting blood",
    "suicide",
    "suicidal",
    "kill myself",
    "overdose",
    "unbearable",
];

pub const HIGH_SEVERITY_PHRASES: &[&str] = &[
    "severe",
    "really bad",
    "very bad",
    "terrible",
    "excruciating",
    "intense",
    "worst",
    "extreme",
    "high fever",
    "can't sleep",
];

pub const MODERATE_SEVERITY_PHRASES: &[&str] = &[
    "moderate",
    "uncomfortable",
    "bothering",
    "persistent",
    "worsening",
    "getting worse",
    "keeps coming back",
    "constant",
    "annoying",
];

// =====================================================================================
// SENTIMENT TABLES (word-boundary matched)
// =====================================================================================

pub const URGENT_WORDS: &[&str] = &["urgent", "emergency", "help", "immediately", "now", "asap", "right away"];

pub const ANXIOUS_WORDS: &[&str] = &["worried", "scared", "afraid", "panic", "anxious", "terrified", "nervous"];

pub const CONCERNED_WORDS: &[&str] = &[
    "concerned",
    "wondering",
    "should i",
    "what if",
    "is it normal",
    "is this serious",
];

// =====================================================================================
// CONVERSATION TABLES (word-boundary matched)
// =====================================================================================

pub const CLOSING_PHRASES: &[&str] = &[
    "thank you",
    "thanks",
    "that helps",
    "that helped",
    "that's helpful",
    "got it",
    "appreciate it",
    "that's all",
    "bye",
    "goodbye",
];

pub const EMERGENCY_SERVICE_WORDS: &[&str] = &["emergency", "ambulance", "911", "emergency room"];

pub const DOCTOR_WORDS: &[&str] = &[
    "doctor",
    "doctors",
    "appointment",
    "physician",
    "gp",
    "clinic",
    "specialist",
    "see someone",
];

pub const FOLLOW_UP_PHRASES: &[&str] = &[
    "follow up",
    "follow-up",
    "followup",
    "check back",
    "come back",
    "not improving",
    "still have",
    "still hurts",
    "getting worse",
];

// =====================================================================================
// MATCHING HELPERS
// =====================================================================================

/// Lower-cases and folds typographic apostrophes so "can’t" matches "can't".
pub fn normalize(text: &str) -> String {
    text.to_lowercase().replace(['\u{2019}', '\u{2018}'], "'")
}

/// Every phrase occurring in `text`, longest match only: an occurrence lying
/// inside an occurrence of another matched phrase is not counted, so
/// "headache" does not also yield "ache".
pub fn match_phrases(text: &str, phrases: &[&str]) -> BTreeSet<String> {
    let spans: Vec<(usize, usize, &str)> = phrases
        .iter()
        .flat_map(|phrase| {
            text.match_indices(*phrase)
                .map(move |(start, found)| (start, start + found.len(), *phrase))
        })
        .collect();

    spans
        .iter()
        .filter(|(start, end, phrase)| {
            !spans
                .iter()
                .any(|(s, e, other)| other != phrase && s <= start && end <= e)
        })
        .map(|(_, _, phrase)| phrase.to_string())
        .collect()
}

pub fn contains_any_phrase(text: &str, phrases: &[&str]) -> bool {
    phrases.iter().any(|phrase| text.contains(*phrase))
}

/// Every word or phrase occurring in `text` on exact word boundaries.
pub fn match_words(text: &str, words: &[&str]) -> BTreeSet<String> {
    words
        .iter()
        .filter(|word| contains_word(text, word))
        .map(|word| word.to_string())
        .collect()
}

/// Like `match_words`, but "knees" also counts as "knee".
pub fn match_words_plural(text: &str, words: &[&str]) -> BTreeSet<String> {
    words
        .iter()
        .filter(|word| contains_word_plural(text, word))
        .map(|word| word.to_string())
        .collect()
}

pub fn contains_any_word(text: &str, words: &[&str]) -> bool {
    words.iter().any(|word| contains_word(text, word))
}

pub fn contains_word(text: &str, word: &str) -> bool {
    find_word(text, word, false)
}

pub fn contains_word_plural(text: &str, word: &str) -> bool {
    find_word(text, word, true)
}

fn find_word(text: &str, word: &str, allow_plural: bool) -> bool {
    if word.is_empty() {
        return false;
    }

    text.match_indices(word).any(|(start, matched)| {
        let before_ok = text[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());

        let mut rest = text[start + matched.len()..].chars();
        let after_ok = match rest.next() {
            None => true,
            Some('s') if allow_plural => rest.next().map_or(true, |c| !c.is_alphanumeric()),
            Some(c) => !c.is_alphanumeric(),
        };

        before_ok && after_ok
    })
}
