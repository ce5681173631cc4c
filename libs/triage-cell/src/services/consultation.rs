// =====================================================================================
// CONSULTATION-END DETECTOR
// =====================================================================================

use crate::services::vocabulary::{self, CLOSING_PHRASES};

pub const DEFAULT_MIN_MESSAGES: usize = 6;

/// A consultation is over once the user says something like "thanks, got it"
/// and the conversation has run for at least six messages.
pub fn is_consultation_complete(text: &str, message_count: usize) -> bool {
    is_consultation_complete_after(text, message_count, DEFAULT_MIN_MESSAGES)
}

pub fn is_consultation_complete_after(text: &str, message_count: usize, min_messages: usize) -> bool {
    message_count >= min_messages && has_closing_phrase(text)
}

pub fn has_closing_phrase(text: &str) -> bool {
    vocabulary::contains_any_word(&vocabulary::normalize(text), CLOSING_PHRASES)
}
