// =====================================================================================
// SENTIMENT CLASSIFIER
// =====================================================================================

use crate::models::Sentiment;
use crate::services::vocabulary::{self, ANXIOUS_WORDS, CONCERNED_WORDS, URGENT_WORDS};

/// Priority order, first match wins; lower tiers are never consulted once a
/// higher one matched.
const SENTIMENT_TIERS: &[(Sentiment, &[&str])] = &[
    (Sentiment::Urgent, URGENT_WORDS),
    (Sentiment::Anxious, ANXIOUS_WORDS),
    (Sentiment::Concerned, CONCERNED_WORDS),
];

pub fn classify_sentiment(text: &str) -> Sentiment {
    let normalized = vocabulary::normalize(text);

    SENTIMENT_TIERS
        .iter()
        .find(|(_, words)| vocabulary::contains_any_word(&normalized, words))
        .map(|(sentiment, _)| *sentiment)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urgent_beats_anxious() {
        assert_eq!(classify_sentiment("I need help immediately, I'm so scared"), Sentiment::Urgent);
    }

    #[test]
    fn test_each_tier() {
        assert_eq!(classify_sentiment("I'm really worried about this rash"), Sentiment::Anxious);
        assert_eq!(classify_sentiment("Should I be taking something for it?"), Sentiment::Concerned);
        assert_eq!(classify_sentiment("I have a slight cough"), Sentiment::Calm);
        assert_eq!(classify_sentiment(""), Sentiment::Calm);
    }

    #[test]
    fn test_words_inside_other_words_do_not_count() {
        assert_eq!(classify_sentiment("I know it's probably nothing"), Sentiment::Calm);
        assert_eq!(classify_sentiment("the nurse was helpful"), Sentiment::Calm);
        assert_eq!(classify_sentiment("thanks, that helps a lot"), Sentiment::Calm);
    }
}
