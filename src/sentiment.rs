//! Keyword Sentiment
//!
//! Substring keyword counting. Not real sentiment analysis: no stemming,
//! no negation handling, embedded words count.

use crate::models::Sentiment;

const POSITIVE_WORDS: &[&str] = &[
    "great", "easy", "helpful", "smooth", "quick", "excellent", "good", "amazing", "wonderful",
    "fantastic",
];

const NEGATIVE_WORDS: &[&str] = &[
    "difficult", "hard", "frustrating", "slow", "confusing", "terrible", "bad", "awful", "horrible",
    "worst",
];

/// Number of listed words occurring anywhere in `text` (each counted once)
fn count_matches(text: &str, words: &[&str]) -> usize {
    words.iter().filter(|w| text.contains(*w)).count()
}

pub fn analyze_sentiment(text: &str) -> Sentiment {
    let lower = text.to_lowercase();
    let positive = count_matches(&lower, POSITIVE_WORDS);
    let negative = count_matches(&lower, NEGATIVE_WORDS);

    if positive > negative {
        Sentiment::Positive
    } else if negative > positive {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive() {
        assert_eq!(analyze_sentiment("This was great and helpful"), Sentiment::Positive);
    }

    #[test]
    fn test_negative() {
        assert_eq!(analyze_sentiment("This was terrible and confusing"), Sentiment::Negative);
    }

    #[test]
    fn test_neutral_without_keywords() {
        assert_eq!(analyze_sentiment("I went to the office"), Sentiment::Neutral);
        assert_eq!(analyze_sentiment(""), Sentiment::Neutral);
    }

    #[test]
    fn test_tie_is_neutral() {
        assert_eq!(analyze_sentiment("Good staff but a slow queue"), Sentiment::Neutral);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(analyze_sentiment("AMAZING SERVICE"), Sentiment::Positive);
    }

    #[test]
    fn test_repeated_word_counts_once() {
        // two distinct negatives beat one positive repeated
        assert_eq!(analyze_sentiment("good good good, but hard and awful"), Sentiment::Negative);
    }

    #[test]
    fn test_embedded_substring_matches() {
        // "bad" inside "badge"
        assert_eq!(analyze_sentiment("Collected my badge"), Sentiment::Negative);
    }
}
