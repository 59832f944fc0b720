//! Per-participant analytics bundle
//!
//! Every field has a zero/placeholder form so an empty subset never produces
//! absent keys.

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

/// `(item, count)` pairs, descending by count
pub type Ranking = Vec<(String, usize)>;

pub const NO_MESSAGES: &str = "No messages to analyze.";
pub const NO_TEXT: &str = "No text to analyze.";

/// Most positive / most negative message of a subset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentExamples {
    pub most_positive: String,
    pub most_negative: String,
}

/// Positive / neutral / negative shares in percent (2 decimals)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentSummary {
    pub positive_percent: f64,
    pub neutral_percent: f64,
    pub negative_percent: f64,
    pub sentiment_examples: SentimentExamples,
}

impl SentimentSummary {
    /// Zero-valued summary for a subset without scorable messages
    pub fn empty() -> Self {
        Self {
            positive_percent: 0.0,
            neutral_percent: 0.0,
            negative_percent: 0.0,
            sentiment_examples: SentimentExamples {
                most_positive: NO_MESSAGES.to_string(),
                most_negative: NO_MESSAGES.to_string(),
            },
        }
    }
}

impl Default for SentimentSummary {
    fn default() -> Self {
        Self::empty()
    }
}

/// Readability of everything a participant wrote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingLevel {
    pub grade_level: f64,
    pub dale_chall: f64,
    pub interpretation: String,
    pub age_estimate: i64,
}

impl ReadingLevel {
    pub fn empty() -> Self {
        Self {
            grade_level: 0.0,
            dale_chall: 0.0,
            interpretation: NO_TEXT.to_string(),
            age_estimate: 0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PosCounts {
    pub adjectives: usize,
    pub verbs: usize,
    pub nouns: usize,
}

/// Top dictionary-style words split by part of speech
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidWords {
    pub nouns: Ranking,
    pub adjectives: Ranking,
    pub verbs: Ranking,
    pub longest_word: String,
}

/// Share of the conversation volume
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub message_count: usize,
    pub word_count: usize,
    pub message_percentage: f64,
    pub word_percentage: f64,
    pub avg_words_per_message: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantProfile {
    pub activity: Activity,
    pub most_common_words: Ranking,
    pub custom_word_counts: BTreeMap<String, usize>,
    pub reading_level: ReadingLevel,
    pub sentiment: SentimentSummary,
    pub emoji_usage: Ranking,
    pub excuse_factor: BTreeMap<String, usize>,
    pub pos_counts: PosCounts,
    pub self_pronoun_counts: BTreeMap<String, usize>,
    pub valid_words: ValidWords,
}

/// Round to 2 decimals
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `part / total` in percent, 2 decimals; 0 when total is 0
pub fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        round2(part as f64 / total as f64 * 100.0)
    }
}
