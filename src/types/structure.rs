//! Conversation structure outputs

use serde::{Deserialize, Serialize};
use crate::types::Ranking;

/// Longest consecutive run of messages by one author
///
/// Invariant: `message_count == monologue_content.len() == message_intervals_seconds.len() + 1`,
/// or everything empty with `message_count == 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonologueRecord {
    pub author: String,
    pub message_count: usize,
    pub monologue_content: Vec<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub message_intervals_seconds: Vec<f64>,
}

impl MonologueRecord {
    /// Zero-count record for a participant without a qualifying run
    pub fn placeholder(author: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            message_count: 0,
            monologue_content: Vec::new(),
            start_time: None,
            end_time: None,
            message_intervals_seconds: Vec::new(),
        }
    }

    /// Check the count / content / interval invariant
    pub fn is_consistent(&self) -> bool {
        if self.message_count == 0 {
            return self.monologue_content.is_empty() && self.message_intervals_seconds.is_empty();
        }
        self.monologue_content.len() == self.message_count
            && self.message_intervals_seconds.len() + 1 == self.message_count
    }
}

/// Everything the conversation structure engine produces
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversationStructure {
    pub chat_initiator: Ranking,
    pub night_owl_score: Ranking,
    /// Sorted by `message_count` descending
    pub longest_monologues_per_participant: Vec<MonologueRecord>,
    pub question_askers: Ranking,
    pub special_mentions: Ranking,
}
