//! Message store
//!
//! - Message = one sender's timestamped text
//! - Transcript = immutable message collection + derived roster
//! - Ordering by timestamp is established by consumers, never assumed

use std::collections::BTreeSet;
use serde::{Deserialize, Serialize};

/// A single chat message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Display name of the author
    #[serde(rename = "sender_name")]
    pub sender: String,
    /// Text content (possibly empty)
    #[serde(default)]
    pub content: String,
    /// Epoch milliseconds
    pub timestamp_ms: i64,
}

impl Message {
    pub fn new(sender: impl Into<String>, content: impl Into<String>, timestamp_ms: i64) -> Self {
        Self {
            sender: sender.into(),
            content: content.into(),
            timestamp_ms,
        }
    }

    /// Literal `?` presence, no NLP
    pub fn is_question(&self) -> bool {
        self.content.contains('?')
    }
}

/// The loaded transcript and its participant roster
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<Message>,
    participants: Vec<String>,
}

impl Transcript {
    /// Build from messages; the roster is every distinct sender, sorted by name
    pub fn new(messages: Vec<Message>) -> Self {
        let participants = messages
            .iter()
            .map(|m| m.sender.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        Self { messages, participants }
    }

    /// Messages in input order
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Roster, sorted by name
    pub fn participants(&self) -> &[String] {
        &self.participants
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// All messages as a borrowed subset
    pub fn all(&self) -> Vec<&Message> {
        self.messages.iter().collect()
    }

    /// Stable sort by timestamp; equal timestamps keep input order
    pub fn chronological(&self) -> Vec<&Message> {
        let mut sorted = self.all();
        sorted.sort_by_key(|m| m.timestamp_ms);
        sorted
    }

    /// Messages authored by one participant, input order
    pub fn by_sender(&self, sender: &str) -> Vec<&Message> {
        self.messages.iter().filter(|m| m.sender == sender).collect()
    }
}

/// `later - earlier` in milliseconds, exact for any pair of `i64` timestamps
pub fn elapsed_ms(earlier: i64, later: i64) -> f64 {
    (later as i128 - earlier as i128) as f64
}

/// First whitespace-separated token of a display name
pub fn first_name(name: &str) -> &str {
    name.split_whitespace().next().unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_sorted_and_distinct() {
        let t = Transcript::new(vec![
            Message::new("Zoe", "hi", 3),
            Message::new("Adam", "yo", 1),
            Message::new("Zoe", "again", 2),
        ]);
        assert_eq!(t.participants(), &["Adam".to_string(), "Zoe".to_string()]);
    }

    #[test]
    fn test_chronological_is_stable() {
        let t = Transcript::new(vec![
            Message::new("A", "second", 10),
            Message::new("B", "tie-first", 5),
            Message::new("A", "tie-second", 5),
        ]);
        let order: Vec<&str> = t.chronological().iter().map(|m| m.content.as_str()).collect();
        assert_eq!(order, vec!["tie-first", "tie-second", "second"]);
        // input order untouched
        assert_eq!(t.messages()[0].content, "second");
    }

    #[test]
    fn test_question_is_literal() {
        assert!(Message::new("A", "really?", 0).is_question());
        assert!(!Message::new("A", "I wonder why", 0).is_question());
    }

    #[test]
    fn test_elapsed_across_full_range() {
        assert_eq!(elapsed_ms(1_000, 3_500), 2_500.0);
        assert_eq!(elapsed_ms(5, 2), -3.0);
        assert!(elapsed_ms(i64::MIN, i64::MAX) > 1.8e19);
    }

    #[test]
    fn test_first_name() {
        assert_eq!(first_name("Julian Shaun M. Viloria"), "Julian");
        assert_eq!(first_name("Cher"), "Cher");
    }
}
