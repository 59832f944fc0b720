//! Directed interaction index
//!
//! One edge per ordered pair of distinct participants, populated by the
//! sender's messages that mention the receiver. No symmetry is assumed.

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::types::{Ranking, SentimentSummary};

/// `sender → receiver → T`
pub type PairMap<T> = BTreeMap<String, BTreeMap<String, T>>;

/// Pair-scoped analytics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionEdge {
    pub message_count: usize,
    pub sentiment: SentimentSummary,
    pub emojis: Ranking,
    pub common_words: Ranking,
}

impl InteractionEdge {
    /// Edge for a pair with no attributed messages
    pub fn empty() -> Self {
        Self {
            message_count: 0,
            sentiment: SentimentSummary::empty(),
            emojis: Vec::new(),
            common_words: Vec::new(),
        }
    }

    /// Concatenated top emojis, used by the warm greeting template
    pub fn emoji_string(&self) -> String {
        self.emojis.iter().map(|(e, _)| e.as_str()).collect()
    }
}

/// Complete `n * (n - 1)` edge set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InteractionIndex {
    edges: PairMap<InteractionEdge>,
}

impl InteractionIndex {
    pub fn new(edges: PairMap<InteractionEdge>) -> Self {
        Self { edges }
    }

    pub fn edge(&self, sender: &str, receiver: &str) -> Option<&InteractionEdge> {
        self.edges.get(sender)?.get(receiver)
    }

    /// Number of directed edges
    pub fn len(&self) -> usize {
        self.edges.values().map(|r| r.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `(sender, receiver, edge)` in sorted order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &InteractionEdge)> {
        self.edges.iter().flat_map(|(sender, receivers)| {
            receivers
                .iter()
                .map(move |(receiver, edge)| (sender.as_str(), receiver.as_str(), edge))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emoji_string_concatenates_in_rank_order() {
        let mut edge = InteractionEdge::empty();
        edge.emojis = vec![("🎄".into(), 3), ("😂".into(), 1)];
        assert_eq!(edge.emoji_string(), "🎄😂");
    }

    #[test]
    fn test_index_len_counts_directed_edges() {
        let mut edges: PairMap<InteractionEdge> = BTreeMap::new();
        edges.entry("A".into()).or_default().insert("B".into(), InteractionEdge::empty());
        edges.entry("B".into()).or_default().insert("A".into(), InteractionEdge::empty());
        let index = InteractionIndex::new(edges);
        assert_eq!(index.len(), 2);
        assert!(index.edge("A", "B").is_some());
        assert!(index.edge("A", "A").is_none());
    }
}
