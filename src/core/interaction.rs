//! Interaction Engine
//!
//! Attributes each message to the participants it `@`-mentions by first name,
//! then aggregates every directed (sender, receiver) pair on its own subset.
//!
//! Resolution is first-match: a token maps to the first roster participant,
//! other than the sender, whose name starts with it. Two participants sharing
//! a first-name prefix are therefore not distinguished.

use std::collections::{BTreeMap, HashMap};

use regex::Regex;
use tracing::debug;

use crate::core::aggregate::Aggregator;
use crate::core::tokenize::compile_pattern;
use crate::types::{first_name, InteractionEdge, InteractionIndex, Message, PairMap, Transcript};

/// `@first-name` matcher and resolver for one roster
#[derive(Debug)]
pub struct MentionResolver {
    pattern: Option<Regex>,
    roster: Vec<String>,
    lowered: Vec<String>,
}

impl MentionResolver {
    pub fn new(roster: &[String]) -> Self {
        let mut tokens: Vec<String> = Vec::new();
        for name in roster {
            let token = first_name(name).to_lowercase();
            if !token.is_empty() && !tokens.contains(&token) {
                tokens.push(token);
            }
        }
        // longest first so a shorter token never pre-empts a longer one
        tokens.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));

        let pattern = if tokens.is_empty() {
            None
        } else {
            let alternatives = tokens.iter().map(|t| regex::escape(t)).collect::<Vec<_>>().join("|");
            compile_pattern(&format!("(?i)@({})", alternatives), "first-name mentions")
        };

        Self {
            pattern,
            roster: roster.to_vec(),
            lowered: roster.iter().map(|p| p.to_lowercase()).collect(),
        }
    }

    /// Distinct mention tokens in order of appearance, lowercased
    pub fn mentions(&self, text: &str) -> Vec<String> {
        let Some(re) = &self.pattern else {
            return Vec::new();
        };
        let mut found: Vec<String> = Vec::new();
        for caps in re.captures_iter(text) {
            if let Some(m) = caps.get(1) {
                let token = m.as_str().to_lowercase();
                if !found.contains(&token) {
                    found.push(token);
                }
            }
        }
        found
    }

    /// First roster participant other than `sender` whose name starts with `token`
    pub fn resolve(&self, token: &str, sender: &str) -> Option<&str> {
        let token = token.to_lowercase();
        self.roster
            .iter()
            .zip(&self.lowered)
            .find(|(name, lower)| name.as_str() != sender && lower.starts_with(&token))
            .map(|(name, _)| name.as_str())
    }

    /// Distinct receivers of one message
    pub fn receivers(&self, msg: &Message) -> Vec<&str> {
        let mut receivers: Vec<&str> = Vec::new();
        for token in self.mentions(&msg.content) {
            if let Some(receiver) = self.resolve(&token, &msg.sender) {
                if !receivers.contains(&receiver) {
                    receivers.push(receiver);
                }
            }
        }
        receivers
    }
}

pub struct InteractionEngine<'a> {
    agg: &'a Aggregator<'a>,
}

impl<'a> InteractionEngine<'a> {
    pub fn new(agg: &'a Aggregator<'a>) -> Self {
        Self { agg }
    }

    /// Messages attributed to each directed pair
    pub fn attribute<'t>(&self, transcript: &'t Transcript) -> HashMap<(String, String), Vec<&'t Message>> {
        let resolver = MentionResolver::new(transcript.participants());
        let mut subsets: HashMap<(String, String), Vec<&'t Message>> = HashMap::new();
        for msg in transcript.chronological() {
            for receiver in resolver.receivers(msg) {
                subsets
                    .entry((msg.sender.clone(), receiver.to_string()))
                    .or_default()
                    .push(msg);
            }
        }
        subsets
    }

    /// Full `n * (n - 1)` edge set
    pub fn analyze(&self, transcript: &Transcript) -> InteractionIndex {
        let roster = transcript.participants();
        let subsets = self.attribute(transcript);
        let cfg = self.agg.config();

        let mut edges: PairMap<InteractionEdge> = BTreeMap::new();
        for sender in roster {
            let row = edges.entry(sender.clone()).or_default();
            for receiver in roster.iter().filter(|r| *r != sender) {
                let edge = match subsets.get(&(sender.clone(), receiver.clone())) {
                    Some(messages) if !messages.is_empty() => InteractionEdge {
                        message_count: messages.len(),
                        sentiment: self.agg.sentiment(messages),
                        emojis: self.agg.emoji_usage(messages, cfg.pair_emoji_top_n),
                        common_words: self.agg.most_common_words(messages, cfg.pair_word_top_n),
                    },
                    _ => InteractionEdge::empty(),
                };
                debug!(%sender, %receiver, messages = edge.message_count, "interaction edge");
                row.insert(receiver.clone(), edge);
            }
        }

        InteractionIndex::new(edges)
    }
}
