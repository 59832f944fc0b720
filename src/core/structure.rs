//! Conversation Structure Engine
//!
//! Whole-transcript temporal and conversational patterns: who starts
//! conversations, who is active at night, who monologues, who asks questions
//! and who gets called out by full name.

use chrono::Timelike;
use regex::Regex;
use tracing::debug;

use crate::config::{AnalysisConfig, WallClock};
use crate::core::counter::FrequencyCounter;
use crate::core::monologue::longest_monologues;
use crate::core::tokenize::compile_pattern;
use crate::types::{elapsed_ms, ConversationStructure, Message, Ranking, Transcript};

const MS_PER_HOUR: f64 = 3_600_000.0;

/// Initiation events per sender over chronologically sorted messages.
/// Ties keep the order in which senders first initiated.
pub fn initiators(sorted: &[&Message], threshold_hours: f64) -> Ranking {
    let mut counts = FrequencyCounter::new();
    let mut previous: Option<i64> = None;
    for msg in sorted {
        let starts = match previous {
            None => true,
            Some(prev) => elapsed_ms(prev, msg.timestamp_ms) / MS_PER_HOUR > threshold_hours,
        };
        if starts {
            counts.increment(msg.sender.as_str());
        }
        previous = Some(msg.timestamp_ms);
    }
    counts.ranked()
}

/// Messages sent during night hours, every participant listed
pub fn night_owls(
    messages: &[&Message],
    roster: &[String],
    cfg: &AnalysisConfig,
    clock: WallClock,
) -> Ranking {
    let mut counts = FrequencyCounter::with_keys(roster.iter().map(String::as_str));
    for msg in messages {
        let Some(when) = clock.datetime(msg.timestamp_ms) else {
            continue;
        };
        if cfg.is_night_hour(when.hour()) {
            counts.increment(msg.sender.as_str());
        }
    }
    counts.ranked()
}

/// Messages containing a literal `?`, every participant listed
pub fn question_askers(messages: &[&Message], roster: &[String]) -> Ranking {
    let mut counts = FrequencyCounter::with_keys(roster.iter().map(String::as_str));
    for msg in messages.iter().filter(|m| m.is_question()) {
        counts.increment(msg.sender.as_str());
    }
    counts.ranked()
}

/// `@Full Name` matcher
#[derive(Debug)]
pub struct FullNameMentions {
    pattern: Option<Regex>,
    roster: Vec<String>,
}

impl FullNameMentions {
    pub fn new(roster: &[String]) -> Self {
        // longest first so "Bob Jones" wins over "Bob"
        let mut names: Vec<&String> = roster.iter().collect();
        names.sort_by(|a, b| b.len().cmp(&a.len()));
        let alternatives = names.iter().map(|n| regex::escape(n)).collect::<Vec<_>>().join("|");
        let pattern = if alternatives.is_empty() {
            None
        } else {
            compile_pattern(&format!(r"(?i)@({})\b", alternatives), "full-name mentions")
        };
        Self { pattern, roster: roster.to_vec() }
    }

    /// Roster names mentioned in `text`, one entry per match
    pub fn find<'t>(&'t self, text: &'t str) -> impl Iterator<Item = &'t str> + 't {
        self.pattern
            .iter()
            .flat_map(move |re| re.captures_iter(text))
            .filter(move |caps| {
                // `@` must not follow a word character
                caps.get(0)
                    .and_then(|m| text[..m.start()].chars().next_back())
                    .map_or(true, |c| !(c.is_alphanumeric() || c == '_'))
            })
            .filter_map(move |caps| {
                let found = caps.get(1)?.as_str().to_lowercase();
                self.roster
                    .iter()
                    .find(|p| p.to_lowercase() == found)
                    .map(String::as_str)
            })
    }
}

/// Full-name `@` mentions received, every participant listed
pub fn special_mentions(messages: &[&Message], roster: &[String]) -> Ranking {
    let matcher = FullNameMentions::new(roster);
    let mut counts = FrequencyCounter::with_keys(roster.iter().map(String::as_str));
    for msg in messages {
        for name in matcher.find(&msg.content) {
            counts.increment(name);
        }
    }
    counts.ranked()
}

pub struct StructureEngine<'a> {
    cfg: &'a AnalysisConfig,
    clock: WallClock,
}

impl<'a> StructureEngine<'a> {
    pub fn new(cfg: &'a AnalysisConfig) -> Self {
        Self { cfg, clock: cfg.wall_clock() }
    }

    pub fn with_clock(cfg: &'a AnalysisConfig, clock: WallClock) -> Self {
        Self { cfg, clock }
    }

    pub fn analyze(&self, transcript: &Transcript) -> ConversationStructure {
        let roster = transcript.participants();
        let sorted = transcript.chronological();

        let structure = ConversationStructure {
            chat_initiator: initiators(&sorted, self.cfg.inactivity_threshold_hours),
            night_owl_score: night_owls(&sorted, roster, self.cfg, self.clock),
            longest_monologues_per_participant: longest_monologues(&sorted, roster, self.clock),
            question_askers: question_askers(&sorted, roster),
            special_mentions: special_mentions(&sorted, roster),
        };

        debug!(
            initiations = structure.chat_initiator.iter().map(|(_, n)| n).sum::<usize>(),
            participants = roster.len(),
            "conversation structure analyzed"
        );
        structure
    }
}
