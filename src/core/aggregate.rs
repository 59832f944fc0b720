//! Aggregation over a message subset
//!
//! Every function is a pure function of the subset it receives, so the same
//! code serves a participant's messages, one interaction pair's messages and
//! the whole transcript.

use std::collections::{BTreeMap, HashMap, HashSet};

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::config::AnalysisConfig;
use crate::core::collab::{is_adjective_tag, is_noun_tag, is_verb_tag, Collaborators, Polarity};
use crate::core::counter::FrequencyCounter;
use crate::core::tokenize::{clean_text, compile_pattern};
use crate::types::{
    percent, round2, Activity, Message, ParticipantProfile, PosCounts, Ranking, ReadingLevel,
    SentimentExamples, SentimentSummary, ValidWords,
};

lazy_static! {
    static ref RE_WORD: Regex = Regex::new(r"\b\w+\b").unwrap();
    static ref RE_VALID_WORD: Regex = Regex::new(r"\b[a-z]{3,}\b").unwrap();
}

/// Transcript-wide totals used for share percentages
#[derive(Debug, Clone, Copy, Default)]
pub struct Totals {
    pub messages: usize,
    pub words: usize,
}

impl Totals {
    pub fn of(messages: &[&Message]) -> Self {
        Self {
            messages: messages.len(),
            words: messages.iter().map(|m| space_word_count(&m.content)).sum(),
        }
    }
}

/// Words separated by single spaces, empties dropped
pub fn space_word_count(content: &str) -> usize {
    content.split(' ').filter(|w| !w.is_empty()).count()
}

/// Lowercase tokens of every participant name
pub fn name_tokens(participants: &[String]) -> HashSet<String> {
    participants
        .iter()
        .flat_map(|p| p.to_lowercase().split_whitespace().map(str::to_string).collect::<Vec<_>>())
        .collect()
}

/// Shared aggregation contracts, bound to one run's collaborators and config
pub struct Aggregator<'a> {
    collab: &'a Collaborators,
    cfg: &'a AnalysisConfig,
    names: HashSet<String>,
    interjections: HashSet<String>,
    excluded: HashSet<String>,
    pronouns: Vec<(String, Option<Regex>)>,
    phrases: HashMap<String, Option<Regex>>,
}

impl<'a> Aggregator<'a> {
    pub fn new(collab: &'a Collaborators, cfg: &'a AnalysisConfig, participants: &[String]) -> Self {
        let names = name_tokens(participants);
        let interjections = cfg.interjections.iter().map(|w| w.to_lowercase()).collect();
        let excluded = cfg
            .exclude_words
            .iter()
            .map(|w| w.to_lowercase())
            .chain(names.iter().cloned())
            .collect();
        let pronouns = cfg
            .self_pronouns
            .iter()
            .map(|p| {
                let re = compile_pattern(&format!(r"(?i)\b{}\b", regex::escape(p)), "self pronoun");
                (p.clone(), re)
            })
            .collect();
        let phrases = cfg
            .custom_words
            .iter()
            .filter_map(|entry| {
                let lower = entry.to_lowercase();
                let parts: Vec<&str> = lower.split_whitespace().collect();
                if parts.len() < 2 {
                    return None;
                }
                let re = compile_pattern(&phrase_pattern(&parts), "custom phrase");
                Some((lower, re))
            })
            .collect();
        Self { collab, cfg, names, interjections, excluded, pronouns, phrases }
    }

    pub fn config(&self) -> &AnalysisConfig {
        self.cfg
    }

    // =========================================================================
    // Affect
    // =========================================================================

    /// Positive / neutral / negative shares over non-empty messages
    pub fn sentiment(&self, messages: &[&Message]) -> SentimentSummary {
        let (mut pos, mut neu, mut neg) = (0usize, 0usize, 0usize);
        let mut most_positive = (String::new(), 0.0_f64);
        let mut most_negative = (String::new(), 0.0_f64);

        for msg in messages.iter().filter(|m| !m.content.is_empty()) {
            let score = self.collab.sentiment.score(&msg.content);
            match score.polarity() {
                Polarity::Positive => {
                    pos += 1;
                    if score.compound > most_positive.1 {
                        most_positive = (msg.content.clone(), score.compound);
                    }
                }
                Polarity::Negative => {
                    neg += 1;
                    if score.compound < most_negative.1 {
                        most_negative = (msg.content.clone(), score.compound);
                    }
                }
                Polarity::Neutral => neu += 1,
            }
        }

        let count = pos + neu + neg;
        if count == 0 {
            return SentimentSummary::empty();
        }
        SentimentSummary {
            positive_percent: percent(pos, count),
            neutral_percent: percent(neu, count),
            negative_percent: percent(neg, count),
            sentiment_examples: SentimentExamples {
                most_positive: most_positive.0,
                most_negative: most_negative.0,
            },
        }
    }

    /// Readability of all non-empty messages joined with ". "
    pub fn reading_level(&self, messages: &[&Message]) -> ReadingLevel {
        let full_text = messages
            .iter()
            .filter(|m| !m.content.is_empty())
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join(". ");
        if full_text.trim().is_empty() {
            return ReadingLevel::empty();
        }

        let scores = self.collab.readability.score(&full_text);
        let grade = scores.grade_level;
        let interpretation = if grade <= 5.0 {
            "5th Grader"
        } else if grade <= 8.0 {
            "8th Grader"
        } else if grade <= 12.0 {
            "High School Student"
        } else {
            "College Graduate"
        };

        ReadingLevel {
            grade_level: round2(grade),
            dale_chall: round2(scores.dale_chall),
            interpretation: interpretation.to_string(),
            age_estimate: (grade + 5.0).round() as i64,
        }
    }

    // =========================================================================
    // Emoji
    // =========================================================================

    pub fn emoji_usage(&self, messages: &[&Message], top_n: usize) -> Ranking {
        messages
            .iter()
            .flat_map(|m| self.collab.emoji.extract(&m.content))
            .collect::<FrequencyCounter>()
            .most_common(top_n)
    }

    // =========================================================================
    // Lexical
    // =========================================================================

    /// Content words: no stopwords, numbers, name tokens or interjections
    pub fn word_counts(&self, messages: &[&Message]) -> FrequencyCounter {
        let mut counts = FrequencyCounter::new();
        for msg in messages {
            let cleaned = clean_text(&msg.content);
            for word in self.collab.tokenizer.tokenize(&cleaned) {
                if self.collab.stopwords.contains(&word)
                    || word.chars().all(char::is_numeric)
                    || self.names.contains(&word)
                    || self.interjections.contains(&word)
                {
                    continue;
                }
                counts.increment(word);
            }
        }
        counts
    }

    pub fn most_common_words(&self, messages: &[&Message], top_n: usize) -> Ranking {
        self.word_counts(messages).most_common(top_n)
    }

    /// Single words from the filtered counts; phrases by whole-phrase match
    pub fn custom_word_counts(
        &self,
        messages: &[&Message],
        counts: &FrequencyCounter,
    ) -> BTreeMap<String, usize> {
        self.cfg
            .custom_words
            .iter()
            .map(|entry| {
                let entry_lower = entry.to_lowercase();
                let n = match self.phrases.get(&entry_lower) {
                    Some(re) => phrase_count(messages, re.as_ref()),
                    None => counts.get(&entry_lower),
                };
                (entry.clone(), n)
            })
            .collect()
    }

    /// Raw occurrences of each excuse word among all tokens
    pub fn excuse_factor(&self, messages: &[&Message]) -> BTreeMap<String, usize> {
        let tokens: FrequencyCounter = messages
            .iter()
            .flat_map(|m| {
                let lower = m.content.to_lowercase();
                RE_WORD.find_iter(&lower).map(|w| w.as_str().to_string()).collect::<Vec<_>>()
            })
            .collect();
        self.cfg
            .excuse_words
            .iter()
            .map(|w| (w.clone(), tokens.get(&w.to_lowercase())))
            .collect()
    }

    /// Case-insensitive whole-word occurrences of each self pronoun
    pub fn self_pronoun_counts(&self, messages: &[&Message]) -> BTreeMap<String, usize> {
        self.pronouns
            .iter()
            .map(|(pronoun, re)| {
                let count = re
                    .as_ref()
                    .map_or(0, |re| messages.iter().map(|m| re.find_iter(&m.content).count()).sum());
                (pronoun.clone(), count)
            })
            .collect()
    }

    pub fn pos_counts(&self, messages: &[&Message]) -> PosCounts {
        let mut counts = PosCounts::default();
        for msg in messages {
            let tokens = self.collab.tokenizer.tokenize(&msg.content.to_lowercase());
            for (_, tag) in self.collab.tagger.tag(&tokens) {
                if is_adjective_tag(&tag) {
                    counts.adjectives += 1;
                } else if is_verb_tag(&tag) {
                    counts.verbs += 1;
                } else if is_noun_tag(&tag) {
                    counts.nouns += 1;
                }
            }
        }
        counts
    }

    /// Top nouns / adjectives / verbs among 3+ letter content words
    pub fn valid_words(&self, messages: &[&Message]) -> ValidWords {
        let words: Vec<String> = messages
            .iter()
            .flat_map(|m| {
                let cleaned = clean_text(&m.content);
                RE_VALID_WORD
                    .find_iter(&cleaned)
                    .map(|w| w.as_str().to_string())
                    .collect::<Vec<_>>()
            })
            .filter(|w| !self.collab.stopwords.contains(w) && !self.excluded.contains(w))
            .collect();

        let mut nouns = FrequencyCounter::new();
        let mut adjectives = FrequencyCounter::new();
        let mut verbs = FrequencyCounter::new();
        for (word, tag) in self.collab.tagger.tag(&words) {
            if is_noun_tag(&tag) {
                nouns.increment(word);
            } else if is_adjective_tag(&tag) {
                adjectives.increment(word);
            } else if is_verb_tag(&tag) {
                verbs.increment(word);
            }
        }

        // first of the longest
        let longest_word = words
            .iter()
            .fold("", |best, w| if w.len() > best.len() { w.as_str() } else { best })
            .to_string();

        let n = self.cfg.pos_top_n;
        ValidWords {
            nouns: nouns.most_common(n),
            adjectives: adjectives.most_common(n),
            verbs: verbs.most_common(n),
            longest_word,
        }
    }

    // =========================================================================
    // Activity
    // =========================================================================

    pub fn activity(&self, messages: &[&Message], totals: Totals) -> Activity {
        let message_count = messages.len();
        let word_count: usize = messages.iter().map(|m| space_word_count(&m.content)).sum();
        Activity {
            message_count,
            word_count,
            message_percentage: percent(message_count, totals.messages),
            word_percentage: percent(word_count, totals.words),
            avg_words_per_message: if message_count == 0 {
                0.0
            } else {
                round2(word_count as f64 / message_count as f64)
            },
        }
    }

    // =========================================================================
    // Bundle
    // =========================================================================

    /// Full per-participant bundle
    pub fn profile(&self, messages: &[&Message], totals: Totals) -> ParticipantProfile {
        let counts = self.word_counts(messages);
        let profile = ParticipantProfile {
            activity: self.activity(messages, totals),
            most_common_words: counts.most_common(self.cfg.top_n),
            custom_word_counts: self.custom_word_counts(messages, &counts),
            reading_level: self.reading_level(messages),
            sentiment: self.sentiment(messages),
            emoji_usage: self.emoji_usage(messages, self.cfg.emoji_top_n),
            excuse_factor: self.excuse_factor(messages),
            pos_counts: self.pos_counts(messages),
            self_pronoun_counts: self.self_pronoun_counts(messages),
            valid_words: self.valid_words(messages),
        };
        debug!(
            messages = messages.len(),
            distinct_words = counts.len(),
            "profile aggregated"
        );
        profile
    }
}

/// Whole phrase, words separated by any whitespace
fn phrase_pattern(parts: &[&str]) -> String {
    format!(
        r"\b{}\b",
        parts.iter().map(|p| regex::escape(p)).collect::<Vec<_>>().join(r"\s+")
    )
}

fn phrase_count(messages: &[&Message], re: Option<&Regex>) -> usize {
    let Some(re) = re else {
        return 0;
    };
    messages
        .iter()
        .map(|m| re.find_iter(&clean_text(&m.content)).count())
        .sum()
}
