//! Linguistic collaborators
//!
//! The aggregators only depend on these contracts. `Collaborators::builtin()`
//! wires the self-contained defaults; any of them can be swapped for a
//! different implementation.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::AnalysisConfig;
use crate::core::emoji::UnicodeEmojiExtractor;
use crate::core::lexicon::STOPWORDS;
use crate::core::readability::TextReadability;
use crate::core::sentiment::LexiconSentiment;
use crate::core::tokenize::{LexiconTagger, WordTokenizer};
use crate::error::{AnalysisError, Result};
use crate::{SENTIMENT_NEGATIVE_THRESHOLD, SENTIMENT_POSITIVE_THRESHOLD};

/// Splits cleaned text into word tokens
pub trait Tokenizer {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Assigns a Penn-style tag to each token
pub trait Tagger {
    fn tag(&self, tokens: &[String]) -> Vec<(String, String)>;
}

/// Raw sentiment scores of one text
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    /// -1.0 .. 1.0
    pub compound: f64,
    pub pos: f64,
    pub neu: f64,
    pub neg: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Positive,
    Neutral,
    Negative,
}

impl SentimentScore {
    pub fn neutral() -> Self {
        Self { compound: 0.0, pos: 0.0, neu: 0.0, neg: 0.0 }
    }

    /// compound >= 0.05 positive, <= -0.05 negative, else neutral
    pub fn polarity(&self) -> Polarity {
        if self.compound >= SENTIMENT_POSITIVE_THRESHOLD {
            Polarity::Positive
        } else if self.compound <= SENTIMENT_NEGATIVE_THRESHOLD {
            Polarity::Negative
        } else {
            Polarity::Neutral
        }
    }
}

pub trait SentimentScorer {
    fn score(&self, text: &str) -> SentimentScore;
}

/// Raw readability scores of one text
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Readability {
    pub grade_level: f64,
    pub dale_chall: f64,
}

pub trait ReadabilityScorer {
    fn score(&self, text: &str) -> Readability;
}

/// Ordered emoji glyphs, duplicates preserved
pub trait EmojiExtractor {
    fn extract(&self, text: &str) -> Vec<String>;
}

/// Prefix classification of tags
pub fn is_noun_tag(tag: &str) -> bool {
    tag.starts_with("NN")
}

pub fn is_verb_tag(tag: &str) -> bool {
    tag.starts_with("VB")
}

pub fn is_adjective_tag(tag: &str) -> bool {
    tag.starts_with("JJ")
}

/// Every collaborator a run needs, plus the stopword list
pub struct Collaborators {
    pub tokenizer: Box<dyn Tokenizer>,
    pub tagger: Box<dyn Tagger>,
    pub sentiment: Box<dyn SentimentScorer>,
    pub readability: Box<dyn ReadabilityScorer>,
    pub emoji: Box<dyn EmojiExtractor>,
    pub stopwords: HashSet<String>,
}

impl std::fmt::Debug for Collaborators {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collaborators")
            .field("stopwords", &self.stopwords.len())
            .finish_non_exhaustive()
    }
}

impl Collaborators {
    /// Built-in implementations with the built-in stopword list
    pub fn builtin() -> Self {
        Self {
            tokenizer: Box::new(WordTokenizer::new()),
            tagger: Box::new(LexiconTagger::new()),
            sentiment: Box::new(LexiconSentiment::new()),
            readability: Box::new(TextReadability::new()),
            emoji: Box::new(UnicodeEmojiExtractor::new()),
            stopwords: STOPWORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Built-ins, with the stopword list replaced when the config names a file
    pub fn from_config(cfg: &AnalysisConfig) -> Result<Self> {
        let mut collab = Self::builtin();
        if let Some(path) = &cfg.stopwords_path {
            collab.stopwords = load_stopwords(path)?;
            info!(path = %path.display(), count = collab.stopwords.len(), "loaded stopword list");
        }
        collab.validate()?;
        Ok(collab)
    }

    /// Probe every collaborator with a known input; fail before processing
    /// rather than silently degrading the analysis
    pub fn validate(&self) -> Result<()> {
        if self.stopwords.is_empty() {
            return Err(AnalysisError::CollaboratorUnavailable(
                "stopword list is empty".into(),
            ));
        }
        let tokens = self.tokenizer.tokenize("good friends laugh");
        if tokens.is_empty() {
            return Err(AnalysisError::CollaboratorUnavailable(
                "tokenizer produced no tokens for probe text".into(),
            ));
        }
        if self.tagger.tag(&tokens).len() != tokens.len() {
            return Err(AnalysisError::CollaboratorUnavailable(
                "tagger output does not align with its tokens".into(),
            ));
        }
        if self.sentiment.score("good").polarity() != Polarity::Positive {
            return Err(AnalysisError::CollaboratorUnavailable(
                "sentiment lexicon did not score probe word as positive".into(),
            ));
        }
        if self.emoji.extract("🎄").len() != 1 {
            return Err(AnalysisError::CollaboratorUnavailable(
                "emoji extractor did not recognise probe glyph".into(),
            ));
        }
        debug!("collaborators validated");
        Ok(())
    }
}

/// One word per line; blank lines and `#` comments skipped
fn load_stopwords(path: &Path) -> Result<HashSet<String>> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        AnalysisError::CollaboratorUnavailable(format!(
            "stopword list '{}' unreadable: {}",
            path.display(),
            e
        ))
    })?;
    Ok(text
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .collect())
}
