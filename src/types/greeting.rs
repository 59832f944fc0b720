//! Greeting artifacts

use serde::{Deserialize, Serialize};

/// Which gift rule fired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GiftRule {
    /// No attributed messages
    NoContact,
    /// Pair positive share > 80%
    FramedPhoto,
    /// Pair negative share > 50%
    BoxingGlove,
    /// Sender grade level > 12
    Book,
    /// Nothing else matched
    CozySocks,
}

impl GiftRule {
    /// Gift text; the photo gift names the sender
    pub fn gift_text(&self, sender: &str) -> String {
        match self {
            Self::NoContact => "A 'Thinking of You' Card (since we don't talk much!)".to_string(),
            Self::FramedPhoto => format!("A Framed Photo of You and {}", sender),
            Self::BoxingGlove => "A Boxing Glove (for our next debate)".to_string(),
            Self::Book => "A Book Recommendation".to_string(),
            Self::CozySocks => "A Pair of Cozy Socks".to_string(),
        }
    }
}

/// Directed (sender → receiver) greeting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GreetingArtifact {
    pub greeting: String,
    pub blessing: String,
    pub gift: String,
    pub gift_rule: GiftRule,
}
