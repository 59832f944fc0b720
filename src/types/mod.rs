//! Core types for chatlens

mod message;
mod profile;
mod structure;
mod interaction;
mod greeting;
mod report;

pub use message::{Message, Transcript, elapsed_ms, first_name};
pub use profile::{
    Activity, ParticipantProfile, PosCounts, Ranking, ReadingLevel, SentimentExamples,
    SentimentSummary, ValidWords, NO_MESSAGES, NO_TEXT, percent, round2,
};
pub use structure::{ConversationStructure, MonologueRecord};
pub use interaction::{InteractionEdge, InteractionIndex, PairMap};
pub use greeting::{GiftRule, GreetingArtifact};
pub use report::{AnalysisReport, OverallAnalysis, ReportMetadata};
