//! Core engines for chatlens

pub mod aggregate;
pub mod collab;
pub mod counter;
pub mod emoji;
pub mod greeting;
pub mod interaction;
pub mod lexicon;
pub mod monologue;
pub mod pipeline;
pub mod readability;
pub mod sentiment;
pub mod store;
pub mod structure;
pub mod tokenize;

pub use aggregate::{Aggregator, Totals};
pub use collab::{
    Collaborators, EmojiExtractor, Polarity, Readability, ReadabilityScorer, SentimentScore,
    SentimentScorer, Tagger, Tokenizer,
};
pub use counter::FrequencyCounter;
pub use greeting::{gift_rule, GreetingGenerator};
pub use interaction::{InteractionEngine, MentionResolver};
pub use monologue::{longest_monologues, MonologueTracker};
pub use pipeline::Analyzer;
pub use store::{load_transcript, save_report, LoadedTranscript};
pub use structure::{initiators, night_owls, question_askers, special_mentions, StructureEngine};
