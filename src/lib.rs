//! chatlens: conversation structure and pairwise interaction analytics
//!
//! Transcript → aggregators + structure engine → interaction engine →
//! greeting generator → one merged report

pub mod config;
pub mod core;
pub mod error;
pub mod types;

pub use crate::config::{AnalysisConfig, WallClock};
pub use crate::error::AnalysisError;

// =============================================================================
// CONVERSATION STRUCTURE DEFAULTS
// =============================================================================

/// Gap (hours) after which a message starts a new conversation
pub const DEFAULT_INACTIVITY_THRESHOLD_HOURS: f64 = 6.0;

/// First hour counted as night (inclusive)
pub const DEFAULT_NIGHT_START_HOUR: u32 = 22;

/// First hour no longer counted as night (exclusive)
pub const DEFAULT_NIGHT_END_HOUR: u32 = 6;

// =============================================================================
// AGGREGATION SIZES
// =============================================================================

/// Most common words kept per participant
pub const DEFAULT_TOP_N_WORDS: usize = 20;

/// Emojis kept per participant and overall
pub const DEFAULT_EMOJI_TOP_N: usize = 5;

/// Emojis kept per interaction edge
pub const DEFAULT_PAIR_EMOJI_TOP_N: usize = 3;

/// Words kept per interaction edge
pub const DEFAULT_PAIR_WORD_TOP_N: usize = 5;

/// Nouns / verbs / adjectives kept per participant
pub const DEFAULT_POS_TOP_N: usize = 5;

// =============================================================================
// SENTIMENT THRESHOLDS
// =============================================================================

/// compound >= this → positive
pub const SENTIMENT_POSITIVE_THRESHOLD: f64 = 0.05;

/// compound <= this → negative
pub const SENTIMENT_NEGATIVE_THRESHOLD: f64 = -0.05;

// =============================================================================
// GREETING RULES (percent shares)
// =============================================================================

pub const GIFT_PHOTO_POSITIVE_PERCENT: f64 = 80.0;
pub const GIFT_GLOVE_NEGATIVE_PERCENT: f64 = 50.0;
pub const GIFT_BOOK_GRADE_LEVEL: f64 = 12.0;
pub const GREETING_UPBEAT_POSITIVE_PERCENT: f64 = 70.0;
pub const GREETING_WARM_PAIR_POSITIVE_PERCENT: f64 = 70.0;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
