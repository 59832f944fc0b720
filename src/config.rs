//! Analysis configuration
//!
//! All thresholds and word lists are carried in one explicit structure that is
//! handed to every component. Values come from defaults, an optional TOML file,
//! and finally CLI overrides (applied by the binary).

use std::path::{Path, PathBuf};

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime};
use ::config::{Config, File};
use serde::Deserialize;

use crate::error::{AnalysisError, Result};
use crate::{
    DEFAULT_EMOJI_TOP_N, DEFAULT_INACTIVITY_THRESHOLD_HOURS, DEFAULT_NIGHT_END_HOUR,
    DEFAULT_NIGHT_START_HOUR, DEFAULT_PAIR_EMOJI_TOP_N, DEFAULT_PAIR_WORD_TOP_N,
    DEFAULT_POS_TOP_N, DEFAULT_TOP_N_WORDS,
};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub inactivity_threshold_hours: f64,
    pub night_start_hour: u32,
    pub night_end_hour: u32,
    pub top_n: usize,
    pub emoji_top_n: usize,
    pub pair_emoji_top_n: usize,
    pub pair_word_top_n: usize,
    pub pos_top_n: usize,
    pub custom_words: Vec<String>,
    pub excuse_words: Vec<String>,
    pub self_pronouns: Vec<String>,
    pub interjections: Vec<String>,
    /// Chat meta-words dropped from the valid-word POS analysis
    pub exclude_words: Vec<String>,
    /// Only keep messages from these senders (empty = keep everyone)
    pub participants: Vec<String>,
    /// Wall clock used for hours and formatted times; unset = host local zone
    pub utc_offset_minutes: Option<i32>,
    pub occasion: String,
    /// Replaces the built-in English stopword list
    pub stopwords_path: Option<PathBuf>,
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            inactivity_threshold_hours: DEFAULT_INACTIVITY_THRESHOLD_HOURS,
            night_start_hour: DEFAULT_NIGHT_START_HOUR,
            night_end_hour: DEFAULT_NIGHT_END_HOUR,
            top_n: DEFAULT_TOP_N_WORDS,
            emoji_top_n: DEFAULT_EMOJI_TOP_N,
            pair_emoji_top_n: DEFAULT_PAIR_EMOJI_TOP_N,
            pair_word_top_n: DEFAULT_PAIR_WORD_TOP_N,
            pos_top_n: DEFAULT_POS_TOP_N,
            custom_words: words(&["skibidi", "rizz", "gyatt", "fanum tax"]),
            excuse_words: words(&["sorry", "late", "cant", "wont", "busy", "forgot"]),
            self_pronouns: words(&["i", "me", "my", "mine", "myself"]),
            interjections: words(&["uh", "um", "er", "ah", "oh", "wow", "hmm", "huh"]),
            exclude_words: words(&["message", "reacted", "sent", "photo", "video", "audio"]),
            participants: Vec::new(),
            utc_offset_minutes: None,
            occasion: "Merry Christmas".to_string(),
            stopwords_path: None,
        }
    }
}

impl AnalysisConfig {
    /// Load from a TOML file; missing keys keep their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let s = Config::builder()
            .add_source(File::from(path))
            .build()?;
        let cfg: Self = s.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject values no component can work with
    pub fn validate(&self) -> Result<()> {
        if !(self.inactivity_threshold_hours > 0.0) {
            return Err(AnalysisError::InvalidConfig(format!(
                "inactivity_threshold_hours must be positive, got {}",
                self.inactivity_threshold_hours
            )));
        }
        for (name, hour) in [
            ("night_start_hour", self.night_start_hour),
            ("night_end_hour", self.night_end_hour),
        ] {
            if hour > 23 {
                return Err(AnalysisError::InvalidConfig(format!(
                    "{} must be within 0..=23, got {}",
                    name, hour
                )));
            }
        }
        if self.top_n == 0 {
            return Err(AnalysisError::InvalidConfig("top_n must be at least 1".into()));
        }
        if let Some(minutes) = self.utc_offset_minutes {
            if FixedOffset::east_opt(minutes.saturating_mul(60)).is_none() {
                return Err(AnalysisError::InvalidConfig(format!(
                    "utc_offset_minutes out of range: {}",
                    minutes
                )));
            }
        }
        Ok(())
    }

    pub fn wall_clock(&self) -> WallClock {
        self.utc_offset_minutes
            .and_then(|m| FixedOffset::east_opt(m.saturating_mul(60)))
            .map(WallClock::Fixed)
            .unwrap_or(WallClock::Local)
    }

    /// Night if `hour >= night_start` OR `hour < night_end` (independent checks)
    pub fn is_night_hour(&self, hour: u32) -> bool {
        hour >= self.night_start_hour || hour < self.night_end_hour
    }
}

/// Converts epoch milliseconds to wall-clock time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallClock {
    Local,
    Fixed(FixedOffset),
}

impl WallClock {
    pub fn utc() -> Self {
        FixedOffset::east_opt(0).map(Self::Fixed).unwrap_or(Self::Local)
    }

    /// None when the timestamp is outside chrono's range
    pub fn datetime(&self, timestamp_ms: i64) -> Option<NaiveDateTime> {
        let utc = DateTime::from_timestamp_millis(timestamp_ms)?;
        Some(match self {
            Self::Local => utc.with_timezone(&Local).naive_local(),
            Self::Fixed(offset) => utc.with_timezone(offset).naive_local(),
        })
    }

    /// `%Y-%m-%d %H:%M:%S`
    pub fn format(&self, timestamp_ms: i64) -> Option<String> {
        self.datetime(timestamp_ms)
            .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
    }
}
