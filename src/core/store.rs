//! Transcript loading and report persistence
//!
//! Input: one or more chat-export JSON files, each either a top-level array
//! of records or an object with a `messages` array. Records are cleaned
//! before they reach any component:
//!
//! - reaction notices ("X reacted 😂 to a message") dropped
//! - records without content dropped
//! - UTF-8 text that was decoded as Latin-1 repaired
//! - optional sender filter applied

use std::fs;
use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use tracing::{info, warn};

use crate::config::AnalysisConfig;
use crate::error::{AnalysisError, Result};
use crate::types::{AnalysisReport, Message, Transcript};

lazy_static! {
    static ref RE_REACTION: Regex = Regex::new(r"(?i)reacted .* to a message").unwrap();
}

#[derive(Debug, Deserialize)]
struct RawRecord {
    sender_name: String,
    timestamp_ms: i64,
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawDocument {
    Records(Vec<RawRecord>),
    Export { messages: Vec<RawRecord> },
}

impl RawDocument {
    fn into_records(self) -> Vec<RawRecord> {
        match self {
            Self::Records(records) => records,
            Self::Export { messages } => messages,
        }
    }
}

/// A cleaned transcript plus provenance
#[derive(Debug)]
pub struct LoadedTranscript {
    pub transcript: Transcript,
    /// SHA-256 over the raw bytes of every input, in order, hex
    pub digest: String,
    /// Records dropped by cleaning or the sender filter
    pub dropped: usize,
}

/// Undo UTF-8 bytes having been read as Latin-1; other text passes through
pub fn repair_mojibake(text: &str) -> String {
    if text.is_ascii() || text.chars().any(|c| c as u32 > 0xFF) {
        return text.to_string();
    }
    let bytes: Vec<u8> = text.chars().map(|c| c as u32 as u8).collect();
    String::from_utf8(bytes).unwrap_or_else(|_| text.to_string())
}

pub fn is_reaction(content: &str) -> bool {
    RE_REACTION.is_match(content)
}

/// Parse one document's records, no cleaning
pub fn parse_records(path: &Path, bytes: &[u8]) -> Result<Vec<Message>> {
    let doc: RawDocument = serde_json::from_slice(bytes).map_err(|source| {
        AnalysisError::InputMalformed { path: path.to_path_buf(), source }
    })?;
    Ok(doc
        .into_records()
        .into_iter()
        .map(|r| Message {
            sender: r.sender_name,
            content: r.content.unwrap_or_default(),
            timestamp_ms: r.timestamp_ms,
        })
        .collect())
}

/// Drop reactions, empty records and filtered senders; repair text
pub fn clean_messages(raw: Vec<Message>, participants: &[String]) -> (Vec<Message>, usize) {
    let total = raw.len();
    let kept: Vec<Message> = raw
        .into_iter()
        .filter(|m| !m.content.is_empty() && !is_reaction(&m.content))
        .map(|m| Message {
            sender: repair_mojibake(&m.sender),
            content: repair_mojibake(&m.content),
            timestamp_ms: m.timestamp_ms,
        })
        .filter(|m| participants.is_empty() || participants.contains(&m.sender))
        .collect();
    let dropped = total - kept.len();
    (kept, dropped)
}

/// Read, concatenate and clean every input; any failure aborts the run
pub fn load_transcript(paths: &[PathBuf], cfg: &AnalysisConfig) -> Result<LoadedTranscript> {
    let mut hasher = Sha256::new();
    let mut raw: Vec<Message> = Vec::new();

    for path in paths {
        let bytes = fs::read(path).map_err(|source| AnalysisError::InputUnavailable {
            path: path.clone(),
            source,
        })?;
        hasher.update(&bytes);
        let records = parse_records(path, &bytes)?;
        info!(path = %path.display(), records = records.len(), "input loaded");
        raw.extend(records);
    }

    let (messages, dropped) = clean_messages(raw, &cfg.participants);
    if dropped > 0 {
        warn!(dropped, "skipped reaction, empty or filtered records");
    }

    let digest = hasher
        .finalize()
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<String>();

    Ok(LoadedTranscript {
        transcript: Transcript::new(messages),
        digest,
        dropped,
    })
}

/// Write the report via a temp file in the target directory, then rename
pub fn save_report(report: &AnalysisReport, path: &Path) -> Result<()> {
    let output_err = |source: std::io::Error| AnalysisError::Output { path: path.to_path_buf(), source };

    let json = serde_json::to_string_pretty(report)
        .map_err(|e| output_err(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))?;

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&dir).map_err(output_err)?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "report.json".to_string());
    let tmp = dir.join(format!(".{}.tmp", file_name));

    fs::write(&tmp, json).map_err(output_err)?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(output_err(e));
    }
    info!(path = %path.display(), "report written");
    Ok(())
}
