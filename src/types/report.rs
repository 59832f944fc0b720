//! The single output document of a run

use std::collections::BTreeMap;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::types::{
    ConversationStructure, GreetingArtifact, InteractionIndex, PairMap, ParticipantProfile,
    Ranking,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub version: String,
    pub generated_at: DateTime<Utc>,
    /// SHA-256 of the raw input bytes, hex
    pub input_digest: String,
    pub message_count: usize,
    pub participant_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallAnalysis {
    pub top_emojis: Ranking,
    #[serde(flatten)]
    pub structure: ConversationStructure,
    pub interaction_analysis: InteractionIndex,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub metadata: ReportMetadata,
    pub participants: Vec<String>,
    pub analysis_by_participant: BTreeMap<String, ParticipantProfile>,
    pub overall_analysis: OverallAnalysis,
    pub inter_participant_greetings: PairMap<GreetingArtifact>,
}

impl AnalysisReport {
    pub fn greeting(&self, sender: &str, receiver: &str) -> Option<&GreetingArtifact> {
        self.inter_participant_greetings.get(sender)?.get(receiver)
    }

    pub fn greeting_count(&self) -> usize {
        self.inter_participant_greetings.values().map(|r| r.len()).sum()
    }
}
