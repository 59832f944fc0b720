//! One analysis run: transcript in, merged report out
//!
//! ```text
//! Transcript ─┬─ Aggregator (per participant, overall emoji)
//!             ├─ StructureEngine
//!             └─ InteractionEngine ── GreetingGenerator
//! ```

use std::collections::BTreeMap;

use chrono::Utc;
use tracing::{debug, info};

use crate::config::AnalysisConfig;
use crate::core::aggregate::{Aggregator, Totals};
use crate::core::collab::Collaborators;
use crate::core::greeting::GreetingGenerator;
use crate::core::interaction::InteractionEngine;
use crate::core::structure::StructureEngine;
use crate::types::{AnalysisReport, OverallAnalysis, ParticipantProfile, ReportMetadata, Transcript};
use crate::VERSION;

#[derive(Debug)]
pub struct Analyzer<'a> {
    cfg: &'a AnalysisConfig,
    collab: &'a Collaborators,
}

impl<'a> Analyzer<'a> {
    pub fn new(cfg: &'a AnalysisConfig, collab: &'a Collaborators) -> Self {
        Self { cfg, collab }
    }

    pub fn run(&self, transcript: &Transcript, input_digest: &str) -> AnalysisReport {
        let roster = transcript.participants();
        info!(
            messages = transcript.len(),
            participants = roster.len(),
            "analysis started"
        );

        let agg = Aggregator::new(self.collab, self.cfg, roster);
        let all = transcript.all();
        let totals = Totals::of(&all);

        // roster order keeps log output deterministic
        let mut profiles: BTreeMap<String, ParticipantProfile> = BTreeMap::new();
        for participant in roster {
            let messages = transcript.by_sender(participant);
            debug!(%participant, messages = messages.len(), "profiling participant");
            profiles.insert(participant.clone(), agg.profile(&messages, totals));
        }
        info!(count = profiles.len(), "participant profiles done");

        let structure = StructureEngine::new(self.cfg).analyze(transcript);
        info!("conversation structure done");

        let interactions = InteractionEngine::new(&agg).analyze(transcript);
        info!(edges = interactions.len(), "interaction index done");

        let greetings = GreetingGenerator::new(self.cfg).generate(&interactions, &profiles);
        info!("greetings done");

        AnalysisReport {
            metadata: ReportMetadata {
                version: VERSION.to_string(),
                generated_at: Utc::now(),
                input_digest: input_digest.to_string(),
                message_count: transcript.len(),
                participant_count: roster.len(),
            },
            participants: roster.to_vec(),
            analysis_by_participant: profiles,
            overall_analysis: OverallAnalysis {
                top_emojis: agg.emoji_usage(&all, self.cfg.emoji_top_n),
                structure,
                interaction_analysis: interactions,
            },
            inter_participant_greetings: greetings,
        }
    }
}
