//! Greeting Generator
//!
//! One artifact per ordered pair, a pure function of the pair's edge and the
//! sender's overall profile.

use std::collections::BTreeMap;

use tracing::debug;

use crate::config::AnalysisConfig;
use crate::types::{
    first_name, GiftRule, GreetingArtifact, InteractionEdge, InteractionIndex, PairMap,
    ParticipantProfile,
};
use crate::{
    GIFT_BOOK_GRADE_LEVEL, GIFT_GLOVE_NEGATIVE_PERCENT, GIFT_PHOTO_POSITIVE_PERCENT,
    GREETING_UPBEAT_POSITIVE_PERCENT, GREETING_WARM_PAIR_POSITIVE_PERCENT,
};

const BASE_BLESSING: &str = "Wishing you all the best this holiday season.";
const UPBEAT_SUFFIX: &str = " Hope you have a wonderful time! 🎄";
const UPBEAT_BLESSING: &str =
    "May your Christmas sparkle with moments of love, laughter, and goodwill!";
const WARM_BLESSING: &str = "So grateful for you this holiday season! Hope you have the best time.";

/// First matching rule wins
pub fn gift_rule(edge: &InteractionEdge, sender: &ParticipantProfile) -> GiftRule {
    if edge.message_count == 0 {
        GiftRule::NoContact
    } else if edge.sentiment.positive_percent > GIFT_PHOTO_POSITIVE_PERCENT {
        GiftRule::FramedPhoto
    } else if edge.sentiment.negative_percent > GIFT_GLOVE_NEGATIVE_PERCENT {
        GiftRule::BoxingGlove
    } else if sender.reading_level.grade_level > GIFT_BOOK_GRADE_LEVEL {
        GiftRule::Book
    } else {
        GiftRule::CozySocks
    }
}

pub struct GreetingGenerator<'a> {
    occasion: &'a str,
}

impl<'a> GreetingGenerator<'a> {
    pub fn new(cfg: &'a AnalysisConfig) -> Self {
        Self { occasion: &cfg.occasion }
    }

    pub fn artifact(
        &self,
        sender: &str,
        receiver: &str,
        edge: &InteractionEdge,
        profile: &ParticipantProfile,
    ) -> GreetingArtifact {
        let first = first_name(receiver);
        let mut greeting = format!("{}, {}!", self.occasion, first);
        let mut blessing = BASE_BLESSING.to_string();

        if profile.sentiment.positive_percent > GREETING_UPBEAT_POSITIVE_PERCENT {
            greeting.push_str(UPBEAT_SUFFIX);
            blessing = UPBEAT_BLESSING.to_string();
        }
        // evaluated regardless of the upbeat pass, and overrides it
        if edge.sentiment.positive_percent > GREETING_WARM_PAIR_POSITIVE_PERCENT {
            greeting = format!("To my dear {}, {}! {}", first, self.occasion, edge.emoji_string());
            blessing = WARM_BLESSING.to_string();
        }

        let gift_rule = gift_rule(edge, profile);
        GreetingArtifact {
            greeting,
            blessing,
            gift: gift_rule.gift_text(sender),
            gift_rule,
        }
    }

    /// Artifacts for every edge whose sender has a profile
    pub fn generate(
        &self,
        index: &InteractionIndex,
        profiles: &BTreeMap<String, ParticipantProfile>,
    ) -> PairMap<GreetingArtifact> {
        let mut out: PairMap<GreetingArtifact> = PairMap::new();
        for (sender, receiver, edge) in index.iter() {
            let Some(profile) = profiles.get(sender) else {
                continue;
            };
            let artifact = self.artifact(sender, receiver, edge, profile);
            debug!(sender, receiver, rule = ?artifact.gift_rule, "greeting generated");
            out.entry(sender.to_string())
                .or_default()
                .insert(receiver.to_string(), artifact);
        }
        out
    }
}
