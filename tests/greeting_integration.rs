//! Integration tests for the greeting generator, driven through a full run
//!
//! - gift priority: no contact beats everything
//! - pair warmth overrides the upbeat-sender pass

use chatlens::core::{Analyzer, Collaborators};
use chatlens::types::{AnalysisReport, GiftRule, Message, Transcript};
use chatlens::AnalysisConfig;
use pretty_assertions::assert_eq;

fn run(messages: Vec<Message>) -> AnalysisReport {
    let cfg = AnalysisConfig { utc_offset_minutes: Some(0), ..Default::default() };
    let collab = Collaborators::builtin();
    Analyzer::new(&cfg, &collab).run(&Transcript::new(messages), "test")
}

#[test]
fn test_warm_pair_overrides_upbeat_sender() {
    let report = run(vec![
        Message::new("Alice Smith", "@Bob I love this", 0),
        Message::new("Alice Smith", "@Bob great job", 1_000),
        Message::new("Alice Smith", "@Bob awesome 🎄", 2_000),
        Message::new("Alice Smith", "@Bob table", 3_000),
        Message::new("Bob Jones", "thanks", 4_000),
    ]);

    let alice = &report.analysis_by_participant["Alice Smith"];
    assert_eq!(alice.sentiment.positive_percent, 75.0);
    let edge = report.overall_analysis.interaction_analysis.edge("Alice Smith", "Bob Jones").unwrap();
    assert_eq!(edge.sentiment.positive_percent, 75.0);

    let g = report.greeting("Alice Smith", "Bob Jones").unwrap();
    assert_eq!(g.greeting, "To my dear Bob, Merry Christmas! 🎄");
    assert_eq!(g.blessing, "So grateful for you this holiday season! Hope you have the best time.");
    assert_eq!(g.gift_rule, GiftRule::CozySocks);
    assert_eq!(g.gift, "A Pair of Cozy Socks");
}

#[test]
fn test_no_contact_gift_regardless_of_sentiment() {
    let report = run(vec![
        Message::new("Alice Smith", "I love everyone, best day ever!", 0),
        Message::new("Bob Jones", "wonderful", 1_000),
    ]);

    let g = report.greeting("Alice Smith", "Bob Jones").unwrap();
    assert_eq!(g.gift_rule, GiftRule::NoContact);
    assert_eq!(g.gift, "A 'Thinking of You' Card (since we don't talk much!)");
    // sender is upbeat overall, pair has no messages
    assert_eq!(g.greeting, "Merry Christmas, Bob! Hope you have a wonderful time! 🎄");
    assert_eq!(
        g.blessing,
        "May your Christmas sparkle with moments of love, laughter, and goodwill!"
    );
}

#[test]
fn test_every_ordered_pair_gets_a_greeting() {
    let report = run(vec![
        Message::new("A", "x", 0),
        Message::new("B", "y", 1),
        Message::new("C", "z", 2),
    ]);
    assert_eq!(report.greeting_count(), 6);
    assert!(report.greeting("A", "A").is_none());
}

#[test]
fn test_hostile_pair_gets_boxing_glove() {
    let report = run(vec![
        Message::new("Alice Smith", "@Bob you are terrible", 0),
        Message::new("Alice Smith", "@Bob I hate this", 1_000),
        Message::new("Bob Jones", "ok", 2_000),
    ]);
    let g = report.greeting("Alice Smith", "Bob Jones").unwrap();
    assert_eq!(g.gift_rule, GiftRule::BoxingGlove);
    assert_eq!(g.greeting, "Merry Christmas, Bob!");
}
