//! Integration tests for the conversation structure engine
//!
//! - initiators: first message always counts, strict gap threshold
//! - night owl hours at the boundaries
//! - monologue invariant and tie-break

use chatlens::core::StructureEngine;
use chatlens::types::{Message, Transcript};
use chatlens::{AnalysisConfig, WallClock};
use pretty_assertions::assert_eq;

const MINUTE: i64 = 60_000;
const HOUR: i64 = 60 * MINUTE;

fn ranking(pairs: &[(&str, usize)]) -> Vec<(String, usize)> {
    pairs.iter().map(|(s, n)| (s.to_string(), *n)).collect()
}

fn analyze(messages: Vec<Message>) -> chatlens::types::ConversationStructure {
    let cfg = AnalysisConfig::default();
    StructureEngine::with_clock(&cfg, WallClock::utc()).analyze(&Transcript::new(messages))
}

// =============================================================================
// SCENARIO: A×3 then B×1, all within a minute
// =============================================================================

#[test]
fn test_short_burst_scenario() {
    let out = analyze(vec![
        Message::new("A", "one", 0),
        Message::new("A", "two", 10_000),
        Message::new("A", "three", 20_000),
        Message::new("B", "four", 30_000),
    ]);

    assert_eq!(out.chat_initiator, ranking(&[("A", 1)]));

    let a = &out.longest_monologues_per_participant[0];
    assert_eq!(a.author, "A");
    assert_eq!(a.message_count, 3);
    assert_eq!(a.monologue_content, vec!["one", "two", "three"]);
    assert_eq!(a.message_intervals_seconds, vec![10.0, 10.0]);
    assert_eq!(a.start_time.as_deref(), Some("1970-01-01 00:00:00"));

    let b = &out.longest_monologues_per_participant[1];
    assert_eq!(b.author, "B");
    assert_eq!(b.message_count, 1);
    assert!(b.message_intervals_seconds.is_empty());
}

// =============================================================================
// INITIATORS
// =============================================================================

#[test]
fn test_unsorted_input_is_sorted_before_scanning() {
    let out = analyze(vec![
        Message::new("B", "later", 10 * HOUR),
        Message::new("A", "first", 0),
    ]);
    assert_eq!(out.chat_initiator, ranking(&[("A", 1), ("B", 1)]));
}

#[test]
fn test_non_empty_transcript_has_an_initiator() {
    let out = analyze(vec![Message::new("Solo", "anyone?", 5 * MINUTE)]);
    assert!(!out.chat_initiator.is_empty());
}

#[test]
fn test_custom_threshold() {
    let cfg = AnalysisConfig { inactivity_threshold_hours: 1.0, ..Default::default() };
    let t = Transcript::new(vec![
        Message::new("A", "x", 0),
        Message::new("B", "y", 2 * HOUR),
    ]);
    let out = StructureEngine::with_clock(&cfg, WallClock::utc()).analyze(&t);
    assert_eq!(out.chat_initiator, ranking(&[("A", 1), ("B", 1)]));
}

// =============================================================================
// NIGHT OWLS
// =============================================================================

#[test]
fn test_night_boundaries() {
    let out = analyze(vec![
        Message::new("Night", "22:00", 22 * HOUR),
        Message::new("Day", "06:00", 24 * HOUR + 6 * HOUR),
        Message::new("Day", "21:59", 24 * HOUR + 21 * HOUR + 59 * MINUTE),
        Message::new("Night", "05:59", 48 * HOUR + 5 * HOUR + 59 * MINUTE),
    ]);
    assert_eq!(out.night_owl_score, ranking(&[("Night", 2), ("Day", 0)]));
}

#[test]
fn test_offset_clock_shifts_hours() {
    // 20:00 UTC is 22:00 at +02:00
    let cfg = AnalysisConfig { utc_offset_minutes: Some(120), ..Default::default() };
    let t = Transcript::new(vec![Message::new("A", "late", 20 * HOUR)]);
    let out = StructureEngine::new(&cfg).analyze(&t);
    assert_eq!(out.night_owl_score, ranking(&[("A", 1)]));
}

// =============================================================================
// MONOLOGUES
// =============================================================================

#[test]
fn test_monologue_invariant_holds_for_everyone() {
    let out = analyze(vec![
        Message::new("A", "1", 0),
        Message::new("B", "2", MINUTE),
        Message::new("B", "3", 2 * MINUTE),
        Message::new("A", "4", 3 * MINUTE),
        Message::new("B", "5", 4 * MINUTE),
    ]);
    assert_eq!(out.longest_monologues_per_participant.len(), 2);
    for record in &out.longest_monologues_per_participant {
        assert!(record.is_consistent(), "inconsistent record for {}", record.author);
    }
}

#[test]
fn test_monologue_tie_keeps_earliest() {
    let out = analyze(vec![
        Message::new("A", "early-1", 0),
        Message::new("A", "early-2", MINUTE),
        Message::new("B", "break", 2 * MINUTE),
        Message::new("A", "late-1", 3 * MINUTE),
        Message::new("A", "late-2", 4 * MINUTE),
    ]);
    let a = out
        .longest_monologues_per_participant
        .iter()
        .find(|r| r.author == "A")
        .unwrap();
    assert_eq!(a.monologue_content, vec!["early-1", "early-2"]);
    assert_eq!(a.end_time.as_deref(), Some("1970-01-01 00:01:00"));
}

// =============================================================================
// QUESTIONS AND MENTIONS
// =============================================================================

#[test]
fn test_questions_and_full_name_mentions() {
    let out = analyze(vec![
        Message::new("Alice Smith", "Hey @Bob how are you?", 0),
        Message::new("Bob Jones", "fine, @alice smith?", MINUTE),
        Message::new("Bob Jones", "you there?", 2 * MINUTE),
    ]);
    assert_eq!(out.question_askers, ranking(&[("Bob Jones", 2), ("Alice Smith", 1)]));
    assert_eq!(out.special_mentions, ranking(&[("Alice Smith", 1), ("Bob Jones", 0)]));
}

// =============================================================================
// EXTREME TIMESTAMPS: gaps wider than i64
// =============================================================================

#[test]
fn test_gap_across_full_timestamp_range_initiates() {
    let out = analyze(vec![
        Message::new("A", "ancient", i64::MIN + 1),
        Message::new("B", "far future", i64::MAX),
    ]);
    assert_eq!(out.chat_initiator, ranking(&[("A", 1), ("B", 1)]));
    // neither instant has a calendar date, so nobody is a night owl
    assert_eq!(out.night_owl_score, ranking(&[("A", 0), ("B", 0)]));
}

#[test]
fn test_monologue_interval_across_extreme_timestamps() {
    let out = analyze(vec![
        Message::new("A", "before", -9_000_000_000_000_000_000),
        Message::new("A", "after", 9_000_000_000_000_000_000),
    ]);
    let a = &out.longest_monologues_per_participant[0];
    assert_eq!(a.message_count, 2);
    assert_eq!(a.start_time, None);
    assert_eq!(a.end_time, None);
    assert_eq!(a.message_intervals_seconds.len(), 1);
    let interval = a.message_intervals_seconds[0];
    assert!((interval - 1.8e16).abs() / 1.8e16 < 1e-9, "interval was {}", interval);
}
