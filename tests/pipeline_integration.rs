//! End-to-end: export files on disk → report on disk
//!
//! Checks the document shape, cleaning of the input stream and that empty
//! subsets still produce every key.

use std::fs;
use std::path::{Path, PathBuf};

use chatlens::core::{load_transcript, save_report, Analyzer, Collaborators};
use chatlens::types::{AnalysisReport, NO_MESSAGES};
use chatlens::{AnalysisConfig, VERSION};
use pretty_assertions::assert_eq;
use serde_json::Value;

const EXPORT: &str = r#"{
  "participants": [{"name": "Alice Smith"}, {"name": "Bob Jones"}, {"name": "Cara Diaz"}],
  "messages": [
    {"sender_name": "Bob Jones", "timestamp_ms": 30000, "content": "all good, @Alice Smith"},
    {"sender_name": "Alice Smith", "timestamp_ms": 0, "content": "Hey @Bob how are you? 🎄"},
    {"sender_name": "Cara Diaz", "timestamp_ms": 40000, "content": "Cara reacted 😂 to a message"},
    {"sender_name": "Alice Smith", "timestamp_ms": 10000, "content": "the party was great"},
    {"sender_name": "Alice Smith", "timestamp_ms": 20000},
    {"sender_name": "Cara Diaz", "timestamp_ms": 50000, "photos": [{"uri": "x.jpg"}]}
  ]
}"#;

fn write(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).unwrap();
    path
}

fn run(paths: &[PathBuf], cfg: &AnalysisConfig) -> AnalysisReport {
    let collab = Collaborators::from_config(cfg).unwrap();
    let loaded = load_transcript(paths, cfg).unwrap();
    Analyzer::new(cfg, &collab).run(&loaded.transcript, &loaded.digest)
}

fn utc() -> AnalysisConfig {
    AnalysisConfig { utc_offset_minutes: Some(0), ..Default::default() }
}

#[test]
fn test_report_round_trip_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(dir.path(), "export.json", EXPORT);
    let output = dir.path().join("out").join("advanced_analysis.json");

    let report = run(&[input], &utc());
    save_report(&report, &output).unwrap();

    let doc: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(doc["metadata"]["version"], VERSION);
    assert_eq!(doc["metadata"]["message_count"], 3);
    assert_eq!(doc["metadata"]["participant_count"], 2);
    assert_eq!(doc["participants"], serde_json::json!(["Alice Smith", "Bob Jones"]));

    let overall = &doc["overall_analysis"];
    for key in [
        "top_emojis",
        "chat_initiator",
        "night_owl_score",
        "longest_monologues_per_participant",
        "question_askers",
        "special_mentions",
        "interaction_analysis",
    ] {
        assert!(overall.get(key).is_some(), "missing overall_analysis.{}", key);
    }
    assert_eq!(overall["chat_initiator"], serde_json::json!([["Alice Smith", 1]]));
    assert_eq!(overall["special_mentions"], serde_json::json!([["Alice Smith", 1], ["Bob Jones", 0]]));
    assert_eq!(
        overall["interaction_analysis"]["Alice Smith"]["Bob Jones"]["message_count"],
        1
    );
    assert_eq!(
        doc["inter_participant_greetings"]["Bob Jones"]["Alice Smith"]["gift_rule"],
        "framed_photo"
    );

    // no temp file left behind
    let leftovers: Vec<_> = fs::read_dir(output.parent().unwrap())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(leftovers.len(), 1);
}

#[test]
fn test_alice_profile() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(dir.path(), "export.json", EXPORT);
    let report = run(&[input], &utc());

    let alice = &report.analysis_by_participant["Alice Smith"];
    assert_eq!(alice.activity.message_count, 2);
    assert_eq!(alice.activity.word_count, 10);
    assert_eq!(alice.activity.message_percentage, 66.67);
    assert_eq!(alice.emoji_usage, vec![("🎄".to_string(), 1)]);
    assert_eq!(alice.self_pronoun_counts["i"], 0);
    assert!(alice.most_common_words.iter().any(|(w, _)| w == "party"));
    assert!(alice.most_common_words.iter().all(|(w, _)| w != "bob"));

    let questions = &report.overall_analysis.structure.question_askers;
    assert_eq!(questions[0], ("Alice Smith".to_string(), 1));
}

#[test]
fn test_multiple_inputs_are_concatenated() {
    let dir = tempfile::tempdir().unwrap();
    let a = write(
        dir.path(),
        "message_1.json",
        r#"[{"sender_name": "A", "timestamp_ms": 0, "content": "hi"}]"#,
    );
    let b = write(
        dir.path(),
        "message_2.json",
        r#"[{"sender_name": "B", "timestamp_ms": 1000, "content": "hello"}]"#,
    );
    let report = run(&[a, b], &utc());
    assert_eq!(report.participants, vec!["A".to_string(), "B".to_string()]);
    assert_eq!(report.metadata.message_count, 2);
}

#[test]
fn test_participant_filter_and_silent_profiles() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(dir.path(), "export.json", EXPORT);
    let cfg = AnalysisConfig { participants: vec!["Bob Jones".into()], ..utc() };
    let report = run(&[input], &cfg);

    assert_eq!(report.participants, vec!["Bob Jones".to_string()]);
    assert!(report.overall_analysis.interaction_analysis.is_empty());
    assert_eq!(report.greeting_count(), 0);
}

#[test]
fn test_empty_transcript_yields_empty_report() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(dir.path(), "empty.json", "[]");
    let report = run(&[input], &utc());

    assert_eq!(report.metadata.message_count, 0);
    assert!(report.participants.is_empty());
    assert!(report.overall_analysis.structure.chat_initiator.is_empty());
    assert!(report.overall_analysis.top_emojis.is_empty());
}

#[test]
fn test_placeholders_never_absent() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(
        dir.path(),
        "export.json",
        r#"[{"sender_name": "A", "timestamp_ms": 0, "content": "🎄"},
            {"sender_name": "B", "timestamp_ms": 1, "content": "ok"}]"#,
    );
    let report = run(&[input], &utc());
    let a = &report.analysis_by_participant["A"];
    // emoji-only text still has content, so sentiment has a neutral share
    assert_eq!(a.sentiment.neutral_percent, 100.0);
    assert_eq!(a.reading_level.grade_level, 0.0);
    assert_eq!(a.pos_counts.nouns, 0);

    let edge = report.overall_analysis.interaction_analysis.edge("A", "B").unwrap();
    assert_eq!(edge.sentiment.sentiment_examples.most_positive, NO_MESSAGES);
}

#[test]
fn test_missing_input_fails_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.json");
    let err = load_transcript(&[missing], &utc()).unwrap_err();
    assert_eq!(err.code(), "E001_INPUT_UNAVAILABLE");
    assert!(err.to_string().contains("nope.json"));
}
