//! Integration tests for the interaction engine
//!
//! - @first-name attribution and first-match resolution
//! - complete n * (n - 1) edge set, zero edges included
//! - deterministic output

use chatlens::core::{Aggregator, Collaborators, InteractionEngine};
use chatlens::types::{InteractionIndex, Message, SentimentSummary, Transcript};
use chatlens::AnalysisConfig;
use pretty_assertions::assert_eq;

fn index_of(messages: Vec<Message>) -> InteractionIndex {
    let transcript = Transcript::new(messages);
    let cfg = AnalysisConfig::default();
    let collab = Collaborators::builtin();
    let agg = Aggregator::new(&collab, &cfg, transcript.participants());
    InteractionEngine::new(&agg).analyze(&transcript)
}

#[test]
fn test_first_name_mention_scenario() {
    let index = index_of(vec![
        Message::new("Alice Smith", "Hey @Bob how are you?", 0),
        Message::new("Bob Jones", "all good", 1_000),
    ]);

    let edge = index.edge("Alice Smith", "Bob Jones").unwrap();
    assert_eq!(edge.message_count, 1);
    assert_eq!(edge.common_words.len(), 1);
    assert_eq!(edge.common_words[0].0, "hey");

    let back = index.edge("Bob Jones", "Alice Smith").unwrap();
    assert_eq!(back.message_count, 0);
    assert_eq!(back.sentiment, SentimentSummary::empty());
    assert!(back.emojis.is_empty());
    assert!(back.common_words.is_empty());
}

#[test]
fn test_edge_set_is_complete() {
    let index = index_of(vec![
        Message::new("A", "hi", 0),
        Message::new("B", "hi", 1),
        Message::new("C", "hi", 2),
        Message::new("D", "hi", 3),
    ]);
    assert_eq!(index.len(), 4 * 3);
    for (sender, receiver, edge) in index.iter() {
        assert_ne!(sender, receiver);
        assert_eq!(edge.message_count, 0);
    }
}

#[test]
fn test_single_participant_has_no_edges() {
    let index = index_of(vec![Message::new("Solo", "@Solo talking to myself", 0)]);
    assert!(index.is_empty());
}

#[test]
fn test_message_counted_once_per_edge() {
    let index = index_of(vec![
        Message::new("Alice Smith", "@Bob @bob @BOB!!", 0),
        Message::new("Bob Jones", "what", 1),
    ]);
    assert_eq!(index.edge("Alice Smith", "Bob Jones").unwrap().message_count, 1);
}

#[test]
fn test_message_to_two_receivers_populates_two_edges() {
    let index = index_of(vec![
        Message::new("Alice Smith", "@Bob and @Cara dinner 🍕🍕", 0),
        Message::new("Bob Jones", "ok", 1),
        Message::new("Cara Diaz", "ok", 2),
    ]);
    let to_bob = index.edge("Alice Smith", "Bob Jones").unwrap();
    let to_cara = index.edge("Alice Smith", "Cara Diaz").unwrap();
    assert_eq!(to_bob.message_count, 1);
    assert_eq!(to_cara.message_count, 1);
    assert_eq!(to_bob.emojis, vec![("🍕".to_string(), 2)]);
    assert_eq!(index.edge("Bob Jones", "Cara Diaz").unwrap().message_count, 0);
}

#[test]
fn test_shared_prefix_resolves_to_first_in_roster() {
    let index = index_of(vec![
        Message::new("Dan Cole", "@Sam lunch?", 0),
        Message::new("Sam Lee", "sure", 1),
        Message::new("Sam Ortiz", "me too", 2),
    ]);
    assert_eq!(index.edge("Dan Cole", "Sam Lee").unwrap().message_count, 1);
    assert_eq!(index.edge("Dan Cole", "Sam Ortiz").unwrap().message_count, 0);
}

#[test]
fn test_deterministic() {
    let messages = vec![
        Message::new("Alice Smith", "@Bob you rock 🎉", 0),
        Message::new("Bob Jones", "@Alice thanks!!", 1),
        Message::new("Bob Jones", "@alice seriously", 2),
    ];
    assert_eq!(index_of(messages.clone()), index_of(messages));
}
