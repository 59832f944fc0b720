//! Monologue-streak detection
//!
//! Explicit accumulator folded over chronologically sorted messages:
//!
//! ```text
//! same author  → extend run
//! new author   → close run, start run of 1
//! end of input → final flush (same close rule)
//! ```
//!
//! A closed run replaces an author's record only when strictly longer.

use std::collections::HashMap;

use crate::config::WallClock;
use crate::types::{elapsed_ms, round2, Message, MonologueRecord};

/// Accumulator state between messages
#[derive(Debug)]
pub struct MonologueTracker<'a> {
    clock: WallClock,
    run: Vec<&'a Message>,
    records: HashMap<String, MonologueRecord>,
}

impl<'a> MonologueTracker<'a> {
    pub fn new(clock: WallClock) -> Self {
        Self { clock, run: Vec::new(), records: HashMap::new() }
    }

    /// Feed the next message in chronological order
    pub fn step(mut self, msg: &'a Message) -> Self {
        let same_author = self.run.last().is_some_and(|last| last.sender == msg.sender);
        if !same_author {
            self.close_run();
        }
        self.run.push(msg);
        self
    }

    /// Final flush, then one record per roster entry sorted by length desc
    pub fn finish(mut self, roster: &[String]) -> Vec<MonologueRecord> {
        self.close_run();
        let mut out: Vec<MonologueRecord> = roster
            .iter()
            .map(|p| {
                self.records
                    .remove(p)
                    .unwrap_or_else(|| MonologueRecord::placeholder(p.clone()))
            })
            .collect();
        // stable: ties stay in roster order
        out.sort_by(|a, b| b.message_count.cmp(&a.message_count));
        out
    }

    fn close_run(&mut self) {
        let run = std::mem::take(&mut self.run);
        let Some(first) = run.first() else {
            return;
        };
        let best = self.records.get(&first.sender).map(|r| r.message_count).unwrap_or(0);
        if run.len() > best {
            let record = self.record_of(&run);
            self.records.insert(first.sender.clone(), record);
        }
    }

    fn record_of(&self, run: &[&Message]) -> MonologueRecord {
        let author = run.first().map(|m| m.sender.clone()).unwrap_or_default();
        MonologueRecord {
            author,
            message_count: run.len(),
            monologue_content: run.iter().map(|m| m.content.clone()).collect(),
            start_time: run.first().and_then(|m| self.clock.format(m.timestamp_ms)),
            end_time: run.last().and_then(|m| self.clock.format(m.timestamp_ms)),
            message_intervals_seconds: run
                .windows(2)
                .map(|w| round2(elapsed_ms(w[0].timestamp_ms, w[1].timestamp_ms) / 1000.0))
                .collect(),
        }
    }
}

/// Longest run per roster participant over already-sorted messages
pub fn longest_monologues(
    sorted: &[&Message],
    roster: &[String],
    clock: WallClock,
) -> Vec<MonologueRecord> {
    sorted
        .iter()
        .fold(MonologueTracker::new(clock), |tracker, msg| tracker.step(msg))
        .finish(roster)
}
