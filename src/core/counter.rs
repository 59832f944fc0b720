//! Insertion-ordered frequency counter
//!
//! Ranking ties keep first-seen order so every ranked output is deterministic.

use std::collections::HashMap;
use crate::types::Ranking;

#[derive(Debug, Clone, Default)]
pub struct FrequencyCounter {
    order: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl FrequencyCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counter where every key starts at zero, in the given order
    pub fn with_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut counter = Self::new();
        for key in keys {
            counter.add(key, 0);
        }
        counter
    }

    pub fn add(&mut self, key: impl Into<String>, n: usize) {
        let key = key.into();
        match self.index.get(&key) {
            Some(&i) => self.order[i].1 += n,
            None => {
                self.index.insert(key.clone(), self.order.len());
                self.order.push((key, n));
            }
        }
    }

    pub fn increment(&mut self, key: impl Into<String>) {
        self.add(key, 1);
    }

    pub fn get(&self, key: &str) -> usize {
        self.index.get(key).map(|&i| self.order[i].1).unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// All entries, descending by count, ties in first-seen order
    pub fn ranked(&self) -> Ranking {
        let mut ranked = self.order.clone();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    /// Top `n` entries of `ranked()`
    pub fn most_common(&self, n: usize) -> Ranking {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }
}

impl<S: Into<String>> FromIterator<S> for FrequencyCounter {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut counter = Self::new();
        for key in iter {
            counter.increment(key);
        }
        counter
    }
}
