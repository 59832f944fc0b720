//! Readability scorer: Flesch-Kincaid grade and Dale-Chall score
//!
//! Scores are designed for formal prose and read high or low on chat text.

use lazy_static::lazy_static;
use regex::Regex;

use crate::core::collab::{Readability, ReadabilityScorer};
use crate::core::lexicon::FAMILIAR_WORDS;

lazy_static! {
    static ref RE_WORD: Regex = Regex::new(r"[A-Za-z0-9']+").unwrap();
    static ref RE_SENTENCE_END: Regex = Regex::new(r"[.!?]+").unwrap();
    static ref RE_VOWEL_GROUP: Regex = Regex::new(r"[aeiouy]+").unwrap();
}

#[derive(Debug, Default)]
pub struct TextReadability;

impl TextReadability {
    pub fn new() -> Self {
        Self
    }
}

/// Vowel-group syllable estimate, silent trailing `e` dropped, minimum 1
pub fn syllables(word: &str) -> usize {
    let word = word.to_lowercase();
    let mut count = RE_VOWEL_GROUP.find_iter(&word).count();
    if count > 1 && word.ends_with('e') && !word.ends_with("le") && !word.ends_with("ee") {
        count -= 1;
    }
    count.max(1)
}

fn sentence_count(text: &str) -> usize {
    RE_SENTENCE_END
        .split(text)
        .filter(|s| RE_WORD.is_match(s))
        .count()
        .max(1)
}

impl ReadabilityScorer for TextReadability {
    fn score(&self, text: &str) -> Readability {
        let words: Vec<&str> = RE_WORD.find_iter(text).map(|m| m.as_str()).collect();
        if words.is_empty() {
            return Readability { grade_level: 0.0, dale_chall: 0.0 };
        }
        let word_count = words.len() as f64;
        let words_per_sentence = word_count / sentence_count(text) as f64;
        let syllable_total: usize = words.iter().map(|w| syllables(w)).sum();

        let grade_level =
            0.39 * words_per_sentence + 11.8 * (syllable_total as f64 / word_count) - 15.59;

        let difficult = words
            .iter()
            .filter(|w| {
                let lower = w.to_lowercase();
                !FAMILIAR_WORDS.contains(lower.as_str()) && syllables(&lower) >= 2
            })
            .count();
        let pct_difficult = difficult as f64 / word_count * 100.0;
        let mut dale_chall = 0.1579 * pct_difficult + 0.0496 * words_per_sentence;
        if pct_difficult > 5.0 {
            dale_chall += 3.6365;
        }

        Readability { grade_level, dale_chall }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syllables() {
        assert_eq!(syllables("cat"), 1);
        assert_eq!(syllables("make"), 1);
        assert_eq!(syllables("table"), 2);
        assert_eq!(syllables("beautiful"), 3);
        assert_eq!(syllables("rhythm"), 1);
    }

    #[test]
    fn test_empty_text_scores_zero() {
        let r = TextReadability::new().score("  ");
        assert_eq!(r.grade_level, 0.0);
        assert_eq!(r.dale_chall, 0.0);
    }

    #[test]
    fn test_complex_text_scores_higher() {
        let scorer = TextReadability::new();
        let simple = scorer.score("The cat sat. The dog ran. We had fun.");
        let complex = scorer.score(
            "Institutional considerations notwithstanding, comprehensive organizational \
             restructuring necessitates extraordinarily meticulous deliberation",
        );
        assert!(complex.grade_level > simple.grade_level);
        assert!(complex.grade_level > 12.0);
        assert!(complex.dale_chall > simple.dale_chall);
    }
}
