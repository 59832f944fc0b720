//! Sentiment scorer: valence lexicon with negation, boosters and emphasis
//!
//! compound = sum / sqrt(sum² + 15), clamped to [-1, 1]

use lazy_static::lazy_static;
use regex::Regex;

use crate::core::collab::{SentimentScore, SentimentScorer};
use crate::core::lexicon::{BOOSTERS, NEGATIONS, VALENCE};

/// Normalization constant for compound
const ALPHA: f64 = 15.0;

/// Negated valence multiplier
const NEGATION_SCALAR: f64 = -0.74;

/// ALL-CAPS emphasis in mixed-case text
const CAPS_INCREMENT: f64 = 0.733;

/// Per `!`, capped at 4
const EXCLAMATION_INCREMENT: f64 = 0.292;

/// Per `?` when more than one, capped at 0.96
const QUESTION_INCREMENT: f64 = 0.18;

lazy_static! {
    static ref RE_TOKEN: Regex = Regex::new(r"[\w']+").unwrap();
}

#[derive(Debug, Default)]
pub struct LexiconSentiment;

impl LexiconSentiment {
    pub fn new() -> Self {
        Self
    }

    /// Valence of the token at `i` after boosters, negation and caps
    fn token_valence(tokens: &[&str], lowered: &[String], i: usize, mixed_case: bool) -> f64 {
        let mut valence = match VALENCE.get(lowered[i].as_str()) {
            Some(v) => *v,
            None => return 0.0,
        };

        if mixed_case && is_shouting(tokens[i]) {
            valence += CAPS_INCREMENT * valence.signum();
        }

        // up to three preceding modifiers, decaying with distance
        for (distance, decay) in [(1usize, 1.0), (2, 0.95), (3, 0.9)] {
            if i < distance {
                break;
            }
            if let Some(scalar) = BOOSTERS.get(lowered[i - distance].as_str()) {
                valence += scalar * decay * valence.signum();
            }
        }

        let negated = (1..=3)
            .filter(|d| i >= *d)
            .any(|d| NEGATIONS.contains(lowered[i - d].as_str()));
        if negated {
            valence *= NEGATION_SCALAR;
        }
        valence
    }
}

fn is_shouting(token: &str) -> bool {
    token.chars().count() > 1
        && token.chars().any(|c| c.is_alphabetic())
        && token.chars().filter(|c| c.is_alphabetic()).all(|c| c.is_uppercase())
}

fn normalize(sum: f64) -> f64 {
    (sum / (sum * sum + ALPHA).sqrt()).clamp(-1.0, 1.0)
}

impl SentimentScorer for LexiconSentiment {
    fn score(&self, text: &str) -> SentimentScore {
        let tokens: Vec<&str> = RE_TOKEN.find_iter(text).map(|m| m.as_str()).collect();
        if tokens.is_empty() {
            return SentimentScore::neutral();
        }
        let lowered: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
        let shouting = tokens.iter().filter(|t| is_shouting(t)).count();
        let mixed_case = shouting > 0 && shouting < tokens.len();

        let mut valences: Vec<f64> = (0..tokens.len())
            .map(|i| Self::token_valence(&tokens, &lowered, i, mixed_case))
            .collect();

        // "but" shifts weight to the clause that follows it
        if let Some(but) = lowered.iter().position(|t| t == "but") {
            for (i, v) in valences.iter_mut().enumerate() {
                if i < but {
                    *v *= 0.5;
                } else if i > but {
                    *v *= 1.5;
                }
            }
        }

        let mut sum: f64 = valences.iter().sum();

        let exclamations = text.matches('!').count().min(4) as f64;
        let questions = text.matches('?').count();
        let question_emphasis = if questions > 1 {
            (questions as f64 * QUESTION_INCREMENT).min(0.96)
        } else {
            0.0
        };
        let emphasis = exclamations * EXCLAMATION_INCREMENT + question_emphasis;
        if sum > 0.0 {
            sum += emphasis;
        } else if sum < 0.0 {
            sum -= emphasis;
        }

        let pos_sum: f64 = valences.iter().filter(|v| **v > 0.0).map(|v| v + 1.0).sum();
        let neg_sum: f64 = valences.iter().filter(|v| **v < 0.0).map(|v| v - 1.0).sum();
        let neutral = valences.iter().filter(|v| **v == 0.0).count() as f64;
        let total = pos_sum + neg_sum.abs() + neutral;

        SentimentScore {
            compound: if sum == 0.0 { 0.0 } else { normalize(sum) },
            pos: pos_sum / total,
            neu: neutral / total,
            neg: neg_sum.abs() / total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::collab::Polarity;

    fn compound(text: &str) -> f64 {
        LexiconSentiment::new().score(text).compound
    }

    #[test]
    fn test_empty_is_neutral() {
        assert_eq!(LexiconSentiment::new().score("").polarity(), Polarity::Neutral);
    }

    #[test]
    fn test_positive_and_negative() {
        assert!(compound("I love this, it is great") > 0.5);
        assert!(compound("this is terrible and I hate it") < -0.5);
        assert_eq!(LexiconSentiment::new().score("the table").polarity(), Polarity::Neutral);
    }

    #[test]
    fn test_negation_flips() {
        assert!(compound("good") > 0.0);
        assert!(compound("not good") < 0.0);
    }

    #[test]
    fn test_booster_and_exclamation_intensify() {
        assert!(compound("very good") > compound("good"));
        assert!(compound("good!!!") > compound("good"));
    }

    #[test]
    fn test_but_shifts_weight() {
        // second clause dominates
        assert!(compound("the food was bad but the party was great") > 0.0);
    }

    #[test]
    fn test_shares_sum_to_one() {
        let s = LexiconSentiment::new().score("good day, bad night, plain table");
        assert!((s.pos + s.neu + s.neg - 1.0).abs() < 1e-9);
        assert!(s.compound >= -1.0 && s.compound <= 1.0);
    }
}
