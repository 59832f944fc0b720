//! Word tokenizer and lexicon tagger
//!
//! The tagger is a closed-class lexicon plus suffix heuristics with two
//! context rules. Chat text is informal, so tags are an approximation.

use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};
use tracing::warn;

use crate::core::collab::{Tagger, Tokenizer};
use crate::core::lexicon::{
    ADJECTIVES, ADVERBS, CONJUNCTIONS, DETERMINERS, INTERJECTIONS, MODALS, POSSESSIVES,
    PREPOSITIONS, PRONOUNS, VERBS, WH_WORDS,
};

lazy_static! {
    static ref RE_WORD: Regex = Regex::new(r"\b\w+\b").unwrap();
    static ref RE_LINK: Regex = Regex::new(r"http\S+").unwrap();
}

/// Compiled-size ceiling for patterns built from run data (rosters, word lists)
const PATTERN_SIZE_LIMIT: usize = 64 * (1 << 20);

/// Compile a pattern assembled at run time. A failure is logged with `what`
/// and yields `None`, so the caller's counts for it stay at zero.
pub fn compile_pattern(pattern: &str, what: &str) -> Option<Regex> {
    match RegexBuilder::new(pattern).size_limit(PATTERN_SIZE_LIMIT).build() {
        Ok(re) => Some(re),
        Err(e) => {
            warn!(error = %e, what, "pattern rejected, matches disabled");
            None
        }
    }
}

/// Lowercase and strip links
pub fn clean_text(content: &str) -> String {
    RE_LINK.replace_all(&content.to_lowercase(), "").into_owned()
}

/// `\b\w+\b` matches, in order
#[derive(Debug, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        RE_WORD.find_iter(text).map(|m| m.as_str().to_string()).collect()
    }
}

/// Penn-style lexicon tagger
#[derive(Debug, Default)]
pub struct LexiconTagger;

impl LexiconTagger {
    pub fn new() -> Self {
        Self
    }

    /// Tag from the word alone
    fn lexical_tag(word: &str) -> &'static str {
        if word.chars().all(|c| c.is_ascii_digit()) {
            return "CD";
        }
        if word == "to" {
            return "TO";
        }
        if DETERMINERS.contains(word) {
            return "DT";
        }
        if POSSESSIVES.contains(word) {
            return "PRP$";
        }
        if PRONOUNS.contains(word) {
            return "PRP";
        }
        if MODALS.contains(word) {
            return "MD";
        }
        if CONJUNCTIONS.contains(word) {
            return "CC";
        }
        if WH_WORDS.contains(word) {
            return if matches!(word, "when" | "where" | "why" | "how") { "WRB" } else { "WP" };
        }
        if let Some(tag) = VERBS.get(word) {
            return *tag;
        }
        if PREPOSITIONS.contains(word) {
            return "IN";
        }
        if INTERJECTIONS.contains(word) {
            return "UH";
        }
        if ADVERBS.contains(word) {
            return "RB";
        }
        if ADJECTIVES.contains(word) {
            return "JJ";
        }
        Self::suffix_tag(word)
    }

    fn suffix_tag(word: &str) -> &'static str {
        let len = word.chars().count();
        if len > 3 && word.ends_with("ly") {
            "RB"
        } else if len > 4 && word.ends_with("ing") {
            "VBG"
        } else if len > 3 && word.ends_with("ed") {
            "VBD"
        } else if len > 4 && word.ends_with("est") {
            "JJS"
        } else if ["ous", "ful", "ive", "able", "ible", "al", "ic", "less", "ish"]
            .iter()
            .any(|s| len > s.len() + 2 && word.ends_with(s))
        {
            "JJ"
        } else if len > 3 && word.ends_with('s') && !word.ends_with("ss") {
            "NNS"
        } else {
            "NN"
        }
    }
}

impl Tagger for LexiconTagger {
    fn tag(&self, tokens: &[String]) -> Vec<(String, String)> {
        let mut tagged: Vec<(String, String)> = Vec::with_capacity(tokens.len());
        for token in tokens {
            let word = token.to_lowercase();
            let mut tag = Self::lexical_tag(&word);
            let prev = tagged.last().map(|(_, t)| t.as_str());
            match prev {
                // "i need", "can win", "to sleep"
                Some("PRP") | Some("MD") | Some("TO") if tag == "NN" || tag == "NNS" || tag == "IN" => {
                    tag = if prev == Some("PRP") { "VBP" } else { "VB" };
                }
                // "the love", "my hope"
                Some("DT") | Some("PRP$") | Some("JJ") if tag == "VB" || tag == "VBP" => {
                    tag = "NN";
                }
                _ => {}
            }
            tagged.push((token.clone(), tag.to_string()));
        }
        tagged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(text: &str) -> Vec<String> {
        let tokens = WordTokenizer::new().tokenize(text);
        LexiconTagger::new().tag(&tokens).into_iter().map(|(_, t)| t).collect()
    }

    #[test]
    fn test_compile_pattern_rejects_invalid() {
        assert!(compile_pattern("@(unclosed", "test").is_none());
        let re = compile_pattern(r"(?i)\bok\b", "test").unwrap();
        assert_eq!(re.find_iter("OK ok okay").count(), 2);
    }

    #[test]
    fn test_clean_text_strips_links() {
        assert_eq!(clean_text("See HTTPS://x.io/a now"), "see  now");
    }

    #[test]
    fn test_tokenizer_splits_apostrophes() {
        let tokens = WordTokenizer::new().tokenize("can't stop");
        assert_eq!(tokens, vec!["can", "t", "stop"]);
    }

    #[test]
    fn test_basic_tags() {
        assert_eq!(tags("the dog"), vec!["DT", "NN"]);
        assert_eq!(tags("happy cats"), vec!["JJ", "NNS"]);
        assert_eq!(tags("running quickly"), vec!["VBG", "RB"]);
    }

    #[test]
    fn test_context_rules() {
        // pronoun + unknown word → verb
        assert_eq!(tags("we vibe"), vec!["PRP", "VBP"]);
        // determiner + verb → noun
        assert_eq!(tags("the love"), vec!["DT", "NN"]);
        // pronoun + "like" → verb
        assert_eq!(tags("i like"), vec!["PRP", "VBP"]);
    }

    #[test]
    fn test_tags_align_with_tokens() {
        let tokens = WordTokenizer::new().tokenize("this is a longer sentence with 42 words");
        assert_eq!(LexiconTagger::new().tag(&tokens).len(), tokens.len());
    }
}
