//! Emoji extractor over Unicode emoji blocks
//!
//! One glyph = a base pictograph plus any skin-tone modifier, variation
//! selector, tag sequence and ZWJ-joined continuation. Regional indicators pair
//! into flags; `[0-9#*]` + U+20E3 form keycaps.

use crate::core::collab::EmojiExtractor;

const ZWJ: char = '\u{200D}';
const KEYCAP: char = '\u{20E3}';

#[derive(Debug, Default)]
pub struct UnicodeEmojiExtractor;

impl UnicodeEmojiExtractor {
    pub fn new() -> Self {
        Self
    }
}

fn is_regional_indicator(c: char) -> bool {
    ('\u{1F1E6}'..='\u{1F1FF}').contains(&c)
}

fn is_modifier(c: char) -> bool {
    matches!(c,
        '\u{1F3FB}'..='\u{1F3FF}'   // skin tones
        | '\u{FE0E}' | '\u{FE0F}'   // variation selectors
        | '\u{E0020}'..='\u{E007F}' // tag sequence
    )
}

fn is_pictograph(c: char) -> bool {
    matches!(c,
        '\u{1F300}'..='\u{1F5FF}'
        | '\u{1F600}'..='\u{1F64F}'
        | '\u{1F680}'..='\u{1F6FF}'
        | '\u{1F700}'..='\u{1F7FF}'
        | '\u{1F800}'..='\u{1F8FF}'
        | '\u{1F900}'..='\u{1F9FF}'
        | '\u{1FA00}'..='\u{1FAFF}'
        | '\u{2600}'..='\u{26FF}'
        | '\u{2700}'..='\u{27BF}'
        | '\u{231A}' | '\u{231B}' | '\u{2328}' | '\u{23CF}'
        | '\u{23E9}'..='\u{23F3}'
        | '\u{23F8}'..='\u{23FA}'
        | '\u{2B05}'..='\u{2B07}'
        | '\u{2B1B}' | '\u{2B1C}' | '\u{2B50}' | '\u{2B55}'
        | '\u{3030}' | '\u{303D}' | '\u{3297}' | '\u{3299}'
        | '\u{00A9}' | '\u{00AE}' | '\u{203C}' | '\u{2049}' | '\u{2122}' | '\u{2139}'
        | '\u{2194}'..='\u{2199}'
        | '\u{21A9}' | '\u{21AA}'
        | '\u{1F004}' | '\u{1F0CF}' | '\u{1F18E}'
        | '\u{1F191}'..='\u{1F19A}'
        | '\u{1F201}'..='\u{1F251}'
    )
}

impl EmojiExtractor for UnicodeEmojiExtractor {
    fn extract(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let mut found = Vec::new();
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];

            // flag: two regional indicators
            if is_regional_indicator(c) {
                if i + 1 < chars.len() && is_regional_indicator(chars[i + 1]) {
                    found.push(chars[i..i + 2].iter().collect());
                    i += 2;
                } else {
                    i += 1;
                }
                continue;
            }

            // keycap: base, optional FE0F, U+20E3
            if c.is_ascii_digit() || c == '#' || c == '*' {
                let mut j = i + 1;
                if j < chars.len() && chars[j] == '\u{FE0F}' {
                    j += 1;
                }
                if j < chars.len() && chars[j] == KEYCAP {
                    found.push(chars[i..=j].iter().collect());
                    i = j + 1;
                } else {
                    i += 1;
                }
                continue;
            }

            if !is_pictograph(c) || is_modifier(c) {
                i += 1;
                continue;
            }

            let start = i;
            i += 1;
            loop {
                while i < chars.len() && is_modifier(chars[i]) {
                    i += 1;
                }
                if i + 1 < chars.len() && chars[i] == ZWJ && is_pictograph(chars[i + 1]) {
                    i += 2;
                    continue;
                }
                break;
            }
            found.push(chars[start..i].iter().collect());
        }

        found
    }
}
