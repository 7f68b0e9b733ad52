/*!
 * Sentence-boundary classification for ASR tokens.
 *
 * ASR transcripts place true sentence punctuation next to numeric tokens
 * all the time (timestamps, prices, versions), and a naive "ends with
 * punctuation" rule produces pathologically short, broken entries. The
 * classifier disambiguates with explicit character-class checks and a
 * small abbreviation table; no regex and no allocation on the classify
 * path, so it stays cheap across languages.
 */

use crate::transcript::Token;

/// Strength of the sentence boundary a token carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryStrength {
    /// No boundary; the sentence continues
    None,
    /// Acceptable split point inside a sentence (`,` `;` `:`)
    Weak,
    /// End of sentence (`.` `!` `?`)
    Strong,
}

/// Abbreviations whose trailing dot does not end a sentence.
/// Checked case-insensitively against the token minus its final dot.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "inc", "ltd", "co", "corp",
    "dept", "est", "approx", "no", "vol", "fig", "e.g", "i.e", "a.m", "p.m", "u.s", "jan", "feb",
    "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec", "mon", "tue", "wed",
    "thu", "fri", "sat", "sun",
];

/// Digit count at or above which a trailing comma is read as a thousands
/// separator
const THOUSANDS_DIGIT_RUN: usize = 4;

/// Share of digits among a token's alphanumeric characters above which a
/// trailing `;` or `:` is read as part of a date/time-style literal
const NUMERIC_RATIO: f64 = 0.7;

/// Classify the boundary strength of the token at `position`.
///
/// The token's neighbors in `tokens` provide the lookahead context for
/// decimal and domain-style continuations.
pub fn classify(tokens: &[Token], position: usize) -> BoundaryStrength {
    let Some(token) = tokens.get(position) else {
        return BoundaryStrength::None;
    };

    let text = token.text.trim();
    let Some(last) = text.chars().last() else {
        return BoundaryStrength::None;
    };

    match last {
        '!' | '?' => BoundaryStrength::Strong,
        '.' => classify_trailing_dot(text, tokens, position),
        ',' => {
            if comma_is_numeric(text) {
                BoundaryStrength::None
            } else {
                BoundaryStrength::Weak
            }
        }
        ';' | ':' => {
            if is_mostly_numeric(text) {
                BoundaryStrength::None
            } else {
                BoundaryStrength::Weak
            }
        }
        // full-width CJK punctuation never doubles as numeric notation,
        // so it needs none of the suppression heuristics
        '。' | '！' | '？' => BoundaryStrength::Strong,
        '、' | '，' | '；' | '：' => BoundaryStrength::Weak,
        _ => BoundaryStrength::None,
    }
}

/// A lone `♪` token, or one starting with `♪`, marks lyric content
pub fn is_note_marker(text: &str) -> bool {
    text.trim_start().starts_with('♪')
}

/// Decide whether a trailing dot ends the sentence
fn classify_trailing_dot(text: &str, tokens: &[Token], position: usize) -> BoundaryStrength {
    // A bare "." token depends on its neighbors: "Mr" "." is an
    // abbreviation, "4" "." "7" a decimal point, "Z" "." "ai" a
    // domain-style continuation
    if text == "." {
        if position > 0 {
            if let Some(prev) = tokens.get(position - 1) {
                if is_abbreviation_stem(prev.text.trim()) {
                    return BoundaryStrength::None;
                }
            }
        }

        if let Some(next) = tokens.get(position + 1) {
            let next_text = next.text.trim_start();
            if let Some(first) = next_text.chars().next() {
                if first.is_ascii_digit() || first.is_lowercase() {
                    return BoundaryStrength::None;
                }
            }
        }
        return BoundaryStrength::Strong;
    }

    // A digit right before the dot reads as an embedded decimal point,
    // unless the whole token is a number that ends in punctuation
    // ("2.71." ends a sentence, "v4." does not)
    let mut rev = text.chars().rev();
    rev.next();
    if let Some(pre_final) = rev.next() {
        if pre_final.is_ascii_digit() && !is_numeric_with_trailing_dot(text) {
            return BoundaryStrength::None;
        }
    }

    if is_known_abbreviation(text) {
        return BoundaryStrength::None;
    }

    BoundaryStrength::Strong
}

/// Token consists only of digits and dots, with at least one digit, and
/// ends in a dot
fn is_numeric_with_trailing_dot(text: &str) -> bool {
    text.ends_with('.')
        && text.chars().any(|c| c.is_ascii_digit())
        && text.chars().all(|c| c.is_ascii_digit() || c == '.')
}

/// Token minus its trailing dot is in the abbreviation table
fn is_known_abbreviation(text: &str) -> bool {
    is_abbreviation_stem(&text[..text.len() - 1])
}

/// Bare stem is in the abbreviation table
fn is_abbreviation_stem(stem: &str) -> bool {
    ABBREVIATIONS.iter().any(|a| a.eq_ignore_ascii_case(stem))
}

/// Trailing comma sits inside a numeric literal (thousands separator)
fn comma_is_numeric(text: &str) -> bool {
    let stem = &text[..text.len() - 1];

    if stem.chars().last().is_some_and(|c| c.is_ascii_digit()) {
        return true;
    }

    stem.chars().filter(|c| c.is_ascii_digit()).count() >= THOUSANDS_DIGIT_RUN
}

/// Digits dominate the token's alphanumeric characters (date/time-style)
fn is_mostly_numeric(text: &str) -> bool {
    let digits = text.chars().filter(|c| c.is_ascii_digit()).count();
    let alphanumeric = text.chars().filter(|c| c.is_alphanumeric()).count();

    alphanumeric > 0 && digits as f64 / alphanumeric as f64 >= NUMERIC_RATIO
}
