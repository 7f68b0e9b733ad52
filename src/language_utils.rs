use anyhow::{Result, anyhow};
use isolang::Language;

/// Language utilities for ISO language code handling
///
/// This module provides functions for normalizing ISO 639-1 (2-letter) and
/// ISO 639-2 (3-letter) language codes, and for deciding line-wrap behavior
/// for wide-script (CJK) languages, which do not use inter-word spacing.
/// Maximum line length for wide-script languages
pub const WIDE_SCRIPT_LINE_LENGTH: usize = 30;

/// Maximum line length for space-delimited languages
pub const DEFAULT_LINE_LENGTH: usize = 43;

/// Normalize a language code to ISO 639-1 (2-letter) format if possible
/// Falls back to ISO 639-2/T if no ISO 639-1 code exists
pub fn normalize_to_part1_or_part2t(code: &str) -> Result<String> {
    let normalized_code = code.trim().to_lowercase();

    // If it's already a 2-letter code, validate it
    if normalized_code.len() == 2 {
        if Language::from_639_1(&normalized_code).is_some() {
            return Ok(normalized_code);
        }
    }
    // If it's a 3-letter code, try to find the corresponding 2-letter code
    else if normalized_code.len() == 3 {
        // First normalize to ISO 639-2/T if it's a ISO 639-2/B code
        let part2t = match normalized_code.as_str() {
            "fre" => "fra",
            "ger" => "deu",
            "dut" => "nld",
            "gre" => "ell",
            "chi" => "zho",
            "cze" => "ces",
            "ice" => "isl",
            "alb" => "sqi",
            "arm" => "hye",
            "baq" => "eus",
            "bur" => "mya",
            "per" => "fas",
            "geo" => "kat",
            "may" => "msa",
            "mac" => "mkd",
            "rum" => "ron",
            "slo" => "slk",
            "wel" => "cym",
            _ => &normalized_code,
        };

        if let Some(lang) = Language::from_639_3(part2t) {
            if let Some(code_639_1) = lang.to_639_1() {
                return Ok(code_639_1.to_string());
            }

            // If no ISO 639-1 code exists, return the ISO 639-2/T code
            return Ok(part2t.to_string());
        }
    }

    Err(anyhow!("Cannot normalize invalid language code: {}", code))
}

/// Check whether a language uses a wide script (Chinese, Japanese, Korean)
///
/// Wide-script text has no inter-word spaces, so line wrapping cannot break
/// at token boundaries and merged text keeps a single line instead.
pub fn is_wide_script(code: &str) -> bool {
    match normalize_to_part1_or_part2t(code) {
        Ok(normalized) => matches!(normalized.as_str(), "zh" | "ja" | "ko" | "yue"),
        Err(_) => false,
    }
}

/// Maximum line length for a target language
pub fn max_line_length(code: &str) -> usize {
    if is_wide_script(code) {
        WIDE_SCRIPT_LINE_LENGTH
    } else {
        DEFAULT_LINE_LENGTH
    }
}

/// Check whether a character belongs to a CJK script block
///
/// Covers the Unified Ideograph blocks, kana, hangul and the full-width
/// forms commonly produced by CJK keyboards and ASR output.
pub fn is_cjk_char(c: char) -> bool {
    matches!(c as u32,
        0x1100..=0x11FF      // Hangul Jamo
        | 0x3040..=0x309F    // Hiragana
        | 0x30A0..=0x30FF    // Katakana
        | 0x3400..=0x4DBF    // CJK Unified Ideographs Extension A
        | 0x4E00..=0x9FFF    // CJK Unified Ideographs
        | 0xAC00..=0xD7AF    // Hangul Syllables
        | 0xF900..=0xFAFF    // CJK Compatibility Ideographs
        | 0xFF00..=0xFF60    // Full-width forms
    )
}
