/*!
 * ASR transcript input.
 *
 * This module parses the JSON token list produced by a recognition engine
 * and normalizes per-token timestamps to milliseconds. Recognition engines
 * report offsets in different native units (whisper.cpp uses centiseconds,
 * others report seconds or milliseconds), so the caller states the unit and
 * every token leaves this module in milliseconds.
 */

use anyhow::{Context, Result, anyhow};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Smallest ASR output unit carrying its own start/end timestamp
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Token text, including any leading space the engine emitted
    pub text: String,

    /// Start offset in milliseconds
    pub start_ms: f64,

    /// End offset in milliseconds
    pub end_ms: f64,

    /// Engine marker with no linguistic content, never part of output text
    pub is_special: bool,
}

impl Token {
    /// Create a spoken token
    pub fn new(text: impl Into<String>, start_ms: f64, end_ms: f64) -> Self {
        Token {
            text: text.into(),
            start_ms,
            end_ms,
            is_special: false,
        }
    }

    /// Create an engine marker token
    pub fn special(text: impl Into<String>, start_ms: f64, end_ms: f64) -> Self {
        Token {
            text: text.into(),
            start_ms,
            end_ms,
            is_special: true,
        }
    }

    /// Token duration in milliseconds
    pub fn duration_ms(&self) -> f64 {
        self.end_ms - self.start_ms
    }
}

/// Time unit a recognition engine uses for token offsets
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    /// Offsets already in milliseconds
    #[default]
    Milliseconds,
    /// Offsets in centiseconds (whisper.cpp token timestamps)
    Centiseconds,
    /// Offsets in seconds
    Seconds,
}

impl TimeUnit {
    /// Convert an offset in this unit to milliseconds
    pub fn to_ms(self, value: f64) -> f64 {
        match self {
            TimeUnit::Milliseconds => value,
            TimeUnit::Centiseconds => value * 10.0,
            TimeUnit::Seconds => value * 1000.0,
        }
    }
}

/// Raw transcript document shape
#[derive(Debug, Deserialize)]
struct RawTranscript {
    tokens: Vec<RawToken>,
}

/// Raw token as the recognition engine serialized it
#[derive(Debug, Deserialize)]
struct RawToken {
    text: String,
    start: f64,
    end: f64,

    /// Engines that tag marker tokens set this; others rely on detection
    #[serde(default)]
    special: bool,
}

/// Check for marker text the engine emits around segments, e.g. `[_BEG_]`
/// or `<|endoftext|>` style tokens
fn is_marker_text(text: &str) -> bool {
    let trimmed = text.trim();
    (trimmed.starts_with("[_") && trimmed.ends_with("_]"))
        || (trimmed.starts_with("<|") && trimmed.ends_with("|>"))
}

/// Parse a transcript JSON document into an ordered token list
///
/// Timestamps are normalized to milliseconds. Tokens whose end precedes
/// their start are clamped to zero duration rather than dropped, so the
/// stream stays complete for downstream assembly.
pub fn parse_transcript(json: &str, unit: TimeUnit) -> Result<Vec<Token>> {
    let raw: RawTranscript =
        serde_json::from_str(json).context("Failed to parse transcript JSON")?;

    if raw.tokens.is_empty() {
        return Err(anyhow!("Transcript contains no tokens"));
    }

    let mut clamped = 0usize;
    let mut special_count = 0usize;

    let tokens: Vec<Token> = raw
        .tokens
        .into_iter()
        .map(|raw_token| {
            let start_ms = unit.to_ms(raw_token.start);
            let mut end_ms = unit.to_ms(raw_token.end);

            if end_ms < start_ms {
                clamped += 1;
                end_ms = start_ms;
            }

            let is_special = raw_token.special || is_marker_text(&raw_token.text);
            if is_special {
                special_count += 1;
            }

            Token {
                text: raw_token.text,
                start_ms,
                end_ms,
                is_special,
            }
        })
        .collect();

    if clamped > 0 {
        warn!("Clamped {} tokens with reversed timestamps", clamped);
    }

    debug!(
        "Parsed {} transcript tokens ({} special markers)",
        tokens.len(),
        special_count
    );

    Ok(tokens)
}
