/*!
 * Groups ASR tokens into sentence-level segments.
 *
 * The assembler walks the token stream left to right, accumulating tokens
 * until the classifier reports a strong boundary, then closes the buffer
 * into one sentence. Sentences keep their constituent tokens so the
 * duration splitter can re-inspect per-token timestamps later.
 */

use crate::errors::{EngineError, InputError};
use crate::segmentation::classifier::{self, BoundaryStrength};
use crate::subtitle::SubtitleEntry;
use crate::transcript::Token;

/// A sentence-level segment that retains its constituent tokens
#[derive(Debug, Clone, PartialEq)]
pub struct Sentence {
    tokens: Vec<Token>,
}

impl Sentence {
    /// Build a sentence from tokens, rejecting empty or blank-text buffers
    pub fn from_tokens(tokens: Vec<Token>) -> Option<Self> {
        if tokens.is_empty() {
            return None;
        }

        let sentence = Sentence { tokens };
        if sentence.text().trim().is_empty() {
            return None;
        }

        Some(sentence)
    }

    /// Constituent tokens in stream order
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Start of the first token, in milliseconds
    pub fn start_ms(&self) -> f64 {
        self.tokens[0].start_ms
    }

    /// End of the last token, in milliseconds
    pub fn end_ms(&self) -> f64 {
        self.tokens[self.tokens.len() - 1].end_ms
    }

    /// Sentence duration in milliseconds
    pub fn duration_ms(&self) -> f64 {
        self.end_ms() - self.start_ms()
    }

    /// Exact concatenation of token texts; tokens carry their own spacing
    pub fn text(&self) -> String {
        self.tokens.iter().map(|t| t.text.as_str()).collect()
    }

    /// Materialize the sentence as a numbered subtitle entry
    pub fn to_entry(&self, seq_num: usize) -> SubtitleEntry {
        let start_time_ms = self.start_ms().round() as u64;
        let mut end_time_ms = self.end_ms().round() as u64;

        // rounding can collapse a sub-millisecond sentence; keep the entry
        // strictly positive
        if end_time_ms <= start_time_ms {
            end_time_ms = start_time_ms + 1;
        }

        SubtitleEntry::new(seq_num, start_time_ms, end_time_ms, self.text().trim().to_string())
    }
}

/// Assemble an ordered token stream into sentences
///
/// Engine marker tokens are filtered out first. A trailing buffer without
/// a closing boundary still becomes a final sentence; buffers with no
/// printable text are dropped.
pub fn assemble(tokens: &[Token]) -> Result<Vec<Sentence>, EngineError> {
    if tokens.is_empty() {
        return Err(InputError::EmptyTokens.into());
    }

    let spoken: Vec<Token> = tokens.iter().filter(|t| !t.is_special).cloned().collect();

    let mut sentences = Vec::new();
    let mut buffer: Vec<Token> = Vec::new();

    for position in 0..spoken.len() {
        buffer.push(spoken[position].clone());

        if classifier::classify(&spoken, position) == BoundaryStrength::Strong {
            flush(&mut buffer, &mut sentences);
        }
    }

    flush(&mut buffer, &mut sentences);

    Ok(sentences)
}

/// Close the current buffer into a sentence, if it holds printable text
fn flush(buffer: &mut Vec<Token>, sentences: &mut Vec<Sentence>) {
    if buffer.is_empty() {
        return;
    }

    if let Some(sentence) = Sentence::from_tokens(std::mem::take(buffer)) {
        sentences.push(sentence);
    }
}
