/*!
 * Splits over-long sentences at internal boundaries under a duration policy.
 *
 * Sentences within the duration budget pass through untouched. Over-long
 * sentences are first cut at internal strong boundaries; any piece still
 * exceeding the budget is cut again at weak boundaries, aiming for evenly
 * sized sub-segments near the optimal duration. Timestamps always come from
 * the first and last token of a piece; nothing is interpolated and no token
 * is ever dropped.
 */

use crate::app_config::SplitConfig;
use crate::errors::{EngineError, InputError};
use crate::segmentation::assembler::Sentence;
use crate::segmentation::classifier::{self, BoundaryStrength};
use crate::subtitle::SubtitleEntry;
use crate::transcript::Token;

/// Split sentences into duration-bounded subtitle entries
///
/// Output entries are renumbered sequentially starting at 1.
pub fn split(sentences: &[Sentence], config: &SplitConfig) -> Result<Vec<SubtitleEntry>, EngineError> {
    config.validate()?;

    if sentences.is_empty() {
        return Err(InputError::EmptySentences.into());
    }

    let mut entries = Vec::new();
    for sentence in sentences {
        for part in split_sentence(sentence, config) {
            let seq_num = entries.len() + 1;
            entries.push(part.to_entry(seq_num));
        }
    }

    Ok(entries)
}

/// Split one sentence into pieces within the duration budget
fn split_sentence(sentence: &Sentence, config: &SplitConfig) -> Vec<Sentence> {
    let max_duration = config.max_duration_ms as f64;

    if sentence.duration_ms() <= max_duration || sentence.tokens().is_empty() {
        return vec![sentence.clone()];
    }

    let mut parts = Vec::new();
    for piece in split_at_strong(sentence.tokens()) {
        if piece.duration_ms() <= max_duration {
            parts.push(piece);
        } else {
            parts.extend(split_at_weak(piece.tokens(), config));
        }
    }

    parts
}

/// Cut a token span after every strong boundary
fn split_at_strong(tokens: &[Token]) -> Vec<Sentence> {
    let mut pieces = Vec::new();
    let mut buffer: Vec<Token> = Vec::new();

    for position in 0..tokens.len() {
        buffer.push(tokens[position].clone());

        if classifier::classify(tokens, position) == BoundaryStrength::Strong {
            flush(&mut buffer, &mut pieces);
        }
    }

    flush(&mut buffer, &mut pieces);
    pieces
}

/// Cut a token span at weak boundaries, aiming for even sub-segments
///
/// The remainder is kept whole regardless of boundary strength, and a span
/// without any weak boundary stays one oversized piece rather than being
/// cut mid-token.
fn split_at_weak(tokens: &[Token], config: &SplitConfig) -> Vec<Sentence> {
    let Some(first) = tokens.first() else {
        return Vec::new();
    };
    let Some(last) = tokens.last() else {
        return Vec::new();
    };

    let total_duration = last.end_ms - first.start_ms;
    let target_segments =
        ((total_duration / config.optimal_duration_ms as f64).ceil() as u64).max(2);
    let target_duration = total_duration / target_segments as f64;

    let mut pieces = Vec::new();
    let mut buffer: Vec<Token> = Vec::new();

    for position in 0..tokens.len() {
        buffer.push(tokens[position].clone());

        let accumulated = tokens[position].end_ms - buffer[0].start_ms;
        if accumulated >= target_duration
            && classifier::classify(tokens, position) == BoundaryStrength::Weak
        {
            flush(&mut buffer, &mut pieces);
        }
    }

    flush(&mut buffer, &mut pieces);
    pieces
}

/// Close the current buffer into a piece, if it holds printable text
fn flush(buffer: &mut Vec<Token>, pieces: &mut Vec<Sentence>) {
    if buffer.is_empty() {
        return;
    }

    if let Some(piece) = Sentence::from_tokens(std::mem::take(buffer)) {
        pieces.push(piece);
    }
}
