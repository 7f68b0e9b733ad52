/*!
 * Merges continuation pairs of adjacent subtitle entries.
 *
 * ASR segmentation often leaves a sentence spread over two entries when the
 * speaker pauses mid-clause. A pair is merged only when the earlier entry
 * carries a genuine continuation signal (trailing comma or ellipsis, or a
 * CJK final character, since wide scripts have no space-delimited breaks)
 * and the pair fits a gap and character budget. Musical-note markers block
 * merging regardless of other signals, so lyric lines keep their own
 * entries.
 */

use once_cell::sync::Lazy;
use regex::Regex;

use crate::app_config::MergeConfig;
use crate::errors::{EngineError, InputError};
use crate::language_utils;
use crate::segmentation::classifier;
use crate::subtitle::SubtitleEntry;

/// Inline style tags and position tags, stripped for length checks
static MARKUP_TAG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"</?[ibu]>|\{\\an\d\}").expect("Invalid markup tag regex")
});

/// Entry text fully wrapped in one style tag pair, e.g. `<i>...</i>`
static WRAPPING_TAG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^<([ibu])>(.*)</([ibu])>$").expect("Invalid wrapping tag regex")
});

/// Decide whether two adjacent entries qualify for merging
pub fn qualifies(prev: &SubtitleEntry, next: &SubtitleEntry, config: &MergeConfig) -> bool {
    let prev_text = prev.text.trim();
    let next_text = next.text.trim();

    // note markers block merging regardless of other signals
    if has_note_marker(prev_text) || has_note_marker(next_text) {
        return false;
    }

    // markup is stripped for the length check only
    let combined_length = strip_markup(prev_text).trim().chars().count()
        + strip_markup(next_text).trim().chars().count();
    if combined_length >= config.max_total_length {
        return false;
    }

    let gap_ms = next.start_time_ms.saturating_sub(prev.end_time_ms);
    if gap_ms >= config.max_gap_ms {
        return false;
    }

    is_continuation(prev_text)
}

/// Merge two qualifying entries into one
///
/// A shared wrapping tag pair is stripped at the join point and re-applied
/// once around the merged text; otherwise the raw texts join with a line
/// break. The result is then re-flowed to the language's line budget.
pub fn merge(prev: &SubtitleEntry, next: &SubtitleEntry, language: &str) -> SubtitleEntry {
    let prev_text = prev.text.trim();
    let next_text = next.text.trim();

    let line_budget = language_utils::max_line_length(language);
    let wide_script = language_utils::is_wide_script(language);

    let text = match shared_wrapping_tag(prev_text, next_text) {
        Some((tag, inner_prev, inner_next)) => {
            let joined = format!("{}\n{}", inner_prev, inner_next);
            format!("<{tag}>{}</{tag}>", reflow(&joined, line_budget, wide_script))
        }
        None => {
            let joined = format!("{}\n{}", prev_text, next_text);
            reflow(&joined, line_budget, wide_script)
        }
    };

    SubtitleEntry::new(prev.seq_num, prev.start_time_ms, next.end_time_ms, text)
}

/// Merge every qualifying continuation pair in a time-sorted sequence
///
/// A merged entry may keep absorbing followers while the pair still
/// qualifies. Output entries are renumbered sequentially starting at 1.
pub fn merge_adjacent(
    entries: &[SubtitleEntry],
    config: &MergeConfig,
    language: &str,
) -> Result<Vec<SubtitleEntry>, EngineError> {
    config.validate()?;

    if entries.is_empty() {
        return Err(InputError::EmptyEntries.into());
    }

    let mut merged: Vec<SubtitleEntry> = Vec::with_capacity(entries.len());
    let mut current = entries[0].clone();

    for next in &entries[1..] {
        if qualifies(&current, next, config) {
            current = merge(&current, next, language);
        } else {
            merged.push(current);
            current = next.clone();
        }
    }
    merged.push(current);

    for (i, entry) in merged.iter_mut().enumerate() {
        entry.seq_num = i + 1;
    }

    Ok(merged)
}

/// Continuation signals: empty text, trailing comma or ellipsis, or a
/// final CJK code-point
fn is_continuation(prev_text: &str) -> bool {
    if prev_text.is_empty() {
        return true;
    }

    let stripped = strip_markup(prev_text);
    let stripped = stripped.trim_end();

    if stripped.ends_with("...") || stripped.ends_with('…') || stripped.ends_with(',') {
        return true;
    }

    stripped
        .chars()
        .last()
        .is_some_and(language_utils::is_cjk_char)
}

/// Entry starts or ends with a musical-note marker
fn has_note_marker(text: &str) -> bool {
    classifier::is_note_marker(text) || text.trim_end().ends_with('♪')
}

/// Remove style and position tags
fn strip_markup(text: &str) -> String {
    MARKUP_TAG_REGEX.replace_all(text, "").to_string()
}

/// Extract the shared wrapping tag, if both entries are wrapped in the
/// same style tag pair
fn shared_wrapping_tag<'a>(
    prev_text: &'a str,
    next_text: &'a str,
) -> Option<(String, String, String)> {
    let prev_caps = WRAPPING_TAG_REGEX.captures(prev_text)?;
    let next_caps = WRAPPING_TAG_REGEX.captures(next_text)?;

    let prev_tag = prev_caps.get(1)?.as_str();
    if prev_tag != prev_caps.get(3)?.as_str() {
        return None;
    }

    let next_tag = next_caps.get(1)?.as_str();
    if next_tag != next_caps.get(3)?.as_str() || prev_tag != next_tag {
        return None;
    }

    Some((
        prev_tag.to_string(),
        prev_caps.get(2)?.as_str().trim().to_string(),
        next_caps.get(2)?.as_str().trim().to_string(),
    ))
}

/// Re-flow text to the line budget, breaking only at token boundaries
///
/// Wide-script text has no token boundaries to break at, so wrapping is
/// skipped and the line breaks and trailing whitespace introduced by the
/// join are stripped instead.
fn reflow(text: &str, line_budget: usize, wide_script: bool) -> String {
    if wide_script {
        return text.replace(['\n', '\r'], "").trim_end().to_string();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if current_len > 0 && current_len + 1 + word_len > line_budget {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }

        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines.join("\n")
}
