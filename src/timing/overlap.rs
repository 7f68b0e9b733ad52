/*!
 * Overlap detection and repair for subtitle entries.
 *
 * Two time-sorted adjacent entries overlap when the earlier one ends after
 * the later one starts. Repair walks the sequence pairwise under a selected
 * strategy, and the fixed-point driver repeats passes until nothing is left
 * to fix, resolving cascades where one repair reveals the next.
 *
 * The public API is pure: callers pass a slice and receive a new vector.
 * Pair adjustments mutate an owned working copy internally, so entry
 * indices stay stable across a pass.
 */

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, EngineError, InputError};
use crate::subtitle::SubtitleEntry;

/// Shortest duration an entry may keep after repair
pub const MIN_ENTRY_DURATION_MS: u64 = 100;

/// Overlap between two adjacent entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlapInfo {
    /// Sequence number of the earlier entry
    pub current_index: usize,

    /// Sequence number of the later entry
    pub next_index: usize,

    /// Overlapped span in milliseconds
    pub overlap_ms: u64,

    /// End time of the earlier entry
    pub current_end_ms: u64,

    /// Start time of the later entry
    pub next_start_ms: u64,
}

/// Strategy used to resolve an overlapping pair
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum FixStrategy {
    /// Pull the earlier entry's end back before the later entry starts
    #[default]
    ShortenPrevious,

    /// Push the later entry forward, preserving its duration
    ShiftNext,

    /// Move both ends toward the midpoint of the overlapped span
    AddGap,

    /// Split the adjustment evenly between shortening and delaying
    Balanced,
}

impl FixStrategy {
    // @returns: Human-readable strategy name
    pub fn display_name(&self) -> &str {
        match self {
            Self::ShortenPrevious => "Shorten previous",
            Self::ShiftNext => "Shift next",
            Self::AddGap => "Add gap",
            Self::Balanced => "Balanced",
        }
    }
}

impl fmt::Display for FixStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ShortenPrevious => "shorten_previous",
            Self::ShiftNext => "shift_next",
            Self::AddGap => "add_gap",
            Self::Balanced => "balanced",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for FixStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "shorten_previous" => Ok(Self::ShortenPrevious),
            "shift_next" => Ok(Self::ShiftNext),
            "add_gap" => Ok(Self::AddGap),
            "balanced" => Ok(Self::Balanced),
            _ => Err(ConfigError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Detect overlaps between adjacent entries of a time-sorted sequence
pub fn detect(entries: &[SubtitleEntry]) -> Vec<OverlapInfo> {
    let mut overlaps = Vec::new();

    for pair in entries.windows(2) {
        let current = &pair[0];
        let next = &pair[1];

        if current.end_time_ms > next.start_time_ms {
            overlaps.push(OverlapInfo {
                current_index: current.seq_num,
                next_index: next.seq_num,
                overlap_ms: current.end_time_ms - next.start_time_ms,
                current_end_ms: current.end_time_ms,
                next_start_ms: next.start_time_ms,
            });
        }
    }

    overlaps
}

/// Run a single repair pass over the sequence
///
/// Returns the adjusted sequence and the number of pairs whose times
/// actually changed. A pair already clamped to the duration floor that
/// still overlaps does not count, so the fixed-point driver terminates.
pub fn fix_one_pass(
    entries: &[SubtitleEntry],
    strategy: FixStrategy,
    min_gap_ms: u64,
) -> Result<(Vec<SubtitleEntry>, usize), EngineError> {
    if entries.is_empty() {
        return Err(InputError::EmptyEntries.into());
    }

    let mut fixed = entries.to_vec();
    let mut fixed_count = 0;

    for i in 0..fixed.len().saturating_sub(1) {
        let (head, tail) = fixed.split_at_mut(i + 1);
        let current = &mut head[i];
        let next = &mut tail[0];

        if current.end_time_ms > next.start_time_ms && apply(current, next, strategy, min_gap_ms) {
            fixed_count += 1;
        }
    }

    Ok((fixed, fixed_count))
}

/// Repeat repair passes until a pass reports zero fixes
pub fn fix_to_fixed_point(
    entries: &[SubtitleEntry],
    strategy: FixStrategy,
    min_gap_ms: u64,
) -> Result<Vec<SubtitleEntry>, EngineError> {
    if entries.is_empty() {
        return Err(InputError::EmptyEntries.into());
    }

    let mut current = entries.to_vec();

    // each pass resolves at least one cascade level; the cap is a backstop
    // against a strategy that stops making progress
    for _ in 0..current.len() {
        let (next, fixed_count) = fix_one_pass(&current, strategy, min_gap_ms)?;
        current = next;

        if fixed_count == 0 {
            break;
        }
    }

    Ok(current)
}

/// Apply the strategy to one overlapping pair; reports whether any time
/// value changed
fn apply(
    current: &mut SubtitleEntry,
    next: &mut SubtitleEntry,
    strategy: FixStrategy,
    min_gap_ms: u64,
) -> bool {
    let before = (
        current.end_time_ms,
        next.start_time_ms,
        next.end_time_ms,
    );

    match strategy {
        FixStrategy::ShortenPrevious => shorten_previous(current, next, min_gap_ms),
        FixStrategy::ShiftNext => shift_next(current, next, min_gap_ms),
        FixStrategy::AddGap => add_gap(current, next, min_gap_ms),
        FixStrategy::Balanced => balanced(current, next, min_gap_ms),
    }

    before
        != (
            current.end_time_ms,
            next.start_time_ms,
            next.end_time_ms,
        )
}

fn shorten_previous(current: &mut SubtitleEntry, next: &mut SubtitleEntry, min_gap_ms: u64) {
    let new_end = next.start_time_ms.saturating_sub(min_gap_ms);

    current.end_time_ms = if new_end > current.start_time_ms {
        new_end
    } else {
        current.start_time_ms + MIN_ENTRY_DURATION_MS
    };
}

fn shift_next(current: &mut SubtitleEntry, next: &mut SubtitleEntry, min_gap_ms: u64) {
    let new_start = current.end_time_ms + min_gap_ms;
    let delta = new_start - next.start_time_ms;

    next.start_time_ms = new_start;
    next.end_time_ms += delta;
}

fn add_gap(current: &mut SubtitleEntry, next: &mut SubtitleEntry, min_gap_ms: u64) {
    let midpoint = (next.start_time_ms + current.end_time_ms) / 2;
    let half = min_gap_ms / 2;

    let new_end = midpoint.saturating_sub(half);
    current.end_time_ms = if new_end > current.start_time_ms {
        new_end
    } else {
        current.start_time_ms + MIN_ENTRY_DURATION_MS
    };

    // the later half absorbs the rounding remainder of an odd gap
    push_next_start(next, midpoint + (min_gap_ms - half));
}

fn balanced(current: &mut SubtitleEntry, next: &mut SubtitleEntry, min_gap_ms: u64) {
    let needed = (current.end_time_ms - next.start_time_ms) + min_gap_ms;
    let shorten = needed / 2;

    let new_end = current.end_time_ms.saturating_sub(shorten);
    current.end_time_ms = if new_end > current.start_time_ms {
        new_end
    } else {
        // keep the duration floor; the remaining adjustment lands on the
        // later entry's start below
        current.start_time_ms + MIN_ENTRY_DURATION_MS
    };

    push_next_start(next, current.end_time_ms + min_gap_ms);
}

/// Move an entry's start forward, extending its end if the duration floor
/// would otherwise be lost
fn push_next_start(next: &mut SubtitleEntry, new_start_ms: u64) {
    if new_start_ms <= next.start_time_ms {
        return;
    }

    next.start_time_ms = new_start_ms;
    if next.end_time_ms < next.start_time_ms + MIN_ENTRY_DURATION_MS {
        next.end_time_ms = next.start_time_ms + MIN_ENTRY_DURATION_MS;
    }
}
