/*!
 * Timing repair for finalized subtitle entries.
 *
 * This module keeps a time-sorted entry sequence renderable:
 * - `overlap`: detects temporal overlaps and resolves them under a
 *   selectable strategy, iterated to a fixed point
 * - `merger`: merges continuation pairs within gap and length budgets
 */

pub mod merger;
pub mod overlap;

// Re-export main types
pub use merger::{merge, merge_adjacent, qualifies};
pub use overlap::{
    FixStrategy, MIN_ENTRY_DURATION_MS, OverlapInfo, detect, fix_one_pass, fix_to_fixed_point,
};
