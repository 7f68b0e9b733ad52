/*!
 * Tests for continuation merging
 */

use sastre::app_config::MergeConfig;
use sastre::timing::{merge, merge_adjacent, qualifies};

use crate::common::entry;

fn config(max_gap_ms: u64, max_total_length: usize) -> MergeConfig {
    MergeConfig {
        max_gap_ms,
        max_total_length,
    }
}

#[test]
fn test_qualifies_withStoreExample_shouldMergeAndSpanBoth() {
    let prev = entry(1, 1000, 3000, "I went to the store,");
    let next = entry(2, 3050, 5000, "and bought milk.");

    assert!(qualifies(&prev, &next, &config(2000, 80)));

    let merged = merge(&prev, &next, "en");
    assert_eq!(merged.start_time_ms, 1000);
    assert_eq!(merged.end_time_ms, 5000);
}

#[test]
fn test_qualifies_gapAtBudget_shouldBeFalse() {
    let prev = entry(1, 0, 1000, "First half,");
    let next = entry(2, 3000, 4000, "second half.");

    assert!(qualifies(&prev, &next, &config(2001, 80)));
    assert!(!qualifies(&prev, &next, &config(2000, 80)));
}

#[test]
fn test_qualifies_withOverlappingPair_shouldTreatGapAsZero() {
    let prev = entry(1, 0, 2000, "Overlapping first,");
    let next = entry(2, 1500, 3000, "second.");

    assert!(qualifies(&prev, &next, &config(500, 80)));
}

#[test]
fn test_mergeAdjacent_shouldRespectNoteMarkers() {
    let entries = vec![
        entry(1, 0, 1000, "♪ gentle humming,"),
        entry(2, 1100, 2000, "♪ more humming ♪"),
        entry(3, 2100, 3000, "spoken words,"),
        entry(4, 3100, 4000, "continue here."),
    ];

    let merged = merge_adjacent(&entries, &config(2000, 120), "en").unwrap();

    // lyric lines stay separate, spoken continuation merges
    assert_eq!(merged.len(), 3);
    assert_eq!(merged[0].text, "♪ gentle humming,");
    assert_eq!(merged[1].text, "♪ more humming ♪");
    assert_eq!(merged[2].text, "spoken words, continue here.");
}

#[test]
fn test_mergeAdjacent_shouldRenumberFromOne() {
    let entries = vec![
        entry(7, 0, 1000, "Seven,"),
        entry(9, 1100, 2000, "nine."),
        entry(12, 5000, 6000, "Twelve."),
    ];

    let merged = merge_adjacent(&entries, &config(2000, 80), "en").unwrap();

    let seq_nums: Vec<usize> = merged.iter().map(|e| e.seq_num).collect();
    assert_eq!(seq_nums, vec![1, 2]);
}

#[test]
fn test_merge_withCjkText_shouldNotInsertBreaks() {
    let prev = entry(1, 0, 2000, "明日の会議は");
    let next = entry(2, 2100, 4000, "午後四時からです");

    assert!(qualifies(&prev, &next, &config(2000, 80)));

    let merged = merge(&prev, &next, "ja");
    assert_eq!(merged.text, "明日の会議は午後四時からです");
}

#[test]
fn test_merge_withLongEnglishText_shouldReflowUnderBudget() {
    let prev = entry(1, 0, 2000, "When the recording finally ended after midnight,");
    let next = entry(2, 2100, 4000, "nobody wanted to stay for the debrief.");

    let merged = merge(&prev, &next, "en");

    assert!(merged.text.lines().count() >= 2);
    for line in merged.text.lines() {
        assert!(line.chars().count() <= 43, "line over budget: {}", line);
    }
}

#[test]
fn test_qualifies_withUppercaseNextAndNoSignal_shouldBeFalse() {
    let prev = entry(1, 0, 1000, "A complete thought.");
    let next = entry(2, 1100, 2000, "Another thought.");

    assert!(!qualifies(&prev, &next, &config(2000, 80)));
}
