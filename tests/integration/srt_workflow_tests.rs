/*!
 * Transcript-to-SRT workflow tests
 */

use sastre::pipeline::SubtitlePipeline;
use sastre::subtitle::SubtitleCollection;
use sastre::transcript::{TimeUnit, parse_transcript};

use crate::common;

#[test]
fn test_workflow_fromTranscriptJson_toSrtFile() {
    let json = r#"{"tokens": [
        {"text": "[_BEG_]", "start": 0.0, "end": 0.0},
        {"text": "Good", "start": 0.0, "end": 0.4},
        {"text": " evening", "start": 0.4, "end": 0.9},
        {"text": " everyone.", "start": 0.9, "end": 1.6},
        {"text": " Let's", "start": 1.8, "end": 2.2},
        {"text": " begin.", "start": 2.2, "end": 2.8}
    ]}"#;

    let tokens = parse_transcript(json, TimeUnit::Seconds).unwrap();
    let pipeline = SubtitlePipeline::with_defaults();
    let entries = pipeline.run(&tokens).unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].text, "Good evening everyone.");
    assert_eq!(entries[1].text, "Let's begin.");

    let temp_dir = common::create_temp_dir().unwrap();
    let path = temp_dir.path().join("evening.srt");
    let collection = SubtitleCollection::with_entries(entries, "en".to_string());
    collection.write_to_srt(&path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("00:00:00,000 --> 00:00:01,600"));
    assert!(written.contains("00:00:01,800 --> 00:00:02,800"));

    let reread = SubtitleCollection::read_from_srt(&path, "en").unwrap();
    assert_eq!(reread.entries.len(), 2);
    assert_eq!(reread.entries[0].text, "Good evening everyone.");
}

#[test]
fn test_workflow_repairLoadedSrt_shouldRestoreInvariants() {
    let content = "1\n00:00:00,000 --> 00:00:03,000\nFirst line runs long.\n\n2\n00:00:02,000 --> 00:00:05,000\nSecond starts early.\n\n";

    let entries = SubtitleCollection::parse_srt_string(content).unwrap();
    let pipeline = SubtitlePipeline::with_defaults();

    let repaired = pipeline.repair_entries(&entries).unwrap();

    common::assert_no_overlap(&repaired);
    assert_eq!(repaired.len(), 2);
    // texts survive repair untouched
    assert_eq!(repaired[0].text, "First line runs long.");
    assert_eq!(repaired[1].text, "Second starts early.");
}
