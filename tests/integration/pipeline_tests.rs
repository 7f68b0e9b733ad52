/*!
 * End-to-end pipeline tests over realistic token streams
 */

use sastre::app_config::PipelineConfig;
use sastre::pipeline::SubtitlePipeline;
use sastre::timing::FixStrategy;

use crate::common::{assert_no_overlap, evenly_spaced_tokens, token};

/// Token stream for "The meeting starts at 4.30 p.m. sharp." over 0-3000ms
fn meeting_tokens() -> Vec<sastre::transcript::Token> {
    vec![
        token("The", 0.0, 300.0),
        token(" meeting", 300.0, 800.0),
        token(" starts", 800.0, 1300.0),
        token(" at", 1300.0, 1500.0),
        token(" 4.30", 1500.0, 2000.0),
        token(" p.m.", 2000.0, 2400.0),
        token(" sharp.", 2400.0, 3000.0),
    ]
}

#[test]
fn test_pipeline_withNumericNoise_shouldEmitOneEntry() {
    let mut config = PipelineConfig::default();
    config.split.max_duration_ms = 5000;
    let pipeline = SubtitlePipeline::new(config).unwrap();

    let entries = pipeline.run(&meeting_tokens()).unwrap();

    // no false split on "4.30" or "p.m."
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].text, "The meeting starts at 4.30 p.m. sharp.");
    assert_eq!(entries[0].start_time_ms, 0);
    assert_eq!(entries[0].end_time_ms, 3000);
}

#[test]
fn test_pipeline_withTightBudget_shouldSplitAtWeakBoundary() {
    let mut config = PipelineConfig::default();
    config.split.max_duration_ms = 1000;
    config.split.optimal_duration_ms = 1000;
    // merging would re-join the halves straight away
    config.merge_adjacent = false;
    let pipeline = SubtitlePipeline::new(config).unwrap();

    let tokens = vec![
        token("We", 0.0, 200.0),
        token(" meet", 200.0, 600.0),
        token(" at", 600.0, 800.0),
        token(" 4.30", 800.0, 1200.0),
        token(" today,", 1200.0, 1800.0),
        token(" then", 1800.0, 2200.0),
        token(" review", 2200.0, 2600.0),
        token(" notes.", 2600.0, 3000.0),
    ];

    let entries = pipeline.run(&tokens).unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].text, "We meet at 4.30 today,");
    assert_eq!(entries[0].end_time_ms, 1800);
    assert_eq!(entries[1].text, "then review notes.");
    assert_eq!(entries[1].start_time_ms, 1800);
}

#[test]
fn test_pipeline_fullFlow_shouldRepairOverlapsAndRenumber() {
    let pipeline = SubtitlePipeline::with_defaults();

    // two sentences; the first ends in a continuation comma, and the
    // second starts before the first ends
    let tokens = vec![
        token("After", 0.0, 400.0),
        token(" the", 400.0, 600.0),
        token(" break,", 600.0, 1200.0),
        token(" we", 1150.0, 1400.0),
        token(" continued.", 1400.0, 2200.0),
        token(" Nobody", 2100.0, 2600.0),
        token(" objected.", 2600.0, 3400.0),
    ];

    let entries = pipeline.run(&tokens).unwrap();

    assert_no_overlap(&entries);
    for entry in &entries {
        assert!(entry.end_time_ms > entry.start_time_ms);
        assert!(!entry.text.trim().is_empty());
    }

    // sequence numbers are contiguous from 1
    for (i, entry) in entries.iter().enumerate() {
        assert_eq!(entry.seq_num, i + 1);
    }
}

#[test]
fn test_pipeline_shouldBeDeterministic() {
    let mut config = PipelineConfig::default();
    config.repair.strategy = FixStrategy::Balanced;
    let pipeline = SubtitlePipeline::new(config).unwrap();

    let tokens = meeting_tokens();
    let first = pipeline.run(&tokens).unwrap();
    let second = pipeline.run(&tokens).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_pipeline_rerunOnOwnOutputTimings_shouldBeStable() {
    let pipeline = SubtitlePipeline::with_defaults();
    let entries = pipeline.run(&meeting_tokens()).unwrap();

    // repairing an already-clean sequence changes nothing
    let repaired = pipeline.repair_entries(&entries).unwrap();

    assert_eq!(entries, repaired);
}

#[test]
fn test_pipeline_withLongMonologue_shouldKeepSequenceInvariants() {
    let mut config = PipelineConfig::default();
    config.split.max_duration_ms = 4000;
    config.split.optimal_duration_ms = 2000;
    let pipeline = SubtitlePipeline::new(config).unwrap();

    // one paragraph of running speech, a sentence every few seconds
    let mut tokens = Vec::new();
    for i in 0..20 {
        let base = i as f64 * 3500.0;
        let words = if i % 3 == 0 {
            vec!["So", "we", "kept", "going,", "nobody", "stopped", "us", "then."]
        } else {
            vec!["It", "rained", "all", "day."]
        };
        tokens.extend(evenly_spaced_tokens(&words, base, base + 3200.0));
    }

    let entries = pipeline.run(&tokens).unwrap();

    assert!(!entries.is_empty());
    assert_no_overlap(&entries);
    for (i, entry) in entries.iter().enumerate() {
        assert_eq!(entry.seq_num, i + 1);
        assert!(entry.end_time_ms > entry.start_time_ms);
        assert!(!entry.text.trim().is_empty());
    }
}

#[test]
fn test_pipeline_withEmptyTokenStream_shouldRejectInput() {
    let pipeline = SubtitlePipeline::with_defaults();
    assert!(pipeline.run(&[]).is_err());
}
