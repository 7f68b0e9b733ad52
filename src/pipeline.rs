/*!
 * Pipeline orchestration.
 *
 * Runs the full transformation from raw ASR tokens to a renderable entry
 * sequence: assemble sentences, split over-long ones, merge continuation
 * pairs, then repair overlaps. Every stage is a pure transformation; the
 * pipeline only wires them together under one validated configuration and
 * checks the output invariants before handing the sequence back.
 */

use log::debug;

use crate::app_config::PipelineConfig;
use crate::errors::EngineError;
use crate::segmentation::{assembler, splitter};
use crate::subtitle::SubtitleEntry;
use crate::timing::{merger, overlap};
use crate::transcript::Token;

/// Configured subtitle pipeline
#[derive(Debug, Clone)]
pub struct SubtitlePipeline {
    config: PipelineConfig,
}

impl SubtitlePipeline {
    /// Create a pipeline from a validated configuration
    pub fn new(config: PipelineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(SubtitlePipeline { config })
    }

    /// Create a pipeline with the default configuration
    pub fn with_defaults() -> Self {
        SubtitlePipeline {
            config: PipelineConfig::default(),
        }
    }

    /// Active configuration
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run the full pipeline over a raw token stream
    pub fn run(&self, tokens: &[Token]) -> Result<Vec<SubtitleEntry>, EngineError> {
        let sentences = assembler::assemble(tokens)?;
        debug!(
            "Assembled {} sentences from {} tokens",
            sentences.len(),
            tokens.len()
        );

        // a stream of pure engine markers carries nothing to subtitle
        if sentences.is_empty() {
            return Ok(Vec::new());
        }

        let entries = splitter::split(&sentences, &self.config.split)?;
        debug!("Split into {} duration-bounded entries", entries.len());

        let entries = if self.config.merge_adjacent {
            let merged = merger::merge_adjacent(&entries, &self.config.merge, &self.config.language)?;
            debug!("Merged continuation pairs down to {} entries", merged.len());
            merged
        } else {
            entries
        };

        let repaired = overlap::fix_to_fixed_point(
            &entries,
            self.config.repair.strategy,
            self.config.repair.min_gap_ms,
        )?;

        verify_sequence(&repaired)?;

        Ok(repaired)
    }

    /// Repair overlaps in an existing entry sequence without re-segmenting
    ///
    /// Used when entry timings were edited after assembly and only the
    /// overlap invariant needs restoring.
    pub fn repair_entries(
        &self,
        entries: &[SubtitleEntry],
    ) -> Result<Vec<SubtitleEntry>, EngineError> {
        let repaired = overlap::fix_to_fixed_point(
            entries,
            self.config.repair.strategy,
            self.config.repair.min_gap_ms,
        )?;

        verify_sequence(&repaired)?;

        Ok(repaired)
    }
}

/// Check the output invariants of a finished sequence
///
/// Entries must be start-sorted with strictly positive durations and
/// non-blank text. A violation here is a logic defect in a stage, not a
/// property of the input, so it surfaces as an error instead of being
/// silently repaired.
fn verify_sequence(entries: &[SubtitleEntry]) -> Result<(), EngineError> {
    for entry in entries {
        if entry.end_time_ms <= entry.start_time_ms {
            return Err(EngineError::InvariantViolation(format!(
                "entry {} has non-positive duration ({} ms to {} ms)",
                entry.seq_num, entry.start_time_ms, entry.end_time_ms
            )));
        }
        if entry.text.trim().is_empty() {
            return Err(EngineError::InvariantViolation(format!(
                "entry {} has empty text",
                entry.seq_num
            )));
        }
    }

    for pair in entries.windows(2) {
        if pair[1].start_time_ms < pair[0].start_time_ms {
            return Err(EngineError::InvariantViolation(format!(
                "entries {} and {} are out of order",
                pair[0].seq_num, pair[1].seq_num
            )));
        }
    }

    Ok(())
}
