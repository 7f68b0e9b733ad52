/*!
 * # sastre - Subtitle ASR Segmentation & Timing-Repair Engine
 *
 * A Rust library that turns word-level ASR transcripts into well-formed,
 * duration-bounded subtitle entries and repairs timing overlaps between
 * them.
 *
 * ## Features
 *
 * - Sentence-boundary classification robust against numeric and
 *   abbreviation noise (decimals, thousands separators, "Mr.", "p.m.")
 * - Assembly of token streams into sentence-level segments
 * - Duration-bounded splitting of long sentences at weak boundaries
 * - Overlap repair with selectable strategies, iterated to a fixed point
 * - Continuation-aware merging of adjacent fragments, with inline markup
 *   handling and language-dependent line wrapping
 * - SRT reading/writing and transcript JSON input
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Plain-value pipeline configuration
 * - `transcript`: ASR transcript JSON input and time normalization
 * - `segmentation`: Boundary classification, sentence assembly, splitting:
 *   - `segmentation::classifier`: Boundary strength for a token in context
 *   - `segmentation::assembler`: Token stream to sentences
 *   - `segmentation::splitter`: Duration-bounded splitting
 * - `timing`: Timing repair over finalized entries:
 *   - `timing::overlap`: Overlap detection and strategy-based repair
 *   - `timing::merger`: Continuation merging and line wrapping
 * - `subtitle`: Subtitle entries and SRT reading/writing
 * - `pipeline`: Orchestration of the full transformation
 * - `language_utils`: ISO language code utilities and script detection
 * - `errors`: Custom error types for the engine
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod errors;
pub mod language_utils;
pub mod pipeline;
pub mod segmentation;
pub mod subtitle;
pub mod timing;
pub mod transcript;

// Re-export main types for easier usage
pub use app_config::{MergeConfig, PipelineConfig, RepairConfig, SplitConfig};
pub use errors::{ConfigError, EngineError, InputError};
pub use pipeline::SubtitlePipeline;
pub use segmentation::{BoundaryStrength, Sentence};
pub use subtitle::{SubtitleCollection, SubtitleEntry};
pub use timing::{FixStrategy, OverlapInfo};
pub use transcript::{TimeUnit, Token};
