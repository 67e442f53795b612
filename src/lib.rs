pub mod config;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod segment;
pub mod types;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use config::SegmenterConfig;
pub use error::{Error, PipelineError, Result};
pub use report::{ReportLine, format_report, report_to_text, sections_to_text};
pub use segment::{DietPlanSegmenter, PhraseTable, SegmentOutcome, SegmentStats, normalize_item, segment};
pub use types::{DietPlanSections, SectionKey};
