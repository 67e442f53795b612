//! Report processing: extract, summarize, compare, plan, segment, store.
//!
//! Every step is a call into a collaborator trait. The first failure aborts
//! the run and nothing is stored; there is no retry.

pub mod prompts;
mod store;
mod traits;

pub use store::MemoryReportStore;
pub use traits::{ReportStore, TextExtractor, TextGenerator};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::PipelineError;
use crate::report::{ReportLine, format_report};
use crate::segment::DietPlanSegmenter;
use crate::types::DietPlanSections;

/// One processed report as kept in the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRecord {
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub summary: String,
    pub comparison: Option<String>,
    pub diet_plan: String,
}

/// Everything the UI needs to render a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedReport {
    pub record: ReportRecord,
    pub summary_lines: Vec<ReportLine>,
    pub comparison_lines: Vec<ReportLine>,
    pub diet_plan: DietPlanSections,
}

pub struct ReportPipeline<E, G, S> {
    extractor: E,
    generator: G,
    store: S,
    segmenter: DietPlanSegmenter,
}

impl<E, G, S> ReportPipeline<E, G, S>
where
    E: TextExtractor,
    G: TextGenerator,
    S: ReportStore,
{
    pub fn new(extractor: E, generator: G, store: S) -> Self {
        Self {
            extractor,
            generator,
            store,
            segmenter: DietPlanSegmenter::default(),
        }
    }

    pub fn with_segmenter(mut self, segmenter: DietPlanSegmenter) -> Self {
        self.segmenter = segmenter;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Run the full chain for one uploaded report.
    pub fn process(&self, user_id: &str, data: &[u8]) -> Result<ProcessedReport, PipelineError> {
        let text = self.extractor.extract_text(data)?;
        if text.trim().is_empty() {
            return Err(PipelineError::EmptyReport);
        }
        tracing::debug!(user_id, chars = text.len(), "extracted report text");

        let summary = self.generator.generate(&prompts::summary_prompt(&text))?;

        let previous = self.store.latest_for_user(user_id, 1)?;
        let comparison = match previous.first() {
            Some(prev) => {
                tracing::debug!(user_id, previous = %prev.created_at, "comparing with previous report");
                Some(
                    self.generator
                        .generate(&prompts::comparison_prompt(&prev.summary, &summary))?,
                )
            }
            None => None,
        };

        let diet_plan = self.generator.generate(&prompts::diet_plan_prompt(&summary))?;
        let sections = self.segmenter.segment(&diet_plan);

        let record = ReportRecord {
            user_id: user_id.to_string(),
            created_at: Utc::now(),
            summary,
            comparison,
            diet_plan,
        };
        self.store.insert(record.clone())?;

        tracing::info!(
            user_id,
            diet_items = sections.total_items(),
            compared = record.comparison.is_some(),
            "report processed"
        );

        Ok(ProcessedReport {
            summary_lines: format_report(&record.summary),
            comparison_lines: record
                .comparison
                .as_deref()
                .map(format_report)
                .unwrap_or_default(),
            diet_plan: sections,
            record,
        })
    }
}
