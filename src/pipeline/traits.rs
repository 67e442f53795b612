//! Seams to the services around the segmenter.
//!
//! None of these are implemented against a real backend here: PDF parsing,
//! generative text and the report store belong to the host application.

use crate::error::PipelineError;
use crate::pipeline::ReportRecord;

/// Turns an uploaded report file into plain text.
pub trait TextExtractor: Send + Sync {
    fn extract_text(&self, data: &[u8]) -> Result<String, PipelineError>;
}

/// Generative-text endpoint. Output is free text with no schema.
pub trait TextGenerator: Send + Sync {
    fn generate(&self, prompt: &str) -> Result<String, PipelineError>;
}

/// Per-user report history.
pub trait ReportStore: Send + Sync {
    /// Up to `limit` records for `user_id`, newest first.
    fn latest_for_user(
        &self,
        user_id: &str,
        limit: usize,
    ) -> Result<Vec<ReportRecord>, PipelineError>;

    fn insert(&self, record: ReportRecord) -> Result<(), PipelineError>;
}
