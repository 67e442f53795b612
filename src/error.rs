use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown section: {0}")]
    UnknownSection(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Failures of the report pipeline collaborators.
///
/// The pipeline does not retry: the first failing step aborts the run.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Text extraction failed: {0}")]
    Extraction(String),

    #[error("Text generation failed: {0}")]
    Generation(String),

    #[error("Report store error: {0}")]
    Store(String),

    #[error("Report contains no extractable text")]
    EmptyReport,
}
