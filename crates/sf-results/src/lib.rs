//! sf-results: analysis cache and record storage.

pub mod hash;
pub mod store;
pub mod types;

pub use hash::compute_analysis_id;
pub use store::AnalysisStore;
pub use types::*;

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Analysis not found: {analysis_id}")]
    AnalysisNotFound { analysis_id: String },

    #[error("Invalid path: {message}")]
    InvalidPath { message: String },
}
