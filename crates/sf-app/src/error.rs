//! Error types for the sf-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates and
/// provides a unified error interface for frontends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Project error: {0}")]
    Project(String),

    #[error("Failed to read project file: {path}")]
    ProjectFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write project file: {path}")]
    ProjectFileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Project validation failed: {0}")]
    Validation(String),

    #[error("Site not found: {0}")]
    SiteNotFound(String),

    #[error("Unknown panel format: {0}")]
    UnknownPanelFormat(String),

    #[error("Estimation error: {0}")]
    Estimation(String),

    #[error("Results error: {0}")]
    Results(String),

    #[error("Analysis not found: {0}")]
    AnalysisNotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for sf-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<sf_project::ProjectError> for AppError {
    fn from(err: sf_project::ProjectError) -> Self {
        AppError::Project(err.to_string())
    }
}

impl From<sf_project::ValidationError> for AppError {
    fn from(err: sf_project::ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<sf_engine::EngineError> for AppError {
    fn from(err: sf_engine::EngineError) -> Self {
        AppError::Estimation(err.to_string())
    }
}

impl From<sf_results::ResultsError> for AppError {
    fn from(err: sf_results::ResultsError) -> Self {
        match err {
            sf_results::ResultsError::AnalysisNotFound { analysis_id } => {
                AppError::AnalysisNotFound(analysis_id)
            }
            other => AppError::Results(other.to_string()),
        }
    }
}
