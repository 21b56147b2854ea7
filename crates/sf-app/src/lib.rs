//! Shared application service layer for solarflow.
//!
//! This crate provides a unified interface for frontends, centralizing
//! business logic for project management, site compilation, analysis
//! execution, and cached-result access.

pub mod analysis_service;
pub mod error;
pub mod project_service;

// Re-export key types for convenience
pub use analysis_service::{
    AnalysisOptions, AnalysisRequest, AnalysisResponse, SiteOutcome, analyze_all, ensure_analysis,
    list_analyses, load_analysis,
};
pub use error::{AppError, AppResult};
pub use project_service::{
    SiteSummary, get_site, list_sites, load_project, save_project, validate_project,
};
