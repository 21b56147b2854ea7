//! Project loading, saving, validation, and introspection.

use std::path::Path;
use sf_project::schema::{PanelDef, Project, SiteDef};

use crate::error::{AppError, AppResult};

/// Summary of a site for listing.
#[derive(Debug, Clone)]
pub struct SiteSummary {
    pub id: String,
    pub name: String,
    pub roof_area_m2: f64,
    pub panel: String,
}

/// Load project from a YAML file.
pub fn load_project(path: &Path) -> AppResult<Project> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::ProjectFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let project: Project = serde_yaml::from_str(&content)
        .map_err(|e| AppError::Project(format!("Failed to parse project YAML: {}", e)))?;

    let project = sf_project::migrate_to_latest(project)?;

    Ok(project)
}

/// Save project to a YAML file.
pub fn save_project(path: &Path, project: &Project) -> AppResult<()> {
    let content = serde_yaml::to_string(project)
        .map_err(|e| AppError::Project(format!("Failed to serialize project: {}", e)))?;

    std::fs::write(path, content).map_err(|e| AppError::ProjectFileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

/// Validate project structure and per-site values.
pub fn validate_project(project: &Project) -> AppResult<()> {
    if project.sites.is_empty() {
        return Err(AppError::Validation(
            "Project must have at least one site".to_string(),
        ));
    }

    sf_project::validate_project(project)?;

    Ok(())
}

/// List all sites in the project with summaries.
pub fn list_sites(project: &Project) -> Vec<SiteSummary> {
    project
        .sites
        .iter()
        .map(|site| SiteSummary {
            id: site.id.clone(),
            name: site.name.clone(),
            roof_area_m2: site.roof.area_m2,
            panel: match &site.panel {
                PanelDef::Format { format } => format.clone(),
                PanelDef::Custom { footprint_m2 } => format!("custom ({footprint_m2} m²)"),
            },
        })
        .collect()
}

/// Get a specific site by ID.
pub fn get_site<'a>(project: &'a Project, site_id: &str) -> AppResult<&'a SiteDef> {
    project
        .sites
        .iter()
        .find(|s| s.id == site_id)
        .ok_or_else(|| AppError::SiteNotFound(site_id.to_string()))
}
