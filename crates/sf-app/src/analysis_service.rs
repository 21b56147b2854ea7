//! Analysis execution and caching service.

use std::path::Path;

use rayon::prelude::*;
use sf_core::units::{m2, wpm2};
use sf_engine::{EstimateRequest, PanelFormat, PanelModel, SolarEstimate, run_estimate};
use sf_project::schema::{PanelDef, SiteDef};
use sf_results::{AnalysisManifest, AnalysisStore, SolarAnalysis, compute_analysis_id};
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::project_service;

/// Options for running analyses.
#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    pub use_cache: bool,
    pub engine_version: String,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            use_cache: true,
            engine_version: "0.1.0".to_string(),
        }
    }
}

/// Request to analyze one site of a project.
pub struct AnalysisRequest<'a> {
    pub project_path: &'a Path,
    pub site_id: &'a str,
    pub options: AnalysisOptions,
}

/// Response from an analysis execution.
#[derive(Debug, Clone)]
pub struct AnalysisResponse {
    pub analysis_id: String,
    pub manifest: AnalysisManifest,
    pub analysis: SolarAnalysis,
    pub loaded_from_cache: bool,
}

/// Per-site outcome of a batch analysis.
#[derive(Debug)]
pub struct SiteOutcome {
    pub site_id: String,
    pub result: AppResult<AnalysisResponse>,
}

/// Compute or load the analysis for one site.
///
/// The analysis id is a content hash of the site definition and engine
/// version, so identical inputs hit the cache and changed inputs never do.
pub fn ensure_analysis(request: &AnalysisRequest<'_>) -> AppResult<AnalysisResponse> {
    let project = project_service::load_project(request.project_path)?;
    project_service::validate_project(&project)?;

    let site = project_service::get_site(&project, request.site_id)?;
    let store = AnalysisStore::for_project(request.project_path)?;

    ensure_site_analysis(site, &store, &request.options)
}

/// Analyze every site in the project, fanning out across a worker pool.
///
/// Sites are independent, so a failing site is reported in its outcome
/// without aborting the others. Outcomes keep the project's site order.
pub fn analyze_all(project_path: &Path, options: &AnalysisOptions) -> AppResult<Vec<SiteOutcome>> {
    let project = project_service::load_project(project_path)?;
    project_service::validate_project(&project)?;

    let store = AnalysisStore::for_project(project_path)?;

    let outcomes = project
        .sites
        .par_iter()
        .map(|site| SiteOutcome {
            site_id: site.id.clone(),
            result: ensure_site_analysis(site, &store, options),
        })
        .collect();

    Ok(outcomes)
}

/// List cached analyses for a site.
pub fn list_analyses(project_path: &Path, site_id: &str) -> AppResult<Vec<AnalysisManifest>> {
    let store = AnalysisStore::for_project(project_path)?;
    Ok(store.list_analyses(site_id)?)
}

/// Load a cached analysis by id.
pub fn load_analysis(
    project_path: &Path,
    analysis_id: &str,
) -> AppResult<(AnalysisManifest, SolarAnalysis)> {
    let store = AnalysisStore::for_project(project_path)?;
    let manifest = store.load_manifest(analysis_id)?;
    let analysis = store.load_analysis(analysis_id)?;
    Ok((manifest, analysis))
}

fn ensure_site_analysis(
    site: &SiteDef,
    store: &AnalysisStore,
    options: &AnalysisOptions,
) -> AppResult<AnalysisResponse> {
    let analysis_id = compute_analysis_id(site, &options.engine_version);

    if options.use_cache && store.has_analysis(&analysis_id) {
        debug!(site_id = %site.id, %analysis_id, "analysis cache hit");
        let manifest = store.load_manifest(&analysis_id)?;
        let analysis = store.load_analysis(&analysis_id)?;
        return Ok(AnalysisResponse {
            analysis_id,
            manifest,
            analysis,
            loaded_from_cache: true,
        });
    }

    debug!(site_id = %site.id, %analysis_id, "computing analysis");
    let estimate_request = compile_site(site)?;
    let estimate = run_estimate(&estimate_request)?;
    let analysis = estimate_to_record(&estimate);

    let manifest = AnalysisManifest {
        analysis_id: analysis_id.clone(),
        site_id: site.id.clone(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        engine_version: options.engine_version.clone(),
    };

    store.save_analysis(&manifest, &analysis)?;

    Ok(AnalysisResponse {
        analysis_id,
        manifest,
        analysis,
        loaded_from_cache: false,
    })
}

/// Resolve a site definition into engine inputs.
fn compile_site(site: &SiteDef) -> AppResult<EstimateRequest> {
    let panel = match &site.panel {
        PanelDef::Format { format } => {
            let format = PanelFormat::from_name(format)
                .ok_or_else(|| AppError::UnknownPanelFormat(format.clone()))?;
            PanelModel::from_format(format)
        }
        PanelDef::Custom { footprint_m2 } => {
            PanelModel::new(format!("{}-custom", site.id), m2(*footprint_m2))?
        }
    };

    Ok(EstimateRequest {
        roof_area: m2(site.roof.area_m2),
        exclusion_fraction: site.roof.exclusion_fraction,
        panel,
        packing_efficiency: site.assumptions.packing_efficiency,
        irradiance: wpm2(site.assumptions.irradiance_w_m2),
        system_efficiency: site.assumptions.system_efficiency,
    })
}

fn estimate_to_record(estimate: &SolarEstimate) -> SolarAnalysis {
    SolarAnalysis {
        roof_area_m2: estimate.roof_area.value,
        available_area_m2: estimate.available_area.value,
        panel_area_m2: estimate.panel_area.value,
        effective_panel_area_m2: estimate.effective_panel_area.value,
        panel_count: estimate.panel_count,
        total_panel_area_m2: estimate.total_panel_area.value,
        estimated_power_output_w: estimate.estimated_power_output.value,
        efficiency: estimate.efficiency,
    }
}
