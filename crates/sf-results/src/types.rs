//! Analysis result data types.

use serde::{Deserialize, Serialize};

pub type AnalysisId = String;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisManifest {
    pub analysis_id: AnalysisId,
    pub site_id: String,
    pub timestamp: String,
    pub engine_version: String,
}

/// Immutable record of one rooftop estimation run.
///
/// `efficiency` is the system derating factor the yield stage applied, echoed
/// from configuration; the other seven fields derive from it and the roof
/// geometry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SolarAnalysis {
    pub roof_area_m2: f64,
    pub available_area_m2: f64,
    pub panel_area_m2: f64,
    pub effective_panel_area_m2: f64,
    pub panel_count: u64,
    pub total_panel_area_m2: f64,
    pub estimated_power_output_w: f64,
    pub efficiency: f64,
}
