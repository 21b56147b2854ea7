//! Sequential estimation pipeline: area reduction, panel packing, yield.

use crate::area::reduce_available_area;
use crate::error::EngineResult;
use crate::packing::pack_panels;
use crate::panel::PanelModel;
use crate::yield_estimate::estimate_power_output;
use sf_core::units::{Area, Irradiance, Power};

/// Inputs for one rooftop estimation.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimateRequest {
    /// Total roof surface area
    pub roof_area: Area,
    /// Fraction of the roof lost to obstructions, orientation, and shading, in [0, 1]
    pub exclusion_fraction: f64,
    /// Selected panel model
    pub panel: PanelModel,
    /// Layout realism factor in (0, 1]
    pub packing_efficiency: f64,
    /// Site solar-resource constant
    pub irradiance: Irradiance,
    /// Inverter/wiring/module derating factor in (0, 1]
    pub system_efficiency: f64,
}

/// Result of one rooftop estimation. Immutable; a new request produces a new
/// instance.
#[derive(Debug, Clone, PartialEq)]
pub struct SolarEstimate {
    pub roof_area: Area,
    pub available_area: Area,
    /// Footprint of one panel of the selected model
    pub panel_area: Area,
    pub effective_panel_area: Area,
    pub panel_count: u64,
    pub total_panel_area: Area,
    pub estimated_power_output: Power,
    /// The system derating factor applied in the yield stage, echoed into the
    /// result rather than recomputed as a coverage ratio.
    pub efficiency: f64,
}

/// Run the three estimation stages in order.
///
/// Fails fast: an invalid input in any stage aborts the whole computation and
/// no partial result is returned.
pub fn run_estimate(request: &EstimateRequest) -> EngineResult<SolarEstimate> {
    let available_area = reduce_available_area(request.roof_area, request.exclusion_fraction)?;

    let packing = pack_panels(available_area, &request.panel, request.packing_efficiency)?;

    let estimated_power_output = estimate_power_output(
        packing.effective_panel_area,
        request.irradiance,
        request.system_efficiency,
    )?;

    Ok(SolarEstimate {
        roof_area: request.roof_area,
        available_area,
        panel_area: request.panel.footprint,
        effective_panel_area: packing.effective_panel_area,
        panel_count: packing.panel_count,
        total_panel_area: packing.total_panel_area,
        estimated_power_output,
        efficiency: request.system_efficiency,
    })
}
