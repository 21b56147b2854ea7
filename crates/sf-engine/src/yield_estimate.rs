//! Power yield estimation from covered panel area.

use crate::common::{require_half_open_unit, require_non_negative, require_positive};
use crate::error::EngineResult;
use sf_core::units::{Area, Irradiance, Power, watts};

/// Estimate power output from the effectively covered panel area.
///
/// `irradiance` is the site solar-resource constant (W per m² of panel);
/// `system_efficiency` in (0, 1] derates for inverter, wiring, and module
/// losses. P = A_eff × G × η.
pub fn estimate_power_output(
    effective_panel_area: Area,
    irradiance: Irradiance,
    system_efficiency: f64,
) -> EngineResult<Power> {
    require_non_negative(effective_panel_area.value, "effective_panel_area")?;
    require_positive(irradiance.value, "irradiance")?;
    require_half_open_unit(system_efficiency, "system_efficiency")?;

    let power = effective_panel_area.value * irradiance.value * system_efficiency;
    Ok(watts(power))
}
