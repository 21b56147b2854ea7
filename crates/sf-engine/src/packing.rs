//! Whole-panel packing onto the available area.

use crate::common::{require_half_open_unit, require_non_negative, require_positive};
use crate::error::EngineResult;
use crate::panel::PanelModel;
use sf_core::units::{Area, m2};

/// Outcome of packing whole panels onto a roof.
#[derive(Debug, Clone, PartialEq)]
pub struct Packing {
    /// Number of whole panels placed
    pub panel_count: u64,
    /// panel_count × single-panel footprint
    pub total_panel_area: Area,
    /// Area actually covered after rounding down to whole panels.
    /// Equal to `total_panel_area` under this packing model.
    pub effective_panel_area: Area,
}

/// Pack whole panels onto the available area.
///
/// `packing_efficiency` in (0, 1] models real-world layout loss (inter-row
/// gaps, setbacks, non-rectangular roof shapes) versus the theoretical
/// area-divided-by-footprint count. Partial panels are not installable, so
/// the count is floored; flooring rather than rounding keeps the yield
/// estimate from overstating what an installer can mount.
pub fn pack_panels(
    available_area: Area,
    panel: &PanelModel,
    packing_efficiency: f64,
) -> EngineResult<Packing> {
    require_non_negative(available_area.value, "available_area")?;
    require_positive(panel.footprint.value, "panel_area")?;
    require_half_open_unit(packing_efficiency, "packing_efficiency")?;

    let usable_packing_area = available_area.value * packing_efficiency;

    // usable < footprint falls out of the floor as count 0
    let mut panel_count = (usable_packing_area / panel.footprint.value).floor() as u64;
    // The quotient can round up across a whole-panel boundary; the covered
    // area must never exceed the usable packing area
    if panel_count > 0 && panel_count as f64 * panel.footprint.value > usable_packing_area {
        panel_count -= 1;
    }
    let total_panel_area = panel_count as f64 * panel.footprint.value;

    Ok(Packing {
        panel_count,
        total_panel_area: m2(total_panel_area),
        effective_panel_area: m2(total_panel_area),
    })
}
