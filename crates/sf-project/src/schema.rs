//! Project schema definitions.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub sites: Vec<SiteDef>,
}

/// One roof to estimate, with its panel selection and solar assumptions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteDef {
    pub id: String,
    pub name: String,
    pub roof: RoofDef,
    pub panel: PanelDef,
    pub assumptions: AssumptionsDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoofDef {
    /// Total roof surface area
    pub area_m2: f64,
    /// Fraction lost to obstructions, orientation, and shading, in [0, 1]
    pub exclusion_fraction: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum PanelDef {
    /// A named format from the panel catalog
    Format { format: String },
    /// An explicit single-panel footprint
    Custom { footprint_m2: f64 },
}

/// Solar assumptions are collaborator-supplied; none default.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssumptionsDef {
    /// Layout realism factor in (0, 1]
    pub packing_efficiency: f64,
    /// Site solar-resource constant, W per m² of panel
    pub irradiance_w_m2: f64,
    /// Inverter/wiring/module derating factor in (0, 1]
    pub system_efficiency: f64,
}
