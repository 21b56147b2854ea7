//! sf-engine: rooftop estimation stages for solarflow.
//!
//! Provides the three pure calculation stages:
//! - Area reduction (obstructions, setbacks, shading)
//! - Whole-panel packing onto the remaining area
//! - Power yield from covered area and site irradiance
//!
//! All stages are deterministic functions of their inputs with no shared
//! state, suitable for caching and parallel fan-out across roofs.
//!
//! # Example
//!
//! ```
//! use sf_engine::{run_estimate, EstimateRequest, PanelModel};
//! use sf_core::units::{m2, wpm2};
//!
//! let request = EstimateRequest {
//!     roof_area: m2(100.0),
//!     exclusion_fraction: 0.2,
//!     panel: PanelModel::new("Residential 60-cell".into(), m2(1.6)).unwrap(),
//!     packing_efficiency: 0.75,
//!     irradiance: wpm2(150.0),
//!     system_efficiency: 0.85,
//! };
//!
//! let estimate = run_estimate(&request).unwrap();
//! assert_eq!(estimate.panel_count, 37);
//! println!("Estimated output: {} W", estimate.estimated_power_output.value);
//! ```

pub mod area;
pub mod common;
pub mod error;
pub mod packing;
pub mod panel;
pub mod pipeline;
pub mod yield_estimate;

// Re-exports
pub use area::reduce_available_area;
pub use error::{EngineError, EngineResult};
pub use packing::{Packing, pack_panels};
pub use panel::{PanelFormat, PanelModel};
pub use pipeline::{EstimateRequest, SolarEstimate, run_estimate};
pub use yield_estimate::estimate_power_output;
