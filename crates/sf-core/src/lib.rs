//! sf-core: stable foundation for solarflow.
//!
//! Contains:
//! - units (uom SI types + constructors for areas, power, irradiance)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{SfError, SfResult};
pub use numeric::*;
pub use units::*;
