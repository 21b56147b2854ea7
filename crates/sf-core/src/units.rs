// sf-core/src/units.rs

use uom::si::f64::{
    Area as UomArea, HeatFluxDensity as UomHeatFluxDensity, Power as UomPower, Ratio as UomRatio,
};

// Public canonical unit types (SI, f64)
pub type Area = UomArea;
/// Site solar resource, W per m² of panel area
pub type Irradiance = UomHeatFluxDensity;
pub type Power = UomPower;
pub type Ratio = UomRatio;

#[inline]
pub fn m2(v: f64) -> Area {
    use uom::si::area::square_meter;
    Area::new::<square_meter>(v)
}

#[inline]
pub fn watts(v: f64) -> Power {
    use uom::si::power::watt;
    Power::new::<watt>(v)
}

#[inline]
pub fn wpm2(v: f64) -> Irradiance {
    use uom::si::heat_flux_density::watt_per_square_meter;
    Irradiance::new::<watt_per_square_meter>(v)
}

#[inline]
pub fn unitless(v: f64) -> Ratio {
    use uom::si::ratio::ratio;
    Ratio::new::<ratio>(v)
}

pub mod constants {
    use super::*;

    /// Standard test condition irradiance used by panel datasheets
    pub const STC_IRRADIANCE_W_M2: f64 = 1000.0;

    #[inline]
    pub fn stc_irradiance() -> Irradiance {
        wpm2(STC_IRRADIANCE_W_M2)
    }
}
