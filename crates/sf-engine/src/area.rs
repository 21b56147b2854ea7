//! Usable-area reduction for roof obstructions and shading.

use crate::common::{require_non_negative, require_unit_interval};
use crate::error::EngineResult;
use sf_core::units::{Area, m2};

/// Reduce total roof area to the area available for panels.
///
/// `exclusion_fraction` is the fraction of the roof lost to obstructions
/// (chimneys, vents), edge setbacks, orientation, and shading.
///
/// The result is clamped to `[0, roof_area]` so float rounding near the
/// interval ends cannot produce an available area outside the roof.
pub fn reduce_available_area(roof_area: Area, exclusion_fraction: f64) -> EngineResult<Area> {
    require_non_negative(roof_area.value, "roof_area")?;
    require_unit_interval(exclusion_fraction, "exclusion_fraction")?;

    let available = roof_area.value * (1.0 - exclusion_fraction);
    Ok(m2(available.clamp(0.0, roof_area.value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use sf_core::numeric::{Tolerances, nearly_equal};

    #[test]
    fn reduces_by_exclusion_fraction() {
        let available = reduce_available_area(m2(100.0), 0.2).unwrap();
        assert!(nearly_equal(available.value, 80.0, Tolerances::default()));
    }

    #[test]
    fn zero_roof_gives_zero_available() {
        let available = reduce_available_area(m2(0.0), 0.5).unwrap();
        assert_eq!(available.value, 0.0);
    }

    #[test]
    fn full_exclusion_gives_zero_available() {
        let available = reduce_available_area(m2(250.0), 1.0).unwrap();
        assert_eq!(available.value, 0.0);
    }

    #[test]
    fn no_exclusion_keeps_whole_roof() {
        let available = reduce_available_area(m2(42.0), 0.0).unwrap();
        assert_eq!(available.value, 42.0);
    }

    #[test]
    fn negative_roof_area_rejected() {
        let err = reduce_available_area(m2(-5.0), 0.2).unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidInput {
                field: "roof_area",
                ..
            }
        ));
    }

    #[test]
    fn out_of_range_fraction_rejected() {
        assert!(reduce_available_area(m2(100.0), 1.2).is_err());
        assert!(reduce_available_area(m2(100.0), -0.2).is_err());
    }

    #[test]
    fn non_finite_inputs_rejected() {
        assert!(reduce_available_area(m2(f64::NAN), 0.2).is_err());
        assert!(reduce_available_area(m2(100.0), f64::INFINITY).is_err());
    }
}
