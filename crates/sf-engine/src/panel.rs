//! Panel model definitions.

use crate::common::require_positive;
use crate::error::EngineResult;
use sf_core::units::{Area, m2};

/// Common photovoltaic panel form factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelFormat {
    /// 60-cell residential module (~1.7 m × 1.0 m)
    Residential60Cell,
    /// 72-cell commercial module (~2.0 m × 1.0 m)
    Commercial72Cell,
    /// Large-format utility module (~2.2 m × 1.1 m)
    LargeFormat,
}

impl PanelFormat {
    pub const ALL: [PanelFormat; 3] = [
        PanelFormat::Residential60Cell,
        PanelFormat::Commercial72Cell,
        PanelFormat::LargeFormat,
    ];

    /// Physical footprint of one module of this format.
    pub fn footprint_m2(&self) -> f64 {
        match self {
            PanelFormat::Residential60Cell => 1.7,
            PanelFormat::Commercial72Cell => 2.0,
            PanelFormat::LargeFormat => 2.4,
        }
    }

    /// Display label, also used as the project-file name of the format.
    pub fn label(&self) -> &'static str {
        match self {
            PanelFormat::Residential60Cell => "residential-60-cell",
            PanelFormat::Commercial72Cell => "commercial-72-cell",
            PanelFormat::LargeFormat => "large-format",
        }
    }

    /// Look up a format by its project-file name.
    pub fn from_name(name: &str) -> Option<PanelFormat> {
        PanelFormat::ALL.iter().copied().find(|f| f.label() == name)
    }
}

/// Physical description of the panel model selected for a roof.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelModel {
    name: String,
    /// Footprint of a single module
    pub footprint: Area,
}

impl PanelModel {
    /// Create a panel model with an explicit footprint.
    pub fn new(name: String, footprint: Area) -> EngineResult<Self> {
        require_positive(footprint.value, "panel_area")?;
        Ok(Self { name, footprint })
    }

    /// Create a panel model from a catalog format.
    pub fn from_format(format: PanelFormat) -> Self {
        Self {
            name: format.label().to_string(),
            footprint: m2(format.footprint_m2()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_footprints_are_positive() {
        for format in PanelFormat::ALL {
            assert!(format.footprint_m2() > 0.0, "{}", format.label());
        }
    }

    #[test]
    fn format_lookup_round_trips() {
        for format in PanelFormat::ALL {
            assert_eq!(PanelFormat::from_name(format.label()), Some(format));
        }
        assert_eq!(PanelFormat::from_name("thin-film"), None);
    }

    #[test]
    fn custom_model_requires_positive_footprint() {
        assert!(PanelModel::new("ok".into(), m2(1.6)).is_ok());
        assert!(PanelModel::new("flat".into(), m2(0.0)).is_err());
        assert!(PanelModel::new("negative".into(), m2(-1.0)).is_err());
    }

    #[test]
    fn model_from_format_carries_label() {
        let model = PanelModel::from_format(PanelFormat::Residential60Cell);
        assert_eq!(model.name(), "residential-60-cell");
        assert_eq!(model.footprint.value, 1.7);
    }
}
