//! Project validation logic.

use crate::schema::{PanelDef, Project, SiteDef};
use sf_engine::PanelFormat;
use std::collections::HashSet;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown panel format: {format} in site '{site_id}'")]
    UnknownPanelFormat { format: String, site_id: String },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_project(project: &Project) -> Result<(), ValidationError> {
    if project.version > crate::migrate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: project.version,
        });
    }

    let mut site_ids = HashSet::new();
    for site in &project.sites {
        if !site_ids.insert(&site.id) {
            return Err(ValidationError::DuplicateId {
                id: site.id.clone(),
                context: "sites".to_string(),
            });
        }
        validate_site(site)?;
    }

    Ok(())
}

fn validate_site(site: &SiteDef) -> Result<(), ValidationError> {
    check_value(
        site.roof.area_m2,
        site.roof.area_m2.is_finite() && site.roof.area_m2 >= 0.0,
        &format!("site '{}' roof.area_m2", site.id),
        "must be finite and non-negative",
    )?;
    check_value(
        site.roof.exclusion_fraction,
        (0.0..=1.0).contains(&site.roof.exclusion_fraction),
        &format!("site '{}' roof.exclusion_fraction", site.id),
        "must be within [0, 1]",
    )?;

    match &site.panel {
        PanelDef::Format { format } => {
            if PanelFormat::from_name(format).is_none() {
                return Err(ValidationError::UnknownPanelFormat {
                    format: format.clone(),
                    site_id: site.id.clone(),
                });
            }
        }
        PanelDef::Custom { footprint_m2 } => {
            check_value(
                *footprint_m2,
                footprint_m2.is_finite() && *footprint_m2 > 0.0,
                &format!("site '{}' panel.footprint_m2", site.id),
                "must be finite and positive",
            )?;
        }
    }

    let a = &site.assumptions;
    check_value(
        a.packing_efficiency,
        a.packing_efficiency > 0.0 && a.packing_efficiency <= 1.0,
        &format!("site '{}' assumptions.packing_efficiency", site.id),
        "must be within (0, 1]",
    )?;
    check_value(
        a.irradiance_w_m2,
        a.irradiance_w_m2.is_finite() && a.irradiance_w_m2 > 0.0,
        &format!("site '{}' assumptions.irradiance_w_m2", site.id),
        "must be finite and positive",
    )?;
    check_value(
        a.system_efficiency,
        a.system_efficiency > 0.0 && a.system_efficiency <= 1.0,
        &format!("site '{}' assumptions.system_efficiency", site.id),
        "must be within (0, 1]",
    )?;

    Ok(())
}

fn check_value(value: f64, ok: bool, field: &str, reason: &str) -> Result<(), ValidationError> {
    if ok {
        Ok(())
    } else {
        Err(ValidationError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        })
    }
}
