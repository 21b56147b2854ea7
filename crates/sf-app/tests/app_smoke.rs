use sf_app::{list_sites, load_project, validate_project};
use std::path::PathBuf;

const PROJECT_YAML: &str = r#"
version: 1
name: Smoke Project
sites:
  - id: warehouse
    name: Warehouse Roof
    roof:
      area_m2: 100.0
      exclusion_fraction: 0.2
    panel:
      type: Custom
      footprint_m2: 1.6
    assumptions:
      packing_efficiency: 0.75
      irradiance_w_m2: 150.0
      system_efficiency: 0.85
  - id: office
    name: Office Roof
    roof:
      area_m2: 340.0
      exclusion_fraction: 0.35
    panel:
      type: Format
      format: commercial-72-cell
    assumptions:
      packing_efficiency: 0.8
      irradiance_w_m2: 180.0
      system_efficiency: 0.9
"#;

fn write_project(dir_name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(dir_name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("project.yaml");
    std::fs::write(&path, PROJECT_YAML).unwrap();
    path
}

#[test]
fn load_and_validate_project() {
    let path = write_project("sf_app_smoke_load");
    let project = load_project(&path).unwrap();
    validate_project(&project).unwrap();
    assert_eq!(project.name, "Smoke Project");
}

#[test]
fn list_sites_summarizes_each_roof() {
    let path = write_project("sf_app_smoke_list");
    let project = load_project(&path).unwrap();

    let sites = list_sites(&project);
    assert_eq!(sites.len(), 2);
    assert_eq!(sites[0].id, "warehouse");
    assert_eq!(sites[0].roof_area_m2, 100.0);
    assert_eq!(sites[1].panel, "commercial-72-cell");
}

#[test]
fn empty_project_fails_validation() {
    let dir = std::env::temp_dir().join("sf_app_smoke_empty");
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("project.yaml");
    std::fs::write(&path, "version: 1\nname: Empty\nsites: []\n").unwrap();

    let project = load_project(&path).unwrap();
    assert!(validate_project(&project).is_err());
}
