use sf_project::schema::*;
use sf_project::{load_json, load_yaml, save_json, save_yaml, validate_project};

fn sample_project() -> Project {
    Project {
        version: 1,
        name: "Rooftop Survey".to_string(),
        sites: vec![
            SiteDef {
                id: "warehouse".to_string(),
                name: "Warehouse Roof".to_string(),
                roof: RoofDef {
                    area_m2: 100.0,
                    exclusion_fraction: 0.2,
                },
                panel: PanelDef::Custom { footprint_m2: 1.6 },
                assumptions: AssumptionsDef {
                    packing_efficiency: 0.75,
                    irradiance_w_m2: 150.0,
                    system_efficiency: 0.85,
                },
            },
            SiteDef {
                id: "office".to_string(),
                name: "Office Roof".to_string(),
                roof: RoofDef {
                    area_m2: 340.0,
                    exclusion_fraction: 0.35,
                },
                panel: PanelDef::Format {
                    format: "commercial-72-cell".to_string(),
                },
                assumptions: AssumptionsDef {
                    packing_efficiency: 0.8,
                    irradiance_w_m2: 180.0,
                    system_efficiency: 0.9,
                },
            },
        ],
    }
}

#[test]
fn roundtrip_yaml_empty_project() {
    let project = Project {
        version: 1,
        name: "Empty Project".to_string(),
        sites: vec![],
    };

    validate_project(&project).unwrap();

    let temp_dir = std::env::temp_dir();
    let path = temp_dir.join("sf_project_roundtrip_empty.yaml");

    save_yaml(&path, &project).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(project, loaded);
}

#[test]
fn roundtrip_yaml_two_sites() {
    let project = sample_project();
    validate_project(&project).unwrap();

    let path = std::env::temp_dir().join("sf_project_roundtrip_sites.yaml");

    save_yaml(&path, &project).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(project, loaded);
}

#[test]
fn roundtrip_json_two_sites() {
    let project = sample_project();

    let path = std::env::temp_dir().join("sf_project_roundtrip_sites.json");

    save_json(&path, &project).unwrap();
    let loaded = load_json(&path).unwrap();

    assert_eq!(project, loaded);
}

#[test]
fn load_rejects_invalid_site() {
    let mut project = sample_project();
    project.sites[0].roof.area_m2 = -10.0;

    let path = std::env::temp_dir().join("sf_project_invalid_site.yaml");
    // bypass save_yaml validation to exercise the load path
    std::fs::write(&path, serde_yaml::to_string(&project).unwrap()).unwrap();

    assert!(load_yaml(&path).is_err());
}

#[test]
fn load_migrates_v0_file() {
    let mut project = sample_project();
    project.version = 0;

    let path = std::env::temp_dir().join("sf_project_v0.yaml");
    std::fs::write(&path, serde_yaml::to_string(&project).unwrap()).unwrap();

    let loaded = load_yaml(&path).unwrap();
    assert_eq!(loaded.version, sf_project::LATEST_VERSION);
    assert_eq!(loaded.sites.len(), 2);
}
