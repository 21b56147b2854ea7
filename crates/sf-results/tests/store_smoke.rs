use sf_results::*;

fn sample_analysis() -> SolarAnalysis {
    SolarAnalysis {
        roof_area_m2: 100.0,
        available_area_m2: 80.0,
        panel_area_m2: 1.6,
        effective_panel_area_m2: 59.2,
        panel_count: 37,
        total_panel_area_m2: 59.2,
        estimated_power_output_w: 7548.0,
        efficiency: 0.85,
    }
}

#[test]
fn save_and_load_analysis() {
    let temp_dir = std::env::temp_dir().join("sf_results_test");
    let _ = std::fs::remove_dir_all(&temp_dir);

    let store = AnalysisStore::new(temp_dir.clone()).unwrap();

    let manifest = AnalysisManifest {
        analysis_id: "test_analysis_123".to_string(),
        site_id: "warehouse".to_string(),
        timestamp: "2026-08-07T12:00:00Z".to_string(),
        engine_version: "v1".to_string(),
    };

    store.save_analysis(&manifest, &sample_analysis()).unwrap();

    let loaded_manifest = store.load_manifest("test_analysis_123").unwrap();
    assert_eq!(loaded_manifest.analysis_id, manifest.analysis_id);
    assert_eq!(loaded_manifest.site_id, "warehouse");

    let loaded = store.load_analysis("test_analysis_123").unwrap();
    assert_eq!(loaded, sample_analysis());
}

#[test]
fn analysis_json_round_trips_all_fields() {
    let analysis = sample_analysis();
    let json = serde_json::to_string(&analysis).unwrap();
    let back: SolarAnalysis = serde_json::from_str(&json).unwrap();
    assert_eq!(back, analysis);
}

#[test]
fn missing_analysis_reports_not_found() {
    let temp_dir = std::env::temp_dir().join("sf_results_test_missing");
    let _ = std::fs::remove_dir_all(&temp_dir);

    let store = AnalysisStore::new(temp_dir).unwrap();
    let err = store.load_manifest("nope").unwrap_err();
    assert!(matches!(err, ResultsError::AnalysisNotFound { .. }));
}

#[test]
fn list_analyses_by_site() {
    let temp_dir = std::env::temp_dir().join("sf_results_test_list");
    let _ = std::fs::remove_dir_all(&temp_dir);

    let store = AnalysisStore::new(temp_dir.clone()).unwrap();

    for (analysis_id, site_id) in [
        ("a1", "warehouse"),
        ("a2", "warehouse"),
        ("a3", "office"),
    ] {
        let manifest = AnalysisManifest {
            analysis_id: analysis_id.to_string(),
            site_id: site_id.to_string(),
            timestamp: "2026-08-07T12:00:00Z".to_string(),
            engine_version: "v1".to_string(),
        };
        store.save_analysis(&manifest, &sample_analysis()).unwrap();
    }

    let warehouse = store.list_analyses("warehouse").unwrap();
    assert_eq!(warehouse.len(), 2);

    let office = store.list_analyses("office").unwrap();
    assert_eq!(office.len(), 1);
}

#[test]
fn delete_analysis_removes_it() {
    let temp_dir = std::env::temp_dir().join("sf_results_test_delete");
    let _ = std::fs::remove_dir_all(&temp_dir);

    let store = AnalysisStore::new(temp_dir).unwrap();

    let manifest = AnalysisManifest {
        analysis_id: "gone".to_string(),
        site_id: "warehouse".to_string(),
        timestamp: "2026-08-07T12:00:00Z".to_string(),
        engine_version: "v1".to_string(),
    };
    store.save_analysis(&manifest, &sample_analysis()).unwrap();
    assert!(store.has_analysis("gone"));

    store.delete_analysis("gone").unwrap();
    assert!(!store.has_analysis("gone"));
}
