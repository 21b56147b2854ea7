//! Analysis storage API.

use crate::types::{AnalysisManifest, SolarAnalysis};
use crate::{ResultsError, ResultsResult};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone)]
pub struct AnalysisStore {
    root_dir: PathBuf,
}

impl AnalysisStore {
    pub fn new(root_dir: PathBuf) -> ResultsResult<Self> {
        if !root_dir.exists() {
            fs::create_dir_all(&root_dir)?;
        }
        Ok(Self { root_dir })
    }

    pub fn for_project(project_path: &Path) -> ResultsResult<Self> {
        let project_dir = project_path
            .parent()
            .ok_or_else(|| ResultsError::InvalidPath {
                message: "project path has no parent directory".to_string(),
            })?;
        let analyses_dir = project_dir.join(".solarflow").join("analyses");
        Self::new(analyses_dir)
    }

    fn analysis_dir(&self, analysis_id: &str) -> PathBuf {
        self.root_dir.join(analysis_id)
    }

    pub fn has_analysis(&self, analysis_id: &str) -> bool {
        self.analysis_dir(analysis_id).join("manifest.json").exists()
    }

    pub fn save_analysis(
        &self,
        manifest: &AnalysisManifest,
        analysis: &SolarAnalysis,
    ) -> ResultsResult<()> {
        let dir = self.analysis_dir(&manifest.analysis_id);
        fs::create_dir_all(&dir)?;

        let manifest_path = dir.join("manifest.json");
        let manifest_json = serde_json::to_string_pretty(manifest)?;
        fs::write(manifest_path, manifest_json)?;

        let analysis_path = dir.join("analysis.json");
        let analysis_json = serde_json::to_string_pretty(analysis)?;
        fs::write(analysis_path, analysis_json)?;

        Ok(())
    }

    pub fn load_manifest(&self, analysis_id: &str) -> ResultsResult<AnalysisManifest> {
        let manifest_path = self.analysis_dir(analysis_id).join("manifest.json");

        if !manifest_path.exists() {
            return Err(ResultsError::AnalysisNotFound {
                analysis_id: analysis_id.to_string(),
            });
        }

        let content = fs::read_to_string(manifest_path)?;
        let manifest = serde_json::from_str(&content)?;
        Ok(manifest)
    }

    pub fn load_analysis(&self, analysis_id: &str) -> ResultsResult<SolarAnalysis> {
        let analysis_path = self.analysis_dir(analysis_id).join("analysis.json");

        if !analysis_path.exists() {
            return Err(ResultsError::AnalysisNotFound {
                analysis_id: analysis_id.to_string(),
            });
        }

        let content = fs::read_to_string(analysis_path)?;
        let analysis = serde_json::from_str(&content)?;
        Ok(analysis)
    }

    pub fn list_analyses(&self, site_id: &str) -> ResultsResult<Vec<AnalysisManifest>> {
        let mut analyses = Vec::new();

        if !self.root_dir.exists() {
            return Ok(analyses);
        }

        for entry in fs::read_dir(&self.root_dir)? {
            let entry = entry?;
            if entry.path().is_dir() {
                let analysis_id = entry.file_name().to_string_lossy().to_string();
                if let Ok(manifest) = self.load_manifest(&analysis_id)
                    && manifest.site_id == site_id
                {
                    analyses.push(manifest);
                }
            }
        }

        Ok(analyses)
    }

    pub fn delete_analysis(&self, analysis_id: &str) -> ResultsResult<()> {
        let dir = self.analysis_dir(analysis_id);
        if dir.exists() {
            fs::remove_dir_all(dir)?;
        }
        Ok(())
    }
}
