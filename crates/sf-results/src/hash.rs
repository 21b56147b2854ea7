//! Content-based hashing for analysis IDs.

use sf_project::schema::SiteDef;
use sha2::{Digest, Sha256};

pub fn compute_analysis_id(site: &SiteDef, engine_version: &str) -> String {
    let mut hasher = Sha256::new();

    let site_json = serde_json::to_string(site).unwrap_or_default();
    hasher.update(site_json.as_bytes());

    hasher.update(engine_version.as_bytes());

    let result = hasher.finalize();
    format!("{:x}", result)
}
