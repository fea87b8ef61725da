//! Loading and classification of the compliance document tree.
//!
//! Discovery walks the fixed input layout (`data/*/*.yaml`,
//! `controls/systems/*.yaml`) in sorted path order so every downstream
//! transform sees documents in a reproducible sequence. Per-file parse
//! failures are collected and reported together instead of aborting on the
//! first bad document.

use crate::error::{Result, WeaveError};
use crate::model::{BaseControl, Certification, Control, MergedControls, SiteConfig, Standard};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

pub const DATA_DIR: &str = "data";
pub const STANDARDS_DIR: &str = "standards";
pub const CONTROLS_DIR: &str = "controls";
pub const CERTIFICATIONS_DIR: &str = "certifications";
pub const SYSTEMS_DIR: &str = "controls/systems";
pub const BASE_CONTROL_FILE: &str = "controls/base_control.yml";
pub const MERGED_CONTROLS_FILE: &str = "controls/final_controler.yaml";
pub const SITE_CONFIG_FILE: &str = "docs/_config.yml";
pub const COMPLETED_CERTIFICATIONS_DIR: &str = "completed_certifications";
pub const PAGES_DIR: &str = "docs/pages";

/// Everything the certification pipeline needs, loaded from `data/`.
#[derive(Debug, Default)]
pub struct DocumentSet {
    pub standards: BTreeMap<String, Standard>,
    pub controls: Vec<Control>,
    pub certifications: BTreeMap<String, Certification>,
}

/// A `controls/`-classified document: its `controls` sequence is flattened
/// into the global control list.
#[derive(Debug, Deserialize)]
struct ControlsFile {
    controls: Vec<Control>,
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| matches!(ext, "yaml" | "yml"))
}

/// Collect YAML files between `min_depth` and `max_depth`, sorted by path.
fn yaml_files(dir: &Path, min_depth: usize, max_depth: usize) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .min_depth(min_depth)
        .max_depth(max_depth)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| is_yaml(path))
        .collect();
    files.sort();
    files
}

fn parse_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| WeaveError::ReadFile {
        path: path.display().to_string(),
        source: e,
    })?;
    serde_yaml::from_str(&content).map_err(|e| WeaveError::ParseYaml {
        path: path.display().to_string(),
        source: e,
    })
}

/// Load `data/*/*.yaml`, classifying each document by its containing
/// directory. Documents under unrecognized directories are skipped.
pub fn load_data(root: &Path) -> Result<DocumentSet> {
    let data_dir = root.join(DATA_DIR);
    if !data_dir.is_dir() {
        return Err(WeaveError::MissingDirectory(data_dir));
    }

    let mut set = DocumentSet::default();
    let mut errors = Vec::new();

    for file in yaml_files(&data_dir, 2, 2) {
        let class = file
            .parent()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .unwrap_or("");
        match class {
            STANDARDS_DIR => match parse_file::<Standard>(&file) {
                Ok(standard) => {
                    debug!(path = %file.display(), name = %standard.name, "loaded standard");
                    if let Some(previous) = set.standards.insert(standard.name.clone(), standard) {
                        warn!(name = %previous.name, "duplicate standard replaced an earlier one");
                    }
                }
                Err(e) => errors.push(e),
            },
            CONTROLS_DIR => match parse_file::<ControlsFile>(&file) {
                Ok(doc) => {
                    debug!(path = %file.display(), count = doc.controls.len(), "loaded controls");
                    set.controls.extend(doc.controls);
                }
                Err(e) => errors.push(e),
            },
            CERTIFICATIONS_DIR => match parse_file::<Certification>(&file) {
                Ok(certification) => {
                    debug!(path = %file.display(), name = %certification.name, "loaded certification");
                    set.certifications
                        .insert(certification.name.clone(), certification);
                }
                Err(e) => errors.push(e),
            },
            other => {
                debug!(path = %file.display(), directory = other, "skipping unclassified document");
            }
        }
    }

    if errors.is_empty() {
        Ok(set)
    } else {
        Err(WeaveError::from_load_errors(errors))
    }
}

/// Load the base-control template (`controls/base_control.yml`).
pub fn load_base_control(root: &Path) -> Result<BaseControl> {
    parse_file(&root.join(BASE_CONTROL_FILE))
}

/// Load the per-system fragments (`controls/systems/*.yaml`) in sorted
/// order. A missing systems directory means no fragments, not an error.
pub fn load_fragments(root: &Path) -> Result<Vec<BaseControl>> {
    let systems_dir = root.join(SYSTEMS_DIR);
    if !systems_dir.is_dir() {
        debug!(path = %systems_dir.display(), "no systems directory; nothing to merge");
        return Ok(Vec::new());
    }

    let mut fragments = Vec::new();
    let mut errors = Vec::new();
    for file in yaml_files(&systems_dir, 1, 1) {
        match parse_file::<BaseControl>(&file) {
            Ok(fragment) => fragments.push(fragment),
            Err(e) => errors.push(e),
        }
    }

    if errors.is_empty() {
        Ok(fragments)
    } else {
        Err(WeaveError::from_load_errors(errors))
    }
}

/// Load the merged control document the renderer consumes.
pub fn load_merged_controls(root: &Path) -> Result<MergedControls> {
    parse_file(&root.join(MERGED_CONTROLS_FILE))
}

/// Load the site configuration (`docs/_config.yml`).
pub fn load_site_config(root: &Path) -> Result<SiteConfig> {
    parse_file(&root.join(SITE_CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_load_data_classifies_by_directory() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "data/standards/nist.yaml",
            "name: NIST-800-53\nAC-2:\n  title: Account Management\n",
        );
        write(
            dir.path(),
            "data/controls/aws.yaml",
            "controls:\n  - name: User Accounts\n    satisfies:\n      NIST-800-53:\n        - AC-2\n",
        );
        write(
            dir.path(),
            "data/certifications/fedramp.yaml",
            "name: FedRAMP\nstandards:\n  NIST-800-53:\n    AC-2: ~\n",
        );

        let set = load_data(dir.path()).unwrap();
        assert_eq!(set.standards.len(), 1);
        assert_eq!(set.controls.len(), 1);
        assert_eq!(set.certifications.len(), 1);
        assert!(set.standards.contains_key("NIST-800-53"));
        assert!(set.certifications.contains_key("FedRAMP"));
    }

    #[test]
    fn test_load_data_flattens_controls_in_sorted_file_order() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "data/controls/b_system.yaml",
            "controls:\n  - name: Third\n",
        );
        write(
            dir.path(),
            "data/controls/a_system.yaml",
            "controls:\n  - name: First\n  - name: Second\n",
        );

        let set = load_data(dir.path()).unwrap();
        let labels: Vec<&str> = set.controls.iter().map(|c| c.label()).collect();
        assert_eq!(labels, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_load_data_skips_unclassified_directories() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "data/notes/scratch.yaml", "name: ignored\n");
        write(
            dir.path(),
            "data/standards/nist.yaml",
            "name: NIST-800-53\n",
        );

        let set = load_data(dir.path()).unwrap();
        assert_eq!(set.standards.len(), 1);
        assert!(set.controls.is_empty());
        assert!(set.certifications.is_empty());
    }

    #[test]
    fn test_load_data_collects_every_parse_failure() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "data/standards/bad.yaml", "no_name_key: true\n");
        write(
            dir.path(),
            "data/controls/also_bad.yaml",
            "not_controls: []\n",
        );
        write(dir.path(), "data/standards/good.yaml", "name: GOOD\n");

        let err = load_data(dir.path()).unwrap_err();
        match err {
            WeaveError::LoadFailures { count, errors } => {
                assert_eq!(count, 2);
                assert_eq!(errors.len(), 2);
            }
            other => panic!("expected aggregated load failure, got {other}"),
        }
    }

    #[test]
    fn test_load_data_requires_data_directory() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            load_data(dir.path()),
            Err(WeaveError::MissingDirectory(_))
        ));
    }

    #[test]
    fn test_load_fragments_sorted_and_missing_dir_is_empty() {
        let dir = TempDir::new().unwrap();
        assert!(load_fragments(dir.path()).unwrap().is_empty());

        write(
            dir.path(),
            "controls/systems/zeta.yaml",
            "access_control:\n  governors:\n    - title: Zeta\n",
        );
        write(
            dir.path(),
            "controls/systems/alpha.yaml",
            "access_control:\n  governors:\n    - title: Alpha\n",
        );

        let fragments = load_fragments(dir.path()).unwrap();
        assert_eq!(fragments.len(), 2);
        let first = &fragments[0]["access_control"];
        let entries = first.sections["governors"].as_ref().unwrap();
        assert_eq!(entries[0]["title"], serde_yaml::Value::from("Alpha"));
    }
}
