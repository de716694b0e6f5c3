//! Dataset manifest (`data.yaml`) emission.
//!
//! The manifest is the handoff point to the training pipeline: relative
//! paths to the three image split directories, the class count and the
//! ordered class names.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SplitError;

/// Filename of the manifest written at the output root.
pub const MANIFEST_FILE_NAME: &str = "data.yaml";

/// The dataset manifest consumed by the training pipeline.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Manifest {
    /// Relative path to the training image directory.
    pub train: String,

    /// Relative path to the validation image directory.
    pub val: String,

    /// Relative path to the test image directory.
    pub test: String,

    /// Number of classes; always equals `names.len()`.
    pub nc: usize,

    /// Ordered class names, as given by the class list file.
    pub names: Vec<String>,
}

impl Manifest {
    /// Build a manifest for the standard split layout.
    pub fn new(class_names: Vec<String>) -> Self {
        Self {
            train: "images/train".to_string(),
            val: "images/val".to_string(),
            test: "images/test".to_string(),
            nc: class_names.len(),
            names: class_names,
        }
    }
}

/// Write the manifest to `<output_root>/data.yaml`.
pub fn write_manifest(output_root: &Path, class_names: &[String]) -> Result<(), SplitError> {
    let manifest = Manifest::new(class_names.to_vec());
    let path = output_root.join(MANIFEST_FILE_NAME);

    let yaml =
        serde_yaml::to_string(&manifest).map_err(|source| SplitError::ManifestWrite {
            path: path.clone(),
            source,
        })?;

    fs::write(&path, yaml).map_err(SplitError::Io)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_round_trips_through_yaml() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let names = vec!["cat".to_string(), "dog".to_string(), "bird".to_string()];

        write_manifest(temp.path(), &names).expect("write manifest");

        let raw = fs::read_to_string(temp.path().join(MANIFEST_FILE_NAME))
            .expect("read manifest");
        let parsed: Manifest = serde_yaml::from_str(&raw).expect("parse manifest");

        assert_eq!(parsed, Manifest::new(names));
        assert_eq!(parsed.nc, parsed.names.len());
    }

    #[test]
    fn manifest_preserves_class_order() {
        let names = vec!["zebra".to_string(), "ant".to_string()];
        let manifest = Manifest::new(names.clone());
        assert_eq!(manifest.names, names);
        assert_eq!(manifest.nc, 2);
    }

    #[test]
    fn manifest_yaml_uses_expected_field_layout() {
        let temp = tempfile::tempdir().expect("create temp dir");
        write_manifest(temp.path(), &["cat".to_string()]).expect("write manifest");

        let raw = fs::read_to_string(temp.path().join(MANIFEST_FILE_NAME))
            .expect("read manifest");
        assert!(raw.contains("train: images/train"));
        assert!(raw.contains("val: images/val"));
        assert!(raw.contains("test: images/test"));
        assert!(raw.contains("nc: 1"));
        assert!(raw.contains("- cat"));
    }
}
