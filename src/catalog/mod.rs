//! Input readers for the label catalog and the class list.
//!
//! The catalog (`notes.json`) carries the `{id, name}` records produced by
//! the annotation tool. The class list (`classes.txt`) is a plain text file
//! with one name per line and is authoritative for manifest class order;
//! the two sources are cross-checked in [`crate::check`].

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::SplitError;

/// A category record from the annotation catalog.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// Class index used inside label files.
    pub id: u64,

    /// Human-readable class name.
    pub name: String,
}

/// The annotation catalog (`notes.json`).
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Catalog {
    /// All category definitions.
    pub categories: Vec<Category>,
}

impl Catalog {
    /// Map from class name to its catalog id.
    ///
    /// Later duplicates win, matching how the export tool overwrites
    /// repeated names.
    pub fn name_to_id(&self) -> BTreeMap<&str, u64> {
        self.categories
            .iter()
            .map(|category| (category.name.as_str(), category.id))
            .collect()
    }
}

/// Read and parse the catalog JSON file.
pub fn read_catalog(path: &Path) -> Result<Catalog, SplitError> {
    let file = fs::File::open(path).map_err(SplitError::Io)?;
    serde_json::from_reader(file).map_err(|source| SplitError::CatalogParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Read the ordered class list, one name per line.
///
/// Leading/trailing whitespace is stripped; an empty line is rejected so a
/// stray blank cannot silently shift class indices.
pub fn read_class_list(path: &Path) -> Result<Vec<String>, SplitError> {
    let data = fs::read_to_string(path).map_err(SplitError::Io)?;
    let mut names = Vec::new();

    for (line_idx, line) in data.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Err(SplitError::ClassListInvalid {
                path: path.to_path_buf(),
                message: format!("line {} is empty", line_idx + 1),
            });
        }
        names.push(trimmed.to_string());
    }

    if names.is_empty() {
        return Err(SplitError::ClassListInvalid {
            path: path.to_path_buf(),
            message: "file contains no class names".to_string(),
        });
    }

    Ok(names)
}
