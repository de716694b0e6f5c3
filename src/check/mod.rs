//! Pre-flight checks for a dataset export.
//!
//! Runs before any file is copied, checking for:
//! - Pairing integrity (every image has a label, labels are not orphaned)
//! - Class consistency (class list names exist in the catalog)
//!
//! The class list stays authoritative for manifest class order; the catalog
//! is cross-checked against it so a disagreement between the two sources
//! surfaces here instead of as silently mismatched class indices downstream.

mod report;

pub use report::{CheckIssue, CheckReport, IssueCode, IssueContext, Severity};

use std::collections::BTreeSet;
use std::path::Path;

use crate::catalog::Catalog;
use crate::error::SplitError;
use crate::layout::{collect_files_with_extensions, IMAGE_EXTENSIONS, LABEL_EXTENSION};

/// Check a dataset export and return a report of all issues found.
pub fn check_dataset(
    images_dir: &Path,
    labels_dir: &Path,
    catalog: &Catalog,
    class_names: &[String],
) -> Result<CheckReport, SplitError> {
    let mut report = CheckReport::new();

    check_sample_pairing(images_dir, labels_dir, &mut report)?;
    check_class_consistency(catalog, class_names, &mut report);

    Ok(report)
}

/// Check that every image has a matching label file, and vice versa.
fn check_sample_pairing(
    images_dir: &Path,
    labels_dir: &Path,
    report: &mut CheckReport,
) -> Result<(), SplitError> {
    let mut image_files = collect_files_with_extensions(images_dir, &IMAGE_EXTENSIONS)?;
    let mut label_files = collect_files_with_extensions(labels_dir, &[LABEL_EXTENSION])?;
    image_files.sort();
    label_files.sort();

    if image_files.is_empty() {
        report.add(CheckIssue::error(
            IssueCode::EmptyImageDir,
            format!("no recognized image files in {}", images_dir.display()),
            IssueContext::Dataset,
        ));
        return Ok(());
    }

    let image_stems: BTreeSet<String> = image_files.iter().filter_map(|p| stem_of(p)).collect();
    let label_stems: BTreeSet<String> = label_files.iter().filter_map(|p| stem_of(p)).collect();

    for image in &image_files {
        let Some(stem) = stem_of(image) else { continue };
        if !label_stems.contains(&stem) {
            let name = file_name_of(image);
            report.add(CheckIssue::error(
                IssueCode::MissingLabel,
                format!("expected label file {}.{}", stem, LABEL_EXTENSION),
                IssueContext::Sample { name },
            ));
        }
    }

    for label in &label_files {
        let Some(stem) = stem_of(label) else { continue };
        if !image_stems.contains(&stem) {
            let name = file_name_of(label);
            report.add(CheckIssue::warning(
                IssueCode::OrphanLabel,
                "no image file shares this stem".to_string(),
                IssueContext::Sample { name },
            ));
        }
    }

    Ok(())
}

/// Cross-check the class list against the catalog.
fn check_class_consistency(
    catalog: &Catalog,
    class_names: &[String],
    report: &mut CheckReport,
) {
    let catalog_names: BTreeSet<&str> = catalog
        .categories
        .iter()
        .map(|category| category.name.as_str())
        .collect();
    let listed_names: BTreeSet<&str> = class_names.iter().map(String::as_str).collect();

    for name in class_names {
        if !catalog_names.contains(name.as_str()) {
            report.add(CheckIssue::error(
                IssueCode::ClassMissingFromCatalog,
                "listed in the class file but absent from the catalog".to_string(),
                IssueContext::Class { name: name.clone() },
            ));
        }
    }

    for category in &catalog.categories {
        if !listed_names.contains(category.name.as_str()) {
            report.add(CheckIssue::warning(
                IssueCode::UnusedCatalogCategory,
                format!("catalog id {} is not in the class list", category.id),
                IssueContext::Class {
                    name: category.name.clone(),
                },
            ));
        }
    }
}

fn stem_of(path: &Path) -> Option<String> {
    path.file_stem().map(|s| s.to_string_lossy().into_owned())
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
