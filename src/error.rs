use std::path::PathBuf;
use thiserror::Error;

use crate::check::CheckReport;

/// The main error type for yolosplit operations.
#[derive(Debug, Error)]
pub enum SplitError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid {name} {value}: fractions must lie in (0, 1) and sum to less than 1")]
    InvalidFraction { name: &'static str, value: f64 },

    #[error("nothing to split: the sample set is empty")]
    EmptyInput,

    #[error("missing source file for sample '{sample}': {path}")]
    MissingSourceFile { sample: String, path: PathBuf },

    #[error("Failed to parse catalog from {path}: {source}")]
    CatalogParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid class list {path}: {message}")]
    ClassListInvalid { path: PathBuf, message: String },

    #[error("Failed to write manifest to {path}: {source}")]
    ManifestWrite {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Pre-flight check failed with {error_count} error(s) and {warning_count} warning(s)")]
    PreflightFailed {
        error_count: usize,
        warning_count: usize,
        report: CheckReport,
    },
}
