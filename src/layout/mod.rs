//! Sample discovery and output tree materialization.
//!
//! A sample is one image file plus the label file sharing its stem. The
//! materializer creates the `images/{train,val,test}` + `labels/{train,val,test}`
//! skeleton under the output root and copies every sample into its split,
//! preserving original filenames.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::SplitError;
use crate::split::Partition;

/// Image extensions recognized during sample discovery (case-insensitive).
pub const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "png", "jpeg", "bmp", "webp"];

/// Extension of per-sample label files.
pub const LABEL_EXTENSION: &str = "txt";

/// Collect files under `root` whose extension matches one of `extensions`.
pub fn collect_files_with_extensions(
    root: &Path,
    extensions: &[&str],
) -> Result<Vec<PathBuf>, SplitError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).max_depth(1).follow_links(true) {
        let entry = entry.map_err(|source| SplitError::Io(source.into()))?;

        if entry.file_type().is_file() && has_extension(entry.path(), extensions) {
            files.push(entry.path().to_path_buf());
        }
    }

    Ok(files)
}

fn has_extension(path: &Path, allowed: &[&str]) -> bool {
    let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
        return false;
    };

    allowed
        .iter()
        .any(|allowed_ext| ext.eq_ignore_ascii_case(allowed_ext))
}

/// Discover sample identifiers (image filenames) in a flat image directory.
///
/// Returns a sorted list so downstream partitioning is reproducible
/// regardless of directory iteration order.
pub fn discover_samples(images_dir: &Path) -> Result<Vec<String>, SplitError> {
    let mut samples: Vec<String> = collect_files_with_extensions(images_dir, &IMAGE_EXTENSIONS)?
        .into_iter()
        .filter_map(|path| {
            path.file_name()
                .map(|name| name.to_string_lossy().into_owned())
        })
        .collect();

    samples.sort();
    Ok(samples)
}

/// Label filename paired with a sample.
///
/// Uses proper stem/extension splitting rather than substring replacement,
/// so a stem containing an extension-like substring (`dog.jpg.backup.jpg`)
/// still maps to the right label file.
pub fn label_file_name(sample: &str) -> PathBuf {
    Path::new(sample).with_extension(LABEL_EXTENSION)
}

/// Copy every sample of `partition` into its split directory.
///
/// All source files are verified before anything is copied, so a missing
/// image or label aborts with [`SplitError::MissingSourceFile`] and zero
/// files on disk. Directory creation is idempotent. Returns the number of
/// files written.
pub fn materialize(
    partition: &Partition,
    images_dir: &Path,
    labels_dir: &Path,
    output_root: &Path,
) -> Result<usize, SplitError> {
    // Pre-flight: every image and label must exist before the first copy.
    for (_, samples) in partition.splits() {
        for sample in samples {
            let image_src = images_dir.join(sample);
            if !image_src.is_file() {
                return Err(SplitError::MissingSourceFile {
                    sample: sample.clone(),
                    path: image_src,
                });
            }

            let label_src = labels_dir.join(label_file_name(sample));
            if !label_src.is_file() {
                return Err(SplitError::MissingSourceFile {
                    sample: sample.clone(),
                    path: label_src,
                });
            }
        }
    }

    for split_name in ["train", "val", "test"] {
        fs::create_dir_all(output_root.join("images").join(split_name))
            .map_err(SplitError::Io)?;
        fs::create_dir_all(output_root.join("labels").join(split_name))
            .map_err(SplitError::Io)?;
    }

    let mut written = 0;
    for (split_name, samples) in partition.splits() {
        for sample in samples {
            let label_name = label_file_name(sample);

            let image_src = images_dir.join(sample);
            let image_dst = output_root.join("images").join(split_name).join(sample);
            fs::copy(&image_src, &image_dst).map_err(SplitError::Io)?;
            written += 1;

            let label_src = labels_dir.join(&label_name);
            let label_dst = output_root.join("labels").join(split_name).join(&label_name);
            fs::copy(&label_src, &label_dst).map_err(SplitError::Io)?;
            written += 1;
        }
    }

    Ok(written)
}
