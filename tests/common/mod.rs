use std::fs;
use std::path::{Path, PathBuf};

/// Paths of a fixture export built under a temp root.
#[allow(dead_code)]
pub struct Export {
    pub notes: PathBuf,
    pub images: PathBuf,
    pub labels: PathBuf,
    pub classes: PathBuf,
}

/// Build a flat annotation export: one jpg + one label per stem, a catalog
/// covering `classes`, and a classes.txt in the given order.
pub fn make_export(root: &Path, stems: &[&str], classes: &[&str]) -> Export {
    let images = root.join("images");
    let labels = root.join("labels");
    fs::create_dir_all(&images).expect("create images dir");
    fs::create_dir_all(&labels).expect("create labels dir");

    for stem in stems {
        write_sample(root, stem);
    }

    let categories: Vec<serde_json::Value> = classes
        .iter()
        .enumerate()
        .map(|(id, name)| serde_json::json!({"id": id, "name": name}))
        .collect();
    let notes = root.join("notes.json");
    fs::write(
        &notes,
        serde_json::to_string_pretty(&serde_json::json!({"categories": categories}))
            .expect("serialize notes"),
    )
    .expect("write notes.json");

    let classes_path = root.join("classes.txt");
    let mut class_lines = classes.join("\n");
    class_lines.push('\n');
    fs::write(&classes_path, class_lines).expect("write classes.txt");

    Export {
        notes,
        images,
        labels,
        classes: classes_path,
    }
}

/// Write one image/label pair; image bytes are unique per stem so copies
/// can be checked for byte identity.
pub fn write_sample(root: &Path, stem: &str) {
    fs::write(
        root.join("images").join(format!("{stem}.jpg")),
        format!("jpeg-bytes-for-{stem}"),
    )
    .expect("write image");
    fs::write(
        root.join("labels").join(format!("{stem}.txt")),
        "0 0.5 0.5 0.25 0.25\n",
    )
    .expect("write label");
}
