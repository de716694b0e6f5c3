//! End-to-end pipeline tests against the library API.

use std::collections::HashSet;
use std::fs;

use yolosplit::error::SplitError;
use yolosplit::{catalog, check, layout, manifest, split};

mod common;

#[test]
fn full_pipeline_places_every_sample_exactly_once() {
    let temp = tempfile::tempdir().unwrap();
    let stems = ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"];
    let export = common::make_export(temp.path(), &stems, &["cat", "dog"]);
    let output = temp.path().join("out");

    let cat = catalog::read_catalog(&export.notes).expect("read catalog");
    let class_names = catalog::read_class_list(&export.classes).expect("read classes");

    let report = check::check_dataset(&export.images, &export.labels, &cat, &class_names)
        .expect("check");
    assert!(report.is_clean(), "unexpected issues: {report}");

    let samples = layout::discover_samples(&export.images).expect("discover");
    assert_eq!(samples.len(), stems.len());

    let partition = split::partition(&samples, 0.2, 0.1, 42).expect("partition");
    assert_eq!(partition.train.len(), 7);
    assert_eq!(partition.val.len(), 2);
    assert_eq!(partition.test.len(), 1);

    let written = layout::materialize(&partition, &export.images, &export.labels, &output)
        .expect("materialize");
    assert_eq!(written, stems.len() * 2);

    manifest::write_manifest(&output, &class_names).expect("write manifest");

    // Every sample shows up in exactly one split, byte-identical to its source.
    let mut seen = HashSet::new();
    for (split_name, names) in partition.splits() {
        for name in names {
            assert!(seen.insert(name.clone()), "{name} placed twice");

            let src = fs::read(export.images.join(name)).unwrap();
            let dst = fs::read(output.join("images").join(split_name).join(name)).unwrap();
            assert_eq!(src, dst, "image bytes differ for {name}");

            let label_name = layout::label_file_name(name);
            let src = fs::read(export.labels.join(&label_name)).unwrap();
            let dst = fs::read(output.join("labels").join(split_name).join(&label_name)).unwrap();
            assert_eq!(src, dst, "label bytes differ for {name}");
        }
    }
    assert_eq!(seen.len(), stems.len());

    let parsed: manifest::Manifest = serde_yaml::from_str(
        &fs::read_to_string(output.join(manifest::MANIFEST_FILE_NAME)).unwrap(),
    )
    .expect("parse manifest");
    assert_eq!(parsed.nc, 2);
    assert_eq!(parsed.names, vec!["cat", "dog"]);
    assert_eq!(parsed.train, "images/train");
}

#[test]
fn materialize_reports_the_offending_sample() {
    let temp = tempfile::tempdir().unwrap();
    let export = common::make_export(temp.path(), &["a", "b", "c"], &["cat"]);
    fs::remove_file(export.labels.join("c.txt")).unwrap();

    let samples = layout::discover_samples(&export.images).expect("discover");
    let partition = split::partition(&samples, 0.3, 0.3, 42).expect("partition");

    let output = temp.path().join("out");
    let err = layout::materialize(&partition, &export.images, &export.labels, &output)
        .unwrap_err();

    match err {
        SplitError::MissingSourceFile { sample, .. } => assert_eq!(sample, "c.jpg"),
        other => panic!("expected MissingSourceFile, got {other:?}"),
    }
    assert!(!output.exists());
}

#[test]
fn discovery_feeds_partition_with_stable_input() {
    let temp = tempfile::tempdir().unwrap();
    let export = common::make_export(temp.path(), &["x", "m", "a", "q"], &["cat"]);

    // discover_samples sorts, so repeated discovery + partition is stable.
    let first = layout::discover_samples(&export.images).expect("discover");
    let second = layout::discover_samples(&export.images).expect("discover");
    assert_eq!(first, second);
    assert_eq!(first, vec!["a.jpg", "m.jpg", "q.jpg", "x.jpg"]);

    let p1 = split::partition(&first, 0.25, 0.25, 3).expect("partition");
    let p2 = split::partition(&second, 0.25, 0.25, 3).expect("partition");
    assert_eq!(p1, p2);
}
