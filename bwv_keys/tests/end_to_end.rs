// End-to-end runs against scratch reference directories.
//
// Each test builds a reference corpus in a temp dir, runs the full pipeline
// (merge → scan → compare → write), and checks both the returned report and
// the document on disk.

use std::fs;
use std::path::Path;

use bwv_keys::catalog::{Collection, all_collections, insert_prelude_and_fugue};
use bwv_keys::output;
use bwv_keys::{BuildConfig, Error, KeySignature, Mode, Tonic, WorkMapping, run};

/// Helper: create an empty reference file.
fn touch(dir: &Path, name: &str) {
    fs::write(dir.join(name), "{}\n").unwrap();
}

/// A one-work collection: BWV 846 prelude and fugue in C major.
fn bwv_846_only() -> WorkMapping {
    let mut mapping = WorkMapping::new();
    insert_prelude_and_fugue(&mut mapping, 846, KeySignature::verified(Tonic::C, Mode::Major));
    mapping
}

#[test]
fn matching_corpus_succeeds() {
    let tmp = tempfile::tempdir().unwrap();
    touch(tmp.path(), "BWV846_prelude.json");
    touch(tmp.path(), "BWV846_fugue.json");
    let config = BuildConfig::with_reference_dir(tmp.path());

    let report = run(&config, &[Collection::new("BWV 846", bwv_846_only)]).unwrap();
    assert!(report.is_success());
    assert!(report.collisions.is_empty());
    assert!(report.discrepancies.missing.is_empty());
    assert!(report.discrepancies.extra.is_empty());

    let written = output::load(&config.output_path()).unwrap();
    let ids: Vec<&str> = written.ids().collect();
    assert_eq!(ids, vec!["BWV846_fugue", "BWV846_prelude"]);

    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(config.output_path()).unwrap()).unwrap();
    let expected = serde_json::json!({"tonic": "C", "mode": "major", "confidence": "verified"});
    assert_eq!(raw["BWV846_prelude"], expected);
    assert_eq!(raw["BWV846_fugue"], expected);
}

#[test]
fn unknown_reference_file_is_reported_missing() {
    let tmp = tempfile::tempdir().unwrap();
    touch(tmp.path(), "BWV999.json");
    let config = BuildConfig::with_reference_dir(tmp.path());

    let report = run(&config, &all_collections()).unwrap();
    assert!(!report.is_success());
    assert_eq!(report.discrepancies.missing, vec!["BWV999"]);
    // Every catalog entry lacks a reference file here.
    assert_eq!(report.discrepancies.extra.len(), report.total());

    assert!(config.output_path().is_file());
    let written = output::load(&config.output_path()).unwrap();
    assert_eq!(written, report.mapping);
}

#[test]
fn missing_reference_dir_is_fatal() {
    let tmp = tempfile::tempdir().unwrap();
    let config = BuildConfig::with_reference_dir(tmp.path().join("corpus"));

    let err = run(&config, &all_collections()).unwrap_err();
    assert!(matches!(err, Error::ReferenceDirMissing(_)));
    assert!(!config.output_path().exists());
    assert!(!config.reference_dir.exists());
}

#[test]
fn previous_output_is_not_a_reference() {
    let tmp = tempfile::tempdir().unwrap();
    touch(tmp.path(), "BWV846_prelude.json");
    touch(tmp.path(), "BWV846_fugue.json");
    let config = BuildConfig::with_reference_dir(tmp.path());
    let collections = [Collection::new("BWV 846", bwv_846_only)];

    // The second run sees the first run's key_signatures.json in the listing.
    assert!(run(&config, &collections).unwrap().is_success());
    let second = run(&config, &collections).unwrap();
    assert!(second.is_success());
    assert!(second.discrepancies.missing.is_empty());
}

#[test]
fn full_catalog_round_trips() {
    let tmp = tempfile::tempdir().unwrap();
    let config = BuildConfig::with_reference_dir(tmp.path());

    let report = run(&config, &all_collections()).unwrap();
    assert!(report.collisions.is_empty());

    let per_collection: usize = report.counts.iter().map(|(_, n)| n).sum();
    assert_eq!(report.total(), per_collection);

    let loaded = output::load(&config.output_path()).unwrap();
    assert_eq!(loaded, report.mapping);
    assert_eq!(
        loaded.get("BWV863_fugue"),
        Some(&KeySignature::verified(Tonic::GSharp, Mode::Minor))
    );

    let text = fs::read_to_string(config.output_path()).unwrap();
    assert!(text.ends_with("}\n"));
    assert!(!text.ends_with("\n\n"));
}
