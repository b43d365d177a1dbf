// The single build run: collections → merged table → validation → JSON.
//
// Every step logs as it goes. Duplicate ids and reference mismatches are
// warnings; they land in the `RunReport` and make the run unsuccessful, but
// the table is still written. A missing reference directory or a failed
// write aborts with an error before (or instead of) writing.

use crate::catalog::Collection;
use crate::config::BuildConfig;
use crate::error::Result;
use crate::mapping::{Collision, WorkMapping, merge_collections};
use crate::output;
use crate::reference::{Discrepancies, ReferenceFileSet, compare};
use std::path::PathBuf;
use tracing::{info, warn};

/// Everything a run produced, for the caller to summarize.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Entries per collection, in merge order.
    pub counts: Vec<(&'static str, usize)>,
    pub collisions: Vec<Collision>,
    pub discrepancies: Discrepancies,
    /// The table as written.
    pub mapping: WorkMapping,
    pub output_path: PathBuf,
}

impl RunReport {
    /// Number of entries in the written table (after duplicates collapsed).
    pub fn total(&self) -> usize {
        self.mapping.len()
    }

    /// True when the table and the reference directory agree exactly.
    /// Collisions alone do not fail a run.
    pub fn is_success(&self) -> bool {
        self.discrepancies.is_empty()
    }

    /// One-line outcome, printed last.
    pub fn summary(&self) -> String {
        format!(
            "{} entries written to {} ({} duplicate, {} missing, {} extra)",
            self.total(),
            self.output_path.display(),
            self.collisions.len(),
            self.discrepancies.missing.len(),
            self.discrepancies.extra.len(),
        )
    }
}

/// Process exit status for a clean run.
pub const EXIT_SUCCESS: u8 = 0;
/// Exit status when the run failed or the table disagrees with the corpus.
pub const EXIT_FAILURE: u8 = 1;

/// Map the outcome of `run()` to the process exit status. Collisions alone
/// still exit cleanly; missing or extra ids and fatal errors do not.
pub fn exit_status(result: &Result<RunReport>) -> u8 {
    match result {
        Ok(report) if report.is_success() => EXIT_SUCCESS,
        Ok(_) => EXIT_FAILURE,
        Err(_) => EXIT_FAILURE,
    }
}

/// Build, validate, and write the key table.
pub fn run(config: &BuildConfig, collections: &[Collection]) -> Result<RunReport> {
    info!(collections = collections.len(), "building key table");
    let merged = merge_collections(collections);
    for &(name, count) in &merged.counts {
        info!("  {name}: {count} entries");
    }
    info!("total: {} entries", merged.mapping.len());

    let references = ReferenceFileSet::scan(config)?;
    info!(
        dir = %config.reference_dir.display(),
        "{} reference files",
        references.len()
    );

    let discrepancies = compare(&merged.mapping, &references);
    for id in &discrepancies.missing {
        warn!(id = %id, "reference file has no entry: missing from mapping");
    }
    for id in &discrepancies.extra {
        warn!(id = %id, "entry has no reference file");
    }

    let output_path = config.output_path();
    output::write(&merged.mapping, &output_path)?;

    let report = RunReport {
        counts: merged.counts,
        collisions: merged.collisions,
        discrepancies,
        mapping: merged.mapping,
        output_path,
    };
    if report.is_success() {
        info!("{}", report.summary());
    } else {
        warn!("{}", report.summary());
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::{KeySignature, Mode, Tonic};

    fn two_entries() -> WorkMapping {
        [
            ("BWV1", KeySignature::verified(Tonic::C, Mode::Major)),
            ("BWV2", KeySignature::verified(Tonic::A, Mode::Minor)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_extra_entries_fail_run_but_write_output() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("BWV1.json"), "{}").unwrap();
        let config = BuildConfig::with_reference_dir(tmp.path());

        let report = run(&config, &[Collection::new("pair", two_entries)]).unwrap();
        assert!(!report.is_success());
        assert!(report.discrepancies.missing.is_empty());
        assert_eq!(report.discrepancies.extra, vec!["BWV2"]);
        assert!(config.output_path().is_file());
        assert_eq!(report.total(), 2);
    }

    #[test]
    fn test_collisions_do_not_fail_run() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("BWV1.json"), "{}").unwrap();
        std::fs::write(tmp.path().join("BWV2.json"), "{}").unwrap();
        let config = BuildConfig::with_reference_dir(tmp.path());

        let collections = [
            Collection::new("pair", two_entries),
            Collection::new("same pair", two_entries),
        ];
        let report = run(&config, &collections).unwrap();
        assert_eq!(report.collisions.len(), 2);
        assert!(report.is_success());
        assert_eq!(report.counts, vec![("pair", 2), ("same pair", 2)]);
    }

    #[test]
    fn test_exit_status_branches() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("BWV1.json"), "{}").unwrap();
        std::fs::write(tmp.path().join("BWV2.json"), "{}").unwrap();
        let config = BuildConfig::with_reference_dir(tmp.path());
        let collections = [Collection::new("pair", two_entries)];

        let clean = run(&config, &collections);
        assert_eq!(exit_status(&clean), EXIT_SUCCESS);

        std::fs::write(tmp.path().join("BWV3.json"), "{}").unwrap();
        let mismatched = run(&config, &collections);
        assert!(mismatched.is_ok());
        assert_eq!(exit_status(&mismatched), EXIT_FAILURE);

        let absent = BuildConfig::with_reference_dir(tmp.path().join("absent"));
        let failed = run(&absent, &collections);
        assert!(failed.is_err());
        assert_eq!(exit_status(&failed), EXIT_FAILURE);
    }

    #[test]
    fn test_summary_line() {
        let tmp = tempfile::tempdir().unwrap();
        let config = BuildConfig::with_reference_dir(tmp.path());
        let report = run(&config, &[Collection::new("pair", two_entries)]).unwrap();
        let expected = format!(
            "2 entries written to {} (0 duplicate, 0 missing, 2 extra)",
            config.output_path().display()
        );
        assert_eq!(report.summary(), expected);
    }
}
