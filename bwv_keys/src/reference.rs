// Reference corpus listing and validation.
//
// The reference directory holds one file per work identifier (for example
// `BWV846_prelude.json`). Only the file stems matter here; contents are never
// read. The generated table lives in the same directory and is skipped.
//
// `compare()` reports both directions of mismatch. Neither direction is an
// error: the caller logs them and still writes the table.

use crate::config::BuildConfig;
use crate::error::{Error, Result};
use crate::mapping::WorkMapping;
use std::collections::BTreeSet;
use std::ffi::OsStr;
use tracing::debug;

/// Work identifiers that have a file in the reference directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceFileSet {
    ids: BTreeSet<String>,
}

impl ReferenceFileSet {
    /// List the reference directory named by `config`.
    ///
    /// Regular files with the configured extension contribute their stem.
    /// Subdirectories, other extensions, and the output file are ignored.
    pub fn scan(config: &BuildConfig) -> Result<Self> {
        let dir = &config.reference_dir;
        if !dir.is_dir() {
            return Err(Error::ReferenceDirMissing(dir.clone()));
        }

        let mut ids = BTreeSet::new();
        for entry in std::fs::read_dir(dir).map_err(|e| Error::io(dir, e))? {
            let entry = entry.map_err(|e| Error::io(dir, e))?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if path.extension() != Some(OsStr::new(&config.extension)) {
                continue;
            }
            if path.file_name() == Some(OsStr::new(&config.output_file_name)) {
                continue;
            }
            match path.file_stem().and_then(OsStr::to_str) {
                Some(stem) => {
                    ids.insert(stem.to_string());
                }
                None => debug!(path = %path.display(), "skipping non-UTF-8 file name"),
            }
        }

        Ok(ReferenceFileSet { ids })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Identifiers in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for ReferenceFileSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        ReferenceFileSet {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Identifier mismatches between the table and the reference directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Discrepancies {
    /// Reference files with no table entry. Sorted.
    pub missing: Vec<String>,
    /// Table entries with no reference file. Sorted.
    pub extra: Vec<String>,
}

impl Discrepancies {
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.extra.is_empty()
    }
}

/// Set difference in both directions.
pub fn compare(mapping: &WorkMapping, references: &ReferenceFileSet) -> Discrepancies {
    let missing = references
        .ids()
        .filter(|id| !mapping.contains(id))
        .map(str::to_string)
        .collect();
    let extra = mapping
        .ids()
        .filter(|id| !references.contains(id))
        .map(str::to_string)
        .collect();
    Discrepancies { missing, extra }
}
