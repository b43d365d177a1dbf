// Build configuration: where the reference corpus lives and what the output
// file is called.
//
// The defaults match the repository layout the tool was written for, so the
// binary needs no arguments. main.rs overrides fields from the command line;
// tests point `reference_dir` at a scratch directory.

use std::path::{Path, PathBuf};

/// Reference corpus directory, relative to the working directory.
pub const DEFAULT_REFERENCE_DIR: &str = "data/corpus";
/// Output file name, written inside the reference directory.
pub const DEFAULT_OUTPUT_FILE_NAME: &str = "key_signatures.json";
/// Extension of reference files; the stem is the work identifier.
pub const DEFAULT_EXTENSION: &str = "json";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildConfig {
    pub reference_dir: PathBuf,
    /// Excluded from the reference listing.
    pub output_file_name: String,
    /// Without the leading dot.
    pub extension: String,
}

impl BuildConfig {
    /// Default config rooted at a different reference directory.
    pub fn with_reference_dir(reference_dir: impl AsRef<Path>) -> Self {
        BuildConfig {
            reference_dir: reference_dir.as_ref().to_path_buf(),
            ..Default::default()
        }
    }

    /// Full path of the generated table.
    pub fn output_path(&self) -> PathBuf {
        self.reference_dir.join(&self.output_file_name)
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        BuildConfig {
            reference_dir: PathBuf::from(DEFAULT_REFERENCE_DIR),
            output_file_name: DEFAULT_OUTPUT_FILE_NAME.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}
