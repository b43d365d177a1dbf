// JSON persistence for the key table.
//
// The document is a single object keyed by work identifier, sorted, with
// two-space indentation and a trailing newline:
//
//   {
//     "BWV846_fugue": {
//       "tonic": "C",
//       "mode": "major",
//       "confidence": "verified"
//     },
//     ...
//   }
//
// serde_json writes non-ASCII characters literally, so nothing is escaped
// beyond what JSON requires.

use crate::error::{Error, Result};
use crate::mapping::WorkMapping;
use std::path::Path;

/// Render the table as it is stored on disk.
pub fn to_json(mapping: &WorkMapping) -> serde_json::Result<String> {
    let mut json = serde_json::to_string_pretty(mapping)?;
    json.push('\n');
    Ok(json)
}

/// Write the table to `path`, creating parent directories as needed.
pub fn write(mapping: &WorkMapping, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    let json = to_json(mapping).map_err(|e| Error::json(path, e))?;
    std::fs::write(path, json).map_err(|e| Error::io(path, e))
}

/// Read a table previously written by `write`.
pub fn load(path: &Path) -> Result<WorkMapping> {
    let data = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    serde_json::from_str(&data).map_err(|e| Error::json(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::keyboard;
    use crate::key::{KeySignature, Mode, Tonic};

    #[test]
    fn test_document_layout() {
        let mapping: WorkMapping = [
            ("BWV846_prelude", KeySignature::verified(Tonic::C, Mode::Major)),
            ("BWV863_fugue", KeySignature::inferred(Tonic::GSharp, Mode::Minor)),
        ]
        .into_iter()
        .collect();

        let expected = r#"{
  "BWV846_prelude": {
    "tonic": "C",
    "mode": "major",
    "confidence": "verified"
  },
  "BWV863_fugue": {
    "tonic": "G#",
    "mode": "minor",
    "confidence": "inferred"
  }
}
"#;
        assert_eq!(to_json(&mapping).unwrap(), expected);
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(to_json(&WorkMapping::new()).unwrap(), "{}\n");
    }

    #[test]
    fn test_write_creates_parents_and_round_trips() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nested").join("deeper").join("keys.json");
        let mapping = keyboard::goldberg_variations();

        write(&mapping, &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.ends_with("}\n"));

        let loaded = load(&path).unwrap();
        assert_eq!(loaded, mapping);
    }

    #[test]
    fn test_load_rejects_bad_mode() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("bad.json");
        std::fs::write(
            &path,
            r#"{"BWV1": {"tonic": "C", "mode": "dorian", "confidence": "verified"}}"#,
        )
        .unwrap();
        assert!(matches!(load(&path), Err(Error::Json { .. })));
    }
}
