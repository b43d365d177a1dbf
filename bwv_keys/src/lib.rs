// BWV key signature table builder.
//
// Produces a static reference table mapping Bach work identifiers (catalog
// number plus movement suffix) to their key: tonic spelling, major/minor,
// and whether the attribution is verified or inferred. Keys are literal
// historical data, never derived from analysis.
//
// Architecture:
// - key.rs: `Tonic`, `Mode`, `Confidence`, `KeySignature` value types
// - catalog/: one builder per collection (keyboard.rs, ensemble.rs) plus the
//   shared expansion helpers (chromatic cycle, movement numbering) in mod.rs
// - mapping.rs: `WorkMapping` and the ordered merge with duplicate reporting
// - reference.rs: reference directory listing and missing/extra comparison
// - output.rs: sorted JSON write and read-back
// - config.rs: paths and file naming, with defaults for the no-argument run
// - pipeline.rs: the run itself, returning a `RunReport`
// - error.rs: fatal error conditions
//
// The run is single-threaded and one-shot; the binary in main.rs wraps
// `pipeline::run` with logging setup and an exit status.

pub mod catalog;
pub mod config;
pub mod error;
pub mod key;
pub mod mapping;
pub mod output;
pub mod pipeline;
pub mod reference;

pub use config::BuildConfig;
pub use error::{Error, Result};
pub use key::{Confidence, KeySignature, Mode, Tonic};
pub use mapping::WorkMapping;
pub use pipeline::{RunReport, run};
