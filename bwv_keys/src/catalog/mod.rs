// Catalog collections: the literal key tables for each named collection of
// works, and the helpers that expand a table into work identifiers.
//
// Every builder is a plain `fn() -> WorkMapping` with no inputs; all data is
// literal. Identifiers follow fixed naming rules:
// - `BWV<n>` for single-movement works
// - `BWV<n>_prelude` / `BWV<n>_fugue` for prelude-and-fugue pairs
// - `BWV<n>_<m>` for movement m (1-based) of a multi-movement work
// - `BWVAnh<n>` for Anhang (appendix) numbers
// - `BWV988_aria`, `BWV988_var<n>`, `BWV988_aria_da_capo` for the Goldberg set
//
// - keyboard.rs: clavier and organ collections (WTC, suites, partitas, ...)
// - ensemble.rs: solo string, concerto, and orchestral collections
//
// `all_collections()` fixes the declaration order used when merging; see
// mapping.rs for how duplicates across collections are handled.

pub mod ensemble;
pub mod keyboard;

use crate::key::{Confidence, KeySignature, Mode, Tonic};
use crate::mapping::WorkMapping;

/// A named catalog collection and the builder that produces its entries.
#[derive(Debug, Clone, Copy)]
pub struct Collection {
    pub name: &'static str,
    build: fn() -> WorkMapping,
}

impl Collection {
    pub const fn new(name: &'static str, build: fn() -> WorkMapping) -> Self {
        Collection { name, build }
    }

    /// Run the builder.
    pub fn build(&self) -> WorkMapping {
        (self.build)()
    }
}

/// Every collection in merge order: keyboard works first, then ensemble works.
pub fn all_collections() -> Vec<Collection> {
    keyboard::collections()
        .into_iter()
        .chain(ensemble::collections())
        .collect()
}

// ---------------------------------------------------------------------------
// Identifiers
// ---------------------------------------------------------------------------

pub fn work_id(bwv: u32) -> String {
    format!("BWV{bwv}")
}

pub fn anhang_id(number: u32) -> String {
    format!("BWVAnh{number}")
}

pub fn movement_id(bwv: u32, movement: u32) -> String {
    format!("BWV{bwv}_{movement}")
}

pub fn prelude_id(bwv: u32) -> String {
    format!("BWV{bwv}_prelude")
}

pub fn fugue_id(bwv: u32) -> String {
    format!("BWV{bwv}_fugue")
}

// ---------------------------------------------------------------------------
// Expansion helpers
// ---------------------------------------------------------------------------

/// The 24-key cycle used by the Well-Tempered Clavier: C major, C minor,
/// C# major, C# minor, ... B major, B minor.
///
/// Step `i` (0-based) is `(i / 2)` semitones above C, major on even steps and
/// minor on odd. Default spellings apply except that the minor key on A-flat's
/// pitch class is always written G# minor; Ab minor never appears.
pub fn chromatic_cycle() -> [(Tonic, Mode); 24] {
    let mut keys = [(Tonic::C, Mode::Major); 24];
    for (step, slot) in keys.iter_mut().enumerate() {
        let pc = (step / 2) as u8;
        let mode = if step % 2 == 0 { Mode::Major } else { Mode::Minor };
        let tonic = match (pc, mode) {
            (8, Mode::Minor) => Tonic::GSharp,
            _ => Tonic::from_pitch_class(pc),
        };
        *slot = (tonic, mode);
    }
    keys
}

/// Insert `BWV<n>_prelude` and `BWV<n>_fugue` with the same key.
pub fn insert_prelude_and_fugue(mapping: &mut WorkMapping, bwv: u32, key: KeySignature) {
    mapping.insert(prelude_id(bwv), key);
    mapping.insert(fugue_id(bwv), key);
}

/// Insert movements `1..=count` of a work in its home key, then apply
/// per-movement overrides for movements in a different key.
pub fn insert_movements(
    mapping: &mut WorkMapping,
    bwv: u32,
    count: u32,
    home: KeySignature,
    overrides: &[(u32, Tonic, Mode)],
) {
    for movement in 1..=count {
        mapping.insert(movement_id(bwv, movement), home);
    }
    for &(movement, tonic, mode) in overrides {
        debug_assert!((1..=count).contains(&movement));
        mapping.insert(
            movement_id(bwv, movement),
            KeySignature::new(tonic, mode, home.confidence),
        );
    }
}

/// Build a collection of multi-movement works from
/// `(bwv, tonic, mode, movement count)` rows and movement overrides keyed by
/// `(bwv, movement)`.
pub fn multi_movement_collection(
    works: &[(u32, Tonic, Mode, u32)],
    overrides: &[(u32, u32, Tonic, Mode)],
    confidence: Confidence,
) -> WorkMapping {
    let mut mapping = WorkMapping::new();
    for &(bwv, tonic, mode, count) in works {
        let own: Vec<(u32, Tonic, Mode)> = overrides
            .iter()
            .filter(|&&(work, ..)| work == bwv)
            .map(|&(_, movement, tonic, mode)| (movement, tonic, mode))
            .collect();
        insert_movements(
            &mut mapping,
            bwv,
            count,
            KeySignature::new(tonic, mode, confidence),
            &own,
        );
    }
    mapping
}

/// Build a collection of single-movement works from `(bwv, tonic, mode)` rows.
pub fn single_movement_collection(
    works: &[(u32, Tonic, Mode)],
    confidence: Confidence,
) -> WorkMapping {
    works
        .iter()
        .map(|&(bwv, tonic, mode)| (work_id(bwv), KeySignature::new(tonic, mode, confidence)))
        .collect()
}
