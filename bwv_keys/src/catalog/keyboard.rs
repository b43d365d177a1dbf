// Keyboard collections: clavier and organ works.
//
// Tables are (BWV, tonic, mode[, movement count]) rows in catalog order.
// Movement counts follow the reference corpus's file split: in the keyboard
// suites, doubles and paired dances (Menuet I / Menuet II) are numbered
// separately.
//
// The two Well-Tempered Clavier books walk `chromatic_cycle()`; the Goldberg
// Variations expand a fixed tonic over 32 numbered pieces. Everything else is
// a literal table.

use super::{
    Collection, anhang_id, chromatic_cycle, fugue_id, insert_prelude_and_fugue,
    multi_movement_collection, prelude_id, single_movement_collection,
};
use crate::key::Mode::{Major, Minor};
use crate::key::Tonic::*;
use crate::key::{Confidence, KeySignature, Mode, Tonic};
use crate::mapping::WorkMapping;

// ---------------------------------------------------------------------------
// Well-Tempered Clavier
// ---------------------------------------------------------------------------

/// First BWV number of WTC Book I (C major).
pub const WTC_1_FIRST: u32 = 846;
/// First BWV number of WTC Book II (C major).
pub const WTC_2_FIRST: u32 = 870;

fn wtc_book(first: u32) -> WorkMapping {
    let mut mapping = WorkMapping::new();
    for (step, (tonic, mode)) in chromatic_cycle().into_iter().enumerate() {
        insert_prelude_and_fugue(
            &mut mapping,
            first + step as u32,
            KeySignature::verified(tonic, mode),
        );
    }
    mapping
}

/// BWV 846–869. Prelude and fugue for each of the 24 keys.
pub fn well_tempered_clavier_1() -> WorkMapping {
    let mut mapping = wtc_book(WTC_1_FIRST);
    // BWV 853: the prelude is notated in Eb minor, the fugue in D# minor.
    mapping.insert(fugue_id(853), KeySignature::verified(DSharp, Minor));
    mapping
}

/// BWV 870–893. Same cycle as Book I.
pub fn well_tempered_clavier_2() -> WorkMapping {
    let mut mapping = wtc_book(WTC_2_FIRST);
    // BWV 877: both halves are in D# minor.
    let d_sharp_minor = KeySignature::verified(DSharp, Minor);
    mapping.insert(prelude_id(877), d_sharp_minor);
    mapping.insert(fugue_id(877), d_sharp_minor);
    mapping
}

// ---------------------------------------------------------------------------
// Inventions and Sinfonias
// ---------------------------------------------------------------------------

/// The fifteen keys shared by the Inventions and the Sinfonias, in order.
const INVENTION_KEYS: [(Tonic, Mode); 15] = [
    (C, Major),
    (C, Minor),
    (D, Major),
    (D, Minor),
    (EFlat, Major),
    (E, Major),
    (E, Minor),
    (F, Major),
    (F, Minor),
    (G, Major),
    (G, Minor),
    (A, Major),
    (A, Minor),
    (BFlat, Major),
    (B, Minor),
];

fn invention_set(first: u32) -> WorkMapping {
    let rows: Vec<(u32, Tonic, Mode)> = INVENTION_KEYS
        .iter()
        .enumerate()
        .map(|(i, &(tonic, mode))| (first + i as u32, tonic, mode))
        .collect();
    single_movement_collection(&rows, Confidence::Verified)
}

/// BWV 772–786.
pub fn inventions() -> WorkMapping {
    invention_set(772)
}

/// BWV 787–801.
pub fn sinfonias() -> WorkMapping {
    invention_set(787)
}

// ---------------------------------------------------------------------------
// Suites and partitas
// ---------------------------------------------------------------------------

/// BWV 806–811. Suite 1 counts its two courantes and two doubles separately.
pub fn english_suites() -> WorkMapping {
    multi_movement_collection(
        &[
            (806, A, Major, 10),
            (807, A, Minor, 7),
            (808, G, Minor, 7),
            (809, F, Major, 7),
            (810, E, Minor, 7),
            (811, D, Minor, 7),
        ],
        &[
            // Second galanterie in the parallel mode.
            (806, 9, A, Minor),
            (807, 6, A, Major),
            (808, 6, G, Major),
            (810, 6, E, Major),
            (811, 6, D, Major),
        ],
        Confidence::Verified,
    )
}

/// BWV 812–817.
pub fn french_suites() -> WorkMapping {
    multi_movement_collection(
        &[
            (812, D, Minor, 6),
            (813, C, Minor, 6),
            (814, B, Minor, 6),
            (815, EFlat, Major, 7),
            (816, G, Major, 7),
            (817, E, Major, 8),
        ],
        &[],
        Confidence::Verified,
    )
}

/// BWV 825–830, Clavier-Übung I.
pub fn partitas() -> WorkMapping {
    multi_movement_collection(
        &[
            (825, BFlat, Major, 7),
            (826, C, Minor, 6),
            (827, A, Minor, 7),
            (828, D, Major, 7),
            (829, G, Major, 7),
            (830, E, Minor, 7),
        ],
        &[],
        Confidence::Verified,
    )
}

// ---------------------------------------------------------------------------
// Goldberg Variations
// ---------------------------------------------------------------------------

pub const GOLDBERG_BWV: u32 = 988;
/// Aria, 30 variations, Aria da capo.
pub const GOLDBERG_PIECES: u32 = 32;
/// The three variations in G minor.
pub const GOLDBERG_MINOR_VARIATIONS: [u32; 3] = [15, 21, 25];

/// Identifier for piece `index` of the Goldberg Variations: 0 is the Aria,
/// 1..=30 the variations, 31 the Aria da capo.
pub fn goldberg_id(index: u32) -> String {
    match index {
        0 => format!("BWV{GOLDBERG_BWV}_aria"),
        i if i == GOLDBERG_PIECES - 1 => format!("BWV{GOLDBERG_BWV}_aria_da_capo"),
        i => format!("BWV{GOLDBERG_BWV}_var{i}"),
    }
}

/// BWV 988. Everything on G; only the listed variations are minor.
pub fn goldberg_variations() -> WorkMapping {
    (0..GOLDBERG_PIECES)
        .map(|index| {
            let mode = if GOLDBERG_MINOR_VARIATIONS.contains(&index) {
                Minor
            } else {
                Major
            };
            (goldberg_id(index), KeySignature::verified(G, mode))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Shorter keyboard works
// ---------------------------------------------------------------------------

/// BWV 933–938.
pub fn little_preludes() -> WorkMapping {
    single_movement_collection(
        &[
            (933, C, Major),
            (934, C, Minor),
            (935, D, Minor),
            (936, D, Major),
            (937, E, Major),
            (938, E, Minor),
        ],
        Confidence::Verified,
    )
}

/// BWV 910–916.
pub fn toccatas() -> WorkMapping {
    single_movement_collection(
        &[
            (910, FSharp, Minor),
            (911, C, Minor),
            (912, D, Major),
            (913, D, Minor),
            (914, E, Minor),
            (915, G, Minor),
            (916, G, Major),
        ],
        Confidence::Verified,
    )
}

/// BWV 525–530. Three movements each; the slow middle movements move away
/// from the home key.
pub fn trio_sonatas() -> WorkMapping {
    multi_movement_collection(
        &[
            (525, EFlat, Major, 3),
            (526, C, Minor, 3),
            (527, D, Minor, 3),
            (528, E, Minor, 3),
            (529, C, Major, 3),
            (530, G, Major, 3),
        ],
        &[
            (525, 2, C, Minor),
            (526, 2, EFlat, Major),
            (527, 2, F, Major),
            (528, 2, B, Minor),
            (529, 2, A, Minor),
            (530, 2, E, Minor),
        ],
        Confidence::Verified,
    )
}

/// BWV 1080. Fourteen contrapuncti and four canons, all in D minor.
pub fn art_of_fugue() -> WorkMapping {
    multi_movement_collection(&[(1080, D, Minor, 18)], &[], Confidence::Verified)
}

/// BWV Anh. 113–132, from the 1725 notebook. Several of these are by other
/// composers and the keys come from modern editions, hence inferred.
pub fn anna_magdalena_notebook() -> WorkMapping {
    const PIECES: [(u32, Tonic, Mode); 20] = [
        (113, F, Major),
        (114, G, Major),
        (115, G, Minor),
        (116, G, Major),
        (117, F, Major),
        (118, BFlat, Major),
        (119, G, Minor),
        (120, A, Minor),
        (121, C, Minor),
        (122, D, Major),
        (123, G, Minor),
        (124, G, Major),
        (125, G, Minor),
        (126, D, Major),
        (127, EFlat, Major),
        (128, D, Minor),
        (129, EFlat, Major),
        (130, G, Major),
        (131, F, Major),
        (132, D, Minor),
    ];
    PIECES
        .iter()
        .map(|&(number, tonic, mode)| (anhang_id(number), KeySignature::inferred(tonic, mode)))
        .collect()
}

/// Collections defined in this module, in merge order.
pub fn collections() -> [Collection; 13] {
    [
        Collection::new("Well-Tempered Clavier I", well_tempered_clavier_1),
        Collection::new("Well-Tempered Clavier II", well_tempered_clavier_2),
        Collection::new("Two-Part Inventions", inventions),
        Collection::new("Three-Part Sinfonias", sinfonias),
        Collection::new("English Suites", english_suites),
        Collection::new("French Suites", french_suites),
        Collection::new("Keyboard Partitas", partitas),
        Collection::new("Goldberg Variations", goldberg_variations),
        Collection::new("Six Little Preludes", little_preludes),
        Collection::new("Manualiter Toccatas", toccatas),
        Collection::new("Organ Trio Sonatas", trio_sonatas),
        Collection::new("Art of Fugue", art_of_fugue),
        Collection::new("Anna Magdalena Notebook", anna_magdalena_notebook),
    ]
}
