// Ensemble and solo string collections.
//
// Same table shape as keyboard.rs. Slow movements that leave the home key are
// listed as (BWV, movement, tonic, mode) overrides.

use super::{Collection, multi_movement_collection};
use crate::key::Confidence;
use crate::key::Mode::{Major, Minor};
use crate::key::Tonic::*;
use crate::mapping::WorkMapping;

/// BWV 1001–1006. Sonatas have four movements; partita movement counts
/// include each double.
pub fn solo_violin() -> WorkMapping {
    multi_movement_collection(
        &[
            (1001, G, Minor, 4),
            (1002, B, Minor, 8),
            (1003, A, Minor, 4),
            (1004, D, Minor, 5),
            (1005, C, Major, 4),
            (1006, E, Major, 7),
        ],
        &[
            (1001, 3, BFlat, Major), // Siciliana
            (1003, 3, C, Major),     // Andante
            (1005, 3, F, Major),     // Largo
        ],
        Confidence::Verified,
    )
}

/// BWV 1007–1012. Paired dances (Menuet I/II, Bourrée I/II, Gavotte I/II)
/// share one movement number, so every suite has six.
pub fn cello_suites() -> WorkMapping {
    multi_movement_collection(
        &[
            (1007, G, Major, 6),
            (1008, D, Minor, 6),
            (1009, C, Major, 6),
            (1010, EFlat, Major, 6),
            (1011, C, Minor, 6),
            (1012, D, Major, 6),
        ],
        &[],
        Confidence::Verified,
    )
}

/// BWV 1046–1051.
pub fn brandenburg_concertos() -> WorkMapping {
    multi_movement_collection(
        &[
            (1046, F, Major, 4),
            (1047, F, Major, 3),
            (1048, G, Major, 3),
            (1049, G, Major, 3),
            (1050, D, Major, 3),
            (1051, BFlat, Major, 3),
        ],
        &[
            (1046, 2, D, Minor),
            (1047, 2, D, Minor),
            // Two cadential chords, but the cadence is in E minor.
            (1048, 2, E, Minor),
            (1049, 2, E, Minor),
            (1050, 2, B, Minor),
            (1051, 2, EFlat, Major),
        ],
        Confidence::Verified,
    )
}

/// BWV 1066–1069. Overture first, then the dances; paired dances share a
/// number as in the cello suites.
pub fn orchestral_suites() -> WorkMapping {
    multi_movement_collection(
        &[
            (1066, C, Major, 7),
            (1067, B, Minor, 7),
            (1068, D, Major, 5),
            (1069, D, Major, 5),
        ],
        &[],
        Confidence::Verified,
    )
}

/// Collections defined in this module, in merge order.
pub fn collections() -> [Collection; 4] {
    [
        Collection::new("Solo Violin Sonatas and Partitas", solo_violin),
        Collection::new("Solo Cello Suites", cello_suites),
        Collection::new("Brandenburg Concertos", brandenburg_concertos),
        Collection::new("Orchestral Suites", orchestral_suites),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::KeySignature;

    #[test]
    fn test_literal_counts() {
        assert_eq!(solo_violin().len(), 32);
        assert_eq!(cello_suites().len(), 36);
        assert_eq!(brandenburg_concertos().len(), 19);
        assert_eq!(orchestral_suites().len(), 24);
    }

    #[test]
    fn test_violin_slow_movements() {
        let violin = solo_violin();
        assert_eq!(
            violin.get("BWV1001_1"),
            Some(&KeySignature::verified(G, Minor))
        );
        assert_eq!(
            violin.get("BWV1001_3"),
            Some(&KeySignature::verified(BFlat, Major))
        );
        assert_eq!(
            violin.get("BWV1005_3"),
            Some(&KeySignature::verified(F, Major))
        );
        assert_eq!(
            violin.get("BWV1004_5"),
            Some(&KeySignature::verified(D, Minor))
        );
    }

    #[test]
    fn test_brandenburg_middle_movements() {
        let concertos = brandenburg_concertos();
        assert_eq!(
            concertos.get("BWV1050_2"),
            Some(&KeySignature::verified(B, Minor))
        );
        assert_eq!(
            concertos.get("BWV1051_2"),
            Some(&KeySignature::verified(EFlat, Major))
        );
        assert_eq!(
            concertos.get("BWV1046_4"),
            Some(&KeySignature::verified(F, Major))
        );
        assert!(!concertos.contains("BWV1047_4"));
    }

    #[test]
    fn test_cello_suites_all_verified() {
        assert!(
            cello_suites()
                .iter()
                .all(|(_, k)| k.confidence == Confidence::Verified)
        );
    }
}
