// Key signature value types.
//
// A key signature here is a tonic spelling plus a major/minor mode, tagged
// with how confident we are in the attribution. Tonics are spellings, not
// bare pitch classes: D# minor and Eb minor are the same pitch class but the
// catalog names them differently, and the table preserves the catalog's name.
//
// Used by every builder in catalog/ and serialized by output.rs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A tonic spelling. The twelve default spellings follow the usual flat-side
/// convention for black keys except C# and F#; `DSharp` and `GSharp` exist for
/// the minor keys the catalog spells on the sharp side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tonic {
    #[serde(rename = "C")]
    C,
    #[serde(rename = "C#")]
    CSharp,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "D#")]
    DSharp,
    #[serde(rename = "Eb")]
    EFlat,
    #[serde(rename = "E")]
    E,
    #[serde(rename = "F")]
    F,
    #[serde(rename = "F#")]
    FSharp,
    #[serde(rename = "G")]
    G,
    #[serde(rename = "G#")]
    GSharp,
    #[serde(rename = "Ab")]
    AFlat,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "Bb")]
    BFlat,
    #[serde(rename = "B")]
    B,
}

impl Tonic {
    /// Default spelling for each pitch class (0 = C).
    const DEFAULT_SPELLINGS: [Tonic; 12] = [
        Tonic::C,
        Tonic::CSharp,
        Tonic::D,
        Tonic::EFlat,
        Tonic::E,
        Tonic::F,
        Tonic::FSharp,
        Tonic::G,
        Tonic::AFlat,
        Tonic::A,
        Tonic::BFlat,
        Tonic::B,
    ];

    /// The default spelling of a pitch class. Wraps modulo 12.
    pub fn from_pitch_class(pc: u8) -> Self {
        Self::DEFAULT_SPELLINGS[(pc % 12) as usize]
    }

    /// Pitch class of this spelling (0 = C, 11 = B).
    pub fn pitch_class(self) -> u8 {
        match self {
            Tonic::C => 0,
            Tonic::CSharp => 1,
            Tonic::D => 2,
            Tonic::DSharp | Tonic::EFlat => 3,
            Tonic::E => 4,
            Tonic::F => 5,
            Tonic::FSharp => 6,
            Tonic::G => 7,
            Tonic::GSharp | Tonic::AFlat => 8,
            Tonic::A => 9,
            Tonic::BFlat => 10,
            Tonic::B => 11,
        }
    }

    /// The spelling as written in the output table.
    pub fn name(self) -> &'static str {
        match self {
            Tonic::C => "C",
            Tonic::CSharp => "C#",
            Tonic::D => "D",
            Tonic::DSharp => "D#",
            Tonic::EFlat => "Eb",
            Tonic::E => "E",
            Tonic::F => "F",
            Tonic::FSharp => "F#",
            Tonic::G => "G",
            Tonic::GSharp => "G#",
            Tonic::AFlat => "Ab",
            Tonic::A => "A",
            Tonic::BFlat => "Bb",
            Tonic::B => "B",
        }
    }
}

impl fmt::Display for Tonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Tonal quality of a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Major,
    Minor,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Major => f.write_str("major"),
            Mode::Minor => f.write_str("minor"),
        }
    }
}

/// Where a key attribution comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// Established from the autograph, first edition, or the work's title.
    Verified,
    /// Established by secondary analysis (uncertain attribution or source).
    Inferred,
}

/// One row of the key table. Field order is the serialized order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeySignature {
    pub tonic: Tonic,
    pub mode: Mode,
    pub confidence: Confidence,
}

impl KeySignature {
    pub fn new(tonic: Tonic, mode: Mode, confidence: Confidence) -> Self {
        KeySignature {
            tonic,
            mode,
            confidence,
        }
    }

    pub fn verified(tonic: Tonic, mode: Mode) -> Self {
        KeySignature::new(tonic, mode, Confidence::Verified)
    }

    pub fn inferred(tonic: Tonic, mode: Mode) -> Self {
        KeySignature::new(tonic, mode, Confidence::Inferred)
    }
}

impl fmt::Display for KeySignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.tonic, self.mode)
    }
}
