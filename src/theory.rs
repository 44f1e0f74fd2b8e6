//! # Roman-Numeral Resolution
//!
//! Turns a scale-degree token such as `V7` or `vi` into a concrete chord name
//! in a given key.
//!
//! ## Degree Tokens
//! - Roman numerals `I` through `VII`, case-sensitive
//! - Uppercase = major, lowercase = minor (`vi` → `Am` in C)
//! - Suffixes: `7` (dominant seventh), `maj7` (major seventh), `°` (diminished)
//!
//! ## Quality Precedence
//! 1. `maj7` anywhere in the token → `<root>maj7`
//! 2. `°` → `<root>dim`
//! 3. all-lowercase token → `<root>m` (a trailing `7` is dropped: `vi7` → `Am`)
//! 4. `7` → `<root>7`
//! 5. otherwise → `<root>`
//!
//! ## Unresolvable Input
//! A token that doesn't parse to a degree, or a key outside the twelve
//! sharp-spelled note names, comes back unchanged. Callers detect the miss by
//! comparing against the input; nothing is raised.
//!
//! ## Example
//! ```rust
//! use fretboard::resolve_degree;
//!
//! assert_eq!(resolve_degree("V7", "C"), "G7");
//! assert_eq!(resolve_degree("vi", "C"), "Am");
//! assert_eq!(resolve_degree("IV", "G"), "C");
//! assert_eq!(resolve_degree("ii", "D"), "Em");
//! assert_eq!(resolve_degree("bogus", "C"), "bogus");
//! ```

use std::fmt::{self, Display};

/// The twelve chromatic note names, spelled with sharps.
pub const CHROMATIC: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Semitone offset of each major-scale degree from the tonic.
pub const MAJOR_STEPS: [u8; 7] = [0, 2, 4, 5, 7, 9, 11];

/// Keys offered by the progression generator.
pub const GENERATOR_KEYS: [&str; 6] = ["C", "G", "D", "A", "E", "F"];

/// One of the 12 pitch classes (0 is C, 11 is B).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PitchClass(u8);

impl PitchClass {
    pub fn new(semitone: i32) -> Self {
        Self(semitone.rem_euclid(12) as u8)
    }

    /// Parse a sharp-spelled note name. Flats and other spellings are rejected.
    pub fn from_name(name: &str) -> Option<Self> {
        CHROMATIC
            .iter()
            .position(|n| *n == name)
            .map(|i| Self(i as u8))
    }

    pub fn semitone(&self) -> u8 {
        self.0
    }

    pub fn name(&self) -> &'static str {
        CHROMATIC[self.0 as usize]
    }

    /// Move up by `semitones`, wrapping around the octave.
    pub fn transpose(&self, semitones: i32) -> Self {
        Self::new(self.0 as i32 + semitones)
    }
}

impl Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Chord quality implied by a degree token's spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DegreeQuality {
    Major,
    Minor,
    Dominant7,
    Major7,
    Diminished,
}

impl DegreeQuality {
    fn suffix(&self) -> &'static str {
        match self {
            Self::Major => "",
            Self::Minor => "m",
            Self::Dominant7 => "7",
            Self::Major7 => "maj7",
            Self::Diminished => "dim",
        }
    }
}

/// A parsed degree token: scale step (1-7) plus quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Degree {
    step: u8,
    quality: DegreeQuality,
}

impl Degree {
    fn parse(token: &str) -> Option<Self> {
        let core: String = token
            .to_lowercase()
            .chars()
            .filter(|c| *c == 'i' || *c == 'v')
            .collect();
        let step = match core.as_str() {
            "i" => 1,
            "ii" => 2,
            "iii" => 3,
            "iv" => 4,
            "v" => 5,
            "vi" => 6,
            "vii" => 7,
            _ => return None,
        };

        let diminished = token.contains('°');
        let minor = token == token.to_lowercase() && !diminished;
        let quality = if token.contains("maj7") {
            DegreeQuality::Major7
        } else if diminished {
            DegreeQuality::Diminished
        } else if minor {
            DegreeQuality::Minor
        } else if token.contains('7') {
            DegreeQuality::Dominant7
        } else {
            DegreeQuality::Major
        };

        Some(Self { step, quality })
    }

    fn root_in(&self, key: PitchClass) -> PitchClass {
        key.transpose(MAJOR_STEPS[(self.step - 1) as usize] as i32)
    }
}

/// Resolve a roman-numeral degree token against a key.
///
/// Returns the chord name (e.g. `"G7"`), or `token` unchanged if either the
/// token or the key cannot be interpreted.
pub fn resolve_degree(token: &str, key: &str) -> String {
    let (Some(degree), Some(key_class)) = (Degree::parse(token), PitchClass::from_name(key))
    else {
        log::warn!("Could not resolve degree {:?} in key {:?}", token, key);
        return token.to_string();
    };
    format!("{}{}", degree.root_in(key_class), degree.quality.suffix())
}
