//! Catalog record types
//!
//! `ChordShape` and `ProgressionStyle` are immutable once built. The `Raw*`
//! structs mirror the YAML layout and are validated into the typed records.

use serde::{Deserialize, Serialize};

use crate::error::FretboardError;

/// Number of strings on the instrument (standard six-string guitar).
pub const STRING_COUNT: usize = 6;

/// Fret value for a string that is not played.
pub const MUTED: i8 = -1;

/// Highest fret a catalog shape may reference.
pub const MAX_FRET: i8 = 24;

/// Broad chord family, used for tagging and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Major,
    Minor,
    Dominant,
    Maj7,
    Other,
}

/// A concrete fingering for one chord.
///
/// # Fields
/// - `strings`: one fret per string, low E first. `-1` muted, `0` open, `n` fretted at n
/// - `fingers`: optional finger hint per string (`None` or `Some(0)` = no finger)
/// - `start_fret`: explicit first fret of the diagram window, if the shape wants one
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordShape {
    pub id: String,
    pub name: String,
    pub label: String,
    pub strings: [i8; STRING_COUNT],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingers: Option<[Option<u8>; STRING_COUNT]>,
    pub quality: Quality,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_fret: Option<u8>,
}

impl ChordShape {
    /// Finger hint for a string, ignoring `0` ("no finger") entries.
    pub fn finger(&self, string: usize) -> Option<u8> {
        self.fingers
            .as_ref()
            .and_then(|fingers| fingers.get(string).copied().flatten())
            .filter(|finger| *finger > 0)
    }
}

/// Raw chord record for YAML deserialization
#[derive(Deserialize, Debug)]
#[serde(rename_all = "kebab-case")]
pub struct RawChordShape {
    pub id: String,
    pub name: String,
    pub label: Option<String>,
    pub strings: Vec<i8>,
    pub fingers: Option<Vec<Option<u8>>>,
    pub quality: Quality,
    #[serde(default)]
    pub tags: Vec<String>,
    pub start_fret: Option<u8>,
}

impl TryFrom<RawChordShape> for ChordShape {
    type Error = FretboardError;

    fn try_from(raw: RawChordShape) -> Result<Self, Self::Error> {
        let invalid = |message: String| FretboardError::InvalidShape {
            id: raw.id.clone(),
            message,
        };

        let strings: [i8; STRING_COUNT] = raw.strings.as_slice().try_into().map_err(|_| {
            invalid(format!(
                "expected {} strings, found {}",
                STRING_COUNT,
                raw.strings.len()
            ))
        })?;
        if let Some(fret) = strings.iter().find(|f| **f < MUTED || **f > MAX_FRET) {
            return Err(invalid(format!(
                "fret {} outside {}..={}",
                fret, MUTED, MAX_FRET
            )));
        }

        let fingers = match &raw.fingers {
            None => None,
            Some(list) => {
                let fingers: [Option<u8>; STRING_COUNT] =
                    list.as_slice().try_into().map_err(|_| {
                        invalid(format!(
                            "expected {} finger hints, found {}",
                            STRING_COUNT,
                            list.len()
                        ))
                    })?;
                if let Some(finger) = fingers.iter().flatten().find(|f| **f > 4) {
                    return Err(invalid(format!("finger {} outside 0..=4", finger)));
                }
                Some(fingers)
            }
        };

        if raw.start_fret == Some(0) {
            return Err(invalid("start-fret must be at least 1".to_string()));
        }

        Ok(ChordShape {
            label: raw.label.clone().unwrap_or_else(|| raw.name.clone()),
            id: raw.id,
            name: raw.name,
            strings,
            fingers,
            quality: raw.quality,
            tags: raw.tags,
            start_fret: raw.start_fret,
        })
    }
}

/// A named group of candidate progressions.
///
/// `accent` is a styling token for the presentation layer; the core ignores it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressionStyle {
    pub id: String,
    pub label: String,
    pub accent: String,
    pub description: String,
    pub patterns: Vec<Vec<String>>,
}

/// Raw style record for YAML deserialization
#[derive(Deserialize, Debug)]
#[serde(rename_all = "kebab-case")]
pub struct RawProgressionStyle {
    pub id: String,
    pub label: Option<String>,
    #[serde(default)]
    pub accent: String,
    #[serde(default)]
    pub description: String,
    pub patterns: Vec<Vec<String>>,
}

impl TryFrom<RawProgressionStyle> for ProgressionStyle {
    type Error = FretboardError;

    fn try_from(raw: RawProgressionStyle) -> Result<Self, Self::Error> {
        let invalid = |message: &str| FretboardError::InvalidStyle {
            id: raw.id.clone(),
            message: message.to_string(),
        };
        if raw.patterns.is_empty() {
            return Err(invalid("style has no patterns"));
        }
        if raw.patterns.iter().any(|p| p.is_empty()) {
            return Err(invalid("patterns must contain at least one degree"));
        }

        Ok(ProgressionStyle {
            label: raw.label.clone().unwrap_or_else(|| raw.id.clone()),
            id: raw.id,
            accent: raw.accent,
            description: raw.description,
            patterns: raw.patterns,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(strings: Vec<i8>) -> RawChordShape {
        RawChordShape {
            id: "test".to_string(),
            name: "T".to_string(),
            label: None,
            strings,
            fingers: None,
            quality: Quality::Other,
            tags: vec![],
            start_fret: None,
        }
    }

    #[test]
    fn test_rejects_wrong_string_count() {
        let err = ChordShape::try_from(raw(vec![0, 2, 2, 0, 0])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid chord shape 'test': expected 6 strings, found 5"
        );
    }

    #[test]
    fn test_rejects_out_of_range_frets() {
        assert!(ChordShape::try_from(raw(vec![-2, 0, 0, 0, 0, 0])).is_err());
        assert!(ChordShape::try_from(raw(vec![25, 0, 0, 0, 0, 0])).is_err());
    }

    #[test]
    fn test_label_defaults_to_name() {
        let shape = ChordShape::try_from(raw(vec![0, 2, 2, 0, 0, 0])).unwrap();
        assert_eq!(shape.label, "T");
        assert_eq!(shape.fingers, None);
    }

    #[test]
    fn test_finger_zero_is_no_hint() {
        let mut r = raw(vec![0, 2, 2, 1, 0, 0]);
        r.fingers = Some(vec![Some(0), Some(2), Some(3), Some(1), None, Some(0)]);
        let shape = ChordShape::try_from(r).unwrap();
        assert_eq!(shape.finger(0), None);
        assert_eq!(shape.finger(1), Some(2));
        assert_eq!(shape.finger(4), None);
        assert_eq!(shape.finger(9), None);
    }

    #[test]
    fn test_style_requires_patterns() {
        let style = RawProgressionStyle {
            id: "empty".to_string(),
            label: None,
            accent: String::new(),
            description: String::new(),
            patterns: vec![],
        };
        assert!(matches!(
            ProgressionStyle::try_from(style),
            Err(FretboardError::InvalidStyle { .. })
        ));
    }
}
