//! # Diagram Layout
//!
//! Converts a [`ChordShape`]'s fret data into drawable geometry for a chord box.
//!
//! ## Purpose
//! The rendering surface (SVG, canvas, terminal) should only have to draw
//! lines, circles and glyphs at the coordinates given here. Every music
//! decision (which frets are visible, where the nut is, what the offset label
//! says) is made in this module.
//!
//! ## Fret Window
//! - **Starting fret**: the shape's explicit `start_fret` if it has one.
//!   Otherwise fret 1 when the highest fretted note is at fret 4 or below,
//!   else the lowest fretted note. If the highest note still lies more than
//!   3 frets past the start, the start moves up to `max - 3`. Never below 1.
//! - **Fret span**: `max(3, max - start)`. Compact shapes still get 3 frets.
//!
//! ## Layout Rules
//! - Strings are horizontal lanes, low E (index 0) at the bottom
//! - Fret boundaries are vertical lines, evenly spaced across the width
//! - Fretted markers sit halfway between the two fret lines around the note
//! - Open (`o`) and muted (`x`) markers sit on the nut side of the window
//! - The first fret line is drawn thick (the nut) only when the window starts at fret 1
//! - Windows starting above fret 1 carry a `"Nfr"` label; without it the
//!   diagram would read as a nut-position chord
//!
//! ## Example
//! ```rust
//! use fretboard::{layout, ChordCatalog};
//!
//! let shape = ChordCatalog::builtin().find_shape("C#m").unwrap();
//! let geometry = layout(shape);
//!
//! assert_eq!(geometry.starting_fret, 4);
//! assert_eq!(geometry.fret_span, 3);
//! assert_eq!(geometry.fret_label.as_ref().map(|l| l.text.as_str()), Some("4fr"));
//! assert!(!geometry.shows_nut);
//! ```

mod text;

pub use text::render_text;

use serde::{Deserialize, Serialize};

use crate::catalog::ChordShape;

/// Pixel dimensions of a rendered chord box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct DiagramDimensions {
    pub width: f64,
    pub height: f64,
    pub padding_x: f64,
    pub padding_y: f64,
    /// Distance of open/muted markers from the first fret line.
    pub marker_offset: f64,
}

impl Default for DiagramDimensions {
    fn default() -> Self {
        Self {
            width: 220.0,
            height: 120.0,
            padding_x: 20.0,
            padding_y: 18.0,
            marker_offset: 10.0,
        }
    }
}

const NUT_THICKNESS: f64 = 4.0;
const FRET_THICKNESS: f64 = 2.0;
const MIN_FRET_SPAN: i32 = 3;

/// What is drawn on a string lane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StringMarker {
    /// Hollow ring on the nut side
    Open,
    /// Cross glyph on the nut side
    Muted,
    /// Filled dot inside the window, optionally labelled with a finger number
    Fretted { fret: u8, finger: Option<u8> },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StringLane {
    pub string: usize,
    pub y: f64,
    pub marker: StringMarker,
    /// Horizontal position of the marker glyph.
    pub marker_x: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FretLine {
    /// 0 is the left edge of the window, `fret_span` the right edge.
    pub position: u8,
    pub x: f64,
    pub thickness: f64,
}

/// One finger holding several strings at the same fret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Barre {
    pub finger: u8,
    pub fret: u8,
    pub low_string: usize,
    pub high_string: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FretLabel {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// Everything needed to draw one chord box.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramGeometry {
    pub starting_fret: u8,
    pub fret_span: u8,
    pub lanes: Vec<StringLane>,
    pub fret_lines: Vec<FretLine>,
    pub barres: Vec<Barre>,
    pub fret_label: Option<FretLabel>,
    pub shows_nut: bool,
}

/// Highest fretted note, or 1 when nothing is fretted.
/// Frets above the nut; open and muted strings are skipped.
fn fretted(strings: &[i8]) -> impl Iterator<Item = i32> + '_ {
    strings.iter().filter(|f| **f > 0).map(|f| *f as i32)
}

fn highest_fret(strings: &[i8]) -> i32 {
    fretted(strings).max().unwrap_or(1)
}

/// First fret shown in the diagram window.
pub fn starting_fret(strings: &[i8], explicit: Option<u8>) -> u8 {
    let max = highest_fret(strings);
    let lowest = fretted(strings).min().unwrap_or(1);

    let mut start = match explicit {
        Some(fret) => fret as i32,
        None if max <= 4 => 1,
        None => lowest,
    };
    if start + 3 < max {
        start = max - 3;
    }
    start.max(1) as u8
}

/// Number of frets shown after the starting fret.
pub fn fret_span(strings: &[i8], starting_fret: u8) -> u8 {
    (highest_fret(strings) - starting_fret as i32).max(MIN_FRET_SPAN) as u8
}

/// Lay out a shape with the default dimensions.
pub fn layout(shape: &ChordShape) -> DiagramGeometry {
    layout_with(shape, &DiagramDimensions::default())
}

/// Lay out a shape inside a box of the given dimensions.
pub fn layout_with(shape: &ChordShape, dims: &DiagramDimensions) -> DiagramGeometry {
    let start = starting_fret(&shape.strings, shape.start_fret);
    let span = fret_span(&shape.strings, start);
    let inner_width = dims.width - dims.padding_x * 2.0;
    let inner_height = dims.height - dims.padding_y * 2.0;
    let last = (shape.strings.len() - 1) as f64;
    let nut_side_x = dims.padding_x - dims.marker_offset;

    let lanes = shape
        .strings
        .iter()
        .enumerate()
        .map(|(string, &fret)| {
            let y = dims.padding_y + ((last - string as f64) / last) * inner_height;
            let (marker, marker_x) = match fret {
                f if f < 0 => (StringMarker::Muted, nut_side_x),
                0 => (StringMarker::Open, nut_side_x),
                f => {
                    let offset = (f as f64 - start as f64 + 0.5) / span as f64;
                    let marker = StringMarker::Fretted {
                        fret: f as u8,
                        finger: shape.finger(string),
                    };
                    (marker, dims.padding_x + offset * inner_width)
                }
            };
            StringLane {
                string,
                y,
                marker,
                marker_x,
            }
        })
        .collect();

    let shows_nut = start == 1;
    let fret_lines = (0..=span)
        .map(|position| FretLine {
            position,
            x: dims.padding_x + (position as f64 / span as f64) * inner_width,
            thickness: if position == 0 && shows_nut {
                NUT_THICKNESS
            } else {
                FRET_THICKNESS
            },
        })
        .collect();

    let fret_label = (start > 1).then(|| FretLabel {
        text: format!("{}fr", start),
        x: dims.padding_x - 8.0,
        y: dims.padding_y + 12.0,
    });

    DiagramGeometry {
        starting_fret: start,
        fret_span: span,
        lanes,
        fret_lines,
        barres: find_barres(shape),
        fret_label,
        shows_nut,
    }
}

/// Group fretted strings that share a finger and a fret.
fn find_barres(shape: &ChordShape) -> Vec<Barre> {
    let mut barres: Vec<Barre> = Vec::new();
    let mut counts: Vec<usize> = Vec::new();

    for (string, &fret) in shape.strings.iter().enumerate() {
        let Some(finger) = shape.finger(string).filter(|_| fret > 0) else {
            continue;
        };
        let fret = fret as u8;
        match barres
            .iter()
            .position(|b| b.finger == finger && b.fret == fret)
        {
            Some(i) => {
                barres[i].high_string = string;
                counts[i] += 1;
            }
            None => {
                barres.push(Barre {
                    finger,
                    fret,
                    low_string: string,
                    high_string: string,
                });
                counts.push(1);
            }
        }
    }

    let mut barres: Vec<Barre> = barres
        .into_iter()
        .zip(counts)
        .filter(|(_, count)| *count > 1)
        .map(|(barre, _)| barre)
        .collect();
    barres.sort_by_key(|b| (b.finger, b.fret));
    barres
}
