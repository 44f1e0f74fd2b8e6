//! # fretboard
//!
//! Chord lookup, progression generation and chord-diagram layout for
//! six-string guitar in standard tuning.
//!
//! ## Pipeline
//! ```text
//! style + key ──► generate ──► [ResolvedChord { degree, name, shape? }]
//!                   │                       │
//!          resolve_degree             ┌─────┴──────┐
//!          find_shape_or_triad        ▼            ▼
//!                                  layout   to_playback_events
//!                                     │            │
//!                               DiagramGeometry  PlaybackEvent
//! ```
//!
//! ## Modules
//! - `theory` - roman-numeral degrees to chord names
//! - `catalog` - chord shapes and progression styles
//! - `diagram` - fret window and chord-box geometry
//! - `progression` - random progression generation
//! - `playback` - frequencies and timing for a tone generator
//! - `config` - YAML configuration
//!
//! ## Example
//! ```rust
//! use fretboard::{generate_from_pattern, layout, ChordCatalog, StyleCatalog};
//!
//! let style = StyleCatalog::builtin().get("jpop").unwrap();
//! let progression = generate_from_pattern(style, 0, "G", ChordCatalog::builtin()).unwrap();
//!
//! let names: Vec<&str> = progression.chords.iter().map(|c| c.name.as_str()).collect();
//! assert_eq!(names, ["G", "D", "Em", "C"]);
//!
//! let diagram = layout(progression.chords[0].shape.unwrap());
//! assert_eq!(diagram.starting_fret, 1);
//! ```

pub mod catalog;
pub mod config;
pub mod diagram;
pub mod error;
pub mod playback;
pub mod progression;
pub mod theory;

pub use catalog::{ChordCatalog, ChordShape, ProgressionStyle, Quality, StyleCatalog};
pub use config::Config;
pub use diagram::{layout, layout_with, render_text, DiagramDimensions, DiagramGeometry};
pub use error::FretboardError;
pub use playback::{schedule_progression, to_playback_events, PlaybackEvent, PlaybackSettings};
pub use progression::{generate, generate_from_pattern, Progression, ResolvedChord};
pub use theory::{resolve_degree, CHROMATIC, GENERATOR_KEYS};

/// Look up a chord by symbol in the built-in catalog.
///
/// ```rust
/// assert_eq!(fretboard::find_shape(&fretboard::resolve_degree("I", "C")).unwrap().id, "c-major");
/// assert!(fretboard::find_shape("Dmaj7").is_none());
/// ```
pub fn find_shape(name: &str) -> Option<&'static ChordShape> {
    ChordCatalog::builtin().find_shape(name)
}
