//! # Playback Module
//!
//! Derive tone-generator input from chord shapes.
//!
//! ## Purpose
//! The core does not make sound. It produces [`PlaybackEvent`]s (string,
//! frequency, start time, gain) that an audio layer turns into oscillators.
//!
//! ## Sub-modules
//! - `types` - PlaybackEvent, PlaybackSettings, open-string tables
//! - `engine` - per-chord events and progression scheduling
//!
//! ## Pitch
//! Each sounding string plays `open_frequency * 2^(fret/12)`. Muted strings
//! never produce an event. Open strings use a lower gain than fretted ones.
//!
//! ## Timing
//! - All strings of one chord share a start time (the chord is struck at once)
//! - In a progression, chord `i` starts at `i * beat_duration`
//! - With the default settings a tone decays within one beat, so chords never overlap
//!
//! ## Example
//! ```rust
//! use fretboard::{to_playback_events, ChordCatalog, PlaybackSettings};
//!
//! let c = ChordCatalog::builtin().find_shape("C").unwrap();
//! let events = to_playback_events(c, 0.0, &PlaybackSettings::default());
//!
//! assert_eq!(events.len(), 5); // low E is muted
//! assert_eq!(events[0].string_index, 1);
//! assert_eq!(events[0].midi_note, 48); // C3
//! ```

mod engine;
mod types;


pub use engine::{fret_frequency, schedule_progression, to_playback_events};
pub use types::{PlaybackEvent, PlaybackSettings, OPEN_STRING_FREQUENCIES, OPEN_STRING_MIDI};
