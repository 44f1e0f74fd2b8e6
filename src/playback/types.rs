//! Playback type definitions
//!
//! This module defines the events handed to a tone generator and the settings
//! that shape them.

use serde::{Deserialize, Serialize};

/// Open-string frequencies in Hz, low E first (E2 A2 D3 G3 B3 E4).
pub const OPEN_STRING_FREQUENCIES: [f64; 6] = [82.41, 110.0, 146.83, 196.0, 246.94, 329.63];

/// MIDI note numbers of the open strings in standard tuning.
pub const OPEN_STRING_MIDI: [u8; 6] = [40, 45, 50, 55, 59, 64];

/// A single string sounding as part of a chord.
///
/// # Fields
/// - `string_index`: 0 is low E, 5 is high e
/// - `frequency`: pitch in Hz (equal temperament from the open string)
/// - `midi_note`: the same pitch as a MIDI note number
/// - `start`: seconds from the start of playback
/// - `duration`: seconds until the tone has decayed to silence
/// - `gain`: initial amplitude; open strings ring quieter than fretted ones
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackEvent {
    pub string_index: usize,
    pub fret: u8,
    pub frequency: f64,
    pub midi_note: u8,
    pub start: f64,
    pub duration: f64,
    pub gain: f64,
}

/// Timing and dynamics for generated events.
///
/// All fields fall back to their defaults when missing from a config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PlaybackSettings {
    /// Seconds between successive chords of a progression.
    pub beat_duration: f64,
    pub open_gain: f64,
    pub fretted_gain: f64,
    /// Seconds for a tone to fade out.
    pub decay: f64,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            beat_duration: 1.4,
            open_gain: 0.08,
            fretted_gain: 0.12,
            decay: 1.4,
        }
    }
}
