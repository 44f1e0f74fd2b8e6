//! Playback event generation
//!
//! Maps a shape's frets onto string frequencies and lays chords out on a
//! fixed beat grid.

use crate::catalog::ChordShape;
use crate::progression::ResolvedChord;

use super::types::{PlaybackEvent, PlaybackSettings, OPEN_STRING_FREQUENCIES, OPEN_STRING_MIDI};

/// Frequency of `string` fretted at `fret`: `open * 2^(fret/12)`.
///
/// Returns `None` for a string index past the sixth string.
pub fn fret_frequency(string: usize, fret: u8) -> Option<f64> {
    OPEN_STRING_FREQUENCIES
        .get(string)
        .map(|open| equal_tempered(*open, fret))
}

fn equal_tempered(open: f64, fret: u8) -> f64 {
    open * 2f64.powf(fret as f64 / 12.0)
}

/// Events for one chord, all starting at `start`, in string order.
///
/// Muted strings produce no event. Each note lasts `decay` seconds, cut
/// at `beat_duration` so a chord never sounds into the next beat.
pub fn to_playback_events(
    shape: &ChordShape,
    start: f64,
    settings: &PlaybackSettings,
) -> Vec<PlaybackEvent> {
    let duration = settings.decay.min(settings.beat_duration);
    shape
        .strings
        .iter()
        .zip(OPEN_STRING_FREQUENCIES.iter().zip(OPEN_STRING_MIDI))
        .enumerate()
        .filter(|(_, (fret, _))| **fret >= 0)
        .map(|(string_index, (&fret, (open, open_midi)))| {
            let fret = fret as u8;
            PlaybackEvent {
                string_index,
                fret,
                frequency: equal_tempered(*open, fret),
                midi_note: open_midi + fret,
                start,
                duration,
                gain: if fret == 0 {
                    settings.open_gain
                } else {
                    settings.fretted_gain
                },
            }
        })
        .collect()
}

/// Events for a whole progression, chord `i` starting at `i * beat_duration`.
///
/// Chords without a shape stay silent but keep their beat.
pub fn schedule_progression(
    chords: &[ResolvedChord<'_>],
    settings: &PlaybackSettings,
) -> Vec<PlaybackEvent> {
    chords
        .iter()
        .enumerate()
        .filter_map(|(index, chord)| {
            let start = index as f64 * settings.beat_duration;
            chord
                .shape
                .map(|shape| to_playback_events(shape, start, settings))
        })
        .flatten()
        .collect()
}
