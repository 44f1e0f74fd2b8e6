//! Integration tests for the fretboard library
//!
//! Tests the full path from style and key to diagrams and playback events.

use fretboard::{
    find_shape, generate, generate_from_pattern, layout, resolve_degree, schedule_progression,
    to_playback_events, ChordCatalog, PlaybackSettings, StyleCatalog, CHROMATIC, GENERATOR_KEYS,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_tonic_round_trips_to_catalog() {
    let shape = find_shape(&resolve_degree("I", "C")).unwrap();
    assert_eq!(shape.id, "c-major");
    assert_eq!(shape.label, "C major");
}

#[test]
fn test_tonic_identity_for_all_keys() {
    for key in CHROMATIC {
        assert_eq!(resolve_degree("I", key), key);
    }
}

#[test]
fn test_builtin_styles_fully_resolve_in_c_and_g() {
    // every chord of every pattern has a catalog shape in these keys
    let catalog = ChordCatalog::builtin();
    for key in ["C", "G"] {
        for style in StyleCatalog::builtin().iter() {
            for index in 0..style.patterns.len() {
                let progression = generate_from_pattern(style, index, key, catalog).unwrap();
                for chord in &progression.chords {
                    assert!(
                        chord.shape.is_some(),
                        "{} {} pattern {}: {} missing",
                        style.id,
                        key,
                        index,
                        chord.name
                    );
                }
            }
        }
    }
}

#[test]
fn test_generated_progression_renders_and_plays() {
    let catalog = ChordCatalog::builtin();
    let settings = PlaybackSettings::default();
    for key in GENERATOR_KEYS {
        for seed in 0..5 {
            let style = StyleCatalog::builtin().get("upbeat").unwrap();
            let mut rng = StdRng::seed_from_u64(seed);
            let progression = generate(style, key, catalog, &mut rng);
            assert_eq!(progression.chords.len(), progression.pattern.len());

            for chord in progression.chords.iter().filter_map(|c| c.shape) {
                let geometry = layout(chord);
                assert!(geometry.fret_span >= 3);
                assert_eq!(geometry.lanes.len(), 6);
                assert_eq!(geometry.fret_label.is_some(), geometry.starting_fret > 1);
            }

            let events = schedule_progression(&progression.chords, &settings);
            for event in &events {
                let slot = (event.start / settings.beat_duration).round() as usize;
                let shape = progression.chords[slot].shape.unwrap();
                assert!(shape.strings[event.string_index] >= 0);
            }
        }
    }
}

#[test]
fn test_catalog_layouts() {
    for shape in ChordCatalog::builtin().iter() {
        let geometry = layout(shape);
        assert!(geometry.fret_span >= 3, "{}", shape.name);
        let max = shape.strings.iter().copied().max().unwrap_or(0);
        if shape.start_fret.is_none() && max <= 4 {
            assert_eq!(geometry.starting_fret, 1, "{}", shape.name);
        }
        assert_eq!(geometry.shows_nut, geometry.starting_fret == 1);
    }
}

#[test]
fn test_muted_strings_never_sound() {
    for shape in ChordCatalog::builtin().iter() {
        let events = to_playback_events(shape, 0.0, &PlaybackSettings::default());
        let sounding = shape.strings.iter().filter(|f| **f >= 0).count();
        assert_eq!(events.len(), sounding, "{}", shape.name);
        assert!(events.windows(2).all(|w| w[0].string_index < w[1].string_index));
    }
}

#[test]
fn test_custom_catalogs_drive_generation() {
    let chords = ChordCatalog::from_yaml(
        r#"
- { id: a, name: A, strings: [-1, 0, 2, 2, 2, 0], quality: major }
- { id: d, name: D, strings: [-1, -1, 0, 2, 3, 2], quality: major }
- { id: e7, name: E7, strings: [0, 2, 0, 1, 0, 0], quality: dominant }
"#,
    )
    .unwrap();
    let styles = StyleCatalog::from_yaml(
        r#"
- id: blues
  label: Blues
  patterns:
    - [I, IV, I, V7]
"#,
    )
    .unwrap();

    let style = styles.get("blues").unwrap();
    let mut rng = StdRng::seed_from_u64(1);
    let progression = generate(style, "A", &chords, &mut rng);
    let names: Vec<&str> = progression.chords.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["A", "D", "A", "E7"]);
    assert!(progression.chords.iter().all(|c| c.shape.is_some()));
}

#[test]
fn test_progression_serializes_to_json() {
    let style = StyleCatalog::builtin().get("ballad").unwrap();
    let progression = generate_from_pattern(style, 1, "C", ChordCatalog::builtin()).unwrap();
    let value = serde_json::to_value(&progression).unwrap();
    assert_eq!(value["styleId"], "ballad");
    assert_eq!(value["chords"][3]["degree"], "Imaj7");
    assert_eq!(value["chords"][3]["name"], "Cmaj7");
    assert_eq!(value["chords"][3]["shape"]["id"], "cmaj7");
}
