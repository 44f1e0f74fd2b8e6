//! Built-in chord shapes and progression styles.

use super::types::{ChordShape, ProgressionStyle, Quality};

const X: i8 = -1;

/// Static form of a catalog record; finger `0` marks a string with no finger.
struct ShapeDef {
    id: &'static str,
    name: &'static str,
    label: &'static str,
    strings: [i8; 6],
    fingers: [u8; 6],
    quality: Quality,
    tags: &'static [&'static str],
    start_fret: Option<u8>,
}

impl From<&ShapeDef> for ChordShape {
    fn from(def: &ShapeDef) -> Self {
        ChordShape {
            id: def.id.to_string(),
            name: def.name.to_string(),
            label: def.label.to_string(),
            strings: def.strings,
            fingers: Some(def.fingers.map(|f| if f == 0 { None } else { Some(f) })),
            quality: def.quality,
            tags: def.tags.iter().map(|t| t.to_string()).collect(),
            start_fret: def.start_fret,
        }
    }
}

const SHAPES: &[ShapeDef] = &[
    ShapeDef {
        id: "c-major",
        name: "C",
        label: "C major",
        strings: [X, 3, 2, 0, 1, 0],
        fingers: [0, 3, 2, 0, 1, 0],
        quality: Quality::Major,
        tags: &["campfire", "open", "bright"],
        start_fret: None,
    },
    ShapeDef {
        id: "cmaj7",
        name: "Cmaj7",
        label: "C maj7",
        strings: [X, 3, 2, 0, 0, 0],
        fingers: [0, 3, 2, 0, 0, 0],
        quality: Quality::Maj7,
        tags: &["smooth", "jazzy"],
        start_fret: None,
    },
    ShapeDef {
        id: "d-major",
        name: "D",
        label: "D major",
        strings: [X, X, 0, 2, 3, 2],
        fingers: [0, 0, 0, 1, 3, 2],
        quality: Quality::Major,
        tags: &["campfire", "open"],
        start_fret: None,
    },
    ShapeDef {
        id: "dm",
        name: "Dm",
        label: "D minor",
        strings: [X, X, 0, 2, 3, 1],
        fingers: [0, 0, 0, 2, 3, 1],
        quality: Quality::Minor,
        tags: &["sad", "open"],
        start_fret: None,
    },
    ShapeDef {
        id: "e-major",
        name: "E",
        label: "E major",
        strings: [0, 2, 2, 1, 0, 0],
        fingers: [0, 2, 3, 1, 0, 0],
        quality: Quality::Major,
        tags: &["open", "bright"],
        start_fret: None,
    },
    ShapeDef {
        id: "em",
        name: "Em",
        label: "E minor",
        strings: [0, 2, 2, 0, 0, 0],
        fingers: [0, 2, 3, 0, 0, 0],
        quality: Quality::Minor,
        tags: &["ballad", "open"],
        start_fret: None,
    },
    ShapeDef {
        id: "em7",
        name: "Em7",
        label: "E m7",
        strings: [0, 2, 2, 0, 3, 0],
        fingers: [0, 1, 2, 0, 3, 0],
        quality: Quality::Other,
        tags: &["lofi", "open"],
        start_fret: None,
    },
    ShapeDef {
        id: "f-major",
        name: "F",
        label: "F major",
        strings: [1, 3, 3, 2, 1, 1],
        fingers: [1, 3, 4, 2, 1, 1],
        quality: Quality::Major,
        tags: &["barre", "essential"],
        start_fret: Some(1),
    },
    ShapeDef {
        id: "fmaj7",
        name: "Fmaj7",
        label: "F maj7",
        strings: [1, 3, 2, 0, 1, 0],
        fingers: [1, 3, 2, 0, 4, 0],
        quality: Quality::Maj7,
        tags: &["dreamy", "open"],
        start_fret: Some(1),
    },
    ShapeDef {
        id: "g-major",
        name: "G",
        label: "G major",
        strings: [3, 2, 0, 0, 0, 3],
        fingers: [2, 1, 0, 0, 0, 3],
        quality: Quality::Major,
        tags: &["campfire", "open"],
        start_fret: None,
    },
    ShapeDef {
        id: "g7",
        name: "G7",
        label: "G7",
        strings: [3, 2, 0, 0, 0, 1],
        fingers: [2, 1, 0, 0, 0, 3],
        quality: Quality::Dominant,
        tags: &["tense", "blues"],
        start_fret: None,
    },
    ShapeDef {
        id: "a-major",
        name: "A",
        label: "A major",
        strings: [X, 0, 2, 2, 2, 0],
        fingers: [0, 0, 1, 2, 3, 0],
        quality: Quality::Major,
        tags: &["open", "pop"],
        start_fret: None,
    },
    ShapeDef {
        id: "am",
        name: "Am",
        label: "A minor",
        strings: [X, 0, 2, 2, 1, 0],
        fingers: [0, 0, 2, 3, 1, 0],
        quality: Quality::Minor,
        tags: &["ballad", "open"],
        start_fret: None,
    },
    ShapeDef {
        id: "am7",
        name: "Am7",
        label: "A m7",
        strings: [X, 0, 2, 0, 1, 0],
        fingers: [0, 0, 2, 0, 1, 0],
        quality: Quality::Other,
        tags: &["soul", "open"],
        start_fret: None,
    },
    ShapeDef {
        id: "b-major",
        name: "B",
        label: "B major",
        strings: [X, 2, 4, 4, 4, 2],
        fingers: [0, 1, 3, 4, 4, 1],
        quality: Quality::Major,
        tags: &["barre", "bright"],
        start_fret: Some(2),
    },
    ShapeDef {
        id: "bm",
        name: "Bm",
        label: "B minor",
        strings: [X, 2, 4, 4, 3, 2],
        fingers: [0, 1, 3, 4, 2, 1],
        quality: Quality::Minor,
        tags: &["barre", "pop"],
        start_fret: Some(2),
    },
    ShapeDef {
        id: "b7",
        name: "B7",
        label: "B7",
        strings: [X, 2, 1, 2, 0, 2],
        fingers: [0, 2, 1, 3, 0, 4],
        quality: Quality::Dominant,
        tags: &["bluesy", "v-of-e"],
        start_fret: Some(1),
    },
    ShapeDef {
        id: "fsharp-minor",
        name: "F#m",
        label: "F# minor",
        strings: [2, 4, 4, 2, 2, 2],
        fingers: [1, 3, 4, 1, 1, 1],
        quality: Quality::Minor,
        tags: &["barre", "pop"],
        start_fret: Some(2),
    },
    ShapeDef {
        id: "csharp-minor",
        name: "C#m",
        label: "C# minor",
        strings: [X, 4, 6, 6, 5, 4],
        fingers: [0, 1, 3, 4, 2, 1],
        quality: Quality::Minor,
        tags: &["barre", "moody"],
        start_fret: Some(4),
    },
    ShapeDef {
        id: "bb-major",
        name: "Bb",
        label: "Bb major",
        strings: [X, 1, 3, 3, 3, 1],
        fingers: [0, 1, 3, 4, 4, 1],
        quality: Quality::Major,
        tags: &["barre", "soul"],
        start_fret: Some(1),
    },
];

pub(crate) fn chord_shapes() -> Vec<ChordShape> {
    SHAPES.iter().map(ChordShape::from).collect()
}

struct StyleDef {
    id: &'static str,
    label: &'static str,
    accent: &'static str,
    description: &'static str,
    patterns: &'static [&'static [&'static str]],
}

impl From<&StyleDef> for ProgressionStyle {
    fn from(def: &StyleDef) -> Self {
        ProgressionStyle {
            id: def.id.to_string(),
            label: def.label.to_string(),
            accent: def.accent.to_string(),
            description: def.description.to_string(),
            patterns: def
                .patterns
                .iter()
                .map(|p| p.iter().map(|d| d.to_string()).collect())
                .collect(),
        }
    }
}

const STYLES: &[StyleDef] = &[
    StyleDef {
        id: "jpop",
        label: "J-POP Hook",
        accent: "from-amber-400 to-pink-500",
        description: "Strongly resolving progressions that land a chorus hook",
        patterns: &[
            &["I", "V", "vi", "IV"],
            &["vi", "IV", "I", "V"],
            &["IV", "V", "iii", "vi"],
        ],
    },
    StyleDef {
        id: "ballad",
        label: "Ballad / Lofi",
        accent: "from-sky-400 to-indigo-500",
        description: "Floating, quiet moods that leave some space",
        patterns: &[
            &["I", "vi", "IV", "V"],
            &["ii", "V", "I", "Imaj7"],
            &["I", "V", "IV", "IV"],
        ],
    },
    StyleDef {
        id: "upbeat",
        label: "Upbeat / Rock",
        accent: "from-lime-400 to-emerald-500",
        description: "Driving changes for when the song needs momentum",
        patterns: &[
            &["I", "V", "vi", "V"],
            &["vi", "IV", "I", "V"],
            &["I", "IV", "V", "IV"],
        ],
    },
];

pub(crate) fn progression_styles() -> Vec<ProgressionStyle> {
    STYLES.iter().map(ProgressionStyle::from).collect()
}
