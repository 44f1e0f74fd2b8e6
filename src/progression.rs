//! # Progression Generator
//!
//! Picks one pattern from a [`ProgressionStyle`], resolves each degree against
//! a key, and attaches the catalog shape for each chord.
//!
//! ## Pipeline
//! 1. Choose a pattern uniformly at random (the caller supplies the RNG)
//! 2. Resolve each degree token with [`resolve_degree`]
//! 3. Look the chord up with [`ChordCatalog::find_shape_or_triad`]
//!
//! A chord the catalog doesn't have still appears in the output, with
//! `shape: None`. Renderers show a placeholder for it.
//!
//! ## Example
//! ```rust
//! use fretboard::{generate, ChordCatalog, StyleCatalog};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let style = StyleCatalog::builtin().get("jpop").unwrap();
//! let mut rng = StdRng::seed_from_u64(7);
//! let progression = generate(style, "C", ChordCatalog::builtin(), &mut rng);
//!
//! assert_eq!(progression.chords.len(), progression.pattern.len());
//! assert!(style.patterns.contains(&progression.pattern));
//! ```

use rand::Rng;
use serde::Serialize;

use crate::catalog::{ChordCatalog, ChordShape, ProgressionStyle};
use crate::theory::resolve_degree;

/// One step of a generated progression.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedChord<'a> {
    pub degree: String,
    pub name: String,
    pub shape: Option<&'a ChordShape>,
}

impl<'a> ResolvedChord<'a> {
    /// Resolve a single degree token in `key`.
    pub fn resolve(degree: &str, key: &str, catalog: &'a ChordCatalog) -> Self {
        let name = resolve_degree(degree, key);
        let shape = catalog.find_shape_or_triad(&name);
        if shape.is_none() {
            log::warn!("No chord shape for {} ({} in {})", name, degree, key);
        }
        Self {
            degree: degree.to_string(),
            name,
            shape,
        }
    }
}

/// A generated progression: the chosen pattern and its resolved chords.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Progression<'a> {
    pub style_id: String,
    pub key: String,
    pub pattern: Vec<String>,
    pub chords: Vec<ResolvedChord<'a>>,
}

/// Generate a progression in `key` from a randomly chosen pattern of `style`.
///
/// A style with no patterns yields an empty progression.
pub fn generate<'a, R: Rng + ?Sized>(
    style: &ProgressionStyle,
    key: &str,
    catalog: &'a ChordCatalog,
    rng: &mut R,
) -> Progression<'a> {
    if style.patterns.is_empty() {
        log::warn!("Style {} has no patterns", style.id);
        return Progression {
            style_id: style.id.clone(),
            key: key.to_string(),
            pattern: Vec::new(),
            chords: Vec::new(),
        };
    }

    let index = rng.gen_range(0..style.patterns.len());
    log::debug!(
        "Style {}: picked pattern {} of {}",
        style.id,
        index,
        style.patterns.len()
    );
    build(style, &style.patterns[index], key, catalog)
}

/// Generate a progression from a specific pattern of `style`.
///
/// Returns `None` if `index` is out of range.
pub fn generate_from_pattern<'a>(
    style: &ProgressionStyle,
    index: usize,
    key: &str,
    catalog: &'a ChordCatalog,
) -> Option<Progression<'a>> {
    style
        .patterns
        .get(index)
        .map(|pattern| build(style, pattern, key, catalog))
}

fn build<'a>(
    style: &ProgressionStyle,
    pattern: &[String],
    key: &str,
    catalog: &'a ChordCatalog,
) -> Progression<'a> {
    Progression {
        style_id: style.id.clone(),
        key: key.to_string(),
        pattern: pattern.to_vec(),
        chords: pattern
            .iter()
            .map(|degree| ResolvedChord::resolve(degree, key, catalog))
            .collect(),
    }
}
