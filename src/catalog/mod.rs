//! # Chord and Style Catalogs
//!
//! Immutable lookup tables for chord shapes and progression styles.
//!
//! ## Sub-modules
//! - `types` - ChordShape, ProgressionStyle and their YAML raw forms
//! - `builtin` - the default twenty chord shapes and three styles
//!
//! ## Lookup
//! - [`ChordCatalog::find_shape`] - exact match on the chord symbol (`"Am"`)
//! - [`ChordCatalog::find_shape_or_triad`] - exact match, then retry without a
//!   `maj7` suffix so `"Dmaj7"` falls back to `"D"`
//! - [`StyleCatalog::get`] - style by id
//!
//! ## Loading
//! Both catalogs are built once and never mutated. The built-in catalogs are
//! shared statics; replacements can be read from YAML:
//!
//! ```rust
//! use fretboard::ChordCatalog;
//!
//! let yaml = r#"
//! - id: e5
//!   name: E5
//!   label: E power chord
//!   strings: [0, 2, 2, -1, -1, -1]
//!   quality: other
//!   tags: [rock]
//! "#;
//! let catalog = ChordCatalog::from_yaml(yaml)?;
//! assert_eq!(catalog.find_shape("E5").map(|s| s.id.as_str()), Some("e5"));
//! # Ok::<(), fretboard::FretboardError>(())
//! ```

mod builtin;
mod types;

pub use types::{
    ChordShape, ProgressionStyle, Quality, RawChordShape, RawProgressionStyle, MAX_FRET, MUTED,
    STRING_COUNT,
};

use std::sync::OnceLock;

use indexmap::IndexMap;

use crate::error::FretboardError;

/// Chord shapes indexed by symbol, in catalog order.
#[derive(Debug, Clone)]
pub struct ChordCatalog {
    shapes: IndexMap<String, ChordShape>,
}

impl ChordCatalog {
    /// Build a catalog, rejecting duplicate symbols or ids.
    pub fn new(shapes: Vec<ChordShape>) -> Result<Self, FretboardError> {
        let mut index: IndexMap<String, ChordShape> = IndexMap::new();
        for shape in shapes {
            if index.contains_key(&shape.name) {
                return Err(FretboardError::DuplicateEntry(shape.name));
            }
            if index.values().any(|s| s.id == shape.id) {
                return Err(FretboardError::DuplicateEntry(shape.id));
            }
            index.insert(shape.name.clone(), shape);
        }
        Ok(Self { shapes: index })
    }

    /// The built-in catalog, shared for the life of the process.
    pub fn builtin() -> &'static ChordCatalog {
        static CATALOG: OnceLock<ChordCatalog> = OnceLock::new();
        CATALOG.get_or_init(|| Self {
            shapes: builtin::chord_shapes()
                .into_iter()
                .map(|shape| (shape.name.clone(), shape))
                .collect(),
        })
    }

    /// Parse a YAML sequence of chord records.
    pub fn from_yaml(content: &str) -> Result<Self, FretboardError> {
        let raw: Vec<RawChordShape> = serde_yaml::from_str(content)
            .map_err(|e| FretboardError::CatalogError(e.to_string()))?;
        let shapes = raw
            .into_iter()
            .map(ChordShape::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!("Loaded {} chord shapes", shapes.len());
        Self::new(shapes)
    }

    /// Exact match on the chord symbol.
    pub fn find_shape(&self, name: &str) -> Option<&ChordShape> {
        self.shapes.get(name)
    }

    /// Exact match, falling back to the plain triad for an uncatalogued `maj7`.
    pub fn find_shape_or_triad(&self, name: &str) -> Option<&ChordShape> {
        self.find_shape(name).or_else(|| {
            name.strip_suffix("maj7")
                .and_then(|triad| self.find_shape(triad))
        })
    }

    /// Look up a shape by its id (`"c-major"`).
    pub fn get(&self, id: &str) -> Option<&ChordShape> {
        self.shapes.values().find(|shape| shape.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChordShape> {
        self.shapes.values()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

/// Progression styles indexed by id, in catalog order.
#[derive(Debug, Clone)]
pub struct StyleCatalog {
    styles: IndexMap<String, ProgressionStyle>,
}

impl StyleCatalog {
    pub fn new(styles: Vec<ProgressionStyle>) -> Result<Self, FretboardError> {
        let mut index: IndexMap<String, ProgressionStyle> = IndexMap::new();
        for style in styles {
            if index.contains_key(&style.id) {
                return Err(FretboardError::DuplicateEntry(style.id));
            }
            index.insert(style.id.clone(), style);
        }
        Ok(Self { styles: index })
    }

    pub fn builtin() -> &'static StyleCatalog {
        static CATALOG: OnceLock<StyleCatalog> = OnceLock::new();
        CATALOG.get_or_init(|| Self {
            styles: builtin::progression_styles()
                .into_iter()
                .map(|style| (style.id.clone(), style))
                .collect(),
        })
    }

    pub fn from_yaml(content: &str) -> Result<Self, FretboardError> {
        let raw: Vec<RawProgressionStyle> = serde_yaml::from_str(content)
            .map_err(|e| FretboardError::CatalogError(e.to_string()))?;
        let styles = raw
            .into_iter()
            .map(ProgressionStyle::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!("Loaded {} progression styles", styles.len());
        Self::new(styles)
    }

    pub fn get(&self, id: &str) -> Option<&ProgressionStyle> {
        self.styles.get(id)
    }

    /// First style in catalog order, used when the caller names none.
    pub fn first(&self) -> Option<&ProgressionStyle> {
        self.styles.first().map(|(_, style)| style)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProgressionStyle> {
        self.styles.values()
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_contents() {
        let catalog = ChordCatalog::builtin();
        assert_eq!(catalog.len(), 20);
        assert_eq!(catalog.iter().next().map(|s| s.name.as_str()), Some("C"));
        for shape in catalog.iter() {
            assert_eq!(shape.strings.len(), STRING_COUNT);
        }
    }

    #[test]
    fn test_builtin_catalog_passes_validation() {
        let shapes: Vec<ChordShape> = ChordCatalog::builtin().iter().cloned().collect();
        assert!(ChordCatalog::new(shapes).is_ok());
        let styles: Vec<ProgressionStyle> = StyleCatalog::builtin().iter().cloned().collect();
        assert!(StyleCatalog::new(styles).is_ok());
    }

    #[test]
    fn test_find_shape_exact() {
        let catalog = ChordCatalog::builtin();
        let c = catalog.find_shape("C").unwrap();
        assert_eq!(c.id, "c-major");
        assert_eq!(c.strings, [-1, 3, 2, 0, 1, 0]);
        assert!(catalog.find_shape("c").is_none());
        assert!(catalog.find_shape("Dmaj7").is_none());
    }

    #[test]
    fn test_maj7_falls_back_to_triad() {
        let catalog = ChordCatalog::builtin();
        assert_eq!(catalog.find_shape_or_triad("Dmaj7").unwrap().name, "D");
        // a catalogued maj7 is preferred over its triad
        assert_eq!(catalog.find_shape_or_triad("Cmaj7").unwrap().name, "Cmaj7");
        assert!(catalog.find_shape_or_triad("G#maj7").is_none());
        assert!(catalog.find_shape_or_triad("Bdim").is_none());
    }

    #[test]
    fn test_get_by_id() {
        let catalog = ChordCatalog::builtin();
        assert_eq!(catalog.get("csharp-minor").unwrap().start_fret, Some(4));
        assert!(catalog.get("nope").is_none());
    }

    #[test]
    fn test_from_yaml_rejects_duplicates() {
        let yaml = r#"
- { id: a, name: A, strings: [0, 0, 2, 2, 2, 0], quality: major }
- { id: b, name: A, strings: [0, 0, 2, 2, 2, 0], quality: major }
"#;
        assert!(matches!(
            ChordCatalog::from_yaml(yaml),
            Err(FretboardError::DuplicateEntry(name)) if name == "A"
        ));
    }

    #[test]
    fn test_from_yaml_reports_bad_shape() {
        let yaml = "- { id: short, name: S, strings: [0, 0, 0], quality: other }";
        assert!(matches!(
            ChordCatalog::from_yaml(yaml),
            Err(FretboardError::InvalidShape { id, .. }) if id == "short"
        ));
        assert!(matches!(
            ChordCatalog::from_yaml("not: [a list"),
            Err(FretboardError::CatalogError(_))
        ));
    }

    #[test]
    fn test_from_yaml_optional_fields() {
        let yaml = r#"
- id: b5
  name: B5
  strings: [-1, 2, 4, 4, -1, -1]
  fingers: [null, 1, 3, 4, null, null]
  quality: other
  start-fret: 2
"#;
        let catalog = ChordCatalog::from_yaml(yaml).unwrap();
        let shape = catalog.find_shape("B5").unwrap();
        assert_eq!(shape.label, "B5");
        assert_eq!(shape.start_fret, Some(2));
        assert_eq!(shape.finger(2), Some(3));
        assert!(shape.tags.is_empty());
    }

    #[test]
    fn test_style_catalog() {
        let styles = StyleCatalog::builtin();
        assert_eq!(styles.len(), 3);
        assert_eq!(styles.first().unwrap().id, "jpop");
        let ballad = styles.get("ballad").unwrap();
        assert_eq!(ballad.patterns[1], vec!["ii", "V", "I", "Imaj7"]);
        assert!(styles.get("metal").is_none());
    }

    #[test]
    fn test_style_from_yaml() {
        let yaml = r#"
- id: blues
  label: Twelve Bar
  patterns:
    - [I7, IV7, I7, V7]
"#;
        let styles = StyleCatalog::from_yaml(yaml).unwrap();
        let blues = styles.get("blues").unwrap();
        assert_eq!(blues.label, "Twelve Bar");
        assert_eq!(blues.accent, "");
        assert_eq!(blues.patterns.len(), 1);
    }
}
