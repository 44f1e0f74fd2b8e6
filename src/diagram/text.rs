//! Plain-text chord boxes for terminals.
//!
//! ```text
//! C major
//! e o ‖---|---|---|
//! B   ‖-1-|---|---|
//! G o ‖---|---|---|
//! D   ‖---|-2-|---|
//! A   ‖---|---|-3-|
//! E x ‖---|---|---|
//! ```

use super::{DiagramGeometry, StringMarker};

const STRING_NAMES: [&str; 6] = ["E", "A", "D", "G", "B", "e"];

/// Render a laid-out diagram as text, highest string on top.
///
/// A fretted note that falls outside the window is marked `<` (below it)
/// or `>` (above it) in the side column.
pub fn render_text(label: &str, geometry: &DiagramGeometry) -> String {
    let mut out = String::new();
    out.push_str(label);
    out.push('\n');

    if let Some(fret_label) = &geometry.fret_label {
        out.push_str(&format!("    {}\n", fret_label.text));
    }

    let nut = if geometry.shows_nut { '‖' } else { '|' };
    for lane in geometry.lanes.iter().rev() {
        let name = STRING_NAMES.get(lane.string).copied().unwrap_or("?");
        let (side, cell) = match lane.marker {
            StringMarker::Open => ('o', None),
            StringMarker::Muted => ('x', None),
            StringMarker::Fretted { fret, finger } => {
                let glyph = finger
                    .and_then(|f| char::from_digit(f as u32, 10))
                    .unwrap_or('*');
                let index = fret as i32 - geometry.starting_fret as i32;
                let side = if index < 0 {
                    '<'
                } else if index >= geometry.fret_span as i32 {
                    '>'
                } else {
                    ' '
                };
                (side, Some((index, glyph)))
            }
        };

        out.push_str(&format!("{} {} {}", name, side, nut));
        for i in 0..geometry.fret_span as i32 {
            match cell {
                Some((index, glyph)) if index == i => out.push_str(&format!("-{}-|", glyph)),
                _ => out.push_str("---|"),
            }
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ChordCatalog, ChordShape, Quality};
    use crate::diagram::layout;

    #[test]
    fn test_render_c_major() {
        let shape = ChordCatalog::builtin().find_shape("C").unwrap();
        let text = render_text(&shape.label, &layout(shape));
        let expected = "C major\n\
                        e o ‖---|---|---|\n\
                        B   ‖-1-|---|---|\n\
                        G o ‖---|---|---|\n\
                        D   ‖---|-2-|---|\n\
                        A   ‖---|---|-3-|\n\
                        E x ‖---|---|---|\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_offset_window() {
        let shape = ChordCatalog::builtin().find_shape("C#m").unwrap();
        let text = render_text(&shape.label, &layout(shape));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "    4fr");
        assert_eq!(lines[2], "e   |-1-|---|---|");
        assert_eq!(lines[4], "G   |---|---|-4-|");
        assert_eq!(lines[7], "E x |---|---|---|");
    }

    fn shape_with(strings: [i8; 6], start_fret: Option<u8>) -> ChordShape {
        ChordShape {
            id: "test".to_string(),
            name: "T".to_string(),
            label: "T".to_string(),
            strings,
            fingers: None,
            quality: Quality::Other,
            tags: vec![],
            start_fret,
        }
    }

    #[test]
    fn test_notes_below_window_are_marked() {
        let shape = shape_with([3, -1, -1, -1, -1, 3], Some(5));
        let geometry = layout(&shape);
        assert_eq!(geometry.starting_fret, 5);
        let text = render_text(&shape.label, &geometry);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "    5fr");
        assert_eq!(lines[2], "e < |---|---|---|");
        assert_eq!(lines[3], "B x |---|---|---|");
        assert_eq!(lines[7], "E < |---|---|---|");
    }

    #[test]
    fn test_notes_above_window_are_marked() {
        let shape = shape_with([4, -1, -1, -1, -1, 1], None);
        let geometry = layout(&shape);
        assert_eq!((geometry.starting_fret, geometry.fret_span), (1, 3));
        let text = render_text(&shape.label, &geometry);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "e   ‖-*-|---|---|");
        assert_eq!(lines[6], "E > ‖---|---|---|");
    }
}
