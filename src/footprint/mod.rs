//! Footprint model.
//!
//! A [`Footprint`] is the in-memory result of running a wizard: the pads,
//! graphic lines and texts it emitted, plus the reference and value fields
//! every footprint carries.
//!
//! ```text
//! Footprint
//! ├── reference   # "REF**" until placed on a board
//! ├── value       # e.g. "KF141R-2.54-4"
//! ├── texts       # extra user texts (e.g. "${REFERENCE}" on F.Fab)
//! ├── lines       # silkscreen, fab and courtyard strokes
//! └── pads        # copper
//! ```
//!
//! [`kicad`] renders a footprint as `.kicad_mod` text.

pub mod kicad;
pub mod primitives;

use serde::{Deserialize, Serialize};

pub use primitives::{Layer, Line, Pad, PadKind, PadShape, Point, Text, TextKind};

/// Placeholder reference designator used before a footprint is annotated.
pub const DEFAULT_REFERENCE: &str = "REF**";

/// Default size of the reference and value texts (mm).
const DEFAULT_TEXT_SIZE: f64 = 1.0;

/// Mounting attribute of a footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FootprintAttribute {
    /// Through-hole component.
    #[default]
    ThroughHole,
    /// Surface-mount component.
    Smd,
}

impl FootprintAttribute {
    /// Returns the board-file keyword for this attribute.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ThroughHole => "through_hole",
            Self::Smd => "smd",
        }
    }
}

/// A complete PCB footprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    /// Footprint name (e.g., "KF141R-2.54").
    pub name: String,

    /// Description of the footprint.
    #[serde(default)]
    pub description: String,

    /// Mounting attribute.
    #[serde(default)]
    pub attribute: FootprintAttribute,

    /// Reference designator field.
    pub reference: Text,

    /// Value field.
    pub value: Text,

    /// Extra text items.
    #[serde(default)]
    pub texts: Vec<Text>,

    /// Graphic lines.
    #[serde(default)]
    pub lines: Vec<Line>,

    /// Pads in the footprint.
    #[serde(default)]
    pub pads: Vec<Pad>,
}

impl Footprint {
    /// Creates a new empty footprint with the given name.
    ///
    /// The value field starts out holding the name; the reference holds
    /// [`DEFAULT_REFERENCE`].
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            reference: Text::new(
                TextKind::Reference,
                DEFAULT_REFERENCE,
                Point::default(),
                DEFAULT_TEXT_SIZE,
                Layer::FrontSilkscreen,
            ),
            value: Text::new(
                TextKind::Value,
                name.clone(),
                Point::default(),
                DEFAULT_TEXT_SIZE,
                Layer::FrontFab,
            ),
            name,
            description: String::new(),
            attribute: FootprintAttribute::default(),
            texts: Vec::new(),
            lines: Vec::new(),
            pads: Vec::new(),
        }
    }

    /// Adds a pad to the footprint.
    pub fn add_pad(&mut self, pad: Pad) {
        self.pads.push(pad);
    }

    /// Adds a line to the footprint.
    pub fn add_line(&mut self, line: Line) {
        self.lines.push(line);
    }

    /// Adds text to the footprint.
    pub fn add_text(&mut self, text: Text) {
        self.texts.push(text);
    }

    /// Returns the lines on `layer`.
    pub fn lines_on(&self, layer: Layer) -> impl Iterator<Item = &Line> {
        self.lines.iter().filter(move |l| l.layer == layer)
    }

    /// Returns all pads carrying `number`.
    pub fn pads_numbered<'a>(&'a self, number: &'a str) -> impl Iterator<Item = &'a Pad> {
        self.pads.iter().filter(move |p| p.number == number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_footprint_fields() {
        let fp = Footprint::new("KF141R-2.54");
        assert_eq!(fp.reference.text, DEFAULT_REFERENCE);
        assert_eq!(fp.reference.layer, Layer::FrontSilkscreen);
        assert_eq!(fp.value.text, "KF141R-2.54");
        assert_eq!(fp.value.layer, Layer::FrontFab);
        assert!(fp.pads.is_empty());
    }

    #[test]
    fn lines_filtered_by_layer() {
        let mut fp = Footprint::new("X");
        let a = Point::new(0.0, 0.0);
        let b = Point::new(1.0, 0.0);
        fp.add_line(Line::new(a, b, 0.12, Layer::FrontSilkscreen));
        fp.add_line(Line::new(a, b, 0.05, Layer::FrontCourtyard));
        fp.add_line(Line::new(b, a, 0.05, Layer::FrontCourtyard));
        assert_eq!(fp.lines_on(Layer::FrontCourtyard).count(), 2);
        assert_eq!(fp.lines_on(Layer::FrontFab).count(), 0);
    }

    #[test]
    fn pads_by_number() {
        let mut fp = Footprint::new("X");
        let template = Pad::through_hole(1.5, 1.5, 0.9, PadShape::Circle);
        fp.add_pad(template.placed("1", Point::new(0.0, 0.0)));
        fp.add_pad(template.placed("1", Point::new(0.0, 5.08)));
        fp.add_pad(template.placed("2", Point::new(2.54, 0.0)));
        assert_eq!(fp.pads_numbered("1").count(), 2);
        assert_eq!(fp.pads_numbered("3").count(), 0);
    }
}
