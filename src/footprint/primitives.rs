//! Footprint primitive types.
//!
//! These types represent the geometric elements that make up a footprint:
//! pads, graphic lines, and text. All coordinates and sizes are millimetres,
//! with Y growing downwards as in the board editor.

use serde::{Deserialize, Serialize};

/// A 2D point in millimetres.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate (mm).
    pub x: f64,
    /// Y coordinate (mm).
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A PCB pad (SMD or through-hole).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pad {
    /// Pad number shown on the board (e.g., "1", "2").
    pub number: String,

    /// Centre position in mm (from footprint origin).
    pub position: Point,

    /// Pad size in X direction (mm).
    pub size_x: f64,

    /// Pad size in Y direction (mm).
    pub size_y: f64,

    /// Copper shape.
    #[serde(default)]
    pub shape: PadShape,

    /// Through-hole or surface mount.
    #[serde(default)]
    pub kind: PadKind,

    /// Drill diameter for through-hole pads (mm). None for SMD pads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drill: Option<f64>,

    /// Layers the pad occupies.
    pub layers: Vec<Layer>,
}

impl Pad {
    /// Creates a new through-hole pad at the origin with no number.
    ///
    /// `size_x` is the horizontal extent, `size_y` the vertical one.
    #[must_use]
    pub fn through_hole(size_x: f64, size_y: f64, drill: f64, shape: PadShape) -> Self {
        Self {
            number: String::new(),
            position: Point::default(),
            size_x,
            size_y,
            shape,
            kind: PadKind::ThroughHole,
            drill: Some(drill),
            layers: vec![Layer::AllCopper, Layer::AllMask],
        }
    }

    /// Returns a copy of this pad moved to `position` and renumbered.
    #[must_use]
    pub fn placed(&self, number: impl Into<String>, position: Point) -> Self {
        Self {
            number: number.into(),
            position,
            ..self.clone()
        }
    }
}

/// Pad shape types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PadShape {
    /// Circular pad.
    #[default]
    Circle,
    /// Oval/oblong pad.
    Oval,
    /// Rectangular pad.
    Rect,
}

impl PadShape {
    /// Returns the board-file keyword for this shape.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Oval => "oval",
            Self::Rect => "rect",
        }
    }
}

/// Pad mounting kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PadKind {
    /// Plated through-hole.
    #[default]
    ThroughHole,
    /// Surface mount.
    Smd,
}

impl PadKind {
    /// Returns the board-file keyword for this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ThroughHole => "thru_hole",
            Self::Smd => "smd",
        }
    }
}

/// A graphic line segment on a non-copper layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// Start point (mm).
    pub start: Point,
    /// End point (mm).
    pub end: Point,
    /// Stroke width (mm).
    pub width: f64,
    /// Layer the line is on.
    pub layer: Layer,
}

impl Line {
    /// Creates a new line segment.
    #[must_use]
    pub const fn new(start: Point, end: Point, width: f64, layer: Layer) -> Self {
        Self {
            start,
            end,
            width,
            layer,
        }
    }

    /// Returns the line length (mm).
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.end.x - self.start.x).hypot(self.end.y - self.start.y)
    }
}

/// Role of a text item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextKind {
    /// Reference designator field.
    Reference,
    /// Value field.
    Value,
    /// Free user text.
    #[default]
    User,
}

impl TextKind {
    /// Returns the board-file keyword for this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Reference => "reference",
            Self::Value => "value",
            Self::User => "user",
        }
    }
}

/// A text string on a layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    /// Role of this text.
    #[serde(default)]
    pub kind: TextKind,
    /// Text content.
    pub text: String,
    /// Anchor position (mm).
    pub position: Point,
    /// Glyph height and width (mm).
    pub size: f64,
    /// Stroke thickness (mm).
    pub thickness: f64,
    /// Layer the text is on.
    pub layer: Layer,
}

impl Text {
    /// Stroke thickness as a fraction of glyph size.
    pub const THICKNESS_RATIO: f64 = 0.15;

    /// Creates a new text item with the default thickness ratio.
    #[must_use]
    pub fn new(kind: TextKind, text: impl Into<String>, position: Point, size: f64, layer: Layer) -> Self {
        Self {
            kind,
            text: text.into(),
            position,
            size,
            thickness: size * Self::THICKNESS_RATIO,
            layer,
        }
    }
}

/// Board layer identifiers used by footprints.
///
/// | Purpose | Layer |
/// |---------|-------|
/// | Through-hole pads | `AllCopper` + `AllMask` |
/// | SMD pads | `FrontCopper` + `FrontPaste` + `FrontMask` |
/// | Silkscreen | `FrontSilkscreen` |
/// | Assembly drawing | `FrontFab` |
/// | Courtyard | `FrontCourtyard` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Layer {
    /// Front copper.
    #[serde(rename = "F.Cu")]
    FrontCopper,
    /// Back copper.
    #[serde(rename = "B.Cu")]
    BackCopper,
    /// Every copper layer.
    #[serde(rename = "*.Cu")]
    AllCopper,
    /// Front solder paste.
    #[serde(rename = "F.Paste")]
    FrontPaste,
    /// Front solder mask.
    #[serde(rename = "F.Mask")]
    FrontMask,
    /// Both solder masks.
    #[serde(rename = "*.Mask")]
    AllMask,
    /// Front silkscreen.
    #[default]
    #[serde(rename = "F.SilkS")]
    FrontSilkscreen,
    /// Front fabrication (assembly) layer.
    #[serde(rename = "F.Fab")]
    FrontFab,
    /// Front courtyard.
    #[serde(rename = "F.CrtYd")]
    FrontCourtyard,
}

impl Layer {
    /// Returns the board layer name string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FrontCopper => "F.Cu",
            Self::BackCopper => "B.Cu",
            Self::AllCopper => "*.Cu",
            Self::FrontPaste => "F.Paste",
            Self::FrontMask => "F.Mask",
            Self::AllMask => "*.Mask",
            Self::FrontSilkscreen => "F.SilkS",
            Self::FrontFab => "F.Fab",
            Self::FrontCourtyard => "F.CrtYd",
        }
    }

    /// Parses a layer from its board name string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "F.Cu" => Some(Self::FrontCopper),
            "B.Cu" => Some(Self::BackCopper),
            "*.Cu" => Some(Self::AllCopper),
            "F.Paste" => Some(Self::FrontPaste),
            "F.Mask" => Some(Self::FrontMask),
            "*.Mask" => Some(Self::AllMask),
            "F.SilkS" => Some(Self::FrontSilkscreen),
            "F.Fab" => Some(Self::FrontFab),
            "F.CrtYd" => Some(Self::FrontCourtyard),
            _ => None,
        }
    }
}
