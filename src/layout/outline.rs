//! Body outline, courtyard and separator derivation.
//!
//! The outline of a terminal block grows with the number of columns:
//!
//! - width  = 2.54 + pad pitch × columns
//! - height = line pitch × (lines − 1) + 8.52
//!
//! It is centred at a fixed offset from the pad-array centre, since the
//! housing extends further on one side than the other. The courtyard is the
//! outline inflated by a margin, with each dimension rounded up to a grid.

use serde::{Deserialize, Serialize};

use crate::error::WizardResult;
use crate::footprint::Point;
use crate::layout::columns;

/// Extra outline width beyond the pad columns (mm).
pub const BODY_WIDTH_ALLOWANCE: f64 = 2.54;

/// Extra outline height beyond the line span (mm).
pub const BODY_HEIGHT_ALLOWANCE: f64 = 8.52;

/// Housing centre relative to the pad-array centre (mm).
pub const BODY_OFFSET: Point = Point::new(2.54 - 0.95, 13.6 / 2.0 - 5.5);

/// Slack for float noise when snapping to the grid.
const SNAP_TOLERANCE: f64 = 1e-9;

/// Courtyard margin and grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CourtyardRules {
    /// Total amount added to each outline dimension (mm).
    pub margin: f64,
    /// Grid the courtyard dimensions are rounded up to (mm). Non-positive
    /// disables snapping.
    pub grid: f64,
}

impl Default for CourtyardRules {
    fn default() -> Self {
        Self {
            margin: 0.5,
            grid: 0.1,
        }
    }
}

/// An axis-aligned rectangle given by centre and size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Centre (mm).
    pub centre: Point,
    /// Width (mm).
    pub width: f64,
    /// Height (mm).
    pub height: f64,
}

impl Rect {
    /// Creates a rectangle from centre and size.
    #[must_use]
    pub const fn new(centre: Point, width: f64, height: f64) -> Self {
        Self {
            centre,
            width,
            height,
        }
    }

    /// Left edge X.
    #[must_use]
    pub fn left(&self) -> f64 {
        self.centre.x - self.width / 2.0
    }

    /// Right edge X.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.centre.x + self.width / 2.0
    }

    /// Top edge Y (smaller Y).
    #[must_use]
    pub fn top(&self) -> f64 {
        self.centre.y - self.height / 2.0
    }

    /// Bottom edge Y.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.centre.y + self.height / 2.0
    }

    /// Returns the rectangle grown by `amount` in both width and height.
    #[must_use]
    pub fn inflated(&self, amount: f64) -> Self {
        Self::new(self.centre, self.width + amount, self.height + amount)
    }
}

/// Derived outline geometry for a staggered terminal block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyOutline {
    /// Housing outline.
    pub body: Rect,
    /// Courtyard rectangle.
    pub courtyard: Rect,
    /// X positions of the vertical separator lines.
    pub separators: Vec<f64>,
}

impl BodyOutline {
    /// Derives outline, courtyard and separators.
    ///
    /// # Arguments
    ///
    /// * `pad_count` - Overall pad count
    /// * `line_count` - Number of lines
    /// * `line_pitch` - Distance between lines (mm)
    /// * `pad_pitch` - Distance between columns (mm)
    /// * `rules` - Courtyard margin and grid
    ///
    /// # Errors
    ///
    /// Returns an error if the pads cannot be split evenly across the lines.
    #[allow(clippy::cast_precision_loss)]
    pub fn derive(
        pad_count: usize,
        line_count: usize,
        line_pitch: f64,
        pad_pitch: f64,
        rules: &CourtyardRules,
    ) -> WizardResult<Self> {
        let columns = columns(pad_count, line_count)?;

        let width = pad_pitch.mul_add(columns as f64, BODY_WIDTH_ALLOWANCE);
        let height = line_pitch.mul_add((line_count - 1) as f64, BODY_HEIGHT_ALLOWANCE);
        let body = Rect::new(BODY_OFFSET, width, height);

        let inflated = body.inflated(rules.margin);
        let courtyard = Rect::new(
            body.centre,
            snap_up(inflated.width, rules.grid),
            snap_up(inflated.height, rules.grid),
        );

        let left = body.left();
        let separators = (1..=columns)
            .map(|i| pad_pitch.mul_add(i as f64, left))
            .collect();

        Ok(Self {
            body,
            courtyard,
            separators,
        })
    }

    /// Returns the separator lines as (top, bottom) point pairs.
    pub fn separator_lines(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let top = self.body.top();
        let bottom = self.body.bottom();
        self.separators
            .iter()
            .map(move |&x| (Point::new(x, top), Point::new(x, bottom)))
    }
}

/// Rounds `value` up to the next multiple of `grid`.
///
/// Values already on the grid (within float noise) are left alone. A
/// non-positive grid returns `value` unchanged.
#[must_use]
pub fn snap_up(value: f64, grid: f64) -> f64 {
    if grid <= 0.0 {
        return value;
    }
    ((value / grid) - SNAP_TOLERANCE).ceil() * grid
}
