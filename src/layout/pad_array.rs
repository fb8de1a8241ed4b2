//! Staggered pad arrays.
//!
//! Pads are generated in zig-zag order: one pad per line, then advance one
//! pitch along the row and repeat. Odd lines are shifted by the stagger
//! offset, so with two lines the array looks like:
//!
//! ```text
//!   1     2     3     4        line 0
//!     1     2     3     4      line 1 (shifted by stagger)
//! ```
//!
//! Pads in the same column share a number.

use tracing::debug;

use crate::error::WizardResult;
use crate::footprint::{Pad, Point};
use crate::layout::columns;
use crate::wizard::draw::DrawingContext;

/// Computed position and number of a single pad in the array.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PadPlacement {
    /// Generation order (0-based).
    pub index: usize,
    /// Line (row) the pad sits on.
    pub line: usize,
    /// Pad number shared by every pad in the same column.
    pub number: usize,
    /// Untransformed centre position (mm).
    pub position: Point,
}

/// Pad array arranged in staggered lines in a Z pattern.
#[derive(Debug, Clone)]
pub struct StaggeredPadArray {
    pad: Pad,
    first_pad: Option<Pad>,
    pad_count: usize,
    line_count: usize,
    line_pitch: f64,
    pad_pitch: f64,
    stagger: f64,
    centre: Point,
    first_pad_number: usize,
}

impl StaggeredPadArray {
    /// Creates a pad array with no stagger, centred on the origin.
    ///
    /// # Arguments
    ///
    /// * `pad` - Template cloned for every pad
    /// * `pad_count` - Overall pad count
    /// * `line_count` - Number of lines
    /// * `line_pitch` - Distance between lines (mm)
    /// * `pad_pitch` - Distance between columns (mm)
    ///
    /// # Errors
    ///
    /// Returns an error if the pads cannot be split evenly across the lines
    /// (e.g. an odd pad count on two lines).
    pub fn new(
        pad: Pad,
        pad_count: usize,
        line_count: usize,
        line_pitch: f64,
        pad_pitch: f64,
    ) -> WizardResult<Self> {
        columns(pad_count, line_count)?;
        Ok(Self {
            pad,
            first_pad: None,
            pad_count,
            line_count,
            line_pitch,
            pad_pitch,
            stagger: 0.0,
            centre: Point::default(),
            first_pad_number: 1,
        })
    }

    /// Sets the X shift applied to odd lines (mm).
    #[must_use]
    pub const fn with_stagger(mut self, stagger: f64) -> Self {
        self.stagger = stagger;
        self
    }

    /// Sets the point the array is centred on.
    #[must_use]
    pub const fn with_centre(mut self, centre: Point) -> Self {
        self.centre = centre;
        self
    }

    /// Uses a different template for the very first pad (pin-1 marking).
    #[must_use]
    pub fn with_first_pad(mut self, pad: Pad) -> Self {
        self.first_pad = Some(pad);
        self
    }

    /// Sets the number given to the first column.
    #[must_use]
    pub const fn with_first_pad_number(mut self, number: usize) -> Self {
        self.first_pad_number = number;
        self
    }

    /// Returns the number of columns (pads per line).
    #[must_use]
    pub const fn columns(&self) -> usize {
        // Validated in `new`
        self.pad_count / self.line_count
    }

    /// Returns the centre of the first pad.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn first_pad_position(&self) -> Point {
        let span = self.pad_pitch.mul_add((self.columns() - 1) as f64, self.stagger);
        let x = self.centre.x - span / 2.0;
        let y = self.centre.y - self.line_pitch * (self.line_count - 1) as f64 / 2.0;
        Point::new(x, y)
    }

    /// Computes every pad position and number in generation order.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn placements(&self) -> Vec<PadPlacement> {
        let first = self.first_pad_position();

        (0..self.pad_count)
            .map(|index| {
                let line = index % self.line_count;
                let column = index / self.line_count;
                let shift = if line % 2 == 0 { 0.0 } else { self.stagger };
                let x = first.x + shift + column as f64 * self.pad_pitch;
                let y = self.line_pitch.mul_add(line as f64, first.y);
                PadPlacement {
                    index,
                    line,
                    number: self.first_pad_number + column,
                    position: Point::new(x, y),
                }
            })
            .collect()
    }

    /// Returns the template used for the pad at `index`.
    fn template(&self, index: usize) -> &Pad {
        match (&self.first_pad, index) {
            (Some(first), 0) => first,
            _ => &self.pad,
        }
    }

    /// Adds every pad to the drawing context, passing positions through its
    /// current transform.
    pub fn add_pads_to(&self, ctx: &mut DrawingContext) {
        debug!(
            pad_count = self.pad_count,
            line_count = self.line_count,
            line_pitch = self.line_pitch,
            pad_pitch = self.pad_pitch,
            stagger = self.stagger,
            "Laying out staggered pad array"
        );

        for placement in self.placements() {
            let position = ctx.transform_point(placement.position);
            let pad = self
                .template(placement.index)
                .placed(placement.number.to_string(), position);
            ctx.add_pad(pad);
        }
    }
}
