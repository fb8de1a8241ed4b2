//! Drawing context handed to wizards.
//!
//! The context owns the footprint under construction and tracks the current
//! layer, line width and transform. Geometry passed to [`DrawingContext::line`],
//! [`DrawingContext::draw_box`] and the text helpers goes through the
//! transform; primitives added with [`DrawingContext::add_pad`] and
//! [`DrawingContext::add_text`] are stored as given.

use serde::{Deserialize, Serialize};

use crate::footprint::{Footprint, Layer, Line, Pad, Point, Text, TextKind};
use crate::layout::CourtyardRules;
use crate::wizard::transform::{FlipAxis, Transform};

/// Line width used until a wizard sets its own (mm).
pub const DEFAULT_LINE_WIDTH: f64 = 0.15;

/// Line widths, text size and courtyard rules used by wizards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawingStyle {
    /// Silkscreen stroke width (mm).
    pub silkscreen_line_width: f64,
    /// Courtyard stroke width (mm).
    pub courtyard_line_width: f64,
    /// Reference/value text size (mm).
    pub text_size: f64,
    /// Courtyard margin and grid.
    pub courtyard: CourtyardRules,
}

impl Default for DrawingStyle {
    fn default() -> Self {
        Self {
            silkscreen_line_width: 0.12,
            courtyard_line_width: 0.05,
            text_size: 1.0,
            courtyard: CourtyardRules::default(),
        }
    }
}

/// Mutable drawing state for one footprint build.
#[derive(Debug, Clone)]
pub struct DrawingContext {
    footprint: Footprint,
    layer: Layer,
    line_width: f64,
    stack: Vec<Transform>,
    current: Transform,
}

impl DrawingContext {
    /// Creates a context drawing into `footprint` on the silkscreen.
    #[must_use]
    pub fn new(footprint: Footprint) -> Self {
        Self {
            footprint,
            layer: Layer::FrontSilkscreen,
            line_width: DEFAULT_LINE_WIDTH,
            stack: Vec::new(),
            current: Transform::identity(),
        }
    }

    /// Returns the footprint built so far.
    #[must_use]
    pub const fn footprint(&self) -> &Footprint {
        &self.footprint
    }

    /// Returns the footprint for direct edits (description, attributes).
    pub fn footprint_mut(&mut self) -> &mut Footprint {
        &mut self.footprint
    }

    /// Consumes the context, returning the footprint.
    #[must_use]
    pub fn into_footprint(self) -> Footprint {
        self.footprint
    }

    /// Returns the current layer.
    #[must_use]
    pub const fn layer(&self) -> Layer {
        self.layer
    }

    /// Sets the layer for subsequent lines.
    pub fn set_layer(&mut self, layer: Layer) {
        self.layer = layer;
    }

    /// Returns the current line width (mm).
    #[must_use]
    pub const fn line_width(&self) -> f64 {
        self.line_width
    }

    /// Sets the width for subsequent lines (mm).
    pub fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    // ---------------------------------------------------------------------
    // Transform stack
    // ---------------------------------------------------------------------

    /// Pushes a transform; it applies before every transform already pushed.
    pub fn push_transform(&mut self, transform: Transform) {
        self.stack.push(transform);
        self.current = self.current.compose(&transform);
    }

    /// Pops up to `count` transforms.
    pub fn pop_transform(&mut self, count: usize) {
        let keep = self.stack.len().saturating_sub(count);
        self.stack.truncate(keep);
        self.current = self
            .stack
            .iter()
            .fold(Transform::identity(), |acc, t| acc.compose(t));
    }

    /// Clears the transform stack.
    pub fn reset_transform(&mut self) {
        self.stack.clear();
        self.current = Transform::identity();
    }

    /// Returns the depth of the transform stack.
    #[must_use]
    pub fn transform_depth(&self) -> usize {
        self.stack.len()
    }

    /// Pushes a translation.
    pub fn translate(&mut self, x: f64, y: f64) {
        self.push_transform(Transform::translation(x, y));
    }

    /// Pushes a rotation about `(x, y)` in degrees.
    pub fn rotate(&mut self, x: f64, y: f64, degrees: f64) {
        self.push_transform(Transform::rotation_about(Point::new(x, y), degrees));
    }

    /// Pushes a mirror through `(x, y)`.
    pub fn flip(&mut self, x: f64, y: f64, axis: FlipAxis) {
        self.push_transform(Transform::flip(Point::new(x, y), axis));
    }

    /// Maps a point through the current transform.
    #[must_use]
    pub fn transform_point(&self, p: Point) -> Point {
        self.current.apply(p)
    }

    // ---------------------------------------------------------------------
    // Primitives
    // ---------------------------------------------------------------------

    /// Draws a line on the current layer with the current width.
    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        let start = self.transform_point(Point::new(x1, y1));
        let end = self.transform_point(Point::new(x2, y2));
        self.footprint
            .add_line(Line::new(start, end, self.line_width, self.layer));
    }

    /// Draws connected segments through `points`.
    pub fn polyline(&mut self, points: &[Point]) {
        for pair in points.windows(2) {
            self.line(pair[0].x, pair[0].y, pair[1].x, pair[1].y);
        }
    }

    /// Draws a `w` × `h` rectangle centred on `(x, y)`.
    pub fn draw_box(&mut self, x: f64, y: f64, w: f64, h: f64) {
        let (hw, hh) = (w / 2.0, h / 2.0);
        self.polyline(&[
            Point::new(x - hw, y - hh),
            Point::new(x + hw, y - hh),
            Point::new(x + hw, y + hh),
            Point::new(x - hw, y + hh),
            Point::new(x - hw, y - hh),
        ]);
    }

    /// Places the value field at `(x, y)` on the fab layer.
    pub fn value(&mut self, x: f64, y: f64, size: f64) {
        let position = self.transform_point(Point::new(x, y));
        let text = self.footprint.value.text.clone();
        self.footprint.value = Text::new(TextKind::Value, text, position, size, Layer::FrontFab);
    }

    /// Places the reference field at `(x, y)` on the silkscreen.
    pub fn reference(&mut self, x: f64, y: f64, size: f64) {
        let position = self.transform_point(Point::new(x, y));
        let text = self.footprint.reference.text.clone();
        self.footprint.reference = Text::new(
            TextKind::Reference,
            text,
            position,
            size,
            Layer::FrontSilkscreen,
        );
    }

    /// Adds a pad as given.
    pub fn add_pad(&mut self, pad: Pad) {
        self.footprint.add_pad(pad);
    }

    /// Adds a text item as given.
    pub fn add_text(&mut self, text: Text) {
        self.footprint.add_text(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> DrawingContext {
        DrawingContext::new(Footprint::new("T"))
    }

    #[test]
    fn box_is_four_closed_lines() {
        let mut ctx = ctx();
        ctx.set_layer(Layer::FrontCourtyard);
        ctx.set_line_width(0.05);
        ctx.draw_box(1.0, 2.0, 4.0, 6.0);
        let fp = ctx.into_footprint();
        assert_eq!(fp.lines.len(), 4);
        assert!(fp.lines.iter().all(|l| l.layer == Layer::FrontCourtyard));
        assert!(fp.lines.iter().all(|l| (l.width - 0.05).abs() < f64::EPSILON));
        assert_eq!(fp.lines[0].start, Point::new(-1.0, -1.0));
        assert_eq!(fp.lines[3].end, fp.lines[0].start);
        let perimeter: f64 = fp.lines.iter().map(Line::length).sum();
        assert!((perimeter - 20.0).abs() < 1e-9);
    }

    #[test]
    fn transform_stack_push_pop() {
        let mut ctx = ctx();
        ctx.translate(5.0, 0.0);
        ctx.translate(0.0, 3.0);
        assert_eq!(ctx.transform_depth(), 2);
        assert_eq!(ctx.transform_point(Point::default()), Point::new(5.0, 3.0));

        ctx.pop_transform(1);
        assert_eq!(ctx.transform_point(Point::default()), Point::new(5.0, 0.0));

        ctx.pop_transform(10);
        assert_eq!(ctx.transform_depth(), 0);
        assert_eq!(ctx.transform_point(Point::new(1.0, 1.0)), Point::new(1.0, 1.0));
    }

    #[test]
    fn lines_are_transformed() {
        let mut ctx = ctx();
        ctx.flip(0.0, 0.0, FlipAxis::Horizontal);
        ctx.line(1.0, 0.0, 2.0, 0.0);
        let line = ctx.footprint().lines[0];
        assert!((line.start.x + 1.0).abs() < 1e-9);
        assert!((line.end.x + 2.0).abs() < 1e-9);
    }

    #[test]
    fn value_and_reference_placement() {
        let mut ctx = ctx();
        ctx.footprint_mut().value.text = "KF141R-2.54-4".to_string();
        ctx.value(0.0, 7.8, 1.0);
        ctx.reference(0.0, -7.8, 1.0);
        let fp = ctx.into_footprint();
        assert_eq!(fp.value.text, "KF141R-2.54-4");
        assert_eq!(fp.value.layer, Layer::FrontFab);
        assert_eq!(fp.value.position, Point::new(0.0, 7.8));
        assert_eq!(fp.reference.layer, Layer::FrontSilkscreen);
        assert_eq!(fp.reference.position, Point::new(0.0, -7.8));
    }

    #[test]
    fn reset_clears_stack() {
        let mut ctx = ctx();
        ctx.rotate(0.0, 0.0, 90.0);
        ctx.reset_transform();
        assert_eq!(ctx.transform_point(Point::new(1.0, 0.0)), Point::new(1.0, 0.0));
    }
}
