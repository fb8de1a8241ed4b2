//! 2D affine transforms for the drawing context.
//!
//! A transform maps `(x, y)` to
//!
//! ```text
//! x' = a·x + b·y + c
//! y' = d·x + e·y + f
//! ```

use crate::footprint::Point;

/// Axis to mirror about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipAxis {
    /// Mirror left-right (negates X).
    Horizontal,
    /// Mirror top-bottom (negates Y).
    Vertical,
}

/// An affine transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    e: f64,
    f: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    /// The identity transform.
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 0.0,
            e: 1.0,
            f: 0.0,
        }
    }

    /// Translation by `(dx, dy)`.
    #[must_use]
    pub const fn translation(dx: f64, dy: f64) -> Self {
        Self {
            c: dx,
            f: dy,
            ..Self::identity()
        }
    }

    /// Rotation about the origin, in degrees.
    #[must_use]
    pub fn rotation(degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self {
            a: cos,
            b: -sin,
            c: 0.0,
            d: sin,
            e: cos,
            f: 0.0,
        }
    }

    /// Rotation about `centre`, in degrees.
    #[must_use]
    pub fn rotation_about(centre: Point, degrees: f64) -> Self {
        Self::translation(centre.x, centre.y)
            .compose(&Self::rotation(degrees))
            .compose(&Self::translation(-centre.x, -centre.y))
    }

    /// Mirror through `origin` along `axis`.
    #[must_use]
    pub fn flip(origin: Point, axis: FlipAxis) -> Self {
        let (sx, sy) = match axis {
            FlipAxis::Horizontal => (-1.0, 1.0),
            FlipAxis::Vertical => (1.0, -1.0),
        };
        Self::translation(origin.x, origin.y)
            .compose(&Self::scaling(sx, sy))
            .compose(&Self::translation(-origin.x, -origin.y))
    }

    /// Scaling about the origin.
    #[must_use]
    pub const fn scaling(sx: f64, sy: f64) -> Self {
        Self {
            a: sx,
            e: sy,
            ..Self::identity()
        }
    }

    /// Returns `self ∘ inner`: `inner` is applied first.
    #[must_use]
    pub fn compose(&self, inner: &Self) -> Self {
        Self {
            a: self.a.mul_add(inner.a, self.b * inner.d),
            b: self.a.mul_add(inner.b, self.b * inner.e),
            c: self.a.mul_add(inner.c, self.b.mul_add(inner.f, self.c)),
            d: self.d.mul_add(inner.a, self.e * inner.d),
            e: self.d.mul_add(inner.b, self.e * inner.e),
            f: self.d.mul_add(inner.c, self.e.mul_add(inner.f, self.f)),
        }
    }

    /// Applies the transform to a point.
    #[must_use]
    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            self.a.mul_add(p.x, self.b.mul_add(p.y, self.c)),
            self.d.mul_add(p.x, self.e.mul_add(p.y, self.f)),
        )
    }
}
