//! 2x3 affine transform mapping scene coordinates to screen coordinates.
//!
//! Component naming follows the usual toolkit matrix layout
//! `(m11, m12, m21, m22, dx, dy)`:
//!
//! ```text
//! x' = sx  * x + shx * y + tx
//! y' = shy * x + sy  * y + ty
//! ```
//!
//! [`AffineTransform::translate`] and [`AffineTransform::scale`] pre-multiply,
//! i.e. they are expressed in the *scene* coordinate system, which is what the
//! camera's anchor corrections rely on.

use crate::geometry::{Point, Quad, Rect, Vector};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AffineTransform {
    /// Horizontal scale (m11)
    pub sx: f32,
    /// Vertical shear (m12)
    pub shy: f32,
    /// Horizontal shear (m21)
    pub shx: f32,
    /// Vertical scale (m22)
    pub sy: f32,
    /// Horizontal translation (dx)
    pub tx: f32,
    /// Vertical translation (dy)
    pub ty: f32,
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl AffineTransform {
    pub const IDENTITY: AffineTransform = AffineTransform::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);

    pub const fn new(sx: f32, shy: f32, shx: f32, sy: f32, tx: f32, ty: f32) -> Self {
        Self { sx, shy, shx, sy, tx, ty }
    }

    pub const fn from_scale(sx: f32, sy: f32) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    pub fn determinant(&self) -> f32 {
        self.sx * self.sy - self.shx * self.shy
    }

    pub fn is_invertible(&self) -> bool {
        let det = self.determinant();
        det != 0.0 && det.is_finite()
    }

    /// Inverse transform, or `None` when the matrix is singular.
    pub fn inverse(&self) -> Option<AffineTransform> {
        if !self.is_invertible() {
            return None;
        }
        let inv_det = 1.0 / self.determinant();
        let sx = self.sy * inv_det;
        let shy = -self.shy * inv_det;
        let shx = -self.shx * inv_det;
        let sy = self.sx * inv_det;
        let tx = -(sx * self.tx + shx * self.ty);
        let ty = -(shy * self.tx + sy * self.ty);
        Some(AffineTransform::new(sx, shy, shx, sy, tx, ty))
    }

    pub fn map_point(&self, p: Point) -> Point {
        Point::new(
            self.sx * p.x + self.shx * p.y + self.tx,
            self.shy * p.x + self.sy * p.y + self.ty,
        )
    }

    /// Apply only the linear part; translations do not affect vectors.
    pub fn map_vector(&self, v: Vector) -> Vector {
        Vector::new(self.sx * v.x + self.shx * v.y, self.shy * v.x + self.sy * v.y)
    }

    pub fn map_rect(&self, r: &Rect) -> Quad {
        Quad::new(r.corners().map(|c| self.map_point(c)))
    }

    /// Translate by `(dx, dy)` in the source (scene) coordinate system.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        let shift = self.map_vector(Vector::new(dx, dy));
        self.tx += shift.x;
        self.ty += shift.y;
    }

    /// Scale by `(fx, fy)` in the source (scene) coordinate system.
    pub fn scale(&mut self, fx: f32, fy: f32) {
        self.sx *= fx;
        self.shy *= fx;
        self.shx *= fy;
        self.sy *= fy;
    }

    pub fn has_shear(&self) -> bool {
        self.shx != 0.0 || self.shy != 0.0
    }
}
