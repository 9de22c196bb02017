//! The canvas camera: owns the scene→screen transform and the viewport size.
//!
//! Every camera operation keeps the transform invertible as long as the
//! caller passes non-zero scale factors; [`AffineCamera::map_to_scene`]
//! still returns `Option` so a singular matrix degrades to "no anchor"
//! instead of producing NaNs.

use crate::error::CanvasError;
use crate::geometry::{Point, Quad, Rect, Vector};
use crate::transform::AffineTransform;
use slint::LogicalSize;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AffineCamera {
    transform: AffineTransform,
    viewport: LogicalSize,
}

impl AffineCamera {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_transform(transform: AffineTransform) -> Self {
        Self {
            transform,
            viewport: LogicalSize::default(),
        }
    }

    pub fn transform(&self) -> &AffineTransform {
        &self.transform
    }

    pub fn set_transform(&mut self, transform: AffineTransform) {
        self.transform = transform;
    }

    /// Like [`set_transform`](Self::set_transform), but refuses a matrix that
    /// cannot be inverted, e.g. a restored view state with zero scale.
    pub fn try_set_transform(&mut self, transform: AffineTransform) -> Result<(), CanvasError> {
        if !transform.is_invertible() {
            return Err(CanvasError::SingularTransform);
        }
        self.transform = transform;
        Ok(())
    }

    /// Current (horizontal, vertical) scale.
    pub fn scale(&self) -> (f32, f32) {
        (self.transform.sx, self.transform.sy)
    }

    pub fn viewport_size(&self) -> LogicalSize {
        self.viewport
    }

    /// Called by the host whenever the widget is resized.
    pub fn set_viewport_size(&mut self, size: LogicalSize) {
        self.viewport = size;
    }

    /// Move the view by a screen-space delta. Scale and shear are untouched.
    pub fn pan(&mut self, delta: Vector) {
        self.transform.tx += delta.x;
        self.transform.ty += delta.y;
    }

    /// Translate by a delta expressed in scene units.
    pub fn translate_scene(&mut self, delta: Vector) {
        self.transform.translate(delta.x, delta.y);
    }

    /// Multiply both scale axes by `factor`, keeping the scene point under
    /// `anchor` fixed on screen. No clamping is applied.
    pub fn zoom_at_cursor(&mut self, factor: f32, anchor: Point) {
        let before = self.map_to_scene(anchor);
        self.transform.scale(factor, factor);
        if let (Some(before), Some(after)) = (before, self.map_to_scene(anchor)) {
            self.translate_scene(after - before);
        }
    }

    /// Replace the scale components, preserving shear and translation.
    ///
    /// The caller is responsible for clamping.
    pub fn set_scale(&mut self, sx: f32, sy: f32) {
        self.transform.sx = sx;
        self.transform.sy = sy;
    }

    pub fn map_to_scene(&self, screen: Point) -> Option<Point> {
        Some(self.transform.inverse()?.map_point(screen))
    }

    pub fn map_from_scene(&self, scene: Point) -> Point {
        self.transform.map_point(scene)
    }

    /// Map a screen rect to the scene-space quad covering the same pixels.
    pub fn map_rect_to_scene(&self, screen: &Rect) -> Option<Quad> {
        Some(self.transform.inverse()?.map_rect(screen))
    }

    /// Scene-space rect currently visible in the viewport.
    pub fn visible_scene_rect(&self) -> Option<Rect> {
        let viewport = Rect::new(0.0, 0.0, self.viewport.width, self.viewport.height);
        Some(self.map_rect_to_scene(&viewport)?.bounding_rect())
    }

    /// Fit `rect` into the viewport keeping its aspect ratio, centred, with
    /// `margin` screen pixels left free on every side. Shear is discarded.
    ///
    /// Returns `false` and leaves the camera alone when either the rect or
    /// the usable viewport area is empty.
    pub fn fit_in_view(&mut self, rect: &Rect, margin: f32) -> bool {
        let avail_w = self.viewport.width - 2.0 * margin;
        let avail_h = self.viewport.height - 2.0 * margin;
        if rect.is_empty() || avail_w <= 0.0 || avail_h <= 0.0 {
            return false;
        }

        let k = (avail_w / rect.width).min(avail_h / rect.height);
        let center = rect.center();
        let view_center = Point::new(self.viewport.width * 0.5, self.viewport.height * 0.5);
        self.transform = AffineTransform::new(
            k,
            0.0,
            0.0,
            k,
            view_center.x - k * center.x,
            view_center.y - k * center.y,
        );
        true
    }
}
