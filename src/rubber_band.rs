//! Screen-space rubber-band rectangle for drag selection.

use crate::camera::AffineCamera;
use crate::geometry::{Point, Quad, Rect};

/// A rubber band being dragged out from `origin` to `current`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionRegion {
    pub origin: Point,
    pub current: Point,
}

impl SelectionRegion {
    /// Begin a region at `origin`; it starts out with zero size.
    pub fn start(origin: Point) -> Self {
        Self { origin, current: origin }
    }

    pub fn update(&mut self, pos: Point) {
        self.current = pos;
    }

    /// Normalized screen rect spanned by the drag.
    pub fn rect(&self) -> Rect {
        Rect::from_corners(self.origin, self.current)
    }

    /// A region without area selects nothing.
    pub fn is_empty(&self) -> bool {
        self.rect().is_empty()
    }

    /// Scene-space quad covered by the region under `camera`.
    pub fn to_scene(&self, camera: &AffineCamera) -> Option<Quad> {
        camera.map_rect_to_scene(&self.rect())
    }
}
