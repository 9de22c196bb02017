//! Grab-and-drag panning.

use crate::camera::AffineCamera;
use crate::geometry::{Point, Vector};

/// Tracks the previous pointer position of an active pan gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanSession {
    pub last: Point,
}

impl PanSession {
    pub fn begin(press: Point) -> Self {
        Self { last: press }
    }

    /// Pan the camera by the pointer's travel since the previous event so the
    /// content follows the pointer. Returns the applied screen delta.
    pub fn update(&mut self, pos: Point, camera: &mut AffineCamera) -> Vector {
        let delta = pos - self.last;
        camera.pan(delta);
        self.last = pos;
        delta
    }
}
