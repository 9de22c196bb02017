//! Mouse drag-zoom: scale the camera by dragging away from the press point.
//!
//! The scale multiplier is derived from the angle between the fixed diagonal
//! `(1, 1)` and the vector from the cursor back to the press point, times the
//! travel distance:
//!
//! ```text
//! orientation = (1, 1)
//! cursor      = (p0 + (1, 1)) - p
//! d           = dot(normalize(orientation), normalize(cursor))
//! global      = 1 - d * |p - p0| * sensitivity
//! ```
//!
//! Dragging towards the bottom-right therefore zooms in and dragging towards
//! the top-left zooms out; perpendicular drags barely change the scale. Both
//! axes are always computed from the scale captured at press time, so
//! repeated moves never compound.

use crate::camera::AffineCamera;
use crate::geometry::{Point, Vector};
use tracing::trace;

/// Added to a zero-length vector so normalization stays defined.
pub const ZERO_LENGTH_NUDGE: Vector = Vector::new(0.001, 0.001);

const DIAGONAL: Vector = Vector::new(1.0, 1.0);

/// Parameters for one drag-zoom step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragZoomParams {
    pub sensitivity: f32,
    pub min_scale: f32,
    pub max_scale: f32,
}

impl Default for DragZoomParams {
    fn default() -> Self {
        Self {
            sensitivity: crate::config::DEFAULT_ZOOM_SENSITIVITY,
            min_scale: crate::config::DEFAULT_MIN_SCALE,
            max_scale: crate::config::DEFAULT_MAX_SCALE,
        }
    }
}

/// State captured when a drag-zoom gesture starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragZoomSession {
    /// Screen position of the press; the scene point under it stays put.
    pub press: Point,
    /// Horizontal scale at press time.
    pub sx0: f32,
    /// Vertical scale at press time.
    pub sy0: f32,
}

fn nudge_if_zero(v: Vector) -> Vector {
    if v.length() == 0.0 {
        v + ZERO_LENGTH_NUDGE
    } else {
        v
    }
}

/// Multiplier applied to the press-time scale for a cursor at `cursor`.
pub fn drag_zoom_factor(press: Point, cursor: Point, sensitivity: f32) -> f32 {
    let orientation = nudge_if_zero((press + DIAGONAL) - press);
    let to_cursor = nudge_if_zero((press + DIAGONAL) - cursor);

    let d = match (orientation.normalized(), to_cursor.normalized()) {
        (Some(a), Some(b)) => a.dot(b),
        _ => 0.0,
    };
    let distance = press.distance_to(cursor);

    1.0 - d * distance * sensitivity
}

impl DragZoomSession {
    /// Start a session at `press`, snapshotting the camera's current scale.
    pub fn begin(press: Point, camera: &AffineCamera) -> Self {
        let (sx0, sy0) = camera.scale();
        Self { press, sx0, sy0 }
    }

    /// Clamped `(sx, sy)` for a cursor at `cursor`.
    pub fn target_scale(&self, cursor: Point, params: &DragZoomParams) -> (f32, f32) {
        let global = drag_zoom_factor(self.press, cursor, params.sensitivity);
        (
            (self.sx0 * global).clamp(params.min_scale, params.max_scale),
            (self.sy0 * global).clamp(params.min_scale, params.max_scale),
        )
    }

    /// Apply one move event to `camera`.
    ///
    /// The rescale happens around the view origin, so the scene point that
    /// was under the press position is captured before and after and the
    /// difference is translated back out.
    pub fn update(&self, cursor: Point, camera: &mut AffineCamera, params: &DragZoomParams) {
        let Some(origin_before) = camera.map_to_scene(self.press) else {
            return;
        };

        let (sx, sy) = self.target_scale(cursor, params);
        camera.set_scale(sx, sy);

        if let Some(origin_after) = camera.map_to_scene(self.press) {
            camera.translate_scene(origin_after - origin_before);
        }
        trace!(sx, sy, x = cursor.x, y = cursor.y, "drag zoom step");
    }
}
