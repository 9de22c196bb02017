//! Tunable constants for the canvas controller.
//!
//! Defaults give the standard canvas feel; the `with_*` setters let
//! applications adjust it without touching the gesture code.

use crate::error::CanvasError;
use crate::geometry::{Margins, Rect};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sensitivity of the mouse drag-zoom (scale change per pixel of travel).
pub const DEFAULT_ZOOM_SENSITIVITY: f32 = 0.0015;
/// Lower bound for drag-zoom scale components.
pub const DEFAULT_MIN_SCALE: f32 = 0.2;
/// Upper bound for drag-zoom scale components.
pub const DEFAULT_MAX_SCALE: f32 = 2.0;
/// Scale factor applied per wheel step towards the user.
pub const DEFAULT_WHEEL_ZOOM_IN: f32 = 1.05;
/// Scale factor applied per wheel step away from the user.
pub const DEFAULT_WHEEL_ZOOM_OUT: f32 = 0.95;
/// Margin added on every side of the item bounds to form the scene rect.
pub const DEFAULT_SCENE_MARGIN: f32 = 1024.0 * 128.0;
/// Extra top margin reserved for node headers when framing.
pub const FRAME_HEADER_SPACE: f32 = 50.0;
/// Inner margin (per side, in screen pixels) kept free by fit-in-view.
pub const DEFAULT_FIT_VIEW_MARGIN: f32 = 2.0;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeGraphConfig {
    pub zoom_sensitivity: f32,
    pub min_scale: f32,
    pub max_scale: f32,
    pub wheel_zoom_in: f32,
    pub wheel_zoom_out: f32,
    pub scene_margin: f32,
    /// Scene rect used until the first node is added.
    pub initial_scene_rect: Rect,
    pub frame_margins: Margins,
    pub fit_view_margin: f32,
}

impl Default for NodeGraphConfig {
    fn default() -> Self {
        Self {
            zoom_sensitivity: DEFAULT_ZOOM_SENSITIVITY,
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: DEFAULT_MAX_SCALE,
            wheel_zoom_in: DEFAULT_WHEEL_ZOOM_IN,
            wheel_zoom_out: DEFAULT_WHEEL_ZOOM_OUT,
            scene_margin: DEFAULT_SCENE_MARGIN,
            initial_scene_rect: Rect::new(0.0, 0.0, 2000.0, 2000.0),
            frame_margins: Margins::new(64.0, 64.0 + FRAME_HEADER_SPACE, 64.0, 64.0),
            fit_view_margin: DEFAULT_FIT_VIEW_MARGIN,
        }
    }
}

impl NodeGraphConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_zoom_sensitivity(mut self, sensitivity: f32) -> Self {
        self.zoom_sensitivity = sensitivity;
        self
    }

    pub fn with_scale_range(mut self, min: f32, max: f32) -> Self {
        self.min_scale = min;
        self.max_scale = max;
        self
    }

    pub fn with_wheel_factors(mut self, zoom_in: f32, zoom_out: f32) -> Self {
        self.wheel_zoom_in = zoom_in;
        self.wheel_zoom_out = zoom_out;
        self
    }

    pub fn with_scene_margin(mut self, margin: f32) -> Self {
        self.scene_margin = margin;
        self
    }

    pub fn with_frame_margins(mut self, margins: Margins) -> Self {
        self.frame_margins = margins;
        self
    }

    /// Check that the values can drive the camera without producing a
    /// singular or non-finite transform.
    pub fn validate(&self) -> Result<(), CanvasError> {
        if !(self.min_scale > 0.0 && self.min_scale.is_finite()) {
            return Err(CanvasError::InvalidConfig(format!(
                "min_scale must be positive, got {}",
                self.min_scale
            )));
        }
        if !(self.max_scale >= self.min_scale && self.max_scale.is_finite()) {
            return Err(CanvasError::InvalidConfig(format!(
                "max_scale {} is below min_scale {}",
                self.max_scale, self.min_scale
            )));
        }
        if !self.zoom_sensitivity.is_finite() {
            return Err(CanvasError::InvalidConfig(
                "zoom_sensitivity must be finite".into(),
            ));
        }
        if !(self.wheel_zoom_in > 0.0 && self.wheel_zoom_out > 0.0) {
            return Err(CanvasError::InvalidConfig(
                "wheel zoom factors must be positive".into(),
            ));
        }
        Ok(())
    }
}
