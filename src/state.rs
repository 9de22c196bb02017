//! Gesture state machine.
//!
//! ```text
//! Idle -> Panning        (Alt + left/middle press)
//! Idle -> Zooming        (Alt + right press)
//! Idle -> DraggingNodes  (left press on a node)
//! Idle -> Selecting      (left press on empty canvas)
//!
//! Any -> Idle            (release)
//! ```
//!
//! Each non-idle variant owns the data its gesture needs, so there is no
//! half-initialised state between press and release.

use crate::geometry::Point;
use crate::pan::PanSession;
use crate::rubber_band::SelectionRegion;
use crate::zoom::DragZoomSession;

/// Camera movement mode, as seen by cursor and context-menu policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MovementState {
    #[default]
    None,
    Panning,
    Zooming,
}

/// The single active gesture, created on press and dropped on release.
#[derive(Debug, Clone, Default)]
pub enum Gesture {
    #[default]
    Idle,
    Panning(PanSession),
    Zooming(DragZoomSession),
    Selecting(SelectionRegion),
    DraggingNodes {
        /// Node under the press
        node: i32,
        /// Scene position of the pointer at the previous event
        last_scene: Point,
        /// Set once the pointer moves; a release without it is a click
        moved: bool,
        /// Shift was held at press time
        shift: bool,
    },
}

impl Gesture {
    pub fn movement_state(&self) -> MovementState {
        match self {
            Gesture::Panning(_) => MovementState::Panning,
            Gesture::Zooming(_) => MovementState::Zooming,
            Gesture::Idle | Gesture::Selecting(_) | Gesture::DraggingNodes { .. } => {
                MovementState::None
            }
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, Gesture::Idle)
    }

    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Gesture::Idle => "idle",
            Gesture::Panning(_) => "panning",
            Gesture::Zooming(_) => "zooming",
            Gesture::Selecting(_) => "selecting",
            Gesture::DraggingNodes { .. } => "dragging nodes",
        }
    }
}
