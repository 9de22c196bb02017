//! # Slint Node Canvas
//!
//! Camera and interaction layer for node-graph canvases hosted in Slint.
//! Handles the affine scene→screen transform, Alt-modified pan and
//! drag-zoom, wheel zoom, rubber-band and click selection, node dragging,
//! and framing the selection into the viewport.
//!
//! ## Features
//!
//! - **Affine Camera** - Full 2×3 transform with anchor-preserving zoom
//! - **Single Gesture Gate** - One active gesture at a time, typed per mode
//! - **Generic Nodes** - Any type implementing [`SceneNode`] can live in the scene
//! - **Host Trait** - Cursor, context-menu and redraw requests go through [`CanvasHost`]
//! - **Slint Integration** - [`NodeGraphController`] hands out ready-made callbacks
//!
//! ## Controls
//!
//! | Input | Action |
//! |-------|--------|
//! | Alt + left/middle drag | Pan |
//! | Alt + right drag | Drag zoom around the press point |
//! | Wheel | Zoom one step under the pointer |
//! | Left drag on canvas | Rubber-band select |
//! | Left drag on node | Move the selection |
//! | Shift + click | Toggle a node in the selection |
//! | F | Frame selected (or everything) |
//!
//! ## Rust Helpers
//!
//! - [`AffineCamera`] - Transform, viewport size, zoom and fit operations
//! - [`DragZoomSession`] / [`PanSession`] - Per-gesture camera updates
//! - [`SelectionRegion`] - Screen-space rubber band
//! - [`Scene`] - Node storage, scene rect and framing targets
//! - [`SelectionManager`] - Manage selection state with O(1) lookups
//! - [`quad_intersects_rect`] - Hit-test a rotated selection area against nodes

pub mod geometry;
pub mod transform;
pub mod camera;
pub mod zoom;
pub mod pan;
pub mod rubber_band;
pub mod selection;
pub mod node;
pub mod scene;
pub mod state;
pub mod input;
pub mod menu;
pub mod host;
pub mod config;
pub mod error;
pub mod controller;

pub use geometry::{Margins, Point, Quad, Rect, Vector};
pub use transform::AffineTransform;
pub use camera::AffineCamera;
pub use zoom::{drag_zoom_factor, DragZoomParams, DragZoomSession};
pub use pan::PanSession;
pub use rubber_band::SelectionRegion;
pub use hit_test::{node_at, nodes_in_selection_area, quad_intersects_rect};
pub use selection::SelectionManager;
pub use node::{GraphNode, SceneNode};
pub use scene::Scene;
pub use state::{Gesture, MovementState};
pub use input::{Modifiers, PointerEventButton, PressIntent};
pub use menu::{ContextMenu, MenuAction};
pub use host::{CanvasHost, CursorIcon, NullHost};
pub use config::NodeGraphConfig;
pub use error::CanvasError;
pub use controller::{NodeGraphController, NodeGraphView};
