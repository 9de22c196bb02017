//! Node items placed on the canvas.
//!
//! The canvas only needs a node's identity, title and scene-space bounds,
//! plus a way to move it. Rendering and any node business logic belong to
//! the application.

use crate::geometry::{Point, Rect, Vector};
use slint::SharedString;

/// Default node width in scene units.
pub const DEFAULT_NODE_WIDTH: f32 = 200.0;
/// Default node height in scene units.
pub const DEFAULT_NODE_HEIGHT: f32 = 25.0;

/// Trait for items that can live in a [`Scene`](crate::scene::Scene).
///
/// # Example
///
/// ```ignore
/// #[derive(Clone)]
/// struct ShaderNode {
///     id: i32,
///     name: SharedString,
///     pos: Point,
///     inputs: Vec<Port>,
/// }
///
/// impl SceneNode for ShaderNode {
///     fn id(&self) -> i32 { self.id }
///     fn title(&self) -> SharedString { self.name.clone() }
///     fn bounding_rect(&self) -> Rect { Rect::new(self.pos.x, self.pos.y, 160.0, 40.0) }
///     fn set_position(&mut self, pos: Point) { self.pos = pos; }
/// }
/// ```
pub trait SceneNode {
    fn id(&self) -> i32;
    fn title(&self) -> SharedString;
    /// Scene-space rect used for hit testing, selection and framing.
    fn bounding_rect(&self) -> Rect;
    /// Move the node so its bounding rect's top-left is at `pos`.
    fn set_position(&mut self, pos: Point);

    fn position(&self) -> Point {
        let r = self.bounding_rect();
        Point::new(r.x, r.y)
    }

    fn translate(&mut self, delta: Vector) {
        let pos = self.position() + delta;
        self.set_position(pos);
    }
}

/// Plain titled rectangle implementing [`SceneNode`].
#[derive(Debug, Clone, PartialEq)]
pub struct GraphNode {
    pub id: i32,
    pub title: SharedString,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl GraphNode {
    /// Create a node of the default size with its top-left at `(x, y)`.
    pub fn new(id: i32, title: impl Into<SharedString>, x: f32, y: f32) -> Self {
        Self {
            id,
            title: title.into(),
            x,
            y,
            width: DEFAULT_NODE_WIDTH,
            height: DEFAULT_NODE_HEIGHT,
        }
    }

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

impl SceneNode for GraphNode {
    fn id(&self) -> i32 {
        self.id
    }

    fn title(&self) -> SharedString {
        self.title.clone()
    }

    fn bounding_rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    fn set_position(&mut self, pos: Point) {
        self.x = pos.x;
        self.y = pos.y;
    }
}
