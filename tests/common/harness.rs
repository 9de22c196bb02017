//! Test harness for driving a canvas through its Slint-facing callbacks.
//!
//! Wires a [`NodeGraphController`] to a [`CallbackTracker`] host and offers
//! helpers for simulating pointer, wheel and keyboard input.

#![allow(dead_code)]

use super::CallbackTracker;
use slint::{Model, SharedString};
use slint_node_canvas::{
    AffineTransform, GraphNode, Modifiers, MovementState, NodeGraphConfig, NodeGraphController,
    NodeGraphView, Point, PointerEventButton,
};

/// Install a log subscriber once; `RUST_LOG=slint_node_canvas=trace` shows
/// gesture logs for failing tests.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub type TestController = NodeGraphController<GraphNode, CallbackTracker>;

/// Canvas with an 800×600 viewport and host tracking.
pub struct CanvasTestHarness {
    pub ctrl: TestController,
    pub tracker: CallbackTracker,
}

impl CanvasTestHarness {
    /// Empty canvas with the default configuration.
    pub fn new() -> Self {
        Self::with_config(NodeGraphConfig::default())
    }

    pub fn with_config(config: NodeGraphConfig) -> Self {
        init_tracing();
        let tracker = CallbackTracker::new();
        let view = NodeGraphView::try_with_config(config, tracker.clone()).unwrap();
        let ctrl = NodeGraphController::from_view(view);
        ctrl.viewport_resized_callback()(800.0, 600.0);
        tracker.clear();
        Self { ctrl, tracker }
    }

    /// Canvas holding `(id, x, y, width, height)` nodes.
    pub fn with_nodes(nodes: &[(i32, f32, f32, f32, f32)]) -> Self {
        let harness = Self::new();
        for &(id, x, y, w, h) in nodes {
            harness
                .ctrl
                .add_node(GraphNode::new(id, format!("Node {}", id), x, y).with_size(w, h))
                .unwrap();
        }
        harness.tracker.clear();
        harness
    }

    /// The selection test scene: A at (0,0,50,50) and B at (1000,1000,50,50).
    pub fn with_two_nodes() -> Self {
        Self::with_nodes(&[(1, 0.0, 0.0, 50.0, 50.0), (2, 1000.0, 1000.0, 50.0, 50.0)])
    }

    // === Input simulation ===

    pub fn press(&self, x: f32, y: f32, button: PointerEventButton, modifiers: Modifiers) {
        self.ctrl.pointer_pressed_callback()(x, y, button, modifiers);
    }

    pub fn move_to(&self, x: f32, y: f32) {
        self.ctrl.pointer_moved_callback()(x, y);
    }

    pub fn release(&self, x: f32, y: f32, button: PointerEventButton) {
        self.ctrl.pointer_released_callback()(x, y, button);
    }

    pub fn wheel(&self, x: f32, y: f32, dx: f32, dy: f32) {
        self.ctrl.scrolled_callback()(x, y, dx, dy);
    }

    pub fn key(&self, text: &str) -> bool {
        self.ctrl.key_pressed_callback()(SharedString::from(text))
    }

    /// Press, move through `path`, release at the last point.
    pub fn drag(
        &self,
        from: (f32, f32),
        path: &[(f32, f32)],
        button: PointerEventButton,
        modifiers: Modifiers,
    ) {
        self.press(from.0, from.1, button, modifiers);
        let mut last = from;
        for &(x, y) in path {
            self.move_to(x, y);
            last = (x, y);
        }
        self.release(last.0, last.1, button);
    }

    /// Alt + left drag.
    pub fn pan_drag(&self, from: (f32, f32), to: (f32, f32)) {
        self.drag(from, &[to], PointerEventButton::Left, Modifiers::ALT);
    }

    /// Alt + right drag.
    pub fn zoom_drag(&self, from: (f32, f32), path: &[(f32, f32)]) {
        self.drag(from, path, PointerEventButton::Right, Modifiers::ALT);
    }

    /// Plain left drag.
    pub fn select_drag(&self, from: (f32, f32), to: (f32, f32)) {
        self.drag(from, &[to], PointerEventButton::Left, Modifiers::NONE);
    }

    pub fn click(&self, x: f32, y: f32, modifiers: Modifiers) {
        self.drag((x, y), &[], PointerEventButton::Left, modifiers);
    }

    // === State inspection ===

    pub fn transform(&self) -> AffineTransform {
        *self.ctrl.view().borrow().camera().transform()
    }

    pub fn scale(&self) -> (f32, f32) {
        self.ctrl.view().borrow().camera().scale()
    }

    pub fn movement_state(&self) -> MovementState {
        self.ctrl.movement_state()
    }

    pub fn map_to_scene(&self, x: f32, y: f32) -> Point {
        self.ctrl
            .view()
            .borrow()
            .camera()
            .map_to_scene(Point::new(x, y))
            .unwrap()
    }

    pub fn map_from_scene(&self, x: f32, y: f32) -> Point {
        self.ctrl.view().borrow().camera().map_from_scene(Point::new(x, y))
    }

    /// Selected ids as mirrored into the Slint model.
    pub fn selected_ids(&self) -> Vec<i32> {
        self.ctrl.selection_model().iter().collect()
    }

    pub fn node_position(&self, id: i32) -> Option<Point> {
        use slint_node_canvas::SceneNode;
        self.ctrl.view().borrow().scene().node(id).map(|n| n.position())
    }
}
