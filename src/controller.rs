//! The canvas view: gesture gate plus a shareable controller for Slint callbacks.
//!
//! [`NodeGraphView`] is the state machine. It owns the camera, the scene and
//! the single active [`Gesture`], and routes every input event to the handler
//! for the current gesture. [`NodeGraphController`] wraps it in
//! `Rc<RefCell<_>>` and hands out closures that can be wired straight into
//! Slint callbacks, mirroring the selection into a `VecModel` as it changes.
//!
//! # Example
//!
//! ```ignore
//! use slint_node_canvas::{GraphNode, NodeGraphController};
//!
//! slint::include_modules!();
//!
//! fn main() {
//!     let window = MainWindow::new().unwrap();
//!     let ctrl = NodeGraphController::new();
//!
//!     ctrl.add_node(GraphNode::new(1, "Input", 0.0, 0.0)).unwrap();
//!     ctrl.add_node(GraphNode::new(2, "Output", 400.0, 120.0)).unwrap();
//!
//!     window.set_selected_ids(ctrl.selection_model().into());
//!     window.on_pointer_pressed(ctrl.pointer_pressed_callback());
//!     window.on_pointer_moved(ctrl.pointer_moved_callback());
//!     window.on_pointer_released(ctrl.pointer_released_callback());
//!     window.on_scrolled(ctrl.scrolled_callback());
//!     window.on_key_pressed(ctrl.key_pressed_callback());
//!     window.on_resized(ctrl.viewport_resized_callback());
//!
//!     window.run().unwrap();
//! }
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use slint::{LogicalSize, SharedString, VecModel};
use tracing::{debug, trace, warn};

use crate::camera::AffineCamera;
use crate::config::NodeGraphConfig;
use crate::error::CanvasError;
use crate::geometry::{Point, Rect, Vector};
use crate::host::{CanvasHost, CursorIcon, NullHost};
use crate::input::{is_frame_key, wheel_zoom_factor, Modifiers, PointerEventButton, PressIntent};
use crate::menu::{ContextMenu, MenuAction};
use crate::node::{GraphNode, SceneNode};
use crate::pan::PanSession;
use crate::rubber_band::SelectionRegion;
use crate::scene::Scene;
use crate::state::{Gesture, MovementState};
use crate::zoom::{DragZoomParams, DragZoomSession};

/// Interactive node-graph canvas.
///
/// All methods run to completion synchronously; a press is ignored while
/// another gesture is active, and a release always returns to idle without
/// rolling back what the gesture already changed.
pub struct NodeGraphView<N = GraphNode, H = NullHost> {
    camera: AffineCamera,
    scene: Scene<N>,
    gesture: Gesture,
    config: NodeGraphConfig,
    host: H,
    cursor: CursorIcon,
    context_menu_enabled: bool,
    last_pointer: Option<Point>,
    selection_dirty: bool,
}

impl Default for NodeGraphView {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeGraphView {
    pub fn new() -> Self {
        Self::with_host(NullHost)
    }
}

impl<N, H> NodeGraphView<N, H>
where
    N: SceneNode,
    H: CanvasHost,
{
    pub fn with_host(host: H) -> Self {
        Self::with_config(NodeGraphConfig::default(), host)
    }

    pub fn with_config(config: NodeGraphConfig, host: H) -> Self {
        Self {
            camera: AffineCamera::new(),
            scene: Scene::with_config(&config),
            gesture: Gesture::Idle,
            config,
            host,
            cursor: CursorIcon::Default,
            context_menu_enabled: true,
            last_pointer: None,
            selection_dirty: false,
        }
    }

    /// Like [`with_config`](Self::with_config), but rejects invalid settings.
    pub fn try_with_config(config: NodeGraphConfig, host: H) -> Result<Self, CanvasError> {
        config.validate()?;
        Ok(Self::with_config(config, host))
    }

    // === Accessors ===

    pub fn camera(&self) -> &AffineCamera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut AffineCamera {
        &mut self.camera
    }

    pub fn scene(&self) -> &Scene<N> {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene<N> {
        &mut self.scene
    }

    pub fn config(&self) -> &NodeGraphConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    pub fn movement_state(&self) -> MovementState {
        self.gesture.movement_state()
    }

    pub fn cursor(&self) -> CursorIcon {
        self.cursor
    }

    pub fn context_menu_enabled(&self) -> bool {
        self.context_menu_enabled
    }

    /// Screen rect of the rubber band while a drag selection is active.
    pub fn rubber_band(&self) -> Option<Rect> {
        match &self.gesture {
            Gesture::Selecting(region) => Some(region.rect()),
            _ => None,
        }
    }

    /// Last pointer position seen by a press or move.
    pub fn last_pointer(&self) -> Option<Point> {
        self.last_pointer
    }

    /// Returns whether the selection changed since the last call.
    pub fn take_selection_dirty(&mut self) -> bool {
        std::mem::take(&mut self.selection_dirty)
    }

    // === Scene management ===

    /// Add a node; the scene rect is recomputed to cover it.
    pub fn add_node(&mut self, node: N) -> Result<(), CanvasError> {
        self.scene.add_node(node)?;
        self.render();
        Ok(())
    }

    pub fn remove_node(&mut self, id: i32) -> Result<N, CanvasError> {
        let was_selected = self.scene.is_selected(id);
        let node = self.scene.remove_node(id)?;
        if was_selected {
            self.notify_selection_changed();
        }
        self.render();
        Ok(node)
    }

    pub fn frame_target(&self) -> Rect {
        self.scene.frame_target(self.config.frame_margins)
    }

    /// Fit the selection (or every node) into the viewport.
    pub fn frame_selected(&mut self) -> bool {
        let target = self.frame_target();
        let framed = self.camera.fit_in_view(&target, self.config.fit_view_margin);
        if framed {
            debug!(?target, "framed view");
            self.render();
        }
        framed
    }

    pub fn set_viewport_size(&mut self, width: f32, height: f32) {
        self.camera.set_viewport_size(LogicalSize::new(width, height));
        self.render();
    }

    /// Ask the host to redraw with the current camera transform.
    pub fn render(&mut self) {
        self.host.render(self.camera.transform());
    }

    // === Input handlers ===

    /// Handle a pointer press. Returns true if a gesture started.
    pub fn on_press(&mut self, pos: Point, button: PointerEventButton, modifiers: Modifiers) -> bool {
        if self.gesture.is_active() {
            warn!(active = self.gesture.name(), "ignoring press during active gesture");
            return false;
        }
        self.last_pointer = Some(pos);

        match PressIntent::classify(button, modifiers) {
            PressIntent::Pan => self.begin_pan(pos),
            PressIntent::DragZoom => self.begin_drag_zoom(pos),
            PressIntent::Select => self.begin_select(pos, modifiers),
            PressIntent::Ignore => return false,
        }
        debug!(gesture = self.gesture.name(), x = pos.x, y = pos.y, "gesture started");
        self.gesture.is_active()
    }

    /// Handle pointer movement, routed to the active gesture.
    pub fn on_move(&mut self, pos: Point) {
        if self.last_pointer.is_none() {
            // first move only establishes the baseline
            self.last_pointer = Some(pos);
            return;
        }
        self.last_pointer = Some(pos);

        let mut gesture = std::mem::take(&mut self.gesture);
        let redraw = match &mut gesture {
            Gesture::Idle => false,
            Gesture::Panning(session) => self.move_pan(session, pos),
            Gesture::Zooming(session) => self.move_drag_zoom(session, pos),
            Gesture::Selecting(region) => self.move_rubber_band(region, pos),
            Gesture::DraggingNodes { last_scene, moved, .. } => {
                self.move_nodes(last_scene, moved, pos)
            }
        };
        self.gesture = gesture;

        if redraw {
            self.render();
        }
    }

    /// Handle a pointer release: finish the active gesture and restore the
    /// default cursor and context-menu policy.
    pub fn on_release(&mut self, pos: Point, _button: PointerEventButton) {
        self.last_pointer = Some(pos);
        let gesture = std::mem::take(&mut self.gesture);
        match gesture {
            Gesture::Selecting(mut region) => {
                region.update(pos);
                self.commit_rubber_band(&region);
            }
            Gesture::DraggingNodes { node, moved: false, shift: false, .. } => {
                // a plain click narrows the selection to the clicked node
                if self.scene.selection_mut().replace_selection([node]) {
                    self.notify_selection_changed();
                }
            }
            _ => {}
        }
        if gesture.is_active() {
            debug!(gesture = gesture.name(), "gesture ended");
        }

        self.set_cursor(CursorIcon::Default);
        self.set_context_menu_enabled(true);
    }

    /// Handle a wheel event: one zoom step anchored under the pointer.
    ///
    /// Zooms in when `delta_x + delta_y` is positive and out when it is
    /// negative. A zero delta is ignored and does not redraw.
    pub fn on_wheel(&mut self, pos: Point, delta_x: f32, delta_y: f32) {
        let Some(factor) = wheel_zoom_factor(
            delta_x,
            delta_y,
            self.config.wheel_zoom_in,
            self.config.wheel_zoom_out,
        ) else {
            return;
        };
        self.camera.zoom_at_cursor(factor, pos);
        trace!(factor, x = pos.x, y = pos.y, "wheel zoom");
        self.render();
    }

    /// Handle key text. Returns true if the key was consumed.
    pub fn on_key_pressed(&mut self, text: &str) -> bool {
        if is_frame_key(text) {
            self.frame_selected();
            return true;
        }
        false
    }

    // === Context menu ===

    /// Which context menu to show at `pos`, if any.
    ///
    /// Suppressed while a camera gesture is in progress.
    pub fn context_menu_at(&self, pos: Point) -> Option<ContextMenu> {
        if !self.context_menu_enabled || self.movement_state() != MovementState::None {
            return None;
        }
        let scene_pos = self.camera.map_to_scene(pos)?;
        Some(match self.scene.node_at(scene_pos) {
            Some(id) => ContextMenu::Node(id),
            None => ContextMenu::Canvas,
        })
    }

    pub fn activate_menu_action(&mut self, action: MenuAction) -> Result<(), CanvasError> {
        match action {
            MenuAction::FrameSelected => {
                self.frame_selected();
            }
            MenuAction::RemoveNode(id) => {
                self.remove_node(id)?;
            }
        }
        Ok(())
    }

    // === Gesture start ===

    fn begin_pan(&mut self, pos: Point) {
        self.gesture = Gesture::Panning(PanSession::begin(pos));
        self.set_cursor(CursorIcon::Move);
        self.set_context_menu_enabled(false);
    }

    fn begin_drag_zoom(&mut self, pos: Point) {
        self.gesture = Gesture::Zooming(DragZoomSession::begin(pos, &self.camera));
        self.set_cursor(CursorIcon::ResizeVertical);
        self.set_context_menu_enabled(false);
    }

    fn begin_select(&mut self, pos: Point, modifiers: Modifiers) {
        let Some(scene_pos) = self.camera.map_to_scene(pos) else {
            return;
        };

        match self.scene.node_at(scene_pos) {
            Some(id) => {
                let selection = self.scene.selection_mut();
                // a plain press on a selected node keeps the group for dragging
                let changed = if modifiers.shift || !selection.contains(id) {
                    selection.handle_interaction(id, modifiers.shift)
                } else {
                    false
                };
                if changed {
                    self.notify_selection_changed();
                }
                if self.scene.is_selected(id) {
                    self.gesture = Gesture::DraggingNodes {
                        node: id,
                        last_scene: scene_pos,
                        moved: false,
                        shift: modifiers.shift,
                    };
                }
            }
            None => {
                let region = SelectionRegion::start(pos);
                self.host.set_rubber_band(Some(region.rect()));
                self.gesture = Gesture::Selecting(region);
            }
        }
    }

    // === Per-gesture move handlers ===

    fn move_pan(&mut self, session: &mut PanSession, pos: Point) -> bool {
        let delta = session.update(pos, &mut self.camera);
        trace!(dx = delta.x, dy = delta.y, "pan");
        delta != Vector::default()
    }

    fn move_drag_zoom(&mut self, session: &mut DragZoomSession, pos: Point) -> bool {
        let params = self.drag_zoom_params();
        session.update(pos, &mut self.camera, &params);
        true
    }

    fn move_rubber_band(&mut self, region: &mut SelectionRegion, pos: Point) -> bool {
        region.update(pos);
        self.host.set_rubber_band(Some(region.rect()));
        false
    }

    fn move_nodes(&mut self, last_scene: &mut Point, moved: &mut bool, pos: Point) -> bool {
        let Some(scene_pos) = self.camera.map_to_scene(pos) else {
            return false;
        };
        let delta = scene_pos - *last_scene;
        if delta == Vector::default() {
            return false;
        }
        *last_scene = scene_pos;
        *moved = true;
        self.scene.move_selected(delta);
        true
    }

    // === Helpers ===

    fn commit_rubber_band(&mut self, region: &SelectionRegion) {
        self.host.set_rubber_band(None);

        let changed = match region.to_scene(&self.camera) {
            Some(area) if !region.is_empty() => self.scene.set_selection_area(&area),
            _ => self.scene.selection_mut().replace_selection(std::iter::empty()),
        };
        debug!(
            selected = self.scene.selection().len(),
            rect = ?region.rect(),
            "rubber band committed"
        );
        if changed {
            self.notify_selection_changed();
        }
    }

    fn drag_zoom_params(&self) -> DragZoomParams {
        DragZoomParams {
            sensitivity: self.config.zoom_sensitivity,
            min_scale: self.config.min_scale,
            max_scale: self.config.max_scale,
        }
    }

    fn notify_selection_changed(&mut self) {
        self.selection_dirty = true;
        self.host.selection_changed(self.scene.selection());
    }

    fn set_cursor(&mut self, cursor: CursorIcon) {
        if self.cursor != cursor {
            self.cursor = cursor;
            self.host.set_cursor(cursor);
        }
    }

    fn set_context_menu_enabled(&mut self, enabled: bool) {
        if self.context_menu_enabled != enabled {
            self.context_menu_enabled = enabled;
            self.host.set_context_menu_enabled(enabled);
        }
    }
}

/// Shared handle to a [`NodeGraphView`] that produces Slint callbacks.
///
/// Clone this controller to share it across callbacks. The selection is
/// mirrored into [`selection_model`](Self::selection_model) after every
/// event that changes it.
pub struct NodeGraphController<N = GraphNode, H = NullHost> {
    view: Rc<RefCell<NodeGraphView<N, H>>>,
    selection_model: Rc<VecModel<i32>>,
}

impl<N, H> Clone for NodeGraphController<N, H> {
    fn clone(&self) -> Self {
        Self {
            view: self.view.clone(),
            selection_model: self.selection_model.clone(),
        }
    }
}

impl Default for NodeGraphController {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeGraphController {
    pub fn new() -> Self {
        Self::from_view(NodeGraphView::new())
    }
}

impl<N, H> NodeGraphController<N, H>
where
    N: SceneNode + 'static,
    H: CanvasHost + 'static,
{
    pub fn from_view(view: NodeGraphView<N, H>) -> Self {
        Self {
            view: Rc::new(RefCell::new(view)),
            selection_model: Rc::new(VecModel::default()),
        }
    }

    /// Get access to the underlying view.
    pub fn view(&self) -> Rc<RefCell<NodeGraphView<N, H>>> {
        self.view.clone()
    }

    /// Model of selected node ids, kept in ascending order.
    pub fn selection_model(&self) -> Rc<VecModel<i32>> {
        self.selection_model.clone()
    }

    /// Run `f` against the view, then mirror the selection if it changed.
    pub fn with_view<R>(&self, f: impl FnOnce(&mut NodeGraphView<N, H>) -> R) -> R {
        let mut view = self.view.borrow_mut();
        let result = f(&mut view);
        if view.take_selection_dirty() {
            view.scene().selection().sync_to_model(&self.selection_model);
        }
        result
    }

    pub fn add_node(&self, node: N) -> Result<(), CanvasError> {
        self.with_view(|v| v.add_node(node))
    }

    pub fn remove_node(&self, id: i32) -> Result<N, CanvasError> {
        self.with_view(|v| v.remove_node(id))
    }

    pub fn frame_selected(&self) -> bool {
        self.with_view(|v| v.frame_selected())
    }

    pub fn movement_state(&self) -> MovementState {
        self.view.borrow().movement_state()
    }

    // === Callback factories ===

    /// Returns a callback for `pointer-pressed(x, y, button, modifiers)`.
    pub fn pointer_pressed_callback(&self) -> impl Fn(f32, f32, PointerEventButton, Modifiers) {
        let ctrl = self.clone();
        move |x, y, button, modifiers| {
            ctrl.with_view(|v| v.on_press(Point::new(x, y), button, modifiers));
        }
    }

    /// Returns a callback for `pointer-moved(x, y)`.
    pub fn pointer_moved_callback(&self) -> impl Fn(f32, f32) {
        let ctrl = self.clone();
        move |x, y| ctrl.with_view(|v| v.on_move(Point::new(x, y)))
    }

    /// Returns a callback for `pointer-released(x, y, button)`.
    pub fn pointer_released_callback(&self) -> impl Fn(f32, f32, PointerEventButton) {
        let ctrl = self.clone();
        move |x, y, button| ctrl.with_view(|v| v.on_release(Point::new(x, y), button))
    }

    /// Returns a callback for `scrolled(x, y, delta_x, delta_y)`.
    pub fn scrolled_callback(&self) -> impl Fn(f32, f32, f32, f32) {
        let ctrl = self.clone();
        move |x, y, dx, dy| ctrl.with_view(|v| v.on_wheel(Point::new(x, y), dx, dy))
    }

    /// Returns a callback for `key-pressed(text) -> bool`.
    pub fn key_pressed_callback(&self) -> impl Fn(SharedString) -> bool {
        let ctrl = self.clone();
        move |text| ctrl.with_view(|v| v.on_key_pressed(text.as_str()))
    }

    /// Returns a callback for `resized(width, height)`.
    pub fn viewport_resized_callback(&self) -> impl Fn(f32, f32) {
        let ctrl = self.clone();
        move |w, h| ctrl.with_view(|v| v.set_viewport_size(w, h))
    }
}
