//! Common test utilities for integration tests.

#![allow(dead_code)]

pub mod harness;

use std::cell::RefCell;
use std::rc::Rc;

use slint_node_canvas::{AffineTransform, CanvasHost, CursorIcon, Rect, SelectionManager};

/// Records every request the canvas makes of its host.
///
/// Cloning shares the underlying buffers, so a test can keep one handle
/// while the view owns another.
#[derive(Default, Clone)]
pub struct CallbackTracker {
    /// Cursor shapes in the order they were requested
    pub cursors: Rc<RefCell<Vec<CursorIcon>>>,
    /// Context-menu enable/disable requests
    pub context_menu_enabled: Rc<RefCell<Vec<bool>>>,
    /// Rubber band updates; `None` means hidden
    pub rubber_band: Rc<RefCell<Vec<Option<Rect>>>>,
    /// Transforms passed to every redraw
    pub renders: Rc<RefCell<Vec<AffineTransform>>>,
    /// Sorted selection after every selection change
    pub selection_changed: Rc<RefCell<Vec<Vec<i32>>>>,
}

impl CallbackTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all recorded callbacks.
    pub fn clear(&self) {
        self.cursors.borrow_mut().clear();
        self.context_menu_enabled.borrow_mut().clear();
        self.rubber_band.borrow_mut().clear();
        self.renders.borrow_mut().clear();
        self.selection_changed.borrow_mut().clear();
    }

    pub fn last_cursor(&self) -> Option<CursorIcon> {
        self.cursors.borrow().last().copied()
    }

    pub fn last_rubber_band(&self) -> Option<Option<Rect>> {
        self.rubber_band.borrow().last().copied()
    }

    pub fn render_count(&self) -> usize {
        self.renders.borrow().len()
    }

    pub fn last_render(&self) -> Option<AffineTransform> {
        self.renders.borrow().last().copied()
    }
}

impl CanvasHost for CallbackTracker {
    fn set_cursor(&mut self, cursor: CursorIcon) {
        self.cursors.borrow_mut().push(cursor);
    }

    fn set_context_menu_enabled(&mut self, enabled: bool) {
        self.context_menu_enabled.borrow_mut().push(enabled);
    }

    fn set_rubber_band(&mut self, rect: Option<Rect>) {
        self.rubber_band.borrow_mut().push(rect);
    }

    fn render(&mut self, transform: &AffineTransform) {
        self.renders.borrow_mut().push(*transform);
    }

    fn selection_changed(&mut self, selection: &SelectionManager) {
        self.selection_changed.borrow_mut().push(selection.sorted_ids());
    }
}

/// Approximate float comparison for geometry assertions.
#[track_caller]
pub fn assert_close(actual: f32, expected: f32, eps: f32) {
    assert!(
        (actual - expected).abs() <= eps,
        "expected {expected}, got {actual} (eps {eps})"
    );
}
