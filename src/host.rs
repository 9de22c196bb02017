//! Side effects the canvas asks of the surrounding widget.

use crate::geometry::Rect;
use crate::selection::SelectionManager;
use crate::transform::AffineTransform;

/// Cursor shapes the canvas requests during gestures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorIcon {
    #[default]
    Default,
    /// Shown while panning
    Move,
    /// Shown while drag-zooming
    ResizeVertical,
}

/// Trait implemented by the widget that hosts the canvas.
///
/// Every method has a no-op default so hosts only implement what they
/// render. Methods are called synchronously from inside the event handlers;
/// implementations must not call back into the view.
///
/// # Example
///
/// ```ignore
/// struct SlintHost(slint::Weak<MainWindow>);
///
/// impl CanvasHost for SlintHost {
///     fn render(&mut self, t: &AffineTransform) {
///         if let Some(w) = self.0.upgrade() {
///             w.set_zoom(t.sx);
///             w.set_pan_x(t.tx);
///             w.set_pan_y(t.ty);
///         }
///     }
/// }
/// ```
pub trait CanvasHost {
    fn set_cursor(&mut self, _cursor: CursorIcon) {}

    fn set_context_menu_enabled(&mut self, _enabled: bool) {}

    /// Show the rubber band at a screen rect, or hide it with `None`.
    fn set_rubber_band(&mut self, _rect: Option<Rect>) {}

    /// Redraw the canvas with the camera's current transform.
    fn render(&mut self, _transform: &AffineTransform) {}

    fn selection_changed(&mut self, _selection: &SelectionManager) {}
}

/// Host that ignores every request.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullHost;

impl CanvasHost for NullHost {}
