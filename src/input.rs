//! Input event vocabulary consumed by the gesture gate.
//!
//! Pointer buttons reuse Slint's [`PointerEventButton`]; modifier state is
//! passed explicitly because the host usually samples it from its own
//! keyboard tracking rather than from the pointer event.

pub use slint::platform::PointerEventButton;

/// Keyboard modifiers held during a pointer or key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub alt: bool,
    pub control: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers { alt: false, control: false, shift: false, meta: false };
    pub const ALT: Modifiers = Modifiers { alt: true, control: false, shift: false, meta: false };
    pub const SHIFT: Modifiers = Modifiers { alt: false, control: false, shift: true, meta: false };

    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }
}

/// What a press asks the gate to start, before any scene lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressIntent {
    /// Alt + primary or middle button
    Pan,
    /// Alt + secondary button
    DragZoom,
    /// Primary button without Alt: drag a node or a rubber band
    Select,
    /// Anything else
    Ignore,
}

impl PressIntent {
    pub fn classify(button: PointerEventButton, modifiers: Modifiers) -> Self {
        match button {
            PointerEventButton::Left | PointerEventButton::Middle if modifiers.alt => PressIntent::Pan,
            PointerEventButton::Right if modifiers.alt => PressIntent::DragZoom,
            PointerEventButton::Left => PressIntent::Select,
            _ => PressIntent::Ignore,
        }
    }
}

/// Wheel zoom factor for a scroll delta, or `None` for a zero delta.
pub fn wheel_zoom_factor(dx: f32, dy: f32, zoom_in: f32, zoom_out: f32) -> Option<f32> {
    let sum = dx + dy;
    if sum > 0.0 {
        Some(zoom_in)
    } else if sum < 0.0 {
        Some(zoom_out)
    } else {
        None
    }
}

/// Key text that triggers frame-selected.
pub fn is_frame_key(text: &str) -> bool {
    matches!(text, "f" | "F")
}
