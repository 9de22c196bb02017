//! Context menu model. The host renders the menu; the canvas decides which
//! one applies and performs the chosen action.

/// Which context menu to show at a pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextMenu {
    /// Empty canvas
    Canvas,
    /// A node
    Node(i32),
}

/// Entries offered by the context menus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    FrameSelected,
    RemoveNode(i32),
}

impl ContextMenu {
    pub fn actions(&self) -> Vec<MenuAction> {
        match *self {
            ContextMenu::Canvas => vec![MenuAction::FrameSelected],
            ContextMenu::Node(id) => vec![MenuAction::RemoveNode(id)],
        }
    }
}

impl MenuAction {
    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::FrameSelected => "Frame Selected",
            MenuAction::RemoveNode(_) => "Remove",
        }
    }

    /// Keyboard shortcut text, if the action has one.
    pub fn shortcut(&self) -> Option<&'static str> {
        match self {
            MenuAction::FrameSelected => Some("F"),
            MenuAction::RemoveNode(_) => None,
        }
    }
}
