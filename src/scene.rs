use std::collections::HashMap;

use tracing::{debug, warn};

use crate::config::NodeGraphConfig;
use crate::error::CanvasError;
use crate::geometry::{Margins, Point, Quad, Rect, Vector};
use crate::hit_test::{node_at, nodes_in_selection_area};
use crate::node::{GraphNode, SceneNode};
use crate::selection::SelectionManager;

/// Owns the canvas items, their selection state and the scene extent.
///
/// Items are kept in insertion order, which is also their stacking order
/// for hit testing. The scene rect grows to enclose every item plus a large
/// margin whenever an item is added, so the view can always be panned past
/// the outermost node.
///
/// Generic over N to allow application node types that implement
/// [`SceneNode`].
pub struct Scene<N = GraphNode> {
    nodes: HashMap<i32, N>,
    order: Vec<i32>,
    selection: SelectionManager,
    scene_rect: Rect,
    scene_margin: f32,
    /// Union of item rects as of the last add; stale after a move or removal
    items_bounds: Rect,
    bounds_stale: bool,
}

impl<N> Default for Scene<N> {
    fn default() -> Self {
        Self::with_config(&NodeGraphConfig::default())
    }
}

impl<N> Scene<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &NodeGraphConfig) -> Self {
        Self {
            nodes: HashMap::new(),
            order: Vec::new(),
            selection: SelectionManager::new(),
            scene_rect: config.initial_scene_rect,
            scene_margin: config.scene_margin,
            items_bounds: Rect::default(),
            bounds_stale: false,
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, id: i32) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn node(&self, id: i32) -> Option<&N> {
        self.nodes.get(&id)
    }

    /// Mutable access to a node; the scene rect is refreshed on the next add.
    pub fn node_mut(&mut self, id: i32) -> Option<&mut N> {
        self.bounds_stale = true;
        self.nodes.get_mut(&id)
    }

    /// Nodes in stacking order (bottom first)
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.order.iter().filter_map(move |id| self.nodes.get(id))
    }

    pub fn selection(&self) -> &SelectionManager {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut SelectionManager {
        &mut self.selection
    }

    pub fn is_selected(&self, id: i32) -> bool {
        self.selection.contains(id)
    }

    /// Current scrollable extent of the canvas
    pub fn scene_rect(&self) -> Rect {
        self.scene_rect
    }
}

impl<N> Scene<N>
where
    N: SceneNode,
{
    /// Add a node on top of the stack and grow the scene rect to cover it.
    pub fn add_node(&mut self, node: N) -> Result<(), CanvasError> {
        let id = node.id();
        if self.nodes.contains_key(&id) {
            warn!(id, "rejecting duplicate node id");
            return Err(CanvasError::DuplicateNode(id));
        }
        let rect = node.bounding_rect();
        self.nodes.insert(id, node);
        self.order.push(id);
        if self.bounds_stale {
            self.recompute_scene_rect();
        } else {
            self.items_bounds = self.items_bounds.united(&rect);
            self.apply_scene_margin();
        }
        Ok(())
    }

    /// Remove a node, dropping it from the selection as well.
    pub fn remove_node(&mut self, id: i32) -> Result<N, CanvasError> {
        let node = self.nodes.remove(&id).ok_or(CanvasError::NodeNotFound(id))?;
        self.order.retain(|&other| other != id);
        self.selection.deselect(id);
        // scene rect is recomputed on the next add
        self.bounds_stale = true;
        debug!(id, "node removed");
        Ok(node)
    }

    /// Union of all item rects expanded by the scene margin on every side.
    pub fn recompute_scene_rect(&mut self) {
        self.items_bounds = self.items_bounding_rect();
        self.bounds_stale = false;
        self.apply_scene_margin();
    }

    fn apply_scene_margin(&mut self) {
        self.scene_rect = self
            .items_bounds
            .margins_added(Margins::uniform(self.scene_margin));
        debug!(rect = ?self.scene_rect, "scene rect updated");
    }

    /// Union of every node's bounding rect; null if the scene is empty.
    pub fn items_bounding_rect(&self) -> Rect {
        self.nodes()
            .fold(Rect::default(), |acc, node| acc.united(&node.bounding_rect()))
    }

    /// Union of the selected nodes' bounding rects; null if nothing is selected.
    pub fn selection_bounds(&self) -> Rect {
        self.nodes()
            .filter(|node| self.selection.contains(node.id()))
            .map(|node| node.bounding_rect())
            .reduce(|acc, rect| acc.united(&rect))
            .unwrap_or_default()
    }

    /// Rect to hand to the viewport's fit operation: the selection bounds,
    /// or all items if nothing is selected, grown by `margins`.
    pub fn frame_target(&self, margins: Margins) -> Rect {
        let bounds = if self.selection.is_empty() {
            self.items_bounding_rect()
        } else {
            self.selection_bounds()
        };
        bounds.margins_added(margins)
    }

    /// Topmost node under a scene-space point
    pub fn node_at(&self, pos: Point) -> Option<i32> {
        node_at(pos, self.nodes())
    }

    /// Select exactly the nodes overlapping `area`, deselecting all others.
    ///
    /// Returns true if the selection changed.
    pub fn set_selection_area(&mut self, area: &Quad) -> bool {
        let hits = nodes_in_selection_area(area, self.nodes());
        self.selection.replace_selection(hits)
    }

    /// Translate every selected node by a scene-space delta.
    pub fn move_selected(&mut self, delta: Vector) {
        for id in self.selection.iter() {
            if let Some(node) = self.nodes.get_mut(id) {
                node.translate(delta);
                self.bounds_stale = true;
            }
        }
    }
}
