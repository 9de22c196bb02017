use std::collections::HashSet;
use slint::{VecModel, Model};

/// Set of selected node ids.
///
/// The scene owns one of these; a node's "selected" flag is membership in
/// this set.
#[derive(Debug, Default, Clone)]
pub struct SelectionManager {
    selected: HashSet<i32>,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a click on a node based on interaction modifiers
    ///
    /// Without Shift the click replaces the selection, unless the node is
    /// already the only selected one. With Shift it toggles membership.
    /// Returns true if the selection changed.
    pub fn handle_interaction(&mut self, id: i32, shift_held: bool) -> bool {
        if shift_held {
            if !self.selected.remove(&id) {
                self.selected.insert(id);
            }
            true
        } else if !(self.selected.len() == 1 && self.selected.contains(&id)) {
            self.selected.clear();
            self.selected.insert(id);
            true
        } else {
            false
        }
    }

    /// Select a node without touching the rest of the selection
    ///
    /// Returns true if the node was not selected before.
    pub fn select(&mut self, id: i32) -> bool {
        self.selected.insert(id)
    }

    /// Deselect a node; returns true if it was selected
    pub fn deselect(&mut self, id: i32) -> bool {
        self.selected.remove(&id)
    }

    /// Replace the current selection with a new set of IDs
    ///
    /// Returns true if the selection actually changed.
    pub fn replace_selection<I>(&mut self, ids: I) -> bool
    where
        I: IntoIterator<Item = i32>,
    {
        let next: HashSet<i32> = ids.into_iter().collect();
        if next == self.selected {
            return false;
        }
        self.selected = next;
        true
    }

    /// Check if an ID is selected
    pub fn contains(&self, id: i32) -> bool {
        self.selected.contains(&id)
    }

    /// Get an iterator over the selected IDs
    pub fn iter(&self) -> std::collections::hash_set::Iter<'_, i32> {
        self.selected.iter()
    }

    /// Selected IDs in ascending order, for stable output
    pub fn sorted_ids(&self) -> Vec<i32> {
        let mut ids: Vec<i32> = self.selected.iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Sync the selection into a Slint VecModel, in ascending id order
    pub fn sync_to_model(&self, model: &VecModel<i32>) {
        model.set_vec(self.sorted_ids());
    }

    /// Sync the selection from any Slint Model
    pub fn sync_from_model(&mut self, model: &dyn Model<Data = i32>) {
        self.selected = (0..model.row_count())
            .filter_map(|i| model.row_data(i))
            .collect();
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    // ========================================================================
    // handle_interaction() - Click Selection
    // ========================================================================

    #[test]
    fn test_click_selects_single() {
        let mut selection = SelectionManager::new();
        selection.handle_interaction(1, false);
        assert!(selection.contains(1));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_click_reports_change() {
        let mut selection = SelectionManager::new();
        assert!(selection.handle_interaction(1, false));
        assert!(!selection.handle_interaction(1, false));
        assert!(selection.handle_interaction(1, true));
    }

    #[test]
    fn test_click_replaces_selection() {
        let mut selection = SelectionManager::new();
        selection.handle_interaction(1, false);
        selection.handle_interaction(2, false);
        assert_eq!(selection.sorted_ids(), vec![2]);
    }

    #[test]
    fn test_click_on_member_of_multi_selection_collapses() {
        let mut selection = SelectionManager::new();
        selection.handle_interaction(1, true);
        selection.handle_interaction(2, true);
        selection.handle_interaction(1, false);
        assert_eq!(selection.sorted_ids(), vec![1]);
    }

    #[test]
    fn test_shift_click_toggles() {
        let mut selection = SelectionManager::new();
        selection.handle_interaction(1, false);
        selection.handle_interaction(2, true);
        assert_eq!(selection.sorted_ids(), vec![1, 2]);

        selection.handle_interaction(1, true);
        assert_eq!(selection.sorted_ids(), vec![2]);

        selection.handle_interaction(2, true);
        assert!(selection.is_empty());
    }

    // ========================================================================
    // select() / deselect() / replace_selection()
    // ========================================================================

    #[test]
    fn test_select_and_deselect_report_changes() {
        let mut selection = SelectionManager::new();
        assert!(selection.select(5));
        assert!(!selection.select(5));
        assert!(selection.deselect(5));
        assert!(!selection.deselect(5));
    }

    #[test]
    fn test_replace_selection_reports_change() {
        let mut selection = SelectionManager::new();
        assert!(selection.replace_selection(vec![1, 2, 3]));
        assert!(!selection.replace_selection(vec![3, 2, 1, 1]));
        assert!(selection.replace_selection(Vec::<i32>::new()));
        assert!(selection.is_empty());
    }

    // ========================================================================
    // Slint model sync
    // ========================================================================

    #[test]
    fn test_sync_to_model_replaces_contents_sorted() {
        let mut selection = SelectionManager::new();
        selection.replace_selection(vec![3, 1, 2]);

        let model: Rc<VecModel<i32>> = Rc::new(VecModel::from(vec![10, 20, 30, 40]));
        selection.sync_to_model(&model);

        let values: Vec<i32> = model.iter().collect();
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn test_sync_from_model_replaces_selection() {
        let mut selection = SelectionManager::new();
        selection.handle_interaction(10, false);

        let model: Rc<VecModel<i32>> = Rc::new(VecModel::from(vec![1, 2]));
        selection.sync_from_model(model.as_ref());

        assert_eq!(selection.sorted_ids(), vec![1, 2]);
    }
}
