//! Selection set arithmetic over a flat ordered list of ids.
//!
//! `SelectionModel` knows nothing about trees. It is handed an ordered list
//! of ids (the tree view's flattened order) and answers index-based
//! requests against it: single select, toggle, range, select-all, clear.
//!
//! Indices past the end of the list are a caller bug. Debug builds assert;
//! release builds ignore the request.

use std::collections::HashSet;

/// Selected ids plus the anchor used for range selection
#[derive(Debug, Clone, Default)]
pub struct SelectionModel {
    order: Vec<String>,
    selected: HashSet<String>,
    anchor: Option<usize>,
}

impl SelectionModel {
    /// Create an empty selection over `order`
    pub fn new(order: Vec<String>) -> Self {
        Self {
            order,
            selected: HashSet::new(),
            anchor: None,
        }
    }

    /// Replace the index space, keeping the selection.
    ///
    /// The anchor follows its id into the new order and is dropped when the
    /// id is no longer part of it. Used when a search filter narrows or
    /// widens the visible order.
    pub fn set_order(&mut self, order: Vec<String>) {
        let anchor_id = self.anchor.and_then(|i| self.order.get(i).cloned());
        self.order = order;
        self.anchor = anchor_id.and_then(|id| self.order.iter().position(|o| *o == id));
    }

    pub fn order(&self) -> &[String] {
        &self.order
    }

    /// Clear, then select the id at `index` and make it the anchor
    pub fn select_single(&mut self, index: usize) {
        let Some(id) = self.id_at(index) else {
            return;
        };
        self.selected.clear();
        self.selected.insert(id);
        self.anchor = Some(index);
    }

    /// Flip the id at `index`; the anchor moves to `index` either way
    pub fn toggle(&mut self, index: usize) {
        let Some(id) = self.id_at(index) else {
            return;
        };
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
        self.anchor = Some(index);
    }

    /// Add every id between `from` and `to` inclusive, in either direction.
    ///
    /// Does nothing until an anchor exists.
    pub fn select_range(&mut self, from: usize, to: usize) {
        if self.anchor.is_none() {
            return;
        }
        let (lo, hi) = if from <= to { (from, to) } else { (to, from) };
        debug_assert!(
            hi < self.order.len(),
            "range end {hi} out of bounds ({})",
            self.order.len()
        );
        if hi >= self.order.len() {
            return;
        }
        self.selected.extend(self.order[lo..=hi].iter().cloned());
    }

    /// Empty the selection and forget the anchor
    pub fn clear(&mut self) {
        self.selected.clear();
        self.anchor = None;
    }

    /// Select every id in the current order
    pub fn select_all(&mut self) {
        self.selected.extend(self.order.iter().cloned());
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    pub fn selected_ids(&self) -> &HashSet<String> {
        &self.selected
    }

    pub fn anchor(&self) -> Option<usize> {
        self.anchor
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Add ids that are not necessarily part of the order (cascade)
    pub fn insert_ids<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.selected.extend(ids);
    }

    /// Remove ids regardless of the order (cascade)
    pub fn remove_ids<'a, I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = &'a String>,
    {
        for id in ids {
            self.selected.remove(id);
        }
    }

    fn id_at(&self, index: usize) -> Option<String> {
        debug_assert!(
            index < self.order.len(),
            "index {index} out of bounds ({})",
            self.order.len()
        );
        self.order.get(index).cloned()
    }
}
