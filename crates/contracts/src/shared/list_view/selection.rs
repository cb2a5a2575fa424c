use std::collections::BTreeSet;

/// Record ids checked by the user for a bulk action
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet(BTreeSet<String>);

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, id: &str, checked: bool) {
        if checked {
            self.0.insert(id.to_string());
        } else {
            self.0.remove(id);
        }
    }

    pub fn toggle(&mut self, id: &str) {
        if !self.0.remove(id) {
            self.0.insert(id.to_string());
        }
    }

    /// Header checkbox: select every id of the page, or unselect them all
    /// when they are already all selected
    pub fn toggle_all<'a>(&mut self, ids: impl IntoIterator<Item = &'a str> + Clone) {
        let all_selected = ids.clone().into_iter().all(|id| self.0.contains(id));
        for id in ids {
            self.set(id, !all_selected);
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn ids(&self) -> Vec<String> {
        self.0.iter().cloned().collect()
    }
}
