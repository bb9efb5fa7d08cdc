//! Tracking which items of a packing list have been packed

use std::collections::HashSet;

use serde::Serialize;

use super::PackingItem;

#[derive(Debug, Clone, Default, Serialize)]
pub struct PackingChecklist {
    items: Vec<PackingItem>,
    checked: HashSet<String>,
}

impl PackingChecklist {
    #[must_use]
    pub fn new(items: Vec<PackingItem>) -> Self {
        Self {
            items,
            checked: HashSet::new(),
        }
    }

    #[must_use]
    pub fn items(&self) -> &[PackingItem] {
        &self.items
    }

    /// Flip the packed state of an item, returning whether it is now packed
    ///
    /// Names not on the list are ignored.
    pub fn toggle(&mut self, name: &str) -> bool {
        if !self.items.iter().any(|item| item.name == name) {
            return false;
        }
        if self.checked.remove(name) {
            false
        } else {
            self.checked.insert(name.to_string());
            true
        }
    }

    #[must_use]
    pub fn is_checked(&self, name: &str) -> bool {
        self.checked.contains(name)
    }

    #[must_use]
    pub fn packed_count(&self) -> usize {
        self.checked.len()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.items.len()
    }

    /// Percentage of packed items, rounded to the nearest whole percent
    #[must_use]
    pub fn completion_rate(&self) -> u8 {
        if self.items.is_empty() {
            return 0;
        }
        let rate = (self.packed_count() as f64 / self.total() as f64 * 100.0).round();
        rate as u8
    }

    /// Essential items not packed yet
    #[must_use]
    pub fn essentials_remaining(&self) -> Vec<&PackingItem> {
        self.items
            .iter()
            .filter(|item| item.essential && !self.checked.contains(&item.name))
            .collect()
    }
}
