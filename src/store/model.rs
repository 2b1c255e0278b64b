//! The to-do data model.
//!
//! A [`TodoList`] is an ordered sequence of [`TodoItem`]s. Insertion order
//! is display order, and an item's index in the list is its only identity:
//! removing an item shifts everything after it down by one. All mutating
//! operations are total — out-of-bounds indices are no-ops, never panics.

use serde::{Deserialize, Serialize};

/// One list entry: the text the user typed (trimmed) and a completion flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub text: String,
    pub completed: bool,
}

impl TodoItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            completed: false,
        }
    }
}

/// The ordered, in-memory list of items.
///
/// Serializes as a bare JSON array of `{text, completed}` objects, which is
/// exactly the snapshot format on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoList {
    items: Vec<TodoItem>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&TodoItem> {
        self.items.get(index)
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|i| i.completed).count()
    }

    /// Append a new uncompleted item with the trimmed text. Blank or
    /// whitespace-only text is rejected; returns whether an item was added.
    pub fn add(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.items.push(TodoItem::new(text));
        true
    }

    /// Set the completion flag of the item at `index`. Out of bounds is a
    /// no-op; returns whether anything changed position-wise.
    pub fn set_completed(&mut self, index: usize, value: bool) -> bool {
        match self.items.get_mut(index) {
            Some(item) => {
                item.completed = value;
                true
            }
            None => false,
        }
    }

    /// Flip the completion flag of the item at `index`.
    pub fn toggle(&mut self, index: usize) -> bool {
        match self.items.get_mut(index) {
            Some(item) => {
                item.completed = !item.completed;
                true
            }
            None => false,
        }
    }

    /// Remove and return the item at `index`, shifting every later item
    /// down by one. Out of bounds is a no-op.
    pub fn remove(&mut self, index: usize) -> Option<TodoItem> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_appends_trimmed_uncompleted_item() {
        let mut list = TodoList::new();
        assert!(list.add("  Buy milk  "));
        assert_eq!(list.len(), 1);
        let item = list.get(0).unwrap();
        assert_eq!(item.text, "Buy milk");
        assert!(!item.completed);
    }

    #[test]
    fn add_rejects_blank_text() {
        let mut list = TodoList::new();
        assert!(!list.add(""));
        assert!(!list.add("   "));
        assert!(!list.add("\t\n"));
        assert!(list.is_empty());
    }

    #[test]
    fn set_completed_round_trips() {
        let mut list = TodoList::new();
        list.add("task");
        assert!(list.set_completed(0, true));
        assert!(list.get(0).unwrap().completed);
        assert!(list.set_completed(0, false));
        assert!(!list.get(0).unwrap().completed);
    }

    #[test]
    fn toggle_flips_flag() {
        let mut list = TodoList::new();
        list.add("task");
        assert!(list.toggle(0));
        assert!(list.get(0).unwrap().completed);
        assert!(list.toggle(0));
        assert!(!list.get(0).unwrap().completed);
    }

    #[test]
    fn out_of_bounds_operations_are_noops() {
        let mut list = TodoList::new();
        list.add("only");
        assert!(!list.set_completed(1, true));
        assert!(!list.toggle(7));
        assert!(list.remove(1).is_none());
        assert_eq!(list.len(), 1);
        assert!(!list.get(0).unwrap().completed);
    }

    #[test]
    fn remove_shifts_later_items_down() {
        let mut list = TodoList::new();
        list.add("a");
        list.add("b");
        list.add("c");
        list.set_completed(2, true);

        let removed = list.remove(0).unwrap();
        assert_eq!(removed.text, "a");
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(0).unwrap().text, "b");
        assert_eq!(list.get(1).unwrap().text, "c");
        assert!(list.get(1).unwrap().completed);
    }

    #[test]
    fn completed_count_tracks_flags() {
        let mut list = TodoList::new();
        list.add("a");
        list.add("b");
        list.add("c");
        assert_eq!(list.completed_count(), 0);
        list.set_completed(0, true);
        list.set_completed(2, true);
        assert_eq!(list.completed_count(), 2);
    }

    #[test]
    fn snapshot_format_is_a_bare_json_array() {
        let mut list = TodoList::new();
        list.add("Buy milk");
        list.set_completed(0, true);
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, r#"[{"text":"Buy milk","completed":true}]"#);
    }
}
