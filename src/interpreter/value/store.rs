use indexmap::IndexMap;

use crate::interpreter::value::list::List;

/// Line terminator used by [`ListStore::render`].
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
/// Line terminator used by [`ListStore::render`].
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Name-keyed collection of lists.
///
/// No two entries share a name. Redefining a name replaces the stored list in
/// place: it keeps the display position of the first definition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListStore {
    lists: IndexMap<String, List>,
}

impl ListStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `list`, or replaces the list already stored under its name.
    ///
    /// # Example
    /// ```
    /// use lct::interpreter::value::{list::List, store::ListStore};
    ///
    /// let mut store = ListStore::new();
    /// store.add_or_replace(List::new("A", vec![1.into()]));
    /// store.add_or_replace(List::new("B", vec![2.into()]));
    /// store.add_or_replace(List::new("A", vec![3.into()]));
    ///
    /// let names: Vec<_> = store.all().map(|l| l.name.as_str()).collect();
    /// assert_eq!(names, ["A", "B"]);
    /// assert_eq!(store.get("A").unwrap().to_string(), "A = [3]");
    /// ```
    pub fn add_or_replace(&mut self, list: List) {
        self.lists.insert(list.name.clone(), list);
    }

    /// Looks up a list by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&List> {
        self.lists.get(name)
    }

    /// Iterates the stored lists in display order.
    ///
    /// The iterator borrows the store, so it can be recreated at any time and
    /// always yields the same sequence until the next mutation.
    pub fn all(&self) -> impl Iterator<Item = &List> + Clone + '_ {
        self.lists.values()
    }

    /// Number of stored lists.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    /// Returns `true` if no list has been stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Renders every list as `name = [e1,e2,...]`, one per line.
    ///
    /// Each line, including the last, ends with [`LINE_ENDING`]. An empty store
    /// renders as an empty string.
    #[must_use]
    pub fn render(&self) -> String {
        let mut output = String::new();
        for list in self.all() {
            output.push_str(&list.to_string());
            output.push_str(LINE_ENDING);
        }
        output
    }
}
