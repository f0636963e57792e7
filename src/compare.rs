//! Comparison selection set
//!
//! A bounded, insertion-ordered set of record ids chosen for side-by-side
//! comparison. The set stores bare ids; whether they still resolve against
//! the catalog is decided lazily by whichever view renders them.

/// Hard cap on side-by-side comparison slots.
pub const MAX_COMPARE: usize = 3;

#[derive(Debug, Clone, Default)]
pub struct CompareSet {
    ids: Vec<String>,
}

impl CompareSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle membership. Removing and re-adding an id moves it to the end.
    /// Adding a fourth id is a silent no-op: a soft cap, not an error.
    pub fn toggle(&mut self, id: &str) {
        if let Some(pos) = self.ids.iter().position(|i| i == id) {
            self.ids.remove(pos);
        } else if self.ids.len() < MAX_COMPARE {
            self.ids.push(id.to_string());
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|i| i == id)
    }

    /// Bulk replacement, used when the comparison screen edits the set.
    /// Duplicates are dropped and the cap is enforced.
    pub fn replace(&mut self, ids: impl IntoIterator<Item = String>) {
        self.ids.clear();
        for id in ids {
            if !self.contains(&id) && self.ids.len() < MAX_COMPARE {
                self.ids.push(id);
            }
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Drop the most recently added id, if any.
    pub fn pop(&mut self) {
        self.ids.pop();
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
