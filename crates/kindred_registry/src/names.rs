//! Name index: every name ever held, sorted for prefix search.
//!
//! Entries are `(name, id)` pairs ordered by name, then identifier. A woman
//! renamed `n` times owns `n + 1` entries; old entries are never removed, so
//! former names stay searchable.

use std::cmp::Ordering;

use kindred_foundation::{PersonHandle, PersonId};

/// One `(name, id)` entry in the [`NameIndex`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameEntry {
    /// A name the person holds or once held.
    pub name: String,
    /// Identifier of the person.
    pub id: PersonId,
    /// Arena handle of the person.
    pub handle: PersonHandle,
}

impl NameEntry {
    fn key_cmp(&self, name: &str, id: PersonId) -> Ordering {
        self.name.as_str().cmp(name).then(self.id.cmp(&id))
    }
}

/// Sorted `(name, id)` pairs with idempotent insert and prefix range scan.
#[derive(Clone, Debug, Default)]
pub struct NameIndex {
    entries: im::Vector<NameEntry>,
}

impl NameIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `(name, id)` at its sorted position.
    ///
    /// Inserting a pair that is already present is a no-op and returns false.
    pub fn insert(&mut self, name: &str, id: PersonId, handle: PersonHandle) -> bool {
        match self.entries.binary_search_by(|probe| probe.key_cmp(name, id)) {
            Ok(_) => false,
            Err(pos) => {
                self.entries.insert(
                    pos,
                    NameEntry {
                        name: name.to_owned(),
                        id,
                        handle,
                    },
                );
                true
            }
        }
    }

    /// Position of the first entry whose name is not less than `prefix`.
    fn lower_bound(&self, prefix: &str) -> usize {
        // Never reports Equal, so the search always lands on Err(pos).
        match self.entries.binary_search_by(|probe| {
            if probe.name.as_str() < prefix {
                Ordering::Less
            } else {
                Ordering::Greater
            }
        }) {
            Ok(pos) | Err(pos) => pos,
        }
    }

    /// Returns every entry whose name starts with `prefix`, in index order.
    ///
    /// The same person shows up once per matching name. Matching is
    /// byte-wise and case sensitive; an empty prefix matches everything.
    pub fn prefix_query<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a NameEntry> + 'a {
        let start = self.lower_bound(prefix);
        (start..self.entries.len())
            .filter_map(move |pos| self.entries.get(pos))
            .take_while(move |entry| entry.name.starts_with(prefix))
    }

    /// Returns true if `(name, id)` is present.
    #[must_use]
    pub fn contains(&self, name: &str, id: PersonId) -> bool {
        self.entries
            .binary_search_by(|probe| probe.key_cmp(name, id))
            .is_ok()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the index is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates all entries in `(name, id)` order.
    pub fn iter(&self) -> impl Iterator<Item = &NameEntry> {
        self.entries.iter()
    }
}
