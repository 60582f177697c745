//! Identity index: persons sorted by identifier.
//!
//! Entries are kept in ascending identifier order so lookup is a binary
//! search. Inserts shift later entries; the persistent vector keeps that
//! cheap and makes clones share structure.

use kindred_foundation::{PersonHandle, PersonId};

/// Sorted `(id, handle)` pairs, one per registered person.
#[derive(Clone, Debug, Default)]
pub struct IdentityIndex {
    entries: im::Vector<(PersonId, PersonHandle)>,
}

impl IdentityIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binary search for `id`: `Ok` with its position or `Err` with the
    /// position it would be inserted at.
    fn search(&self, id: PersonId) -> Result<usize, usize> {
        self.entries.binary_search_by(|(probe, _)| probe.cmp(&id))
    }

    /// Inserts `id` at its sorted position.
    ///
    /// Returns false and leaves the index untouched if `id` is already
    /// present.
    pub fn insert(&mut self, id: PersonId, handle: PersonHandle) -> bool {
        match self.search(id) {
            Ok(_) => false,
            Err(pos) => {
                self.entries.insert(pos, (id, handle));
                true
            }
        }
    }

    /// Looks up the handle for `id`.
    #[must_use]
    pub fn find(&self, id: PersonId) -> Option<PersonHandle> {
        let pos = self.search(id).ok()?;
        self.entries.get(pos).map(|(_, handle)| *handle)
    }

    /// Returns true if `id` is present.
    #[must_use]
    pub fn contains(&self, id: PersonId) -> bool {
        self.search(id).is_ok()
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

    /// Iterates entries in ascending identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (PersonId, PersonHandle)> + '_ {
        self.entries.iter().copied()
    }
}
