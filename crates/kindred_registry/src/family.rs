//! Parent/child links between persons.
//!
//! Every arena slot has a [`FamilyLinks`] record. Children are appended in
//! the order they were added; father and mother are set once, when the child
//! is added, and never change. Links are handles, never owning references,
//! so a person reachable through two parents is simply listed twice.

use kindred_foundation::PersonHandle;

/// Links of one person.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FamilyLinks {
    /// Children in the order they were added.
    pub children: Vec<PersonHandle>,
    /// Father, if one was given when this person was added.
    pub father: Option<PersonHandle>,
    /// Mother, if one was given when this person was added.
    pub mother: Option<PersonHandle>,
}

/// Family links for every arena slot, indexed by handle.
#[derive(Clone, Debug, Default)]
pub struct FamilyGraph {
    links: im::Vector<FamilyLinks>,
}

impl FamilyGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Returns true if there are no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Returns true if `handle` names a slot in this graph.
    #[must_use]
    pub fn contains(&self, handle: PersonHandle) -> bool {
        handle.slot() < self.links.len()
    }

    /// Appends the slot for a new person and wires it under its parents.
    ///
    /// `child` must be the next slot (equal to the current length). Parents
    /// that do not name an existing slot are dropped rather than linked.
    pub fn attach(
        &mut self,
        child: PersonHandle,
        father: Option<PersonHandle>,
        mother: Option<PersonHandle>,
    ) {
        debug_assert_eq!(child.slot(), self.links.len());

        let father = father.filter(|h| self.contains(*h));
        let mother = mother.filter(|h| self.contains(*h));

        for parent in [father, mother].into_iter().flatten() {
            if let Some(links) = self.links.get_mut(parent.slot()) {
                links.children.push(child);
            }
        }

        self.links.push_back(FamilyLinks {
            children: Vec::new(),
            father,
            mother,
        });
    }

    /// Returns the links for `handle`.
    #[must_use]
    pub fn get(&self, handle: PersonHandle) -> Option<&FamilyLinks> {
        self.links.get(handle.slot())
    }

    /// Returns the children of `handle`, empty if unknown.
    #[must_use]
    pub fn children(&self, handle: PersonHandle) -> &[PersonHandle] {
        self.get(handle)
            .map(|links| links.children.as_slice())
            .unwrap_or_default()
    }

    /// Returns the father of `handle`.
    #[must_use]
    pub fn father(&self, handle: PersonHandle) -> Option<PersonHandle> {
        self.get(handle).and_then(|links| links.father)
    }

    /// Returns the mother of `handle`.
    #[must_use]
    pub fn mother(&self, handle: PersonHandle) -> Option<PersonHandle> {
        self.get(handle).and_then(|links| links.mother)
    }
}
