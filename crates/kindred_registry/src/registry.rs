//! The person registry.
//!
//! `Registry` owns every person in a single arena and keeps three views in
//! step with it: the identity index, the name index, and the family graph.
//! Callers only ever hold [`PersonHandle`]s.
//!
//! Clone is cheap: all storage is persistent vectors with structural
//! sharing, so a clone is a consistent snapshot.

use std::fmt;

use kindred_foundation::{
    Error, ErrorContext, Person, PersonHandle, PersonId, Relation, Result,
};
use tracing::{debug, warn};

use crate::config::RegistryConfig;
use crate::family::FamilyGraph;
use crate::identity::IdentityIndex;
use crate::names::NameIndex;
use crate::printer::DescendantPrinter;
use crate::relatives::RelationshipFinder;

/// In-memory registry of persons and their parent/child links.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    /// Arena of registry-owned persons, indexed by handle.
    persons: im::Vector<Person>,
    /// Handles sorted by identifier.
    by_id: IdentityIndex,
    /// Every name ever held, sorted by `(name, id)`.
    by_name: NameIndex,
    /// Parent/child links, indexed by handle.
    family: FamilyGraph,
    config: RegistryConfig,
}

impl Registry {
    /// Creates an empty registry with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry with the given configuration.
    #[must_use]
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Registers a copy of `person` under the given parents.
    ///
    /// Returns false, leaving the registry untouched, if a person with the
    /// same identifier is already registered. Parent handles this registry
    /// did not issue are ignored. A woman's existing former names are kept
    /// and indexed along with her current name.
    pub fn add(
        &mut self,
        person: &Person,
        father: Option<PersonHandle>,
        mother: Option<PersonHandle>,
    ) -> bool {
        let id = person.id();
        if self.by_id.contains(id) {
            debug!(%id, "rejected duplicate person");
            return false;
        }

        let Ok(slot) = u32::try_from(self.persons.len()) else {
            warn!(%id, "registry arena is full");
            return false;
        };
        let handle = PersonHandle::new(slot);

        let record = person.clone();
        for name in record.names() {
            self.by_name.insert(name, id, handle);
        }
        self.by_id.insert(id, handle);
        self.family.attach(handle, father, mother);
        self.persons.push_back(record);

        debug!(%id, %handle, "added person");
        true
    }

    /// Looks up a person by identifier.
    #[must_use]
    pub fn find_by_id(&self, id: PersonId) -> Option<PersonHandle> {
        self.by_id.find(id)
    }

    /// Looks up a person by identifier, failing if absent.
    ///
    /// # Errors
    ///
    /// Returns `PersonNotFound` if no person has this identifier.
    pub fn resolve(&self, id: PersonId) -> Result<PersonHandle> {
        self.find_by_id(id)
            .ok_or_else(|| Error::person_not_found(id))
    }

    /// Returns every person holding, or having held, a name that starts
    /// with `prefix`.
    ///
    /// Each person appears once, in ascending identifier order.
    #[must_use]
    pub fn find_by_name(&self, prefix: &str) -> Vec<PersonHandle> {
        let mut found: Vec<(PersonId, PersonHandle)> = self
            .by_name
            .prefix_query(prefix)
            .map(|entry| (entry.id, entry.handle))
            .collect();
        found.sort_unstable_by_key(|(id, _)| *id);
        found.dedup_by_key(|(id, _)| *id);
        found.into_iter().map(|(_, handle)| handle).collect()
    }

    /// Renames a woman.
    ///
    /// Her current name moves to the end of her name history and the new
    /// name is indexed. Old names stay searchable.
    ///
    /// # Errors
    ///
    /// Returns `UnknownHandle` if the handle was not issued by this registry
    /// and `NotRenamable` if the person is a man.
    pub fn rename(&mut self, handle: PersonHandle, new_name: impl Into<String>) -> Result<()> {
        let person = self
            .persons
            .get_mut(handle.slot())
            .ok_or_else(|| Error::unknown_handle(handle))?;
        let id = person.id();
        let woman = person.as_woman_mut().ok_or_else(|| {
            Error::not_renamable(id)
                .with_context(ErrorContext::new().with_operation("rename").with_id(id))
        })?;

        let new_name = new_name.into();
        self.by_name.insert(&new_name, id, handle);
        woman.rename(new_name);

        debug!(%id, name = woman.name(), "renamed person");
        Ok(())
    }

    /// Returns the person behind `handle`.
    #[must_use]
    pub fn get(&self, handle: PersonHandle) -> Option<&Person> {
        self.persons.get(handle.slot())
    }

    /// Returns the person with identifier `id`.
    #[must_use]
    pub fn person(&self, id: PersonId) -> Option<&Person> {
        self.find_by_id(id).and_then(|handle| self.get(handle))
    }

    /// Returns the children of `handle` in the order they were added.
    #[must_use]
    pub fn children(&self, handle: PersonHandle) -> &[PersonHandle] {
        self.family.children(handle)
    }

    /// Returns the father of `handle`.
    #[must_use]
    pub fn father(&self, handle: PersonHandle) -> Option<PersonHandle> {
        self.family.father(handle)
    }

    /// Returns the mother of `handle`.
    #[must_use]
    pub fn mother(&self, handle: PersonHandle) -> Option<PersonHandle> {
        self.family.mother(handle)
    }

    /// Returns the number of registered persons.
    #[must_use]
    pub fn len(&self) -> usize {
        self.persons.len()
    }

    /// Returns true if nobody is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    /// Returns the number of `(name, id)` entries in the name index.
    #[must_use]
    pub fn name_count(&self) -> usize {
        self.by_name.len()
    }

    /// Iterates over persons in ascending identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (PersonHandle, &Person)> {
        self.by_id
            .iter()
            .filter_map(move |(_, handle)| self.get(handle).map(|person| (handle, person)))
    }

    /// Writes `handle` and all of its descendants to `sink` as an indented
    /// tree.
    ///
    /// # Errors
    ///
    /// Returns `UnknownHandle` for a foreign handle, or `Write` if the sink
    /// fails.
    pub fn print_descendants<W: fmt::Write>(&self, handle: PersonHandle, sink: &mut W) -> Result<()> {
        DescendantPrinter::new(self).print(handle, sink)
    }

    /// Renders `handle` and its descendants to a string.
    ///
    /// # Errors
    ///
    /// Returns `UnknownHandle` for a foreign handle.
    pub fn descendants_to_string(&self, handle: PersonHandle) -> Result<String> {
        let mut out = String::new();
        self.print_descendants(handle, &mut out)?;
        Ok(out)
    }

    /// Finds a shortest chain of parent/child steps from `from` to `to`.
    ///
    /// Each step names the person stepped onto and how. An empty vector
    /// means the two are not related.
    ///
    /// # Errors
    ///
    /// Returns `InvalidQuery` if either identifier is unknown or both are
    /// the same.
    pub fn find_relatives(
        &self,
        from: PersonId,
        to: PersonId,
    ) -> Result<Vec<(PersonHandle, Relation)>> {
        RelationshipFinder::new(self).find(from, to)
    }
}
