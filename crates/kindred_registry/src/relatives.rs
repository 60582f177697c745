//! Shortest relationship paths.
//!
//! The family graph is walked as undirected: from any person the search can
//! step down to a child or up to a parent. Every step costs the same, so a
//! FIFO breadth-first search yields a shortest path.
//!
//! # Tie-breaking
//!
//! Several shortest paths may exist, for example through two different
//! common ancestors. The one returned is fixed by expansion order: from each
//! person the search offers its children in the order they were added, then
//! its father, then its mother. A person is claimed by the first path that
//! reaches it and is never revisited.

use std::collections::{HashMap, VecDeque};

use kindred_foundation::{Error, ErrorContext, PersonHandle, PersonId, Relation, Result};
use tracing::trace;

use crate::registry::Registry;

/// How the search first reached a person.
#[derive(Clone, Copy, Debug)]
struct Visit {
    /// Previous person on the path, `None` for the start.
    from: Option<(PersonHandle, Relation)>,
    /// Steps from the start.
    depth: usize,
}

/// Breadth-first relationship search over a registry.
pub struct RelationshipFinder<'a> {
    registry: &'a Registry,
}

impl<'a> RelationshipFinder<'a> {
    /// Creates a finder over `registry`.
    #[must_use]
    pub fn new(registry: &'a Registry) -> Self {
        Self { registry }
    }

    /// Neighbours of `handle` in expansion order, each with the label of the
    /// step onto it.
    pub fn neighbors(&self, handle: PersonHandle) -> impl Iterator<Item = (PersonHandle, Relation)> + 'a {
        let registry = self.registry;
        let children = registry.children(handle).iter().filter_map(move |child| {
            registry
                .get(*child)
                .map(|person| (*child, Relation::child(person.kind())))
        });
        let father = registry.father(handle).map(|h| (h, Relation::Father));
        let mother = registry.mother(handle).map(|h| (h, Relation::Mother));
        children.chain(father).chain(mother)
    }

    /// Finds a shortest path from `from` to `to`.
    ///
    /// The result lists every person after the start, each paired with the
    /// step taken onto them. An empty vector means no path exists (or none
    /// within the configured `max_path_len`).
    ///
    /// # Errors
    ///
    /// Returns `InvalidQuery`, before searching, if either identifier is
    /// unknown or both are equal.
    pub fn find(&self, from: PersonId, to: PersonId) -> Result<Vec<(PersonHandle, Relation)>> {
        let context = || {
            ErrorContext::new()
                .with_operation("find_relatives")
                .with_id(from)
                .with_id(to)
        };
        let start = self.registry.resolve(from).map_err(|err| {
            Error::invalid_query(err.to_string()).with_context(context())
        })?;
        let target = self.registry.resolve(to).map_err(|err| {
            Error::invalid_query(err.to_string()).with_context(context())
        })?;
        if start == target {
            return Err(Error::invalid_query(format!("{from} is related to itself"))
                .with_context(context()));
        }

        let config = self.registry.config();
        let mut visited: HashMap<PersonHandle, Visit> =
            HashMap::with_capacity(config.search_capacity);
        let mut queue: VecDeque<PersonHandle> = VecDeque::with_capacity(config.search_capacity);

        visited.insert(start, Visit { from: None, depth: 0 });
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            if current == target {
                let path = Self::unwind(&visited, target);
                trace!(%from, %to, steps = path.len(), "relationship found");
                return Ok(path);
            }

            let depth = visited.get(&current).map_or(0, |visit| visit.depth);
            if config.max_path_len.is_some_and(|max| depth >= max) {
                continue;
            }

            for (next, relation) in self.neighbors(current) {
                if visited.contains_key(&next) {
                    continue;
                }
                visited.insert(
                    next,
                    Visit {
                        from: Some((current, relation)),
                        depth: depth + 1,
                    },
                );
                queue.push_back(next);
            }
        }

        trace!(%from, %to, explored = visited.len(), "no relationship");
        Ok(Vec::new())
    }

    /// Rebuilds the path ending at `target` from the visit records.
    fn unwind(
        visited: &HashMap<PersonHandle, Visit>,
        target: PersonHandle,
    ) -> Vec<(PersonHandle, Relation)> {
        let mut path = Vec::new();
        let mut cursor = target;
        while let Some((prev, relation)) = visited.get(&cursor).and_then(|visit| visit.from) {
            path.push((cursor, relation));
            cursor = prev;
        }
        path.reverse();
        path
    }
}
