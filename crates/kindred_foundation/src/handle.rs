//! Stable handles into a registry's person arena.

use std::fmt;

/// Handle to a person stored in a registry.
///
/// Handles are plain arena indices. They stay valid for the lifetime of the
/// registry that issued them because persons are never removed. A handle
/// from one registry means nothing to another; registries ignore or reject
/// handles they cannot resolve.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct PersonHandle {
    /// Index into the registry arena.
    pub index: u32,
}

impl PersonHandle {
    /// Creates a handle for the given arena slot.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self { index }
    }

    /// Returns the arena slot as a `usize`.
    #[must_use]
    pub const fn slot(self) -> usize {
        self.index as usize
    }
}

impl fmt::Debug for PersonHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PersonHandle({})", self.index)
    }
}

impl fmt::Display for PersonHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)
    }
}
