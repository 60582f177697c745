//! Configuration for a registry.

/// Configuration for a [`Registry`](crate::Registry).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Initial capacity of the queue and visited set used by relationship
    /// searches.
    pub search_capacity: usize,

    /// Maximum number of steps a relationship search explores.
    ///
    /// `None` means unbounded. A target further away than this is reported
    /// as unrelated.
    pub max_path_len: Option<usize>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            search_capacity: 64,
            max_path_len: None,
        }
    }
}

impl RegistryConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the search pre-allocation size.
    #[must_use]
    pub fn with_search_capacity(mut self, capacity: usize) -> Self {
        self.search_capacity = capacity;
        self
    }

    /// Builder method to bound relationship searches.
    #[must_use]
    pub fn with_max_path_len(mut self, steps: usize) -> Self {
        self.max_path_len = Some(steps);
        self
    }

    /// Builder method to remove the search bound.
    #[must_use]
    pub fn unbounded(mut self) -> Self {
        self.max_path_len = None;
        self
    }
}
