//! Kindred - In-memory family registry
//!
//! This crate re-exports all layers of the Kindred system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: kindred_registry   - Registry, indexes, printer, relationship search
//! Layer 0: kindred_foundation - Core types (Person, PersonId, Relation, Error)
//! ```
//!
//! # Example
//!
//! ```
//! use kindred::foundation::{Person, PersonId, Relation};
//! use kindred::registry::Registry;
//!
//! let mut registry = Registry::new();
//! assert!(registry.add(&Person::man(1, "Peterson George"), None, None));
//! let george = registry.find_by_id(PersonId::new(1));
//! assert!(registry.add(&Person::woman(11, "Peterson Jane"), george, None));
//!
//! let path = registry.find_relatives(PersonId::new(11), PersonId::new(1)).unwrap();
//! assert_eq!(path.len(), 1);
//! assert_eq!(path[0].1, Relation::Father);
//! ```

pub use kindred_foundation as foundation;
pub use kindred_registry as registry;
