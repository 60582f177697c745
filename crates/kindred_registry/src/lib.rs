//! Person registry, sorted indexes, descendant printing, and relationship
//! search for Kindred.
//!
//! This crate provides:
//! - [`Registry`] - Owning arena of persons with add, lookup, and rename
//! - [`IdentityIndex`] - Persons sorted by identifier
//! - [`NameIndex`] - Every name ever held, sorted for prefix search
//! - [`FamilyGraph`] - Parent/child links by handle
//! - [`DescendantPrinter`] - Indented descendant trees
//! - [`RelationshipFinder`] - Shortest labelled paths between two persons

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod family;
pub mod identity;
pub mod names;
pub mod printer;
pub mod registry;
pub mod relatives;

pub use config::RegistryConfig;
pub use family::{FamilyGraph, FamilyLinks};
pub use identity::IdentityIndex;
pub use names::{NameEntry, NameIndex};
pub use printer::DescendantPrinter;
pub use registry::Registry;
pub use relatives::RelationshipFinder;
