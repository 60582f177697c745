//! Core person model, relation labels, and error types for Kindred.
//!
//! This crate provides:
//! - [`Person`] - A registered individual, either a [`Man`] or a [`Woman`]
//! - [`PersonId`] - Caller-assigned unique identifiers
//! - [`PersonHandle`] - Stable handles into a registry's arena
//! - [`Relation`] - Labels for edges walked in a relationship path
//! - [`Error`] - Error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod handle;
pub mod person;
pub mod relation;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use handle::PersonHandle;
pub use person::{Kind, Man, Person, PersonId, Woman};
pub use relation::Relation;
