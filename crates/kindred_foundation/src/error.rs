//! Error types for the Kindred system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//!
//! Rejected inserts are not errors: `Registry::add` reports a duplicate
//! identifier through its `bool` return. Errors are reserved for queries and
//! mutations the registry cannot carry out at all.

use std::fmt;

use thiserror::Error;

use crate::handle::PersonHandle;
use crate::person::PersonId;

/// The main error type for Kindred operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

/// Result alias using the Kindred [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a person not found error.
    #[must_use]
    pub fn person_not_found(id: PersonId) -> Self {
        Self::new(ErrorKind::PersonNotFound(id))
    }

    /// Creates an unknown handle error.
    #[must_use]
    pub fn unknown_handle(handle: PersonHandle) -> Self {
        Self::new(ErrorKind::UnknownHandle(handle))
    }

    /// Creates an invalid query error.
    #[must_use]
    pub fn invalid_query(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidQuery(message.into()))
    }

    /// Creates a not renamable error.
    #[must_use]
    pub fn not_renamable(id: PersonId) -> Self {
        Self::new(ErrorKind::NotRenamable(id))
    }

    /// Returns true if this is an invalid query error.
    #[must_use]
    pub fn is_invalid_query(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidQuery(_))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// No person with this identifier is registered.
    #[error("person not found: {0}")]
    PersonNotFound(PersonId),

    /// The handle was not issued by this registry.
    #[error("unknown person handle: {0:?}")]
    UnknownHandle(PersonHandle),

    /// Query arguments were rejected before any work was done.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// Only women carry a name history and can be renamed.
    #[error("person {0} cannot be renamed")]
    NotRenamable(PersonId),

    /// The output sink refused a write.
    #[error("write to output sink failed")]
    Write(#[source] fmt::Error),
}

impl From<fmt::Error> for Error {
    fn from(err: fmt::Error) -> Self {
        Self::new(ErrorKind::Write(err))
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Registry operation that failed.
    pub operation: Option<String>,
    /// Identifiers involved in the failed operation.
    pub ids: Vec<PersonId>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the operation name.
    #[must_use]
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }

    /// Records an identifier involved in the operation.
    #[must_use]
    pub fn with_id(mut self, id: PersonId) -> Self {
        self.ids.push(id);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(operation) = &self.operation {
            write!(f, "in {operation}")?;
        }
        if !self.ids.is_empty() {
            let ids: Vec<String> = self.ids.iter().map(ToString::to_string).collect();
            write!(f, " ({})", ids.join(", "))?;
        }
        Ok(())
    }
}
