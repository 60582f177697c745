//! The person model: identifiers, kinds, and the `Man`/`Woman` variants.
//!
//! A [`Person`] is a closed sum over [`Man`] and [`Woman`]. Both carry an
//! identifier and a current name; only a woman keeps a history of former
//! names and can be renamed.

use std::fmt;

/// Caller-assigned identifier of a person.
///
/// Identifiers are unique within a registry and never change.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct PersonId(pub i64);

impl PersonId {
    /// Creates an identifier from its raw value.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for PersonId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which variant a person is.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Kind {
    /// A man.
    Man,
    /// A woman.
    Woman,
}

impl Kind {
    /// Returns the lowercase word used in printed lines.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Man => "man",
            Self::Woman => "woman",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A man. Name is fixed for life.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Man {
    id: PersonId,
    name: String,
}

impl Man {
    /// Creates a man.
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: PersonId(id),
            name: name.into(),
        }
    }

    /// Returns the identifier.
    #[must_use]
    pub fn id(&self) -> PersonId {
        self.id
    }

    /// Returns the name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A woman, with a chronological history of former names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Woman {
    id: PersonId,
    name: String,
    former_names: Vec<String>,
}

impl Woman {
    /// Creates a woman with no former names.
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: PersonId(id),
            name: name.into(),
            former_names: Vec::new(),
        }
    }

    /// Builder method to seed the former-name history, oldest first.
    #[must_use]
    pub fn with_former_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.former_names.extend(names.into_iter().map(Into::into));
        self
    }

    /// Returns the identifier.
    #[must_use]
    pub fn id(&self) -> PersonId {
        self.id
    }

    /// Returns the current name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns former names, oldest first.
    #[must_use]
    pub fn former_names(&self) -> &[String] {
        &self.former_names
    }

    /// Moves the current name into the history and takes `new_name`.
    ///
    /// On a registered woman, go through `Registry::rename` instead so the
    /// name index learns the new name.
    pub fn rename(&mut self, new_name: impl Into<String>) {
        let old = std::mem::replace(&mut self.name, new_name.into());
        self.former_names.push(old);
    }
}

/// A registered individual.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Person {
    /// A man.
    Man(Man),
    /// A woman.
    Woman(Woman),
}

impl Person {
    /// Shorthand for `Person::Man(Man::new(id, name))`.
    #[must_use]
    pub fn man(id: i64, name: impl Into<String>) -> Self {
        Self::Man(Man::new(id, name))
    }

    /// Shorthand for `Person::Woman(Woman::new(id, name))`.
    #[must_use]
    pub fn woman(id: i64, name: impl Into<String>) -> Self {
        Self::Woman(Woman::new(id, name))
    }

    /// Returns the identifier.
    #[must_use]
    pub fn id(&self) -> PersonId {
        match self {
            Self::Man(m) => m.id(),
            Self::Woman(w) => w.id(),
        }
    }

    /// Returns the current name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Man(m) => m.name(),
            Self::Woman(w) => w.name(),
        }
    }

    /// Returns the variant tag.
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            Self::Man(_) => Kind::Man,
            Self::Woman(_) => Kind::Woman,
        }
    }

    /// Returns former names, oldest first. Always empty for a man.
    #[must_use]
    pub fn former_names(&self) -> &[String] {
        match self {
            Self::Man(_) => &[],
            Self::Woman(w) => w.former_names(),
        }
    }

    /// Iterates over every name this person has held: current first, then
    /// former names oldest first.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name()).chain(self.former_names().iter().map(String::as_str))
    }

    /// Returns the woman, if this person is one.
    #[must_use]
    pub fn as_woman(&self) -> Option<&Woman> {
        match self {
            Self::Woman(w) => Some(w),
            Self::Man(_) => None,
        }
    }

    /// Returns the woman mutably, if this person is one.
    pub fn as_woman_mut(&mut self) -> Option<&mut Woman> {
        match self {
            Self::Woman(w) => Some(w),
            Self::Man(_) => None,
        }
    }
}

impl From<Man> for Person {
    fn from(man: Man) -> Self {
        Self::Man(man)
    }
}

impl From<Woman> for Person {
    fn from(woman: Woman) -> Self {
        Self::Woman(woman)
    }
}

/// Formats as `<id>: <name>[ [<former>, ...]] (<kind>)`.
impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.id(), self.name())?;
        let former = self.former_names();
        if !former.is_empty() {
            write!(f, " [{}]", former.join(", "))?;
        }
        write!(f, " ({})", self.kind())
    }
}
