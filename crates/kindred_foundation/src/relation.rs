//! Labels for the edges of a relationship path.

use std::fmt;

use crate::person::Kind;

/// The edge just walked in a relationship path, named from the point of view
/// of the person being stepped onto.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Relation {
    /// Stepped up to the father.
    Father,
    /// Stepped up to the mother.
    Mother,
    /// Stepped down to a son.
    Son,
    /// Stepped down to a daughter.
    Daughter,
}

impl Relation {
    /// Label for stepping down to a child of the given kind.
    #[must_use]
    pub const fn child(kind: Kind) -> Self {
        match kind {
            Kind::Man => Self::Son,
            Kind::Woman => Self::Daughter,
        }
    }

    /// Returns true for `Father` and `Mother`.
    #[must_use]
    pub const fn is_parent(self) -> bool {
        matches!(self, Self::Father | Self::Mother)
    }

    /// Returns the uppercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Father => "FATHER",
            Self::Mother => "MOTHER",
            Self::Son => "SON",
            Self::Daughter => "DAUGHTER",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
