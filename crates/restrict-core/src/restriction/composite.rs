use crate::restriction::Restriction;
use serde::{Deserialize, Serialize};
use std::{fmt, slice};

///
/// CompositeKind
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CompositeKind {
    /// Conjunction; the empty `ALL` is true.
    All,
    /// Disjunction; the empty `ANY` is false.
    Any,
}

impl CompositeKind {
    /// De Morgan dual.
    #[must_use]
    pub const fn dual(self) -> Self {
        match self {
            Self::All => Self::Any,
            Self::Any => Self::All,
        }
    }

    const fn connective(self) -> &'static str {
        match self {
            Self::All => " AND ",
            Self::Any => " OR ",
        }
    }

    const fn empty_literal(self) -> &'static str {
        match self {
            Self::All => "TRUE",
            Self::Any => "FALSE",
        }
    }
}

impl fmt::Display for CompositeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("ALL"),
            Self::Any => f.write_str("ANY"),
        }
    }
}

///
/// CompositeRestriction
///
/// Logical combinator over an ordered child sequence.
/// Child order is kept through construction and negation; it carries no
/// logical meaning but lets the compiler keep the caller's evaluation order.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct CompositeRestriction {
    kind: CompositeKind,
    children: Vec<Restriction>,
}

impl CompositeRestriction {
    #[must_use]
    pub const fn new(kind: CompositeKind, children: Vec<Restriction>) -> Self {
        Self { kind, children }
    }

    #[must_use]
    pub const fn all(children: Vec<Restriction>) -> Self {
        Self::new(CompositeKind::All, children)
    }

    #[must_use]
    pub const fn any(children: Vec<Restriction>) -> Self {
        Self::new(CompositeKind::Any, children)
    }

    #[must_use]
    pub const fn kind(&self) -> CompositeKind {
        self.kind
    }

    #[must_use]
    pub fn children(&self) -> &[Restriction] {
        &self.children
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.children.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Restriction> {
        self.children.iter()
    }

    /// `ALL[]`
    #[must_use]
    pub const fn is_trivially_true(&self) -> bool {
        matches!(self.kind, CompositeKind::All) && self.children.is_empty()
    }

    /// `ANY[]`
    #[must_use]
    pub const fn is_trivially_false(&self) -> bool {
        matches!(self.kind, CompositeKind::Any) && self.children.is_empty()
    }

    /// Structural De Morgan negation: flip the kind, negate every child,
    /// keep child order. No wrapping NOT node is introduced.
    #[must_use]
    pub fn negate(&self) -> Self {
        Self {
            kind: self.kind.dual(),
            children: self.children.iter().map(Restriction::negated).collect(),
        }
    }

    pub(crate) fn into_parts(self) -> (CompositeKind, Vec<Restriction>) {
        (self.kind, self.children)
    }
}

impl IntoIterator for CompositeRestriction {
    type Item = Restriction;
    type IntoIter = std::vec::IntoIter<Restriction>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.into_iter()
    }
}

impl<'a> IntoIterator for &'a CompositeRestriction {
    type Item = &'a Restriction;
    type IntoIter = slice::Iter<'a, Restriction>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}

impl fmt::Display for CompositeRestriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.children.is_empty() {
            return f.write_str(self.kind.empty_literal());
        }

        f.write_str("(")?;
        for (i, child) in self.children.iter().enumerate() {
            if i > 0 {
                f.write_str(self.kind.connective())?;
            }
            write!(f, "{child}")?;
        }
        f.write_str(")")
    }
}
