//! Module: restriction
//! Responsibility: the immutable restriction value tree and its negation.
//! Does not own: factory validation or pattern escaping.
//! Boundary: read-only surface consumed by query compilers.

mod atomic;
mod composite;
mod normalize;
mod operator;

#[cfg(test)]
mod tests;

use crate::obs::sink::{self, MetricsEvent};
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    ops::{BitAnd, BitOr, Not},
};

// re-exports
pub use atomic::{BasicRestriction, TextRestriction};
pub(crate) use atomic::require_value;
pub use composite::{CompositeKind, CompositeRestriction};
pub use normalize::normalize;
pub use operator::Operator;

///
/// RestrictionKind
///
/// Variant discriminant, used by compilers that dispatch before matching
/// and by the metrics sink.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum RestrictionKind {
    Basic,
    Text,
    Composite,
}

///
/// Restriction
///
/// A condition on an entity. Values are built bottom-up by the factory
/// functions in `restrict` and are never mutated afterwards; `negate`
/// always returns a fresh tree.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Restriction {
    Basic(BasicRestriction),
    Text(TextRestriction),
    Composite(CompositeRestriction),
}

impl Restriction {
    #[must_use]
    pub const fn kind(&self) -> RestrictionKind {
        match self {
            Self::Basic(_) => RestrictionKind::Basic,
            Self::Text(_) => RestrictionKind::Text,
            Self::Composite(_) => RestrictionKind::Composite,
        }
    }

    #[must_use]
    pub const fn is_atomic(&self) -> bool {
        !matches!(self, Self::Composite(_))
    }

    /// Field of an atomic restriction; `None` for composites.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Basic(r) => Some(r.field()),
            Self::Text(r) => Some(r.field()),
            Self::Composite(_) => None,
        }
    }

    /// Operator of an atomic restriction; `None` for composites.
    #[must_use]
    pub const fn operator(&self) -> Option<Operator> {
        match self {
            Self::Basic(r) => Some(r.operator()),
            Self::Text(r) => Some(r.operator()),
            Self::Composite(_) => None,
        }
    }

    #[must_use]
    pub const fn as_basic(&self) -> Option<&BasicRestriction> {
        match self {
            Self::Basic(r) => Some(r),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_text(&self) -> Option<&TextRestriction> {
        match self {
            Self::Text(r) => Some(r),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_composite(&self) -> Option<&CompositeRestriction> {
        match self {
            Self::Composite(r) => Some(r),
            _ => None,
        }
    }

    /// Logical complement of this restriction.
    ///
    /// Atomic restrictions swap their operator for its dual; composites
    /// flip ALL/ANY and negate every child in place order (De Morgan).
    /// `r.negate().negate() == r` holds for every tree.
    #[must_use]
    pub fn negate(&self) -> Self {
        sink::record(MetricsEvent::Negated { kind: self.kind() });

        self.negated()
    }

    // Recursive step without instrumentation; one event per root call.
    pub(crate) fn negated(&self) -> Self {
        match self {
            Self::Basic(r) => Self::Basic(r.negate()),
            Self::Text(r) => Self::Text(r.negate()),
            Self::Composite(r) => Self::Composite(r.negate()),
        }
    }
}

impl From<BasicRestriction> for Restriction {
    fn from(r: BasicRestriction) -> Self {
        Self::Basic(r)
    }
}

impl From<TextRestriction> for Restriction {
    fn from(r: TextRestriction) -> Self {
        Self::Text(r)
    }
}

impl From<CompositeRestriction> for Restriction {
    fn from(r: CompositeRestriction) -> Self {
        Self::Composite(r)
    }
}

impl fmt::Display for Restriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic(r) => write!(f, "{r}"),
            Self::Text(r) => write!(f, "{r}"),
            Self::Composite(r) => write!(f, "{r}"),
        }
    }
}

impl BitAnd for Restriction {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self::Composite(CompositeRestriction::all(vec![self, rhs]))
    }
}

impl BitAnd for &Restriction {
    type Output = Restriction;

    fn bitand(self, rhs: Self) -> Self::Output {
        Restriction::Composite(CompositeRestriction::all(vec![self.clone(), rhs.clone()]))
    }
}

impl BitOr for Restriction {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::Composite(CompositeRestriction::any(vec![self, rhs]))
    }
}

impl BitOr for &Restriction {
    type Output = Restriction;

    fn bitor(self, rhs: Self) -> Self::Output {
        Restriction::Composite(CompositeRestriction::any(vec![self.clone(), rhs.clone()]))
    }
}

impl Not for Restriction {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.negate()
    }
}

impl Not for &Restriction {
    type Output = Restriction;

    fn not(self) -> Self::Output {
        self.negate()
    }
}
