use serde::{Deserialize, Serialize};
use std::fmt;

///
/// Operator
///
/// Closed set of comparison operators carried by atomic restrictions.
/// Every operator has a dual under logical negation; see [`Operator::dual`].
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum Operator {
    Equal = 0x01,
    NotEqual = 0x02,
    GreaterThan = 0x03,
    GreaterThanEqual = 0x04,
    LessThan = 0x05,
    LessThanEqual = 0x06,
    In = 0x07,
    NotIn = 0x08,
    Like = 0x09,
    NotLike = 0x0a,
}

impl Operator {
    pub const ALL: [Self; 10] = [
        Self::Equal,
        Self::NotEqual,
        Self::GreaterThan,
        Self::GreaterThanEqual,
        Self::LessThan,
        Self::LessThanEqual,
        Self::In,
        Self::NotIn,
        Self::Like,
        Self::NotLike,
    ];

    /// Stable one-byte tag.
    #[must_use]
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// Operator produced by logical negation.
    ///
    /// Ordering operators flip direction and strictness together:
    /// NOT (x > v) is x <= v.
    #[must_use]
    pub const fn dual(self) -> Self {
        match self {
            Self::Equal => Self::NotEqual,
            Self::NotEqual => Self::Equal,
            Self::GreaterThan => Self::LessThanEqual,
            Self::GreaterThanEqual => Self::LessThan,
            Self::LessThan => Self::GreaterThanEqual,
            Self::LessThanEqual => Self::GreaterThan,
            Self::In => Self::NotIn,
            Self::NotIn => Self::In,
            Self::Like => Self::NotLike,
            Self::NotLike => Self::Like,
        }
    }

    /// Operators meaningful for a text operand (everything but set membership).
    #[must_use]
    pub const fn is_text_operator(self) -> bool {
        !self.is_membership()
    }

    #[must_use]
    pub const fn is_ordering(self) -> bool {
        matches!(
            self,
            Self::GreaterThan | Self::GreaterThanEqual | Self::LessThan | Self::LessThanEqual
        )
    }

    #[must_use]
    pub const fn is_membership(self) -> bool {
        matches!(self, Self::In | Self::NotIn)
    }

    #[must_use]
    pub const fn is_pattern(self) -> bool {
        matches!(self, Self::Like | Self::NotLike)
    }

    /// Query-language spelling, used for display only.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Equal => "=",
            Self::NotEqual => "<>",
            Self::GreaterThan => ">",
            Self::GreaterThanEqual => ">=",
            Self::LessThan => "<",
            Self::LessThanEqual => "<=",
            Self::In => "IN",
            Self::NotIn => "NOT IN",
            Self::Like => "LIKE",
            Self::NotLike => "NOT LIKE",
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Equal => "EQUAL",
            Self::NotEqual => "NOT_EQUAL",
            Self::GreaterThan => "GREATER_THAN",
            Self::GreaterThanEqual => "GREATER_THAN_EQUAL",
            Self::LessThan => "LESS_THAN",
            Self::LessThanEqual => "LESS_THAN_EQUAL",
            Self::In => "IN",
            Self::NotIn => "NOT_IN",
            Self::Like => "LIKE",
            Self::NotLike => "NOT_LIKE",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
