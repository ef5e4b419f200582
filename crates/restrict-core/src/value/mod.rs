mod float;


use derive_more::{Deref, IntoIterator};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, fmt};

// re-exports
pub use float::{Float64, Float64Error};

///
/// Value
///
/// Operand recorded by an atomic restriction.
/// The algebra never interprets operands; it only stores them for the
/// query compiler. Ordering and hashing are structural.
///
/// Null → an absent argument; factories reject it before a restriction
///        is built, so it never appears inside a constructed tree.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Value {
    Blob(Vec<u8>),
    Bool(bool),
    Float64(Float64),
    Int(i64),
    Null,
    /// Unordered, duplicate-free operand of `IN` / `NOT_IN`.
    Set(ValueSet),
    Text(String),
    Uint(u64),
}

impl Value {
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_set(&self) -> Option<&ValueSet> {
        match self {
            Self::Set(set) => Some(set),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blob(bytes) => {
                f.write_str("0x")?;
                for b in bytes {
                    write!(f, "{b:02x}")?;
                }
                Ok(())
            }
            Self::Bool(b) => write!(f, "{b}"),
            Self::Float64(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Null => f.write_str("NULL"),
            Self::Set(set) => write!(f, "{set}"),
            Self::Text(s) => write!(f, "'{}'", s.replace('\'', "''")),
            Self::Uint(v) => write!(f, "{v}"),
        }
    }
}

///
/// ValueSet
///
/// Set operand: insertion order is discarded and duplicates collapse.
/// Iteration follows the structural `Value` order so equal sets compare,
/// hash, and serialize identically.
///

#[derive(
    Clone,
    Debug,
    Default,
    Deref,
    Deserialize,
    Eq,
    Hash,
    IntoIterator,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[into_iterator(owned, ref)]
pub struct ValueSet(BTreeSet<Value>);

impl ValueSet {
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Build a set from field values; `None` if any element is null.
    pub fn try_from_values<I, V>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = V>,
        V: FieldValue,
    {
        values
            .into_iter()
            .map(|v| {
                let value = v.to_value();
                (!value.is_null()).then_some(value)
            })
            .collect::<Option<BTreeSet<_>>>()
            .map(Self)
    }
}

impl FromIterator<Value> for ValueSet {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for ValueSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str(")")
    }
}

///
/// FieldValue
///
/// Conversion of a Rust value into a restriction operand.
///

pub trait FieldValue {
    fn to_value(&self) -> Value;
}

impl<T: FieldValue + ?Sized> FieldValue for &T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: FieldValue> FieldValue for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Null,
        }
    }
}

impl FieldValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl FieldValue for ValueSet {
    fn to_value(&self) -> Value {
        Value::Set(self.clone())
    }
}

impl FieldValue for str {
    fn to_value(&self) -> Value {
        Value::Text(self.to_string())
    }
}

impl FieldValue for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }
}

impl FieldValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl FieldValue for Float64 {
    fn to_value(&self) -> Value {
        Value::Float64(*self)
    }
}

// Non-finite floats have no operand form and surface as a missing value.
impl FieldValue for f64 {
    fn to_value(&self) -> Value {
        Float64::try_new(*self).map_or(Value::Null, Value::Float64)
    }
}

impl FieldValue for Vec<u8> {
    fn to_value(&self) -> Value {
        Value::Blob(self.clone())
    }
}

macro_rules! impl_field_value_int {
    ( $( $variant:ident => $( $ty:ty ),* );* $(;)? ) => {
        $( $(
            impl FieldValue for $ty {
                fn to_value(&self) -> Value {
                    Value::$variant((*self).into())
                }
            }
        )* )*
    };
}

impl_field_value_int! {
    Int => i8, i16, i32, i64;
    Uint => u8, u16, u32, u64;
}
