//! Core of Restrict: the immutable restriction algebra, its operand values,
//! the `LIKE` pattern compiler, and the factory functions exported via the
//! `prelude`.
#![warn(unreachable_pub)]

pub mod error;
pub mod obs;
pub mod pattern;
pub mod restrict;
pub mod restriction;
pub mod value;

// re-exports
pub use error::{ErrorClass, RestrictError};

///
/// Prelude
///
/// Prelude contains only domain vocabulary and the factory functions.
/// No sinks, metrics, or pattern internals are re-exported here.
///

pub mod prelude {
    pub use crate::{
        error::RestrictError,
        restrict::*,
        restriction::{
            BasicRestriction, CompositeKind, CompositeRestriction, Operator, Restriction,
            TextRestriction,
        },
        value::{FieldValue, Value, ValueSet},
    };
}
