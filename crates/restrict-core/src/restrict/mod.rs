//! Module: restrict
//! Responsibility: stateless factory functions for restriction values.
//! Does not own: the value tree itself or compilation to a query language.
//! Boundary: user-facing construction layer.
//!
//! ```ignore
//! use restrict_core::restrict::{all, greater_than_equal, starts_with};
//!
//! let adults_named_john = all([
//!     starts_with("John", "name")?.into(),
//!     greater_than_equal(30, "age")?,
//! ]);
//! let everyone_else = adults_named_john.negate();
//! ```


use crate::{
    error::RestrictError,
    obs::sink::{self, MetricsEvent},
    pattern::{CHAR_WILDCARD, STRING_WILDCARD, to_like_escaped},
    restriction::{
        BasicRestriction, CompositeRestriction, Operator, Restriction, RestrictionKind,
        TextRestriction, require_value,
    },
    value::{FieldValue, Value, ValueSet},
};

// ------------------------------------------------------------------
// Logical combinators
// ------------------------------------------------------------------

/// Conjunction of `restrictions`, in argument order. `all([])` is true.
#[must_use]
pub fn all<I>(restrictions: I) -> Restriction
where
    I: IntoIterator<Item = Restriction>,
{
    built(CompositeRestriction::all(restrictions.into_iter().collect()).into())
}

/// Disjunction of `restrictions`, in argument order. `any([])` is false.
#[must_use]
pub fn any<I>(restrictions: I) -> Restriction
where
    I: IntoIterator<Item = Restriction>,
{
    built(CompositeRestriction::any(restrictions.into_iter().collect()).into())
}

/// Same as `restriction.negate()`.
#[must_use]
pub fn not(restriction: impl Into<Restriction>) -> Restriction {
    restriction.into().negate()
}

/// Inclusive range: `all([gte(min), lte(max)])`.
///
/// `min > max` is accepted and yields an unsatisfiable restriction.
pub fn between<V: FieldValue>(
    min: V,
    max: V,
    field: impl Into<String>,
) -> Result<Restriction, RestrictError> {
    let field = field.into();
    let lower = compare(Operator::GreaterThanEqual, min.to_value(), field.clone())?;
    let upper = compare(Operator::LessThanEqual, max.to_value(), field)?;

    Ok(built(CompositeRestriction::all(vec![lower, upper]).into()))
}

// ------------------------------------------------------------------
// Comparison predicates
// ------------------------------------------------------------------
//
// A text operand yields `Restriction::Text` with `escaped = false`;
// every other operand yields `Restriction::Basic`.

pub fn equal_to(
    value: impl FieldValue,
    field: impl Into<String>,
) -> Result<Restriction, RestrictError> {
    compare(Operator::Equal, value.to_value(), field).map(built)
}

pub fn not_equal_to(
    value: impl FieldValue,
    field: impl Into<String>,
) -> Result<Restriction, RestrictError> {
    compare(Operator::NotEqual, value.to_value(), field).map(built)
}

pub fn greater_than(
    value: impl FieldValue,
    field: impl Into<String>,
) -> Result<Restriction, RestrictError> {
    compare(Operator::GreaterThan, value.to_value(), field).map(built)
}

pub fn greater_than_equal(
    value: impl FieldValue,
    field: impl Into<String>,
) -> Result<Restriction, RestrictError> {
    compare(Operator::GreaterThanEqual, value.to_value(), field).map(built)
}

pub fn less_than(
    value: impl FieldValue,
    field: impl Into<String>,
) -> Result<Restriction, RestrictError> {
    compare(Operator::LessThan, value.to_value(), field).map(built)
}

pub fn less_than_equal(
    value: impl FieldValue,
    field: impl Into<String>,
) -> Result<Restriction, RestrictError> {
    compare(Operator::LessThanEqual, value.to_value(), field).map(built)
}

// ------------------------------------------------------------------
// Set membership
// ------------------------------------------------------------------

/// Field value is one of `values`. Duplicates collapse; the empty set is
/// kept as-is (logically false).
pub fn in_<I, V>(values: I, field: impl Into<String>) -> Result<Restriction, RestrictError>
where
    I: IntoIterator<Item = V>,
    V: FieldValue,
{
    membership(Operator::In, values, field).map(built)
}

/// Field value is none of `values`. The empty set is logically true.
pub fn not_in<I, V>(values: I, field: impl Into<String>) -> Result<Restriction, RestrictError>
where
    I: IntoIterator<Item = V>,
    V: FieldValue,
{
    membership(Operator::NotIn, values, field).map(built)
}

// ------------------------------------------------------------------
// Text patterns
// ------------------------------------------------------------------

/// Pattern stored verbatim; the caller owns its escaping.
pub fn like(
    pattern: impl Into<String>,
    field: impl Into<String>,
) -> Result<TextRestriction, RestrictError> {
    text(Operator::Like, pattern.into(), false, field)
}

/// Pattern written with caller-chosen wildcards, rewritten into the
/// canonical alphabet without adding anchors.
pub fn like_with(
    pattern: &str,
    char_wildcard: char,
    string_wildcard: char,
    field: impl Into<String>,
) -> Result<TextRestriction, RestrictError> {
    let escaped = to_like_escaped(char_wildcard, string_wildcard, false, pattern, false)?;

    text(Operator::Like, escaped, true, field)
}

pub fn not_like(
    pattern: impl Into<String>,
    field: impl Into<String>,
) -> Result<TextRestriction, RestrictError> {
    text(Operator::NotLike, pattern.into(), false, field)
}

pub fn not_like_with(
    pattern: &str,
    char_wildcard: char,
    string_wildcard: char,
    field: impl Into<String>,
) -> Result<TextRestriction, RestrictError> {
    let escaped = to_like_escaped(char_wildcard, string_wildcard, false, pattern, false)?;

    text(Operator::NotLike, escaped, true, field)
}

// ------------------------------------------------------------------
// Text search convenience
// ------------------------------------------------------------------

/// `prefix%`, with `prefix` matched literally.
pub fn starts_with(prefix: &str, field: impl Into<String>) -> Result<TextRestriction, RestrictError> {
    search(Operator::Like, false, prefix, true, field)
}

/// `%suffix`, with `suffix` matched literally.
pub fn ends_with(suffix: &str, field: impl Into<String>) -> Result<TextRestriction, RestrictError> {
    search(Operator::Like, true, suffix, false, field)
}

/// `%substring%`, with `substring` matched literally.
pub fn contains(
    substring: &str,
    field: impl Into<String>,
) -> Result<TextRestriction, RestrictError> {
    search(Operator::Like, true, substring, true, field)
}

pub fn not_starts_with(
    prefix: &str,
    field: impl Into<String>,
) -> Result<TextRestriction, RestrictError> {
    search(Operator::NotLike, false, prefix, true, field)
}

pub fn not_ends_with(
    suffix: &str,
    field: impl Into<String>,
) -> Result<TextRestriction, RestrictError> {
    search(Operator::NotLike, true, suffix, false, field)
}

pub fn not_contains(
    substring: &str,
    field: impl Into<String>,
) -> Result<TextRestriction, RestrictError> {
    search(Operator::NotLike, true, substring, true, field)
}

// ------------------------------------------------------------------
// Internals
// ------------------------------------------------------------------

fn compare(
    op: Operator,
    value: Value,
    field: impl Into<String>,
) -> Result<Restriction, RestrictError> {
    match require_value(value)? {
        Value::Text(s) => TextRestriction::new(field, op, s, false).map(Restriction::Text),
        other => BasicRestriction::new(field, op, other).map(Restriction::Basic),
    }
}

fn membership<I, V>(
    op: Operator,
    values: I,
    field: impl Into<String>,
) -> Result<Restriction, RestrictError>
where
    I: IntoIterator<Item = V>,
    V: FieldValue,
{
    let set = ValueSet::try_from_values(values).ok_or_else(|| RestrictError::missing("values"))?;

    BasicRestriction::new(field, op, Value::Set(set)).map(Restriction::Basic)
}

fn search(
    op: Operator,
    allow_previous: bool,
    literal: &str,
    allow_subsequent: bool,
    field: impl Into<String>,
) -> Result<TextRestriction, RestrictError> {
    let pattern = to_like_escaped(
        CHAR_WILDCARD,
        STRING_WILDCARD,
        allow_previous,
        literal,
        allow_subsequent,
    )?;

    text(op, pattern, true, field)
}

fn text(
    op: Operator,
    pattern: String,
    escaped: bool,
    field: impl Into<String>,
) -> Result<TextRestriction, RestrictError> {
    let restriction = TextRestriction::new(field, op, pattern, escaped)?;
    sink::record(MetricsEvent::RestrictionBuilt {
        kind: RestrictionKind::Text,
    });

    Ok(restriction)
}

fn built(restriction: Restriction) -> Restriction {
    sink::record(MetricsEvent::RestrictionBuilt {
        kind: restriction.kind(),
    });

    restriction
}
