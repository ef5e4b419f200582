use crate::{error::RestrictError, restriction::Operator, value::Value};
use serde::{Deserialize, Serialize};
use std::fmt;

///
/// BasicRestriction
///
/// One field, one operator, one operand. For `IN` / `NOT_IN` the operand
/// is always `Value::Set`.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(try_from = "RawBasicRestriction")]
pub struct BasicRestriction {
    field: String,
    operator: Operator,
    value: Value,
}

impl BasicRestriction {
    pub fn new(
        field: impl Into<String>,
        operator: Operator,
        value: Value,
    ) -> Result<Self, RestrictError> {
        let field = require_field(field.into())?;
        let value = require_value(value)?;

        if operator.is_membership() && value.as_set().is_none() {
            return Err(RestrictError::set_operand(operator));
        }

        Ok(Self {
            field,
            operator,
            value,
        })
    }

    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    #[must_use]
    pub const fn operator(&self) -> Operator {
        self.operator
    }

    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.value
    }

    /// Same field and operand under the dual operator.
    #[must_use]
    pub fn negate(&self) -> Self {
        Self {
            field: self.field.clone(),
            operator: self.operator.dual(),
            value: self.value.clone(),
        }
    }
}

// Wire shape; decoded trees go through the validating constructor.
#[derive(Deserialize)]
struct RawBasicRestriction {
    field: String,
    operator: Operator,
    value: Value,
}

impl TryFrom<RawBasicRestriction> for BasicRestriction {
    type Error = RestrictError;

    fn try_from(raw: RawBasicRestriction) -> Result<Self, Self::Error> {
        Self::new(raw.field, raw.operator, raw.value)
    }
}

impl fmt::Display for BasicRestriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.field, self.operator.symbol(), self.value)
    }
}

///
/// TextRestriction
///
/// Atomic restriction over a text operand.
/// `escaped` asserts the operand is already in the canonical pattern
/// alphabet (`_`, `%`, `\`); literal comparisons carry `escaped = false`.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(try_from = "RawTextRestriction")]
pub struct TextRestriction {
    field: String,
    operator: Operator,
    value: String,
    escaped: bool,
}

impl TextRestriction {
    pub fn new(
        field: impl Into<String>,
        operator: Operator,
        value: impl Into<String>,
        escaped: bool,
    ) -> Result<Self, RestrictError> {
        if !operator.is_text_operator() {
            return Err(RestrictError::text_operator(operator));
        }

        Ok(Self {
            field: require_field(field.into())?,
            operator,
            value: value.into(),
            escaped,
        })
    }

    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    #[must_use]
    pub const fn operator(&self) -> Operator {
        self.operator
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub const fn is_escaped(&self) -> bool {
        self.escaped
    }

    /// Same field, pattern, and escape flag under the dual operator.
    #[must_use]
    pub fn negate(&self) -> Self {
        Self {
            field: self.field.clone(),
            operator: self.operator.dual(),
            value: self.value.clone(),
            escaped: self.escaped,
        }
    }
}

#[derive(Deserialize)]
struct RawTextRestriction {
    field: String,
    operator: Operator,
    value: String,
    escaped: bool,
}

impl TryFrom<RawTextRestriction> for TextRestriction {
    type Error = RestrictError;

    fn try_from(raw: RawTextRestriction) -> Result<Self, Self::Error> {
        Self::new(raw.field, raw.operator, raw.value, raw.escaped)
    }
}

impl fmt::Display for TextRestriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} '{}'",
            self.field,
            self.operator.symbol(),
            self.value.replace('\'', "''")
        )?;

        if self.escaped {
            f.write_str(" ESCAPE '\\'")?;
        }

        Ok(())
    }
}

// Field names are opaque here; only absence is rejected.
pub(crate) fn require_field(field: String) -> Result<String, RestrictError> {
    if field.trim().is_empty() {
        return Err(RestrictError::missing("field"));
    }

    Ok(field)
}

pub(crate) fn require_value(value: Value) -> Result<Value, RestrictError> {
    if value.is_null() {
        return Err(RestrictError::missing("value"));
    }
    if value.as_set().is_some_and(|set| set.contains(&Value::Null)) {
        return Err(RestrictError::missing("values"));
    }

    Ok(value)
}
