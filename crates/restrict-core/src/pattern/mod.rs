//! Module: pattern
//! Responsibility: compile literal text into canonical `LIKE` patterns.
//! Does not own: matching; patterns are handed to the query compiler as-is.

#[cfg(test)]
mod tests;

use crate::{
    error::RestrictError,
    obs::sink::{self, MetricsEvent},
};
use serde::{Deserialize, Serialize};

///
/// CONSTANTS
///

/// Canonical single-character wildcard.
pub const CHAR_WILDCARD: char = '_';

/// Canonical multi-character wildcard.
pub const STRING_WILDCARD: char = '%';

/// Canonical escape character.
pub const ESCAPE_CHAR: char = '\\';

///
/// Wildcards
///
/// Caller dialect for wildcard characters. Input to the pattern compiler
/// only; compiled output always uses the canonical alphabet.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(try_from = "RawWildcards")]
pub struct Wildcards {
    single: char,
    multi: char,
}

impl Wildcards {
    pub const CANONICAL: Self = Self {
        single: CHAR_WILDCARD,
        multi: STRING_WILDCARD,
    };

    pub fn new(single: char, multi: char) -> Result<Self, RestrictError> {
        if single == multi {
            return Err(RestrictError::same_wildcard(single));
        }

        Ok(Self { single, multi })
    }

    #[must_use]
    pub const fn single(self) -> char {
        self.single
    }

    #[must_use]
    pub const fn multi(self) -> char {
        self.multi
    }

    #[must_use]
    pub const fn is_canonical(self) -> bool {
        self.single == CHAR_WILDCARD && self.multi == STRING_WILDCARD
    }

    /// Escape `literal` under this dialect; see [`to_like_escaped`].
    #[must_use]
    pub fn escape(self, allow_previous: bool, literal: &str, allow_subsequent: bool) -> String {
        compile(self, allow_previous, literal, allow_subsequent)
    }
}

impl Default for Wildcards {
    fn default() -> Self {
        Self::CANONICAL
    }
}

#[derive(Deserialize)]
struct RawWildcards {
    single: char,
    multi: char,
}

impl TryFrom<RawWildcards> for Wildcards {
    type Error = RestrictError;

    fn try_from(raw: RawWildcards) -> Result<Self, Self::Error> {
        Self::new(raw.single, raw.multi)
    }
}

///
/// Convert a literal into an escaped `LIKE` pattern.
///
/// - prepends `%` when `allow_previous`
/// - rewrites each `char_wildcard` as `\_`, each `string_wildcard` as `\%`,
///   and each `\` as `\\`
/// - appends `%` when `allow_subsequent`
///
/// Branches test against the caller's wildcards, so a caller that passes
/// the canonical pair still gets every wildcard escaped exactly once.
///
pub fn to_like_escaped(
    char_wildcard: char,
    string_wildcard: char,
    allow_previous: bool,
    literal: &str,
    allow_subsequent: bool,
) -> Result<String, RestrictError> {
    let wildcards = Wildcards::new(char_wildcard, string_wildcard)?;

    Ok(compile(wildcards, allow_previous, literal, allow_subsequent))
}

fn compile(
    wildcards: Wildcards,
    allow_previous: bool,
    literal: &str,
    allow_subsequent: bool,
) -> String {
    let mut out = String::with_capacity(literal.len() + 10);
    let mut escapes = 0u64;

    if allow_previous {
        out.push(STRING_WILDCARD);
    }

    for ch in literal.chars() {
        let canonical = if ch == wildcards.single {
            CHAR_WILDCARD
        } else if ch == wildcards.multi {
            STRING_WILDCARD
        } else if ch == ESCAPE_CHAR {
            ESCAPE_CHAR
        } else {
            out.push(ch);
            continue;
        };

        out.push(ESCAPE_CHAR);
        out.push(canonical);
        escapes += 1;
    }

    if allow_subsequent {
        out.push(STRING_WILDCARD);
    }

    sink::record(MetricsEvent::PatternCompiled { escapes });

    out
}
