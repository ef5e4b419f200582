use crate::{
    obs::sink::{self, MetricsEvent, RejectKind},
    restriction::Operator,
};
use thiserror::Error as ThisError;

///
/// RestrictError
///
/// Construction-time failures raised by the factory surface and the
/// pattern compiler. No restriction value exists when one of these is
/// returned.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum RestrictError {
    #[error("required argument '{argument}' is missing")]
    MissingArgument { argument: &'static str },

    #[error("cannot use the same character ({wildcard}) for both types of wildcards")]
    SameWildcard { wildcard: char },

    #[error("operator {operator} is not valid for a text restriction")]
    TextOperator { operator: Operator },

    #[error("operator {operator} requires a set operand")]
    SetOperand { operator: Operator },
}

impl RestrictError {
    // Every construction-time rejection is built through one of these so the
    // metrics sink sees it exactly once.

    pub(crate) fn missing(argument: &'static str) -> Self {
        rejected(RejectKind::MissingArgument, Self::MissingArgument { argument })
    }

    pub(crate) fn same_wildcard(wildcard: char) -> Self {
        rejected(RejectKind::SameWildcard, Self::SameWildcard { wildcard })
    }

    pub(crate) fn text_operator(operator: Operator) -> Self {
        rejected(RejectKind::TextOperator, Self::TextOperator { operator })
    }

    pub(crate) fn set_operand(operator: Operator) -> Self {
        rejected(RejectKind::SetOperand, Self::SetOperand { operator })
    }

    /// Stable classification for callers that route on class, not variant.
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::MissingArgument { .. } | Self::SameWildcard { .. } => {
                ErrorClass::InvalidArgument
            }
            Self::TextOperator { .. } | Self::SetOperand { .. } => ErrorClass::Unsupported,
        }
    }
}

///
/// ErrorClass
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorClass {
    InvalidArgument,
    Unsupported,
}

fn rejected(reason: RejectKind, err: RestrictError) -> RestrictError {
    sink::record(MetricsEvent::Rejected { reason });
    err
}
