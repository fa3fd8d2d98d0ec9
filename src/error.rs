use smartstring::alias::String as SmartString;
use std::fmt::{self, Display, Formatter};
use thiserror::Error;

/// Which input overflowed the segment limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// the route pattern
    Pattern,
    /// the request path
    Url,
}

impl Display for Input {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Input::Pattern => "pattern",
            Input::Url => "url",
        })
    }
}

/// Errors that are not simply "this path does not match".
///
/// A non-match is reported through [`MatchResult`](crate::MatchResult),
/// never through this type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The pattern itself is malformed. This is a mistake in the route
    /// table, not in the request.
    #[error("invalid pattern segment `{segment}`: {reason}")]
    PatternSyntax {
        segment: SmartString,
        reason: &'static str,
    },

    /// Either input has more segments than the configured limit.
    #[error("{input} has more than {max} segments")]
    TooManySegments { max: usize, input: Input },
}

impl Error {
    pub(crate) fn syntax(segment: &str, reason: &'static str) -> Self {
        Self::PatternSyntax {
            segment: SmartString::from(segment),
            reason,
        }
    }

    /// true if this is a [`Error::PatternSyntax`]
    pub fn is_syntax(&self) -> bool {
        matches!(self, Self::PatternSyntax { .. })
    }

    /// true if this is a [`Error::TooManySegments`]
    pub fn is_capacity(&self) -> bool {
        matches!(self, Self::TooManySegments { .. })
    }
}
