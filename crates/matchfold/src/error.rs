use crate::like::LikeTranslateError;
use std::fmt;
use thiserror::Error as ThisError;

///
/// PatternError
///
/// Failure raised while building a pattern holder from a call node or a
/// raw pattern string. The optimizer never surfaces these; holder
/// construction always does.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum PatternError {
    #[error("'{function}' function {violation}")]
    InvalidShape {
        function: String,
        violation: ShapeViolation,
    },

    #[error("building regex pattern '{pattern}' failed: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error(transparent)]
    InvalidTranslation(#[from] LikeTranslateError),
}

impl PatternError {
    /// Construct a shape error for the named function.
    pub(crate) fn invalid_shape(function: impl Into<String>, violation: ShapeViolation) -> Self {
        Self::InvalidShape {
            function: function.into(),
            violation,
        }
    }

    /// Construct a compile error carrying the offending pattern text.
    pub(crate) fn invalid_pattern(pattern: impl Into<String>, err: &regex::Error) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            reason: err.to_string(),
        }
    }

    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::InvalidShape { .. } => ErrorClass::InvalidShape,
            Self::InvalidPattern { .. } => ErrorClass::InvalidPattern,
            Self::InvalidTranslation(_) => ErrorClass::InvalidTranslation,
        }
    }

    #[must_use]
    pub fn display_with_class(&self) -> String {
        format!("{}: {self}", self.class())
    }
}

///
/// ShapeViolation
///
/// Which call-shape constraint a node failed.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
pub enum ShapeViolation {
    #[error("requires two parameters, found {found}")]
    Arity { found: usize },

    #[error("requires a literal as the second parameter")]
    NotLiteral,

    #[error("requires a string literal as the second parameter")]
    NotStringLiteral,
}

///
/// ErrorClass
/// Stable classification of pattern failures.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    InvalidShape,
    InvalidPattern,
    InvalidTranslation,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::InvalidShape => "invalid_shape",
            Self::InvalidPattern => "invalid_pattern",
            Self::InvalidTranslation => "invalid_translation",
        };
        write!(f, "{label}")
    }
}

///
/// TESTS
///
