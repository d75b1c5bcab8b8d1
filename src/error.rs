//! Error types for predicate construction and evaluation.

use crate::value::Kind;

/// Error returned when a predicate is applied to an input it cannot judge.
///
/// Most leaf predicates are type-strict: asking `negative()` about a string
/// is a caller bug, so it is reported rather than answered with `false`.
/// Combinators pass this error through untouched.
///
/// # Examples
///
/// ```rust
/// use stillcheck::predicate::*;
/// use stillcheck::{EvalError, Kind, Value};
///
/// let err = negative().check(&Value::from("abc")).unwrap_err();
/// assert_eq!(
///     err,
///     EvalError::TypeMismatch {
///         predicate: "negative",
///         expected: "number",
///         found: Kind::Text,
///     }
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The input's kind is outside what the predicate accepts.
    TypeMismatch {
        /// Name of the predicate that rejected the input.
        predicate: &'static str,
        /// Description of the accepted kinds.
        expected: &'static str,
        /// Kind of the input that was supplied.
        found: Kind,
    },
}

impl EvalError {
    pub(crate) fn mismatch(predicate: &'static str, expected: &'static str, found: Kind) -> Self {
        EvalError::TypeMismatch {
            predicate,
            expected,
            found,
        }
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvalError::TypeMismatch {
                predicate,
                expected,
                found,
            } => write!(f, "{predicate}() expects {expected}, got {found}"),
        }
    }
}

impl std::error::Error for EvalError {}

/// Error returned when a predicate factory receives invalid parameters.
///
/// These are reported once, when the predicate is built, never when it is
/// applied.
///
/// # Examples
///
/// ```rust
/// use stillcheck::predicate::*;
/// use stillcheck::BuildError;
///
/// assert!(matches!(range(2, 1), Err(BuildError::InvertedBounds { .. })));
/// assert!(matches!(pattern("("), Err(BuildError::InvalidPattern { .. })));
/// ```
#[derive(Debug, Clone)]
pub enum BuildError {
    /// The regular expression failed to compile.
    InvalidPattern {
        /// The expression as supplied by the caller.
        pattern: String,
        /// The underlying compilation error.
        source: regex::Error,
    },
    /// The lower bound is greater than the upper bound.
    InvertedBounds {
        /// Lower bound, rendered for display.
        min: String,
        /// Upper bound, rendered for display.
        max: String,
    },
    /// A numeric bound is NaN, so no input could ever compare against it.
    NotANumber,
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildError::InvalidPattern { pattern, source } => {
                write!(f, "invalid pattern `{pattern}`: {source}")
            }
            BuildError::InvertedBounds { min, max } => {
                write!(f, "lower bound {min} is greater than upper bound {max}")
            }
            BuildError::NotANumber => write!(f, "numeric bound must not be NaN"),
        }
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BuildError::InvalidPattern { source, .. } => Some(source),
            _ => None,
        }
    }
}
