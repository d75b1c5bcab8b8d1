//! Composable value predicates
//!
//! A predicate is a small, pure check over a [`Value`](crate::Value). Leaf
//! predicates test one property (kind, pattern, range, length); combinators
//! build larger predicates out of smaller ones without giving up
//! short-circuiting.
//!
//! # Philosophy
//!
//! Each factory captures its parameters once and returns an immutable
//! predicate. Applying it never mutates the input or the predicate, so the
//! same instance can be reused across calls and threads.
//!
//! # Example
//!
//! ```rust
//! use stillcheck::predicate::*;
//! use stillcheck::Value;
//!
//! let negative_float = float().and(negative());
//! assert!(negative_float.check(&Value::from(-0.1)).unwrap());
//! assert!(!negative_float.check(&Value::from(-1)).unwrap()); // not a float
//! assert!(!negative_float.check(&Value::from(0.1)).unwrap()); // not negative
//!
//! let tags = every(string().and(lowercase()));
//! assert!(tags.check(&Value::from(["rust", "parsing"])).unwrap());
//! ```
//!
//! # Strict and tolerant predicates
//!
//! Numeric, parity, pattern and element-wise predicates report an input of
//! the wrong kind as an [`EvalError`](crate::EvalError). Type, identity,
//! length and [`empty`] predicates answer every input. Combinators never
//! catch errors; use [`Predicate::matches`] for a lenient boolean.

mod collection;
mod combinators;
mod identity;
mod kind;
mod length;
mod number;
mod pattern;

pub mod prelude;

// Re-export core trait
pub use combinators::{boxed, from_fn, BoxedPredicate, FromFn, Predicate, PredicateExt};

// Re-export combinators
pub use combinators::{and, not, opt, or, AllOf, And, AnyOf, Not, Opt, Or};

// Re-export value predicates
pub use identity::{exact, similar, Exact, Similar};

// Re-export type predicates
pub use kind::{array, boolean, float, integer, null, string, IsArray, IsKind};

// Re-export pattern predicates
pub use pattern::{
    consonant, contains_pattern, lowercase, pattern, uppercase, vowel, Consonant, ContainsPattern,
    Lowercase, Pattern, Uppercase, Vowel,
};

// Re-export collection predicates
pub use collection::{any, at, every, Any, At, Every};

// Re-export length predicates
pub use length::{empty, length, max_length, min_length, Empty, Length, MaxLength, MinLength};

// Re-export number predicates
pub use number::{
    even, greater_than, greater_than_or_equal, less_than, less_than_or_equal, negative, odd,
    positive, range, Even, GreaterThan, GreaterThanOrEqual, LessThan, LessThanOrEqual, Negative,
    Number, Odd, Positive, Range,
};

#[cfg(feature = "tracing")]
pub use crate::instrument::{Instrumented, PredicateTracingExt};
