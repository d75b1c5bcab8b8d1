//! Predicate prelude for convenient imports
//!
//! This module re-exports the trait, combinators and factory functions,
//! without the concrete predicate types.
//!
//! # Example
//!
//! ```rust
//! use stillcheck::predicate::prelude::*;
//! use stillcheck::Value;
//!
//! let maybe_small = opt(integer().and(range(0, 9).unwrap()));
//! assert!(maybe_small.check(&Value::Null).unwrap());
//! assert!(maybe_small.check(&Value::from(3)).unwrap());
//! ```

// Core trait
pub use super::combinators::{boxed, from_fn, BoxedPredicate, Predicate, PredicateExt};

// Logical combinators
pub use super::combinators::{and, not, opt, or};

// Value predicates
pub use super::identity::{exact, similar};

// Type predicates
pub use super::kind::{array, boolean, float, integer, null, string};

// Pattern predicates
pub use super::pattern::{consonant, contains_pattern, lowercase, pattern, uppercase, vowel};

// Collection predicates
pub use super::collection::{any, at, every};

// Length predicates
pub use super::length::{empty, length, max_length, min_length};

// Number predicates
pub use super::number::{
    even, greater_than, greater_than_or_equal, less_than, less_than_or_equal, negative, odd,
    positive, range,
};
