//! # Stillcheck
//!
//! > *"Small checks, composed"*
//!
//! A Rust library of pure, composable value predicates.
//!
//! ## Philosophy
//!
//! A predicate answers one question about one value. Leaf predicates are
//! trivial on purpose; the interesting part is composing them:
//! - combinators (`and`, `or`, `not`, `opt`) keep short-circuiting
//! - element-wise predicates (`every`, `any`, `at`) reach into collections
//! - nothing holds state, so any predicate can be shared between threads
//!
//! ## Quick Example
//!
//! ```rust
//! use stillcheck::predicate::*;
//! use stillcheck::{and, Map, Value};
//!
//! let price = and![float(), positive(), less_than(10_000)];
//! let sku = pattern(r"[A-Z]{3}-\d{4}").unwrap();
//!
//! let mut item = Map::new();
//! item.insert("sku", "ABC-0042");
//! item.insert("price", 19.5);
//! item.insert("tags", vec!["new", "sale"]);
//! let item = Value::from(item);
//!
//! assert!(at("price", price).check(&item).unwrap());
//! assert!(at("sku", sku).check(&item).unwrap());
//! assert!(at("tags", every(lowercase()).and(max_length(5))).check(&item).unwrap());
//! assert!(!at("discount", opt(positive())).check(&item).unwrap()); // missing key
//! ```
//!
//! ## Errors
//!
//! Factories with parameters that can be wrong (`pattern`, `range`,
//! `length`) return a [`BuildError`]. Applying a type-strict predicate to
//! the wrong kind of input returns an [`EvalError`], which combinators pass
//! through untouched.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
#[cfg(feature = "tracing")]
pub mod instrument;
pub mod predicate;
#[cfg(feature = "serde")]
mod serde_impl;
pub mod value;

// Re-exports
pub use error::{BuildError, EvalError};
pub use predicate::{Predicate, PredicateExt};
pub use value::{Key, Kind, Map, Value};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{BuildError, EvalError};
    pub use crate::predicate::prelude::*;
    pub use crate::value::{Key, Kind, Map, Value};
    pub use crate::{and, or};
}
