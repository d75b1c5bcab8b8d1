//! Collection predicates
//!
//! Element-wise checks over sequences and mappings. Mappings are visited in
//! insertion order. Applying any of these to a scalar is an [`EvalError`].

use super::combinators::Predicate;
use crate::error::EvalError;
use crate::value::{Key, Value};

fn collection_input(predicate: &'static str, value: &Value) -> Result<(), EvalError> {
    if value.is_collection() {
        Ok(())
    } else {
        Err(EvalError::mismatch(predicate, "collection", value.kind()))
    }
}

/// Predicate that checks if all elements satisfy a predicate.
#[derive(Clone, Copy, Debug)]
pub struct Every<P>(pub P);

impl<P: Predicate> Predicate for Every<P> {
    fn check(&self, value: &Value) -> Result<bool, EvalError> {
        collection_input("every", value)?;
        for (_, item) in value.entries() {
            if !self.0.check(item)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

/// Create a predicate that checks if every element satisfies `predicate`.
///
/// Stops at the first failing element. An empty collection passes.
///
/// # Example
///
/// ```rust
/// use stillcheck::predicate::*;
/// use stillcheck::Value;
///
/// assert!(every(integer()).check(&Value::from([1, 2, 3])).unwrap());
/// assert!(!every(integer()).check(&Value::from(vec![
///     Value::from(1),
///     Value::from(2.1),
///     Value::from(3),
/// ])).unwrap());
/// ```
pub fn every<P: Predicate>(predicate: P) -> Every<P> {
    Every(predicate)
}

/// Predicate that checks if any element satisfies a predicate.
#[derive(Clone, Copy, Debug)]
pub struct Any<P>(pub P);

impl<P: Predicate> Predicate for Any<P> {
    fn check(&self, value: &Value) -> Result<bool, EvalError> {
        collection_input("any", value)?;
        for (_, item) in value.entries() {
            if self.0.check(item)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

/// Create a predicate that checks if at least one element satisfies
/// `predicate`.
///
/// Stops at the first passing element. An empty collection fails.
///
/// # Example
///
/// ```rust
/// use stillcheck::predicate::*;
/// use stillcheck::Value;
///
/// let mixed = Value::from(vec![Value::from(1.1), Value::from(2.2), Value::from(3)]);
/// assert!(any(integer()).check(&mixed).unwrap());
/// assert!(!any(integer()).check(&Value::from([1.1, 2.2, 3.3])).unwrap());
/// ```
pub fn any<P: Predicate>(predicate: P) -> Any<P> {
    Any(predicate)
}

/// Predicate that checks the element at one position.
#[derive(Clone, Debug)]
pub struct At<P> {
    position: Key,
    predicate: P,
}

impl<P> At<P> {
    /// The position this predicate inspects.
    pub fn position(&self) -> &Key {
        &self.position
    }
}

impl<P: Predicate> Predicate for At<P> {
    fn check(&self, value: &Value) -> Result<bool, EvalError> {
        collection_input("at", value)?;
        match value.get(&self.position) {
            Some(item) => self.predicate.check(item),
            None => Ok(false),
        }
    }
}

/// Create a predicate that checks if `position` exists in the input and
/// the element there satisfies `predicate`.
///
/// A missing position fails without consulting `predicate`. Positions may be
/// integers or strings; numeric strings address integer positions.
///
/// # Example
///
/// ```rust
/// use stillcheck::predicate::*;
/// use stillcheck::{Map, Value};
///
/// let list = Value::from(vec![Value::from(1.1), Value::from(2), Value::from(3.3)]);
/// assert!(at(1, integer()).check(&list).unwrap());
/// assert!(!at(0, integer()).check(&list).unwrap());
///
/// let mut map = Map::new();
/// map.insert("k", 2);
/// assert!(at("k", integer()).check(&Value::from(map)).unwrap());
/// assert!(!at("k", integer()).check(&Value::from(Map::new())).unwrap());
/// ```
pub fn at<P: Predicate>(position: impl Into<Key>, predicate: P) -> At<P> {
    At {
        position: position.into(),
        predicate,
    }
}
