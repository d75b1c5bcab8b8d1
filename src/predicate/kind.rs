//! Type predicates
//!
//! One predicate per kind of [`Value`]. They never coerce and never error:
//! `integer()` rejects `"12"` and `12.0` alike.

use super::combinators::Predicate;
use crate::error::EvalError;
use crate::value::{Kind, Value};

/// Predicate that checks the kind of the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IsKind(pub Kind);

impl Predicate for IsKind {
    #[inline]
    fn check(&self, value: &Value) -> Result<bool, EvalError> {
        Ok(value.kind() == self.0)
    }
}

/// Create a predicate that checks if the input is a [`Value::Int`].
///
/// Integers and floats are distinct kinds: `1.0` is not an integer.
///
/// # Example
///
/// ```rust
/// use stillcheck::predicate::*;
/// use stillcheck::Value;
///
/// assert!(integer().check(&Value::from(12)).unwrap());
/// assert!(!integer().check(&Value::from("12")).unwrap());
/// assert!(!integer().check(&Value::from(12.0)).unwrap());
/// ```
pub fn integer() -> IsKind {
    IsKind(Kind::Int)
}

/// Create a predicate that checks if the input is a [`Value::Float`].
///
/// # Example
///
/// ```rust
/// use stillcheck::predicate::*;
/// use stillcheck::Value;
///
/// assert!(float().check(&Value::from(12.1)).unwrap());
/// assert!(!float().check(&Value::from(12)).unwrap());
/// ```
pub fn float() -> IsKind {
    IsKind(Kind::Float)
}

/// Create a predicate that checks if the input is text.
pub fn string() -> IsKind {
    IsKind(Kind::Text)
}

/// Create a predicate that checks if the input is a boolean.
pub fn boolean() -> IsKind {
    IsKind(Kind::Bool)
}

/// Create a predicate that checks if the input is [`Value::Null`].
pub fn null() -> IsKind {
    IsKind(Kind::Null)
}

/// Predicate for collections, indexed or keyed.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsArray;

impl Predicate for IsArray {
    #[inline]
    fn check(&self, value: &Value) -> Result<bool, EvalError> {
        Ok(value.is_collection())
    }
}

/// Create a predicate that checks if the input is a sequence or a mapping.
///
/// # Example
///
/// ```rust
/// use stillcheck::predicate::*;
/// use stillcheck::{Map, Value};
///
/// assert!(array().check(&Value::from(Vec::<i64>::new())).unwrap());
/// assert!(array().check(&Value::from(Map::new())).unwrap());
/// assert!(!array().check(&Value::from(false)).unwrap());
/// ```
pub fn array() -> IsArray {
    IsArray
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Map;

    fn v(x: impl Into<Value>) -> Value {
        x.into()
    }

    #[test]
    fn test_integer() {
        assert!(integer().check(&v(12)).unwrap());
        assert!(!integer().check(&v("12")).unwrap());
        assert!(!integer().check(&v(12.1)).unwrap());
    }

    #[test]
    fn test_float() {
        assert!(float().check(&v(12.1)).unwrap());
        assert!(!float().check(&v("12")).unwrap());
        assert!(!float().check(&v(12)).unwrap());
    }

    #[test]
    fn test_string() {
        assert!(string().check(&v("test")).unwrap());
        assert!(!string().check(&v(12)).unwrap());
        assert!(!string().check(&v(Vec::<i64>::new())).unwrap());
    }

    #[test]
    fn test_boolean() {
        assert!(boolean().check(&v(true)).unwrap());
        assert!(!boolean().check(&v(12)).unwrap());
        assert!(!boolean().check(&Value::Null).unwrap());
    }

    #[test]
    fn test_null() {
        assert!(null().check(&Value::Null).unwrap());
        assert!(!null().check(&v(true)).unwrap());
        assert!(!null().check(&v("")).unwrap());
    }

    #[test]
    fn test_array() {
        assert!(array().check(&v(Vec::<i64>::new())).unwrap());
        assert!(array().check(&v(Map::new())).unwrap());
        assert!(!array().check(&v(false)).unwrap());
        assert!(!array().check(&v("[]")).unwrap());
    }

    #[test]
    fn test_kinds_are_exclusive() {
        let samples = [Value::Null, v(true), v(1), v(1.0), v("1"), v([1])];
        let predicates = [null(), boolean(), integer(), float(), string()];
        for sample in &samples {
            let hits = predicates
                .iter()
                .filter(|p| p.check(sample).unwrap())
                .count();
            let expected = usize::from(!sample.is_collection());
            assert_eq!(hits, expected, "{sample}");
        }
    }
}
