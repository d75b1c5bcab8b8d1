//! Length predicates
//!
//! These apply to text and collections, measured with [`Value::len`]: text
//! by bytes, collections by element count. Unlike the rest of the library
//! they are type-tolerant. An input with no length simply fails the check.

use super::combinators::Predicate;
use crate::error::{BuildError, EvalError};
use crate::value::Value;

/// Predicate that checks length is in range.
#[derive(Clone, Copy, Debug)]
pub struct Length {
    min: usize,
    max: usize,
}

impl Predicate for Length {
    #[inline]
    fn check(&self, value: &Value) -> Result<bool, EvalError> {
        Ok(value
            .len()
            .is_some_and(|len| self.min <= len && len <= self.max))
    }
}

/// Create a predicate that checks if length is between min and max
/// (inclusive).
///
/// Fails when `min > max`.
///
/// # Example
///
/// ```rust
/// use stillcheck::predicate::*;
/// use stillcheck::Value;
///
/// let p = length(1, 1).unwrap();
/// assert!(p.check(&Value::from([1])).unwrap());
/// assert!(p.check(&Value::from("1")).unwrap());
/// assert!(!p.check(&Value::from("")).unwrap());
/// assert!(!p.check(&Value::from(1)).unwrap()); // no length
/// ```
pub fn length(min: usize, max: usize) -> Result<Length, BuildError> {
    if min > max {
        return Err(BuildError::InvertedBounds {
            min: min.to_string(),
            max: max.to_string(),
        });
    }
    Ok(Length { min, max })
}

/// Predicate that checks minimum length.
#[derive(Clone, Copy, Debug)]
pub struct MinLength(pub usize);

impl Predicate for MinLength {
    #[inline]
    fn check(&self, value: &Value) -> Result<bool, EvalError> {
        Ok(value.len().is_some_and(|len| len >= self.0))
    }
}

/// Create a predicate that checks if length is at least `min`.
///
/// # Example
///
/// ```rust
/// use stillcheck::predicate::*;
/// use stillcheck::Value;
///
/// assert!(min_length(1).check(&Value::from("1")).unwrap());
/// assert!(!min_length(1).check(&Value::from("")).unwrap());
/// assert!(!min_length(0).check(&Value::from(1)).unwrap());
/// ```
pub fn min_length(min: usize) -> MinLength {
    MinLength(min)
}

/// Predicate that checks maximum length.
#[derive(Clone, Copy, Debug)]
pub struct MaxLength(pub usize);

impl Predicate for MaxLength {
    #[inline]
    fn check(&self, value: &Value) -> Result<bool, EvalError> {
        Ok(value.len().is_some_and(|len| len <= self.0))
    }
}

/// Create a predicate that checks if length is at most `max`.
pub fn max_length(max: usize) -> MaxLength {
    MaxLength(max)
}

/// Predicate for unset values.
#[derive(Clone, Copy, Default, Debug)]
pub struct Empty;

impl Predicate for Empty {
    #[inline]
    fn check(&self, value: &Value) -> Result<bool, EvalError> {
        Ok(!value.is_truthy())
    }
}

/// Create a predicate that checks if the input is an "empty" value of its
/// kind.
///
/// Accepted: `null`, `false`, `0`, `0.0`, `""`, `"0"`, an empty sequence
/// and an empty mapping. Everything else is non-empty, including `" "` and
/// `"0.0"`. Never errors.
///
/// # Example
///
/// ```rust
/// use stillcheck::predicate::*;
/// use stillcheck::Value;
///
/// assert!(empty().check(&Value::Null).unwrap());
/// assert!(empty().check(&Value::from(0)).unwrap());
/// assert!(empty().check(&Value::from(false)).unwrap());
/// assert!(!empty().check(&Value::from([1])).unwrap());
/// assert!(!empty().check(&Value::from("x")).unwrap());
/// ```
pub fn empty() -> Empty {
    Empty
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Map;

    fn v(x: impl Into<Value>) -> Value {
        x.into()
    }

    #[test]
    fn test_length() {
        let p = length(1, 1).unwrap();
        assert!(p.check(&v([1])).unwrap());
        assert!(p.check(&v("1")).unwrap());
        assert!(!p.check(&v("")).unwrap());
        assert!(!p.check(&v("12")).unwrap());
    }

    #[test]
    fn test_length_bounds_inclusive() {
        let p = length(2, 4).unwrap();
        assert!(!p.check(&v("a")).unwrap());
        assert!(p.check(&v("ab")).unwrap());
        assert!(p.check(&v("abcd")).unwrap());
        assert!(!p.check(&v("abcde")).unwrap());
    }

    #[test]
    fn test_length_counts_bytes() {
        assert!(length(2, 2).unwrap().check(&v("é")).unwrap());
    }

    #[test]
    fn test_length_rejects_inverted_bounds() {
        assert!(matches!(
            length(3, 1),
            Err(BuildError::InvertedBounds { .. })
        ));
    }

    #[test]
    fn test_min_length() {
        assert!(min_length(1).check(&v([1])).unwrap());
        assert!(min_length(1).check(&v("1")).unwrap());
        assert!(!min_length(1).check(&v("")).unwrap());
    }

    #[test]
    fn test_max_length() {
        assert!(max_length(1).check(&v([1])).unwrap());
        assert!(max_length(1).check(&v("1")).unwrap());
        assert!(!max_length(1).check(&v("12")).unwrap());
    }

    #[test]
    fn test_mappings_have_length() {
        let mut map = Map::new();
        map.insert("a", 1);
        map.insert("b", 2);
        assert!(length(2, 2).unwrap().check(&v(map)).unwrap());
    }

    #[test]
    fn test_unmeasurable_inputs_fail_quietly() {
        for input in [Value::Null, v(true), v(1), v(1.5)] {
            assert_eq!(length(0, 10).unwrap().check(&input), Ok(false));
            assert_eq!(min_length(0).check(&input), Ok(false));
            assert_eq!(max_length(10).check(&input), Ok(false));
        }
    }

    #[test]
    fn test_empty() {
        assert!(empty().check(&Value::Null).unwrap());
        assert!(empty().check(&v(Vec::<i64>::new())).unwrap());
        assert!(empty().check(&v(Map::new())).unwrap());
        assert!(empty().check(&v("")).unwrap());
        assert!(empty().check(&v("0")).unwrap());
        assert!(empty().check(&v(0)).unwrap());
        assert!(empty().check(&v(0.0)).unwrap());
        assert!(empty().check(&v(false)).unwrap());
        assert!(!empty().check(&v([1])).unwrap());
        assert!(!empty().check(&v("x")).unwrap());
        assert!(!empty().check(&v(1)).unwrap());
        assert!(!empty().check(&v(true)).unwrap());
    }
}
