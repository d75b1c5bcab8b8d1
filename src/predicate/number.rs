//! Number predicates
//!
//! Range, sign and parity checks. All of them accept [`Value::Int`] and
//! [`Value::Float`] inputs (parity: integers only) and report any other kind
//! as an [`EvalError`]. Integers and floats compare by numeric value, so
//! `range(1, 2)` accepts `1.5`.

use std::cmp::Ordering;
use std::fmt;

use super::combinators::Predicate;
use crate::error::{BuildError, EvalError};
use crate::value::Value;

/// A numeric bound: integer or float.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    /// Whole number.
    Int(i64),
    /// Floating-point number.
    Float(f64),
}

impl Number {
    /// Extract a number from a value, if it holds one.
    pub fn from_value(value: &Value) -> Option<Number> {
        match value {
            Value::Int(i) => Some(Number::Int(*i)),
            Value::Float(x) => Some(Number::Float(*x)),
            _ => None,
        }
    }

    /// The number as a float.
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(x) => x,
        }
    }

    /// Whether this is a float NaN.
    pub fn is_nan(self) -> bool {
        matches!(self, Number::Float(x) if x.is_nan())
    }

    /// Numeric ordering; `None` when either side is NaN.
    pub fn compare(self, other: Number) -> Option<Ordering> {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => Some(a.cmp(&b)),
            (a, b) => a.as_f64().partial_cmp(&b.as_f64()),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{i}"),
            Number::Float(x) => write!(f, "{x:?}"),
        }
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Number {
                fn from(n: $t) -> Self {
                    Number::Int(i64::from(n))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Number {
    fn from(x: f32) -> Self {
        Number::Float(f64::from(x))
    }
}

impl From<f64> for Number {
    fn from(x: f64) -> Self {
        Number::Float(x)
    }
}

fn numeric_input(predicate: &'static str, value: &Value) -> Result<Number, EvalError> {
    Number::from_value(value).ok_or_else(|| EvalError::mismatch(predicate, "number", value.kind()))
}

fn ordering(
    predicate: &'static str,
    value: &Value,
    bound: Number,
) -> Result<Option<Ordering>, EvalError> {
    Ok(numeric_input(predicate, value)?.compare(bound))
}

/// Predicate for values below zero.
#[derive(Clone, Copy, Default, Debug)]
pub struct Negative;

impl Predicate for Negative {
    #[inline]
    fn check(&self, value: &Value) -> Result<bool, EvalError> {
        Ok(ordering("negative", value, Number::Int(0))? == Some(Ordering::Less))
    }
}

/// Create a predicate that checks if a number is below zero.
///
/// Zero is not negative.
///
/// # Example
///
/// ```rust
/// use stillcheck::predicate::*;
/// use stillcheck::Value;
///
/// assert!(negative().check(&Value::from(-0.1)).unwrap());
/// assert!(negative().check(&Value::from(-1)).unwrap());
/// assert!(!negative().check(&Value::from(0)).unwrap());
/// ```
pub fn negative() -> Negative {
    Negative
}

/// Predicate for values at or above zero.
#[derive(Clone, Copy, Default, Debug)]
pub struct Positive;

impl Predicate for Positive {
    #[inline]
    fn check(&self, value: &Value) -> Result<bool, EvalError> {
        Ok(matches!(
            ordering("positive", value, Number::Int(0))?,
            Some(Ordering::Greater | Ordering::Equal)
        ))
    }
}

/// Create a predicate that checks if a number is zero or above.
///
/// Zero counts as positive, so `positive` and [`negative`] partition every
/// non-NaN number.
///
/// # Example
///
/// ```rust
/// use stillcheck::predicate::*;
/// use stillcheck::Value;
///
/// assert!(positive().check(&Value::from(0)).unwrap());
/// assert!(positive().check(&Value::from(0.1)).unwrap());
/// assert!(!positive().check(&Value::from(-1)).unwrap());
/// ```
pub fn positive() -> Positive {
    Positive
}

/// Predicate for value in range (inclusive).
#[derive(Clone, Copy, Debug)]
pub struct Range {
    min: Number,
    max: Number,
}

impl Predicate for Range {
    #[inline]
    fn check(&self, value: &Value) -> Result<bool, EvalError> {
        let n = numeric_input("range", value)?;
        Ok(matches!(
            n.compare(self.min),
            Some(Ordering::Greater | Ordering::Equal)
        ) && matches!(n.compare(self.max), Some(Ordering::Less | Ordering::Equal)))
    }
}

/// Create a predicate that checks if a number is between min and max
/// (inclusive).
///
/// Fails when `min > max` or either bound is NaN.
///
/// # Example
///
/// ```rust
/// use stillcheck::predicate::*;
/// use stillcheck::Value;
///
/// let p = range(0.1, 0.2).unwrap();
/// assert!(p.check(&Value::from(0.1)).unwrap());
/// assert!(p.check(&Value::from(0.2)).unwrap());
/// assert!(!p.check(&Value::from(0.21)).unwrap());
/// ```
pub fn range(min: impl Into<Number>, max: impl Into<Number>) -> Result<Range, BuildError> {
    let (min, max) = (min.into(), max.into());
    if min.is_nan() || max.is_nan() {
        return Err(BuildError::NotANumber);
    }
    if min.compare(max) == Some(Ordering::Greater) {
        return Err(BuildError::InvertedBounds {
            min: min.to_string(),
            max: max.to_string(),
        });
    }
    Ok(Range { min, max })
}

/// Predicate for less than.
#[derive(Clone, Copy, Debug)]
pub struct LessThan(pub Number);

impl Predicate for LessThan {
    #[inline]
    fn check(&self, value: &Value) -> Result<bool, EvalError> {
        Ok(ordering("less_than", value, self.0)? == Some(Ordering::Less))
    }
}

/// Create a predicate that checks if a number is less than `max`.
///
/// # Example
///
/// ```rust
/// use stillcheck::predicate::*;
/// use stillcheck::Value;
///
/// assert!(less_than(2).check(&Value::from(1)).unwrap());
/// assert!(!less_than(2).check(&Value::from(2)).unwrap());
/// ```
pub fn less_than(max: impl Into<Number>) -> LessThan {
    LessThan(max.into())
}

/// Predicate for less than or equal.
#[derive(Clone, Copy, Debug)]
pub struct LessThanOrEqual(pub Number);

impl Predicate for LessThanOrEqual {
    #[inline]
    fn check(&self, value: &Value) -> Result<bool, EvalError> {
        Ok(matches!(
            ordering("less_than_or_equal", value, self.0)?,
            Some(Ordering::Less | Ordering::Equal)
        ))
    }
}

/// Create a predicate that checks if a number is at most `max`.
pub fn less_than_or_equal(max: impl Into<Number>) -> LessThanOrEqual {
    LessThanOrEqual(max.into())
}

/// Predicate for greater than.
#[derive(Clone, Copy, Debug)]
pub struct GreaterThan(pub Number);

impl Predicate for GreaterThan {
    #[inline]
    fn check(&self, value: &Value) -> Result<bool, EvalError> {
        Ok(ordering("greater_than", value, self.0)? == Some(Ordering::Greater))
    }
}

/// Create a predicate that checks if a number is greater than `min`.
///
/// # Example
///
/// ```rust
/// use stillcheck::predicate::*;
/// use stillcheck::Value;
///
/// assert!(greater_than(0.1).check(&Value::from(0.2)).unwrap());
/// assert!(!greater_than(0.1).check(&Value::from(0.1)).unwrap());
/// ```
pub fn greater_than(min: impl Into<Number>) -> GreaterThan {
    GreaterThan(min.into())
}

/// Predicate for greater than or equal.
#[derive(Clone, Copy, Debug)]
pub struct GreaterThanOrEqual(pub Number);

impl Predicate for GreaterThanOrEqual {
    #[inline]
    fn check(&self, value: &Value) -> Result<bool, EvalError> {
        Ok(matches!(
            ordering("greater_than_or_equal", value, self.0)?,
            Some(Ordering::Greater | Ordering::Equal)
        ))
    }
}

/// Create a predicate that checks if a number is at least `min`.
pub fn greater_than_or_equal(min: impl Into<Number>) -> GreaterThanOrEqual {
    GreaterThanOrEqual(min.into())
}

fn remainder_by_two(predicate: &'static str, value: &Value) -> Result<i64, EvalError> {
    match value {
        // Truncating remainder: -3 % 2 == -1.
        Value::Int(i) => Ok(i % 2),
        other => Err(EvalError::mismatch(predicate, "integer", other.kind())),
    }
}

/// Predicate for even integers.
#[derive(Clone, Copy, Default, Debug)]
pub struct Even;

impl Predicate for Even {
    #[inline]
    fn check(&self, value: &Value) -> Result<bool, EvalError> {
        Ok(remainder_by_two("even", value)? == 0)
    }
}

/// Create a predicate that checks if an integer is even.
///
/// Only [`Value::Int`] is accepted. Floats are reported as a mismatch, even
/// integral ones: `even()` on `2.0` is an error, not `true`. Convert first if
/// float input should be truncated.
///
/// # Example
///
/// ```rust
/// use stillcheck::predicate::*;
/// use stillcheck::Value;
///
/// assert!(even().check(&Value::from(2)).unwrap());
/// assert!(even().check(&Value::from(-4)).unwrap());
/// assert!(!even().check(&Value::from(1)).unwrap());
/// ```
pub fn even() -> Even {
    Even
}

/// Predicate for odd integers.
#[derive(Clone, Copy, Default, Debug)]
pub struct Odd;

impl Predicate for Odd {
    #[inline]
    fn check(&self, value: &Value) -> Result<bool, EvalError> {
        Ok(remainder_by_two("odd", value)? != 0)
    }
}

/// Create a predicate that checks if an integer is odd.
///
/// Negative odd numbers leave a remainder of `-1`, which is still non-zero.
/// As with [`even`], floats (including `3.0`) are a mismatch.
pub fn odd() -> Odd {
    Odd
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::PredicateExt;
    use crate::value::Kind;

    fn v(x: impl Into<Value>) -> Value {
        x.into()
    }

    #[test]
    fn test_negative() {
        assert!(negative().check(&v(-0.1)).unwrap());
        assert!(negative().check(&v(-1)).unwrap());
        assert!(!negative().check(&v(0)).unwrap());
        assert!(!negative().check(&v(-0.0)).unwrap());
    }

    #[test]
    fn test_positive_includes_zero() {
        assert!(positive().check(&v(0)).unwrap());
        assert!(positive().check(&v(0.0)).unwrap());
        assert!(positive().check(&v(0.1)).unwrap());
        assert!(!positive().check(&v(-1)).unwrap());
    }

    #[test]
    fn test_nan_is_neither_sign() {
        assert!(!negative().check(&v(f64::NAN)).unwrap());
        assert!(!positive().check(&v(f64::NAN)).unwrap());
    }

    #[test]
    fn test_range_floats() {
        let p = range(0.1, 0.2).unwrap();
        assert!(p.check(&v(0.1)).unwrap());
        assert!(p.check(&v(0.2)).unwrap());
        assert!(!p.check(&v(0.09)).unwrap());
        assert!(!p.check(&v(0.21)).unwrap());
    }

    #[test]
    fn test_range_integers() {
        let p = range(1, 2).unwrap();
        assert!(p.check(&v(1)).unwrap());
        assert!(p.check(&v(2)).unwrap());
        assert!(p.check(&v(1.5)).unwrap());
        assert!(!p.check(&v(0)).unwrap());
        assert!(!p.check(&v(3)).unwrap());
    }

    #[test]
    fn test_range_large_integers_compare_exactly() {
        let p = range(i64::MAX - 1, i64::MAX).unwrap();
        assert!(p.check(&v(i64::MAX)).unwrap());
        assert!(!p.check(&v(i64::MAX - 2)).unwrap());
    }

    #[test]
    fn test_range_construction_errors() {
        assert!(matches!(
            range(2, 1),
            Err(BuildError::InvertedBounds { ref min, ref max }) if min == "2" && max == "1"
        ));
        assert!(matches!(range(f64::NAN, 1), Err(BuildError::NotANumber)));
        assert!(range(1, 1).is_ok());
    }

    #[test]
    fn test_less_than() {
        assert!(less_than(0.2).check(&v(0.1)).unwrap());
        assert!(!less_than(0.2).check(&v(0.2)).unwrap());
        assert!(less_than(2).check(&v(1)).unwrap());
        assert!(!less_than(2).check(&v(2)).unwrap());
    }

    #[test]
    fn test_less_than_or_equal() {
        assert!(less_than_or_equal(0.2).check(&v(0.2)).unwrap());
        assert!(!less_than_or_equal(0.2).check(&v(0.21)).unwrap());
        assert!(less_than_or_equal(2).check(&v(2)).unwrap());
        assert!(!less_than_or_equal(2).check(&v(3)).unwrap());
    }

    #[test]
    fn test_greater_than() {
        assert!(greater_than(0.1).check(&v(0.2)).unwrap());
        assert!(!greater_than(0.1).check(&v(0.1)).unwrap());
        assert!(greater_than(1).check(&v(2)).unwrap());
        assert!(!greater_than(1).check(&v(1)).unwrap());
    }

    #[test]
    fn test_greater_than_or_equal() {
        assert!(greater_than_or_equal(0.1).check(&v(0.1)).unwrap());
        assert!(!greater_than_or_equal(0.1).check(&v(0.09)).unwrap());
        assert!(greater_than_or_equal(1).check(&v(1)).unwrap());
        assert!(!greater_than_or_equal(1).check(&v(0)).unwrap());
    }

    #[test]
    fn test_even_odd() {
        assert!(even().check(&v(2)).unwrap());
        assert!(!even().check(&v(1)).unwrap());
        assert!(odd().check(&v(1)).unwrap());
        assert!(!odd().check(&v(2)).unwrap());
        assert!(odd().check(&v(-3)).unwrap());
        assert!(even().check(&v(0)).unwrap());
        assert!(even().check(&v(i64::MIN)).unwrap());
    }

    #[test]
    fn test_type_mismatches() {
        assert_eq!(
            negative().check(&v("-1")),
            Err(EvalError::mismatch("negative", "number", Kind::Text))
        );
        assert!(range(0, 1).unwrap().check(&Value::Null).is_err());
        assert!(greater_than(0).check(&v(true)).is_err());
        assert_eq!(
            even().check(&v(2.0)),
            Err(EvalError::mismatch("even", "integer", Kind::Float))
        );
        assert_eq!(
            odd().check(&v(3.0)),
            Err(EvalError::mismatch("odd", "integer", Kind::Float))
        );
    }

    #[test]
    fn test_combined_number_predicates() {
        let p = greater_than(10).and(less_than(20));
        assert!(p.check(&v(15)).unwrap());
        assert!(!p.check(&v(10)).unwrap());
        assert!(!p.check(&v(20)).unwrap());
    }
}
