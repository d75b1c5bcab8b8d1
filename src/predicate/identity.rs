//! Value identity predicates
//!
//! [`exact`] is strict equality: same kind, same value. [`similar`] is loose
//! equality, where operands of different kinds are converted before being
//! compared. The conversions are resolved in this order, first match wins:
//!
//! | left / right                | rule                                                  |
//! |-----------------------------|-------------------------------------------------------|
//! | null / null                 | equal                                                 |
//! | null / text                 | equal iff the text is empty                           |
//! | bool / anything             | compare as booleans (see [`Value::is_truthy`])        |
//! | null / anything else        | equal iff the other side is falsy                     |
//! | number / number             | numeric comparison, `12 == 12.0`                      |
//! | number / text               | equal iff the text is numeric and numerically equal   |
//! | text / text                 | numeric comparison if both are numeric, else bytes    |
//! | collection / collection     | same keys, loosely equal values, order ignored        |
//! | anything else               | not equal                                             |
//!
//! Every rule is symmetric. Numeric text is an optional sign, digits with an
//! optional fraction and an optional exponent (`"12"`, `"-1.5"`, `".5"`,
//! `"1e3"`), surrounded by optional ASCII whitespace. `"0x1A"`, `"inf"` and
//! `"1_000"` are not numeric. Numeric comparison never considers a NaN equal
//! to anything.

use std::cmp::Ordering;

use super::combinators::Predicate;
use super::number::Number;
use crate::error::EvalError;
use crate::value::Value;

const NUMERIC_WHITESPACE: &[char] = &[' ', '\t', '\n', '\r', '\x0b', '\x0c'];

/// Parse numeric text into a number.
///
/// Integral text that overflows `i64` becomes a float.
pub(crate) fn parse_numeric(text: &str) -> Option<Number> {
    let trimmed = text.trim_matches(NUMERIC_WHITESPACE);
    let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);

    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(at) => (&unsigned[..at], Some(&unsigned[at + 1..])),
        None => (unsigned, None),
    };
    let (whole, fraction) = match mantissa.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (mantissa, None),
    };

    let digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !digits(whole) || !fraction.is_none_or(digits) {
        return None;
    }
    if whole.is_empty() && fraction.is_none_or(str::is_empty) {
        return None;
    }
    if let Some(exponent) = exponent {
        let exponent = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
        if exponent.is_empty() || !digits(exponent) {
            return None;
        }
    }

    if fraction.is_none() && exponent.is_none() {
        if let Ok(i) = trimmed.parse::<i64>() {
            return Some(Number::Int(i));
        }
    }
    trimmed.parse::<f64>().ok().map(Number::Float)
}

fn numbers_equal(a: Number, b: Number) -> bool {
    a.compare(b) == Some(Ordering::Equal)
}

/// Loose equality, following the table in the module docs.
pub(crate) fn loose_eq(left: &Value, right: &Value) -> bool {
    use Value::*;

    match (left, right) {
        (Null, Null) => true,
        (Null, Text(s)) | (Text(s), Null) => s.is_empty(),
        (Bool(b), other) | (other, Bool(b)) => *b == other.is_truthy(),
        (Null, other) | (other, Null) => !other.is_truthy(),
        (Int(_) | Float(_), Int(_) | Float(_)) => {
            match (Number::from_value(left), Number::from_value(right)) {
                (Some(a), Some(b)) => numbers_equal(a, b),
                _ => false,
            }
        }
        (Int(_) | Float(_), Text(s)) | (Text(s), Int(_) | Float(_)) => {
            let number = Number::from_value(left).or_else(|| Number::from_value(right));
            match (number, parse_numeric(s)) {
                (Some(a), Some(b)) => numbers_equal(a, b),
                _ => false,
            }
        }
        (Text(a), Text(b)) => match (parse_numeric(a), parse_numeric(b)) {
            (Some(x), Some(y)) => numbers_equal(x, y),
            _ => a == b,
        },
        (Sequence(_) | Mapping(_), Sequence(_) | Mapping(_)) => {
            left.len() == right.len()
                && left
                    .entries()
                    .all(|(key, value)| right.get(&key).is_some_and(|other| loose_eq(value, other)))
        }
        _ => false,
    }
}

/// Strict equality: same kind, same value, and for collections the same
/// entries in the same order.
///
/// A sequence and a mapping whose keys are `0..n` in order are strictly
/// equal, since both describe the same ordered collection.
pub(crate) fn strict_eq(left: &Value, right: &Value) -> bool {
    use Value::*;

    match (left, right) {
        (Null, Null) => true,
        (Bool(a), Bool(b)) => a == b,
        (Int(a), Int(b)) => a == b,
        (Float(a), Float(b)) => a == b,
        (Text(a), Text(b)) => a == b,
        (Sequence(_) | Mapping(_), Sequence(_) | Mapping(_)) => {
            left.len() == right.len()
                && left
                    .entries()
                    .zip(right.entries())
                    .all(|((ka, va), (kb, vb))| ka == kb && strict_eq(va, vb))
        }
        _ => false,
    }
}

/// Predicate for loose equality with a captured value.
#[derive(Clone, Debug)]
pub struct Similar(pub Value);

impl Predicate for Similar {
    #[inline]
    fn check(&self, value: &Value) -> Result<bool, EvalError> {
        Ok(loose_eq(value, &self.0))
    }
}

/// Create a predicate that checks if the input is loosely equal to `target`.
///
/// See the module docs for the conversion table.
///
/// # Example
///
/// ```rust
/// use stillcheck::predicate::*;
/// use stillcheck::Value;
///
/// assert!(similar(12).check(&Value::from("12")).unwrap());
/// assert!(similar(12).check(&Value::from(12)).unwrap());
/// assert!(!similar(12).check(&Value::from(3)).unwrap());
/// ```
pub fn similar(target: impl Into<Value>) -> Similar {
    Similar(target.into())
}

/// Predicate for strict equality with a captured value.
#[derive(Clone, Debug)]
pub struct Exact(pub Value);

impl Predicate for Exact {
    #[inline]
    fn check(&self, value: &Value) -> Result<bool, EvalError> {
        Ok(strict_eq(value, &self.0))
    }
}

/// Create a predicate that checks if the input has the same kind and value
/// as `target`.
///
/// # Example
///
/// ```rust
/// use stillcheck::predicate::*;
/// use stillcheck::Value;
///
/// assert!(exact(12).check(&Value::from(12)).unwrap());
/// assert!(!exact(12).check(&Value::from("12")).unwrap());
/// assert!(!exact(12).check(&Value::from(12.0)).unwrap());
/// ```
pub fn exact(target: impl Into<Value>) -> Exact {
    Exact(target.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Map;

    fn v(x: impl Into<Value>) -> Value {
        x.into()
    }

    fn assert_loose(a: Value, b: Value, expected: bool) {
        assert_eq!(loose_eq(&a, &b), expected, "{a} == {b}");
        assert_eq!(loose_eq(&b, &a), expected, "{b} == {a}");
    }

    #[test]
    fn test_similar() {
        assert!(similar(12).check(&v("12")).unwrap());
        assert!(similar(12).check(&v(12)).unwrap());
        assert!(!similar(12).check(&v(3)).unwrap());
    }

    #[test]
    fn test_exact() {
        assert!(exact(12).check(&v(12)).unwrap());
        assert!(!exact(12).check(&v("12")).unwrap());
        assert!(!exact(12).check(&v(3)).unwrap());
    }

    #[test]
    fn test_parse_numeric() {
        assert_eq!(parse_numeric("12"), Some(Number::Int(12)));
        assert_eq!(parse_numeric(" -7 "), Some(Number::Int(-7)));
        assert_eq!(parse_numeric("+3"), Some(Number::Int(3)));
        assert_eq!(parse_numeric("1.5"), Some(Number::Float(1.5)));
        assert_eq!(parse_numeric(".5"), Some(Number::Float(0.5)));
        assert_eq!(parse_numeric("5."), Some(Number::Float(5.0)));
        assert_eq!(parse_numeric("1e3"), Some(Number::Float(1000.0)));
        assert_eq!(parse_numeric("1E-1"), Some(Number::Float(0.1)));
        assert_eq!(
            parse_numeric("99999999999999999999"),
            Some(Number::Float(1e20))
        );
        for text in ["", " ", ".", "-", "1e", "e3", "0x1A", "inf", "NaN", "1_000", "12abc", "1.2.3"] {
            assert_eq!(parse_numeric(text), None, "{text:?}");
        }
    }

    #[test]
    fn test_loose_numbers_and_text() {
        assert_loose(v(12), v(12.0), true);
        assert_loose(v(12), v("12.0"), true);
        assert_loose(v(10), v("1e1"), true);
        assert_loose(v(12), v(" 12"), true);
        assert_loose(v(12), v("12abc"), false);
        assert_loose(v(0), v("a"), false);
        assert_loose(v("10"), v("1e1"), true);
        assert_loose(v("abc"), v("ABC"), false);
        assert_loose(v("abc"), v("abc"), true);
        assert_loose(v(f64::NAN), v(f64::NAN), false);
    }

    #[test]
    fn test_loose_null_and_bool() {
        assert_loose(Value::Null, Value::Null, true);
        assert_loose(Value::Null, v(""), true);
        assert_loose(Value::Null, v("0"), false);
        assert_loose(Value::Null, v(0), true);
        assert_loose(Value::Null, v(0.0), true);
        assert_loose(Value::Null, v(false), true);
        assert_loose(Value::Null, v(Vec::<i64>::new()), true);
        assert_loose(Value::Null, v(1), false);
        assert_loose(v(true), v(1), true);
        assert_loose(v(true), v("abc"), true);
        assert_loose(v(false), v("0"), true);
        assert_loose(v(false), v(0.0), true);
        assert_loose(v(true), v(Vec::<i64>::new()), false);
    }

    #[test]
    fn test_loose_collections() {
        assert_loose(v([1, 2]), v(["1", "2"]), true);
        assert_loose(v([1, 2]), v([2, 1]), false);
        assert_loose(v([1]), v([1, 2]), false);
        assert_loose(v([1]), v(1), false);

        let reordered: Map = vec![(1, "b"), (0, "a")].into_iter().collect();
        assert_loose(v(["a", "b"]), v(reordered), true);
    }

    #[test]
    fn test_strict_collections() {
        let ordered: Map = vec![(0, "a"), (1, "b")].into_iter().collect();
        let reordered: Map = vec![(1, "b"), (0, "a")].into_iter().collect();
        assert!(strict_eq(&v(["a", "b"]), &v(ordered)));
        assert!(!strict_eq(&v(["a", "b"]), &v(reordered)));
        assert!(!strict_eq(&v([1]), &v([1.0])));
        assert!(strict_eq(&v([[1]]), &v([[1]])));
    }

    #[test]
    fn test_strict_scalars() {
        assert!(strict_eq(&Value::Null, &Value::Null));
        assert!(!strict_eq(&Value::Null, &v(false)));
        assert!(!strict_eq(&v(0), &v(false)));
        assert!(!strict_eq(&v(f64::NAN), &v(f64::NAN)));
        assert!(strict_eq(&v("x"), &v("x")));
    }
}
