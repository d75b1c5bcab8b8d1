//! Core predicate trait and logical combinators
//!
//! This module provides the foundational `Predicate` trait and the
//! combinators that compose predicates into larger ones.

use std::fmt;
use std::sync::Arc;

use crate::error::EvalError;
use crate::value::Value;

/// A composable, pure check over a [`Value`].
///
/// `Ok(true)` / `Ok(false)` is the answer. `Err` means the predicate was
/// applied to an input it cannot judge; combinators propagate it unchanged.
///
/// Implementations must not keep state between calls, so one instance can be
/// shared across threads and applied any number of times.
///
/// # Example
///
/// ```rust
/// use stillcheck::predicate::*;
/// use stillcheck::Value;
///
/// let small_int = integer().and(range(0, 10).unwrap());
/// assert!(small_int.check(&Value::from(5)).unwrap());
/// assert!(!small_int.check(&Value::from(5.5)).unwrap());
/// ```
pub trait Predicate: Send + Sync {
    /// Check whether `value` satisfies this predicate.
    fn check(&self, value: &Value) -> Result<bool, EvalError>;

    /// Lenient form of [`check`](Predicate::check): an input the predicate
    /// cannot judge counts as a non-match.
    ///
    /// ```rust
    /// use stillcheck::predicate::*;
    /// use stillcheck::Value;
    ///
    /// assert!(negative().check(&Value::from("x")).is_err());
    /// assert!(!negative().matches(&Value::from("x")));
    /// ```
    fn matches(&self, value: &Value) -> bool {
        self.check(value).unwrap_or(false)
    }
}

impl<P: Predicate + ?Sized> Predicate for &P {
    #[inline]
    fn check(&self, value: &Value) -> Result<bool, EvalError> {
        (**self).check(value)
    }
}

impl<P: Predicate + ?Sized> Predicate for Box<P> {
    #[inline]
    fn check(&self, value: &Value) -> Result<bool, EvalError> {
        (**self).check(value)
    }
}

impl<P: Predicate + ?Sized> Predicate for Arc<P> {
    #[inline]
    fn check(&self, value: &Value) -> Result<bool, EvalError> {
        (**self).check(value)
    }
}

/// A heap-allocated predicate, used where predicates of different types
/// share one list.
pub type BoxedPredicate = Box<dyn Predicate>;

/// Box a predicate.
pub fn boxed<P: Predicate + 'static>(predicate: P) -> BoxedPredicate {
    Box::new(predicate)
}

/// Predicate backed by a closure. Created by [`from_fn`].
#[derive(Clone, Copy)]
pub struct FromFn<F>(F);

impl<F> Predicate for FromFn<F>
where
    F: Fn(&Value) -> Result<bool, EvalError> + Send + Sync,
{
    #[inline]
    fn check(&self, value: &Value) -> Result<bool, EvalError> {
        (self.0)(value)
    }
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FromFn(<closure>)")
    }
}

/// Create a predicate from a closure.
///
/// # Example
///
/// ```rust
/// use stillcheck::predicate::*;
/// use stillcheck::Value;
///
/// let is_answer = from_fn(|v: &Value| Ok(*v == Value::Int(42)));
/// assert!(is_answer.check(&Value::from(42)).unwrap());
/// ```
pub fn from_fn<F>(f: F) -> FromFn<F>
where
    F: Fn(&Value) -> Result<bool, EvalError> + Send + Sync,
{
    FromFn(f)
}

/// Extension trait for predicate combinators.
///
/// Provides method chaining for combining predicates. All methods return
/// concrete types, so a chain costs no allocation.
///
/// # Example
///
/// ```rust
/// use stillcheck::predicate::*;
/// use stillcheck::Value;
///
/// let p = float().and(negative());
/// assert!(p.check(&Value::from(-0.1)).unwrap());
/// assert!(!p.check(&Value::from(-1)).unwrap());
/// ```
pub trait PredicateExt: Predicate + Sized {
    /// Combine with AND logic. `other` is skipped when `self` is false.
    fn and<P: Predicate>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// Combine with OR logic. `other` is skipped when `self` is true.
    ///
    /// ```rust
    /// use stillcheck::predicate::*;
    /// use stillcheck::Value;
    ///
    /// let number = float().or(integer());
    /// assert!(number.check(&Value::from(1)).unwrap());
    /// assert!(!number.check(&Value::from("1")).unwrap());
    /// ```
    fn or<P: Predicate>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Invert the predicate.
    fn not(self) -> Not<Self> {
        Not(self)
    }

    /// Accept [`Value::Null`] without consulting the predicate.
    fn optional(self) -> Opt<Self> {
        Opt(self)
    }

    /// Box the predicate so it can sit in a heterogeneous list.
    fn boxed(self) -> BoxedPredicate
    where
        Self: 'static,
    {
        Box::new(self)
    }
}

impl<P: Predicate> PredicateExt for P {}

/// AND combinator - both predicates must be true.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<P1: Predicate, P2: Predicate> Predicate for And<P1, P2> {
    #[inline]
    fn check(&self, value: &Value) -> Result<bool, EvalError> {
        Ok(self.0.check(value)? && self.1.check(value)?)
    }
}

/// OR combinator - either predicate must be true.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<P1: Predicate, P2: Predicate> Predicate for Or<P1, P2> {
    #[inline]
    fn check(&self, value: &Value) -> Result<bool, EvalError> {
        Ok(self.0.check(value)? || self.1.check(value)?)
    }
}

/// NOT combinator - inverts the predicate.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<P: Predicate> Predicate for Not<P> {
    #[inline]
    fn check(&self, value: &Value) -> Result<bool, EvalError> {
        Ok(!self.0.check(value)?)
    }
}

/// Invert a predicate.
///
/// # Example
///
/// ```rust
/// use stillcheck::predicate::*;
/// use stillcheck::Value;
///
/// assert!(positive().check(&Value::from(0.1)).unwrap());
/// assert!(!not(positive()).check(&Value::from(0.1)).unwrap());
/// ```
pub fn not<P: Predicate>(predicate: P) -> Not<P> {
    Not(predicate)
}

/// OPT combinator - null passes, anything else is delegated.
#[derive(Clone, Copy, Debug)]
pub struct Opt<P>(pub P);

impl<P: Predicate> Predicate for Opt<P> {
    #[inline]
    fn check(&self, value: &Value) -> Result<bool, EvalError> {
        match value {
            Value::Null => Ok(true),
            other => self.0.check(other),
        }
    }
}

/// Allow a null value, otherwise apply `predicate`.
///
/// # Example
///
/// ```rust
/// use stillcheck::predicate::*;
/// use stillcheck::Value;
///
/// let p = opt(positive());
/// assert!(p.check(&Value::Null).unwrap());
/// assert!(p.check(&Value::from(0.1)).unwrap());
/// assert!(!p.check(&Value::from(-1)).unwrap());
/// ```
pub fn opt<P: Predicate>(predicate: P) -> Opt<P> {
    Opt(predicate)
}

/// Check that every predicate in a list holds, left to right.
///
/// Evaluation stops at the first `false`. An empty list holds for every
/// input.
pub struct AllOf(pub Vec<BoxedPredicate>);

impl Predicate for AllOf {
    fn check(&self, value: &Value) -> Result<bool, EvalError> {
        for predicate in &self.0 {
            if !predicate.check(value)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl fmt::Debug for AllOf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AllOf")
            .field("predicates", &self.0.len())
            .finish()
    }
}

/// Lazy boolean AND over a list of predicates.
///
/// Usually called through the [`and!`](crate::and) macro, which boxes each
/// argument.
///
/// # Example
///
/// ```rust
/// use stillcheck::predicate::*;
/// use stillcheck::Value;
///
/// let p = and(vec![float().boxed(), negative().boxed()]);
/// assert!(p.check(&Value::from(-0.1)).unwrap());
/// assert!(!p.check(&Value::from(0.1)).unwrap());
///
/// assert!(and(vec![]).check(&Value::Null).unwrap());
/// ```
pub fn and(predicates: Vec<BoxedPredicate>) -> AllOf {
    AllOf(predicates)
}

/// Check that at least one predicate in a list holds, left to right.
///
/// Evaluation stops at the first `true`. An empty list holds for no input.
pub struct AnyOf(pub Vec<BoxedPredicate>);

impl Predicate for AnyOf {
    fn check(&self, value: &Value) -> Result<bool, EvalError> {
        for predicate in &self.0 {
            if predicate.check(value)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl fmt::Debug for AnyOf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyOf")
            .field("predicates", &self.0.len())
            .finish()
    }
}

/// Lazy boolean OR over a list of predicates.
///
/// # Example
///
/// ```rust
/// use stillcheck::predicate::*;
/// use stillcheck::Value;
///
/// let p = or(vec![float().boxed(), integer().boxed()]);
/// assert!(p.check(&Value::from(1)).unwrap());
/// assert!(!p.check(&Value::from("notFloatNorInt")).unwrap());
///
/// assert!(!or(vec![]).check(&Value::Null).unwrap());
/// ```
pub fn or(predicates: Vec<BoxedPredicate>) -> AnyOf {
    AnyOf(predicates)
}

/// Build an [`AllOf`] from any number of predicates.
///
/// ```rust
/// use stillcheck::and;
/// use stillcheck::predicate::*;
/// use stillcheck::Value;
///
/// let p = and![float(), negative()];
/// assert!(p.check(&Value::from(-0.1)).unwrap());
/// ```
#[macro_export]
macro_rules! and {
    ($($predicate:expr),* $(,)?) => {
        $crate::predicate::and(vec![$($crate::predicate::boxed($predicate)),*])
    };
}

/// Build an [`AnyOf`] from any number of predicates.
///
/// ```rust
/// use stillcheck::or;
/// use stillcheck::predicate::*;
/// use stillcheck::Value;
///
/// let p = or![float(), integer()];
/// assert!(p.check(&Value::from(0.1)).unwrap());
/// ```
#[macro_export]
macro_rules! or {
    ($($predicate:expr),* $(,)?) => {
        $crate::predicate::or(vec![$($crate::predicate::boxed($predicate)),*])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{float, integer, negative, positive};
    use crate::value::Kind;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn exploding() -> impl Predicate {
        from_fn(|v: &Value| Err(EvalError::mismatch("exploding", "nothing", v.kind())))
    }

    #[test]
    fn test_and() {
        let p = float().and(negative());
        assert!(p.check(&Value::from(-0.1)).unwrap());
        assert!(!p.check(&Value::from(-1)).unwrap());
        assert!(!p.check(&Value::from(0.1)).unwrap());
    }

    #[test]
    fn test_or() {
        let p = float().or(integer());
        assert!(p.check(&Value::from(0.1)).unwrap());
        assert!(p.check(&Value::from(1)).unwrap());
        assert!(!p.check(&Value::from("notFloatNorInt")).unwrap());
    }

    #[test]
    fn test_not() {
        let p = positive();
        assert!(p.check(&Value::from(0.1)).unwrap());
        assert!(!not(p).check(&Value::from(0.1)).unwrap());
    }

    #[test]
    fn test_opt_skips_inner_on_null() {
        assert!(opt(exploding()).check(&Value::Null).unwrap());
        assert!(opt(exploding()).check(&Value::from(1)).is_err());
    }

    #[test]
    fn test_empty_lists() {
        assert!(and(vec![]).check(&Value::from("anything")).unwrap());
        assert!(!or(vec![]).check(&Value::from("anything")).unwrap());
    }

    #[test]
    fn test_and_short_circuits() {
        let p = and![integer(), exploding()];
        assert!(!p.check(&Value::from(1.5)).unwrap());
        assert!(p.check(&Value::from(1)).is_err());

        let binary = integer().and(exploding());
        assert!(!binary.check(&Value::from("x")).unwrap());
    }

    #[test]
    fn test_or_short_circuits() {
        let p = or![integer(), exploding()];
        assert!(p.check(&Value::from(1)).unwrap());
        assert!(p.check(&Value::from(1.5)).is_err());

        let binary = integer().or(exploding());
        assert!(binary.check(&Value::from(7)).unwrap());
    }

    #[test]
    fn test_not_evaluates_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let p = not(from_fn(move |_: &Value| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(false)
        }));
        assert!(p.check(&Value::Null).unwrap());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_errors_propagate_unchanged() {
        let err = not(exploding()).check(&Value::from("x")).unwrap_err();
        assert_eq!(err, EvalError::mismatch("exploding", "nothing", Kind::Text));
    }

    #[test]
    fn test_matches_is_lenient() {
        assert!(!exploding().matches(&Value::Null));
        assert!(integer().matches(&Value::from(3)));
    }

    #[test]
    fn test_boxed_and_shared_predicates_compose() {
        let shared: Arc<dyn Predicate> = Arc::new(integer());
        let p = and(vec![boxed(Arc::clone(&shared)), negative().boxed()]);
        assert!(p.check(&Value::from(-3)).unwrap());
        assert!(!p.check(&Value::from(3)).unwrap());
    }

    #[test]
    fn test_complex_chain() {
        // not((float and negative) or integer)
        let p = float().and(negative()).or(integer()).not();
        assert!(!p.check(&Value::from(-0.5)).unwrap());
        assert!(!p.check(&Value::from(4)).unwrap());
        assert!(p.check(&Value::from(0.5)).unwrap());
    }
}
