//! Tracing support for predicates.
//!
//! This module provides the `Instrumented` combinator and `instrument`
//! method for evaluating predicates inside a tracing span. Feature-gated
//! behind `#[cfg(feature = "tracing")]`.

use crate::error::EvalError;
use crate::predicate::Predicate;
use crate::value::Value;

/// A predicate evaluated inside a tracing span.
///
/// Created by [`PredicateTracingExt::instrument`]. Each evaluation emits a
/// `TRACE` event with the outcome, or a `DEBUG` event when the input is
/// rejected with an [`EvalError`].
#[derive(Clone, Debug)]
pub struct Instrumented<P> {
    pub(crate) inner: P,
    pub(crate) span: tracing::Span,
}

impl<P: Predicate> Predicate for Instrumented<P> {
    fn check(&self, value: &Value) -> Result<bool, EvalError> {
        let _entered = self.span.enter();
        let outcome = self.inner.check(value);
        match &outcome {
            Ok(result) => {
                tracing::trace!(result = *result, input = %value.kind(), "predicate evaluated")
            }
            Err(error) => tracing::debug!(%error, "predicate rejected input"),
        }
        outcome
    }
}

/// Extension trait for adding tracing instrumentation to predicates.
///
/// This trait is only available when the `tracing` feature is enabled.
pub trait PredicateTracingExt: Predicate + Sized {
    /// Evaluate this predicate inside `span`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use stillcheck::predicate::*;
    /// use tracing::debug_span;
    ///
    /// let age = integer()
    ///     .and(range(0, 150)?)
    ///     .instrument(debug_span!("check", field = "age"));
    /// ```
    fn instrument(self, span: tracing::Span) -> Instrumented<Self> {
        Instrumented { inner: self, span }
    }
}

impl<P: Predicate> PredicateTracingExt for P {}
