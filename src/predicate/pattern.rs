//! Pattern predicates
//!
//! Regular-expression checks over text. Every predicate in this module is
//! type-strict: applying one to a non-text value is an [`EvalError`], never a
//! silent `false`. Letter classes are ASCII only.
//!
//! `$` anchors at the very end of the text: a trailing newline is part of the
//! input, so `vowel()` rejects `"ae\n"`.

use std::sync::LazyLock;

use regex::Regex;
use regex_syntax::hir::{Hir, Look};

use super::combinators::Predicate;
use crate::error::{BuildError, EvalError};
use crate::value::Value;

static LOWERCASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([a-z]+(?-u:\s)*)+$").expect("lowercase pattern compiles"));

static UPPERCASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z]+(?-u:\s)*)+$").expect("uppercase pattern compiles"));

static VOWELS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[aeiouyAEIOUY]+$").expect("vowel pattern compiles"));

static LETTERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z]+$").expect("letter pattern compiles"));

static ANY_VOWEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[aeiouyAEIOUY]").expect("vowel search compiles"));

fn text_input<'a>(predicate: &'static str, value: &'a Value) -> Result<&'a str, EvalError> {
    match value {
        Value::Text(text) => Ok(text),
        other => Err(EvalError::mismatch(predicate, "text", other.kind())),
    }
}

fn compile(expression: &str, source: &str) -> Result<Regex, BuildError> {
    Regex::new(expression).map_err(|source_error| BuildError::InvalidPattern {
        pattern: source.to_string(),
        source: source_error,
    })
}

/// Predicate that matches the whole input against a regular expression.
#[derive(Clone, Debug)]
pub struct Pattern(Regex);

impl Pattern {
    /// The compiled, anchored expression.
    pub fn regex(&self) -> &Regex {
        &self.0
    }
}

impl Predicate for Pattern {
    #[inline]
    fn check(&self, value: &Value) -> Result<bool, EvalError> {
        Ok(self.0.is_match(text_input("pattern", value)?))
    }
}

/// Create a predicate that checks if the entire input matches `expression`.
///
/// The expression is anchored at both ends, so `\d{2}` rejects `"123"`.
/// Explicit anchors are harmless. Flags use inline syntax, e.g. `(?i)abc`,
/// and verbose-mode comments are allowed.
///
/// # Example
///
/// ```rust
/// use stillcheck::predicate::*;
/// use stillcheck::Value;
///
/// let two_digits = pattern(r"\d{2}").unwrap();
/// assert!(two_digits.check(&Value::from("12")).unwrap());
/// assert!(!two_digits.check(&Value::from("1")).unwrap());
/// assert!(!two_digits.check(&Value::from("123")).unwrap());
/// ```
pub fn pattern(expression: &str) -> Result<Pattern, BuildError> {
    compile(expression, expression)?;
    // Anchor the parsed expression, not its text: an unbalanced `)` or a
    // `(?x)` comment must not leak into the wrapper.
    let parsed = regex_syntax::parse(expression).map_err(|error| BuildError::InvalidPattern {
        pattern: expression.to_string(),
        source: regex::Error::Syntax(error.to_string()),
    })?;
    let anchored = Hir::concat(vec![Hir::look(Look::Start), parsed, Hir::look(Look::End)]);
    compile(&anchored.to_string(), expression).map(Pattern)
}

/// Predicate that looks for a regular expression anywhere in the input.
#[derive(Clone, Debug)]
pub struct ContainsPattern(Regex);

impl Predicate for ContainsPattern {
    #[inline]
    fn check(&self, value: &Value) -> Result<bool, EvalError> {
        Ok(self.0.is_match(text_input("contains_pattern", value)?))
    }
}

/// Create a predicate that checks if `expression` matches somewhere in the
/// input.
///
/// # Example
///
/// ```rust
/// use stillcheck::predicate::*;
/// use stillcheck::Value;
///
/// let has_digit = contains_pattern(r"\d").unwrap();
/// assert!(has_digit.check(&Value::from("abc1")).unwrap());
/// assert!(!has_digit.check(&Value::from("abc")).unwrap());
/// ```
pub fn contains_pattern(expression: &str) -> Result<ContainsPattern, BuildError> {
    compile(expression, expression).map(ContainsPattern)
}

/// Predicate for lowercase words.
#[derive(Clone, Copy, Default, Debug)]
pub struct Lowercase;

impl Predicate for Lowercase {
    #[inline]
    fn check(&self, value: &Value) -> Result<bool, EvalError> {
        Ok(LOWERCASE.is_match(text_input("lowercase", value)?))
    }
}

/// Create a predicate that checks if the input is one or more runs of
/// `a-z`, each optionally followed by whitespace.
///
/// # Example
///
/// ```rust
/// use stillcheck::predicate::*;
/// use stillcheck::Value;
///
/// assert!(lowercase().check(&Value::from("abcd")).unwrap());
/// assert!(lowercase().check(&Value::from("ab cd ")).unwrap());
/// assert!(!lowercase().check(&Value::from("aBcd")).unwrap());
/// assert!(!lowercase().check(&Value::from(" ab")).unwrap());
/// ```
pub fn lowercase() -> Lowercase {
    Lowercase
}

/// Predicate for uppercase words.
#[derive(Clone, Copy, Default, Debug)]
pub struct Uppercase;

impl Predicate for Uppercase {
    #[inline]
    fn check(&self, value: &Value) -> Result<bool, EvalError> {
        Ok(UPPERCASE.is_match(text_input("uppercase", value)?))
    }
}

/// Create a predicate that checks if the input is one or more runs of
/// `A-Z`, each optionally followed by whitespace.
pub fn uppercase() -> Uppercase {
    Uppercase
}

/// Predicate for text made only of vowels.
#[derive(Clone, Copy, Default, Debug)]
pub struct Vowel;

impl Predicate for Vowel {
    #[inline]
    fn check(&self, value: &Value) -> Result<bool, EvalError> {
        Ok(VOWELS.is_match(text_input("vowel", value)?))
    }
}

/// Create a predicate that checks if the input consists only of
/// `a e i o u y`, in either case.
///
/// # Example
///
/// ```rust
/// use stillcheck::predicate::*;
/// use stillcheck::Value;
///
/// assert!(vowel().check(&Value::from("aEiOuY")).unwrap());
/// assert!(!vowel().check(&Value::from("aediou")).unwrap());
/// ```
pub fn vowel() -> Vowel {
    Vowel
}

/// Predicate for text made only of consonants.
#[derive(Clone, Copy, Default, Debug)]
pub struct Consonant;

impl Predicate for Consonant {
    #[inline]
    fn check(&self, value: &Value) -> Result<bool, EvalError> {
        let text = text_input("consonant", value)?;
        Ok(LETTERS.is_match(text) && !ANY_VOWEL.is_match(text))
    }
}

/// Create a predicate that checks if the input is all ASCII letters and
/// contains no vowel (`y` counts as a vowel).
///
/// # Example
///
/// ```rust
/// use stillcheck::predicate::*;
/// use stillcheck::Value;
///
/// assert!(consonant().check(&Value::from("bCdFgHjKlMnPqRsTvWxZ")).unwrap());
/// assert!(!consonant().check(&Value::from("abcd")).unwrap());
/// ```
pub fn consonant() -> Consonant {
    Consonant
}
