//! Dynamic input model
//!
//! Predicates judge loosely-typed data: a decoded request body, a row from a
//! config file, a cell from a spreadsheet. [`Value`] is the closed set of
//! shapes such data can take, so every predicate is an exhaustive match
//! instead of an implicit coercion.
//!
//! # Example
//!
//! ```rust
//! use stillcheck::{Key, Kind, Map, Value};
//!
//! let list = Value::from(vec![1, 2, 3]);
//! assert_eq!(list.kind(), Kind::Sequence);
//! assert_eq!(list.len(), Some(3));
//!
//! let mut map = Map::new();
//! map.insert("name", "ada");
//! map.insert(7, 1.5);
//! let record = Value::from(map);
//! assert_eq!(record.get(&Key::from("7")), Some(&Value::Float(1.5)));
//! ```

use indexmap::IndexMap;
use std::fmt;

/// The kind of a [`Value`], without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    /// The absent value.
    Null,
    /// `true` or `false`.
    Bool,
    /// A whole number.
    Int,
    /// A floating-point number.
    Float,
    /// A string.
    Text,
    /// An index-addressed list.
    Sequence,
    /// A key-addressed, insertion-ordered collection.
    Mapping,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Null => "null",
            Kind::Bool => "boolean",
            Kind::Int => "integer",
            Kind::Float => "float",
            Kind::Text => "text",
            Kind::Sequence => "sequence",
            Kind::Mapping => "mapping",
        };
        f.write_str(name)
    }
}

/// A position inside a collection: an integer index or a string key.
///
/// Text that spells a canonical decimal integer (`"0"`, `"42"`, `"-3"`)
/// becomes an [`Key::Index`], so `"1"` and `1` address the same slot.
/// Anything else (`"01"`, `"+1"`, `"1.0"`, `"-0"`) stays a [`Key::Name`].
///
/// ```rust
/// use stillcheck::Key;
///
/// assert_eq!(Key::from("12"), Key::Index(12));
/// assert_eq!(Key::from("012"), Key::Name("012".to_string()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Integer position.
    Index(i64),
    /// String key.
    Name(String),
}

fn canonical_index(text: &str) -> Option<i64> {
    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if (digits.len() > 1 && digits.starts_with('0')) || text == "-0" {
        return None;
    }
    text.parse().ok()
}

impl From<i64> for Key {
    fn from(index: i64) -> Self {
        Key::Index(index)
    }
}

impl From<i32> for Key {
    fn from(index: i32) -> Self {
        Key::Index(i64::from(index))
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        match canonical_index(name) {
            Some(index) => Key::Index(index),
            None => Key::Name(name.to_string()),
        }
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        match canonical_index(&name) {
            Some(index) => Key::Index(index),
            None => Key::Name(name),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(index) => write!(f, "{index}"),
            Key::Name(name) => write!(f, "{name:?}"),
        }
    }
}

/// Insertion-ordered keyed collection.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Map(IndexMap<Key, Value>);

impl Map {
    /// Create an empty map.
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Insert a value, replacing (in place) any value already at `key`.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Look up the value stored at `key`.
    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.0.get(key)
    }

    /// Whether `key` is present.
    pub fn contains_key(&self, key: &Key) -> bool {
        self.0.contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, Key, Value> {
        self.0.iter()
    }

    /// Values in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, Key, Value> {
        self.0.values()
    }
}

impl<K: Into<Key>, V: Into<Value>> FromIterator<(K, V)> for Map {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Map::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = (&'a Key, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A loosely-typed input value.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// The absent value.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A whole number. Never unified with [`Value::Float`], even for `1.0`.
    Int(i64),
    /// A floating-point number.
    Float(f64),
    /// A string.
    Text(String),
    /// An index-addressed list.
    Sequence(Vec<Value>),
    /// A key-addressed collection.
    Mapping(Map),
}

impl Value {
    /// The kind of this value.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) => Kind::Int,
            Value::Float(_) => Kind::Float,
            Value::Text(_) => Kind::Text,
            Value::Sequence(_) => Kind::Sequence,
            Value::Mapping(_) => Kind::Mapping,
        }
    }

    /// Whether this is [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Whether this is a sequence or a mapping.
    pub fn is_collection(&self) -> bool {
        matches!(self, Value::Sequence(_) | Value::Mapping(_))
    }

    /// Whether this value counts as "set".
    ///
    /// The falsy values are: `null`, `false`, `0`, `0.0` (either sign), the
    /// empty text, the text `"0"`, and empty collections. Everything else,
    /// including `NaN` and `"0.0"`, is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Int(i) => *i != 0,
            Value::Float(x) => *x != 0.0,
            Value::Text(s) => !(s.is_empty() || s == "0"),
            Value::Sequence(items) => !items.is_empty(),
            Value::Mapping(map) => !map.is_empty(),
        }
    }

    /// Measured length, shared by the length predicates.
    ///
    /// Collections report their element count and text reports its length
    /// in bytes (so `"é"` has length 2). Every other kind has no length,
    /// which is distinct from a length of zero.
    ///
    /// ```rust
    /// use stillcheck::Value;
    ///
    /// assert_eq!(Value::from("abc").len(), Some(3));
    /// assert_eq!(Value::from(Vec::<i64>::new()).len(), Some(0));
    /// assert_eq!(Value::from(7).len(), None);
    /// ```
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> Option<usize> {
        match self {
            Value::Sequence(items) => Some(items.len()),
            Value::Mapping(map) => Some(map.len()),
            Value::Text(text) => Some(text.len()),
            Value::Null | Value::Bool(_) | Value::Int(_) | Value::Float(_) => None,
        }
    }

    /// The element at `key`, if this is a collection holding one.
    pub fn get(&self, key: &Key) -> Option<&Value> {
        match (self, key) {
            (Value::Sequence(items), Key::Index(index)) => {
                usize::try_from(*index).ok().and_then(|i| items.get(i))
            }
            (Value::Mapping(map), key) => map.get(key),
            _ => None,
        }
    }

    /// Key/value pairs of a collection in source order.
    ///
    /// Sequences yield their positions as [`Key::Index`]. Scalars yield
    /// nothing.
    pub fn entries(&self) -> Entries<'_> {
        match self {
            Value::Sequence(items) => Entries::Sequence(items.iter().enumerate()),
            Value::Mapping(map) => Entries::Mapping(map.iter()),
            _ => Entries::Empty,
        }
    }
}

/// Iterator returned by [`Value::entries`].
#[derive(Debug)]
pub enum Entries<'a> {
    /// Entries of a sequence.
    Sequence(std::iter::Enumerate<std::slice::Iter<'a, Value>>),
    /// Entries of a mapping.
    Mapping(indexmap::map::Iter<'a, Key, Value>),
    /// A scalar has no entries.
    Empty,
}

impl<'a> Iterator for Entries<'a> {
    type Item = (Key, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Entries::Sequence(iter) => iter
                .next()
                .map(|(index, value)| (Key::Index(index as i64), value)),
            Entries::Mapping(iter) => iter.next().map(|(key, value)| (key.clone(), value)),
            Entries::Empty => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Entries::Sequence(iter) => iter.size_hint(),
            Entries::Mapping(iter) => iter.size_hint(),
            Entries::Empty => (0, Some(0)),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x:?}"),
            Value::Text(s) => write!(f, "{s:?}"),
            Value::Sequence(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Mapping(map) => {
                f.write_str("{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Int(i64::from(n))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Value::Float(f64::from(x))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Mapping(map)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(items: [T; N]) -> Self {
        Value::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Sequence(iter.into_iter().collect())
    }
}
