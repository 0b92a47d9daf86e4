//! Named tuple: a fixed collection of values accessed by string key.

use std::collections::hash_map::DefaultHasher;
use std::fmt::{self, Write};
use std::hash::{Hash, Hasher};

use indexmap::IndexMap;

use crate::error::TypeMismatch;
use crate::value::Value;

/// Immutable mapping from string keys to heterogeneous [`Value`]s.
///
/// Key insertion order is preserved for display but carries no meaning for
/// equality or hashing: two named tuples holding the same key-value pairs
/// are equal and hash identically however they were built.
///
/// Construction takes the backing map by value, so no caller can retain a
/// handle to it and mutate it afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamedTuple(IndexMap<String, Value>);

impl NamedTuple {
    /// Wraps a prepared key-to-value mapping.
    ///
    /// No validation is performed; construction never fails.
    #[must_use]
    pub fn new(fields: IndexMap<String, Value>) -> Self {
        Self(fields)
    }

    /// Returns the value for `key`, or `None` if the key is not present.
    ///
    /// A missing key is absence, not an error.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns the value for `key` converted to `T`, checked at runtime.
    ///
    /// A missing key yields `Ok(None)`, mirroring [`get`](Self::get); a
    /// present value of the wrong type yields a [`TypeMismatch`].
    pub fn get_as<'v, T>(&'v self, key: &str) -> Result<Option<T>, TypeMismatch>
    where
        T: TryFrom<&'v Value, Error = TypeMismatch>,
    {
        match self.0.get(key) {
            Some(value) => T::try_from(value).map(Some),
            None => Ok(None),
        }
    }

    /// Returns the number of key-value pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Iterates over the keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Iterates over the values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.0.values()
    }

    /// Iterates over the key-value pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl From<IndexMap<String, Value>> for NamedTuple {
    fn from(fields: IndexMap<String, Value>) -> Self {
        Self(fields)
    }
}

impl<K, V> FromIterator<(K, V)> for NamedTuple
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

/// Order-independent hash over the key-value pair set.
///
/// Each entry is hashed on its own and the 64-bit results are folded with a
/// commutative wrapping add, so equal instances hash identically regardless
/// of insertion order. Must stay consistent with the map equality above.
impl Hash for NamedTuple {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut folded: u64 = 0;
        for (key, value) in &self.0 {
            let mut entry_hasher = DefaultHasher::new();
            key.hash(&mut entry_hasher);
            value.hash(&mut entry_hasher);
            folded = folded.wrapping_add(entry_hasher.finish());
        }
        state.write_usize(self.0.len());
        state.write_u64(folded);
    }
}

/// Renders as `{key1=value1, key2=value2}` in insertion order.
///
/// Equal instances built in different orders may render differently; the
/// textual form is not part of the equality contract.
impl fmt::Display for NamedTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('{')?;
        let mut iter = self.0.iter();
        if let Some((key, value)) = iter.next() {
            write!(f, "{key}={value}")?;
            for (key, value) in iter {
                write!(f, ", {key}={value}")?;
            }
        }
        f.write_char('}')
    }
}

/// Builds a [`NamedTuple`] from `key => value` pairs, converting each value
/// via `Value::from`.
///
/// ```
/// use tuplekit::named_tuple;
///
/// let key = named_tuple! {
///     "Region" => "North",
///     "Year" => 2023,
/// };
/// assert_eq!(key.len(), 2);
/// ```
#[macro_export]
macro_rules! named_tuple {
    () => {
        $crate::NamedTuple::default()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        <$crate::NamedTuple as ::core::iter::FromIterator<_>>::from_iter([
            $(($key, $crate::Value::from($value))),+
        ])
    };
}
