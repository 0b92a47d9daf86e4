//! Dynamically typed element storage for the tuple containers.
//!
//! `Value` is a closed tagged union: each variant carries its own equality,
//! hashing and string rendering, so the containers' generic logic can
//! delegate uniformly without knowing what they hold.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem::discriminant;

use strum::Display;

use crate::error::TypeMismatch;
use crate::tuples::{NamedTuple, Tuple};

/// A single element held by a [`Tuple`] or [`NamedTuple`].
///
/// Values are immutable once constructed and cheap to compare and hash,
/// which is what makes the containers usable as map keys. Container
/// variants (`Tuple`, `Named`) allow composite keys to nest.
#[derive(Debug, Clone)]
pub enum Value {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Tuple(Tuple),
    Named(NamedTuple),
}

/// Type tag for a [`Value`], used in error messages and type checks.
///
/// Displays as the lowercase type name (e.g. `int`, `str`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ValueType {
    None,
    Bool,
    Int,
    Float,
    Str,
    Tuple,
    #[strum(serialize = "named tuple")]
    Named,
}

impl Value {
    /// Returns the type tag for this value.
    #[must_use]
    pub fn value_type(&self) -> ValueType {
        match self {
            Self::None => ValueType::None,
            Self::Bool(_) => ValueType::Bool,
            Self::Int(_) => ValueType::Int,
            Self::Float(_) => ValueType::Float,
            Self::Str(_) => ValueType::Str,
            Self::Tuple(_) => ValueType::Tuple,
            Self::Named(_) => ValueType::Named,
        }
    }

    /// Returns true if this is `Value::None`.
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Structural equality, strict per variant: values of different types are
/// never equal (`Int(1) != Float(1.0)`).
///
/// Floats compare bitwise so that equality and hashing agree; a tuple key
/// built from the same float bits always finds itself in a map.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::None, Self::None) => true,
            (Self::Bool(v1), Self::Bool(v2)) => v1 == v2,
            (Self::Int(v1), Self::Int(v2)) => v1 == v2,
            (Self::Float(v1), Self::Float(v2)) => v1.to_bits() == v2.to_bits(),
            (Self::Str(v1), Self::Str(v2)) => v1 == v2,
            (Self::Tuple(v1), Self::Tuple(v2)) => v1 == v2,
            (Self::Named(v1), Self::Named(v2)) => v1 == v2,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        discriminant(self).hash(state);
        match self {
            Self::None => {}
            Self::Bool(v) => v.hash(state),
            Self::Int(v) => v.hash(state),
            // bit representation, consistent with PartialEq
            Self::Float(v) => v.to_bits().hash(state),
            Self::Str(v) => v.hash(state),
            Self::Tuple(v) => v.hash(state),
            Self::Named(v) => v.hash(state),
        }
    }
}

/// The value's own string form: `none`, `true`, `42`, `2.5`, raw string
/// content, or the container's bracketed form.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => {
                let s = v.to_string();
                // whole floats keep a decimal point so they read as floats
                if v.is_finite() && !s.contains('.') {
                    write!(f, "{s}.0")
                } else {
                    f.write_str(&s)
                }
            }
            Self::Str(v) => f.write_str(v),
            Self::Tuple(v) => write!(f, "{v}"),
            Self::Named(v) => write!(f, "{v}"),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<Tuple> for Value {
    fn from(v: Tuple) -> Self {
        Self::Tuple(v)
    }
}

impl From<NamedTuple> for Value {
    fn from(v: NamedTuple) -> Self {
        Self::Named(v)
    }
}

/// `Option::None` maps to `Value::None`, `Some(v)` converts `v`.
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Self::None,
        }
    }
}

/// Attempts to convert a value to an i64 integer.
/// Returns a type mismatch if the value is not an Int variant.
impl TryFrom<&Value> for i64 {
    type Error = TypeMismatch;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Int(v) => Ok(*v),
            other => Err(TypeMismatch::new(ValueType::Int, other.value_type())),
        }
    }
}

/// Attempts to convert a value to an f64 float.
/// Int values widen to f64; anything else is a type mismatch.
impl TryFrom<&Value> for f64 {
    type Error = TypeMismatch;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Float(v) => Ok(*v),
            Value::Int(v) => Ok(*v as f64),
            other => Err(TypeMismatch::new(ValueType::Float, other.value_type())),
        }
    }
}

/// Attempts to convert a value to a bool.
/// Only Bool variants convert; this does not apply truthiness rules.
impl TryFrom<&Value> for bool {
    type Error = TypeMismatch;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bool(v) => Ok(*v),
            other => Err(TypeMismatch::new(ValueType::Bool, other.value_type())),
        }
    }
}

/// Attempts to convert a value to an owned String.
impl TryFrom<&Value> for String {
    type Error = TypeMismatch;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Str(v) => Ok(v.clone()),
            other => Err(TypeMismatch::new(ValueType::Str, other.value_type())),
        }
    }
}

/// Borrowing conversion to `&str`, for callers that don't need ownership.
impl<'v> TryFrom<&'v Value> for &'v str {
    type Error = TypeMismatch;

    fn try_from(value: &'v Value) -> Result<Self, Self::Error> {
        match value {
            Value::Str(v) => Ok(v.as_str()),
            other => Err(TypeMismatch::new(ValueType::Str, other.value_type())),
        }
    }
}
