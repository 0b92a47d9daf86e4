mod error;
mod tuples;
mod value;

pub use crate::error::{TupleError, TypeMismatch};
pub use crate::tuples::{NamedTuple, Tuple};
pub use crate::value::{Value, ValueType};
