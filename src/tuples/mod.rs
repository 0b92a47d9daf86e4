//! The two container types: positional [`Tuple`] and [`NamedTuple`].

pub mod named;
pub mod tuple;

pub use named::NamedTuple;
pub use tuple::Tuple;
