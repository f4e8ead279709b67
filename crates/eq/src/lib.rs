//! `fptour-eq` — composable equivalence relations.
//!
//! This crate contains **pure** building blocks for custom equality: a single
//! capability trait plus combinators that derive new relations from existing
//! ones (per field, per element, through a projection).

pub mod array;
pub mod combinators;
pub mod contramap;
pub mod elem;
pub mod equivalence;
pub mod geometry;
pub mod struct_eq;
pub mod user;

pub use array::{ArrayEq, array_eq};
pub use combinators::{OptionEq, TupleEq, option_eq, tuple_eq};
pub use contramap::{Contramap, contramap};
pub use elem::{elem, elem_by};
pub use equivalence::{
    EQ_BOOL, EQ_NUMBER, EQ_STRING, Equivalence, EquivalenceExt, FromEquals, Strict, eq_strict,
    equals_number, from_equals,
};
pub use geometry::{Point, Vector, point_eq, points_eq, vector_eq};
pub use struct_eq::StructEq;
pub use user::{User, UserEq, user_eq};
