//! The equivalence capability and its primitive instances.

use core::fmt;
use core::marker::PhantomData;
use std::rc::Rc;
use std::sync::Arc;

use crate::contramap::{Contramap, contramap};

/// An equivalence relation over `A`.
///
/// Implementations must be:
/// - **reflexive**: `equals(x, x)`
/// - **symmetric**: `equals(x, y) == equals(y, x)`
/// - **transitive**: `equals(x, y) && equals(y, z)` implies `equals(x, z)`
///
/// for the values they are applied to. Relations are plain values with no
/// mutable state, so a single instance can be built once and shared freely.
///
/// ## Composition
///
/// Relations are rarely written by hand. Instead they are derived:
///
/// ```ignore
/// let point = StructEq::new()
///     .field("x", |p: &Point| &p.x, EQ_NUMBER)
///     .field("y", |p: &Point| &p.y, EQ_NUMBER);
///
/// let path = array_eq(point);
/// let by_id = contramap(|u: &User| u.user_id, eq_strict::<u64>());
/// ```
pub trait Equivalence<A: ?Sized> {
    /// Returns `true` iff `x` and `y` are equivalent under this relation.
    fn equals(&self, x: &A, y: &A) -> bool;
}

impl<A: ?Sized, E: Equivalence<A> + ?Sized> Equivalence<A> for &E {
    fn equals(&self, x: &A, y: &A) -> bool {
        (**self).equals(x, y)
    }
}

impl<A: ?Sized, E: Equivalence<A> + ?Sized> Equivalence<A> for Box<E> {
    fn equals(&self, x: &A, y: &A) -> bool {
        (**self).equals(x, y)
    }
}

impl<A: ?Sized, E: Equivalence<A> + ?Sized> Equivalence<A> for Rc<E> {
    fn equals(&self, x: &A, y: &A) -> bool {
        (**self).equals(x, y)
    }
}

impl<A: ?Sized, E: Equivalence<A> + ?Sized> Equivalence<A> for Arc<E> {
    fn equals(&self, x: &A, y: &A) -> bool {
        (**self).equals(x, y)
    }
}

/// Equivalence delegating to `PartialEq` (`x == y`).
///
/// For floating point this is exact comparison: no epsilon, and `NaN` is not
/// equal to itself.
pub struct Strict<A: ?Sized>(PhantomData<fn(&A, &A) -> bool>);

impl<A: ?Sized> Strict<A> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<A: ?Sized> Clone for Strict<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: ?Sized> Copy for Strict<A> {}

impl<A: ?Sized> Default for Strict<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: ?Sized> fmt::Debug for Strict<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Strict<{}>", core::any::type_name::<A>())
    }
}

impl<A: PartialEq + ?Sized> Equivalence<A> for Strict<A> {
    fn equals(&self, x: &A, y: &A) -> bool {
        x == y
    }
}

/// Strict equivalence for any `PartialEq` type.
pub const fn eq_strict<A: PartialEq + ?Sized>() -> Strict<A> {
    Strict::new()
}

/// Numeric equivalence (exact match).
pub const EQ_NUMBER: Strict<f64> = Strict::new();

pub const EQ_STRING: Strict<str> = Strict::new();

pub const EQ_BOOL: Strict<bool> = Strict::new();

/// Primitive numeric equality: `x == y`, exact.
pub fn equals_number(x: f64, y: f64) -> bool {
    EQ_NUMBER.equals(&x, &y)
}

/// Equivalence backed by a plain closure.
///
/// The closure is trusted to be a lawful equivalence; nothing is checked.
#[derive(Clone, Copy)]
pub struct FromEquals<F> {
    equals: F,
}

impl<F> fmt::Debug for FromEquals<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FromEquals")
    }
}

impl<A: ?Sized, F> Equivalence<A> for FromEquals<F>
where
    F: Fn(&A, &A) -> bool,
{
    fn equals(&self, x: &A, y: &A) -> bool {
        (self.equals)(x, y)
    }
}

/// Lift a binary predicate into an [`Equivalence`].
pub fn from_equals<A: ?Sized, F>(equals: F) -> FromEquals<F>
where
    F: Fn(&A, &A) -> bool,
{
    FromEquals { equals }
}

/// Method-style combinators available on every relation.
pub trait EquivalenceExt<A: ?Sized>: Equivalence<A> + Sized {
    /// See [`contramap`](crate::contramap::contramap).
    fn contramap<S: ?Sized, F>(self, projection: F) -> Contramap<F, Self, A>
    where
        A: Sized,
        F: Fn(&S) -> A,
    {
        contramap(projection, self)
    }

    /// Erase the concrete relation type.
    fn boxed<'a>(self) -> Box<dyn Equivalence<A> + Send + Sync + 'a>
    where
        Self: Send + Sync + 'a,
    {
        Box::new(self)
    }
}

impl<A: ?Sized, E: Equivalence<A>> EquivalenceExt<A> for E {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equals_number_is_exact() {
        assert!(!equals_number(1.0, 2.0));
        assert!(equals_number(1.0, 1.0));
        assert!(!equals_number(0.1 + 0.2, 0.3));
    }

    #[test]
    fn nan_is_not_normalised() {
        assert!(!equals_number(f64::NAN, f64::NAN));
    }

    #[test]
    fn signed_zeros_compare_equal() {
        assert!(equals_number(0.0, -0.0));
    }

    #[test]
    fn strict_works_for_unsized_strings() {
        assert!(EQ_STRING.equals("abc", "abc"));
        assert!(!EQ_STRING.equals("abc", "abd"));
        assert!(EQ_BOOL.equals(&true, &true));
    }

    #[test]
    fn references_and_boxes_delegate() {
        let by_ref = &EQ_NUMBER;
        let boxed: Box<dyn Equivalence<f64> + Send + Sync> = EQ_NUMBER.boxed();
        let shared = Arc::new(EQ_NUMBER);

        assert!(by_ref.equals(&2.0, &2.0));
        assert!(boxed.equals(&2.0, &2.0));
        assert!(!shared.equals(&2.0, &3.0));
    }

    #[test]
    fn from_equals_uses_the_closure() {
        let case_insensitive = from_equals(|x: &str, y: &str| x.eq_ignore_ascii_case(y));

        assert!(case_insensitive.equals("Giulio", "GIULIO"));
        assert!(!case_insensitive.equals("Giulio", "Canti"));
    }

    #[test]
    fn strict_debug_names_the_type() {
        assert_eq!(format!("{:?}", EQ_NUMBER), "Strict<f64>");
    }
}
