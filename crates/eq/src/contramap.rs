//! Equivalence through a projection.

use core::fmt;
use core::marker::PhantomData;

use crate::equivalence::Equivalence;

/// Equivalence over `A` derived from an equivalence over the projected `B`.
///
/// `equals(x, y) == base.equals(&projection(x), &projection(y))`.
///
/// The derived relation only sees what the projection keeps. Projecting a
/// record onto one of its fields identifies records that differ elsewhere
/// (e.g. two users with the same id but different names are equal).
pub struct Contramap<F, E, B> {
    projection: F,
    base: E,
    _target: PhantomData<fn() -> B>,
}

impl<F: Clone, E: Clone, B> Clone for Contramap<F, E, B> {
    fn clone(&self) -> Self {
        Self {
            projection: self.projection.clone(),
            base: self.base.clone(),
            _target: PhantomData,
        }
    }
}

impl<F, E: fmt::Debug, B> fmt::Debug for Contramap<F, E, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Contramap")
            .field("target", &core::any::type_name::<B>())
            .field("base", &self.base)
            .finish()
    }
}

impl<A, B, F, E> Equivalence<A> for Contramap<F, E, B>
where
    A: ?Sized,
    F: Fn(&A) -> B,
    E: Equivalence<B>,
{
    fn equals(&self, x: &A, y: &A) -> bool {
        self.base.equals(&(self.projection)(x), &(self.projection)(y))
    }
}

/// Derive an equivalence over `A` by projecting into `B` and comparing there.
pub fn contramap<A, B, F, E>(projection: F, base: E) -> Contramap<F, E, B>
where
    A: ?Sized,
    F: Fn(&A) -> B,
    E: Equivalence<B>,
{
    Contramap {
        projection,
        base,
        _target: PhantomData,
    }
}
