//! Equivalences over pairs and optional values.

use crate::equivalence::Equivalence;

/// Component-wise equivalence over `(A, B)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TupleEq<EA, EB> {
    first: EA,
    second: EB,
}

impl<A, B, EA, EB> Equivalence<(A, B)> for TupleEq<EA, EB>
where
    EA: Equivalence<A>,
    EB: Equivalence<B>,
{
    fn equals(&self, x: &(A, B), y: &(A, B)) -> bool {
        self.first.equals(&x.0, &y.0) && self.second.equals(&x.1, &y.1)
    }
}

pub fn tuple_eq<EA, EB>(first: EA, second: EB) -> TupleEq<EA, EB> {
    TupleEq { first, second }
}

/// Equivalence over `Option<A>`: both absent, or both present with equivalent
/// payloads.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionEq<E> {
    inner: E,
}

impl<A, E: Equivalence<A>> Equivalence<Option<A>> for OptionEq<E> {
    fn equals(&self, x: &Option<A>, y: &Option<A>) -> bool {
        match (x, y) {
            (None, None) => true,
            (Some(a), Some(b)) => self.inner.equals(a, b),
            _ => false,
        }
    }
}

pub fn option_eq<E>(inner: E) -> OptionEq<E> {
    OptionEq { inner }
}
