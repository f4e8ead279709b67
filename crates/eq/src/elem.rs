//! Membership under a custom equivalence.

use crate::equivalence::Equivalence;

/// Returns `true` iff some item of `haystack` is equivalent to `needle`.
///
/// Always `false` for an empty haystack. Stops at the first match.
pub fn elem<A, E>(relation: &E, needle: &A, haystack: &[A]) -> bool
where
    E: Equivalence<A> + ?Sized,
{
    haystack.iter().any(|item| relation.equals(item, needle))
}

/// Curried [`elem`]: fix the relation once, test membership repeatedly.
pub fn elem_by<A, E>(relation: E) -> impl Fn(&A, &[A]) -> bool
where
    E: Equivalence<A>,
{
    move |needle: &A, haystack: &[A]| elem(&relation, needle, haystack)
}
