//! Element-wise equivalence over sequences.

use crate::equivalence::Equivalence;

/// Equivalence over slices derived from an element relation.
///
/// Two sequences are equal iff they have the same length and the element
/// relation holds pairwise at every index, in order. This is sequence
/// equality, not set or multiset equality: `[a, b]` and `[b, a]` differ unless
/// `a` and `b` are themselves equivalent.
///
/// The relation is defined over `[A]`; pass `Vec`s as slices
/// (`eq.equals(&xs[..], &ys[..])` or `xs.as_slice()`).
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrayEq<E> {
    element: E,
}

impl<E> ArrayEq<E> {
    pub fn element(&self) -> &E {
        &self.element
    }
}

impl<A, E: Equivalence<A>> Equivalence<[A]> for ArrayEq<E> {
    fn equals(&self, x: &[A], y: &[A]) -> bool {
        x.len() == y.len() && x.iter().zip(y).all(|(a, b)| self.element.equals(a, b))
    }
}

/// Lift an element relation to a relation over sequences of that element.
pub fn array_eq<E>(element: E) -> ArrayEq<E> {
    ArrayEq { element }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equivalence::{EQ_NUMBER, from_equals};

    #[test]
    fn equal_length_and_elements() {
        let eq = array_eq(EQ_NUMBER);

        assert!(eq.equals(&[1.0, 2.0, 3.0][..], &[1.0, 2.0, 3.0][..]));
        assert!(!eq.equals(&[1.0, 2.0, 3.0][..], &[1.0, 2.0, 4.0][..]));
    }

    #[test]
    fn different_lengths_are_never_equal() {
        let eq = array_eq(EQ_NUMBER);

        assert!(!eq.equals(&[1.0, 2.0][..], &[1.0, 2.0, 3.0][..]));
        assert!(!eq.equals(&[1.0, 2.0, 3.0][..], &[1.0, 2.0][..]));
    }

    #[test]
    fn order_matters() {
        let eq = array_eq(EQ_NUMBER);
        assert!(!eq.equals(&[1.0, 2.0][..], &[2.0, 1.0][..]));
    }

    #[test]
    fn empty_sequences_are_equal() {
        let eq = array_eq(EQ_NUMBER);
        let empty: [f64; 0] = [];
        assert!(eq.equals(&empty[..], &empty[..]));
    }

    #[test]
    fn uses_the_element_relation_not_partial_eq() {
        let parity = from_equals(|x: &i32, y: &i32| x % 2 == y % 2);
        let eq = array_eq(parity);

        assert!(eq.equals(&[1, 2, 3][..], &[5, 8, 7][..]));
        assert!(!eq.equals(&[1, 2, 3][..], &[2, 2, 3][..]));
    }
}
