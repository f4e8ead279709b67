//! Field-by-field equivalence over record types.

use core::fmt;

use crate::equivalence::Equivalence;

type FieldEquals<A> = Box<dyn Fn(&A, &A) -> bool + Send + Sync>;

struct Field<A: ?Sized> {
    name: &'static str,
    equals: FieldEquals<A>,
}

/// Equivalence over a record, derived from one relation per field.
///
/// Two records are equal iff **every** registered field relation holds for the
/// corresponding field values. Fields form a mapping from name to relation:
/// registering a name twice replaces the earlier relation, and registration
/// order never changes the result.
///
/// A `StructEq` with no fields considers every pair of records equal.
///
/// ## Usage Pattern
///
/// ```ignore
/// let point: StructEq<Point> = StructEq::new()
///     .field("x", |p: &Point| &p.x, EQ_NUMBER)
///     .field("y", |p: &Point| &p.y, EQ_NUMBER);
///
/// let vector: StructEq<Vector> = StructEq::new()
///     .field("from", |v: &Vector| &v.from, point_eq())
///     .field("to", |v: &Vector| &v.to, point_eq());
/// ```
pub struct StructEq<A: ?Sized> {
    fields: Vec<Field<A>>,
}

impl<A: ?Sized> StructEq<A> {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Register `relation` for the field reached through `get`.
    pub fn field<V, G, E>(mut self, name: &'static str, get: G, relation: E) -> Self
    where
        A: 'static,
        V: ?Sized + 'static,
        G: Fn(&A) -> &V + Send + Sync + 'static,
        E: Equivalence<V> + Send + Sync + 'static,
    {
        let equals: FieldEquals<A> = Box::new(move |x, y| relation.equals(get(x), get(y)));

        match self.fields.iter_mut().find(|field| field.name == name) {
            Some(existing) => existing.equals = equals,
            None => self.fields.push(Field { name, equals }),
        }
        self
    }

    /// Names of the registered fields, in registration order.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|field| field.name)
    }
}

impl<A: ?Sized> Default for StructEq<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: ?Sized> fmt::Debug for StructEq<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StructEq")
            .field("fields", &self.field_names().collect::<Vec<_>>())
            .finish()
    }
}

impl<A: ?Sized> Equivalence<A> for StructEq<A> {
    fn equals(&self, x: &A, y: &A) -> bool {
        self.fields.iter().all(|field| (field.equals)(x, y))
    }
}
