//! Points, vectors and their structural equivalences.

use serde::{Deserialize, Serialize};

use crate::array::{ArrayEq, array_eq};
use crate::equivalence::EQ_NUMBER;
use crate::struct_eq::StructEq;

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A directed segment between two points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    pub from: Point,
    pub to: Point,
}

impl Vector {
    pub const fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }
}

/// Points are equal iff both coordinates are (exactly) equal.
pub fn point_eq() -> StructEq<Point> {
    StructEq::new()
        .field("x", |p: &Point| &p.x, EQ_NUMBER)
        .field("y", |p: &Point| &p.y, EQ_NUMBER)
}

/// Vectors are equal iff both endpoints are equal points.
pub fn vector_eq() -> StructEq<Vector> {
    StructEq::new()
        .field("from", |v: &Vector| &v.from, point_eq())
        .field("to", |v: &Vector| &v.to, point_eq())
}

/// Sequences of points, compared index by index.
pub fn points_eq() -> ArrayEq<StructEq<Point>> {
    array_eq(point_eq())
}
