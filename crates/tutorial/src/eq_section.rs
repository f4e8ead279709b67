//! Walkthrough of the equivalence toolkit.

use std::io::{self, Write};

use fptour_eq::{
    EQ_NUMBER, Equivalence, Point, User, Vector, elem, equals_number, point_eq, points_eq, user_eq,
    vector_eq,
};

pub const HEADER: &str = "##################### EQ #####################";

pub fn print(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{HEADER}")?;

    let (a, b, c) = (2.0, 2.0, 2.0);

    writeln!(out, "Examples")?;
    writeln!(out, "1 & 2 {}", equals_number(1.0, 2.0))?;
    writeln!(out, "1 & 1 {}", equals_number(1.0, 1.0))?;

    writeln!(out, "Transitivity")?;
    writeln!(out, "a == b: {}", equals_number(a, b))?;
    writeln!(out, "b == c: {}", equals_number(b, c))?;
    writeln!(out, "--> a == c: {}", equals_number(a, c))?;

    writeln!(out, "Is in array")?;
    let haystack = [1.0, 2.0, 3.0];
    writeln!(out, "1, [1, 2, 3] --> true {}", elem(&EQ_NUMBER, &1.0, &haystack))?;
    writeln!(out, "4, [1, 2, 3] --> false {}", elem(&EQ_NUMBER, &4.0, &haystack))?;

    writeln!(out, "Complex type")?;
    let point = point_eq();
    writeln!(
        out,
        "{{x:16, y:20}} == {{x:16, y:20}} --> true {}",
        point.equals(&Point::new(16.0, 20.0), &Point::new(16.0, 20.0))
    )?;
    writeln!(
        out,
        "{{x:16, y:20}} == {{x=15, y=20}} --> false {}",
        point.equals(&Point::new(16.0, 20.0), &Point::new(15.0, 20.0))
    )?;

    writeln!(out, "More complex type")?;
    let vector = vector_eq();
    let vector_a = Vector::new(Point::new(16.0, 20.0), Point::new(20.0, 25.0));
    let vector_b = Vector::new(Point::new(1.0, 2.0), Point::new(2.0, 5.0));
    writeln!(out, "vectorA == vectorB {}", vector.equals(&vector_a, &vector_b))?;
    writeln!(out, "vectorA == vectorA {}", vector.equals(&vector_a, &vector_a))?;

    writeln!(out, "Array of points")?;
    let points = points_eq();
    let array_a = [Point::new(16.0, 20.0), Point::new(20.0, 21.0)];
    let array_b = [Point::new(1.0, 2.0), Point::new(2.0, 3.0)];
    writeln!(out, "arrayA == arrayB {}", points.equals(&array_a[..], &array_b[..]))?;
    writeln!(out, "arrayA == arrayA {}", points.equals(&array_a[..], &array_a[..]))?;

    writeln!(out, "Check for UserId")?;
    let users = user_eq();
    writeln!(
        out,
        "Same user id {}",
        users.equals(&User::new(1, "Giulio"), &User::new(1, "Giulio Canti"))
    )?;
    writeln!(
        out,
        "Different user id {}",
        users.equals(&User::new(1, "Giulio"), &User::new(2, "Giulio Canti"))
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered() -> String {
        let mut out = Vec::new();
        print(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn starts_with_header() {
        assert!(rendered().starts_with(HEADER));
    }

    #[test]
    fn prints_every_result() {
        let text = rendered();

        for line in [
            "1 & 2 false",
            "1 & 1 true",
            "--> a == c: true",
            "1, [1, 2, 3] --> true true",
            "4, [1, 2, 3] --> false false",
            "{x:16, y:20} == {x:16, y:20} --> true true",
            "{x:16, y:20} == {x=15, y=20} --> false false",
            "vectorA == vectorB false",
            "vectorA == vectorA true",
            "arrayA == arrayB false",
            "arrayA == arrayA true",
            "Same user id true",
            "Different user id false",
        ] {
            assert!(text.lines().any(|l| l == line), "missing line: {line}");
        }
    }
}
