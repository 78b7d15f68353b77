use super::triangle::Triangle;
use super::Point3;
use crate::error::Result;

/// Orientation product of `p1` and `p2` against the directed line `a -> b`.
///
/// Computes `((b - a) x (p1 - a)) . ((b - a) x (p2 - a))` with full 3D cross
/// products, so points in the XY plane and points on any other common plane
/// are handled alike. Only the sign is meaningful:
/// - positive: `p1` and `p2` lie on the same side of the line
/// - negative: they lie on opposite sides
/// - zero: at least one of them is collinear with `a` and `b`
#[must_use]
pub fn side(p1: &Point3, p2: &Point3, a: &Point3, b: &Point3) -> f64 {
    let ab = b - a;
    ab.cross(&(p1 - a)).dot(&ab.cross(&(p2 - a)))
}

/// Returns `true` if `p1` and `p2` are on the same side of line `ab`.
///
/// Zero counts as the same side: a point on the line is never reported as
/// separated from the other one.
#[must_use]
pub fn same_side(p1: &Point3, p2: &Point3, a: &Point3, b: &Point3) -> bool {
    side(p1, p2, a, b) >= 0.0
}

/// Tests whether `p` lies inside triangle `abc`, boundary included.
///
/// # Errors
///
/// Returns `GeometryError::DegenerateTriangle` if `a`, `b` and `c` are
/// collinear.
pub fn point_in_triangle(p: &Point3, a: &Point3, b: &Point3, c: &Point3) -> Result<bool> {
    Ok(Triangle::new(*a, *b, *c)?.contains_point(p))
}

/// Same-side test against all three edges, with the opposite vertex as the
/// reference point of each edge. Callers guarantee a non-degenerate triangle.
pub(crate) fn inside_triangle(p: &Point3, a: &Point3, b: &Point3, c: &Point3) -> bool {
    same_side(p, a, b, c) && same_side(p, b, a, c) && same_side(p, c, a, b)
}
