use std::fmt;

use tracing::trace;

use crate::error::Result;
use crate::math::orientation::side;
use crate::math::triangle::{Segment, Triangle};
use crate::math::Point3;

/// How a segment relates to a triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeClassification {
    /// Disjoint, or strictly inside the triangle without reaching its boundary.
    NotIntersecting,
    /// Meets the boundary without crossing it.
    Touching,
    /// Collinear with one of the triangle's edges.
    Overlapping,
    /// Crosses the boundary.
    Intersecting,
}

impl EdgeClassification {
    /// Numeric code: `0`, `-1`, `2`, `1` in declaration order. Used as a
    /// tie-break key, not a ranking.
    #[must_use]
    pub const fn code(self) -> i8 {
        match self {
            Self::NotIntersecting => 0,
            Self::Touching => -1,
            Self::Overlapping => 2,
            Self::Intersecting => 1,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NotIntersecting => "NOT_INTERSECTING",
            Self::Touching => "TOUCHING",
            Self::Overlapping => "OVERLAPPING",
            Self::Intersecting => "INTERSECTING",
        }
    }
}

impl fmt::Display for EdgeClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classifies `segment` against `triangle`, both assumed coplanar.
///
/// Eight orientation products decide the outcome: the two endpoints against
/// each triangle edge (referenced to the opposite vertex), and two triangle
/// edges against the segment's supporting line. Rules are checked in order
/// and the first match wins:
///
/// 1. An edge pair `(-, -)` or the segment-line pair `(+, +)`: not intersecting.
/// 2. An edge pair `(0, 0)`: overlapping.
/// 3. An edge pair `(<= 0, <= 0)` or the segment-line pair `(>= 0, >= 0)`: touching.
/// 4. All six edge products strictly positive: not intersecting.
/// 5. Otherwise: intersecting.
///
/// Rule 2 must precede rule 3 since `(0, 0)` also satisfies `(<= 0, <= 0)`.
#[must_use]
pub fn classify_segment(segment: &Segment, triangle: &Triangle) -> EdgeClassification {
    let (p0, p1) = (&segment.start, &segment.end);
    let [t0, t1, t2] = triangle.vertices();

    let edge_pairs = [
        (side(p0, t2, t0, t1), side(p1, t2, t0, t1)),
        (side(p0, t0, t1, t2), side(p1, t0, t1, t2)),
        (side(p0, t1, t2, t0), side(p1, t1, t2, t0)),
    ];
    let (l0, l1) = (side(t0, t1, p0, p1), side(t1, t2, p0, p1));
    trace!(?edge_pairs, l0, l1, "segment orientation products");

    if edge_pairs.iter().any(|&(a, b)| a < 0.0 && b < 0.0) || (l0 > 0.0 && l1 > 0.0) {
        return EdgeClassification::NotIntersecting;
    }
    if edge_pairs.iter().any(|&(a, b)| a == 0.0 && b == 0.0) {
        return EdgeClassification::Overlapping;
    }
    if edge_pairs.iter().any(|&(a, b)| a <= 0.0 && b <= 0.0) || (l0 >= 0.0 && l1 >= 0.0) {
        return EdgeClassification::Touching;
    }
    if edge_pairs.iter().all(|&(a, b)| a > 0.0 && b > 0.0) {
        return EdgeClassification::NotIntersecting;
    }
    EdgeClassification::Intersecting
}

/// Classifies segment `p0p1` against triangle `t0t1t2`.
///
/// # Errors
///
/// Returns `GeometryError::DegenerateTriangle` if the triangle vertices are
/// collinear.
pub fn segment_intersection_2d(
    p0: &Point3,
    p1: &Point3,
    t0: &Point3,
    t1: &Point3,
    t2: &Point3,
) -> Result<EdgeClassification> {
    let triangle = Triangle::new(*t0, *t1, *t2)?;
    Ok(classify_segment(&Segment::new(*p0, *p1), &triangle))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{GeometryError, TrisectError};

    fn pt(x: f64, y: f64) -> Point3 {
        Point3::new(x, y, 0.0)
    }

    fn reference() -> Triangle {
        Triangle::new(pt(0.0, 0.0), pt(2.0, 0.0), pt(0.0, 2.0)).unwrap()
    }

    fn classify(a: Point3, b: Point3) -> EdgeClassification {
        let seg = Segment::new(a, b);
        let forward = classify_segment(&seg, &reference());
        assert_eq!(
            forward,
            classify_segment(&seg.reversed(), &reference()),
            "endpoint order changed the result"
        );
        forward
    }

    #[test]
    fn codes_and_labels() {
        assert_eq!(EdgeClassification::NotIntersecting.code(), 0);
        assert_eq!(EdgeClassification::Touching.code(), -1);
        assert_eq!(EdgeClassification::Overlapping.code(), 2);
        assert_eq!(EdgeClassification::Intersecting.code(), 1);
        assert_eq!(EdgeClassification::Touching.to_string(), "TOUCHING");
    }

    #[test]
    fn segment_far_outside() {
        assert_eq!(
            classify(pt(3.0, 3.0), pt(4.0, 4.0)),
            EdgeClassification::NotIntersecting
        );
    }

    #[test]
    fn triangle_on_one_side_of_segment_line() {
        assert_eq!(
            classify(pt(-1.0, 5.0), pt(5.0, 5.0)),
            EdgeClassification::NotIntersecting
        );
    }

    #[test]
    fn chord_strictly_inside_is_not_intersecting() {
        assert_eq!(
            classify(pt(0.2, 0.2), pt(0.5, 0.5)),
            EdgeClassification::NotIntersecting
        );
    }

    #[test]
    fn segment_crossing_one_edge() {
        assert_eq!(
            classify(pt(0.5, 0.5), pt(3.0, 3.0)),
            EdgeClassification::Intersecting
        );
    }

    #[test]
    fn segment_passing_through() {
        assert_eq!(
            classify(pt(-1.0, 1.0), pt(3.0, 1.0)),
            EdgeClassification::Intersecting
        );
    }

    #[test]
    fn segment_along_an_edge() {
        assert_eq!(
            classify(pt(0.5, 0.0), pt(1.5, 0.0)),
            EdgeClassification::Overlapping
        );
    }

    #[test]
    fn collinear_with_edge_but_beyond_it() {
        // Rule 1 wins: the far side of the opposite edge excludes it first.
        assert_eq!(
            classify(pt(3.0, 0.0), pt(4.0, 0.0)),
            EdgeClassification::NotIntersecting
        );
    }

    #[test]
    fn collinear_extension_ending_at_vertex() {
        assert_eq!(
            classify(pt(-1.0, 0.0), pt(0.0, 0.0)),
            EdgeClassification::Overlapping
        );
    }

    #[test]
    fn touching_at_vertex() {
        assert_eq!(
            classify(pt(2.0, 0.0), pt(3.0, 0.5)),
            EdgeClassification::Touching
        );
        assert_eq!(
            classify(pt(2.0, 0.0), pt(3.0, -2.0)),
            EdgeClassification::Touching
        );
    }

    #[test]
    fn touching_edge_from_outside() {
        assert_eq!(
            classify(pt(1.0, 0.0), pt(1.0, -1.0)),
            EdgeClassification::Touching
        );
    }

    #[test]
    fn endpoint_on_edge_reaching_inside() {
        assert_eq!(
            classify(pt(1.0, 0.0), pt(0.5, 0.5)),
            EdgeClassification::Intersecting
        );
    }

    #[test]
    fn winding_does_not_matter() {
        let ccw = Triangle::new(pt(0.0, 0.0), pt(2.0, 0.0), pt(0.0, 2.0)).unwrap();
        let cw = Triangle::new(pt(0.0, 0.0), pt(0.0, 2.0), pt(2.0, 0.0)).unwrap();
        let seg = Segment::new(pt(0.5, 0.5), pt(3.0, 3.0));
        assert_eq!(classify_segment(&seg, &ccw), classify_segment(&seg, &cw));
    }

    #[test]
    fn raw_points_entry() {
        let result = segment_intersection_2d(
            &pt(-1.0, 1.0),
            &pt(3.0, 1.0),
            &pt(0.0, 0.0),
            &pt(2.0, 0.0),
            &pt(0.0, 2.0),
        )
        .unwrap();
        assert_eq!(result, EdgeClassification::Intersecting);
    }

    #[test]
    fn raw_points_entry_rejects_degenerate_triangle() {
        let err = segment_intersection_2d(
            &pt(-1.0, 1.0),
            &pt(3.0, 1.0),
            &pt(0.0, 0.0),
            &pt(1.0, 0.0),
            &pt(2.0, 0.0),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            TrisectError::Geometry(GeometryError::DegenerateTriangle { .. })
        ));
    }
}
