use super::orientation::inside_triangle;
use super::{Point3, Vector3, TOLERANCE};
use crate::error::{GeometryError, Result};

/// A directed segment between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point3,
    pub end: Point3,
}

impl Segment {
    /// Creates a segment from `start` to `end`.
    #[must_use]
    pub fn new(start: Point3, end: Point3) -> Self {
        Self { start, end }
    }

    /// Returns the same segment traversed the other way.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }

    /// Returns `end - start`.
    #[must_use]
    pub fn direction(&self) -> Vector3 {
        self.end - self.start
    }
}

/// A triangle with non-zero area.
///
/// Winding is free: the classifiers treat `abc` and `acb` as the same face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    vertices: [Point3; 3],
}

impl Triangle {
    /// Creates a triangle from three vertices.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegenerateTriangle` if the vertices are
    /// collinear: twice the area is at most [`TOLERANCE`] times the squared
    /// longest edge, so the test holds at any coordinate scale.
    pub fn new(a: Point3, b: Point3, c: Point3) -> Result<Self> {
        let doubled_area = (b - a).cross(&(c - a)).norm();
        let longest_sq = (b - a)
            .norm_squared()
            .max((c - b).norm_squared())
            .max((a - c).norm_squared());
        if doubled_area <= TOLERANCE * longest_sq {
            return Err(GeometryError::DegenerateTriangle {
                area: doubled_area * 0.5,
            }
            .into());
        }
        Ok(Self {
            vertices: [a, b, c],
        })
    }

    /// Creates a triangle from a vertex array.
    ///
    /// # Errors
    ///
    /// Same as [`Triangle::new`].
    pub fn from_array(vertices: [Point3; 3]) -> Result<Self> {
        let [a, b, c] = vertices;
        Self::new(a, b, c)
    }

    /// Returns the three vertices in construction order.
    #[must_use]
    pub fn vertices(&self) -> &[Point3; 3] {
        &self.vertices
    }

    #[must_use]
    pub fn a(&self) -> &Point3 {
        &self.vertices[0]
    }

    #[must_use]
    pub fn b(&self) -> &Point3 {
        &self.vertices[1]
    }

    #[must_use]
    pub fn c(&self) -> &Point3 {
        &self.vertices[2]
    }

    /// Returns the unsigned area.
    #[must_use]
    pub fn area(&self) -> f64 {
        let [a, b, c] = &self.vertices;
        (b - a).cross(&(c - a)).norm() * 0.5
    }

    /// Returns `(b - a) x (c - a)`.
    #[must_use]
    pub fn normal(&self) -> Vector3 {
        let [a, b, c] = &self.vertices;
        (b - a).cross(&(c - a))
    }

    /// Indices of the two coordinate axes kept when projecting the triangle's
    /// plane by dropping the dominant normal component.
    #[must_use]
    pub fn projection_axes(&self) -> (usize, usize) {
        let n = self.normal().abs();
        if n.x > n.y && n.x > n.z {
            (1, 2)
        } else if n.y > n.z {
            (0, 2)
        } else {
            (0, 1)
        }
    }

    /// Returns the directed edges `ab`, `bc`, `ca`.
    #[must_use]
    pub fn edges(&self) -> [Segment; 3] {
        let [a, b, c] = self.vertices;
        [Segment::new(a, b), Segment::new(b, c), Segment::new(c, a)]
    }

    /// Tests whether `p` lies inside the triangle. Points on an edge or at a
    /// vertex count as inside.
    #[must_use]
    pub fn contains_point(&self, p: &Point3) -> bool {
        let [a, b, c] = &self.vertices;
        inside_triangle(p, a, b, c)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::TrisectError;
    use approx::assert_relative_eq;

    fn pt(x: f64, y: f64) -> Point3 {
        Point3::new(x, y, 0.0)
    }

    #[test]
    fn new_rejects_collinear_vertices() {
        let err = Triangle::new(pt(0.0, 0.0), pt(1.0, 1.0), pt(3.0, 3.0)).unwrap_err();
        assert!(matches!(
            err,
            TrisectError::Geometry(GeometryError::DegenerateTriangle { .. })
        ));
    }

    #[test]
    fn new_rejects_repeated_vertex() {
        assert!(Triangle::new(pt(1.0, 2.0), pt(1.0, 2.0), pt(0.0, 0.0)).is_err());
    }

    #[test]
    fn new_rejects_coincident_vertices() {
        assert!(Triangle::new(pt(1.0, 2.0), pt(1.0, 2.0), pt(1.0, 2.0)).is_err());
    }

    #[test]
    fn new_accepts_tiny_triangle() {
        let s = 1e-6;
        let tri = Triangle::new(pt(0.0, 0.0), pt(2.0 * s, 0.0), pt(0.0, 2.0 * s)).unwrap();
        assert_relative_eq!(tri.area(), 2.0 * s * s, max_relative = 1e-12);
    }

    #[test]
    fn new_rejects_nearly_collinear_at_large_scale() {
        let s = 1e6;
        assert!(Triangle::new(pt(0.0, 0.0), pt(s, 0.0), pt(2.0 * s, 1e-6)).is_err());
    }

    #[test]
    fn area_of_right_triangle() {
        let tri = Triangle::new(pt(0.0, 0.0), pt(2.0, 0.0), pt(0.0, 2.0)).unwrap();
        assert_relative_eq!(tri.area(), 2.0);
    }

    #[test]
    fn projection_axes_drop_dominant_normal_component() {
        let xy = Triangle::new(pt(0.0, 0.0), pt(1.0, 0.0), pt(0.0, 1.0)).unwrap();
        assert_eq!(xy.projection_axes(), (0, 1));
        let xz = Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
        )
        .unwrap();
        assert_eq!(xz.projection_axes(), (0, 2));
        let yz = Triangle::new(
            Point3::new(3.0, 0.0, 0.0),
            Point3::new(3.0, 1.0, 0.0),
            Point3::new(3.0, 0.0, 1.0),
        )
        .unwrap();
        assert_eq!(yz.projection_axes(), (1, 2));
    }

    #[test]
    fn edges_follow_vertex_order() {
        let tri = Triangle::from_array([pt(0.0, 0.0), pt(1.0, 0.0), pt(0.0, 1.0)]).unwrap();
        let [ab, bc, ca] = tri.edges();
        assert_eq!(ab.start, *tri.a());
        assert_eq!(ab.end, *tri.b());
        assert_eq!(bc.end, *tri.c());
        assert_eq!(ca.end, *tri.a());
    }

    #[test]
    fn contains_point_matches_boundary_rule() {
        let tri = Triangle::new(pt(0.0, 0.0), pt(2.0, 0.0), pt(0.0, 2.0)).unwrap();
        assert!(tri.contains_point(&pt(0.5, 0.5)));
        assert!(tri.contains_point(&pt(2.0, 0.0)));
        assert!(!tri.contains_point(&pt(2.0, 0.1)));
    }

    #[test]
    fn segment_reversed_and_direction() {
        let seg = Segment::new(pt(1.0, 1.0), pt(4.0, 5.0));
        let rev = seg.reversed();
        assert_eq!(rev.start, seg.end);
        assert_eq!(rev.end, seg.start);
        assert_relative_eq!(seg.direction().norm(), 5.0);
    }
}
