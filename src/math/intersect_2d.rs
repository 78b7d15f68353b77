use tracing::trace;

use super::{Point2, Vector2, TOLERANCE};
use crate::error::{GeometryError, ParamsError, Result};

/// Tuning for the line/segment intersection primitive.
#[derive(Debug, Clone, Copy)]
pub struct IntersectionParams {
    parallel_tolerance: f64,
}

impl IntersectionParams {
    /// Creates parameters with a custom parallel tolerance.
    ///
    /// # Errors
    ///
    /// Returns `ParamsError::InvalidTolerance` if the tolerance is not a
    /// positive finite number.
    pub fn new(parallel_tolerance: f64) -> Result<Self> {
        if !parallel_tolerance.is_finite() || parallel_tolerance <= 0.0 {
            return Err(ParamsError::InvalidTolerance(parallel_tolerance).into());
        }
        Ok(Self { parallel_tolerance })
    }

    /// Determinant magnitude below which two lines count as parallel.
    #[must_use]
    pub fn parallel_tolerance(&self) -> f64 {
        self.parallel_tolerance
    }
}

impl Default for IntersectionParams {
    fn default() -> Self {
        Self {
            parallel_tolerance: TOLERANCE,
        }
    }
}

/// Outcome of intersecting the lines through two segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineIntersection {
    /// The lines cross at a single point.
    pub intersects: bool,
    /// The segments share a point. For parallel lines this means the lines
    /// are collinear, whether or not the segments overlap.
    pub within_segment: bool,
    /// Crossing point, only for non-parallel lines.
    pub point: Option<Point2>,
    /// Perpendicular distance between the lines, only for parallel lines.
    pub distance: Option<f64>,
}

/// Intersects line `p1p2` with line `p3p4` using the default tolerance.
///
/// # Errors
///
/// Returns `GeometryError::ZeroLengthSegment` if either segment has
/// coincident endpoints.
pub fn lines_intersection_2d(
    p1: &Point2,
    p2: &Point2,
    p3: &Point2,
    p4: &Point2,
) -> Result<LineIntersection> {
    lines_intersection_2d_with(&IntersectionParams::default(), p1, p2, p3, p4)
}

/// Intersects line `p1p2` with line `p3p4`.
///
/// Solves `p1 + u * (p2 - p1) = p3 + v * (p4 - p3)`. When the determinant
/// falls below the parallel tolerance the lines are treated as parallel and
/// the perpendicular distance between them is returned instead of a point.
///
/// # Errors
///
/// Returns `GeometryError::ZeroLengthSegment` if either segment has
/// coincident endpoints.
pub fn lines_intersection_2d_with(
    params: &IntersectionParams,
    p1: &Point2,
    p2: &Point2,
    p3: &Point2,
    p4: &Point2,
) -> Result<LineIntersection> {
    let eps = params.parallel_tolerance;
    let dp1 = p2 - p1;
    let dp2 = p4 - p3;
    if dp1.norm_squared() <= 0.0 || dp2.norm_squared() <= 0.0 {
        return Err(GeometryError::ZeroLengthSegment.into());
    }

    let det = dp1.x * dp2.y - dp1.y * dp2.x;
    if det.abs() < eps {
        let distance = parallel_distance(p1, &dp1, p3);
        trace!(det, distance, "parallel lines");
        return Ok(LineIntersection {
            intersects: false,
            within_segment: distance < eps,
            point: None,
            distance: Some(distance),
        });
    }

    let w = p1 - p3;
    // `+ 0.0` folds -0.0 into 0.0.
    let u = (w.y * dp2.x - dp2.y * w.x) / det + 0.0;
    let v = (w.y * dp1.x - dp1.y * w.x) / det + 0.0;

    Ok(LineIntersection {
        intersects: true,
        within_segment: (0.0..=1.0).contains(&u) && (0.0..=1.0).contains(&v),
        point: Some(p1 + dp1 * u),
        distance: None,
    })
}

/// Distance from the line through `p3` to the line through `p1` with
/// direction `dir`, both written as `-dir.y * x + dir.x * y + c = 0`.
fn parallel_distance(p1: &Point2, dir: &Vector2, p3: &Point2) -> f64 {
    let normal = Vector2::new(-dir.y, dir.x);
    let c1 = dir.y * p1.x - dir.x * p1.y;
    let c2 = dir.y * p3.x - dir.x * p3.y;
    (c2 - c1).abs() / normal.norm()
}
