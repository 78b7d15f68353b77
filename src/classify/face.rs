use std::fmt;

use tracing::{debug, instrument};

use super::edge::{classify_segment, EdgeClassification};
use crate::error::{ClassifyError, Result};
use crate::math::intersect_2d::{lines_intersection_2d_with, IntersectionParams};
use crate::math::triangle::{Segment, Triangle};
use crate::math::Point3;

/// How two coplanar faces relate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaceClassification {
    NotIntersecting,
    Touching,
    /// Part of the label vocabulary; the edge-code table never yields it.
    Overlapping,
    /// An edge of each face lies along the same line segment.
    EdgeOverlapping,
    Intersecting,
}

impl FaceClassification {
    #[must_use]
    pub const fn code(self) -> i8 {
        match self {
            Self::NotIntersecting => 0,
            Self::Touching => -1,
            Self::Overlapping | Self::EdgeOverlapping => 2,
            Self::Intersecting => 1,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NotIntersecting => "NOT_INTERSECTING",
            Self::Touching => "TOUCHING",
            Self::Overlapping => "OVERLAPPING",
            Self::EdgeOverlapping => "EDGE_OVERLAPPING",
            Self::Intersecting => "INTERSECTING",
        }
    }
}

impl fmt::Display for FaceClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Decides whether two directed edges share a point.
///
/// The face classifier consults it to refine edge-overlap candidates.
pub trait EdgeIntersector: Send + Sync {
    /// Returns `true` if edge `a0a1` and edge `b0b1` share at least one point.
    ///
    /// # Errors
    ///
    /// Implementations report input they cannot handle; the error is passed
    /// through to the caller of [`FaceClassifier::classify`].
    fn edges_intersect(&self, a0: &Point3, a1: &Point3, b0: &Point3, b1: &Point3)
        -> Result<bool>;
}

/// [`EdgeIntersector`] backed by the line/segment primitive on XY coordinates.
///
/// [`FaceClassifier`] hands it edges already projected onto the faces'
/// dominant coordinate plane, with `z = 0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SegmentIntersector {
    params: IntersectionParams,
}

impl SegmentIntersector {
    #[must_use]
    pub fn new(params: IntersectionParams) -> Self {
        Self { params }
    }

    #[must_use]
    pub fn params(&self) -> &IntersectionParams {
        &self.params
    }
}

impl EdgeIntersector for SegmentIntersector {
    fn edges_intersect(
        &self,
        a0: &Point3,
        a1: &Point3,
        b0: &Point3,
        b1: &Point3,
    ) -> Result<bool> {
        let hit =
            lines_intersection_2d_with(&self.params, &a0.xy(), &a1.xy(), &b0.xy(), &b1.xy())?;
        Ok(hit.within_segment)
    }
}

/// Number of sharing edge pairs from which an overlap candidate would no
/// longer be a plain edge overlap. Only logged: the candidate is reported as
/// an edge overlap on both sides of it.
const EDGE_OVERLAP_PAIR_LIMIT: usize = 6;

/// What an ordered triple of edge results decides on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Resolution {
    /// No boundary contact: disjoint unless one face nests in the other.
    NestingCheck,
    /// Two collinear edges and a touch: count sharing edge pairs.
    EdgeOverlapCandidate,
    Label(FaceClassification),
}

/// Looks up the ordered edge triple in the classification table.
fn resolve(e0: EdgeClassification, e1: EdgeClassification, e2: EdgeClassification) -> Resolution {
    use EdgeClassification::{NotIntersecting as Apart, Overlapping as Over, Touching as Touch};

    match (e0, e1, e2) {
        (Apart, Apart, Apart) => Resolution::NestingCheck,
        (Over, Touch, Over) | (Over, Over, Touch) | (Touch, Over, Over) => {
            Resolution::EdgeOverlapCandidate
        }
        (Touch, Over, Touch) | (Touch, Touch, Over) | (Over, Touch, Touch) => {
            Resolution::Label(FaceClassification::EdgeOverlapping)
        }
        (Touch, Apart, Over)
        | (Touch, Over, Apart)
        | (Apart, Touch, Over)
        | (Apart, Over, Touch)
        | (Over, Touch, Apart)
        | (Over, Apart, Touch)
        | (Touch, Apart, Touch)
        | (Apart, Touch, Touch)
        | (Touch, Touch, Apart) => Resolution::Label(FaceClassification::Touching),
        _ => Resolution::Label(FaceClassification::Intersecting),
    }
}

/// Classifies pairs of coplanar triangles.
///
/// Each edge of the first face is classified against the second face; the
/// ordered triple of edge results then selects the face classification.
/// The table is order-sensitive, so swapping the faces can change the label
/// in some touching configurations.
#[derive(Debug, Clone)]
pub struct FaceClassifier<I = SegmentIntersector> {
    intersector: I,
}

impl Default for FaceClassifier {
    fn default() -> Self {
        Self::new(SegmentIntersector::default())
    }
}

impl<I: EdgeIntersector> FaceClassifier<I> {
    /// Creates a classifier using `intersector` for edge-overlap refinement.
    #[must_use]
    pub fn new(intersector: I) -> Self {
        Self { intersector }
    }

    /// Starts a builder; [`FaceClassifierBuilder::build`] fails unless an
    /// intersector is supplied.
    #[must_use]
    pub fn builder() -> FaceClassifierBuilder<I> {
        FaceClassifierBuilder { intersector: None }
    }

    #[must_use]
    pub fn intersector(&self) -> &I {
        &self.intersector
    }

    /// Classifies face `f0` against face `f1`.
    ///
    /// # Errors
    ///
    /// Propagates errors from the edge intersector, which is only consulted
    /// when the edge results form an overlap candidate.
    #[instrument(level = "debug", skip_all)]
    pub fn classify(&self, f0: &Triangle, f1: &Triangle) -> Result<FaceClassification> {
        let [e0, e1, e2] = f0.edges().map(|edge| classify_segment(&edge, f1));

        let classification = match resolve(e0, e1, e2) {
            Resolution::NestingCheck => {
                if nested(f1, f0) || nested(f0, f1) {
                    FaceClassification::Intersecting
                } else {
                    FaceClassification::NotIntersecting
                }
            }
            Resolution::EdgeOverlapCandidate => {
                let pairs = self.sharing_edge_pairs(f0, f1)?;
                debug!(
                    pairs,
                    limit = EDGE_OVERLAP_PAIR_LIMIT,
                    reaches_limit = pairs >= EDGE_OVERLAP_PAIR_LIMIT,
                    "edge overlap candidate"
                );
                FaceClassification::EdgeOverlapping
            }
            Resolution::Label(label) => label,
        };

        debug!(
            edges = ?(e0.code(), e1.code(), e2.code()),
            %classification,
            "classified face pair"
        );
        Ok(classification)
    }

    /// Counts edge pairs, one edge from each face, that share a point.
    ///
    /// Edges reach the intersector projected onto the coordinate plane that
    /// drops `f0`'s dominant normal component, so faces in any orientation
    /// keep non-degenerate edges.
    fn sharing_edge_pairs(&self, f0: &Triangle, f1: &Triangle) -> Result<usize> {
        let (i0, i1) = f0.projection_axes();
        let project = |p: &Point3| Point3::new(p[i0], p[i1], 0.0);
        let mut pairs = 0;
        for a in closing_edge_first(f0) {
            for b in closing_edge_first(f1) {
                if self.intersector.edges_intersect(
                    &project(&a.start),
                    &project(&a.end),
                    &project(&b.start),
                    &project(&b.end),
                )? {
                    pairs += 1;
                }
            }
        }
        Ok(pairs)
    }
}

/// Builder for [`FaceClassifier`] with an explicitly injected intersector.
#[derive(Debug, Clone)]
pub struct FaceClassifierBuilder<I> {
    intersector: Option<I>,
}

impl<I: EdgeIntersector> FaceClassifierBuilder<I> {
    #[must_use]
    pub fn edge_intersector(mut self, intersector: I) -> Self {
        self.intersector = Some(intersector);
        self
    }

    /// Finishes the classifier.
    ///
    /// # Errors
    ///
    /// Returns `ClassifyError::MissingEdgeIntersector` if no intersector was
    /// supplied.
    pub fn build(self) -> Result<FaceClassifier<I>> {
        let intersector = self
            .intersector
            .ok_or(ClassifyError::MissingEdgeIntersector)?;
        Ok(FaceClassifier { intersector })
    }
}

/// Classifies face `f0` against face `f1` with the default classifier.
///
/// # Errors
///
/// Returns `GeometryError::DegenerateTriangle` if either face has collinear
/// vertices.
pub fn face_intersection_2d(f0: &[Point3; 3], f1: &[Point3; 3]) -> Result<FaceClassification> {
    let f0 = Triangle::from_array(*f0)?;
    let f1 = Triangle::from_array(*f1)?;
    FaceClassifier::new(SegmentIntersector::default()).classify(&f0, &f1)
}

fn nested(inner: &Triangle, outer: &Triangle) -> bool {
    inner.vertices().iter().all(|v| outer.contains_point(v))
}

/// Edges `ca`, `ab`, `bc`.
fn closing_edge_first(triangle: &Triangle) -> [Segment; 3] {
    let [ab, bc, ca] = triangle.edges();
    [ca, ab, bc]
}
