mod edge;
mod face;

pub use edge::{classify_segment, segment_intersection_2d, EdgeClassification};
pub use face::{
    face_intersection_2d, EdgeIntersector, FaceClassification, FaceClassifier,
    FaceClassifierBuilder, SegmentIntersector,
};
