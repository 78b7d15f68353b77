pub mod classify;
pub mod error;
pub mod math;

pub use classify::{
    face_intersection_2d, segment_intersection_2d, EdgeClassification, FaceClassification,
    FaceClassifier,
};
pub use error::{Result, TrisectError};
