pub mod intersect_2d;
pub mod orientation;
pub mod triangle;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance.
///
/// Used as the parallel-determinant epsilon of the line primitive, where it is
/// absolute: inputs far from unit scale should pass their own
/// [`IntersectionParams`](intersect_2d::IntersectionParams). Triangle
/// degeneracy scales it by the squared longest edge.
pub const TOLERANCE: f64 = 1e-10;
