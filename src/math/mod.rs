/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// Point type generic over its dimension.
pub type Point<const D: usize> = nalgebra::Point<f64, D>;

/// Vector type generic over its dimension.
pub type Vector<const D: usize> = nalgebra::SVector<f64, D>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
