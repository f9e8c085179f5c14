use thiserror::Error;

/// Top-level error type for the crate.
#[derive(Debug, Error, PartialEq)]
pub enum GeolineError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Polyline(#[from] PolylineError),

    #[error(transparent)]
    Feature(#[from] FeatureError),
}

/// Errors raised by single-segment computations.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    /// The distance is non-positive, exceeds the segment length, or the
    /// segment has zero length.
    #[error("distance {distance} is not on a segment of length {length}")]
    InterpolationRange { distance: f64, length: f64 },
}

/// Errors raised by polyline-level computations.
#[derive(Debug, Error, PartialEq)]
pub enum PolylineError {
    #[error("polyline must have at least one segment")]
    Empty,

    #[error("distance {distance} is out of range (0, {total_length}]")]
    OutOfRange { distance: f64, total_length: f64 },
}

/// Errors related to feature attribute values.
#[derive(Debug, Error, PartialEq)]
pub enum FeatureError {
    #[error("field {field} expects {expected} but got {found}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        found: &'static str,
    },
}

/// Convenience type alias for results using [`GeolineError`].
pub type Result<T> = std::result::Result<T, GeolineError>;
