use crate::error::{GeolineError, GeometryError, Result};
use crate::geometry::Segment;
use crate::math::Point;

/// Finds the point a given distance along a segment, measured from its start.
///
/// With `t = distance / length`, every coordinate is `(1 - t) * start + t * end`,
/// so the z-coordinate of a 3D segment follows the same ratio as x and y.
pub struct PointOnSegment {
    distance: f64,
}

impl PointOnSegment {
    /// Creates a new `PointOnSegment` query.
    #[must_use]
    pub fn new(distance: f64) -> Self {
        Self { distance }
    }

    /// Executes the query on `segment`.
    ///
    /// A distance equal to the segment length yields the end point exactly.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InterpolationRange`] if the distance is not
    /// in `(0, length]` (NaN included). A zero-length segment rejects every
    /// distance, and so does a segment whose length or resulting point is
    /// not finite.
    pub fn execute<const D: usize>(&self, segment: &Segment<D>) -> Result<Point<D>> {
        let length = segment.length();
        if !(length.is_finite() && self.distance > 0.0 && self.distance <= length) {
            return Err(self.range_error(length));
        }
        let point = segment.point_at_ratio(self.distance / length);
        if !is_finite(&point) {
            return Err(self.range_error(length));
        }
        Ok(point)
    }

    fn range_error(&self, length: f64) -> GeolineError {
        tracing::debug!(
            distance = self.distance,
            length,
            "distance is not on segment"
        );
        GeometryError::InterpolationRange {
            distance: self.distance,
            length,
        }
        .into()
    }
}

/// Returns whether every coordinate of `point` is finite.
pub(crate) fn is_finite<const D: usize>(point: &Point<D>) -> bool {
    point.coords.iter().all(|c| c.is_finite())
}
