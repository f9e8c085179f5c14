use crate::error::{PolylineError, Result};
use crate::geometry::Polyline;
use crate::math::Point;

use super::point_on_segment::is_finite;

/// A point found along a polyline, together with the segment that owns it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolylinePoint<const D: usize> {
    /// Index of the segment containing the point.
    pub segment_index: usize,
    /// The interpolated point.
    pub point: Point<D>,
}

/// Finds the point a given path distance along a polyline.
///
/// Segments are walked in order while accumulating their lengths. The first
/// segment whose cumulative length reaches `distance` owns the point, so a
/// distance landing exactly on a shared vertex resolves to the end of the
/// earlier segment. Within that segment the local offset is
/// `length - (cumulative - distance)`.
///
/// Zero-length segments never own a point. In particular, when the path
/// ends in zero-length segments, `total_length` resolves to the end of the
/// last segment with positive length, which differs from the final vertex
/// if those trailing segments are disjoint from it.
pub struct PointOnPolyline {
    distance: f64,
}

impl PointOnPolyline {
    /// Creates a new `PointOnPolyline` query.
    #[must_use]
    pub fn new(distance: f64) -> Self {
        Self { distance }
    }

    /// Executes the query on `polyline`.
    ///
    /// # Errors
    ///
    /// Returns [`PolylineError::Empty`] if the polyline has no segments, or
    /// [`PolylineError::OutOfRange`] if the distance is not in
    /// `(0, total_length]` (NaN included) or the total length or resulting
    /// point is not finite.
    pub fn execute<const D: usize>(&self, polyline: &Polyline<D>) -> Result<PolylinePoint<D>> {
        let total_length = polyline.total_length()?;
        if !(total_length.is_finite() && self.distance > 0.0 && self.distance <= total_length) {
            return Err(self.out_of_range(total_length));
        }

        let mut cumulative = 0.0;
        for (segment_index, segment) in polyline.segments().iter().enumerate() {
            let length = segment.length();
            cumulative += length;
            if cumulative < self.distance {
                continue;
            }

            // Earlier segments ended before `distance`, so `length > 0` here.
            let local = length - (cumulative - self.distance);
            let t = (local / length).clamp(0.0, 1.0);
            let point = segment.point_at_ratio(t);
            if !is_finite(&point) {
                return Err(self.out_of_range(total_length));
            }
            tracing::trace!(segment_index, local, "resolved polyline distance");
            return Ok(PolylinePoint {
                segment_index,
                point,
            });
        }

        // Only reachable if the walk rounds differently from `total_length`.
        Err(self.out_of_range(total_length))
    }

    fn out_of_range(&self, total_length: f64) -> crate::error::GeolineError {
        tracing::debug!(
            distance = self.distance,
            total_length,
            "distance is not on polyline"
        );
        PolylineError::OutOfRange {
            distance: self.distance,
            total_length,
        }
        .into()
    }
}
