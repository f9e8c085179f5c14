use crate::error::{GeolineError, PolylineError, Result};
use crate::math::Point;
use crate::operations::query::{IsContinuous, PointOnPolyline};

use super::Segment;

/// An ordered sequence of straight line segments.
///
/// Construction is permissive: consecutive segments are not required to
/// share endpoints, and an empty sequence is accepted so that callers see
/// [`PolylineError::Empty`] from the operations that need segments. Use
/// [`Polyline::is_continuous`] when the path must be connected.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polyline<const D: usize> {
    segments: Vec<Segment<D>>,
}

/// Planar polyline.
pub type Polyline2 = Polyline<2>;

/// Polyline in 3D space.
pub type Polyline3 = Polyline<3>;

impl<const D: usize> Polyline<D> {
    /// Creates a polyline from an ordered list of segments.
    #[must_use]
    pub fn new(segments: Vec<Segment<D>>) -> Self {
        Self { segments }
    }

    /// Creates a connected polyline through `points`.
    ///
    /// `n` points produce `n - 1` segments; fewer than two points produce an
    /// empty polyline.
    #[must_use]
    pub fn from_points(points: &[Point<D>]) -> Self {
        let segments = points
            .windows(2)
            .map(|pair| Segment::new(pair[0], pair[1]))
            .collect();
        Self { segments }
    }

    /// Returns the segments in path order.
    #[must_use]
    pub fn segments(&self) -> &[Segment<D>] {
        &self.segments
    }

    /// Returns whether the polyline has no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the number of segments.
    ///
    /// # Errors
    ///
    /// Returns [`PolylineError::Empty`] if the polyline has no segments.
    pub fn segment_count(&self) -> Result<usize> {
        self.ensure_not_empty()?;
        Ok(self.segments.len())
    }

    /// Returns the sum of all segment lengths, accumulated in path order.
    ///
    /// # Errors
    ///
    /// Returns [`PolylineError::Empty`] if the polyline has no segments.
    pub fn total_length(&self) -> Result<f64> {
        self.ensure_not_empty()?;
        Ok(self.segments.iter().map(Segment::length).sum())
    }

    /// Returns the point at `distance` along the path. See [`PointOnPolyline`].
    ///
    /// # Errors
    ///
    /// Returns [`PolylineError::Empty`] for an empty polyline and
    /// [`PolylineError::OutOfRange`] if `distance` is not in
    /// `(0, total_length]`.
    pub fn interpolate(&self, distance: f64) -> Result<Point<D>> {
        PointOnPolyline::new(distance)
            .execute(self)
            .map(|found| found.point)
    }

    /// Returns whether each segment starts where the previous one ended,
    /// within [`TOLERANCE`](crate::math::TOLERANCE).
    #[must_use]
    pub fn is_continuous(&self) -> bool {
        IsContinuous::new().execute(self)
    }

    /// Returns the polyline traversed in the opposite direction.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let segments = self.segments.iter().rev().map(Segment::reversed).collect();
        Self { segments }
    }

    /// Flattens the polyline into its vertex sequence: the start of the
    /// first segment followed by the end of every segment.
    ///
    /// Disjoint segments are not bridged or deduplicated; only each
    /// segment's end point appears after the first vertex.
    ///
    /// # Errors
    ///
    /// Returns [`PolylineError::Empty`] if the polyline has no segments.
    pub fn to_point_sequence(&self) -> Result<Vec<Point<D>>> {
        let first = self.segments.first().ok_or_else(Self::empty_error)?;
        let mut points = Vec::with_capacity(self.segments.len() + 1);
        points.push(*first.start());
        points.extend(self.segments.iter().map(|seg| *seg.end()));
        Ok(points)
    }

    fn ensure_not_empty(&self) -> Result<()> {
        if self.segments.is_empty() {
            return Err(Self::empty_error());
        }
        Ok(())
    }

    fn empty_error() -> GeolineError {
        tracing::debug!(dimension = D, "operation on empty polyline");
        PolylineError::Empty.into()
    }
}

impl<const D: usize> FromIterator<Segment<D>> for Polyline<D> {
    fn from_iter<I: IntoIterator<Item = Segment<D>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
