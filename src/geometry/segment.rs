use crate::error::Result;
use crate::math::{Point, Vector};
use crate::operations::query::PointOnSegment;

/// A straight line segment between two points.
///
/// `start` and `end` may coincide; such a segment has zero length and
/// rejects every interpolation request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment<const D: usize> {
    start: Point<D>,
    end: Point<D>,
}

/// Planar line segment.
pub type Segment2 = Segment<2>;

/// Line segment in 3D space.
pub type Segment3 = Segment<3>;

impl<const D: usize> Segment<D> {
    /// Creates a new segment from `start` to `end`.
    #[must_use]
    pub fn new(start: Point<D>, end: Point<D>) -> Self {
        Self { start, end }
    }

    /// Returns the start point of the segment.
    #[must_use]
    pub fn start(&self) -> &Point<D> {
        &self.start
    }

    /// Returns the end point of the segment.
    #[must_use]
    pub fn end(&self) -> &Point<D> {
        &self.end
    }

    /// Returns the vector from `start` to `end`.
    #[must_use]
    pub fn direction(&self) -> Vector<D> {
        self.end - self.start
    }

    /// Euclidean length of the segment, over every coordinate axis.
    ///
    /// Returns `0.0` when `start == end`. The axis deltas are scaled by
    /// their largest magnitude before squaring, so finite coordinates far
    /// beyond `sqrt(f64::MAX)` still give a finite length. Only a delta that
    /// itself overflows yields `inf`.
    #[must_use]
    pub fn length(&self) -> f64 {
        let direction = self.direction();
        let scale = direction.amax();
        if scale <= 0.0 || scale.is_infinite() {
            return scale;
        }
        scale * (direction / scale).norm()
    }

    /// Returns whether the segment has coincident endpoints.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Returns the same segment traversed from `end` to `start`.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }

    /// Returns the point `distance` units from `start` towards `end`.
    ///
    /// See [`PointOnSegment`].
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InterpolationRange`](crate::error::GeometryError::InterpolationRange)
    /// if `distance` is not in `(0, length]`.
    pub fn interpolate(&self, distance: f64) -> Result<Point<D>> {
        PointOnSegment::new(distance).execute(self)
    }

    /// Evaluates `(1 - t) * start + t * end` on every axis.
    ///
    /// `t = 1` yields `end` exactly.
    pub(crate) fn point_at_ratio(&self, t: f64) -> Point<D> {
        Point::<D>::from(self.start.coords * (1.0 - t) + self.end.coords * t)
    }
}
