//! Line-string hand-off to an external geometry engine.
//!
//! A [`LineString`] is the ordered vertex list of a polyline. The engine
//! that persists or renders it is reached only through the
//! [`LineStringSink`] the caller passes in; nothing here holds engine state.

use std::convert::Infallible;

use crate::error::{GeolineError, Result};
use crate::geometry::Polyline;
use crate::math::Point;

/// Geometry type tag understood by the receiving engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStringKind {
    /// Planar line string.
    LineString,
    /// Line string with a z-coordinate per vertex.
    LineString25D,
}

/// Receives line-string vertices one at a time, in path order.
pub trait LineStringSink<const D: usize> {
    /// Error reported by the receiving engine.
    type Error;

    /// Appends a vertex.
    ///
    /// # Errors
    ///
    /// Returns the engine's error if the vertex cannot be accepted.
    fn add_point(&mut self, point: &Point<D>) -> std::result::Result<(), Self::Error>;
}

impl<const D: usize> LineStringSink<D> for Vec<Point<D>> {
    type Error = Infallible;

    fn add_point(&mut self, point: &Point<D>) -> std::result::Result<(), Infallible> {
        self.push(*point);
        Ok(())
    }
}

/// Ordered, non-empty vertex list derived from a polyline.
#[derive(Debug, Clone, PartialEq)]
pub struct LineString<const D: usize> {
    points: Vec<Point<D>>,
}

impl<const D: usize> LineString<D> {
    /// Projects `polyline` into its vertex sequence.
    ///
    /// # Errors
    ///
    /// Returns [`PolylineError::Empty`](crate::error::PolylineError::Empty)
    /// if the polyline has no segments.
    pub fn from_polyline(polyline: &Polyline<D>) -> Result<Self> {
        let points = polyline.to_point_sequence()?;
        Ok(Self { points })
    }

    /// Returns the vertices in path order.
    #[must_use]
    pub fn points(&self) -> &[Point<D>] {
        &self.points
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; a line string has at least two vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consumes the line string, returning its vertices.
    #[must_use]
    pub fn into_points(self) -> Vec<Point<D>> {
        self.points
    }

    /// Streams every vertex into `sink`, stopping at the first rejected one.
    ///
    /// # Errors
    ///
    /// Returns the sink's error; vertices before the failing one have
    /// already been delivered.
    pub fn write_into<S>(&self, sink: &mut S) -> std::result::Result<(), S::Error>
    where
        S: LineStringSink<D>,
    {
        for (index, point) in self.points.iter().enumerate() {
            if let Err(err) = sink.add_point(point) {
                tracing::debug!(index, "line string sink rejected vertex");
                return Err(err);
            }
        }
        Ok(())
    }
}

impl LineString<2> {
    /// Returns [`LineStringKind::LineString`].
    #[must_use]
    pub fn kind(&self) -> LineStringKind {
        LineStringKind::LineString
    }
}

impl LineString<3> {
    /// Returns [`LineStringKind::LineString25D`].
    #[must_use]
    pub fn kind(&self) -> LineStringKind {
        LineStringKind::LineString25D
    }
}

impl<'a, const D: usize> TryFrom<&'a Polyline<D>> for LineString<D> {
    type Error = GeolineError;

    fn try_from(polyline: &'a Polyline<D>) -> Result<Self> {
        Self::from_polyline(polyline)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::PolylineError;
    use crate::geometry::{Polyline2, Polyline3, Segment3};
    use crate::math::{Point2, Point3};

    /// Mimics an engine that only accepts a fixed number of vertices.
    struct CappedEngine {
        accepted: Vec<Point3>,
        capacity: usize,
    }

    impl LineStringSink<3> for CappedEngine {
        type Error = String;

        fn add_point(&mut self, point: &Point3) -> std::result::Result<(), String> {
            if self.accepted.len() == self.capacity {
                return Err(format!("capacity {} reached", self.capacity));
            }
            self.accepted.push(*point);
            Ok(())
        }
    }

    fn zigzag() -> Polyline3 {
        Polyline3::from_points(&[
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(2.0, 0.0, 2.0),
            Point3::new(3.0, 1.0, 3.0),
        ])
    }

    #[test]
    fn from_polyline_keeps_vertex_order() {
        let ls = LineString::from_polyline(&zigzag()).unwrap();
        assert_eq!(ls.len(), 4);
        assert!(!ls.is_empty());
        assert_eq!(ls.points()[0], Point3::new(0.0, 0.0, 0.0));
        assert_eq!(ls.points()[3], Point3::new(3.0, 1.0, 3.0));
        assert_eq!(ls.kind(), LineStringKind::LineString25D);
    }

    #[test]
    fn planar_kind() {
        let pline = Polyline2::from_points(&[Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)]);
        let ls = LineString::try_from(&pline).unwrap();
        assert_eq!(ls.kind(), LineStringKind::LineString);
        assert_eq!(ls.into_points().len(), 2);
    }

    #[test]
    fn empty_polyline_has_no_line_string() {
        let result = LineString::from_polyline(&Polyline3::new(Vec::<Segment3>::new()));
        assert_eq!(result, Err(GeolineError::Polyline(PolylineError::Empty)));
    }

    #[test]
    fn writes_all_vertices_into_vec() {
        let ls = LineString::from_polyline(&zigzag()).unwrap();
        let mut out: Vec<Point3> = Vec::new();
        ls.write_into(&mut out).unwrap();
        assert_eq!(out, ls.points());
    }

    #[test]
    fn sink_error_stops_delivery() {
        let ls = LineString::from_polyline(&zigzag()).unwrap();
        let mut engine = CappedEngine {
            accepted: Vec::new(),
            capacity: 2,
        };
        let err = ls.write_into(&mut engine).unwrap_err();
        assert_eq!(err, "capacity 2 reached");
        assert_eq!(engine.accepted, &ls.points()[..2]);
    }
}
