use crate::geometry::Polyline;
use crate::math::TOLERANCE;

/// Checks that every segment of a polyline starts where the previous one ended.
///
/// Polylines with zero or one segment are trivially continuous.
#[derive(Debug, Clone, Copy)]
pub struct IsContinuous {
    tolerance: f64,
}

impl IsContinuous {
    /// Creates a new `IsContinuous` query using [`TOLERANCE`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            tolerance: TOLERANCE,
        }
    }

    /// Sets the maximum endpoint gap still treated as connected.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Executes the check.
    #[must_use]
    pub fn execute<const D: usize>(&self, polyline: &Polyline<D>) -> bool {
        polyline.segments().windows(2).all(|pair| {
            nalgebra::distance(pair[0].end(), pair[1].start()) <= self.tolerance
        })
    }
}

impl Default for IsContinuous {
    fn default() -> Self {
        Self::new()
    }
}
