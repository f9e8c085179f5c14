mod is_continuous;
mod point_on_polyline;
mod point_on_segment;

pub use is_continuous::IsContinuous;
pub use point_on_polyline::{PointOnPolyline, PolylinePoint};
pub use point_on_segment::PointOnSegment;
