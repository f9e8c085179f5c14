pub mod polyline;
pub mod segment;

pub use polyline::{Polyline, Polyline2, Polyline3};
pub use segment::{Segment, Segment2, Segment3};
