pub mod error;
pub mod feature;
pub mod geometry;
pub mod line_string;
pub mod math;
pub mod operations;

pub use error::{GeolineError, Result};
