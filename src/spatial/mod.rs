//! Canvas geometry for generated strokes

/// Horizontal and vertical line segments
pub mod segment;

pub use segment::{LineSegment, Orientation};
