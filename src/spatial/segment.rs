//! Axis-aligned line segments and their path commands

use std::fmt;

/// Axis a segment runs along
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Runs along the x axis
    Horizontal,
    /// Runs along the y axis
    Vertical,
}

impl Orientation {
    /// Lower-case name used in animation class names
    pub const fn name(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

/// A single stroke on the canvas with integer coordinates
///
/// The spanning axis is always ordered so `start <= end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineSegment {
    /// Segment from `(x_start, y)` to `(x_end, y)`
    Horizontal {
        /// Left end
        x_start: i64,
        /// Right end
        x_end: i64,
        /// Row shared by both ends
        y: i64,
    },
    /// Segment from `(x, y_start)` to `(x, y_end)`
    Vertical {
        /// Top end
        y_start: i64,
        /// Bottom end
        y_end: i64,
        /// Column shared by both ends
        x: i64,
    },
}

impl LineSegment {
    /// Horizontal segment between two x positions given in either order
    pub fn horizontal(x1: i64, x2: i64, y: i64) -> Self {
        Self::Horizontal {
            x_start: x1.min(x2),
            x_end: x1.max(x2),
            y,
        }
    }

    /// Vertical segment between two y positions given in either order
    pub fn vertical(y1: i64, y2: i64, x: i64) -> Self {
        Self::Vertical {
            y_start: y1.min(y2),
            y_end: y1.max(y2),
            x,
        }
    }

    /// Axis this segment runs along
    pub const fn orientation(&self) -> Orientation {
        match self {
            Self::Horizontal { .. } => Orientation::Horizontal,
            Self::Vertical { .. } => Orientation::Vertical,
        }
    }

    /// Whether the segment lies on a `width` x `height` canvas
    ///
    /// The spanning axis may touch either border; the fixed axis must lie in
    /// `1..=extent`, matching how positions are sampled.
    pub const fn fits_canvas(&self, width: i64, height: i64) -> bool {
        match *self {
            Self::Horizontal { x_start, x_end, y } => {
                0 <= x_start && x_start <= x_end && x_end <= width && 1 <= y && y <= height
            }
            Self::Vertical { y_start, y_end, x } => {
                0 <= y_start && y_start <= y_end && y_end <= height && 1 <= x && x <= width
            }
        }
    }
}

/// Formats as an SVG path command, `M{x} {y} H{x}` or `M{x} {y} V{y}`
impl fmt::Display for LineSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal { x_start, x_end, y } => write!(f, "M{x_start} {y} H{x_end}"),
            Self::Vertical { y_start, y_end, x } => write!(f, "M{x} {y_start} V{y_end}"),
        }
    }
}
