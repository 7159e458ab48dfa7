//! Generation constants and runtime configuration defaults

// Default parameter record, matching the stock preset
/// Default canvas width in user units
pub const DEFAULT_WIDTH: u32 = 400;
/// Default canvas height in user units
pub const DEFAULT_HEIGHT: u32 = 400;
/// Default number of vertical line groups
pub const DEFAULT_VERTICAL_LINES: usize = 18;
/// Default number of horizontal line groups
pub const DEFAULT_HORIZONTAL_LINES: usize = 12;
/// Default mean stroke width
pub const DEFAULT_STROKE_WIDTH: f64 = 1.0;
/// Default mode of the opacity distribution
pub const DEFAULT_OPACITY: f64 = 0.65;
/// Default background color
pub const DEFAULT_BACKGROUND_COLOR: &str = "#5e666e";
/// Default stroke palette
pub const DEFAULT_LINE_COLORS: [&str; 4] = ["#ce8e3b", "#d1d9ff", "#d1cbc7", "#000000"];

// Opacity is drawn from triangular(MIN_OPACITY, MAX_OPACITY, avg_opacity)
/// Lower bound of sampled group opacity
pub const MIN_OPACITY: f64 = 0.05;
/// Upper bound of sampled group opacity
pub const MAX_OPACITY: f64 = 0.95;

/// Smallest stroke width a group may receive
pub const MIN_STROKE_WIDTH: f64 = 0.1;
/// Stroke scale for edge and vertical categories so they read lighter
pub const SECONDARY_STROKE_SCALE: f64 = 0.63;
/// Fraction of the canvas an edge line may reach in from its border
pub const EDGE_REACH: f64 = 0.25;

// Animation timing, triangular(min, max, mode) in seconds
/// Animation duration distribution
pub const ANIMATION_DURATION: (f64, f64, f64) = (3.0, 6.0, 25.0);
/// Animation delay distribution
pub const ANIMATION_DELAY: (f64, f64, f64) = (0.0, 0.8, 1.2);

// Output settings
/// File written when no output path is given
pub const DEFAULT_OUTPUT_FILE: &str = "generated-art.svg";
/// Digits in the index suffix of batch outputs
pub const OUTPUT_INDEX_WIDTH: usize = 3;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
