//! Group construction for the four line categories
//!
//! Each group draws, in order: its opacity, its segments, its stroke width,
//! its color and finally its animation timing. Keeping that order fixed makes
//! a seeded source reproduce the same document.

use crate::algorithm::parameters::{GenerationParameters, GroupCounts};
use crate::io::configuration::{
    ANIMATION_DELAY, ANIMATION_DURATION, EDGE_REACH, MAX_OPACITY, MIN_OPACITY, MIN_STROKE_WIDTH,
    SECONDARY_STROKE_SCALE,
};
use crate::io::error::{Result, invalid_parameter};
use crate::math::probability::{choice, normal, triangular, uniform_int};
use crate::math::random::RandomSource;
use crate::spatial::segment::{LineSegment, Orientation};
use num_traits::ToPrimitive;

/// Placement policy of a group's segments
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LineCategory {
    /// Horizontal segments between two arbitrary x positions
    FullHorizontal,
    /// Horizontal stubs reaching in from the left and right borders
    HorizontalEdge,
    /// Vertical stubs reaching in from the top and bottom borders
    VerticalEdge,
    /// Vertical segments between two arbitrary y positions
    FullVertical,
}

impl LineCategory {
    /// Categories in paint order
    pub const ALL: [Self; 4] = [
        Self::FullHorizontal,
        Self::HorizontalEdge,
        Self::VerticalEdge,
        Self::FullVertical,
    ];

    /// Axis of every segment in the category
    pub const fn orientation(self) -> Orientation {
        match self {
            Self::FullHorizontal | Self::HorizontalEdge => Orientation::Horizontal,
            Self::VerticalEdge | Self::FullVertical => Orientation::Vertical,
        }
    }

    /// Multiplier applied to the stroke width distribution
    pub const fn stroke_scale(self) -> f64 {
        match self {
            Self::FullHorizontal => 1.0,
            Self::HorizontalEdge | Self::VerticalEdge | Self::FullVertical => {
                SECONDARY_STROKE_SCALE
            }
        }
    }

    /// Number of groups of this category in `counts`
    pub const fn count_in(self, counts: &GroupCounts) -> usize {
        match self {
            Self::FullHorizontal => counts.full_horizontal,
            Self::HorizontalEdge => counts.horizontal_edge,
            Self::VerticalEdge => counts.vertical_edge,
            Self::FullVertical => counts.full_vertical,
        }
    }
}

/// Motion applied to a whole group
#[derive(Clone, Debug, PartialEq)]
pub struct Animation {
    /// CSS class unique within the document
    pub class_name: String,
    /// Length of one animation cycle in seconds
    pub duration_seconds: f64,
    /// Start offset in seconds
    pub delay_seconds: f64,
}

/// Segments sharing one stroke style
#[derive(Clone, Debug, PartialEq)]
pub struct LineGroup {
    /// Placement policy the segments came from
    pub category: LineCategory,
    /// Non-empty, all of the category's orientation
    pub segments: Vec<LineSegment>,
    /// Stroke color taken from the palette
    pub color: String,
    /// Stroke width, at least the configured floor
    pub stroke_width: f64,
    /// Group opacity within the sampled opacity bounds
    pub opacity: f64,
    /// Present when the document is animated
    pub animation: Option<Animation>,
}

impl LineGroup {
    /// Axis shared by the group's segments
    pub const fn orientation(&self) -> Orientation {
        self.category.orientation()
    }
}

/// Draws line groups for one document
///
/// Animation class indices count per orientation across every call on the
/// same builder, so classes stay unique within the document.
pub struct LineSetBuilder<'a, R: RandomSource + ?Sized> {
    params: &'a GenerationParameters,
    rng: &'a mut R,
    horizontal_classes: usize,
    vertical_classes: usize,
}

impl<'a, R: RandomSource + ?Sized> LineSetBuilder<'a, R> {
    /// Create a builder drawing from `rng`
    pub const fn new(params: &'a GenerationParameters, rng: &'a mut R) -> Self {
        Self {
            params,
            rng,
            horizontal_classes: 0,
            vertical_classes: 0,
        }
    }

    /// Build every category in paint order
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameters` if the palette is empty
    pub fn build_all(&mut self) -> Result<Vec<LineGroup>> {
        let counts = GroupCounts::from_parameters(self.params);
        let mut groups = Vec::with_capacity(counts.total());

        for category in LineCategory::ALL {
            let built = self.build_category(category, category.count_in(&counts))?;
            groups.extend(built);
        }

        Ok(groups)
    }

    /// Build `count` groups of one category
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameters` if the palette is empty
    pub fn build_category(&mut self, category: LineCategory, count: usize) -> Result<Vec<LineGroup>> {
        (0..count).map(|_| self.build_group(category)).collect()
    }

    /// Build a single group of `category`
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameters` if the palette is empty
    pub fn build_group(&mut self, category: LineCategory) -> Result<LineGroup> {
        let opacity = triangular(self.rng, MIN_OPACITY, MAX_OPACITY, self.params.avg_opacity);

        // Faint groups get more overlapping strokes so they stay visible
        let iterations = (1.0 / opacity).floor().to_usize().unwrap_or(1).max(1);
        let mut segments = Vec::with_capacity(iterations * 2);
        for _ in 0..iterations {
            self.push_segments(category, &mut segments);
        }

        let stroke_width = self.sample_stroke_width(category.stroke_scale());

        let color = choice(self.rng, &self.params.line_colors)
            .cloned()
            .ok_or_else(|| {
                invalid_parameter("line_colors", &"[]", &"at least one color is required")
            })?;

        let animation = self
            .params
            .animate
            .then(|| self.sample_animation(category.orientation()));

        Ok(LineGroup {
            category,
            segments,
            color,
            stroke_width,
            opacity,
            animation,
        })
    }

    fn push_segments(&mut self, category: LineCategory, segments: &mut Vec<LineSegment>) {
        let width = i64::from(self.params.width);
        let height = i64::from(self.params.height);

        match category {
            LineCategory::FullHorizontal => {
                let x1 = uniform_int(self.rng, 0, width);
                let x2 = uniform_int(self.rng, 0, width);
                let y = uniform_int(self.rng, 1, height);
                segments.push(LineSegment::horizontal(x1, x2, y));
            }
            LineCategory::HorizontalEdge => {
                let reach = edge_reach(width);
                let y = uniform_int(self.rng, 1, height);
                let left_end = uniform_int(self.rng, 0, reach);
                segments.push(LineSegment::horizontal(0, left_end, y));
                let right_start = width - uniform_int(self.rng, 0, reach);
                segments.push(LineSegment::horizontal(right_start, width, y));
            }
            LineCategory::VerticalEdge => {
                let reach = edge_reach(height);
                let x = uniform_int(self.rng, 1, width);
                let top_end = uniform_int(self.rng, 0, reach);
                segments.push(LineSegment::vertical(0, top_end, x));
                let bottom_start = height - uniform_int(self.rng, 0, reach);
                segments.push(LineSegment::vertical(bottom_start, height, x));
            }
            LineCategory::FullVertical => {
                let y1 = uniform_int(self.rng, 0, height);
                let y2 = uniform_int(self.rng, 0, height);
                let x = uniform_int(self.rng, 1, width);
                segments.push(LineSegment::vertical(y1, y2, x));
            }
        }
    }

    fn sample_stroke_width(&mut self, scale: f64) -> f64 {
        let mean = self.params.avg_stroke_width * scale;
        let stddev = (self.params.avg_stroke_width / 2.0).sqrt() * scale;
        normal(self.rng, mean, stddev).max(MIN_STROKE_WIDTH)
    }

    fn sample_animation(&mut self, orientation: Orientation) -> Animation {
        let index = match orientation {
            Orientation::Horizontal => &mut self.horizontal_classes,
            Orientation::Vertical => &mut self.vertical_classes,
        };
        let class_name = format!("{}_line_{index}", orientation.name());
        *index += 1;

        let (min, max, mode) = ANIMATION_DURATION;
        let duration_seconds = triangular(self.rng, min, max, mode);
        let (min, max, mode) = ANIMATION_DELAY;
        let delay_seconds = triangular(self.rng, min, max, mode);

        Animation {
            class_name,
            duration_seconds,
            delay_seconds,
        }
    }
}

/// Furthest an edge line reaches in from its border, `floor(extent * 0.25)`
fn edge_reach(extent: i64) -> i64 {
    (extent as f64 * EDGE_REACH).floor().to_i64().unwrap_or(0)
}
