//! Generation parameter record and its fail-fast validation

use crate::io::color::normalize_color;
use crate::io::configuration::{
    DEFAULT_BACKGROUND_COLOR, DEFAULT_HEIGHT, DEFAULT_HORIZONTAL_LINES, DEFAULT_LINE_COLORS,
    DEFAULT_OPACITY, DEFAULT_STROKE_WIDTH, DEFAULT_VERTICAL_LINES, DEFAULT_WIDTH,
};
use crate::io::error::{Result, invalid_parameter};
use clap::ValueEnum;

/// How the horizontal line budget is shared between categories
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LayoutMode {
    /// Every horizontal unit becomes a full horizontal group
    #[default]
    Even,
    /// Three quarters full horizontal groups, one quarter edge groups
    Split,
}

/// Inputs for one generation call
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationParameters {
    /// Canvas width in user units
    pub width: u32,
    /// Canvas height in user units
    pub height: u32,
    /// Target count driving the vertical categories
    pub vertical_line_count: usize,
    /// Target count driving the horizontal categories
    pub horizontal_line_count: usize,
    /// Mean of the stroke width distribution
    pub avg_stroke_width: f64,
    /// Mode of the opacity distribution
    pub avg_opacity: f64,
    /// Canvas background, `#RRGGBB`
    pub background_color: String,
    /// Palette groups draw their stroke color from
    pub line_colors: Vec<String>,
    /// Attach motion animation to every group
    pub animate: bool,
    /// Category split of the horizontal budget
    pub layout: LayoutMode,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            vertical_line_count: DEFAULT_VERTICAL_LINES,
            horizontal_line_count: DEFAULT_HORIZONTAL_LINES,
            avg_stroke_width: DEFAULT_STROKE_WIDTH,
            avg_opacity: DEFAULT_OPACITY,
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
            line_colors: DEFAULT_LINE_COLORS.iter().map(ToString::to_string).collect(),
            animate: true,
            layout: LayoutMode::Even,
        }
    }
}

impl GenerationParameters {
    /// Check the guards a document depends on
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameters` if:
    /// - `width` or `height` is zero
    /// - `line_colors` is empty or any color is not `#RRGGBB`
    /// - `background_color` is not `#RRGGBB`
    /// - `avg_stroke_width` is not a positive finite number
    /// - `avg_opacity` is not finite
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(invalid_parameter("width", &self.width, &"must be positive"));
        }
        if self.height == 0 {
            return Err(invalid_parameter(
                "height",
                &self.height,
                &"must be positive",
            ));
        }
        if self.line_colors.is_empty() {
            return Err(invalid_parameter(
                "line_colors",
                &"[]",
                &"at least one color is required",
            ));
        }
        for color in &self.line_colors {
            normalize_color("line_colors", color)?;
        }
        normalize_color("background_color", &self.background_color)?;

        if !self.avg_stroke_width.is_finite() || self.avg_stroke_width <= 0.0 {
            return Err(invalid_parameter(
                "avg_stroke_width",
                &self.avg_stroke_width,
                &"must be a positive number",
            ));
        }
        if !self.avg_opacity.is_finite() {
            return Err(invalid_parameter(
                "avg_opacity",
                &self.avg_opacity,
                &"must be a number",
            ));
        }

        Ok(())
    }

    /// Copy with every color rewritten to its `#`-prefixed form
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameters` for the first malformed color
    pub fn normalized(&self) -> Result<Self> {
        let line_colors = self
            .line_colors
            .iter()
            .map(|color| normalize_color("line_colors", color))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            background_color: normalize_color("background_color", &self.background_color)?,
            line_colors,
            ..self.clone()
        })
    }
}

/// Number of groups generated for each line category
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GroupCounts {
    /// Full-span horizontal groups
    pub full_horizontal: usize,
    /// Horizontal groups anchored to the left and right borders
    pub horizontal_edge: usize,
    /// Vertical groups anchored to the top and bottom borders
    pub vertical_edge: usize,
    /// Full-span vertical groups
    pub full_vertical: usize,
}

impl GroupCounts {
    /// Apportion the requested counts according to the layout
    pub const fn from_parameters(params: &GenerationParameters) -> Self {
        let horizontal = params.horizontal_line_count;
        let vertical = params.vertical_line_count;
        let vertical_edge = vertical / 3;

        let (full_horizontal, horizontal_edge) = match params.layout {
            LayoutMode::Even => (horizontal, 0),
            LayoutMode::Split => (horizontal.saturating_mul(3) / 4, horizontal / 4),
        };

        Self {
            full_horizontal,
            horizontal_edge,
            vertical_edge,
            full_vertical: vertical - vertical_edge,
        }
    }

    /// Total number of groups across all categories
    pub const fn total(&self) -> usize {
        self.full_horizontal + self.horizontal_edge + self.vertical_edge + self.full_vertical
    }
}
