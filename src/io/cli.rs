//! Command-line interface for generating one or more SVG documents

use crate::algorithm::executor::generate_with;
use crate::algorithm::parameters::{GenerationParameters, LayoutMode};
use crate::io::color::parse_color_arg;
use crate::io::configuration::{
    DEFAULT_BACKGROUND_COLOR, DEFAULT_HEIGHT, DEFAULT_HORIZONTAL_LINES, DEFAULT_LINE_COLORS,
    DEFAULT_OPACITY, DEFAULT_OUTPUT_FILE, DEFAULT_STROKE_WIDTH, DEFAULT_VERTICAL_LINES,
    DEFAULT_WIDTH,
};
use crate::io::error::{Result, file_system_error, invalid_parameter};
use crate::io::export::{export_svg, numbered_output_path};
use crate::io::progress::ProgressManager;
use crate::math::random::StdRandomSource;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "linegrain")]
#[command(
    author,
    version,
    about = "Generate line-art SVG images from randomly placed strokes"
)]
/// Command-line arguments for the SVG generator
pub struct Cli {
    /// Canvas width in user units
    #[arg(short = 'w', long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Canvas height in user units
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Number of vertical lines (one third become edge lines)
    #[arg(long, default_value_t = DEFAULT_VERTICAL_LINES)]
    pub vertical_lines: usize,

    /// Number of horizontal lines
    #[arg(long, default_value_t = DEFAULT_HORIZONTAL_LINES)]
    pub horizontal_lines: usize,

    /// Average stroke width
    #[arg(long, default_value_t = DEFAULT_STROKE_WIDTH)]
    pub stroke_width: f64,

    /// Most likely group opacity, between 0 and 1
    #[arg(long, default_value_t = DEFAULT_OPACITY)]
    pub opacity: f64,

    /// Background color as #RRGGBB
    #[arg(long, default_value = DEFAULT_BACKGROUND_COLOR, value_parser = parse_color_arg)]
    pub background: String,

    /// Line color as #RRGGBB, repeat for a palette
    #[arg(short, long = "color", value_parser = parse_color_arg)]
    pub colors: Vec<String>,

    /// Disable the CSS motion animation
    #[arg(long = "static")]
    pub no_animation: bool,

    /// How horizontal lines are split between full and edge lines
    #[arg(long, value_enum, default_value_t = LayoutMode::Even)]
    pub layout: LayoutMode,

    /// Random seed for reproducible output
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Number of documents to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Output file, numbered when generating several documents
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Write markup to standard output instead of a file
    #[arg(long)]
    pub stdout: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Parameter record described by the arguments
    ///
    /// Falls back to the default palette when no color is given.
    pub fn parameters(&self) -> GenerationParameters {
        let line_colors = if self.colors.is_empty() {
            DEFAULT_LINE_COLORS.iter().map(ToString::to_string).collect()
        } else {
            self.colors.clone()
        };

        GenerationParameters {
            width: self.width,
            height: self.height,
            vertical_line_count: self.vertical_lines,
            horizontal_line_count: self.horizontal_lines,
            avg_stroke_width: self.stroke_width,
            avg_opacity: self.opacity,
            background_color: self.background.clone(),
            line_colors,
            animate: !self.no_animation,
            layout: self.layout,
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet && !self.stdout
    }

    /// Reject argument combinations that cannot be honored
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameters` when `--stdout` is asked for more than one
    /// document, since standard output carries a single SVG root
    pub fn validate(&self) -> Result<()> {
        if self.stdout && self.count > 1 {
            return Err(invalid_parameter(
                "count",
                &self.count,
                &"--stdout writes a single document",
            ));
        }
        Ok(())
    }

    /// Random source for document `index`, seeded as `seed + index` when a
    /// seed is given
    pub fn source_for(&self, index: usize) -> StdRandomSource {
        self.seed.map_or_else(StdRandomSource::from_entropy, |seed| {
            StdRandomSource::seeded(seed.wrapping_add(index as u64))
        })
    }
}

/// Generates the requested documents and writes them out
pub struct BatchGenerator {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl BatchGenerator {
    /// Create a generator for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli
            .should_show_progress()
            .then(|| ProgressManager::new(cli.count));

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate every document and return the paths written
    ///
    /// Nothing is written to disk in `--stdout` mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid or an output cannot be
    /// written
    pub fn process(&mut self) -> Result<Vec<PathBuf>> {
        self.cli.validate()?;
        let params = self.cli.parameters();
        params.validate()?;

        let mut written = Vec::with_capacity(self.cli.count);
        for index in 0..self.cli.count {
            let mut source = self.cli.source_for(index);
            let svg = generate_with(&params, &mut source)?;

            if self.cli.stdout {
                let mut stdout = std::io::stdout().lock();
                stdout
                    .write_all(svg.as_bytes())
                    .and_then(|()| stdout.flush())
                    .map_err(|e| file_system_error("<stdout>", "write", e))?;
                continue;
            }

            let output_path = numbered_output_path(&self.cli.output, index, self.cli.count);
            if let Some(ref pm) = self.progress_manager {
                pm.start_document(&output_path);
            }

            export_svg(&svg, &output_path)?;
            tracing::debug!(path = %output_path.display(), "wrote document");

            if let Some(ref pm) = self.progress_manager {
                pm.complete_document();
            }
            written.push(output_path);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        self.report(&written);
        Ok(written)
    }

    // Allow print for user feedback after the batch
    #[allow(clippy::print_stderr)]
    fn report(&self, written: &[PathBuf]) {
        if self.cli.quiet {
            return;
        }
        for path in written {
            eprintln!("Wrote {}", path.display());
        }
    }
}
