//! Procedural line-art SVG generation
//!
//! Groups of horizontal and vertical strokes are sampled from triangular and
//! normal distributions, styled per group, and assembled into a standalone SVG
//! document, optionally animated with CSS keyframes.

#![forbid(unsafe_code)]

/// Line placement policy and generation entry points
pub mod algorithm;
/// Command-line interface, configuration, errors and file output
pub mod io;
/// Sampling primitives and random sources
pub mod math;
/// SVG document assembly
pub mod render;
/// Canvas geometry of line segments
pub mod spatial;

pub use algorithm::executor::{
    GeneratedDocument, generate, generate_document, generate_seeded, generate_with,
};
pub use algorithm::parameters::{GenerationParameters, LayoutMode};
pub use io::error::{GenerationError, Result};
pub use math::random::{RandomSource, SequenceSource, StdRandomSource};
