//! CLI entry point for the line-art SVG generator

use clap::Parser;
use linegrain::io::cli::{BatchGenerator, Cli};

fn main() -> linegrain::Result<()> {
    let cli = Cli::parse();
    let mut generator = BatchGenerator::new(cli);
    generator.process().map(|_| ())
}
