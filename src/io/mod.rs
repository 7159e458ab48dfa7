/// Command-line parsing and batch generation
pub mod cli;
/// Hex color parsing
pub mod color;
/// Defaults and generation constants
pub mod configuration;
/// Error types
pub mod error;
/// File output
pub mod export;
/// Batch progress display
pub mod progress;
