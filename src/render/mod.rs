//! SVG assembly from sampled line groups

/// Stylesheet and keyframes for animated documents
pub mod animation;
/// Document to element tree composition
pub mod composer;
/// Markup tree and serializer
pub mod document;

pub use composer::render_svg;
