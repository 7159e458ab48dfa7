//! Generation entry points: parameters in, document or markup out

use crate::algorithm::builder::{LineGroup, LineSetBuilder};
use crate::algorithm::parameters::GenerationParameters;
use crate::io::error::Result;
use crate::math::random::{RandomSource, StdRandomSource};
use crate::render::composer::render_svg;

/// Every group sampled for one canvas, ready to be rendered
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratedDocument {
    /// Canvas width in user units
    pub width: u32,
    /// Canvas height in user units
    pub height: u32,
    /// Canvas background, `#RRGGBB`
    pub background_color: String,
    /// Groups in paint order
    pub groups: Vec<LineGroup>,
    /// Whether groups carry animation and a stylesheet is emitted
    pub animated: bool,
}

/// Sample a document from `rng`
///
/// # Errors
///
/// Returns `InvalidParameters` if the parameters fail validation
pub fn generate_document<R: RandomSource + ?Sized>(
    params: &GenerationParameters,
    rng: &mut R,
) -> Result<GeneratedDocument> {
    params.validate()?;
    let params = params.normalized()?;
    tracing::debug!(?params, "generating line document");

    let groups = LineSetBuilder::new(&params, rng).build_all()?;
    tracing::debug!(groups = groups.len(), "generated line groups");

    Ok(GeneratedDocument {
        width: params.width,
        height: params.height,
        background_color: params.background_color,
        groups,
        animated: params.animate,
    })
}

/// Generate SVG markup drawing from `rng`
///
/// # Errors
///
/// Returns `InvalidParameters` if the parameters fail validation
pub fn generate_with<R: RandomSource + ?Sized>(
    params: &GenerationParameters,
    rng: &mut R,
) -> Result<String> {
    generate_document(params, rng).map(|document| render_svg(&document))
}

/// Generate reproducible SVG markup from a seed
///
/// # Errors
///
/// Returns `InvalidParameters` if the parameters fail validation
pub fn generate_seeded(params: &GenerationParameters, seed: u64) -> Result<String> {
    generate_with(params, &mut StdRandomSource::seeded(seed))
}

/// Generate SVG markup from a freshly seeded source
///
/// # Errors
///
/// Returns `InvalidParameters` if the parameters fail validation
pub fn generate(params: &GenerationParameters) -> Result<String> {
    generate_with(params, &mut StdRandomSource::from_entropy())
}
