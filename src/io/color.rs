//! Hex color parsing for palette and background inputs

use crate::io::error::{Result, invalid_parameter};

/// Normalize a `#RRGGBB` color, adding the `#` prefix when missing
///
/// Surrounding whitespace is ignored and the digits keep their case.
///
/// # Errors
///
/// Returns `InvalidParameters` unless the input is six hex digits after the
/// optional prefix
pub fn normalize_color(parameter: &'static str, input: &str) -> Result<String> {
    let trimmed = input.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

    if digits.len() != 6 || !digits.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return Err(invalid_parameter(
            parameter,
            &input,
            &"expected a color of the form #RRGGBB",
        ));
    }

    Ok(format!("#{digits}"))
}

/// `clap` value parser for color arguments
///
/// # Errors
///
/// Returns the validation message when the color is malformed
pub fn parse_color_arg(input: &str) -> std::result::Result<String, String> {
    normalize_color("color", input).map_err(|err| err.to_string())
}
