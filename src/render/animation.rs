//! CSS motion for animated documents

use crate::algorithm::builder::LineGroup;
use crate::spatial::segment::Orientation;

/// Keyframes moving horizontal groups along the x axis
pub const MOVE_HORIZONTAL: &str = "moveHorizontal";
/// Keyframes moving vertical groups along the y axis
pub const MOVE_VERTICAL: &str = "moveVertical";

/// Keyframes name used by groups of `orientation`
pub const fn keyframes_for(orientation: Orientation) -> &'static str {
    match orientation {
        Orientation::Horizontal => MOVE_HORIZONTAL,
        Orientation::Vertical => MOVE_VERTICAL,
    }
}

/// Stylesheet with one rule per animated group and the shared keyframes
///
/// Both keyframes push a group off canvas by exactly the canvas width or
/// height and bring it back.
pub fn stylesheet(groups: &[LineGroup], width: u32, height: u32) -> String {
    let mut css = String::new();

    for group in groups {
        if let Some(animation) = &group.animation {
            css.push_str(&format!(
                ".{} {{ animation: {} {:.3}s ease-in-out {:.3}s infinite; }}\n",
                animation.class_name,
                keyframes_for(group.orientation()),
                animation.duration_seconds,
                animation.delay_seconds,
            ));
        }
    }

    css.push_str(&keyframes(MOVE_HORIZONTAL, "translateX", width));
    css.push_str(&keyframes(MOVE_VERTICAL, "translateY", height));
    css
}

/// `@keyframes` block moving out by `distance` pixels at the halfway point
pub fn keyframes(name: &str, transform: &str, distance: u32) -> String {
    format!(
        "@keyframes {name} {{\n  0% {{ transform: {transform}(0px); }}\n  50% {{ transform: {transform}({distance}px); }}\n  100% {{ transform: {transform}(0px); }}\n}}\n"
    )
}
