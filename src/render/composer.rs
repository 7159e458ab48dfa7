//! Assembles a generated document into an SVG element tree

use crate::algorithm::builder::LineGroup;
use crate::algorithm::executor::GeneratedDocument;
use crate::render::animation::stylesheet;
use crate::render::document::Element;

/// Namespace declared on the root element
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Build the `<svg>` tree for `document`
///
/// Animated documents get a leading `<style>` child; every group becomes a
/// `<g>` holding a single `<path>`.
pub fn compose(document: &GeneratedDocument) -> Element {
    let mut root = Element::new("svg")
        .attr("xmlns", SVG_NAMESPACE)
        .attr("width", document.width)
        .attr("height", document.height)
        .attr(
            "viewBox",
            format!("0 0 {} {}", document.width, document.height),
        )
        .attr(
            "style",
            format!("background-color: {}", document.background_color),
        );

    if document.animated {
        root = root.child(Element::new("style").text(stylesheet(
            &document.groups,
            document.width,
            document.height,
        )));
    }

    document
        .groups
        .iter()
        .fold(root, |root, group| root.child(group_element(group)))
}

/// `<g>` element carrying the group's stroke style and path
pub fn group_element(group: &LineGroup) -> Element {
    let mut element = Element::new("g")
        .attr("stroke", &group.color)
        .attr("stroke-width", group.stroke_width)
        .attr("stroke-linecap", "butt")
        .attr("opacity", group.opacity);

    if let Some(animation) = &group.animation {
        element = element.attr("class", &animation.class_name);
    }

    element.child(Element::new("path").attr("d", path_data(group)))
}

/// Concatenated path commands of every segment in the group
pub fn path_data(group: &LineGroup) -> String {
    group
        .segments
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Serialize `document` into standalone SVG markup
pub fn render_svg(document: &GeneratedDocument) -> String {
    compose(document).to_string()
}
