//! Minimal markup tree serialized once into indented XML
//!
//! Attribute values and text are escaped on output, so callers build the tree
//! from raw values.

use std::fmt::{self, Write};

/// Child of an [`Element`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// Nested element
    Element(Element),
    /// Character data
    Text(String),
}

/// Tag with ordered attributes and children
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    /// Empty element named `name`
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Append an attribute
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.attributes.push((name.into(), value.to_string()));
        self
    }

    /// Append a child element
    #[must_use]
    pub fn child(mut self, child: Self) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    /// Append character data
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Tag name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value of the first attribute called `name`
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Children in document order
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Child elements named `name`
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Self> + 'a {
        self.children.iter().filter_map(move |node| match node {
            Node::Element(element) if element.name == name => Some(element),
            Node::Element(_) | Node::Text(_) => None,
        })
    }

    fn write_indented(&self, out: &mut impl Write, depth: usize) -> fmt::Result {
        let indent = "  ".repeat(depth);
        write!(out, "{indent}<{}", self.name)?;
        for (name, value) in &self.attributes {
            write!(out, r#" {name}="{}""#, escape(value))?;
        }

        if self.children.is_empty() {
            return writeln!(out, "/>");
        }
        writeln!(out, ">")?;

        for child in &self.children {
            match child {
                Node::Element(element) => element.write_indented(out, depth + 1)?,
                Node::Text(text) => {
                    for line in text.lines() {
                        writeln!(out, "{indent}  {}", escape(line))?;
                    }
                }
            }
        }

        writeln!(out, "{indent}</{}>", self.name)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}

/// Escape the XML special characters in `input`
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}
