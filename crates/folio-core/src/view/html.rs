//! HTML serialization for the virtual tree

use super::node::{Element, Node};

/// Elements that never carry children or a closing tag
const VOID_ELEMENTS: &[&str] = &["area", "base", "br", "col", "hr", "img", "input", "link", "meta"];

/// Options for HTML output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlOptions {
    /// One element per line, indented
    pub pretty: bool,
    /// Spaces per nesting level in pretty mode
    pub indent_width: usize,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            pretty: false,
            indent_width: 2,
        }
    }
}

impl HtmlOptions {
    /// Compact single-line output
    pub fn compact() -> Self {
        Self::default()
    }

    /// Indented output
    pub fn pretty(indent_width: usize) -> Self {
        Self {
            pretty: true,
            indent_width,
        }
    }
}

/// Escape text or an attribute value for HTML
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

/// Serialize a node
pub fn to_html(node: &Node, options: &HtmlOptions) -> String {
    let mut out = String::new();
    if options.pretty {
        write_pretty(node, options, 0, &mut out);
    } else {
        write_compact(node, &mut out);
    }
    out
}

/// Serialize an element
pub fn element_to_html(element: &Element, options: &HtmlOptions) -> String {
    let mut out = String::new();
    if options.pretty {
        write_pretty_element(element, options, 0, &mut out);
    } else {
        write_compact_element(element, &mut out);
    }
    out
}

fn write_open_tag(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(element.tag());
    if !element.classes().is_empty() {
        out.push_str(" class=\"");
        out.push_str(&escape(&element.class_name()));
        out.push('"');
    }
    for (name, value) in element.attrs() {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape(value));
        out.push('"');
    }
    out.push('>');
}

fn write_close_tag(element: &Element, out: &mut String) {
    out.push_str("</");
    out.push_str(element.tag());
    out.push('>');
}

fn write_compact(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => out.push_str(&escape(text)),
        Node::Element(el) => write_compact_element(el, out),
    }
}

fn write_compact_element(element: &Element, out: &mut String) {
    write_open_tag(element, out);
    if is_void(element.tag()) {
        return;
    }
    for child in element.child_nodes() {
        write_compact(child, out);
    }
    write_close_tag(element, out);
}

fn write_pretty(node: &Node, options: &HtmlOptions, depth: usize, out: &mut String) {
    match node {
        Node::Text(text) => {
            push_indent(options, depth, out);
            out.push_str(&escape(text));
            out.push('\n');
        }
        Node::Element(el) => write_pretty_element(el, options, depth, out),
    }
}

fn write_pretty_element(element: &Element, options: &HtmlOptions, depth: usize, out: &mut String) {
    push_indent(options, depth, out);
    write_open_tag(element, out);

    if is_void(element.tag()) {
        out.push('\n');
        return;
    }

    // Text-only (or empty) elements stay on one line
    let inline = element.child_elements().next().is_none();
    if inline {
        for child in element.child_nodes() {
            write_compact(child, out);
        }
        write_close_tag(element, out);
        out.push('\n');
        return;
    }

    out.push('\n');
    for child in element.child_nodes() {
        write_pretty(child, options, depth + 1, out);
    }
    push_indent(options, depth, out);
    write_close_tag(element, out);
    out.push('\n');
}

fn push_indent(options: &HtmlOptions, depth: usize, out: &mut String) {
    out.extend(std::iter::repeat_n(' ', depth * options.indent_width));
}
