//! Text outline of an element tree
//!
//! Renders the virtual tree as an indented outline for terminals, e.g.
//!
//! ```text
//! div#projects-grid.projects-grid
//! └── div.project-card
//!     ├── img [src=cover.png]
//!     └── div.project-card-content
//!         └── h3 "Customer Churn Prediction"
//! ```

use super::node::{Element, Node};

/// Style configuration for outline rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutlineStyle {
    /// ASCII characters only (works everywhere)
    Ascii,
    /// Unicode box-drawing characters
    #[default]
    Unicode,
}

/// Options for rendering the outline
#[derive(Debug, Clone)]
pub struct OutlineOptions {
    /// Visual style for tree characters
    pub style: OutlineStyle,
    /// Maximum depth to render (None for unlimited)
    pub max_depth: Option<usize>,
    /// Show direct text of each element
    pub show_text: bool,
    /// Show `src`/`href` attributes
    pub show_links: bool,
    /// Truncate text after this many characters
    pub text_width: usize,
}

impl Default for OutlineOptions {
    fn default() -> Self {
        Self {
            style: OutlineStyle::Unicode,
            max_depth: None,
            show_text: true,
            show_links: true,
            text_width: 48,
        }
    }
}

impl OutlineOptions {
    /// Create ASCII-only options for basic terminals
    pub fn ascii() -> Self {
        Self {
            style: OutlineStyle::Ascii,
            ..Default::default()
        }
    }

    /// Tags, ids and classes only
    pub fn minimal() -> Self {
        Self {
            show_text: false,
            show_links: false,
            ..Default::default()
        }
    }

    /// Builder: set style
    pub fn with_style(mut self, style: OutlineStyle) -> Self {
        self.style = style;
        self
    }

    /// Builder: set max depth
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }
}

/// Outline renderer over a borrowed element
pub struct Outline<'a> {
    root: &'a Element,
    options: OutlineOptions,
}

impl<'a> Outline<'a> {
    pub fn new(root: &'a Element) -> Self {
        Self {
            root,
            options: OutlineOptions::default(),
        }
    }

    pub fn with_options(root: &'a Element, options: OutlineOptions) -> Self {
        Self { root, options }
    }

    /// Render the outline to a string
    pub fn render(&self) -> String {
        let mut output = String::new();
        self.render_element(self.root, &mut output, "", true, 0);
        output
    }

    /// Render to a vector of lines
    pub fn render_lines(&self) -> Vec<String> {
        self.render().lines().map(|s| s.to_string()).collect()
    }

    fn render_element(
        &self,
        element: &Element,
        output: &mut String,
        prefix: &str,
        is_last: bool,
        depth: usize,
    ) {
        if self.options.max_depth.is_some_and(|max| depth > max) {
            return;
        }

        let (branch, vertical) = match self.options.style {
            OutlineStyle::Ascii => {
                if is_last {
                    ("`-- ", "    ")
                } else {
                    ("+-- ", "|   ")
                }
            }
            OutlineStyle::Unicode => {
                if is_last {
                    ("└── ", "    ")
                } else {
                    ("├── ", "│   ")
                }
            }
        };

        if depth > 0 {
            output.push_str(prefix);
            output.push_str(branch);
        }
        output.push_str(&self.label(element));
        output.push('\n');

        let children: Vec<&Element> = element.child_elements().collect();
        let child_count = children.len();
        for (i, child) in children.into_iter().enumerate() {
            let new_prefix = if depth > 0 {
                format!("{}{}", prefix, vertical)
            } else {
                String::new()
            };
            self.render_element(child, output, &new_prefix, i == child_count - 1, depth + 1);
        }
    }

    fn label(&self, element: &Element) -> String {
        let mut line = element.tag().to_string();

        if let Some(id) = element.get_attr("id") {
            line.push('#');
            line.push_str(id);
        }
        for class in element.classes() {
            line.push('.');
            line.push_str(class);
        }

        if self.options.show_links {
            for name in ["src", "href"] {
                if let Some(value) = element.get_attr(name) {
                    line.push_str(&format!(" [{}={}]", name, value));
                }
            }
        }

        if self.options.show_text {
            let own_text: String = element
                .child_nodes()
                .iter()
                .filter_map(|n| match n {
                    Node::Text(t) => Some(t.as_str()),
                    Node::Element(_) => None,
                })
                .collect();
            let own_text = own_text.trim();
            if !own_text.is_empty() {
                line.push_str(&format!(" \"{}\"", truncate(own_text, self.options.text_width)));
            }
        }

        line
    }
}

impl std::fmt::Display for Outline<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{}...", kept)
}
