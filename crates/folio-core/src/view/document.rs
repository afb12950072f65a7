//! Page shell holding the card container

use super::html::{HtmlOptions, element_to_html};
use super::node::Element;

/// Default id of the element that receives the cards
pub const DEFAULT_CONTAINER_ID: &str = "projects-grid";

/// Settings for building the page shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOptions {
    /// `<title>` text
    pub title: String,
    /// Heading shown above the grid
    pub heading: Option<String>,
    /// Stylesheet URL linked from `<head>`
    pub stylesheet: Option<String>,
    /// Id of the container element
    pub container_id: String,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title: "Data Science Portfolio".to_string(),
            heading: Some("Projects".to_string()),
            stylesheet: Some("style.css".to_string()),
            container_id: DEFAULT_CONTAINER_ID.to_string(),
        }
    }
}

impl PageOptions {
    /// Builder: set the container id
    pub fn with_container_id(mut self, id: impl Into<String>) -> Self {
        self.container_id = id.into();
        self
    }
}

/// A virtual HTML document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Document {
    /// Build a page with an empty container
    pub fn new(options: &PageOptions) -> Self {
        let mut main = Element::new("main");
        if let Some(heading) = &options.heading {
            main.append_child(Element::new("h2").text(heading.as_str()));
        }
        main.append_child(
            Element::new("div")
                .id(options.container_id.as_str())
                .class("projects-grid"),
        );

        Self::with_body(options, Element::new("body").child(main))
    }

    /// Build a page whose body has no container
    pub fn empty(options: &PageOptions) -> Self {
        Self::with_body(options, Element::new("body"))
    }

    fn with_body(options: &PageOptions, body: Element) -> Self {
        let mut head = Element::new("head")
            .child(Element::new("meta").attr("charset", "utf-8"))
            .child(
                Element::new("meta")
                    .attr("name", "viewport")
                    .attr("content", "width=device-width, initial-scale=1"),
            )
            .child(Element::new("title").text(options.title.as_str()));
        if let Some(stylesheet) = &options.stylesheet {
            head.append_child(
                Element::new("link")
                    .attr("rel", "stylesheet")
                    .attr("href", stylesheet.as_str()),
            );
        }

        let root = Element::new("html").attr("lang", "en").child(head).child(body);
        Self { root }
    }

    /// The `<body>` element
    pub fn body(&self) -> Option<&Element> {
        self.root.child_elements().find(|el| el.tag() == "body")
    }

    /// Look up the container by id
    pub fn container(&self, id: &str) -> Option<&Element> {
        self.root.find_by_id(id)
    }

    /// Look up the container by id for appending
    pub fn container_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.root.find_by_id_mut(id)
    }

    /// Serialize the whole document, doctype included
    pub fn to_html(&self, options: &HtmlOptions) -> String {
        let mut out = String::from("<!DOCTYPE html>\n");
        out.push_str(&element_to_html(&self.root, options));
        if !out.ends_with('\n') {
            out.push('\n');
        }
        out
    }
}
