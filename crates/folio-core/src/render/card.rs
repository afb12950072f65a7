//! Card rendering: one project to one detached element tree

use crate::project::Project;
use crate::view::Element;

/// Heading shown above the feature list
pub const FEATURES_HEADING: &str = "Key Features:";

/// Link target for outbound anchors
const NEW_CONTEXT: &str = "_blank";

/// Render a project card
///
/// The feature heading and list appear only when the project has features.
/// Each link appears only when its field is set. The `div.links` wrapper is
/// always present.
pub fn render_card(project: &Project) -> Element {
    let image = Element::new("img")
        .attr("src", project.image.as_str())
        .attr("alt", project.title.as_str());

    let mut content = Element::new("div")
        .class("project-card-content")
        .child(Element::new("h3").text(project.title.as_str()))
        .child(
            Element::new("p")
                .class("project-card-description")
                .text(project.description.as_str()),
        )
        .child(Element::new("p").class("tech-stack").text(project.tech_line()));

    if project.has_features() {
        content.append_child(
            Element::new("h4")
                .class("font-semibold")
                .class("mt-4")
                .text(FEATURES_HEADING),
        );
        content.append_child(
            Element::new("ul").children(
                project
                    .features
                    .iter()
                    .map(|feature| Element::new("li").text(feature.as_str())),
            ),
        );
    }

    content.append_child(render_links(project));

    Element::new("div")
        .class("project-card")
        .child(image)
        .child(content)
}

fn render_links(project: &Project) -> Element {
    let mut links = Element::new("div").class("links");
    if let Some(href) = project.github_link() {
        links.append_child(outbound_link(href, "GitHub", "github"));
    }
    if let Some(href) = project.live_demo_link() {
        links.append_child(outbound_link(href, "Live Demo", "demo"));
    }
    links
}

fn outbound_link(href: &str, label: &str, class: &str) -> Element {
    Element::new("a")
        .class(class)
        .attr("href", href)
        .attr("target", NEW_CONTEXT)
        .text(label)
}
