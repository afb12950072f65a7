//! Folio Core Integration Tests

use folio_core::{
    Error,
    catalog::Catalog,
    project::Project,
    render::{assemble, render_card, render_page},
    view::{DEFAULT_CONTAINER_ID, Document, HtmlOptions, Outline, OutlineOptions, PageOptions},
};

#[test]
fn test_sample_catalog_renders_one_card_per_project_in_order() {
    let catalog = Catalog::sample();
    let doc = render_page(&catalog, &PageOptions::default()).unwrap();

    let container = doc.container(DEFAULT_CONTAINER_ID).unwrap();
    let cards: Vec<_> = container.child_elements().collect();
    assert_eq!(cards.len(), catalog.len());

    for (card, project) in cards.iter().zip(catalog.iter()) {
        assert!(card.has_class("project-card"));
        let title = card.find_all_by_tag("h3")[0].text_content();
        assert_eq!(title, project.title);
    }
}

#[test]
fn test_sample_catalog_tech_lines_and_links() {
    let catalog = Catalog::sample();
    let doc = render_page(&catalog, &PageOptions::default()).unwrap();
    let container = doc.container(DEFAULT_CONTAINER_ID).unwrap();

    for (card, project) in container.child_elements().zip(catalog.iter()) {
        let tech = card.find_all_by_class("tech-stack")[0].text_content();
        assert_eq!(tech, format!("Tech: {}", project.tech_stack.join(", ")));

        let demos = card.find_all_by_class("demo");
        match project.live_demo_link() {
            Some(href) => {
                assert_eq!(demos.len(), 1);
                assert_eq!(demos[0].get_attr("href"), Some(href));
            }
            None => assert!(demos.is_empty()),
        }
    }

    assert_eq!(container.find_all_by_class("demo").len(), 1);
    assert_eq!(container.find_all_by_class("github").len(), 6);
}

#[test]
fn test_project_without_features_omits_section() {
    let catalog = Catalog::new(vec![
        Project::new("With", "has features").with_feature("one"),
        Project::new("Without", "no features"),
    ])
    .unwrap();
    let doc = render_page(&catalog, &PageOptions::default()).unwrap();
    let cards: Vec<_> = doc
        .container(DEFAULT_CONTAINER_ID)
        .unwrap()
        .child_elements()
        .collect();

    assert_eq!(cards[0].find_all_by_tag("h4").len(), 1);
    assert_eq!(cards[0].find_all_by_tag("li").len(), 1);
    assert!(cards[1].find_all_by_tag("h4").is_empty());
    assert!(cards[1].find_all_by_tag("ul").is_empty());
}

#[test]
fn test_worked_example_html() {
    let project = Project::new("X", "d").with_tech(["A", "B"]).with_github_link("g");
    let html = folio_core::view::element_to_html(&render_card(&project), &HtmlOptions::compact());

    assert_eq!(
        html,
        concat!(
            r#"<div class="project-card"><img src="" alt="X">"#,
            r#"<div class="project-card-content"><h3>X</h3>"#,
            r#"<p class="project-card-description">d</p>"#,
            r#"<p class="tech-stack">Tech: A, B</p>"#,
            r#"<div class="links"><a class="github" href="g" target="_blank">GitHub</a></div>"#,
            r#"</div></div>"#,
        )
    );
}

#[test]
fn test_rerunning_assembler_duplicates_cards() {
    let catalog = Catalog::sample();
    let mut doc = Document::new(&PageOptions::default());

    assemble(&mut doc, &catalog, DEFAULT_CONTAINER_ID).unwrap();
    let report = assemble(&mut doc, &catalog, DEFAULT_CONTAINER_ID).unwrap();

    assert_eq!(report.container_len, catalog.len() * 2);
    let container = doc.container(DEFAULT_CONTAINER_ID).unwrap();
    let first: Vec<_> = container.child_elements().take(catalog.len()).collect();
    let second: Vec<_> = container.child_elements().skip(catalog.len()).collect();
    assert_eq!(first, second);
}

#[test]
fn test_missing_container_is_reported() {
    let mut doc = Document::new(&PageOptions::default());
    let err = assemble(&mut doc, &Catalog::sample(), "gallery").unwrap_err();
    assert!(matches!(err, Error::ContainerNotFound(_)));
    assert!(err.to_string().contains("#gallery"));
}

#[test]
fn test_full_page_html_escapes_content() {
    let catalog = Catalog::new(vec![
        Project::new("Q&A <Bot>", "Answers \"questions\"").with_live_demo_link("https://x.test/?a=1&b=2"),
    ])
    .unwrap();
    let doc = render_page(&catalog, &PageOptions::default()).unwrap();
    let html = doc.to_html(&HtmlOptions::pretty(2));

    assert!(html.starts_with("<!DOCTYPE html>\n"));
    assert!(html.contains("<h3>Q&amp;A &lt;Bot&gt;</h3>"));
    assert!(html.contains(r#"alt="Q&amp;A &lt;Bot&gt;""#));
    assert!(html.contains("Answers &quot;questions&quot;"));
    assert!(html.contains(r#"href="https://x.test/?a=1&amp;b=2""#));
    assert!(html.contains("<link rel=\"stylesheet\" href=\"style.css\">"));
}

#[test]
fn test_outline_of_rendered_container() {
    let catalog = Catalog::new(vec![Project::new("Solo", "one card").with_github_link("g")]).unwrap();
    let doc = render_page(&catalog, &PageOptions::default()).unwrap();
    let container = doc.container(DEFAULT_CONTAINER_ID).unwrap();

    let lines = Outline::with_options(container, OutlineOptions::ascii()).render_lines();
    assert_eq!(lines[0], "div#projects-grid.projects-grid");
    assert_eq!(lines[1], "`-- div.project-card");
    assert!(lines.iter().any(|l| l.contains("h3 \"Solo\"")));
    assert!(lines.iter().any(|l| l.contains("a.github [href=g] \"GitHub\"")));
}
