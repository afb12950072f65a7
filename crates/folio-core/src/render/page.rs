//! Page assembly: append every catalog card to the container

use tracing::{debug, info};

use super::card::render_card;
use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::view::{Document, PageOptions};

/// Outcome of one assembly pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembleReport {
    /// Container that received the cards
    pub container_id: String,
    /// Cards appended by this pass
    pub appended: usize,
    /// Container children after the pass
    pub container_len: usize,
}

/// Render each project and append the cards, in catalog order
///
/// Existing container children are kept, so a second pass over the same
/// document appends a second set of cards.
pub fn assemble(document: &mut Document, catalog: &Catalog, container_id: &str) -> Result<AssembleReport> {
    let container = document
        .container_mut(container_id)
        .ok_or_else(|| Error::ContainerNotFound(container_id.to_string()))?;

    for (index, project) in catalog.iter().enumerate() {
        debug!(index, title = %project.title, "Rendering project card");
        container.append_child(render_card(project));
    }

    let report = AssembleReport {
        container_id: container_id.to_string(),
        appended: catalog.len(),
        container_len: container.child_nodes().len(),
    };

    info!(
        container = %report.container_id,
        appended = report.appended,
        "Assembled project cards"
    );

    Ok(report)
}

/// Build a fresh page from options and assemble the catalog into it
pub fn render_page(catalog: &Catalog, options: &PageOptions) -> Result<Document> {
    let mut document = Document::new(options);
    assemble(&mut document, catalog, &options.container_id)?;
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::Project;
    use crate::view::DEFAULT_CONTAINER_ID;

    fn two_projects() -> Catalog {
        Catalog::new(vec![
            Project::new("First", "one"),
            Project::new("Second", "two").with_feature("f"),
        ])
        .unwrap()
    }

    #[test]
    fn test_assemble_appends_in_order() {
        let mut doc = Document::new(&PageOptions::default());
        let report = assemble(&mut doc, &two_projects(), DEFAULT_CONTAINER_ID).unwrap();
        assert_eq!(report.appended, 2);
        assert_eq!(report.container_len, 2);

        let container = doc.container(DEFAULT_CONTAINER_ID).unwrap();
        let titles: Vec<_> = container
            .find_all_by_tag("h3")
            .iter()
            .map(|h| h.text_content())
            .collect();
        assert_eq!(titles, vec!["First", "Second"]);
    }

    #[test]
    fn test_assemble_twice_duplicates() {
        let mut doc = Document::new(&PageOptions::default());
        assemble(&mut doc, &two_projects(), DEFAULT_CONTAINER_ID).unwrap();
        let report = assemble(&mut doc, &two_projects(), DEFAULT_CONTAINER_ID).unwrap();
        assert_eq!(report.appended, 2);
        assert_eq!(report.container_len, 4);
    }

    #[test]
    fn test_missing_container_fails_fast() {
        let mut doc = Document::empty(&PageOptions::default());
        let err = assemble(&mut doc, &two_projects(), DEFAULT_CONTAINER_ID).unwrap_err();
        assert_eq!(err.code(), "E200");
        assert!(matches!(err, Error::ContainerNotFound(id) if id == DEFAULT_CONTAINER_ID));
    }

    #[test]
    fn test_empty_catalog_leaves_container_empty() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        let doc = render_page(&catalog, &PageOptions::default()).unwrap();
        assert_eq!(
            doc.container(DEFAULT_CONTAINER_ID).unwrap().child_nodes().len(),
            0
        );
    }

    #[test]
    fn test_render_page_uses_container_id() {
        let options = PageOptions::default().with_container_id("grid");
        let doc = render_page(&two_projects(), &options).unwrap();
        assert_eq!(doc.container("grid").unwrap().child_elements().count(), 2);
    }
}
