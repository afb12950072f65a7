//! Portfolio project records
//!
//! A [`Project`] is one static portfolio entry. Records are plain data: they
//! are defined once (in code or in a catalog file) and never mutated after the
//! catalog is built.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Prefix of the rendered technology line
pub const TECH_PREFIX: &str = "Tech: ";

/// Separator between technologies in the rendered line
pub const TECH_SEPARATOR: &str = ", ";

/// A single portfolio item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Display title
    pub title: String,
    /// Short description paragraph
    pub description: String,
    /// Technologies used, in display order
    #[serde(default)]
    pub tech_stack: Vec<String>,
    /// Source repository URL
    #[serde(default)]
    pub github_link: Option<String>,
    /// Live demonstration URL
    #[serde(default)]
    pub live_demo_link: Option<String>,
    /// Image URL or path
    #[serde(default)]
    pub image: String,
    /// Feature bullet points, in display order
    #[serde(default)]
    pub features: Vec<String>,
}

impl Project {
    /// Create a project with only a title and description
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            tech_stack: Vec::new(),
            github_link: None,
            live_demo_link: None,
            image: String::new(),
            features: Vec::new(),
        }
    }

    /// Builder: set the technology list
    pub fn with_tech<I, S>(mut self, tech: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tech_stack = tech.into_iter().map(Into::into).collect();
        self
    }

    /// Builder: set the source repository link
    pub fn with_github_link(mut self, link: impl Into<String>) -> Self {
        self.github_link = Some(link.into());
        self
    }

    /// Builder: set the live demo link
    pub fn with_live_demo_link(mut self, link: impl Into<String>) -> Self {
        self.live_demo_link = Some(link.into());
        self
    }

    /// Builder: set the image reference
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Builder: append a feature
    pub fn with_feature(mut self, feature: impl Into<String>) -> Self {
        self.features.push(feature.into());
        self
    }

    /// The rendered technology line, e.g. `Tech: Python, Pandas`
    pub fn tech_line(&self) -> String {
        format!("{}{}", TECH_PREFIX, self.tech_stack.join(TECH_SEPARATOR))
    }

    /// Whether the card should carry a features section
    pub fn has_features(&self) -> bool {
        !self.features.is_empty()
    }

    /// Source repository link, treating blank values as unset
    pub fn github_link(&self) -> Option<&str> {
        non_blank(self.github_link.as_deref())
    }

    /// Live demo link, treating blank values as unset
    pub fn live_demo_link(&self) -> Option<&str> {
        non_blank(self.live_demo_link.as_deref())
    }

    /// Check that the record can be rendered
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::InvalidProject(
                "project title must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tech_line_joins_in_order() {
        let project = Project::new("X", "desc").with_tech(["A", "B"]);
        assert_eq!(project.tech_line(), "Tech: A, B");
    }

    #[test]
    fn test_tech_line_empty_stack() {
        let project = Project::new("X", "desc");
        assert_eq!(project.tech_line(), "Tech: ");
    }

    #[test]
    fn test_blank_links_are_absent() {
        let project = Project::new("X", "desc")
            .with_github_link("  ")
            .with_live_demo_link("");
        assert_eq!(project.github_link(), None);
        assert_eq!(project.live_demo_link(), None);

        let project = project.with_github_link("g");
        assert_eq!(project.github_link(), Some("g"));
    }

    #[test]
    fn test_has_features() {
        let project = Project::new("X", "desc");
        assert!(!project.has_features());
        assert!(project.with_feature("one").has_features());
    }

    #[test]
    fn test_validate_rejects_blank_title() {
        let err = Project::new("   ", "desc").validate().unwrap_err();
        assert_eq!(err.code(), "E002");
        assert!(Project::new("ok", "").validate().is_ok());
    }

    #[test]
    fn test_deserialize_camel_case_with_null_link() {
        let json = r#"{
            "title": "X",
            "description": "d",
            "techStack": ["A", "B"],
            "githubLink": "g",
            "liveDemoLink": null,
            "image": "img.png",
            "features": []
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.tech_stack, vec!["A", "B"]);
        assert_eq!(project.github_link(), Some("g"));
        assert_eq!(project.live_demo_link, None);
        assert!(!project.has_features());
    }

    #[test]
    fn test_deserialize_defaults_missing_fields() {
        let project: Project =
            serde_json::from_str(r#"{"title": "X", "description": "d"}"#).unwrap();
        assert!(project.tech_stack.is_empty());
        assert!(project.features.is_empty());
        assert!(project.image.is_empty());
        assert_eq!(project.github_link, None);
    }
}
