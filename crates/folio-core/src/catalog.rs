//! Project catalog
//!
//! The catalog is the ordered, read-only list of projects handed to the page
//! assembler. It is built once (from the built-in sample set or from a
//! TOML/JSON file) and only borrowed afterwards.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::project::Project;

const PLACEHOLDER_IMAGE: &str = "https://placehold.co/600x400/EEE/31343C";

/// Ordered, immutable list of projects
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    projects: Vec<Project>,
}

/// On-disk catalog layout: `{ "projects": [...] }` or `[[projects]]` tables
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    projects: Vec<Project>,
}

/// JSON catalogs may also be a bare array of projects
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonCatalog {
    Wrapped(CatalogFile),
    Bare(Vec<Project>),
}

impl Catalog {
    /// Build a catalog, validating every project
    pub fn new(projects: Vec<Project>) -> Result<Self> {
        for (index, project) in projects.iter().enumerate() {
            project.validate().map_err(|e| match e {
                Error::InvalidProject(msg) => {
                    Error::InvalidProject(format!("entry {}: {}", index + 1, msg))
                }
                other => other,
            })?;
        }
        Ok(Self { projects })
    }

    /// Parse a TOML catalog (`[[projects]]` tables)
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(contents)?;
        Self::new(file.projects)
    }

    /// Parse a JSON catalog (object with `projects`, or a bare array)
    pub fn from_json_str(contents: &str) -> Result<Self> {
        let projects = match serde_json::from_str::<JsonCatalog>(contents)? {
            JsonCatalog::Wrapped(file) => file.projects,
            JsonCatalog::Bare(projects) => projects,
        };
        Self::new(projects)
    }

    /// Load a catalog file, choosing the parser from the file extension
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::CatalogNotFound(path.display().to_string()));
        }

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        let parse: fn(&str) -> Result<Self> = match extension.as_str() {
            "toml" => Self::from_toml_str,
            "json" => Self::from_json_str,
            other => return Err(Error::UnsupportedCatalogFormat(other.to_string())),
        };

        let contents = fs::read_to_string(path)?;
        let catalog = parse(&contents)?;

        debug!(path = %path.display(), projects = catalog.len(), "Loaded catalog");
        Ok(catalog)
    }

    /// Built-in sample catalog
    ///
    /// Links and images are placeholders, not real endpoints.
    pub fn sample() -> Self {
        let projects = vec![
            Project::new(
                "Customer Churn Prediction",
                "Developed a machine learning model to predict customer churn using Python and scikit-learn.  Achieved 92% accuracy in identifying customers at risk of leaving.",
            )
            .with_tech(["Python", "Pandas", "Scikit-learn", "Jupyter Notebook"])
            .with_github_link("https://github.com/yourusername/churn-prediction")
            .with_image(PLACEHOLDER_IMAGE)
            .with_feature("Data Preprocessing and Feature Engineering")
            .with_feature("Model Selection (Logistic Regression, Random Forest)")
            .with_feature("Model Evaluation and Hyperparameter Tuning")
            .with_feature("Visualization of Results"),
            Project::new(
                "Sales Forecasting with Time Series Analysis",
                "Implemented time series models (ARIMA, Prophet) to forecast future sales trends.  Improved forecast accuracy by 15% compared to the baseline model.",
            )
            .with_tech(["Python", "Pandas", "Prophet", "Matplotlib", "Seaborn"])
            .with_github_link("https://github.com/yourusername/sales-forecasting")
            .with_image(PLACEHOLDER_IMAGE)
            .with_feature("Exploratory Data Analysis (EDA) of Time Series Data")
            .with_feature("Stationarity Testing and Data Transformation")
            .with_feature("Model Fitting and Validation")
            .with_feature("Visualization of Forecasts and Confidence Intervals"),
            Project::new(
                "Sentiment Analysis of Social Media Data",
                "Built a natural language processing pipeline to analyze the sentiment of tweets related to a specific topic.  Deployed a Streamlit application to visualize real-time sentiment.",
            )
            .with_tech(["Python", "NLTK", "Transformers", "Streamlit"])
            .with_github_link("https://github.com/yourusername/sentiment-analysis")
            .with_live_demo_link("https://your-streamlit-app.herokuapp.com")
            .with_image(PLACEHOLDER_IMAGE)
            .with_feature("Text Preprocessing and Cleaning")
            .with_feature("Sentiment Classification Using Pre-trained Models")
            .with_feature("Real-time Data Collection and Analysis")
            .with_feature("Interactive Visualization with Streamlit"),
            Project::new(
                "Image Classification with Convolutional Neural Networks",
                "Developed a CNN model using TensorFlow and Keras to classify images of different objects. Achieved 95% accuracy on the test set.",
            )
            .with_tech(["Python", "TensorFlow", "Keras", "OpenCV"])
            .with_github_link("https://github.com/yourusername/image-classification")
            .with_image(PLACEHOLDER_IMAGE)
            .with_feature("Data augmentation and preprocessing")
            .with_feature("CNN architecture design and training")
            .with_feature("Model evaluation and visualization of results")
            .with_feature("Integration with a web application for image upload and classification"),
            Project::new(
                "Customer Segmentation with Clustering",
                "Applied unsupervised learning techniques (K-Means, DBSCAN) to segment customers based on their purchasing behavior.  Identified key customer segments for targeted marketing campaigns.",
            )
            .with_tech(["Python", "Pandas", "Scikit-learn", "Matplotlib"])
            .with_github_link("https://github.com/yourusername/customer-segmentation")
            .with_image(PLACEHOLDER_IMAGE)
            .with_feature("Data exploration and feature selection")
            .with_feature("Clustering algorithm implementation and comparison")
            .with_feature("Visualization of customer segments")
            .with_feature("Interpretation of segment characteristics"),
            Project::new(
                "Fraud Detection with Machine Learning",
                "Built a machine learning model to detect fraudulent transactions in a financial dataset.  Reduced fraud by 80% while minimizing false positives.",
            )
            .with_tech(["Python", "Pandas", "Scikit-learn", "XGBoost"])
            .with_github_link("https://github.com/yourusername/fraud-detection")
            .with_image(PLACEHOLDER_IMAGE)
            .with_feature("Handling imbalanced data")
            .with_feature("Feature engineering and selection")
            .with_feature("Model selection and evaluation (Logistic Regression, XGBoost)")
            .with_feature("Performance metrics (Precision, Recall, F1-score, AUC-ROC)"),
        ];

        Self { projects }
    }

    /// Iterate projects in catalog order
    pub fn iter(&self) -> std::slice::Iter<'_, Project> {
        self.projects.iter()
    }

    /// Number of projects
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Whether the catalog has no projects
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Project at a position
    pub fn get(&self, index: usize) -> Option<&Project> {
        self.projects.get(index)
    }

    /// Find a project by title (case-insensitive)
    pub fn find(&self, title: &str) -> Result<&Project> {
        let wanted = title.trim();
        self.projects
            .iter()
            .find(|p| p.title.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::ProjectNotFound(wanted.to_string()))
    }

    /// Project titles in catalog order
    pub fn titles(&self) -> Vec<&str> {
        self.projects.iter().map(|p| p.title.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Project;
    type IntoIter = std::slice::Iter<'a, Project>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
