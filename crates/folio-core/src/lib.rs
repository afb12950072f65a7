//! Folio Core Library
//!
//! This crate provides the core functionality for Folio, including:
//! - Project records and the read-only project catalog
//! - A virtual DOM with HTML and text-outline output
//! - Card rendering and page assembly
//! - Configuration (TOML file persistence)
//! - Error types with codes and suggestions

pub mod catalog;
pub mod config;
pub mod error;
pub mod project;
pub mod render;
pub mod view;

#[cfg(test)]
mod error_tests;

pub use error::{Error, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::catalog::Catalog;
    pub use crate::config::Config;
    pub use crate::error::{Error, Result};
    pub use crate::project::Project;
    pub use crate::render::{assemble, render_card, render_page};
    pub use crate::view::{Document, Element, HtmlOptions, PageOptions};
}
