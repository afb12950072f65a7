//! Virtual DOM Module
//!
//! Declarative element trees that stand in for the browser DOM, so pages can
//! be built and inspected without a rendering environment.
//!
//! # Features
//!
//! - **Element Trees**: `Element`/`Node` builders with id, class and tag queries
//! - **HTML Output**: escaped, compact or indented serialization
//! - **Documents**: a page shell with a container element addressed by id
//! - **Outlines**: Unicode or ASCII text trees for terminal inspection
//!
//! # Example
//!
//! ```
//! use folio_core::view::{Element, HtmlOptions, element_to_html};
//!
//! let list = Element::new("ul").child(Element::new("li").text("one"));
//! assert_eq!(
//!     element_to_html(&list, &HtmlOptions::compact()),
//!     "<ul><li>one</li></ul>"
//! );
//! ```

mod document;
mod html;
mod node;
mod outline;

pub use document::{DEFAULT_CONTAINER_ID, Document, PageOptions};
pub use html::{HtmlOptions, element_to_html, escape, is_void, to_html};
pub use node::{Element, Node};
pub use outline::{Outline, OutlineOptions, OutlineStyle};
