//! Card and page rendering
//!
//! - `render_card` maps one project to a detached card element
//! - `assemble` appends the cards of a whole catalog to a page container

mod card;
mod page;

pub use card::{FEATURES_HEADING, render_card};
pub use page::{AssembleReport, assemble, render_page};
