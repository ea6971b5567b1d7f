//! Mapper document model
//!
//! Statements are composed as owned [`XmlElement`] trees and only attached to
//! the per-table [`Document`] once complete. The document itself is an arena
//! of element records addressed by [`ElementId`], so positioning and rewrite
//! passes splice children by index.

mod document;
mod element;
mod position;
mod render;

pub use document::{Child, Document, ElementId, ElementRecord};
pub use element::{XmlElement, XmlNode};
pub use position::best_position;
pub use render::{MAPPER_DOCTYPE, XML_HEADER};

/// Tag of reusable SQL fragments
pub const SQL_FRAGMENT: &str = "sql";
