//! Portfolio content as seen by the public site.
//!
//! This crate owns the consumer side of the hosted content backend: the
//! collection names, the typed records stored in them, the [`ContentSource`]
//! trait any backend client implements, an in-memory [`MemorySource`], and
//! [`PanelContent::load`], which gathers everything the island map shows.
//! Writes exist on the trait for the admin area; the map itself only reads.

pub mod memory;
pub mod panel_content;
pub mod records;
pub mod source;

pub use memory::MemorySource;
pub use panel_content::PanelContent;
pub use source::{Collection, ContentError, ContentSource, Query, Record};
