//! Structural dictionaries of the document: catalog, page tree, pages and
//! the shared font.

mod catalog;
mod font;
mod page_node;
mod page_tree;

pub use catalog::Catalog;
pub use font::FontResource;
pub use page_node::PageNode;
pub use page_tree::PageTree;

use crate::objects::ObjectId;

/// Fixed object numbers reserved at document creation.
pub const CATALOG_ID: ObjectId = ObjectId::new(1, 0);
pub const PAGES_ID: ObjectId = ObjectId::new(2, 0);
pub const FONT_ID: ObjectId = ObjectId::new(3, 0);
