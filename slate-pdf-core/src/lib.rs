//! # slate-pdf
//!
//! A small PDF writer with a table layout engine.
//!
//! ## Features
//!
//! - **Object model**: numbered indirect objects, dictionaries and streams
//! - **Pages**: text lines and tables, compiled into content streams at write time
//! - **Tables**: auto and fixed column widths, row/column spans, per-cell styling
//! - **Byte-exact output**: a cross-reference table built from tracked offsets
//! - **Async writing**: tokio-based writer with cooperative cancellation (`async` feature)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use slate_pdf::{Cell, Document, HAlign, Result, Table};
//!
//! # fn main() -> Result<()> {
//! let mut doc = Document::new();
//! let page = doc.add_page();
//! page.add_text("Inventory", 50.0, 780.0, 18.0)?;
//!
//! let mut table = Table::new(50.0, 750.0, 495.0)?;
//! table.ensure_size(2, 2);
//! table.set_column_widths(&[200.0])?;
//! table.set_cell(0, 0, Cell::new("Item").with_span(1, 2));
//! table.set_text(1, 0, "Bolts");
//! table.set_cell(1, 1, Cell::new("120").with_align(HAlign::Right));
//! page.add_table(table);
//!
//! doc.save("inventory.pdf")?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`document`] - document assembly and object numbering
//! - [`page`] - per-page content builder
//! - [`table`] - table model, snapshot and renderer
//! - [`graphics`] - colours, borders and content-stream operators
//! - [`objects`] - PDF object values
//! - [`writer`] - serialization to bytes

pub mod document;
pub mod error;
pub mod graphics;
pub mod objects;
pub mod page;
pub mod page_size;
pub mod structure;
pub mod table;
pub mod text;
pub mod writer;

pub use document::Document;
pub use error::{PdfError, Result};
pub use graphics::{BorderSide, BorderStyle, Color, ContentStreamBuilder};
pub use objects::{Dictionary, IndirectObject, Object, ObjectId, Stream};
pub use page::{ContentElement, PageContent};
pub use page_size::PageSize;
pub use table::{BorderRendering, Cell, Column, FixedTable, HAlign, Row, Table, VAlign};
pub use text::TextElement;
pub use writer::{PdfWriter, WriterConfig};

#[cfg(feature = "async")]
pub use writer::{AsyncPdfWriter, CancellationFlag};

/// Current version of slate-pdf
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// PDF versions accepted for the header line
pub mod pdf_version {
    pub const SUPPORTED_VERSIONS: &[&str] =
        &["1.0", "1.1", "1.2", "1.3", "1.4", "1.5", "1.6", "1.7"];

    pub fn is_supported(version: &str) -> bool {
        SUPPORTED_VERSIONS.contains(&version)
    }
}
