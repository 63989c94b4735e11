use crate::error::{PdfError, Result};
use crate::objects::{Dictionary, IndirectObject, Object, ObjectBody, ObjectId, Stream};
use crate::page::PageContent;
use crate::page_size::PageSize;
use crate::structure::{Catalog, FontResource, PageNode, PageTree, CATALOG_ID, FONT_ID, PAGES_ID};
use crate::text::DEFAULT_FONT_RESOURCE;
use crate::writer::{PdfWriter, WriterConfig};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

#[cfg(feature = "async")]
use crate::writer::{AsyncPdfWriter, CancellationFlag};
#[cfg(feature = "async")]
use tokio::io::AsyncWrite;

/// A PDF document under construction.
///
/// Objects 1, 2 and 3 are reserved for the catalog, the page tree and the
/// shared font. Each page then takes the next two numbers: its `/Page`
/// dictionary followed by its contents stream.
///
/// # Example
///
/// ```rust
/// use slate_pdf::{Document, Table};
///
/// let mut doc = Document::new();
/// let page = doc.add_page();
/// page.add_text("Quarterly report", 50.0, 780.0, 18.0)?;
///
/// let mut table = Table::new(50.0, 740.0, 495.0)?;
/// table.set_text(0, 0, "Region").set_text(0, 1, "Revenue");
/// page.add_table(table);
///
/// let bytes = doc.to_bytes()?;
/// assert!(bytes.starts_with(b"%PDF-1.7"));
/// # Ok::<(), slate_pdf::PdfError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Document {
    objects: Vec<IndirectObject>,
    catalog: Catalog,
    page_tree: PageTree,
    font: FontResource,
    pages: Vec<PageContent>,
    page_nodes: Vec<PageNode>,
    page_size: Option<PageSize>,
    writer_config: WriterConfig,
}

impl Document {
    /// Creates an empty document whose pages default to A4.
    pub fn new() -> Self {
        Self::with_page_size(Some(PageSize::A4))
    }

    /// Creates an empty document. With `None`, pages carry no `/MediaBox`.
    pub fn with_page_size(page_size: Option<PageSize>) -> Self {
        let catalog = Catalog::new(PAGES_ID);
        let page_tree = PageTree::new();
        let font = FontResource::default();
        let objects = vec![
            IndirectObject::dictionary(CATALOG_ID, catalog.to_dict()),
            IndirectObject::dictionary(PAGES_ID, page_tree.to_dict()),
            IndirectObject::dictionary(FONT_ID, font.to_dict()),
        ];

        Self {
            objects,
            catalog,
            page_tree,
            font,
            pages: Vec::new(),
            page_nodes: Vec::new(),
            page_size,
            writer_config: WriterConfig::default(),
        }
    }

    pub fn page_size(&self) -> Option<PageSize> {
        self.page_size
    }

    /// Size used by pages added after this call.
    pub fn set_page_size(&mut self, page_size: Option<PageSize>) -> &mut Self {
        self.page_size = page_size;
        self
    }

    pub fn base_font(&self) -> &str {
        self.font.base_font()
    }

    pub fn set_base_font(&mut self, base_font: impl Into<String>) -> &mut Self {
        self.font.set_base_font(base_font);
        self
    }

    pub fn pdf_version(&self) -> &str {
        &self.writer_config.pdf_version
    }

    pub fn set_pdf_version(&mut self, version: impl Into<String>) -> &mut Self {
        self.writer_config.pdf_version = version.into();
        self
    }

    pub fn writer_config(&self) -> &WriterConfig {
        &self.writer_config
    }

    /// Appends a page using the document's page size.
    pub fn add_page(&mut self) -> &mut PageContent {
        self.push_page(self.page_size)
    }

    pub fn add_page_with_size(&mut self, size: PageSize) -> &mut PageContent {
        self.push_page(Some(size))
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn pages(&self) -> &[PageContent] {
        &self.pages
    }

    pub fn page(&self, index: usize) -> Result<&PageContent> {
        self.pages
            .get(index)
            .ok_or_else(|| PdfError::out_of_range("page", index, self.pages.len()))
    }

    pub fn page_mut(&mut self, index: usize) -> Result<&mut PageContent> {
        let len = self.pages.len();
        self.pages
            .get_mut(index)
            .ok_or_else(|| PdfError::out_of_range("page", index, len))
    }

    /// Body objects in writing order.
    pub fn objects(&self) -> &[IndirectObject] {
        &self.objects
    }

    pub fn object(&self, id: ObjectId) -> Option<&IndirectObject> {
        self.objects.iter().find(|object| object.id() == id)
    }

    /// Regenerates the structural dictionaries and compiles every page's
    /// contents stream. Writers call this before serializing; calling it
    /// again is harmless.
    pub fn finalize(&mut self) -> Result<()> {
        let catalog = self.catalog.to_dict();
        let page_tree = self.page_tree.to_dict();
        let font = self.font.to_dict();
        store_dict(&mut self.objects, CATALOG_ID, catalog)?;
        store_dict(&mut self.objects, PAGES_ID, page_tree)?;
        store_dict(&mut self.objects, FONT_ID, font)?;

        for (page, node) in self.pages.iter().zip(&self.page_nodes) {
            store_dict(&mut self.objects, page.page_id(), node.to_dict())?;

            let contents = find_object_mut(&mut self.objects, page.contents_id())?
                .as_stream_mut()
                .ok_or_else(|| {
                    PdfError::InvalidStructure(format!(
                        "contents object {} is not a stream",
                        page.contents_id()
                    ))
                })?;
            contents.set_data(page.compile());
        }

        debug!(
            pages = self.pages.len(),
            objects = self.objects.len(),
            "document finalized"
        );
        Ok(())
    }

    /// Writes the complete file to `writer`.
    pub fn write<W: Write>(&mut self, writer: W) -> Result<()> {
        let config = self.writer_config.clone();
        let mut pdf_writer = PdfWriter::with_config(writer, config);
        pdf_writer.write_document(self)
    }

    pub fn to_bytes(&mut self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.write(&mut buffer)?;
        Ok(buffer)
    }

    pub fn save(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        self.write(BufWriter::new(file))?;
        info!(path = %path.display(), pages = self.pages.len(), "saved PDF");
        Ok(())
    }

    #[cfg(feature = "async")]
    pub async fn write_async<W: AsyncWrite + Unpin>(&mut self, writer: W) -> Result<()> {
        let config = self.writer_config.clone();
        let mut pdf_writer = AsyncPdfWriter::with_config(writer, config);
        pdf_writer.write_document(self).await
    }

    /// Like [`Document::write_async`], stopping with
    /// [`PdfError::OperationCancelled`] once `flag` is set.
    #[cfg(feature = "async")]
    pub async fn write_async_cancellable<W: AsyncWrite + Unpin>(
        &mut self,
        writer: W,
        flag: &CancellationFlag,
    ) -> Result<()> {
        let config = self.writer_config.clone();
        let mut pdf_writer =
            AsyncPdfWriter::with_config(writer, config).with_cancellation(flag.clone());
        pdf_writer.write_document(self).await
    }

    #[cfg(feature = "async")]
    pub async fn save_async(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = tokio::fs::File::create(path).await?;
        self.write_async(tokio::io::BufWriter::new(file)).await?;
        info!(path = %path.display(), pages = self.pages.len(), "saved PDF");
        Ok(())
    }

    fn push_page(&mut self, size: Option<PageSize>) -> &mut PageContent {
        let page_id = self.next_object_id();
        let contents_id = ObjectId::new(page_id.number() + 1, 0);
        let node = PageNode::new(PAGES_ID, contents_id, size, DEFAULT_FONT_RESOURCE, FONT_ID);

        self.objects
            .push(IndirectObject::dictionary(page_id, node.to_dict()));
        self.objects
            .push(IndirectObject::stream(contents_id, Stream::empty()));
        self.page_tree.add_kid(page_id);
        self.page_nodes.push(node);

        let page_tree = self.page_tree.to_dict();
        if let Ok(pages) = find_object_mut(&mut self.objects, PAGES_ID) {
            pages.set_body(ObjectBody::Value(Object::Dictionary(page_tree)));
        }

        debug!(
            page = page_id.number(),
            contents = contents_id.number(),
            "added page"
        );
        self.pages.push(PageContent::new(page_id, contents_id));
        let index = self.pages.len() - 1;
        &mut self.pages[index]
    }

    fn next_object_id(&self) -> ObjectId {
        let max = self
            .objects
            .iter()
            .map(|object| object.id().number())
            .max()
            .unwrap_or(0);
        ObjectId::new(max + 1, 0)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

fn find_object_mut(objects: &mut [IndirectObject], id: ObjectId) -> Result<&mut IndirectObject> {
    objects
        .iter_mut()
        .find(|object| object.id() == id)
        .ok_or_else(|| PdfError::InvalidStructure(format!("object {id} is missing")))
}

fn store_dict(objects: &mut [IndirectObject], id: ObjectId, dict: Dictionary) -> Result<()> {
    find_object_mut(objects, id)?.set_body(ObjectBody::Value(Object::Dictionary(dict)));
    Ok(())
}
