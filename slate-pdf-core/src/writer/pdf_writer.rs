use crate::document::Document;
use crate::error::Result;
use crate::objects::ObjectId;
use crate::structure::CATALOG_ID;
use crate::writer::{format, WriterConfig};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, trace};

/// Writes a document to any [`Write`] sink, tracking the byte offset of
/// every object for the cross-reference table.
pub struct PdfWriter<W: Write> {
    writer: W,
    config: WriterConfig,
    xref_positions: Vec<(ObjectId, u64)>,
    current_position: u64,
}

impl PdfWriter<BufWriter<File>> {
    /// Creates (or truncates) the file at `path`.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new_with_writer(BufWriter::new(file)))
    }
}

impl<W: Write> PdfWriter<W> {
    pub fn new_with_writer(writer: W) -> Self {
        Self::with_config(writer, WriterConfig::default())
    }

    pub fn with_config(writer: W, config: WriterConfig) -> Self {
        Self {
            writer,
            config,
            xref_positions: Vec::new(),
            current_position: 0,
        }
    }

    /// Finalizes `document` and writes header, body, xref and trailer.
    pub fn write_document(&mut self, document: &mut Document) -> Result<()> {
        document.finalize()?;
        let objects = document.objects();
        format::check_numbering(objects)?;

        // offsets count from this document's header
        self.xref_positions.clear();
        self.current_position = 0;

        self.write_bytes(&format::header(&self.config.pdf_version))?;

        for object in objects {
            let offset = self.current_position;
            self.xref_positions.push((object.id(), offset));
            self.write_bytes(&format::object(object))?;
            trace!(object = object.id().number(), offset, "wrote object");
        }

        let xref_position = self.current_position;
        let offsets: Vec<u64> = self.xref_positions.iter().map(|(_, pos)| *pos).collect();
        self.write_bytes(&format::xref(&offsets))?;
        self.write_bytes(&format::trailer(
            CATALOG_ID,
            objects.len() + 1,
            xref_position,
        ))?;

        self.writer.flush()?;
        debug!(
            objects = objects.len(),
            bytes = self.current_position,
            "PDF written"
        );
        Ok(())
    }

    /// `(object, byte offset)` pairs in the order objects were written.
    pub fn offsets(&self) -> &[(ObjectId, u64)] {
        &self.xref_positions
    }

    pub fn bytes_written(&self) -> u64 {
        self.current_position
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        self.writer.write_all(data)?;
        self.current_position += data.len() as u64;
        Ok(())
    }
}
