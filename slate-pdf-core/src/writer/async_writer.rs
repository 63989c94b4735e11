use crate::document::Document;
use crate::error::{PdfError, Result};
use crate::objects::ObjectId;
use crate::structure::CATALOG_ID;
use crate::writer::{format, CancellationFlag, WriterConfig};
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncWrite, AsyncWriteExt, BufWriter};
use tracing::{debug, trace, warn};

/// Async counterpart of [`PdfWriter`](crate::writer::PdfWriter).
///
/// Produces byte-identical output. When a [`CancellationFlag`] is attached
/// it is checked before each object and before the xref section; a set flag
/// flushes what was written so far and returns
/// [`PdfError::OperationCancelled`].
pub struct AsyncPdfWriter<W: AsyncWrite + Unpin> {
    writer: W,
    config: WriterConfig,
    cancellation: Option<CancellationFlag>,
    xref_positions: Vec<(ObjectId, u64)>,
    current_position: u64,
}

impl AsyncPdfWriter<BufWriter<File>> {
    pub async fn create(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::create(path).await?;
        Ok(Self::new_with_writer(BufWriter::new(file)))
    }
}

impl<W: AsyncWrite + Unpin> AsyncPdfWriter<W> {
    pub fn new_with_writer(writer: W) -> Self {
        Self::with_config(writer, WriterConfig::default())
    }

    pub fn with_config(writer: W, config: WriterConfig) -> Self {
        Self {
            writer,
            config,
            cancellation: None,
            xref_positions: Vec::new(),
            current_position: 0,
        }
    }

    pub fn with_cancellation(mut self, flag: CancellationFlag) -> Self {
        self.cancellation = Some(flag);
        self
    }

    pub async fn write_document(&mut self, document: &mut Document) -> Result<()> {
        document.finalize()?;
        let objects = document.objects();
        format::check_numbering(objects)?;

        // offsets count from this document's header
        self.xref_positions.clear();
        self.current_position = 0;

        self.write_bytes(&format::header(&self.config.pdf_version))
            .await?;

        for object in objects {
            self.stop_if_cancelled().await?;
            let offset = self.current_position;
            self.xref_positions.push((object.id(), offset));
            self.write_bytes(&format::object(object)).await?;
            trace!(object = object.id().number(), offset, "wrote object");
        }

        self.stop_if_cancelled().await?;
        let xref_position = self.current_position;
        let offsets: Vec<u64> = self.xref_positions.iter().map(|(_, pos)| *pos).collect();
        self.write_bytes(&format::xref(&offsets)).await?;
        self.write_bytes(&format::trailer(
            CATALOG_ID,
            objects.len() + 1,
            xref_position,
        ))
        .await?;

        self.writer.flush().await?;
        debug!(
            objects = objects.len(),
            bytes = self.current_position,
            "PDF written"
        );
        Ok(())
    }

    pub fn offsets(&self) -> &[(ObjectId, u64)] {
        &self.xref_positions
    }

    pub fn bytes_written(&self) -> u64 {
        self.current_position
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    async fn stop_if_cancelled(&mut self) -> Result<()> {
        let cancelled = self
            .cancellation
            .as_ref()
            .is_some_and(CancellationFlag::is_cancelled);
        if !cancelled {
            return Ok(());
        }
        self.writer.flush().await?;
        warn!(bytes = self.current_position, "PDF write cancelled");
        Err(PdfError::OperationCancelled)
    }

    async fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        self.writer.write_all(data).await?;
        self.current_position += data.len() as u64;
        Ok(())
    }
}
