//! Serialization of a [`Document`](crate::Document) into PDF bytes.
//!
//! Both writers produce identical output: they share the byte formatting in
//! `format` and differ only in how the bytes reach the sink.

#[cfg(feature = "async")]
mod async_writer;
#[cfg(feature = "async")]
mod cancel;
mod config;
mod format;
mod pdf_writer;

#[cfg(feature = "async")]
pub use async_writer::AsyncPdfWriter;
#[cfg(feature = "async")]
pub use cancel::CancellationFlag;
pub use config::WriterConfig;
pub use pdf_writer::PdfWriter;
