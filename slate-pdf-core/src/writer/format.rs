//! Byte layout of each section of the file.

use crate::error::{PdfError, Result};
use crate::objects::{IndirectObject, ObjectBody, ObjectId};

pub(crate) fn header(pdf_version: &str) -> Vec<u8> {
    format!("%PDF-{pdf_version}\n").into_bytes()
}

/// `n g obj ... endobj`, with `/Length` taken from the stream payload.
pub(crate) fn object(object: &IndirectObject) -> Vec<u8> {
    let id = object.id();
    let mut out = format!("{} {} obj\n", id.number(), id.generation()).into_bytes();
    match object.body() {
        ObjectBody::Value(value) => {
            out.extend_from_slice(value.to_string().as_bytes());
            out.extend_from_slice(b"\nendobj\n");
        }
        ObjectBody::Stream(stream) => {
            out.extend_from_slice(format!("<< /Length {} >>\nstream\n", stream.len()).as_bytes());
            out.extend_from_slice(stream.data());
            out.extend_from_slice(b"\nendstream\nendobj\n");
        }
    }
    out
}

/// Cross-reference table for objects `1..=offsets.len()` plus the free
/// head entry.
pub(crate) fn xref(offsets: &[u64]) -> Vec<u8> {
    let mut out = format!("xref\n0 {}\n", offsets.len() + 1);
    out.push_str("0000000000 65535 f \n");
    for offset in offsets {
        out.push_str(&format!("{offset:010} 00000 n \n"));
    }
    out.into_bytes()
}

pub(crate) fn trailer(root: ObjectId, size: usize, xref_offset: u64) -> Vec<u8> {
    format!("trailer\n<< /Root {root} /Size {size} >>\nstartxref\n{xref_offset}\n%%EOF\n")
        .into_bytes()
}

/// The xref table is positional, so body objects must be numbered 1..=N in
/// order with generation 0.
pub(crate) fn check_numbering(objects: &[IndirectObject]) -> Result<()> {
    for (i, object) in objects.iter().enumerate() {
        let expected = ObjectId::new(i as u32 + 1, 0);
        if object.id() != expected {
            return Err(PdfError::InvalidStructure(format!(
                "object at position {i} is {} but {expected} was expected",
                object.id()
            )));
        }
    }
    Ok(())
}
