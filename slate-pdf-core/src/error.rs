use thiserror::Error;

#[derive(Error, Debug)]
pub enum PdfError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{kind} index {index} out of range (len {len})")]
    IndexOutOfRange {
        kind: &'static str,
        index: usize,
        len: usize,
    },

    #[error("Invalid PDF structure: {0}")]
    InvalidStructure(String),

    #[error("Operation cancelled")]
    OperationCancelled,
}

pub type Result<T> = std::result::Result<T, PdfError>;

impl PdfError {
    pub(crate) fn out_of_range(kind: &'static str, index: usize, len: usize) -> Self {
        PdfError::IndexOutOfRange { kind, index, len }
    }
}

/// Rejects negative, NaN and infinite dimensions.
pub(crate) fn ensure_non_negative(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(PdfError::InvalidArgument(format!(
            "{name} must be a finite, non-negative number (got {value})"
        )))
    }
}

pub(crate) fn ensure_finite(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PdfError::InvalidArgument(format!(
            "{name} must be finite (got {value})"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error as IoError, ErrorKind};

    #[test]
    fn test_pdf_error_display() {
        let error = PdfError::InvalidStructure("test message".to_string());
        assert_eq!(error.to_string(), "Invalid PDF structure: test message");
    }

    #[test]
    fn test_out_of_range_display() {
        let error = PdfError::out_of_range("row", 4, 2);
        assert_eq!(error.to_string(), "row index 4 out of range (len 2)");
    }

    #[test]
    fn test_pdf_error_from_io_error() {
        let io_error = IoError::new(ErrorKind::PermissionDenied, "access denied");
        let pdf_error = PdfError::from(io_error);

        match pdf_error {
            PdfError::Io(ref err) => assert_eq!(err.kind(), ErrorKind::PermissionDenied),
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_ensure_non_negative() {
        assert_eq!(ensure_non_negative("width", 0.0).unwrap(), 0.0);
        assert_eq!(ensure_non_negative("width", 12.5).unwrap(), 12.5);
        assert!(matches!(
            ensure_non_negative("width", -1.0),
            Err(PdfError::InvalidArgument(_))
        ));
        assert!(ensure_non_negative("width", f64::NAN).is_err());
        assert!(ensure_non_negative("width", f64::INFINITY).is_err());
    }

    #[test]
    fn test_ensure_finite_allows_negative() {
        assert_eq!(ensure_finite("x", -20.0).unwrap(), -20.0);
        assert!(ensure_finite("x", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_error_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PdfError>();
    }
}
