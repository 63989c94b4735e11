use crate::error::{ensure_non_negative, Result};

/// Column metadata. A width of `None` means the column shares the space
/// left over by fixed-width columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub(super) index: usize,
    pub(super) width: Option<f64>,
}

impl Column {
    pub(super) fn new(index: usize) -> Self {
        Self { index, width: None }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn width(&self) -> Option<f64> {
        self.width
    }

    pub fn is_auto(&self) -> bool {
        self.width.is_none()
    }

    pub fn set_width(&mut self, width: Option<f64>) -> Result<&mut Self> {
        if let Some(w) = width {
            ensure_non_negative("column width", w)?;
        }
        self.width = width;
        Ok(self)
    }
}
