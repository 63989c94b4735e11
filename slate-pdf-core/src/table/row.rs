use crate::error::{PdfError, Result};
use crate::table::Cell;

/// A table row. Its cell count always equals the owning table's column
/// count; only the table changes the length.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub(super) index: usize,
    pub(super) cells: Vec<Cell>,
}

impl Row {
    pub(super) fn new(index: usize, columns: usize) -> Self {
        Self {
            index,
            cells: vec![Cell::default(); columns],
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cell(&self, col: usize) -> Result<&Cell> {
        let len = self.cells.len();
        self.cells
            .get(col)
            .ok_or_else(|| PdfError::out_of_range("column", col, len))
    }

    pub fn cell_mut(&mut self, col: usize) -> Result<&mut Cell> {
        let len = self.cells.len();
        self.cells
            .get_mut(col)
            .ok_or_else(|| PdfError::out_of_range("column", col, len))
    }

    /// True when no cell in the row carries text.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|cell| !cell.has_text())
    }

    pub(super) fn ensure_columns(&mut self, columns: usize) {
        if self.cells.len() < columns {
            self.cells.resize(columns, Cell::default());
        }
    }

    pub(super) fn insert_cell_at(&mut self, col: usize) {
        self.cells.insert(col, Cell::default());
    }

    pub(super) fn remove_cell_at(&mut self, col: usize) {
        self.cells.remove(col);
    }
}
