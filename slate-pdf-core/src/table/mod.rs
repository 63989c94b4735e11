//! Mutable table model, immutable snapshot and renderer.
//!
//! A [`Table`] is a rectangular grid: every row holds exactly
//! [`Table::col_count`] cells. Cells may span several rows or columns; spans
//! are clamped to the grid whenever its shape changes.

mod cell;
mod column;
mod fixed;
mod render;
mod row;
mod span;

pub use cell::{Cell, HAlign, VAlign};
pub use column::Column;
pub use fixed::FixedTable;
pub use render::render_table;
pub use row::Row;

use crate::error::{ensure_finite, ensure_non_negative, PdfError, Result};

/// How cell borders are stroked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum BorderRendering {
    /// One rectangle stroke per cell using the left side's width and colour.
    #[default]
    LeftOnly,
    /// Each side stroked on its own with its width, colour and style.
    PerSide,
}

pub const DEFAULT_ROW_HEIGHT: f64 = 20.0;
pub const DEFAULT_FONT_SIZE: f64 = 10.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    x: f64,
    y: f64,
    width: f64,
    row_height: f64,
    font_size: f64,
    border_rendering: BorderRendering,
    rows: Vec<Row>,
    columns: Vec<Column>,
}

impl Table {
    /// Creates an empty table whose top-left corner is at `(x, y)`.
    pub fn new(x: f64, y: f64, width: f64) -> Result<Self> {
        Ok(Self {
            x: ensure_finite("x", x)?,
            y: ensure_finite("y", y)?,
            width: ensure_non_negative("table width", width)?,
            row_height: DEFAULT_ROW_HEIGHT,
            font_size: DEFAULT_FONT_SIZE,
            border_rendering: BorderRendering::default(),
            rows: Vec::new(),
            columns: Vec::new(),
        })
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn row_height(&self) -> f64 {
        self.row_height
    }

    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    pub fn border_rendering(&self) -> BorderRendering {
        self.border_rendering
    }

    /// Total height of the grid.
    pub fn height(&self) -> f64 {
        self.row_height * self.rows.len() as f64
    }

    pub fn set_position(&mut self, x: f64, y: f64) -> Result<&mut Self> {
        let x = ensure_finite("x", x)?;
        let y = ensure_finite("y", y)?;
        self.x = x;
        self.y = y;
        Ok(self)
    }

    pub fn set_width(&mut self, width: f64) -> Result<&mut Self> {
        self.width = ensure_non_negative("table width", width)?;
        Ok(self)
    }

    pub fn set_row_height(&mut self, row_height: f64) -> Result<&mut Self> {
        self.row_height = ensure_non_negative("row height", row_height)?;
        Ok(self)
    }

    pub fn set_font_size(&mut self, font_size: f64) -> Result<&mut Self> {
        self.font_size = ensure_non_negative("font size", font_size)?;
        Ok(self)
    }

    pub fn set_border_rendering(&mut self, mode: BorderRendering) -> &mut Self {
        self.border_rendering = mode;
        self
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn col_count(&self) -> usize {
        self.columns.len()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Appends a row of default cells.
    pub fn add_row(&mut self) -> &mut Row {
        let index = self.rows.len();
        self.rows.push(Row::new(index, self.columns.len()));
        self.normalize_spans();
        &mut self.rows[index]
    }

    pub fn insert_row(&mut self, index: usize) -> Result<&mut Row> {
        if index > self.rows.len() {
            return Err(PdfError::out_of_range("row", index, self.rows.len()));
        }
        self.rows.insert(index, Row::new(index, self.columns.len()));
        self.reindex_rows();
        self.normalize_spans();
        Ok(&mut self.rows[index])
    }

    pub fn remove_row(&mut self, index: usize) -> Result<Row> {
        if index >= self.rows.len() {
            return Err(PdfError::out_of_range("row", index, self.rows.len()));
        }
        let removed = self.rows.remove(index);
        self.reindex_rows();
        self.normalize_spans();
        Ok(removed)
    }

    /// Appends a column and a default cell to every existing row.
    pub fn add_column(&mut self) -> &mut Column {
        let index = self.columns.len();
        self.columns.push(Column::new(index));
        for row in &mut self.rows {
            row.ensure_columns(index + 1);
        }
        self.normalize_spans();
        &mut self.columns[index]
    }

    pub fn insert_column(&mut self, index: usize) -> Result<&mut Column> {
        if index > self.columns.len() {
            return Err(PdfError::out_of_range("column", index, self.columns.len()));
        }
        self.columns.insert(index, Column::new(index));
        for row in &mut self.rows {
            row.insert_cell_at(index);
        }
        self.reindex_columns();
        self.normalize_spans();
        Ok(&mut self.columns[index])
    }

    pub fn remove_column(&mut self, index: usize) -> Result<Column> {
        if index >= self.columns.len() {
            return Err(PdfError::out_of_range("column", index, self.columns.len()));
        }
        let removed = self.columns.remove(index);
        for row in &mut self.rows {
            row.remove_cell_at(index);
        }
        self.reindex_columns();
        self.normalize_spans();
        Ok(removed)
    }

    /// Grows the grid to at least `rows x cols`. Never shrinks.
    pub fn ensure_size(&mut self, rows: usize, cols: usize) {
        while self.columns.len() < cols {
            self.add_column();
        }
        while self.rows.len() < rows {
            self.add_row();
        }
    }

    pub fn row(&self, index: usize) -> Result<&Row> {
        self.rows
            .get(index)
            .ok_or_else(|| PdfError::out_of_range("row", index, self.rows.len()))
    }

    pub fn row_mut(&mut self, index: usize) -> Result<&mut Row> {
        let len = self.rows.len();
        self.rows
            .get_mut(index)
            .ok_or_else(|| PdfError::out_of_range("row", index, len))
    }

    pub fn column(&self, index: usize) -> Result<&Column> {
        self.columns
            .get(index)
            .ok_or_else(|| PdfError::out_of_range("column", index, self.columns.len()))
    }

    pub fn column_mut(&mut self, index: usize) -> Result<&mut Column> {
        let len = self.columns.len();
        self.columns
            .get_mut(index)
            .ok_or_else(|| PdfError::out_of_range("column", index, len))
    }

    /// Returns the cell at `(row, col)`, growing the grid when needed.
    pub fn get_or_create_cell(&mut self, row: usize, col: usize) -> &mut Cell {
        self.ensure_size(row + 1, col + 1);
        &mut self.rows[row].cells[col]
    }

    pub fn cell(&self, row: usize, col: usize) -> Result<&Cell> {
        self.check_position(row, col)?;
        Ok(&self.rows[row].cells[col])
    }

    /// Mutable access without growing. Span changes made through this
    /// reference are clamped on the next structural change or on
    /// [`Table::normalize_spans`].
    pub fn cell_mut(&mut self, row: usize, col: usize) -> Result<&mut Cell> {
        self.check_position(row, col)?;
        Ok(&mut self.rows[row].cells[col])
    }

    /// Replaces the cell at `(row, col)`, growing the grid when needed.
    pub fn set_cell(&mut self, row: usize, col: usize, cell: Cell) -> &mut Self {
        *self.get_or_create_cell(row, col) = cell;
        self.normalize_spans();
        self
    }

    pub fn set_text(&mut self, row: usize, col: usize, text: impl Into<String>) -> &mut Self {
        self.get_or_create_cell(row, col).set_text(text);
        self
    }

    /// Assigns `widths[i]` to column `i`, creating columns as needed.
    /// Columns past the end of `widths` keep their current width.
    pub fn set_column_widths(&mut self, widths: &[f64]) -> Result<&mut Self> {
        for width in widths {
            ensure_non_negative("column width", *width)?;
        }
        while self.columns.len() < widths.len() {
            self.add_column();
        }
        for (column, width) in self.columns.iter_mut().zip(widths) {
            column.width = Some(*width);
        }
        Ok(self)
    }

    /// Resolved width of every column.
    ///
    /// Fixed widths are used as-is; the remaining table width is split
    /// evenly between auto columns and never goes below zero.
    pub fn effective_column_widths(&self) -> Vec<f64> {
        let fixed: f64 = self.columns.iter().filter_map(|c| c.width).sum();
        let auto_count = self.columns.iter().filter(|c| c.is_auto()).count();
        let share = if auto_count > 0 {
            (self.width - fixed).max(0.0) / auto_count as f64
        } else {
            0.0
        };
        self.columns
            .iter()
            .map(|c| c.width.unwrap_or(share))
            .collect()
    }

    /// Clamps every span to at least 1 and to the grid bounds.
    pub fn normalize_spans(&mut self) {
        let rows = self.rows.len();
        let cols = self.columns.len();
        for (r, row) in self.rows.iter_mut().enumerate() {
            for (c, cell) in row.cells.iter_mut().enumerate() {
                cell.clamp_spans(r, c, rows, cols);
            }
        }
    }

    /// Whether `(target_row, target_col)` is covered by the span anchored at
    /// `(origin_row, origin_col)`. Out-of-range positions are never covered.
    pub fn is_same_span_cell(
        &self,
        target_row: usize,
        target_col: usize,
        origin_row: usize,
        origin_col: usize,
    ) -> bool {
        if self.check_position(target_row, target_col).is_err()
            || self.check_position(origin_row, origin_col).is_err()
        {
            return false;
        }
        let owner = span::find_owner(target_row, target_col, |r, c| {
            let cell = &self.rows[r].cells[c];
            (cell.row_span, cell.col_span)
        });
        owner == (origin_row, origin_col)
    }

    /// Drops trailing rows, then trailing columns, that contain no text.
    pub fn trim_empty_trailing_rows_and_cols(&mut self) -> &mut Self {
        while self.rows.last().is_some_and(Row::is_blank) {
            self.rows.pop();
        }
        while let Some(last) = self.columns.len().checked_sub(1) {
            if self.rows.iter().any(|row| row.cells[last].has_text()) {
                break;
            }
            self.columns.pop();
            for row in &mut self.rows {
                row.remove_cell_at(last);
            }
        }
        self.normalize_spans();
        self
    }

    /// Takes an immutable snapshot with resolved widths and cloned cells.
    /// Spans in the snapshot are always clamped to the grid.
    pub fn to_fixed_table(&self) -> FixedTable {
        let rows = self.rows.len();
        let cols = self.columns.len();
        let mut cells = Vec::with_capacity(rows * cols);
        for (r, row) in self.rows.iter().enumerate() {
            for (c, cell) in row.cells.iter().enumerate() {
                let mut cell = cell.clone();
                cell.clamp_spans(r, c, rows, cols);
                cells.push(cell);
            }
        }
        FixedTable {
            rows,
            cols,
            x: self.x,
            y: self.y,
            width: self.width,
            row_height: self.row_height,
            font_size: self.font_size,
            border_rendering: self.border_rendering,
            column_widths: self.effective_column_widths(),
            cells,
        }
    }

    fn check_position(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows.len() {
            return Err(PdfError::out_of_range("row", row, self.rows.len()));
        }
        if col >= self.columns.len() {
            return Err(PdfError::out_of_range("column", col, self.columns.len()));
        }
        Ok(())
    }

    fn reindex_rows(&mut self) {
        for (i, row) in self.rows.iter_mut().enumerate() {
            row.index = i;
        }
    }

    fn reindex_columns(&mut self) {
        for (i, column) in self.columns.iter_mut().enumerate() {
            column.index = i;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn table() -> Table {
        Table::new(50.0, 700.0, 512.0).unwrap()
    }

    #[test]
    fn test_new_table_is_empty() {
        let t = table();
        assert_eq!(t.row_count(), 0);
        assert_eq!(t.col_count(), 0);
        assert_eq!(t.row_height(), DEFAULT_ROW_HEIGHT);
        assert_eq!(t.font_size(), DEFAULT_FONT_SIZE);
        assert_eq!(t.border_rendering(), BorderRendering::LeftOnly);
        assert_eq!(t.height(), 0.0);
    }

    #[test]
    fn test_invalid_dimensions_rejected() {
        assert!(Table::new(0.0, 0.0, -1.0).is_err());
        assert!(Table::new(f64::NAN, 0.0, 10.0).is_err());

        let mut t = table();
        assert!(t.set_row_height(-2.0).is_err());
        assert!(t.set_font_size(f64::INFINITY).is_err());
        assert!(t.set_width(-0.5).is_err());
        assert_eq!(t.row_height(), DEFAULT_ROW_HEIGHT);
        assert_eq!(t.width(), 512.0);
    }

    #[test]
    fn test_get_or_create_cell_grows_grid() {
        let mut t = table();
        t.get_or_create_cell(3, 4).set_text("x");
        assert_eq!(t.row_count(), 4);
        assert_eq!(t.col_count(), 5);
        for row in t.rows() {
            assert_eq!(row.len(), 5);
        }
        assert_eq!(t.cell(3, 4).unwrap().text, "x");
    }

    #[test]
    fn test_strict_cell_access_fails_on_empty_table() {
        let t = table();
        assert!(matches!(
            t.cell(0, 0),
            Err(PdfError::IndexOutOfRange { kind: "row", index: 0, len: 0 })
        ));
    }

    #[test]
    fn test_strict_accessors_do_not_grow() {
        let mut t = table();
        t.ensure_size(2, 2);
        assert!(t.cell_mut(2, 0).is_err());
        assert!(matches!(
            t.cell(0, 2),
            Err(PdfError::IndexOutOfRange { kind: "column", .. })
        ));
        assert!(t.row(5).is_err());
        assert!(t.column_mut(2).is_err());
        assert_eq!((t.row_count(), t.col_count()), (2, 2));
    }

    #[test]
    fn test_add_column_extends_rows() {
        let mut t = table();
        t.add_row();
        t.add_row();
        t.add_column();
        t.add_column();
        assert!(t.rows().iter().all(|r| r.len() == 2));
        assert_eq!(t.columns()[1].index(), 1);
    }

    #[test]
    fn test_add_row_uses_column_count() {
        let mut t = table();
        t.add_column();
        t.add_column();
        t.add_column();
        let row = t.add_row();
        assert_eq!(row.len(), 3);
        assert_eq!(row.index(), 0);
    }

    #[test]
    fn test_insert_and_remove_rows_reindex() {
        let mut t = table();
        t.set_text(0, 0, "a").set_text(1, 0, "b");
        t.insert_row(1).unwrap();
        assert_eq!(t.row_count(), 3);
        assert_eq!(t.cell(2, 0).unwrap().text, "b");
        assert_eq!(t.rows()[2].index(), 2);

        let removed = t.remove_row(0).unwrap();
        assert_eq!(removed.cells()[0].text, "a");
        assert_eq!(t.rows()[1].index(), 1);
        assert_eq!(t.cell(1, 0).unwrap().text, "b");

        assert!(t.insert_row(5).is_err());
        assert!(t.remove_row(2).is_err());
    }

    #[test]
    fn test_insert_and_remove_columns() {
        let mut t = table();
        t.set_text(0, 0, "a").set_text(0, 1, "b");
        t.insert_column(0).unwrap();
        assert_eq!(t.col_count(), 3);
        assert_eq!(t.cell(0, 1).unwrap().text, "a");
        assert_eq!(t.columns()[2].index(), 2);

        t.remove_column(1).unwrap();
        assert_eq!(t.cell(0, 1).unwrap().text, "b");
        assert!(t.rows().iter().all(|r| r.len() == 2));
        assert!(t.remove_column(2).is_err());
    }

    #[test]
    fn test_even_width_distribution() {
        let mut t = table();
        t.ensure_size(1, 4);
        assert_eq!(t.effective_column_widths(), vec![128.0; 4]);
    }

    #[test]
    fn test_mixed_width_distribution() {
        let mut t = Table::new(0.0, 0.0, 200.0).unwrap();
        t.ensure_size(1, 3);
        t.column_mut(0).unwrap().set_width(Some(50.0)).unwrap();
        assert_eq!(t.effective_column_widths(), vec![50.0, 75.0, 75.0]);
    }

    #[test]
    fn test_auto_width_never_negative() {
        let mut t = Table::new(0.0, 0.0, 100.0).unwrap();
        t.ensure_size(1, 2);
        t.column_mut(0).unwrap().set_width(Some(150.0)).unwrap();
        assert_eq!(t.effective_column_widths(), vec![150.0, 0.0]);
    }

    #[test]
    fn test_set_column_widths_creates_and_preserves() {
        let mut t = table();
        t.ensure_size(1, 3);
        t.column_mut(2).unwrap().set_width(Some(33.0)).unwrap();
        t.set_column_widths(&[10.0, 20.0]).unwrap();
        assert_eq!(t.col_count(), 3);
        assert_eq!(t.columns()[0].width(), Some(10.0));
        assert_eq!(t.columns()[1].width(), Some(20.0));
        assert_eq!(t.columns()[2].width(), Some(33.0));

        let mut t = table();
        t.set_column_widths(&[100.0, 200.0, 50.0]).unwrap();
        assert_eq!(t.col_count(), 3);
        assert_eq!(t.effective_column_widths(), vec![100.0, 200.0, 50.0]);
    }

    #[test]
    fn test_set_column_widths_rejects_negative_atomically() {
        let mut t = table();
        assert!(t.set_column_widths(&[10.0, -1.0]).is_err());
        assert_eq!(t.col_count(), 0);
    }

    #[test]
    fn test_span_clamping_on_set_cell() {
        let mut t = table();
        t.ensure_size(3, 3);
        t.set_cell(1, 1, Cell::new("big").with_span(5, 5));
        let cell = t.cell(1, 1).unwrap();
        assert_eq!((cell.row_span, cell.col_span), (2, 2));

        t.set_cell(0, 0, Cell::new("zero").with_span(0, 0));
        let cell = t.cell(0, 0).unwrap();
        assert_eq!((cell.row_span, cell.col_span), (1, 1));
    }

    #[test]
    fn test_spans_reclamped_after_removal() {
        let mut t = table();
        t.ensure_size(3, 3);
        t.set_cell(0, 0, Cell::new("a").with_span(3, 3));
        t.remove_row(2).unwrap();
        t.remove_column(2).unwrap();
        let cell = t.cell(0, 0).unwrap();
        assert_eq!((cell.row_span, cell.col_span), (2, 2));
    }

    #[test]
    fn test_spans_set_through_cell_mut_are_normalized_on_demand() {
        let mut t = table();
        t.ensure_size(2, 2);
        t.cell_mut(1, 1).unwrap().col_span = 7;
        t.normalize_spans();
        assert_eq!(t.cell(1, 1).unwrap().col_span, 1);
    }

    #[test]
    fn test_is_same_span_cell() {
        let mut t = table();
        t.ensure_size(3, 3);
        t.set_cell(0, 0, Cell::new("a").with_span(2, 2));

        assert!(t.is_same_span_cell(0, 0, 0, 0));
        assert!(t.is_same_span_cell(1, 1, 0, 0));
        assert!(t.is_same_span_cell(0, 1, 0, 0));
        assert!(!t.is_same_span_cell(2, 2, 0, 0));
        assert!(t.is_same_span_cell(2, 2, 2, 2));
        assert!(!t.is_same_span_cell(1, 1, 1, 1));
        assert!(!t.is_same_span_cell(9, 9, 0, 0));
    }

    #[test]
    fn test_trim_empty_trailing_rows_and_cols() {
        let mut t = table();
        t.ensure_size(4, 4);
        t.set_text(0, 0, "a").set_text(1, 1, "b");
        t.trim_empty_trailing_rows_and_cols();
        assert_eq!((t.row_count(), t.col_count()), (2, 2));

        // interior blanks stay
        let mut t = table();
        t.ensure_size(3, 3);
        t.set_text(2, 2, "z");
        t.trim_empty_trailing_rows_and_cols();
        assert_eq!((t.row_count(), t.col_count()), (3, 3));
    }

    #[test]
    fn test_trim_blank_table_removes_everything() {
        let mut t = table();
        t.ensure_size(2, 2);
        t.trim_empty_trailing_rows_and_cols();
        assert_eq!((t.row_count(), t.col_count()), (0, 0));
    }

    #[test]
    fn test_to_fixed_table_is_a_deep_copy() {
        let mut t = table();
        t.set_text(0, 0, "before");
        let fixed = t.to_fixed_table();
        t.set_text(0, 0, "after");
        t.add_column();

        assert_eq!(fixed.cell(0, 0).map(|c| c.text.as_str()), Some("before"));
        assert_eq!(fixed.col_count(), 1);
        assert_eq!(fixed.column_widths(), &[512.0]);
    }

    #[test]
    fn test_snapshot_clamps_spans_edited_in_place() {
        let mut t = table();
        t.ensure_size(2, 2);
        t.get_or_create_cell(1, 0).row_span = 9;
        let fixed = t.to_fixed_table();
        assert_eq!(fixed.cell(1, 0).map(|c| c.row_span), Some(1));
        // the live table is left as edited until the next normalization
        assert_eq!(t.cell(1, 0).unwrap().row_span, 9);
    }

    #[test]
    fn test_same_span_with_unclamped_live_span() {
        let mut t = table();
        t.ensure_size(2, 2);
        t.cell_mut(1, 0).unwrap().row_span = usize::MAX;
        t.get_or_create_cell(1, 0).col_span = usize::MAX;
        assert!(t.is_same_span_cell(1, 1, 1, 0));
        assert!(!t.is_same_span_cell(1, 1, 1, 1));
    }
}
