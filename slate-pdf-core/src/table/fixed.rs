use crate::table::{span, BorderRendering, Cell};

/// Immutable snapshot of a [`Table`](crate::table::Table) taken at render
/// time. Column widths are already resolved and cells are owned copies.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedTable {
    pub(super) rows: usize,
    pub(super) cols: usize,
    pub(super) x: f64,
    pub(super) y: f64,
    pub(super) width: f64,
    pub(super) row_height: f64,
    pub(super) font_size: f64,
    pub(super) border_rendering: BorderRendering,
    pub(super) column_widths: Vec<f64>,
    /// Row-major, `rows * cols` entries.
    pub(super) cells: Vec<Cell>,
}

impl FixedTable {
    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn col_count(&self) -> usize {
        self.cols
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
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

    pub fn column_widths(&self) -> &[f64] {
        &self.column_widths
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        if row < self.rows && col < self.cols {
            self.cells.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Left edge of column `col`.
    pub fn column_x(&self, col: usize) -> f64 {
        self.x + self.column_widths.iter().take(col).sum::<f64>()
    }

    /// Top edge of row `row`. Rows grow downwards from `y`.
    pub fn row_top(&self, row: usize) -> f64 {
        self.y - self.row_height * row as f64
    }

    /// Width covered by `span` columns starting at `col`.
    pub fn span_width(&self, col: usize, span: usize) -> f64 {
        self.column_widths.iter().skip(col).take(span).sum()
    }

    /// Drawn anchor of every grid position, row-major. Computed once per
    /// call so a renderer can decide anchor-or-covered in constant time.
    pub fn span_owners(&self) -> Vec<(usize, usize)> {
        span::owner_grid(self.rows, self.cols, |r, c| {
            let cell = &self.cells[r * self.cols + c];
            (cell.row_span, cell.col_span)
        })
    }
}
