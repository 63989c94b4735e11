//! JSON description of a table for the `table` subcommand.
//!
//! ```json
//! {
//!   "x": 50, "y": 750, "width": 495,
//!   "column_widths": [200],
//!   "cells": [
//!     { "row": 0, "col": 0, "text": "Item", "col_span": 2, "background": { "r": 0.9, "g": 0.9, "b": 0.9 } },
//!     { "row": 1, "col": 1, "text": "42", "h_align": "right" }
//!   ]
//! }
//! ```

use serde::Deserialize;
use slate_pdf::{BorderRendering, Cell, Table};

#[derive(Debug, Deserialize)]
pub struct TableSpec {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub row_height: Option<f64>,
    #[serde(default)]
    pub font_size: Option<f64>,
    #[serde(default)]
    pub column_widths: Vec<f64>,
    #[serde(default)]
    pub border_rendering: BorderRendering,
    #[serde(default)]
    pub cells: Vec<CellSpec>,
}

#[derive(Debug, Deserialize)]
pub struct CellSpec {
    pub row: usize,
    pub col: usize,
    #[serde(flatten)]
    pub cell: Cell,
}

impl TableSpec {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Builds the table, then drops trailing rows and columns without text.
    pub fn build(&self) -> slate_pdf::Result<Table> {
        let mut table = Table::new(self.x, self.y, self.width)?;
        if let Some(row_height) = self.row_height {
            table.set_row_height(row_height)?;
        }
        if let Some(font_size) = self.font_size {
            table.set_font_size(font_size)?;
        }
        table.set_border_rendering(self.border_rendering);
        if !self.column_widths.is_empty() {
            table.set_column_widths(&self.column_widths)?;
        }

        // size the grid first so spans are not clamped against a partial grid
        let rows = self.cells.iter().map(|c| c.row + 1).max().unwrap_or(0);
        let cols = self.cells.iter().map(|c| c.col + 1).max().unwrap_or(0);
        table.ensure_size(rows, cols);
        for spec in &self.cells {
            table.set_cell(spec.row, spec.col, spec.cell.clone());
        }

        table.trim_empty_trailing_rows_and_cols();
        Ok(table)
    }
}
