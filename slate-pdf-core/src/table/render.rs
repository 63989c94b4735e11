use crate::graphics::{BorderSide, BorderStyle, Color, ContentStreamBuilder};
use crate::table::{BorderRendering, Cell, FixedTable, HAlign};
use crate::text::{estimate_text_width, DEFAULT_FONT_RESOURCE};

/// Distance from the vertical centre of a cell down to the text baseline.
const BASELINE_DROP: f64 = 4.0;

/// Draws `table` into `ops`.
///
/// Each span anchor gets its own `q ... Q` group: background fill, borders
/// and, when it has text, one text object. Positions covered by a drawn
/// anchor's span are skipped.
pub fn render_table(table: &FixedTable, ops: &mut ContentStreamBuilder) {
    let owners = table.span_owners();

    for row in 0..table.row_count() {
        for col in 0..table.col_count() {
            if owners[row * table.col_count() + col] != (row, col) {
                continue;
            }
            let Some(cell) = table.cell(row, col) else {
                continue;
            };
            let bounds = CellBounds {
                x: table.column_x(col),
                top: table.row_top(row),
                width: table.span_width(col, cell.col_span),
                height: table.row_height() * cell.row_span as f64,
            };
            render_cell(table, cell, &bounds, ops);
        }
    }
}

struct CellBounds {
    x: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl CellBounds {
    fn bottom(&self) -> f64 {
        self.top - self.height
    }

    fn right(&self) -> f64 {
        self.x + self.width
    }
}

fn render_cell(table: &FixedTable, cell: &Cell, b: &CellBounds, ops: &mut ContentStreamBuilder) {
    ops.save_state();

    ops.set_fill_color(cell.background)
        .fill_rect(b.x, b.bottom(), b.width, b.height);

    match table.border_rendering() {
        BorderRendering::LeftOnly => {
            ops.set_stroke_color(cell.left_border.color)
                .set_line_width(cell.left_border.width)
                .stroke_rect(b.x, b.bottom(), b.width, b.height);
        }
        BorderRendering::PerSide => {
            stroke_side(ops, &cell.top_border, Edge::Horizontal(b.top), b.x, b.right());
            stroke_side(ops, &cell.bottom_border, Edge::Horizontal(b.bottom()), b.x, b.right());
            stroke_side(ops, &cell.left_border, Edge::Vertical(b.x), b.bottom(), b.top);
            stroke_side(ops, &cell.right_border, Edge::Vertical(b.right()), b.bottom(), b.top);
        }
    }

    if cell.has_text() {
        let font_size = table.font_size();
        let text_width = estimate_text_width(&cell.text, font_size);
        let text_x = match cell.h_align {
            HAlign::Left => b.x + cell.padding,
            HAlign::Center => b.x + (b.width - text_width) / 2.0,
            HAlign::Right => b.x + b.width - text_width - cell.padding,
        };
        let text_y = b.top - b.height / 2.0 - BASELINE_DROP;

        ops.begin_text()
            .set_fill_color(Color::black())
            .set_font(DEFAULT_FONT_RESOURCE, font_size)
            .move_text(text_x, text_y)
            .show_text(&cell.text)
            .end_text();
    }

    ops.restore_state();
}

enum Edge {
    /// A horizontal line at the given y.
    Horizontal(f64),
    /// A vertical line at the given x.
    Vertical(f64),
}

fn stroke_side(ops: &mut ContentStreamBuilder, side: &BorderSide, edge: Edge, from: f64, to: f64) {
    if !side.is_visible() {
        return;
    }
    ops.set_stroke_color(side.color);

    match side.style {
        BorderStyle::Double => {
            // two strokes of a third of the width, one on each side of the edge
            let thin = side.width / 3.0;
            ops.set_line_width(thin);
            for offset in [-thin, thin] {
                draw_edge(ops, &edge, offset, from, to);
            }
        }
        BorderStyle::Dashed => {
            let dash = (side.width * 3.0).max(1.0);
            ops.set_line_width(side.width).set_dash(&[dash, dash], 0.0);
            draw_edge(ops, &edge, 0.0, from, to);
            ops.set_dash(&[], 0.0);
        }
        BorderStyle::Solid => {
            ops.set_line_width(side.width);
            draw_edge(ops, &edge, 0.0, from, to);
        }
        BorderStyle::None => {}
    }
}

fn draw_edge(ops: &mut ContentStreamBuilder, edge: &Edge, offset: f64, from: f64, to: f64) {
    match *edge {
        Edge::Horizontal(y) => ops.stroke_line(from, y + offset, to, y + offset),
        Edge::Vertical(x) => ops.stroke_line(x + offset, from, x + offset, to),
    };
}
