//! Table model behaviour through the public API.

use pretty_assertions::assert_eq;
use slate_pdf::graphics::ContentStreamBuilder;
use slate_pdf::table::render_table;
use slate_pdf::{
    BorderRendering, BorderSide, BorderStyle, Cell, Color, HAlign, PdfError, Table,
};

#[test]
fn test_fixed_widths_that_fill_the_table() {
    let mut table = Table::new(0.0, 0.0, 512.0).unwrap();
    table
        .set_column_widths(&[40.0, 210.0, 60.0, 100.0, 102.0])
        .unwrap();
    assert_eq!(
        table.effective_column_widths(),
        vec![40.0, 210.0, 60.0, 100.0, 102.0]
    );
}

#[test]
fn test_auto_columns_share_the_remainder() {
    let mut table = Table::new(0.0, 0.0, 200.0).unwrap();
    table.ensure_size(1, 3);
    table.column_mut(1).unwrap().set_width(Some(50.0)).unwrap();
    assert_eq!(table.effective_column_widths(), vec![75.0, 50.0, 75.0]);
}

#[test]
fn test_get_or_create_cell_on_empty_table() {
    let mut table = Table::new(0.0, 0.0, 100.0).unwrap();
    table.get_or_create_cell(3, 4).set_text("corner");
    assert!(table.row_count() >= 4);
    assert!(table.col_count() >= 5);
    assert_eq!(table.cell(3, 4).unwrap().text, "corner");
}

#[test]
fn test_strict_access_on_empty_table() {
    let table = Table::new(0.0, 0.0, 100.0).unwrap();
    let err = table.cell(0, 0).unwrap_err();
    assert!(matches!(err, PdfError::IndexOutOfRange { .. }));
    assert_eq!(err.to_string(), "row index 0 out of range (len 0)");
}

#[test]
fn test_last_row_span_is_clamped() {
    let mut table = Table::new(0.0, 0.0, 100.0).unwrap();
    table.ensure_size(3, 1);
    table.set_cell(2, 0, Cell::new("tail").with_span(5, 1));
    assert_eq!(table.cell(2, 0).unwrap().row_span, 1);

    table.set_cell(1, 0, Cell::new("mid").with_span(5, 1));
    assert_eq!(table.cell(1, 0).unwrap().row_span, 2);
}

#[test]
fn test_growing_keeps_rows_rectangular() {
    let mut table = Table::new(0.0, 0.0, 300.0).unwrap();
    table.add_row();
    table.add_column();
    table.insert_column(0).unwrap();
    table.add_row();
    table.insert_row(0).unwrap();
    table.remove_column(1).unwrap();

    assert_eq!(table.row_count(), 3);
    assert_eq!(table.col_count(), 1);
    for row in table.rows() {
        assert_eq!(row.len(), table.col_count());
    }
}

#[test]
fn test_trim_then_snapshot() {
    let mut table = Table::new(10.0, 400.0, 240.0).unwrap();
    table.ensure_size(5, 5);
    table.set_text(0, 0, "Name").set_text(0, 1, "Qty").set_text(1, 0, "Nuts");
    table.trim_empty_trailing_rows_and_cols();

    let fixed = table.to_fixed_table();
    assert_eq!((fixed.row_count(), fixed.col_count()), (2, 2));
    assert_eq!(fixed.column_widths(), &[120.0, 120.0]);
    assert_eq!(fixed.cell(1, 1).map(|c| c.text.as_str()), Some(""));
}

#[test]
fn test_render_uniform_grid() {
    let mut table = Table::new(0.0, 100.0, 100.0).unwrap();
    table.ensure_size(2, 2);
    table.set_text(1, 1, "x");

    let mut ops = ContentStreamBuilder::new();
    render_table(&table.to_fixed_table(), &mut ops);
    let out = ops.operations();

    assert_eq!(out.matches("q\n").count(), 4);
    assert_eq!(out.matches("Q\n").count(), 4);
    assert_eq!(out.matches("re f").count(), 4);
    assert_eq!(out.matches("re s").count(), 4);
    assert_eq!(out.matches("BT").count(), 1);
    assert!(out.contains("50 60 50 20 re f"));
    assert!(out.contains("54 66 Td"));
}

#[test]
fn test_left_only_uses_left_border_style() {
    let mut table = Table::new(0.0, 100.0, 100.0).unwrap();
    let mut cell = Cell::new("x");
    cell.left_border = BorderSide::solid(2.0, Color::red());
    cell.top_border = BorderSide::solid(5.0, Color::blue());
    table.set_cell(0, 0, cell);

    let mut ops = ContentStreamBuilder::new();
    render_table(&table.to_fixed_table(), &mut ops);
    let out = ops.operations();
    assert!(out.contains("1 0 0 RG\n2 w\n0 80 100 20 re s\n"));
    assert!(!out.contains("0 0 1 RG"));
}

#[test]
fn test_per_side_skips_hidden_borders() {
    let mut table = Table::new(0.0, 100.0, 100.0).unwrap();
    table.set_border_rendering(BorderRendering::PerSide);
    table.set_cell(
        0,
        0,
        Cell::new("x")
            .with_align(HAlign::Center)
            .with_borders(BorderSide::new(1.0, Color::black(), BorderStyle::None)),
    );

    let mut ops = ContentStreamBuilder::new();
    render_table(&table.to_fixed_table(), &mut ops);
    let out = ops.operations();
    assert!(!out.contains(" S\n"));
    assert!(!out.contains("re s"));
    assert!(out.contains("(x) Tj"));
}
