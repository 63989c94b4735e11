use crate::graphics::{BorderSide, Color};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Vertical alignment is stored with the cell; rendering currently places
/// text at the vertical middle regardless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum VAlign {
    Top,
    #[default]
    Middle,
    Bottom,
}

/// A table cell with its own style, spans and four border sides.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Cell {
    pub text: String,
    pub h_align: HAlign,
    pub v_align: VAlign,
    pub background: Color,
    pub padding: f64,
    pub row_span: usize,
    pub col_span: usize,
    pub top_border: BorderSide,
    pub bottom_border: BorderSide,
    pub left_border: BorderSide,
    pub right_border: BorderSide,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            text: String::new(),
            h_align: HAlign::Left,
            v_align: VAlign::Middle,
            background: Color::white(),
            padding: 4.0,
            row_span: 1,
            col_span: 1,
            top_border: BorderSide::default(),
            bottom_border: BorderSide::default(),
            left_border: BorderSide::default(),
            right_border: BorderSide::default(),
        }
    }
}

impl Cell {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_align(mut self, h_align: HAlign) -> Self {
        self.h_align = h_align;
        self
    }

    pub fn with_vertical_align(mut self, v_align: VAlign) -> Self {
        self.v_align = v_align;
        self
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_span(mut self, row_span: usize, col_span: usize) -> Self {
        self.row_span = row_span;
        self.col_span = col_span;
        self
    }

    /// Applies the same border to all four sides.
    pub fn with_borders(mut self, side: BorderSide) -> Self {
        self.set_borders(side);
        self
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.text = text.into();
        self
    }

    pub fn set_borders(&mut self, side: BorderSide) -> &mut Self {
        self.top_border = side;
        self.bottom_border = side;
        self.left_border = side;
        self.right_border = side;
        self
    }

    pub fn has_text(&self) -> bool {
        !self.text.is_empty()
    }

    /// Clamps spans to at least 1 and to the grid bounds seen from `(row, col)`.
    pub(crate) fn clamp_spans(&mut self, row: usize, col: usize, rows: usize, cols: usize) {
        self.row_span = clamp_span(self.row_span, row, rows);
        self.col_span = clamp_span(self.col_span, col, cols);
    }
}

fn clamp_span(span: usize, position: usize, bound: usize) -> usize {
    let available = bound.saturating_sub(position).max(1);
    span.clamp(1, available)
}
