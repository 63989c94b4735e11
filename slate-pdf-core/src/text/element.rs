use crate::error::{ensure_finite, ensure_non_negative, Result};
use crate::objects::format_real;
use crate::text::DEFAULT_FONT_RESOURCE;

/// A single line of text placed at an absolute baseline position.
#[derive(Debug, Clone, PartialEq)]
pub struct TextElement {
    font_name: String,
    font_size: f64,
    x: f64,
    y: f64,
    text: String,
}

impl TextElement {
    pub fn new(text: impl Into<String>, x: f64, y: f64, font_size: f64) -> Result<Self> {
        Ok(Self {
            font_name: DEFAULT_FONT_RESOURCE.to_string(),
            font_size: ensure_non_negative("font size", font_size)?,
            x: ensure_finite("x", x)?,
            y: ensure_finite("y", y)?,
            text: text.into(),
        })
    }

    /// Uses a different font resource name than the document default.
    pub fn with_font(mut self, font_name: impl Into<String>) -> Self {
        self.font_name = font_name.into();
        self
    }

    pub fn font_name(&self) -> &str {
        &self.font_name
    }

    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Renders the element as one content-stream line:
    /// `BT /F1 12 Tf 50 750 Td (Hello) Tj ET`.
    ///
    /// The text is emitted verbatim; parentheses and backslashes are not
    /// escaped.
    pub fn render(&self) -> String {
        format!(
            "BT /{} {} Tf {} {} Td ({}) Tj ET",
            self.font_name,
            format_real(self.font_size),
            format_real(self.x),
            format_real(self.y),
            self.text
        )
    }
}
