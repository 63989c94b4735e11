use crate::graphics::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BorderStyle {
    None,
    #[default]
    Solid,
    Dashed,
    Double,
}

/// One side of a cell border.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BorderSide {
    pub width: f64,
    pub color: Color,
    pub style: BorderStyle,
}

impl BorderSide {
    pub fn new(width: f64, color: Color, style: BorderStyle) -> Self {
        Self {
            width,
            color,
            style,
        }
    }

    pub fn solid(width: f64, color: Color) -> Self {
        Self::new(width, color, BorderStyle::Solid)
    }

    pub fn none() -> Self {
        Self::new(0.0, Color::black(), BorderStyle::None)
    }

    /// Whether this side produces any ink.
    pub fn is_visible(&self) -> bool {
        self.style != BorderStyle::None && self.width > 0.0
    }
}

impl Default for BorderSide {
    fn default() -> Self {
        Self::solid(0.5, Color::black())
    }
}
