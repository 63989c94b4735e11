/// An RGB color with components from 0.0 to 1.0.
///
/// Colors are plain values: every cell owns its own copy, so changing one
/// cell's background never affects another.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    /// Creates an RGB color with values clamped to 0.0-1.0.
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: clamp_component(r),
            g: clamp_component(g),
            b: clamp_component(b),
        }
    }

    /// Gray level expressed as an RGB triple.
    pub fn gray(value: f64) -> Self {
        Self::rgb(value, value, value)
    }

    pub const fn black() -> Self {
        Self {
            r: 0.0,
            g: 0.0,
            b: 0.0,
        }
    }

    pub const fn white() -> Self {
        Self {
            r: 1.0,
            g: 1.0,
            b: 1.0,
        }
    }

    pub const fn light_gray() -> Self {
        Self {
            r: 0.9,
            g: 0.9,
            b: 0.9,
        }
    }

    pub fn red() -> Self {
        Self::rgb(1.0, 0.0, 0.0)
    }

    pub fn green() -> Self {
        Self::rgb(0.0, 1.0, 0.0)
    }

    pub fn blue() -> Self {
        Self::rgb(0.0, 0.0, 1.0)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

fn clamp_component(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
