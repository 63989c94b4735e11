//! Standard page sizes in PDF points (1/72 inch).

use crate::error::PdfError;
use crate::objects::Object;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PageSize {
    A0,
    A1,
    A2,
    A3,
    #[default]
    A4,
    A5,
    A6,
    Executive,
    Ledger,
    Legal,
    Letter,
    Tabloid,
    B4,
    B5,
    Statement,
    HalfLetter,
}

impl PageSize {
    pub const ALL: [PageSize; 16] = [
        PageSize::A0,
        PageSize::A1,
        PageSize::A2,
        PageSize::A3,
        PageSize::A4,
        PageSize::A5,
        PageSize::A6,
        PageSize::Executive,
        PageSize::Ledger,
        PageSize::Legal,
        PageSize::Letter,
        PageSize::Tabloid,
        PageSize::B4,
        PageSize::B5,
        PageSize::Statement,
        PageSize::HalfLetter,
    ];

    /// Width and height in points.
    pub fn dimensions(self) -> (f64, f64) {
        match self {
            PageSize::A0 => (2383.94, 3370.39),
            PageSize::A1 => (1683.78, 2383.94),
            PageSize::A2 => (1190.55, 1683.78),
            PageSize::A3 => (841.89, 1190.55),
            PageSize::A4 => (595.28, 841.89),
            PageSize::A5 => (419.53, 595.28),
            PageSize::A6 => (297.64, 419.53),
            PageSize::Executive => (522.0, 756.0),
            PageSize::Ledger => (1224.0, 792.0),
            PageSize::Legal => (612.0, 1008.0),
            PageSize::Letter => (612.0, 792.0),
            PageSize::Tabloid => (792.0, 1224.0),
            PageSize::B4 => (729.0, 1032.0),
            PageSize::B5 => (516.0, 729.0),
            PageSize::Statement | PageSize::HalfLetter => (396.0, 612.0),
        }
    }

    pub fn width(self) -> f64 {
        self.dimensions().0
    }

    pub fn height(self) -> f64 {
        self.dimensions().1
    }

    /// The `[0 0 w h]` array used as a page's `/MediaBox`.
    pub fn media_box(self) -> Object {
        let (width, height) = self.dimensions();
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(width),
            Object::Real(height),
        ])
    }

    pub fn name(self) -> &'static str {
        match self {
            PageSize::A0 => "A0",
            PageSize::A1 => "A1",
            PageSize::A2 => "A2",
            PageSize::A3 => "A3",
            PageSize::A4 => "A4",
            PageSize::A5 => "A5",
            PageSize::A6 => "A6",
            PageSize::Executive => "Executive",
            PageSize::Ledger => "Ledger",
            PageSize::Legal => "Legal",
            PageSize::Letter => "Letter",
            PageSize::Tabloid => "Tabloid",
            PageSize::B4 => "B4",
            PageSize::B5 => "B5",
            PageSize::Statement => "Statement",
            PageSize::HalfLetter => "HalfLetter",
        }
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PageSize {
    type Err = PdfError;

    /// Case-insensitive; dashes and underscores are ignored, so
    /// `half-letter`, `half_letter` and `HalfLetter` are equivalent.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();
        PageSize::ALL
            .into_iter()
            .find(|size| size.name().to_lowercase() == wanted)
            .ok_or_else(|| PdfError::InvalidArgument(format!("unknown page size '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_dimensions() {
        assert_eq!(PageSize::A4.dimensions(), (595.28, 841.89));
        assert_eq!(PageSize::Letter.dimensions(), (612.0, 792.0));
        assert_eq!(PageSize::Ledger.width(), 1224.0);
        assert_eq!(PageSize::Tabloid.height(), 1224.0);
        assert_eq!(
            PageSize::Statement.dimensions(),
            PageSize::HalfLetter.dimensions()
        );
    }

    #[test]
    fn test_default_is_a4() {
        assert_eq!(PageSize::default(), PageSize::A4);
    }

    #[test]
    fn test_media_box_rendering() {
        assert_eq!(PageSize::A4.media_box().to_string(), "[0 0 595.28 841.89]");
        assert_eq!(PageSize::Letter.media_box().to_string(), "[0 0 612 792]");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("a4".parse::<PageSize>().unwrap(), PageSize::A4);
        assert_eq!("LETTER".parse::<PageSize>().unwrap(), PageSize::Letter);
        assert_eq!(
            "half-letter".parse::<PageSize>().unwrap(),
            PageSize::HalfLetter
        );
        assert_eq!("b5".parse::<PageSize>().unwrap(), PageSize::B5);
        assert!(matches!(
            "a7".parse::<PageSize>(),
            Err(PdfError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for size in PageSize::ALL {
            assert_eq!(size.to_string().parse::<PageSize>().unwrap(), size);
        }
    }

    #[test]
    fn test_all_sizes_are_portrait_or_ledger() {
        for size in PageSize::ALL {
            let (w, h) = size.dimensions();
            assert!(w > 0.0 && h > 0.0);
            if size != PageSize::Ledger {
                assert!(h >= w, "{size} should be portrait");
            }
        }
    }
}
