mod element;

pub use element::TextElement;

/// Resource name under which the document's single font is registered.
pub const DEFAULT_FONT_RESOURCE: &str = "F1";

/// Approximate advance width of `text` at `font_size`.
///
/// Every character is assumed to be half an em wide. This is good enough to
/// centre or right-align short labels with Helvetica; it is not a metric.
pub fn estimate_text_width(text: &str, font_size: f64) -> f64 {
    text.chars().count() as f64 * font_size * 0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_text_width() {
        assert_eq!(estimate_text_width("", 12.0), 0.0);
        assert_eq!(estimate_text_width("Hello", 10.0), 25.0);
        // counts characters, not bytes
        assert_eq!(estimate_text_width("Grüße", 10.0), 25.0);
    }
}
