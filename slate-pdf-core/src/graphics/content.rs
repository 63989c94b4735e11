use crate::graphics::Color;
use crate::objects::format_real;

/// Accumulates content-stream operators, one operation per line.
#[derive(Debug, Clone, Default)]
pub struct ContentStreamBuilder {
    operations: String,
}

impl ContentStreamBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a complete, already formatted operator line.
    pub fn push_line(&mut self, line: &str) -> &mut Self {
        self.operations.push_str(line);
        self.operations.push('\n');
        self
    }

    pub fn save_state(&mut self) -> &mut Self {
        self.push_line("q")
    }

    pub fn restore_state(&mut self) -> &mut Self {
        self.push_line("Q")
    }

    pub fn set_fill_color(&mut self, color: Color) -> &mut Self {
        let line = format!("{} rg", rgb_operands(color));
        self.push_line(&line)
    }

    pub fn set_stroke_color(&mut self, color: Color) -> &mut Self {
        let line = format!("{} RG", rgb_operands(color));
        self.push_line(&line)
    }

    pub fn set_line_width(&mut self, width: f64) -> &mut Self {
        let line = format!("{} w", format_real(width));
        self.push_line(&line)
    }

    /// Sets a dash pattern; an empty slice restores solid lines.
    pub fn set_dash(&mut self, pattern: &[f64], phase: f64) -> &mut Self {
        let dashes: Vec<String> = pattern.iter().map(|v| format_real(*v)).collect();
        let line = format!("[{}] {} d", dashes.join(" "), format_real(phase));
        self.push_line(&line)
    }

    /// Appends a rectangle and fills it: `x y w h re f`.
    pub fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> &mut Self {
        let line = format!("{} re f", rect_operands(x, y, width, height));
        self.push_line(&line)
    }

    /// Appends a rectangle, closes and strokes it: `x y w h re s`.
    pub fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> &mut Self {
        let line = format!("{} re s", rect_operands(x, y, width, height));
        self.push_line(&line)
    }

    /// Strokes a single straight segment.
    pub fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> &mut Self {
        let line = format!(
            "{} {} m {} {} l S",
            format_real(x1),
            format_real(y1),
            format_real(x2),
            format_real(y2)
        );
        self.push_line(&line)
    }

    pub fn begin_text(&mut self) -> &mut Self {
        self.push_line("BT")
    }

    pub fn end_text(&mut self) -> &mut Self {
        self.push_line("ET")
    }

    pub fn set_font(&mut self, resource_name: &str, size: f64) -> &mut Self {
        let line = format!("/{resource_name} {} Tf", format_real(size));
        self.push_line(&line)
    }

    pub fn move_text(&mut self, x: f64, y: f64) -> &mut Self {
        let line = format!("{} {} Td", format_real(x), format_real(y));
        self.push_line(&line)
    }

    /// Shows a literal string. The text is not escaped.
    pub fn show_text(&mut self, text: &str) -> &mut Self {
        let line = format!("({text}) Tj");
        self.push_line(&line)
    }

    pub fn operations(&self) -> &str {
        &self.operations
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.operations.into_bytes()
    }
}

fn rgb_operands(color: Color) -> String {
    format!(
        "{} {} {}",
        format_real(color.r),
        format_real(color.g),
        format_real(color.b)
    )
}

fn rect_operands(x: f64, y: f64, width: f64, height: f64) -> String {
    format!(
        "{} {} {} {}",
        format_real(x),
        format_real(y),
        format_real(width),
        format_real(height)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_state_and_colors() {
        let mut ops = ContentStreamBuilder::new();
        ops.save_state()
            .set_fill_color(Color::light_gray())
            .set_stroke_color(Color::black())
            .set_line_width(0.5)
            .restore_state();

        assert_eq!(ops.operations(), "q\n0.9 0.9 0.9 rg\n0 0 0 RG\n0.5 w\nQ\n");
    }

    #[test]
    fn test_rectangles() {
        let mut ops = ContentStreamBuilder::new();
        ops.fill_rect(50.0, 680.0, 100.0, 20.0)
            .stroke_rect(50.0, 680.0, 100.0, 20.0);

        assert_eq!(
            ops.operations(),
            "50 680 100 20 re f\n50 680 100 20 re s\n"
        );
    }

    #[test]
    fn test_text_operators() {
        let mut ops = ContentStreamBuilder::new();
        ops.begin_text()
            .set_font("F1", 10.0)
            .move_text(54.0, 686.0)
            .show_text("A")
            .end_text();

        assert_eq!(ops.operations(), "BT\n/F1 10 Tf\n54 686 Td\n(A) Tj\nET\n");
    }

    #[test]
    fn test_dash_and_line() {
        let mut ops = ContentStreamBuilder::new();
        ops.set_dash(&[3.0, 2.0], 0.0)
            .stroke_line(0.0, 0.0, 10.5, 0.0)
            .set_dash(&[], 0.0);

        assert_eq!(ops.operations(), "[3 2] 0 d\n0 0 m 10.5 0 l S\n[] 0 d\n");
    }

    #[test]
    fn test_into_bytes() {
        let mut ops = ContentStreamBuilder::new();
        assert!(ops.is_empty());
        ops.save_state();
        assert_eq!(ops.into_bytes(), b"q\n".to_vec());
    }
}
